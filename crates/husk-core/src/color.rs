#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// The "no color" value. A skeleton leaves backgrounds in this state, and
    /// a non-forced restore treats it as erased.
    pub const CLEAR: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const RED: Color = Color(255, 0, 0, 255);
    pub const BLUE: Color = Color(0, 0, 255, 255);

    pub fn is_clear(self) -> bool {
        self == Color::CLEAR
    }
}
