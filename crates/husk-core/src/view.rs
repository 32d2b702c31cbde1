use std::collections::HashMap;
use std::rc::Rc;

use bitflags::bitflags;
use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::animation::AnimatedValue;
use crate::{Color, TransitionStyle, ViewError};

new_key_type! {
    /// Generational handle to a view. Once the view is removed the handle
    /// never resolves again, so it doubles as a weak reference.
    pub struct ViewId;
}

bitflags! {
    /// Interaction state a button title is attached to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ControlState: u8 {
        const HIGHLIGHTED = 1 << 0;
        const DISABLED = 1 << 1;
        const SELECTED = 1 << 2;
        const FOCUSED = 1 << 3;
    }
}

impl ControlState {
    /// Default state: no flags set.
    pub const NORMAL: ControlState = ControlState::empty();
}

/// Shared decoded image. Equality is identity: two handles are equal only
/// when they point at the same image, even if the names match.
#[derive(Clone, Debug)]
pub struct ImageHandle(Rc<str>);

impl ImageHandle {
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextAttrs {
    pub text: String,
    pub text_color: Color,
}

impl Default for TextAttrs {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_color: Color::BLACK,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonAttrs {
    titles: HashMap<ControlState, String>,
}

impl ButtonAttrs {
    pub fn new(title: impl Into<String>) -> Self {
        let mut attrs = Self::default();
        attrs.set_title(Some(title.into()), ControlState::NORMAL);
        attrs
    }

    pub fn title(&self, state: ControlState) -> Option<&str> {
        self.titles.get(&state).map(String::as_str)
    }

    /// `None` clears the title for `state`.
    pub fn set_title(&mut self, title: Option<String>, state: ControlState) {
        match title {
            Some(t) => {
                self.titles.insert(state, t);
            }
            None => {
                self.titles.remove(&state);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Plain,
    Label(TextAttrs),
    TextView(TextAttrs),
    Image(Option<ImageHandle>),
    Button(ButtonAttrs),
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Plain => "view",
            ViewKind::Label(_) => "label",
            ViewKind::TextView(_) => "text view",
            ViewKind::Image(_) => "image view",
            ViewKind::Button(_) => "button",
        }
    }

    pub fn label(text: impl Into<String>, text_color: Color) -> Self {
        ViewKind::Label(TextAttrs {
            text: text.into(),
            text_color,
        })
    }

    pub fn text_view(text: impl Into<String>, text_color: Color) -> Self {
        ViewKind::TextView(TextAttrs {
            text: text.into(),
            text_color,
        })
    }

    pub fn button(title: impl Into<String>) -> Self {
        ViewKind::Button(ButtonAttrs::new(title))
    }
}

/// A live view. Base visual properties are public; kind-specific content is
/// reached through the typed accessors.
#[derive(Debug)]
pub struct ViewNode {
    pub(crate) id: ViewId,
    kind: ViewKind,
    pub corner_radius: f32,
    pub clip_to_bounds: bool,
    pub user_interaction_enabled: bool,
    pub background_color: Color,
    pub hidden: bool,
    /// Whether the skeleton walk visits this view and its subtree.
    pub skeletonable: bool,
    /// Overrides the appearance's transition for restores on this view.
    pub transition: Option<TransitionStyle>,
    pub(crate) parent: Option<ViewId>,
    pub(crate) children: SmallVec<[ViewId; 4]>,
    dissolve: Option<AnimatedValue>,
}

impl ViewNode {
    pub(crate) fn new(id: ViewId, kind: ViewKind) -> Self {
        Self {
            id,
            kind,
            corner_radius: 0.0,
            clip_to_bounds: false,
            user_interaction_enabled: true,
            background_color: Color::CLEAR,
            hidden: false,
            skeletonable: false,
            transition: None,
            parent: None,
            children: SmallVec::new(),
            dissolve: None,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    fn mismatch(&self, expected: &'static str) -> ViewError {
        ViewError::KindMismatch {
            id: self.id,
            expected,
            found: self.kind.name(),
        }
    }

    pub fn text_attrs(&self) -> Option<&TextAttrs> {
        match &self.kind {
            ViewKind::Label(t) | ViewKind::TextView(t) => Some(t),
            _ => None,
        }
    }

    pub fn text_attrs_mut(&mut self) -> Result<&mut TextAttrs, ViewError> {
        let err = self.mismatch("text-capable view");
        match &mut self.kind {
            ViewKind::Label(t) | ViewKind::TextView(t) => Ok(t),
            _ => Err(err),
        }
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text_attrs().map(|t| t.text_color)
    }

    pub fn set_text_color(&mut self, color: Color) -> Result<(), ViewError> {
        self.text_attrs_mut()?.text_color = color;
        Ok(())
    }

    /// Live image of an image view; `None` both when unset and for other kinds.
    pub fn image(&self) -> Option<&ImageHandle> {
        match &self.kind {
            ViewKind::Image(img) => img.as_ref(),
            _ => None,
        }
    }

    pub fn set_image(&mut self, image: Option<ImageHandle>) -> Result<(), ViewError> {
        let err = self.mismatch("image view");
        match &mut self.kind {
            ViewKind::Image(slot) => {
                *slot = image;
                Ok(())
            }
            _ => Err(err),
        }
    }

    pub fn title(&self, state: ControlState) -> Option<&str> {
        match &self.kind {
            ViewKind::Button(b) => b.title(state),
            _ => None,
        }
    }

    pub fn set_title(
        &mut self,
        title: Option<String>,
        state: ControlState,
    ) -> Result<(), ViewError> {
        let err = self.mismatch("button");
        match &mut self.kind {
            ViewKind::Button(b) => {
                b.set_title(title, state);
                Ok(())
            }
            _ => Err(err),
        }
    }

    pub(crate) fn start_dissolve(&mut self, duration: std::time::Duration) {
        let mut fade = AnimatedValue::new(0.0, duration);
        fade.set_target(1.0);
        self.dissolve = Some(fade);
    }

    /// Opacity of the restored content while a cross-dissolve runs.
    pub fn dissolve_progress(&self) -> Option<f32> {
        self.dissolve.as_ref().map(AnimatedValue::get)
    }

    /// Returns `true` while the dissolve is still running.
    pub(crate) fn tick_dissolve(&mut self) -> bool {
        match self.dissolve.as_mut().map(AnimatedValue::update) {
            Some(true) => true,
            Some(false) => {
                self.dissolve = None;
                false
            }
            None => false,
        }
    }
}
