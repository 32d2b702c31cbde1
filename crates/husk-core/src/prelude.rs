pub use crate::animation::{AnimatedValue, Clock, TestClock, set_clock};
pub use crate::appearance::{SkeletonAppearance, appearance, with_appearance};
pub use crate::color::Color;
pub use crate::error::ViewError;
pub use crate::recoverable::{
    BUTTON_STATE, IMAGE_STATE, Layer, Recoverable, SnapshotState, TEXT_STATE, VIEW_STATE,
};
pub use crate::snapshot::{ButtonViewState, ImageViewState, TextViewState, ViewStateBase};
pub use crate::store::{KeyedStore, StoreKey};
pub use crate::transition::{
    Delayed, Immediate, Manual, Transition, TransitionScheduler, TransitionStyle,
};
pub use crate::tree::ViewTree;
pub use crate::view::{
    ButtonAttrs, ControlState, ImageHandle, TextAttrs, ViewId, ViewKind, ViewNode,
};
