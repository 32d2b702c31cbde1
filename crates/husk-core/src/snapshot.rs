//! Snapshots of a view's appearance before a skeleton covers it.
//!
//! One value object per layer; a view carries the base snapshot plus the one
//! matching its kind. They are shared behind `Rc` and never mutated.

use crate::{Color, ControlState, ImageHandle, ViewKind, ViewNode};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewStateBase {
    pub corner_radius: f32,
    pub clip_to_bounds: bool,
    pub user_interaction_enabled: bool,
    pub background_color: Color,
    pub hidden: bool,
}

impl ViewStateBase {
    pub fn capture(view: &ViewNode) -> Self {
        Self {
            corner_radius: view.corner_radius,
            clip_to_bounds: view.clip_to_bounds,
            user_interaction_enabled: view.user_interaction_enabled,
            background_color: view.background_color,
            hidden: view.hidden,
        }
    }
}

/// Shared by labels and text views.
#[derive(Clone, Debug, PartialEq)]
pub struct TextViewState {
    pub user_interactions_enabled: bool,
    pub text_color: Color,
}

impl TextViewState {
    pub fn capture(view: &ViewNode) -> Option<Self> {
        let attrs = view.text_attrs()?;
        Some(Self {
            user_interactions_enabled: view.user_interaction_enabled,
            text_color: attrs.text_color,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageViewState {
    pub image: Option<ImageHandle>,
}

impl ImageViewState {
    pub fn capture(view: &ViewNode) -> Option<Self> {
        match view.kind() {
            ViewKind::Image(image) => Some(Self {
                image: image.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonViewState {
    /// Title for `ControlState::NORMAL` only.
    pub title: Option<String>,
}

impl ButtonViewState {
    pub fn capture(view: &ViewNode) -> Option<Self> {
        match view.kind() {
            ViewKind::Button(b) => Some(Self {
                title: b.title(ControlState::NORMAL).map(str::to_owned),
            }),
            _ => None,
        }
    }
}
