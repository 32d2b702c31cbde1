//! # Saving and recovering view state
//!
//! Before a skeleton covers a view, its appearance is saved; once the
//! skeleton goes away, it is recovered.
//!
//! ```rust
//! use husk_core::*;
//!
//! let mut tree = ViewTree::new();
//! let label = tree.insert(ViewKind::label("Hello", Color::BLACK));
//!
//! tree.save_view_state(label);
//! // the skeleton paints over the label
//! tree.get_mut(label).unwrap().set_text_color(Color::CLEAR).unwrap();
//!
//! tree.recover_view_state(label, false);
//! assert_eq!(tree.get(label).unwrap().text_color(), Some(Color::BLACK));
//! ```
//!
//! A view is processed as an ordered list of layers: the base layer first,
//! then the one matching its kind. Each layer owns one store slot.
//!
//! Recovery writes some properties back unconditionally (corner radius,
//! clipping, interaction). Content properties are only written when the live
//! value looks erased or the caller forces it:
//!
//! | property        | written when                       |
//! |-----------------|------------------------------------|
//! | background      | live is `Color::CLEAR`, or forced  |
//! | hidden          | differs from stored, or forced     |
//! | text color      | differs from stored, or forced     |
//! | image           | live is `None`, or forced          |
//! | button title    | live normal title is `None`        |
//!
//! The button title ignores `forced`.
//!
//! Conditions are checked when the transition runs, against the live view
//! at that moment.

use smallvec::{SmallVec, smallvec};

use crate::snapshot::{ButtonViewState, ImageViewState, TextViewState, ViewStateBase};
use crate::transition::{Transition, TransitionStyle};
use crate::{
    ControlState, KeyedStore, StoreKey, ViewId, ViewKind, ViewNode, ViewTree, appearance,
};

pub const VIEW_STATE: StoreKey<ViewStateBase> = StoreKey::new("husk.view_state");
/// Labels and text views share this slot.
pub const TEXT_STATE: StoreKey<TextViewState> = StoreKey::new("husk.text_state");
pub const IMAGE_STATE: StoreKey<ImageViewState> = StoreKey::new("husk.image_state");
pub const BUTTON_STATE: StoreKey<ButtonViewState> = StoreKey::new("husk.button_state");

pub trait Recoverable {
    /// Captures the live appearance of `id`, replacing any earlier snapshot.
    fn save_view_state(&mut self, id: ViewId);
    /// Schedules the stored appearance back onto `id`. No-op if never saved.
    fn recover_view_state(&mut self, id: ViewId, forced: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Base,
    Text,
    Image,
    Button,
}

impl Layer {
    /// Steps for a kind, base first.
    pub fn for_kind(kind: &ViewKind) -> SmallVec<[Layer; 2]> {
        let extra = match kind {
            ViewKind::Plain => None,
            ViewKind::Label(_) | ViewKind::TextView(_) => Some(Layer::Text),
            ViewKind::Image(_) => Some(Layer::Image),
            ViewKind::Button(_) => Some(Layer::Button),
        };
        let mut layers: SmallVec<[Layer; 2]> = smallvec![Layer::Base];
        layers.extend(extra);
        layers
    }

    fn save(self, view: &ViewNode, store: &mut KeyedStore) {
        let id = view.id();
        match self {
            Layer::Base => store.set(id, &VIEW_STATE, Some(ViewStateBase::capture(view))),
            Layer::Text => store.set(id, &TEXT_STATE, TextViewState::capture(view)),
            Layer::Image => store.set(id, &IMAGE_STATE, ImageViewState::capture(view)),
            Layer::Button => store.set(id, &BUTTON_STATE, ButtonViewState::capture(view)),
        }
    }

    fn restore(
        self,
        id: ViewId,
        style: TransitionStyle,
        store: &KeyedStore,
        forced: bool,
    ) -> Option<Transition> {
        let transition = match self {
            Layer::Base => {
                let state = store.get(id, &VIEW_STATE)?;
                Transition::new(id, style, self, move |view: &mut ViewNode| {
                    view.corner_radius = state.corner_radius;
                    view.clip_to_bounds = state.clip_to_bounds;
                    view.user_interaction_enabled = state.user_interaction_enabled;

                    if view.background_color.is_clear() || forced {
                        view.background_color = state.background_color;
                    }
                    if state.hidden != view.hidden || forced {
                        view.hidden = state.hidden;
                    }
                })
            }
            Layer::Text => {
                let state = store.get(id, &TEXT_STATE)?;
                Transition::new(id, style, self, move |view: &mut ViewNode| {
                    view.user_interaction_enabled = state.user_interactions_enabled;

                    if let Ok(attrs) = view.text_attrs_mut()
                        && (attrs.text_color != state.text_color || forced)
                    {
                        attrs.text_color = state.text_color;
                    }
                })
            }
            Layer::Image => {
                let state = store.get(id, &IMAGE_STATE)?;
                Transition::new(id, style, self, move |view: &mut ViewNode| {
                    if (view.image().is_none() || forced)
                        && let Err(e) = view.set_image(state.image.clone())
                    {
                        log::warn!("recover: {e}");
                    }
                })
            }
            Layer::Button => {
                let state = store.get(id, &BUTTON_STATE)?;
                Transition::new(id, style, self, move |view: &mut ViewNode| {
                    // Titles ignore `forced`; only a missing normal title is refilled.
                    if view.title(ControlState::NORMAL).is_none()
                        && let Err(e) = view.set_title(state.title.clone(), ControlState::NORMAL)
                    {
                        log::warn!("recover: {e}");
                    }
                })
            }
        };
        Some(transition)
    }
}

/// Whether a view has been saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotState {
    Pristine,
    Saved,
}

impl Recoverable for ViewTree {
    fn save_view_state(&mut self, id: ViewId) {
        let Some((view, store)) = self.view_and_store_mut(id) else {
            log::trace!("save: {:?} is gone", id);
            return;
        };
        let layers = Layer::for_kind(view.kind());
        for layer in &layers {
            layer.save(view, store);
        }
        log::debug!(
            "save: {:?} ({}) layers {:?}",
            id,
            view.kind().name(),
            layers
        );
    }

    fn recover_view_state(&mut self, id: ViewId, forced: bool) {
        let Some(view) = self.get(id) else {
            log::trace!("recover: {:?} is gone", id);
            return;
        };
        let style = view.transition.unwrap_or_else(|| appearance().transition);
        let layers = Layer::for_kind(view.kind());

        let mut scheduled = 0;
        for layer in layers {
            match layer.restore(id, style, self.store(), forced) {
                Some(t) => {
                    self.schedule(t);
                    scheduled += 1;
                }
                None => {
                    log::trace!("recover: no {:?} snapshot on {:?}", layer, id)
                }
            }
        }
        log::debug!(
            "recover: {:?} forced={} scheduled {}",
            id,
            forced,
            scheduled
        );

        self.pump_transitions();
    }
}

impl ViewTree {
    pub fn snapshot_state(&self, id: ViewId) -> SnapshotState {
        if self.store().contains(id, &VIEW_STATE) {
            SnapshotState::Saved
        } else {
            SnapshotState::Pristine
        }
    }

    /// Saves every skeletonable view under `root`, root included. Descends
    /// only through skeletonable views. Returns how many were saved.
    pub fn save_view_state_recursive(&mut self, root: ViewId) -> usize {
        let targets = self.skeletonable_subtree(root);
        for id in &targets {
            self.save_view_state(*id);
        }
        targets.len()
    }

    /// Recovers every skeletonable view under `root`, in the same order as
    /// `save_view_state_recursive`.
    pub fn recover_view_state_recursive(&mut self, root: ViewId, forced: bool) -> usize {
        let targets = self.skeletonable_subtree(root);
        for id in &targets {
            self.recover_view_state(*id, forced);
        }
        targets.len()
    }

    /// Depth-first, parents before children, children in insertion order.
    fn skeletonable_subtree(&self, root: ViewId) -> Vec<ViewId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(view) = self.get(id) else { continue };
            if !view.skeletonable {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }
}
