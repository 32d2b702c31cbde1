//! # Husk core
//!
//! Views remember how they looked before a loading skeleton covered them and
//! get that look back once the skeleton is gone.
//!
//! - `ViewTree` owns live views (`ViewNode`), addressed by generational
//!   `ViewId`s.
//! - `KeyedStore` attaches typed values to a view for as long as it lives.
//! - `Recoverable` saves a view's appearance into the store and schedules
//!   it back through a `TransitionScheduler`.
//!
//! ```rust
//! use husk_core::*;
//!
//! let mut tree = ViewTree::new();
//! let card = tree.insert(ViewKind::Plain);
//! tree.get_mut(card).unwrap().background_color = Color::WHITE;
//!
//! tree.save_view_state(card);
//! assert_eq!(tree.snapshot_state(card), SnapshotState::Saved);
//!
//! // skeleton on
//! tree.get_mut(card).unwrap().background_color = Color::CLEAR;
//!
//! // skeleton off
//! tree.recover_view_state(card, false);
//! assert_eq!(tree.get(card).unwrap().background_color, Color::WHITE);
//! ```
//!
//! Transitions default to running as soon as they are scheduled. Use
//! `ViewTree::with_scheduler(Delayed::new(..))` or `Manual` to defer them,
//! then drive them with `pump_transitions` / `flush_transitions`. A view
//! removed in the meantime simply misses its transition.

pub mod animation;
pub mod appearance;
pub mod color;
pub mod error;
pub mod prelude;
pub mod recoverable;
pub mod snapshot;
pub mod store;
pub mod transition;
pub mod tree;
pub mod view;


pub use appearance::*;
pub use color::*;
pub use error::*;
pub use prelude::*;
pub use recoverable::*;
pub use snapshot::*;
pub use store::*;
pub use transition::*;
pub use tree::*;
pub use view::*;
