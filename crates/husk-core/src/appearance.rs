//! # Appearance
//!
//! Skeleton-wide defaults live in a thread-local stack, the same way a theme
//! is provided to a subtree of views:
//!
//! ```rust
//! use husk_core::*;
//! use std::time::Duration;
//!
//! let fade = SkeletonAppearance {
//!     transition: TransitionStyle::CrossDissolve(Duration::from_millis(250)),
//! };
//!
//! with_appearance(fade, || {
//!     // every restore scheduled here without a per-view override fades in
//!     assert_eq!(appearance().transition, fade.transition);
//! });
//! assert_eq!(appearance().transition, TransitionStyle::None);
//! ```
//!
//! A view's own `transition` field, when set, wins over the appearance.

use std::cell::RefCell;

use crate::TransitionStyle;

thread_local! {
    static APPEARANCE_STACK: RefCell<Vec<SkeletonAppearance>> = const { RefCell::new(Vec::new()) };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkeletonAppearance {
    /// How restored properties are written back when a view has no override.
    pub transition: TransitionStyle,
}

/// Runs `f` with `appearance` installed; the previous one comes back afterwards,
/// also on unwind.
pub fn with_appearance<R>(appearance: SkeletonAppearance, f: impl FnOnce() -> R) -> R {
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            APPEARANCE_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    APPEARANCE_STACK.with(|st| st.borrow_mut().push(appearance));
    let _guard = Guard;
    f()
}

pub fn appearance() -> SkeletonAppearance {
    APPEARANCE_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}
