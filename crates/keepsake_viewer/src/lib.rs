//! # KEEPSAKE Viewer
//!
//! The modal image viewer: one slide at a time from an ordered deck,
//! drag-down-to-close with resistance, swipe-to-navigate, keyboard
//! control. The viewer owns slide and gesture state exclusively; it never
//! draws. Hosts read [`Viewer::active_slide`] and [`Viewer::pull`] each
//! frame and render however they like.
//!
//! ## State machine
//!
//! ```text
//!           open_at / open_by_source
//!  Closed ─────────────────────────────> Open
//!    ^                                     │ next / previous (wraps)
//!    │   close / Escape / pull > 140       │ pointer gestures
//!    └─────────────────────────────────────┘
//! ```
//!
//! All operations are fire-and-forget UI commands: invalid ones (empty
//! deck, closed-state navigation) are silent no-ops, never errors.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod gesture;
pub mod slide;
pub mod snapback;
pub mod viewer;

pub use gesture::{Axis, DragTracker, GestureOutcome, GestureTuning};
pub use slide::{Slide, SlideDeck};
pub use snapback::SnapBack;
pub use viewer::{Viewer, ViewerOptions, ViewerState};
