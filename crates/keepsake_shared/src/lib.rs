//! # KEEPSAKE Shared
//!
//! Common types used by the confetti engine and the image viewer.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - any drawing or GPU crate
//! - any randomness crate
//! - any I/O
//!
//! If a type needs one of those, it belongs in the crate that owns the
//! concern, not here.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod events;
pub mod math;

pub use color::Color;
pub use events::{Key, PointerEvent, PointerPhase};
pub use math::{Vec2, Viewport};
