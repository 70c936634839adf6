//! # KEEPSAKE
//!
//! The core of a single-page interactive greeting card, collapsed from a
//! pile of near-duplicate page scripts into one canonical implementation
//! with capability flags.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      CARD SESSION                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  input events ──> Viewer state machine                   │
//! │  burst triggers ──> ConfettiSystem ──> DrawCommands      │
//! │  frame callback ──> advance_frame(dt)                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The two components never share mutable state: the confetti engine owns
//! the drawing surface, the viewer owns slide and gesture state. The host
//! (page glue, deliberately out of scope here) feeds events in and renders
//! what comes out.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod session;

pub use config::{CardConfig, ConfigError};
pub use session::CardSession;

pub use keepsake_confetti::{BurstKind, BurstSeed, DrawCommand, SurfaceMetrics};
pub use keepsake_shared::{Key, PointerEvent, PointerPhase, Viewport};
pub use keepsake_viewer::{GestureTuning, Slide, SlideDeck, ViewerOptions};
