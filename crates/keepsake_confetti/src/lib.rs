//! # KEEPSAKE Confetti
//!
//! The particle animation engine behind every celebratory moment on the
//! card: confirmed answers, revealed secrets, a slider pushed to 100%.
//!
//! ## Architecture
//!
//! ```text
//! spawn_burst(count, kind) ──> Vec<Particle> ──> tick() per frame
//!        │                                          │
//!        └── sets the single `animating` flag       ├── integrate + age
//!            (idempotent scheduling)                ├── remove expired
//!                                                   └── record DrawCommands
//! ```
//!
//! The host drives the loop: while [`ConfettiSystem::needs_frame`] is true
//! it requests one animation frame and calls [`ConfettiSystem::tick`],
//! submitting the returned commands to its real canvas. When the last
//! particle expires the engine records one final clear and stops asking
//! for frames.
//!
//! ## Determinism
//!
//! All randomness flows through one ChaCha stream seeded from a
//! [`BurstSeed`]. Same seed, same calls = same confetti, always.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod burst;
pub mod particle;
pub mod surface;
pub mod system;

pub use burst::{BurstKind, BurstProfile, BurstSeed};
pub use particle::{Particle, Shape};
pub use surface::{DrawCommand, DrawList, SurfaceMetrics};
pub use system::{BurstStats, ConfettiSystem};
