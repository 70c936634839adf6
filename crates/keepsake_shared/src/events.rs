//! Input events delivered by the host environment.
//!
//! The host is responsible for pointer capture: once a gesture starts, all
//! subsequent moves must be delivered here even when the pointer leaves the
//! element's bounds. `Up` and `Cancel` are the guaranteed terminal phases
//! of a captured pointer.

use crate::math::Vec2;

/// Phase of a pointer event within one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer made contact.
    Down,
    /// Pointer moved while in contact.
    Move,
    /// Pointer lifted - terminal.
    Up,
    /// Capture lost (OS gesture, element removal) - terminal, never commits.
    Cancel,
}

/// A single pointer event in logical viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position at the time of the event.
    pub position: Vec2,
    /// Gesture phase.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Creates a pointer-down event.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            phase: PointerPhase::Down,
        }
    }

    /// Creates a pointer-move event.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            phase: PointerPhase::Move,
        }
    }

    /// Creates a pointer-up event.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            phase: PointerPhase::Up,
        }
    }

    /// Creates a pointer-cancel event.
    #[must_use]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            phase: PointerPhase::Cancel,
        }
    }
}

/// Keyboard keys the card reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape - closes the viewer.
    Escape,
    /// Left arrow - previous slide.
    ArrowLeft,
    /// Right arrow - next slide.
    ArrowRight,
}
