//! Pointer gesture tracking: drag-to-close pull and swipe classification.
//!
//! Classification is decided continuously during the gesture, not latched
//! at its start: every move re-compares |dx| against |dy| scaled by the
//! axis bias, so a drag that starts vertical and turns sideways becomes a
//! swipe (and releases its pull) mid-gesture.

use keepsake_shared::Vec2;
use serde::Deserialize;

/// Tuned gesture constants.
///
/// The damping factor, clamp and thresholds are empirically tuned UX
/// values carried over for behavioral parity. They are configuration, not
/// law: the card config may override any of them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureTuning {
    /// Damping applied to the raw downward delta to produce the pull.
    pub pull_damping: f32,
    /// Clamp on the raw downward delta, in logical units.
    pub pull_max: f32,
    /// Pull above which releasing the drag closes the viewer.
    pub close_threshold: f32,
    /// |dx| above which a horizontal release navigates.
    pub swipe_threshold: f32,
    /// How much |dx| must dominate |dy| to classify as horizontal.
    pub axis_bias: f32,
    /// Minimum |dx| before a horizontal classification is even considered.
    pub intent_min: f32,
    /// Snap-back animation duration, in seconds.
    pub snap_duration: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            pull_damping: 0.65,
            pull_max: 220.0,
            close_threshold: 140.0,
            swipe_threshold: 50.0,
            axis_bias: 1.2,
            intent_min: 14.0,
            snap_duration: 0.18,
        }
    }
}

/// Current classification of an in-flight gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Sideways swipe; suppresses the close pull.
    Horizontal,
    /// Downward drag toward close (the default until proven horizontal).
    Vertical,
}

/// What a finished gesture asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do.
    None,
    /// Animate the pull back to zero, stay open.
    SnapBack {
        /// Pull value the retreat starts from.
        from: f32,
    },
    /// Pull passed the close threshold.
    Close,
    /// Swipe left: advance to the next slide.
    Next,
    /// Swipe right: go to the previous slide.
    Previous,
}

/// Tracks one pointer gesture from down to up/cancel.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    active: bool,
    start: Vec2,
    current: Vec2,
    pull: f32,
    axis: Option<Axis>,
}

impl DragTracker {
    /// Arms the tracker at the pointer-down position.
    pub fn begin(&mut self, at: Vec2) {
        self.active = true;
        self.start = at;
        self.current = at;
        self.pull = 0.0;
        self.axis = None;
    }

    /// Feeds a pointer move. No-op unless armed.
    ///
    /// `allow_horizontal` gates swipe classification (single-slide decks
    /// have nothing to navigate to).
    pub fn update(&mut self, at: Vec2, tuning: &GestureTuning, allow_horizontal: bool) {
        if !self.active {
            return;
        }
        self.current = at;

        let delta = self.current - self.start;
        let horizontal = allow_horizontal
            && delta.x.abs() > delta.y.abs() * tuning.axis_bias
            && delta.x.abs() > tuning.intent_min;
        self.axis = Some(if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        });

        // Upward drags and sideways swipes produce no pull; downward drags
        // are clamped, then damped into the visual offset.
        self.pull = if horizontal || delta.y <= 0.0 {
            0.0
        } else {
            delta.y.min(tuning.pull_max) * tuning.pull_damping
        };
    }

    /// Resolves the gesture on pointer-up and disarms the tracker.
    ///
    /// A dominant horizontal displacement wins over any accumulated pull.
    pub fn finish(&mut self, tuning: &GestureTuning, allow_horizontal: bool) -> GestureOutcome {
        if !self.active {
            return GestureOutcome::None;
        }

        let delta = self.current - self.start;
        let pull = self.pull;
        self.active = false;
        self.pull = 0.0;
        self.axis = None;

        let swiped = allow_horizontal
            && delta.x.abs() > tuning.swipe_threshold
            && delta.x.abs() > delta.y.abs() * tuning.axis_bias;

        if swiped {
            if delta.x < 0.0 {
                GestureOutcome::Next
            } else {
                GestureOutcome::Previous
            }
        } else if pull > tuning.close_threshold {
            GestureOutcome::Close
        } else if pull > 0.0 {
            GestureOutcome::SnapBack { from: pull }
        } else {
            GestureOutcome::None
        }
    }

    /// Resolves a pointer-cancel: always snap back, never commit.
    pub fn cancel(&mut self) -> GestureOutcome {
        if !self.active {
            return GestureOutcome::None;
        }

        let pull = self.pull;
        self.active = false;
        self.pull = 0.0;
        self.axis = None;

        if pull > 0.0 {
            GestureOutcome::SnapBack { from: pull }
        } else {
            GestureOutcome::None
        }
    }

    /// True while a gesture is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Current damped pull offset.
    #[must_use]
    pub const fn pull(&self) -> f32 {
        self.pull
    }

    /// Current classification, if any move has been seen.
    #[must_use]
    pub const fn axis(&self) -> Option<Axis> {
        self.axis
    }
}
