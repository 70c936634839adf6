//! Snap-back animation: the pull retreats to zero on a sharp
//! exponential-out curve when a drag releases below the close threshold.

/// Exponential ease-out: most of the distance is covered early, so the
/// release feels like a snap rather than a drift.
fn exponential_out(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

/// One in-flight retreat of the pull offset back to zero.
#[derive(Debug, Clone, Copy)]
pub struct SnapBack {
    from: f32,
    progress: f32,
    duration: f32,
}

impl SnapBack {
    /// Starts a retreat from the given pull value.
    ///
    /// A non-positive duration completes instantly.
    #[must_use]
    pub fn new(from: f32, duration: f32) -> Self {
        Self {
            from,
            progress: if duration > 0.0 { 0.0 } else { 1.0 },
            duration,
        }
    }

    /// Advances the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }
        self.progress = (self.progress + dt / self.duration).min(1.0);
    }

    /// Current pull value along the retreat.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.progress >= 1.0 {
            0.0
        } else {
            self.from * (1.0 - exponential_out(self.progress))
        }
    }

    /// True once the pull has returned to zero.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retreat_reaches_zero() {
        let mut snap = SnapBack::new(100.0, 0.18);
        for _ in 0..20 {
            snap.advance(0.016);
        }
        assert!(snap.is_complete());
        assert_eq!(snap.value(), 0.0);
    }

    #[test]
    fn test_retreat_is_sharp_early() {
        let mut snap = SnapBack::new(100.0, 0.2);
        snap.advance(0.06); // 30% through
        assert!(snap.value() < 20.0, "value: {}", snap.value());
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let snap = SnapBack::new(80.0, 0.0);
        assert!(snap.is_complete());
        assert_eq!(snap.value(), 0.0);
    }

    #[test]
    fn test_value_decreases_monotonically() {
        let mut snap = SnapBack::new(143.0, 0.18);
        let mut last = snap.value();
        for _ in 0..15 {
            snap.advance(0.016);
            assert!(snap.value() <= last);
            last = snap.value();
        }
    }
}
