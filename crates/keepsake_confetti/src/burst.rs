//! Burst kinds and their sampling profiles.
//!
//! Two presets share one engine: confetti (bigger, denser pieces for the
//! big moments) and sparkles (smaller, lighter pieces for the little ones).
//! A burst kind determines size ranges and palette only; the motion ranges
//! are common to both.

use std::f32::consts::PI;

use keepsake_shared::{Color, Vec2, Viewport};
use rand::Rng;

use crate::particle::{Particle, Shape};

/// Mint green, the card's signature color.
const MINT: Color = Color::hex(0x2EE5_9DFF);
/// Rose pink.
const ROSE: Color = Color::hex(0xFF4D_7DFF);
/// Warm gold.
const GOLD: Color = Color::hex(0xFFD4_79FF);

const CONFETTI_PALETTE: [Color; 4] = [MINT, ROSE, GOLD, Color::WHITE.with_alpha(0.85)];
const SPARKLE_PALETTE: [Color; 4] = [MINT, ROSE, GOLD, Color::WHITE.with_alpha(0.90)];

/// Spawn band above the visible viewport: y uniform in [-140, -20].
const SPAWN_Y: (f32, f32) = (-140.0, -20.0);
/// Horizontal drift: vx uniform in [-1.1, 1.1] logical units per frame.
const VEL_X: (f32, f32) = (-1.1, 1.1);
/// Downward bias: vy uniform in [2.0, 5.6] logical units per frame.
const VEL_Y: (f32, f32) = (2.0, 5.6);
/// Angular velocity: uniform in [-0.09, 0.09] radians per frame.
const SPIN: (f32, f32) = (-0.09, 0.09);
/// Remaining life: uniform integer in [220, 340] frames.
const LIFE: (u32, u32) = (220, 340);

/// Seed for the engine's ChaCha stream.
///
/// Equal seeds yield byte-for-byte equal bursts, which is what makes the
/// range properties in the test suite checkable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BurstSeed(u64);

impl BurstSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Default for BurstSeed {
    fn default() -> Self {
        Self(0x5EED_CAFE_2EE5_9D00)
    }
}

/// The two particle presets sharing one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BurstKind {
    /// Large pieces for the big moments (answer confirmed, promise unlocked).
    Confetti,
    /// Small pieces for the little ones (secret revealed, mood picked).
    Sparkle,
}

impl BurstKind {
    /// Returns the sampling profile for this kind.
    #[must_use]
    pub const fn profile(self) -> &'static BurstProfile {
        match self {
            Self::Confetti => &BurstProfile {
                radius: (3.0, 8.0),
                quad_width: (6.0, 16.0),
                quad_height: (8.0, 22.0),
                circle_chance: 0.25,
                palette: &CONFETTI_PALETTE,
            },
            Self::Sparkle => &BurstProfile {
                radius: (2.0, 5.0),
                quad_width: (2.0, 6.0),
                quad_height: (2.0, 6.0),
                circle_chance: 0.25,
                palette: &SPARKLE_PALETTE,
            },
        }
    }
}

/// Size ranges and palette for one burst kind.
///
/// Ranges are half-open `[min, max)` pairs, matching the uniform sampling
/// below.
#[derive(Debug, Clone, Copy)]
pub struct BurstProfile {
    /// Circle radius range.
    pub radius: (f32, f32),
    /// Rectangle width range.
    pub quad_width: (f32, f32),
    /// Rectangle height range.
    pub quad_height: (f32, f32),
    /// Probability of a circle; the rest are rectangles.
    pub circle_chance: f32,
    /// Fixed palette, chosen uniformly.
    pub palette: &'static [Color],
}

impl BurstProfile {
    /// Samples one particle within this profile's documented ranges.
    ///
    /// Spawn x is uniform across the viewport width; y starts in the
    /// off-screen band above the viewport so pieces rain into view.
    pub fn sample<R: Rng>(&self, rng: &mut R, viewport: Viewport) -> Particle {
        let width = viewport.width.max(1.0);

        let shape = if rng.gen::<f32>() < self.circle_chance {
            Shape::Circle {
                radius: rng.gen_range(self.radius.0..self.radius.1),
            }
        } else {
            Shape::Quad {
                width: rng.gen_range(self.quad_width.0..self.quad_width.1),
                height: rng.gen_range(self.quad_height.0..self.quad_height.1),
            }
        };

        Particle {
            position: Vec2::new(
                rng.gen_range(0.0..width),
                rng.gen_range(SPAWN_Y.0..=SPAWN_Y.1),
            ),
            velocity: Vec2::new(
                rng.gen_range(VEL_X.0..=VEL_X.1),
                rng.gen_range(VEL_Y.0..=VEL_Y.1),
            ),
            rotation: rng.gen_range(0.0..PI),
            spin: rng.gen_range(SPIN.0..=SPIN.1),
            shape,
            color: self.palette[rng.gen_range(0..self.palette.len())],
            life: rng.gen_range(LIFE.0..=LIFE.1),
        }
    }
}
