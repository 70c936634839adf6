//! A single confetti piece and its per-frame physics.

use keepsake_shared::{Color, Vec2};

/// How far past either horizontal edge a particle may drift before it
/// wraps to the opposite edge, in logical units.
pub const WRAP_MARGIN: f32 = 50.0;

/// Shape of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle.
    Circle {
        /// Radius in logical units.
        radius: f32,
    },
    /// Filled rectangle, drawn centered and rotated.
    Quad {
        /// Width in logical units.
        width: f32,
        /// Height in logical units.
        height: f32,
    },
}

/// One ephemeral confetti piece.
///
/// Particles never interact with each other; the update order within a
/// tick is immaterial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in logical viewport coordinates.
    pub position: Vec2,
    /// Velocity in logical units per frame.
    pub velocity: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Angular velocity in radians per frame.
    pub spin: f32,
    /// Shape to draw.
    pub shape: Shape,
    /// Fill color, assigned per burst kind.
    pub color: Color,
    /// Remaining life in frames; the particle is removed when it hits 0.
    pub life: u32,
}

impl Particle {
    /// Is this particle still alive?
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Advances the particle by one frame.
    ///
    /// Integrates position and rotation, ages the particle by one frame,
    /// then wraps it toroidally once it is more than [`WRAP_MARGIN`] past
    /// either horizontal edge. Vertical travel is unbounded; particles are
    /// expected to fall out of view or expire first.
    pub fn step(&mut self, viewport_width: f32) {
        self.position += self.velocity;
        self.rotation += self.spin;
        self.life = self.life.saturating_sub(1);

        if self.position.x < -WRAP_MARGIN {
            self.position.x = viewport_width + WRAP_MARGIN;
        } else if self.position.x > viewport_width + WRAP_MARGIN {
            self.position.x = -WRAP_MARGIN;
        }
    }
}
