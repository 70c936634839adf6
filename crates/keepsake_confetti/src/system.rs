//! The confetti system: owns the particle collection, the scheduling flag
//! and the surface, and advances everything one frame per `tick`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use keepsake_shared::Viewport;

use crate::burst::{BurstKind, BurstSeed};
use crate::particle::{Particle, Shape};
use crate::surface::{DrawCommand, DrawList, SurfaceMetrics};

/// Counters exposed for hosts, tests and the walkthrough binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BurstStats {
    /// Currently alive particles.
    pub live: usize,
    /// Particles spawned since creation.
    pub spawned_total: u64,
    /// Particles expired since creation.
    pub expired_total: u64,
    /// Ticks executed since creation.
    pub ticks: u64,
}

/// The particle animation engine.
///
/// One instance per page session. There is no global state: tests create
/// isolated systems with their own seeds and surfaces.
///
/// Scheduling is idempotent: `spawn_burst` while a loop is already
/// conceptually running just adds particles to the live collection. The
/// single `animating` flag guarantees at most one loop at a time.
#[derive(Debug)]
pub struct ConfettiSystem {
    particles: Vec<Particle>,
    animating: bool,
    rng: ChaCha8Rng,
    surface: Option<SurfaceMetrics>,
    draw_list: DrawList,
    stats: BurstStats,
}

impl ConfettiSystem {
    /// Creates an engine with no surface attached.
    ///
    /// Without a surface every operation is a no-op; attach one with
    /// [`Self::attach_surface`] once the host has a canvas.
    #[must_use]
    pub fn new(seed: BurstSeed) -> Self {
        Self {
            particles: Vec::new(),
            animating: false,
            rng: ChaCha8Rng::seed_from_u64(seed.value()),
            surface: None,
            draw_list: DrawList::new(),
            stats: BurstStats::default(),
        }
    }

    /// Creates an engine with a surface already attached.
    #[must_use]
    pub fn with_surface(seed: BurstSeed, surface: SurfaceMetrics) -> Self {
        let mut system = Self::new(seed);
        system.surface = Some(surface);
        system
    }

    /// Attaches (or replaces) the drawing surface.
    pub fn attach_surface(&mut self, surface: SurfaceMetrics) {
        self.surface = Some(surface);
    }

    /// Tracks a viewport resize.
    ///
    /// Re-derives the surface's physical dimensions; existing particles
    /// keep their logical positions untouched. No-op without a surface.
    pub fn resize(&mut self, logical: Viewport, scale_factor: f32) {
        if let Some(surface) = &mut self.surface {
            surface.resize(logical, scale_factor);
        }
    }

    /// Spawns `count` particles of the given kind.
    ///
    /// Each particle is independently randomized within the kind's profile.
    /// If the engine is idle this marks the loop as running so the host
    /// starts requesting frames; if a loop is already running the new
    /// particles simply join it. No-op without a surface.
    pub fn spawn_burst(&mut self, count: u32, kind: BurstKind) {
        let Some(surface) = self.surface else {
            return;
        };
        if count == 0 {
            return;
        }

        let viewport = surface.logical();
        let profile = kind.profile();
        self.particles.reserve(count as usize);
        for _ in 0..count {
            self.particles.push(profile.sample(&mut self.rng, viewport));
        }

        self.stats.spawned_total += u64::from(count);
        self.stats.live = self.particles.len();
        self.animating = true;
    }

    /// True while the host should keep requesting animation frames.
    #[must_use]
    pub const fn needs_frame(&self) -> bool {
        self.animating
    }

    /// Advances the simulation by one frame and records its draw commands.
    ///
    /// Order within the tick: clear, integrate every particle, remove the
    /// expired ones, draw the survivors. When the collection empties the
    /// clear recorded by this same tick is the final one and the loop
    /// stops scheduling; the next `spawn_burst` restarts it.
    ///
    /// Calling `tick` while idle returns an empty command list.
    pub fn tick(&mut self) -> &[DrawCommand] {
        self.draw_list.begin_frame();

        let Some(surface) = self.surface else {
            return self.draw_list.commands();
        };
        if !self.animating {
            return self.draw_list.commands();
        }

        self.draw_list.push(DrawCommand::Clear);

        let width = surface.logical().width;
        for particle in &mut self.particles {
            particle.step(width);
        }

        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        self.stats.expired_total += (before - self.particles.len()) as u64;

        for particle in &self.particles {
            self.draw_list.push(match particle.shape {
                Shape::Circle { radius } => DrawCommand::Circle {
                    center: particle.position,
                    radius,
                    color: particle.color,
                },
                Shape::Quad { width, height } => DrawCommand::Quad {
                    center: particle.position,
                    width,
                    height,
                    rotation: particle.rotation,
                    color: particle.color,
                },
            });
        }

        if self.particles.is_empty() {
            self.animating = false;
        }

        self.stats.ticks += 1;
        self.stats.live = self.particles.len();
        self.draw_list.commands()
    }

    /// Read-only view of the live collection, for hosts and tests.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Current counters.
    #[must_use]
    pub const fn stats(&self) -> BurstStats {
        self.stats
    }

    /// The attached surface, if any.
    #[must_use]
    pub const fn surface(&self) -> Option<SurfaceMetrics> {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> ConfettiSystem {
        ConfettiSystem::with_surface(
            BurstSeed::new(42),
            SurfaceMetrics::new(Viewport::new(800.0, 600.0), 2.0),
        )
    }

    #[test]
    fn test_spawn_marks_loop_running_once() {
        let mut sys = system();
        assert!(!sys.needs_frame());

        // Two bursts before any frame executes: one loop, union of particles.
        sys.spawn_burst(5, BurstKind::Confetti);
        sys.spawn_burst(7, BurstKind::Sparkle);
        assert!(sys.needs_frame());
        assert_eq!(sys.particle_count(), 12);

        sys.tick();
        assert_eq!(sys.particle_count(), 12); // min life is 220 frames
    }

    #[test]
    fn test_no_surface_is_a_noop() {
        let mut sys = ConfettiSystem::new(BurstSeed::default());
        sys.spawn_burst(50, BurstKind::Confetti);

        assert!(!sys.needs_frame());
        assert_eq!(sys.particle_count(), 0);
        assert!(sys.tick().is_empty());
    }

    #[test]
    fn test_zero_count_does_not_schedule() {
        let mut sys = system();
        sys.spawn_burst(0, BurstKind::Sparkle);
        assert!(!sys.needs_frame());
    }

    #[test]
    fn test_idle_tick_records_nothing() {
        let mut sys = system();
        assert!(sys.tick().is_empty());
        assert_eq!(sys.stats().ticks, 0);
    }

    #[test]
    fn test_terminal_tick_clears_once_and_stops() {
        let mut sys = system();
        sys.spawn_burst(3, BurstKind::Sparkle);

        // Max life is 340 frames; run until the collection empties.
        let mut last_len = 0;
        for _ in 0..341 {
            if !sys.needs_frame() {
                break;
            }
            last_len = sys.tick().len();
        }

        assert!(!sys.needs_frame());
        assert_eq!(sys.particle_count(), 0);
        // The terminal tick recorded the final clear and no shapes.
        assert_eq!(last_len, 1);
        // Once idle, ticks record nothing at all.
        assert!(sys.tick().is_empty());
    }

    #[test]
    fn test_spawn_restarts_after_termination() {
        let mut sys = system();
        sys.spawn_burst(1, BurstKind::Confetti);
        for _ in 0..341 {
            sys.tick();
        }
        assert!(!sys.needs_frame());

        sys.spawn_burst(4, BurstKind::Confetti);
        assert!(sys.needs_frame());
        assert_eq!(sys.particle_count(), 4);
    }

    #[test]
    fn test_resize_keeps_particle_positions() {
        let mut sys = system();
        sys.spawn_burst(10, BurstKind::Confetti);
        let before: Vec<_> = sys.particles().to_vec();

        sys.resize(Viewport::new(1200.0, 900.0), 1.5);
        assert_eq!(sys.particles(), before.as_slice());
    }

    #[test]
    fn test_same_seed_same_draw_commands() {
        let mut a = system();
        let mut b = system();
        a.spawn_burst(20, BurstKind::Confetti);
        b.spawn_burst(20, BurstKind::Confetti);

        for _ in 0..5 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
