//! Particle lifecycle properties, checked against an isolated engine.

use keepsake_confetti::{BurstKind, BurstSeed, ConfettiSystem, SurfaceMetrics};
use keepsake_shared::Viewport;

fn engine(seed: u64) -> ConfettiSystem {
    ConfettiSystem::with_surface(
        BurstSeed::new(seed),
        SurfaceMetrics::new(Viewport::new(800.0, 600.0), 2.0),
    )
}

/// After N ticks with no new spawns, every surviving particle has aged by
/// exactly N frames, and everything that reached zero is gone.
#[test]
fn life_decrements_by_exactly_one_per_tick() {
    let mut sys = engine(9);
    sys.spawn_burst(200, BurstKind::Confetti);

    let initial: Vec<u32> = sys.particles().iter().map(|p| p.life).collect();

    const N: u32 = 250; // between min life (220) and max life (340)
    for _ in 0..N {
        sys.tick();
    }

    // Survivors are exactly the particles whose initial life exceeded N,
    // in their original relative order, each aged by exactly N.
    let expected: Vec<u32> = initial
        .iter()
        .filter(|&&life| life > N)
        .map(|&life| life - N)
        .collect();
    let survivors: Vec<u32> = sys.particles().iter().map(|p| p.life).collect();

    assert_eq!(survivors, expected);
}

/// A particle expiring on tick N is removed on tick N, not N+1.
#[test]
fn expiry_happens_in_the_same_tick() {
    let mut sys = engine(3);
    sys.spawn_burst(50, BurstKind::Sparkle);

    let shortest = sys
        .particles()
        .iter()
        .map(|p| p.life)
        .min()
        .expect("burst spawned particles");

    for _ in 0..shortest {
        sys.tick();
    }

    // Everything with the minimum life just expired and must be gone.
    assert!(sys.particles().iter().all(|p| p.life > 0));
    assert!(sys.stats().expired_total > 0);
}

/// spawn_burst(5, Confetti) when idle: exactly 5 particles, lives in
/// [220, 340], and after 340 ticks the collection is empty.
#[test]
fn five_piece_burst_runs_to_quiescence() {
    let mut sys = engine(42);
    sys.spawn_burst(5, BurstKind::Confetti);

    assert_eq!(sys.particle_count(), 5);
    assert!(sys.particles().iter().all(|p| (220..=340).contains(&p.life)));

    for _ in 0..340 {
        sys.tick();
    }

    assert_eq!(sys.particle_count(), 0);
    assert!(!sys.needs_frame());
    assert_eq!(sys.stats().expired_total, 5);
}

/// Two bursts in the same tick merge into one running loop.
#[test]
fn double_spawn_unions_particles() {
    let mut sys = engine(12);
    sys.spawn_burst(160, BurstKind::Confetti);
    sys.spawn_burst(14, BurstKind::Sparkle);

    assert_eq!(sys.particle_count(), 174);
    sys.tick();
    assert_eq!(sys.particle_count(), 174);
    assert!(sys.needs_frame());
}
