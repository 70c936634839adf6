//! Headless walkthrough of a full card session.
//!
//! Drives every interaction surface end to end without a real page:
//! bursts, the modal viewer, gestures, keyboard, and the frame loop.
//! Run with `cargo run --bin card_walkthrough`.

use std::time::Instant;

use keepsake::{
    BurstKind, CardConfig, CardSession, Key, PointerEvent, Slide, SlideDeck, SurfaceMetrics,
    Viewport,
};

const FRAME_DT: f32 = 1.0 / 60.0;

fn deck() -> SlideDeck {
    SlideDeck::new(vec![
        Slide::new("moment-01.jpg", "The first hello"),
        Slide::new("moment-02.jpg", "Sunday pancakes"),
        Slide::new("moment-03.jpg", "That one road trip"),
        Slide::new("moment-04.jpg", "Cake, round two"),
    ])
}

fn run_to_quiescence(session: &mut CardSession) -> u32 {
    let mut frames = 0;
    while session.needs_frame() {
        session.advance_frame(FRAME_DT);
        frames += 1;
        assert!(frames < 2_000, "session failed to go quiescent");
    }
    frames
}

fn main() {
    println!("=== KEEPSAKE card walkthrough ===");
    let start = Instant::now();

    let config = CardConfig::default();
    let surface = SurfaceMetrics::new(Viewport::new(390.0, 844.0), 3.0);
    let mut session = CardSession::new(&config, deck(), surface);
    println!(
        "[1] session up: {} slides, {}x{} physical px",
        session.viewer().deck().len(),
        session.confetti().surface().map_or(0, |s| s.physical_width()),
        session.confetti().surface().map_or(0, |s| s.physical_height()),
    );

    // Quiz answers land as sparkle puffs.
    session.spawn_burst(14, BurstKind::Sparkle);
    session.spawn_burst(18, BurstKind::Sparkle);
    assert_eq!(session.confetti().particle_count(), 32);
    let frames = run_to_quiescence(&mut session);
    println!("[2] sparkles: 32 spawned, settled in {frames} frames");

    // The big reveal.
    session.spawn_burst(160, BurstKind::Confetti);
    session.spawn_burst(220, BurstKind::Confetti);
    assert_eq!(session.confetti().particle_count(), 380);
    let frames = run_to_quiescence(&mut session);
    assert_eq!(session.confetti().particle_count(), 0);
    println!("[3] finale: 380 confetti pieces, settled in {frames} frames");

    // Browse the gallery with the keyboard.
    session.open_at(0);
    assert_eq!(session.viewer().current_index(), Some(0));
    session.key(Key::ArrowRight);
    session.key(Key::ArrowRight);
    assert_eq!(session.viewer().current_index(), Some(2));
    session.key(Key::ArrowLeft);
    assert_eq!(session.viewer().current_index(), Some(1));
    println!(
        "[4] keyboard browse ok, now on \"{}\"",
        session.viewer().active_slide().map_or("", |s| s.caption.as_str())
    );

    // Swipe left to advance.
    session.pointer(PointerEvent::down(300.0, 400.0));
    session.pointer(PointerEvent::moved(180.0, 404.0));
    session.pointer(PointerEvent::up(180.0, 404.0));
    assert_eq!(session.viewer().current_index(), Some(2));
    println!("[5] swipe advanced to slide 2");

    // A short pull snaps back instead of closing.
    session.pointer(PointerEvent::down(200.0, 200.0));
    session.pointer(PointerEvent::moved(200.0, 320.0));
    session.pointer(PointerEvent::up(200.0, 320.0));
    assert!(session.viewer().is_open());
    let frames = run_to_quiescence(&mut session);
    println!("[6] short pull snapped back over {frames} frames");

    // A committed pull closes.
    session.pointer(PointerEvent::down(200.0, 100.0));
    session.pointer(PointerEvent::moved(200.0, 500.0));
    session.pointer(PointerEvent::up(200.0, 500.0));
    assert!(!session.viewer().is_open());
    println!("[7] long pull closed the viewer");

    // Escape closes too.
    session.open_by_source("moment-04.jpg");
    assert_eq!(session.viewer().current_index(), Some(3));
    session.key(Key::Escape);
    assert!(!session.viewer().is_open());
    println!("[8] escape closed the viewer");

    let stats = session.confetti().stats();
    println!(
        "=== walkthrough passed in {:.2?}: {} spawned, {} expired, {} frames ===",
        start.elapsed(),
        stats.spawned_total,
        stats.expired_total,
        session.frame()
    );
}
