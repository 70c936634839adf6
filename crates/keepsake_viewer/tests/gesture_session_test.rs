//! End-to-end gesture sessions against a realistic deck.

use keepsake_shared::{Key, PointerEvent};
use keepsake_viewer::{GestureTuning, Slide, SlideDeck, Viewer, ViewerOptions};

fn four_moment_viewer() -> Viewer {
    let deck = SlideDeck::new(vec![
        Slide::new("assets/moment1.jpg", "The first coffee"),
        Slide::new("assets/moment2.jpg", "That one sunset"),
        Slide::new("assets/moment3.jpg", "Bad karaoke, great night"),
        Slide::new("assets/moment4.jpg", "Home"),
    ]);
    Viewer::new(deck, ViewerOptions::default(), GestureTuning::default())
}

/// Open at index 1 of 4, ArrowRight twice lands on 3, once more wraps to 0.
#[test]
fn arrow_navigation_wraps() {
    let mut v = four_moment_viewer();
    v.open_at(1);

    v.key(Key::ArrowRight);
    v.key(Key::ArrowRight);
    assert_eq!(v.current_index(), Some(3));

    v.key(Key::ArrowRight);
    assert_eq!(v.current_index(), Some(0));
}

/// A browsing session: swipe forward twice, swipe back once, drag closed.
#[test]
fn swipe_browse_then_drag_close() {
    let mut v = four_moment_viewer();
    v.open_by_source("assets/moment2.jpg");
    assert_eq!(v.current_index(), Some(1));

    // Swipe left (next).
    v.pointer(PointerEvent::down(300.0, 400.0));
    v.pointer(PointerEvent::moved(210.0, 405.0));
    v.pointer(PointerEvent::up(210.0, 405.0));
    assert_eq!(v.current_index(), Some(2));

    // Swipe left again.
    v.pointer(PointerEvent::down(300.0, 400.0));
    v.pointer(PointerEvent::moved(220.0, 395.0));
    v.pointer(PointerEvent::up(220.0, 395.0));
    assert_eq!(v.current_index(), Some(3));

    // Swipe right (previous).
    v.pointer(PointerEvent::down(100.0, 400.0));
    v.pointer(PointerEvent::moved(190.0, 410.0));
    v.pointer(PointerEvent::up(190.0, 410.0));
    assert_eq!(v.current_index(), Some(2));

    // Drag all the way down: full clamp crosses the close threshold.
    v.pointer(PointerEvent::down(200.0, 100.0));
    v.pointer(PointerEvent::moved(205.0, 340.0));
    v.pointer(PointerEvent::up(205.0, 340.0));

    assert!(!v.is_open());
    assert!(v.active_slide().is_none());
}

/// Reopening after a close starts from a clean gesture state.
#[test]
fn reopen_resets_gesture_state() {
    let mut v = four_moment_viewer();
    v.open_at(0);

    // Leave a snap-back in flight, then close mid-animation.
    v.pointer(PointerEvent::down(100.0, 50.0));
    v.pointer(PointerEvent::moved(100.0, 180.0));
    v.pointer(PointerEvent::up(100.0, 180.0));
    assert!(v.pull() > 0.0);
    v.close();

    v.open_at(2);
    assert_eq!(v.pull(), 0.0);
    assert_eq!(v.current_index(), Some(2));
}
