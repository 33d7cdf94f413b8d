//! End-to-end playback session scenarios against a scripted player.
//!
//! The per-operation cases live next to the session module; these walk
//! longer timelines where observed state, transport input, and the hide
//! countdown interleave.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use vdeck::player::{PlaybackSession, TransportGlyph};

use crate::helpers::{PlayerCommand, PlayerScript, ScriptedPlayer};

const HIDE_DELAY: Duration = Duration::from_secs(10);
const SKIP_STEP: f64 = 10.0;
const EPSILON: f64 = 1e-9;

fn new_session() -> (PlaybackSession, Rc<RefCell<PlayerScript>>) {
    let (player, script) = ScriptedPlayer::new();
    let session = PlaybackSession::new(
        Box::new(player),
        "clip.mp4".to_string(),
        HIDE_DELAY,
        SKIP_STEP,
    );
    (session, script)
}

#[test]
fn full_watch_session_drives_player_and_overlay() {
    let (mut session, script) = new_session();
    let t0 = Instant::now();
    session.attach(t0);

    // Nothing observed yet: tick changes nothing
    let changed = session.tick(t0 + Duration::from_millis(100)).unwrap();
    assert!(!changed);
    assert!(session.display().controls_visible);
    assert_eq!(session.display().remaining, "--:--");

    // Stream metadata arrives
    {
        let mut s = script.borrow_mut();
        s.position = Some(0.0);
        s.duration = Some(300.0);
    }
    let changed = session.tick(t0 + Duration::from_secs(1)).unwrap();
    assert!(changed);
    assert_eq!(session.display().remaining, "05:00");
    assert!(session.display().progress.abs() < EPSILON);

    // Hit play; the player confirms by reporting a nonzero rate
    session.toggle_play_pause(t0 + Duration::from_secs(2)).unwrap();
    assert_eq!(session.display().glyph, TransportGlyph::Pause);
    {
        let mut s = script.borrow_mut();
        s.rate = 1.0;
        s.position = Some(4.0);
    }
    session.tick(t0 + Duration::from_secs(3)).unwrap();
    assert!(session.is_playing());
    assert!((session.display().progress - 4.0 / 300.0).abs() < EPSILON);

    // Skip ahead from the observed position
    session.skip_forward(t0 + Duration::from_secs(4)).unwrap();
    script.borrow_mut().position = Some(14.0);
    session.tick(t0 + Duration::from_secs(5)).unwrap();

    // Drag the slider most of the way in
    session.scrub_to(0.9, t0 + Duration::from_secs(6)).unwrap();
    script.borrow_mut().position = Some(295.0);
    session.tick(t0 + Duration::from_secs(7)).unwrap();
    assert_eq!(session.display().remaining, "00:05");

    // Skipping past the end is the player's problem, not ours
    session.skip_forward(t0 + Duration::from_secs(8)).unwrap();

    // The stream dies; rate still reads 1.0 but the error wins
    script.borrow_mut().error = Some("decode failure".to_string());
    session.tick(t0 + Duration::from_secs(9)).unwrap();
    assert!(!session.is_playing());

    // So the next toggle asks for play again, not pause
    session.toggle_play_pause(t0 + Duration::from_secs(10)).unwrap();
    assert_eq!(session.display().glyph, TransportGlyph::Pause);

    session.close();

    let log = script.borrow();
    assert_eq!(
        log.issued,
        vec![
            PlayerCommand::Play,
            PlayerCommand::Seek(14.0),
            PlayerCommand::Seek(270.0),
            PlayerCommand::Seek(305.0),
            PlayerCommand::Play,
        ]
    );
    assert_eq!(log.shutdown_calls, 1);
}

#[test]
fn metadata_arriving_mid_session_switches_slider_to_ratio() {
    let (mut session, script) = new_session();
    let t0 = Instant::now();
    session.attach(t0);

    // Position streams in before the duration does
    script.borrow_mut().position = Some(7.5);
    session.tick(t0 + Duration::from_secs(1)).unwrap();
    assert!((session.display().progress - 7.5).abs() < EPSILON);
    assert_eq!(session.display().remaining, "--:--");

    script.borrow_mut().duration = Some(150.0);
    session.tick(t0 + Duration::from_secs(2)).unwrap();
    assert!((session.display().progress - 0.05).abs() < EPSILON);
    assert_eq!(session.display().remaining, "02:22");
}

#[test]
fn overlay_timeline_follows_input_and_expiry() {
    let (mut session, _script) = new_session();
    let t0 = Instant::now();
    session.attach(t0);

    // Transport input at +9s pushes the deadline to +19s
    session.skip_forward(t0 + Duration::from_secs(9)).unwrap();
    session.tick(t0 + Duration::from_secs(10)).unwrap();
    assert!(session.display().controls_visible);

    // Tap at +12s hides immediately and re-arms
    session.toggle_controls(t0 + Duration::from_secs(12));
    assert!(!session.display().controls_visible);

    // That countdown expiring while hidden does nothing visible
    let changed = session.tick(t0 + Duration::from_secs(22)).unwrap();
    assert!(!changed);
    assert!(!session.display().controls_visible);

    // Tap back on at +23s; auto-hide lands at +33s
    session.toggle_controls(t0 + Duration::from_secs(23));
    assert!(session.display().controls_visible);

    session.tick(t0 + Duration::from_secs(32)).unwrap();
    assert!(session.display().controls_visible);
    let changed = session.tick(t0 + Duration::from_secs(33)).unwrap();
    assert!(changed);
    assert!(!session.display().controls_visible);
}

#[test]
fn redraw_flag_only_reports_real_changes() {
    let (mut session, script) = new_session();
    let t0 = Instant::now();
    session.attach(t0);

    {
        let mut s = script.borrow_mut();
        s.position = Some(10.0);
        s.duration = Some(100.0);
    }
    assert!(session.tick(t0 + Duration::from_secs(1)).unwrap());

    // Same observed state: nothing to redraw
    assert!(!session.tick(t0 + Duration::from_secs(2)).unwrap());

    // A position change is worth a frame again
    script.borrow_mut().position = Some(10.5);
    assert!(session.tick(t0 + Duration::from_secs(3)).unwrap());
}
