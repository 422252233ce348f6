//! Integration tests for the engine driven through its public API

use blockfall::core::{EngineConfig, FrameDriver, GameEvent, GameState};
use blockfall::types::{GameAction, PieceKind, NEXT_QUEUE_LEN};

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(12345);

    assert!(!state.game_over());
    assert!(!state.paused());
    assert!(state.can_hold());
    assert_eq!(state.hold_piece(), None);
    assert_eq!(state.next_queue().len(), NEXT_QUEUE_LEN);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);

    for _ in 0..20 {
        assert_eq!(a.active().kind, b.active().kind);
        assert_eq!(a.next_queue(), b.next_queue());
        a.apply_action(GameAction::HardDrop);
        b.apply_action(GameAction::HardDrop);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_instances_are_independent() {
    let mut a = GameState::new(1);
    let b = GameState::new(1);

    a.apply_action(GameAction::HardDrop);

    assert_eq!(a.board().filled_count(), 4);
    assert_eq!(b.board().filled_count(), 0);
}

#[test]
fn test_spawned_pieces_follow_preview() {
    let mut state = GameState::new(99);

    for _ in 0..30 {
        let upcoming = state.next_queue()[0];
        state.apply_action(GameAction::HardDrop);
        if state.game_over() {
            break;
        }
        assert_eq!(state.active().kind, upcoming);
        assert_eq!(state.next_queue().len(), NEXT_QUEUE_LEN);
    }
}

#[test]
fn test_first_fourteen_spawns_are_two_bags() {
    let mut state = GameState::new(2024);
    let mut seen = vec![state.active().kind];
    seen.extend(state.next_queue().iter().copied());
    // Every spawn draws exactly one new kind onto the back of the preview
    while seen.len() < 14 {
        state.apply_action(GameAction::HardDrop);
        assert!(!state.game_over());
        seen.push(*state.next_queue().back().unwrap());
    }

    for bag in seen.chunks(7) {
        let mut kinds = bag.to_vec();
        kinds.sort_by_key(|k| k.as_str());
        kinds.dedup();
        assert_eq!(kinds.len(), 7, "bag {:?}", bag);
    }
}

#[test]
fn test_hold_once_per_piece() {
    let mut state = GameState::new(5);
    let first = state.active().kind;

    assert!(state.apply_action(GameAction::Hold));
    assert!(!state.apply_action(GameAction::Hold));
    assert_eq!(state.hold_piece(), Some(first));

    state.apply_action(GameAction::HardDrop);
    assert!(state.can_hold());
    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.active().kind, first);
}

#[test]
fn test_o_piece_ignores_rotation() {
    let mut state = GameState::new(5);
    // Cycle pieces until an O is active
    for _ in 0..14 {
        if state.active().kind == PieceKind::O {
            break;
        }
        state.apply_action(GameAction::HardDrop);
    }
    assert_eq!(state.active().kind, PieceKind::O);

    let before = *state.active();
    assert!(!state.apply_action(GameAction::RotateRight));
    assert!(!state.apply_action(GameAction::RotateLeft));
    assert_eq!(*state.active(), before);
}

#[test]
fn test_stacking_ends_the_game() {
    let mut state = GameState::new(31337);

    for _ in 0..200 {
        if state.game_over() {
            break;
        }
        state.apply_action(GameAction::HardDrop);
    }
    assert!(state.game_over());

    let events = state.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { .. })));

    // Only restart does anything now
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::Pause));
    assert!(!state.tick(10_000));
    assert!(state.apply_action(GameAction::Restart));
    assert!(!state.game_over());
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_snapshot_hides_piece_after_game_over() {
    let mut state = GameState::new(31337);
    while !state.game_over() {
        state.apply_action(GameAction::HardDrop);
    }

    let snap = state.snapshot();
    assert!(snap.game_over);
    assert!(snap.active.is_none());
    assert!(snap.ghost_y.is_none());
}

#[test]
fn test_custom_lock_delay() {
    let config = EngineConfig {
        lock_delay_ms: 100,
        ..EngineConfig::seeded(8)
    };
    let mut state = GameState::with_config(config);
    while !state.active().is_resting(state.board()) {
        state.apply_action(GameAction::SoftDrop);
    }

    assert!(!state.tick(16));
    assert!(state.is_locking());
    assert!(!state.tick(100));
    assert!(state.tick(1));
    assert_eq!(state.board().filled_count(), 4);
}

#[test]
fn test_frame_driver_plays_a_game() {
    let mut state = GameState::new(4);
    let mut driver = FrameDriver::new();
    let mut frames = 0u32;

    // 16ms frames until the first piece has fallen and locked
    let mut now = 0u64;
    while state.board().filled_count() == 0 && frames < 10_000 {
        driver.frame(now, &mut state, |_| Ok::<(), String>(()));
        now += 16;
        frames += 1;
    }

    assert_eq!(state.board().filled_count(), 4);
    assert!(state
        .drain_events()
        .iter()
        .any(|e| matches!(e, GameEvent::Locked { spin: false, .. })));
}

#[test]
fn test_events_serialize_with_type_tag() {
    let mut state = GameState::new(4);
    state.apply_action(GameAction::Pause);
    let events = state.drain_events();
    let json = serde_json::to_string(events.last().unwrap()).unwrap();
    assert_eq!(json, r#"{"type":"pause_changed","paused":true}"#);
}
