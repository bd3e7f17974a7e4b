//! End-to-end games: GameService → FSM → rounds → screens, on the
//! simulated board.

use super::sim_board::{RecordingSink, Response, SimBoard};

use tamapet::app::events::GameEvent;
use tamapet::app::service::GameService;
use tamapet::config::GameConfig;
use tamapet::drivers::encoder::Rotation;
use tamapet::error::SensorError;
use tamapet::fsm::StateId;
use tamapet::game::Difficulty;
use tamapet::gesture::Gesture;

fn boot(hw: &mut SimBoard, sink: &mut RecordingSink) -> GameService {
    let mut game = GameService::new(GameConfig::default());
    game.start(hw, sink);
    game
}

/// Step until `target`, failing after `max_steps`.
fn run_until(
    game: &mut GameService,
    hw: &mut SimBoard,
    sink: &mut RecordingSink,
    target: StateId,
    max_steps: usize,
) {
    for _ in 0..max_steps {
        if game.state() == target {
            return;
        }
        game.step(hw, sink);
    }
    assert_eq!(game.state(), target, "did not reach {:?} in {} steps", target, max_steps);
}

fn rounds_played(sink: &RecordingSink) -> usize {
    sink.count(|e| matches!(e, GameEvent::RoundFinished { .. }))
}

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn splash_plays_then_start_screen() {
    let mut hw = SimBoard::new();
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);
    assert_eq!(game.state(), StateId::Splash);
    assert_eq!(sink.events[0], GameEvent::Booted(StateId::Splash));

    game.step(&mut hw, &mut sink);

    assert_eq!(game.state(), StateId::Start);
    // 8 slide + 4 blink + blank, then the start screen
    assert_eq!(hw.frames.len(), 14);
    assert_eq!(hw.frames[0].lines[0].y, 64);
    assert_eq!(hw.frames[7].lines[0].y, 8);
    assert_eq!(hw.frames_with("Loading"), 4);
    assert!(hw.last_frame().has_line("Press Btn"));
    assert_eq!(hw.indicator, (0, 0, 50));
    // 8 × 50 ms + 4 × 300 ms
    assert_eq!(hw.now_ms, 1600);
    assert!(sink.events.contains(&GameEvent::StateChanged {
        from: StateId::Splash,
        to: StateId::Start
    }));
}

// ── Full sessions ─────────────────────────────────────────────

#[test]
fn perfect_easy_game_wins_with_full_hearts() {
    let mut hw = SimBoard::new();
    hw.press().press().respond(Response::Correct, 10);
    hw.random_words(&[0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);

    run_until(&mut game, &mut hw, &mut sink, StateId::Win, 20);

    let tally = game.last_tally().unwrap();
    assert!(tally.won);
    assert_eq!((tally.score, tally.hearts), (100, 3));
    assert_eq!(rounds_played(&sink), 10);
    assert!(game.session().is_none());
    assert!(sink.events.contains(&GameEvent::DifficultyChosen(Difficulty::Easy)));
    assert!(sink.events.contains(&GameEvent::SessionEnded(tally)));

    assert_eq!(hw.frames_with("GOOD!"), 10);
    assert!(hw.last_frame().has_line("YOU WIN!"));
    assert!(hw.last_frame().has_line("(^_^)"));
    assert_eq!(hw.indicator, (0, 150, 0));
}

#[test]
fn round_levels_count_up_from_one() {
    let mut hw = SimBoard::new();
    hw.press().press().respond(Response::Correct, 10);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);

    run_until(&mut game, &mut hw, &mut sink, StateId::Win, 20);

    let levels: Vec<u8> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundFinished { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, (1..=10).collect::<Vec<u8>>());
    assert_eq!(hw.frames_with("L10 E"), 1);
}

#[test]
fn three_timeouts_lose_after_three_rounds() {
    let mut hw = SimBoard::new();
    hw.press().press().respond(Response::Freeze, 3);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);

    run_until(&mut game, &mut hw, &mut sink, StateId::Lose, 20);

    let tally = game.last_tally().unwrap();
    assert!(!tally.won);
    assert_eq!((tally.score, tally.hearts), (0, 0));
    assert_eq!(rounds_played(&sink), 3);
    assert_eq!(hw.frames_with("SLOW"), 3);
    assert_eq!(hw.frames_with("TRY"), 2);
    assert_eq!(hw.frames_with("END"), 1);
    assert!(hw.last_frame().has_line("GAME OVER"));
    assert_eq!(hw.indicator, (150, 0, 0));
}

#[test]
fn wrong_tilt_costs_a_heart_and_names_the_gesture() {
    let mut hw = SimBoard::new();
    // word 0 → FEED → needs LEFT; the player tilts DOWN
    hw.press().press().respond(Response::Tilt(Gesture::Down), 1);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);

    run_until(&mut game, &mut hw, &mut sink, StateId::RoundLoop, 5);
    game.step(&mut hw, &mut sink);

    let s = game.session().unwrap();
    assert_eq!((s.score, s.hearts, s.level), (0, 2, 2));
    let miss = hw.frames.iter().rev().find(|f| f.has_line("MISS!")).unwrap();
    assert!(miss.has_line("DOWN"));
    assert!(miss.has_line("H2 S0"));
}

#[test]
fn medium_hits_and_misses_mix() {
    let mut hw = SimBoard::new();
    hw.press()
        .turn(Rotation::Clockwise, 1)
        .press()
        .respond(Response::Correct, 4)
        .respond(Response::Freeze, 1)
        .respond(Response::Correct, 5);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);

    run_until(&mut game, &mut hw, &mut sink, StateId::Win, 25);

    let tally = game.last_tally().unwrap();
    assert_eq!((tally.score, tally.hearts), (135, 2));
    assert!(sink.events.contains(&GameEvent::DifficultyChosen(Difficulty::Med)));
}

#[test]
fn timeout_waits_out_the_difficulty_limit() {
    for (turns, limit) in [(0, 4000), (1, 2500), (2, 1500)] {
        let mut hw = SimBoard::new();
        hw.press()
            .turn(Rotation::Clockwise, turns)
            .press()
            .respond(Response::Freeze, 1);
        let mut sink = RecordingSink::new();
        let mut game = boot(&mut hw, &mut sink);
        run_until(&mut game, &mut hw, &mut sink, StateId::RoundLoop, 10);

        let before = hw.now_ms;
        game.step(&mut hw, &mut sink);
        let spent = hw.now_ms - before;
        // limit, at most one poll burst over, plus the miss dwell
        assert!(spent >= limit + 1200, "{} ms for a {} ms limit", spent, limit);
        assert!(spent <= limit + 1200 + 30, "{} ms for a {} ms limit", spent, limit);
    }
}

// ── Selection ─────────────────────────────────────────────────

#[test]
fn recognised_presses_wait_out_the_settle_delay() {
    let config = GameConfig::default();
    let mut hw = SimBoard::new();
    hw.press().press();
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);
    game.step(&mut hw, &mut sink);
    assert_eq!(game.state(), StateId::Start);

    // The switch closes 20 ms into the control; nothing else may dwell.
    let before = hw.now_ms;
    game.step(&mut hw, &mut sink);
    assert_eq!(game.state(), StateId::DifficultySelect);
    assert_eq!(hw.now_ms - before, 20 + u64::from(config.button_settle_ms));
    assert_eq!(hw.controls_left(), 1);

    // Confirming adds the settle delay ahead of the confirmation dwell.
    let before = hw.now_ms;
    game.step(&mut hw, &mut sink);
    assert_eq!(game.state(), StateId::RoundLoop);
    assert_eq!(
        hw.now_ms - before,
        20 + u64::from(config.button_settle_ms) + u64::from(config.confirm_dwell_ms)
    );
    assert_eq!(hw.controls_left(), 0);
    assert_eq!(hw.accel_reads, 0, "menus never sample the accelerometer");
}

#[test]
fn encoder_selection_clamps_at_both_ends() {
    let mut hw = SimBoard::new();
    hw.press()
        .turn(Rotation::CounterClockwise, 2)
        .turn(Rotation::Clockwise, 5);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);
    run_until(&mut game, &mut hw, &mut sink, StateId::DifficultySelect, 5);

    game.step(&mut hw, &mut sink);
    game.step(&mut hw, &mut sink);
    assert_eq!(game.selection(), 0);
    assert!(hw.last_frame().has_line("> EASY"));

    for _ in 0..5 {
        game.step(&mut hw, &mut sink);
    }
    assert_eq!(game.selection(), 2);
    assert!(hw.last_frame().has_line("> HARD"));
    assert_eq!(hw.indicator, (50, 50, 0));
}

#[test]
fn confirming_hard_starts_hard_session() {
    let mut hw = SimBoard::new();
    hw.press().turn(Rotation::Clockwise, 2).press();
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);

    run_until(&mut game, &mut hw, &mut sink, StateId::RoundLoop, 10);

    let s = game.session().unwrap();
    assert_eq!(s.difficulty, Difficulty::Hard);
    assert_eq!((s.score, s.hearts, s.level), (0, 3, 1));
    assert!(hw.last_frame().has_line("Get ready"));
    assert_eq!(hw.indicator, (0, 0, 0), "indicator off after the confirm dwell");
}

// ── Endings ───────────────────────────────────────────────────

#[test]
fn press_after_game_over_returns_to_start_and_replays() {
    let mut hw = SimBoard::new();
    hw.press()
        .press()
        .respond(Response::Freeze, 3)
        .press()
        .press()
        .press()
        .respond(Response::Correct, 10);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);

    run_until(&mut game, &mut hw, &mut sink, StateId::Lose, 20);
    game.step(&mut hw, &mut sink);
    assert_eq!(game.state(), StateId::Start);
    assert_eq!(hw.indicator, (0, 0, 50));

    run_until(&mut game, &mut hw, &mut sink, StateId::Win, 20);
    assert_eq!(game.last_tally().unwrap().score, 100);
    assert_eq!(
        sink.count(|e| matches!(e, GameEvent::SessionEnded(_))),
        2
    );
}

// ── Faults ────────────────────────────────────────────────────

#[test]
fn sensor_fault_abandons_session_and_returns_to_start() {
    let mut hw = SimBoard::new();
    hw.press()
        .press()
        .respond(Response::Correct, 1)
        .respond(Response::Unplug, 1);
    let mut sink = RecordingSink::new();
    let mut game = boot(&mut hw, &mut sink);
    run_until(&mut game, &mut hw, &mut sink, StateId::RoundLoop, 5);

    game.step(&mut hw, &mut sink);
    assert_eq!(game.session().unwrap().score, 10);

    game.step(&mut hw, &mut sink);
    assert_eq!(game.state(), StateId::Start);
    assert!(game.session().is_none());
    assert!(sink.events.contains(&GameEvent::SensorFault(SensorError::BusReadFailed)));
    assert!(sink.events.contains(&GameEvent::StateChanged {
        from: StateId::RoundLoop,
        to: StateId::Start
    }));
    assert_eq!(rounds_played(&sink), 1, "the faulted round is not scored");

    let n = hw.frames.len();
    assert!(hw.frames[n - 2].has_line("SENSOR ERR"));
    assert!(hw.frames[n - 1].has_line("Press Btn"));
}
