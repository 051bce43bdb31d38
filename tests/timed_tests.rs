//! Timed variant: deadline enforcement with a stepping clock.

use std::time::Duration;

use rust_pig::core::{Player, PlayerKind, Rotation, ScriptedDice};
use rust_pig::engine::{SteppingClock, TimedGame};
use rust_pig::narration::{MemoryNarrator, Narration};
use rust_pig::policy::ScriptedInput;
use rust_pig::rules::WinCondition;

fn banked(name: &str, kind: PlayerKind, total: u32) -> Player {
    let mut player = Player::new(name, kind);
    let mut left = total;
    while left > 0 {
        let face = left.min(6) as u8;
        player.add_to_turn(face);
        left -= u32::from(face);
    }
    player.bank_turn();
    player
}

fn time_left(narrator: &MemoryNarrator) -> Vec<u64> {
    narrator
        .events()
        .iter()
        .filter_map(|e| match e {
            Narration::TimeLeft { seconds } => Some(*seconds),
            _ => None,
        })
        .collect()
}

#[test]
fn test_deadline_stops_mid_turn() {
    // Readings: 0s start, then 10s..50s before each roll, 60s stops the turn.
    let clock = SteppingClock::new(Duration::from_secs(10));
    let rotation = Rotation::new(vec![Player::computer("A"), Player::computer("B")]).unwrap();
    let mut game = TimedGame::with_clock(rotation, ScriptedDice::new([2, 2, 2, 2, 2]), &clock);
    let mut narrator = MemoryNarrator::new();

    let summary = game.start(&mut ScriptedInput::default(), &mut narrator).unwrap();

    assert_eq!(time_left(&narrator), vec![50, 40, 30, 20, 10]);
    assert!(game.game().is_over());
    assert!(!game.game().is_turn_active());

    // The unfinished turn is never banked.
    let a = game.game().rotation().current();
    assert_eq!(a.name(), "A");
    assert_eq!(a.total_rolls(), 5);
    assert_eq!(a.turn_score(), 10);
    assert_eq!(a.total_score(), 0);

    assert_eq!(summary.winner.condition, WinCondition::HighestScoreAtDeadline);
    assert_eq!(summary.turns, 1);
    assert!(narrator
        .events()
        .iter()
        .any(|e| matches!(e, Narration::WinnerAtDeadline { .. })));
}

#[test]
fn test_natural_win_before_deadline() {
    let clock = SteppingClock::new(Duration::from_secs(1));
    let rotation = Rotation::new(vec![
        banked("Bot", PlayerKind::Computer, 97),
        Player::computer("Other"),
    ])
    .unwrap();
    let mut game = TimedGame::with_clock(rotation, ScriptedDice::new([3]), &clock);
    let mut narrator = MemoryNarrator::new();

    let summary = game.start(&mut ScriptedInput::default(), &mut narrator).unwrap();

    assert_eq!(summary.winner.condition, WinCondition::ReachedTarget);
    assert_eq!(summary.winner.name, "Bot");
    assert_eq!(summary.winner.total_score, 100);
    assert_eq!(
        narrator.lines(),
        vec![
            "\nBot's turn. Current score is 97",
            "Time left for the game: 59 seconds",
            "\nBot Won the Game! Rolled a 3. Total score is 100",
            "\nPig Results:\n",
            "Bot Scored 100 points, rolled 1 times",
            "Other Scored 0 points, rolled 0 times",
        ]
    );
}

#[test]
fn test_deadline_at_turn_boundary_ties_follow_rotation() {
    // 0s start; A acts at 20s and forfeits; 40s passes the boundary check;
    // B's turn opens but 60s stops it before any action.
    let clock = SteppingClock::new(Duration::from_secs(20));
    let rotation = Rotation::new(vec![Player::human("A"), Player::human("B")]).unwrap();
    let mut game = TimedGame::with_clock(rotation, ScriptedDice::new([1]), &clock);
    let mut input = ScriptedInput::new(["r"]);
    let mut narrator = MemoryNarrator::new();

    let summary = game.start(&mut input, &mut narrator).unwrap();

    assert_eq!(input.prompts(), 1);
    assert_eq!(time_left(&narrator), vec![40]);

    // Both at 0: snapshot order with B current is A, B.
    let order: Vec<_> = summary.ranking.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(order, vec!["A", "B"]);
    assert_eq!(summary.winner.name, "A");
    assert_eq!(summary.winner.condition, WinCondition::HighestScoreAtDeadline);
    assert!(narrator
        .lines()
        .contains(&"\nA Won! with the highest score: 0".to_string()));
}

#[test]
fn test_turns_continue_until_deadline() {
    // Each computer turn: roll 1 and forfeit. One second per reading.
    let clock = SteppingClock::new(Duration::from_secs(1));
    let rotation = Rotation::new(vec![Player::computer("A"), Player::computer("B")]).unwrap();
    let dice = ScriptedDice::new(std::iter::repeat(1).take(100));
    let mut game = TimedGame::with_clock(rotation, dice, &clock);
    let mut narrator = MemoryNarrator::new();

    let summary = game.start(&mut ScriptedInput::default(), &mut narrator).unwrap();

    assert_eq!(summary.winner.condition, WinCondition::HighestScoreAtDeadline);
    assert!(summary.turns > 2);
    assert!(time_left(&narrator).iter().all(|&s| s <= 60));
    assert!(summary.ranking.iter().all(|s| s.total_score == 0));
    assert!(clock.elapsed() >= Duration::from_secs(60));
}
