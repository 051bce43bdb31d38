//! Turn resolution.
//!
//! On a rolled face `f`:
//! 1. count the roll and remember `f`
//! 2. `f == 1`: forfeit the turn score, turn ends `Forfeited`
//! 3. otherwise add `f` to the turn score; reaching `WINNING_SCORE` banks it
//!    and ends the game (`GameWon`), else the turn continues (`Rolling`)
//!
//! A hold banks the turn score and ends the turn `Banked`.

use crate::core::{Player, TurnState, WINNING_SCORE};

/// Whether banked plus unbanked score ends the game.
#[must_use]
pub fn reaches_target(player: &Player) -> bool {
    player.provisional_total() >= WINNING_SCORE
}

/// Apply a rolled face to the player's turn.
pub fn apply_roll(player: &mut Player, face: u8) -> TurnState {
    player.record_roll(face);

    if face == 1 {
        player.forfeit_turn();
        return TurnState::Forfeited;
    }

    player.add_to_turn(face);
    if reaches_target(player) {
        player.bank_turn();
        TurnState::GameWon
    } else {
        TurnState::Rolling
    }
}

/// Bank the turn score. Returns the amount banked.
pub fn apply_hold(player: &mut Player) -> u32 {
    player.bank_turn()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(total: u32) -> Player {
        let mut player = Player::computer("Bot");
        let mut left = total;
        while left > 0 {
            let face = left.min(6) as u8;
            player.add_to_turn(face);
            left -= u32::from(face);
        }
        player.bank_turn();
        player
    }

    #[test]
    fn test_roll_continues_turn() {
        let mut player = Player::computer("Bot");
        assert_eq!(apply_roll(&mut player, 4), TurnState::Rolling);
        assert_eq!(player.turn_score(), 4);
        assert_eq!(player.total_score(), 0);
        assert_eq!(player.total_rolls(), 1);
        assert_eq!(player.last_roll(), 4);
    }

    #[test]
    fn test_one_forfeits_regardless_of_turn_score() {
        let mut player = with_total(30);
        for face in [6, 6, 6, 5] {
            assert_eq!(apply_roll(&mut player, face), TurnState::Rolling);
        }
        assert_eq!(player.turn_score(), 23);

        assert_eq!(apply_roll(&mut player, 1), TurnState::Forfeited);
        assert_eq!(player.turn_score(), 0);
        assert_eq!(player.total_score(), 30);
        assert_eq!(player.last_roll(), 1);
        assert_eq!(player.total_rolls(), 5);
    }

    #[test]
    fn test_hold_banks_exact_turn_score() {
        let mut player = with_total(12);
        apply_roll(&mut player, 3);
        apply_roll(&mut player, 5);

        assert_eq!(apply_hold(&mut player), 8);
        assert_eq!(player.total_score(), 20);
        assert_eq!(player.turn_score(), 0);
    }

    #[test]
    fn test_reaching_target_wins() {
        let mut player = with_total(97);
        assert_eq!(apply_roll(&mut player, 3), TurnState::GameWon);
        assert_eq!(player.total_score(), 100);
        assert_eq!(player.turn_score(), 0);
    }

    #[test]
    fn test_overshoot_still_wins() {
        let mut player = with_total(97);
        assert_eq!(apply_roll(&mut player, 6), TurnState::GameWon);
        assert_eq!(player.total_score(), 103);
    }

    #[test]
    fn test_just_short_keeps_rolling() {
        let mut player = with_total(93);
        assert_eq!(apply_roll(&mut player, 6), TurnState::Rolling);
        assert!(!reaches_target(&player));
        assert_eq!(player.provisional_total(), 99);
    }
}
