//! Circular turn order over the registered players.
//!
//! Players live in a `Vec` in registration order; the current player is an
//! index into it. `advance` moves the index forward modulo the player count,
//! so the arena is never reordered.

use super::error::PigError;
use super::player::{Player, PlayerId};

/// Circular order of players with one designated current player.
#[derive(Clone, Debug)]
pub struct Rotation {
    players: Vec<Player>,
    current: usize,
}

impl Rotation {
    /// Create a rotation starting with the first player.
    pub fn new(players: Vec<Player>) -> Result<Self, PigError> {
        if players.is_empty() {
            return Err(PigError::config("A game needs at least one player"));
        }
        if players.len() > usize::from(u8::MAX) {
            return Err(PigError::config("At most 255 players supported"));
        }
        Ok(Self { players, current: 0 })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Look up a player by registration index.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Hand the turn to the next player in circular order.
    pub fn advance(&mut self) -> PlayerId {
        self.current = (self.current + 1) % self.players.len();
        self.current_id()
    }

    /// All players: those waiting, in the order they will act, then the
    /// current player last. Does not disturb the rotation.
    pub fn snapshot(&self) -> impl Iterator<Item = &Player> + '_ {
        let n = self.players.len();
        (1..=n).map(move |offset| &self.players[(self.current + offset) % n])
    }

    /// Players in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId::new(i as u8), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(it: impl Iterator<Item = &'a Player>) -> Vec<&'a str> {
        it.map(Player::name).collect()
    }

    fn three() -> Rotation {
        Rotation::new(vec![
            Player::computer("A"),
            Player::computer("B"),
            Player::computer("C"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_rotation_rejected() {
        let err = Rotation::new(vec![]).unwrap_err();
        assert!(matches!(err, PigError::Config { .. }));
    }

    #[test]
    fn test_starts_with_first_registered() {
        let rotation = three();
        assert_eq!(rotation.len(), 3);
        assert_eq!(rotation.current().name(), "A");
        assert_eq!(rotation.current_id(), PlayerId::new(0));
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotation = three();
        assert_eq!(rotation.advance(), PlayerId::new(1));
        assert_eq!(rotation.advance(), PlayerId::new(2));
        assert_eq!(rotation.advance(), PlayerId::new(0));
        assert_eq!(rotation.current().name(), "A");
    }

    #[test]
    fn test_snapshot_puts_current_last() {
        let mut rotation = three();
        assert_eq!(names(rotation.snapshot()), vec!["B", "C", "A"]);

        rotation.advance();
        assert_eq!(names(rotation.snapshot()), vec!["C", "A", "B"]);

        // Snapshot leaves the current player alone
        assert_eq!(rotation.current().name(), "B");
    }

    #[test]
    fn test_single_player_rotation() {
        let mut rotation = Rotation::new(vec![Player::human("Solo")]).unwrap();
        assert_eq!(rotation.advance(), PlayerId::new(0));
        assert_eq!(names(rotation.snapshot()), vec!["Solo"]);
    }

    #[test]
    fn test_current_mut_and_get() {
        let mut rotation = three();
        rotation.current_mut().add_to_turn(5);
        rotation.current_mut().bank_turn();

        assert_eq!(rotation.get(PlayerId::new(0)).unwrap().total_score(), 5);
        assert!(rotation.get(PlayerId::new(3)).is_none());
        assert_eq!(rotation.iter().count(), 3);
    }
}
