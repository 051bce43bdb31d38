//! Final ranking and winner.
//!
//! Ranking order is `total_score` descending. Ties keep rotation-snapshot
//! order (waiting players first, current player last) because the sort is
//! stable.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Rotation};

/// One row of the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub total_score: u32,
    pub total_rolls: u32,
    pub last_roll: u8,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            total_score: player.total_score(),
            total_rolls: player.total_rolls(),
            last_roll: player.last_roll(),
        }
    }
}

/// All players, best first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    standings: Vec<Standing>,
}

impl Ranking {
    /// Rank the rotation's players without disturbing the rotation.
    #[must_use]
    pub fn from_rotation(rotation: &Rotation) -> Self {
        let mut standings: Vec<Standing> = rotation.snapshot().map(Standing::from).collect();
        standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        Self { standings }
    }

    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// Highest total score; first in snapshot order on a tie.
    #[must_use]
    pub fn leader(&self) -> &Standing {
        // Rotations are never empty.
        &self.standings[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Standing> {
        self.standings.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.standings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

/// How a game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// A player reached the winning score.
    ReachedTarget,
    /// The timed session's deadline passed first.
    HighestScoreAtDeadline,
}

/// Winner announcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub name: String,
    pub total_score: u32,
    pub last_roll: u8,
    pub condition: WinCondition,
}

impl Winner {
    #[must_use]
    pub fn from_ranking(ranking: &Ranking, condition: WinCondition) -> Self {
        let leader = ranking.leader();
        Self {
            name: leader.name.clone(),
            total_score: leader.total_score,
            last_roll: leader.last_roll,
            condition,
        }
    }
}

/// Outcome of a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: Winner,
    pub ranking: Ranking,
    /// Turns started, including the final one.
    pub turns: u32,
}
