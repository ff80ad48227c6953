use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::roulette::Outcome;

/// Something that happened while an intent was processed.
///
/// Announcements queue up inside the session and are handed out (and
/// cleared) with the next snapshot. The presentation layer decides how long
/// each one stays on screen; the core never waits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Announcement {
    TurnStarted {
        party: usize,
        declared_rank: Rank,
    },
    CardsPlayed {
        party: usize,
        count: usize,
        declared_rank: Rank,
    },
    BluffCalled {
        caller: usize,
        declarer: usize,
    },
    BluffRevealed {
        declarer: usize,
        was_bluff: bool,
    },
    PlayAccepted {
        party: usize,
    },
    EliminationCheckStarted {
        party: usize,
    },
    EliminationResult {
        party: usize,
        outcome: Outcome,
    },
    HandRefilled {
        party: usize,
    },
    GameOver {
        winner: Option<usize>,
    },
}
