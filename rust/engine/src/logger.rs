use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::roulette::Outcome;

/// How the opposing party answered a play.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Called bluff, triggering an elimination check
    Called,
    /// Accepted the claim without a check
    Passed,
}

/// Elimination check that followed a called bluff.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    /// Party index that faced the check
    pub party: usize,
    pub outcome: Outcome,
}

/// Record of one resolved turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number within the session
    pub turn: u32,
    /// Party index that declared
    pub party: usize,
    pub declared_rank: Rank,
    /// Cards actually put down, in selection order
    pub played: Vec<Card>,
    pub decision: Decision,
    pub was_bluff: bool,
    #[serde(default)]
    pub risk: Option<RiskRecord>,
}

/// In-memory turn history for one session. Nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct TurnLog {
    records: Vec<TurnRecord>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TurnRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
