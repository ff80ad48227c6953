use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Rank};
use crate::engine::{Engine, Intent, Phase};
use crate::errors::GameError;
use crate::events::Announcement;
use crate::logger::TurnRecord;
use crate::party::PartyView;
use crate::rng::{RandomSource, SeededRandom};

/// Seat names used when the presentation layer has none to offer.
pub fn default_names() -> [String; 2] {
    ["Player 1".to_string(), "Player 2".to_string()]
}

/// Facade the presentation layer talks to.
///
/// The session is the only thing that mutates game state. Callers feed it
/// [`Intent`]s and read back [`SessionSnapshot`]s; announcements produced
/// along the way are delivered once, with the next snapshot.
#[derive(Debug)]
pub struct GameSession {
    engine: Engine,
}

impl GameSession {
    pub fn new_session(names: [String; 2], rng: Box<dyn RandomSource>) -> Result<Self, GameError> {
        let engine = Engine::new(names, rng)?;
        tracing::info!(
            player_one = engine.parties()[0].name(),
            player_two = engine.parties()[1].name(),
            declared = %engine.declared_rank(),
            "session created"
        );
        Ok(Self { engine })
    }

    /// Session backed by a ChaCha20 stream; the same seed replays the same
    /// deals, declarations and elimination checks.
    pub fn with_seed(names: [String; 2], seed: u64) -> Result<Self, GameError> {
        Self::new_session(names, Box::new(SeededRandom::new(seed)))
    }

    /// Applies `intent` and returns the resulting snapshot.
    ///
    /// Ignored intents still return a snapshot; only a random source failure
    /// is reported as an error.
    pub fn apply_intent(&mut self, intent: Intent) -> Result<SessionSnapshot, GameError> {
        self.engine.apply(intent)?;
        Ok(self.snapshot())
    }

    /// Current state plus every announcement queued since the previous
    /// snapshot. The announcement queue is emptied by this call.
    pub fn snapshot(&mut self) -> SessionSnapshot {
        let announcements = self.engine.drain_announcements();
        let mut snap = self.peek();
        snap.announcements = announcements;
        snap
    }

    /// Same as [`GameSession::snapshot`] but leaves queued announcements in
    /// place and omits them.
    pub fn peek(&self) -> SessionSnapshot {
        let e = &self.engine;
        let [a, b] = e.parties();
        let pending_play = (e.phase() == Phase::AwaitingBluffDecision).then(|| PendingPlay {
            party: e.active_party(),
            count: e.selected().len(),
            declared_rank: e.declared_rank(),
        });
        SessionSnapshot {
            phase: e.phase(),
            parties: [a.view(), b.view()],
            declared_rank: e.declared_rank(),
            active_party: e.active_party(),
            selected: e.selected().iter().map(|c| c.id).collect(),
            winner: e.winner().map(|w| e.parties()[w].name().to_string()),
            last_eliminated: e
                .last_eliminated()
                .map(|p| e.parties()[p].name().to_string()),
            turn: e.turn(),
            pending_play,
            announcements: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.engine.phase() == Phase::GameOver
    }

    pub fn history(&self) -> &[TurnRecord] {
        self.engine.history().records()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// Claim waiting for the opponent's answer. Ranks stay hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPlay {
    pub party: usize,
    pub count: usize,
    pub declared_rank: Rank,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub parties: [PartyView; 2],
    pub declared_rank: Rank,
    /// Index of the party whose turn it is
    pub active_party: usize,
    /// Selected card ids, in selection order
    pub selected: Vec<CardId>,
    pub winner: Option<String>,
    pub last_eliminated: Option<String>,
    pub turn: u32,
    #[serde(default)]
    pub pending_play: Option<PendingPlay>,
    /// Events since the previous snapshot, oldest first
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

impl SessionSnapshot {
    pub fn active(&self) -> &PartyView {
        &self.parties[self.active_party]
    }

    /// The seat answering the current play.
    pub fn opponent_index(&self) -> usize {
        (self.active_party + 1) % self.parties.len()
    }

    pub fn name_of(&self, party: usize) -> &str {
        self.parties
            .get(party)
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
