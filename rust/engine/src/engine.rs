use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Rank};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::Announcement;
use crate::logger::{Decision, RiskRecord, TurnLog, TurnRecord};
use crate::party::{Party, PARTY_COUNT};
use crate::rng::RandomSource;
use crate::roulette::{resolve_risk, Outcome};
use crate::rules::{self, SelectionChange};

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Active party is picking cards to play
    Selecting,
    /// Cards are down; the opponent must call bluff or pass
    AwaitingBluffDecision,
    /// Consequences are being applied; never observable between intents
    TurnResolved,
    /// At most one party is alive
    GameOver,
}

/// A discrete request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ToggleCardSelection(CardId),
    SubmitPlay,
    CallBluff,
    Pass,
    NewSession(String, String),
}

/// Turn/bluff state machine for one two-party game.
///
/// Every intent runs to completion inside a single call, elimination check
/// included. Intents that make no sense in the current phase, or that name a
/// card the active party does not hold, leave the state untouched.
///
/// # Examples
///
/// ```
/// use liarsclub_engine::engine::{Engine, Intent, Phase};
/// use liarsclub_engine::rng::SeededRandom;
///
/// let names = ["Player 1".to_string(), "Player 2".to_string()];
/// let mut engine = Engine::new(names, Box::new(SeededRandom::new(7))).unwrap();
/// assert_eq!(engine.phase(), Phase::Selecting);
///
/// let first = engine.parties()[0].hand().cards()[0].id;
/// engine.apply(Intent::ToggleCardSelection(first)).unwrap();
/// engine.apply(Intent::SubmitPlay).unwrap();
/// assert_eq!(engine.phase(), Phase::AwaitingBluffDecision);
///
/// engine.apply(Intent::Pass).unwrap();
/// assert_eq!(engine.active_party(), 1);
/// assert_eq!(engine.parties()[0].hand().len(), 4);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Card factory; owns the id counter for the whole session
    deck: Deck,
    rng: Box<dyn RandomSource>,
    parties: [Party; PARTY_COUNT],
    /// Seat whose turn it is
    turn_index: usize,
    /// 1-based turn counter
    turn: u32,
    declared_rank: Rank,
    phase: Phase,
    /// Subset of the active hand, in selection order
    selected: Vec<Card>,
    /// Answer to the current play, held only while the turn resolves
    pending_decision: Option<Decision>,
    winner: Option<usize>,
    last_eliminated: Option<usize>,
    announcements: Vec<Announcement>,
    history: TurnLog,
}

impl Engine {
    /// Deals both hands and draws the first declared rank.
    ///
    /// # Errors
    ///
    /// Fails only if the random source fails.
    pub fn new(names: [String; 2], mut rng: Box<dyn RandomSource>) -> Result<Self, GameError> {
        let mut deck = Deck::new();
        let parties = deal_parties(names, &mut deck, rng.as_mut())?;
        let declared_rank = deck.draw_rank(rng.as_mut())?;
        let mut engine = Self {
            deck,
            rng,
            parties,
            turn_index: 0,
            turn: 1,
            declared_rank,
            phase: Phase::Selecting,
            selected: Vec::new(),
            pending_decision: None,
            winner: None,
            last_eliminated: None,
            announcements: Vec::new(),
            history: TurnLog::new(),
        };
        engine.announce_turn_start();
        Ok(engine)
    }

    /// Starts a fresh game in place.
    ///
    /// The deck, and with it the card-id counter, carries over so ids from
    /// the previous game are never reused.
    pub fn restart(&mut self, names: [String; 2]) -> Result<(), GameError> {
        self.parties = deal_parties(names, &mut self.deck, self.rng.as_mut())?;
        self.declared_rank = self.deck.draw_rank(self.rng.as_mut())?;
        self.turn_index = 0;
        self.turn = 1;
        self.phase = Phase::Selecting;
        self.selected.clear();
        self.pending_decision = None;
        self.winner = None;
        self.last_eliminated = None;
        self.announcements.clear();
        self.history = TurnLog::new();
        tracing::info!(
            player_one = self.parties[0].name(),
            player_two = self.parties[1].name(),
            "session restarted"
        );
        self.announce_turn_start();
        Ok(())
    }

    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] when the random source fails mid-resolution. The
    /// game cannot continue after that.
    pub fn apply(&mut self, intent: Intent) -> Result<(), GameError> {
        if !rules::accepts(self.phase, &intent) {
            tracing::debug!(?intent, phase = ?self.phase, "ignoring intent for current phase");
            return Ok(());
        }
        match intent {
            Intent::ToggleCardSelection(id) => {
                self.toggle(id);
                Ok(())
            }
            Intent::SubmitPlay => {
                self.submit();
                Ok(())
            }
            Intent::CallBluff => {
                self.pending_decision = Some(Decision::Called);
                self.resolve_turn()
            }
            Intent::Pass => {
                self.pending_decision = Some(Decision::Passed);
                self.resolve_turn()
            }
            Intent::NewSession(a, b) => self.restart([a, b]),
        }
    }

    fn toggle(&mut self, id: CardId) {
        let Some(card) = self.parties[self.turn_index].hand().get(id) else {
            tracing::debug!(card = %id, party = self.turn_index, "card not in active hand");
            return;
        };
        let change = rules::toggle_selection(&mut self.selected, card);
        if change == SelectionChange::Full {
            tracing::debug!(card = %id, "selection already full");
        }
    }

    fn submit(&mut self) {
        if self.selected.is_empty() {
            tracing::debug!("submit with empty selection ignored");
            return;
        }
        self.phase = Phase::AwaitingBluffDecision;
        self.announcements.push(Announcement::CardsPlayed {
            party: self.turn_index,
            count: self.selected.len(),
            declared_rank: self.declared_rank,
        });
    }

    fn resolve_turn(&mut self) -> Result<(), GameError> {
        let Some(decision) = self.pending_decision.take() else {
            return Ok(());
        };
        self.phase = Phase::TurnResolved;

        let declarer = self.turn_index;
        let caller = rules::next_living(&self.alive_flags(), declarer).unwrap_or(declarer);
        let was_bluff = rules::is_bluff(&self.selected, self.declared_rank);

        let risk = match decision {
            Decision::Called => {
                self.announcements
                    .push(Announcement::BluffCalled { caller, declarer });
                self.announcements.push(Announcement::BluffRevealed {
                    declarer,
                    was_bluff,
                });
                let target = rules::risk_target(declarer, caller, was_bluff);
                Some(self.run_risk_check(target)?)
            }
            Decision::Passed => {
                tracing::info!(party = self.parties[declarer].name(), "play accepted");
                self.announcements
                    .push(Announcement::PlayAccepted { party: declarer });
                None
            }
        };

        self.history.push(TurnRecord {
            turn: self.turn,
            party: declarer,
            declared_rank: self.declared_rank,
            played: self.selected.clone(),
            decision,
            was_bluff,
            risk,
        });

        self.finish_turn()
    }

    fn run_risk_check(&mut self, target: usize) -> Result<RiskRecord, GameError> {
        self.announcements
            .push(Announcement::EliminationCheckStarted { party: target });
        let outcome = resolve_risk(&self.parties[target], self.rng.as_mut())?;
        if outcome == Outcome::Eliminated {
            self.parties[target].eliminate();
            self.last_eliminated = Some(target);
            tracing::info!(party = self.parties[target].name(), "party eliminated");
        } else {
            tracing::info!(party = self.parties[target].name(), "party survived");
        }
        self.announcements.push(Announcement::EliminationResult {
            party: target,
            outcome,
        });
        Ok(RiskRecord {
            party: target,
            outcome,
        })
    }

    /// Shared tail of both the bluff and the pass path.
    fn finish_turn(&mut self) -> Result<(), GameError> {
        let active = self.turn_index;
        let played = std::mem::take(&mut self.selected);
        self.parties[active].hand_mut().remove_played(&played);

        if self.parties[active].is_alive() && self.parties[active].hand().is_empty() {
            let hand = self.deck.deal_hand(self.rng.as_mut())?;
            self.parties[active].set_hand(hand);
            tracing::info!(party = self.parties[active].name(), "hand refilled");
            self.announcements
                .push(Announcement::HandRefilled { party: active });
        }

        self.declared_rank = self.deck.draw_rank(self.rng.as_mut())?;
        self.turn += 1;

        let alive = self.alive_flags();
        let next = rules::next_living(&alive, active);
        match next {
            Some(next) if rules::alive_count(&alive) > 1 => {
                self.turn_index = next;
                self.phase = Phase::Selecting;
                self.announce_turn_start();
            }
            _ => {
                self.winner = next;
                if let Some(w) = next {
                    self.turn_index = w;
                }
                self.phase = Phase::GameOver;
                tracing::info!(
                    winner = ?next.map(|w| self.parties[w].name()),
                    turns = self.history.len(),
                    "game over"
                );
                self.announcements
                    .push(Announcement::GameOver { winner: next });
            }
        }
        Ok(())
    }

    fn announce_turn_start(&mut self) {
        tracing::debug!(
            party = self.parties[self.turn_index].name(),
            declared = %self.declared_rank,
            turn = self.turn,
            "turn started"
        );
        self.announcements.push(Announcement::TurnStarted {
            party: self.turn_index,
            declared_rank: self.declared_rank,
        });
    }

    fn alive_flags(&self) -> [bool; PARTY_COUNT] {
        [self.parties[0].is_alive(), self.parties[1].is_alive()]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn parties(&self) -> &[Party; PARTY_COUNT] {
        &self.parties
    }

    pub fn active_party(&self) -> usize {
        self.turn_index
    }

    pub fn declared_rank(&self) -> Rank {
        self.declared_rank
    }

    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    pub fn pending_decision(&self) -> Option<Decision> {
        self.pending_decision
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn last_eliminated(&self) -> Option<usize> {
        self.last_eliminated
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn history(&self) -> &TurnLog {
        &self.history
    }

    pub fn cards_issued(&self) -> u64 {
        self.deck.issued()
    }

    pub fn pending_announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn drain_announcements(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.announcements)
    }
}

fn deal_parties(
    names: [String; 2],
    deck: &mut Deck,
    rng: &mut dyn RandomSource,
) -> Result<[Party; PARTY_COUNT], GameError> {
    let [a, b] = names;
    let first = Party::new(a, deck.deal_hand(rng)?);
    let second = Party::new(b, deck.deal_hand(rng)?);
    Ok([first, second])
}
