//! # liarsclub-ai: Computer Opponents for Liar's Club
//!
//! Opponents read the same [`SessionSnapshot`] a human would see and answer
//! with the same [`Intent`]s, so they can take either seat without any help
//! from the core.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the decision interface
//! - [`baseline`] - Rule-based opponent
//! - [`random`] - Seeded coin-flip opponent
//! - [`create_ai`] - Factory by kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use liarsclub_ai::{create_ai, AIOpponent};
//! use liarsclub_engine::game::{GameSession, default_names};
//!
//! let mut ai = create_ai("baseline", 0).expect("known kind");
//! let mut session = GameSession::with_seed(default_names(), 42).unwrap();
//!
//! let snap = session.snapshot();
//! for intent in ai.intents_for(&snap, 0) {
//!     session.apply_intent(intent).unwrap();
//! }
//! assert!(session.peek().pending_play.is_some());
//! ```

use liarsclub_engine::cards::CardId;
use liarsclub_engine::engine::{Intent, Phase};
use liarsclub_engine::game::SessionSnapshot;
use liarsclub_engine::rules::MAX_SELECTION;

pub mod baseline;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: &[&str] = &["baseline", "random"];

/// Decision interface for a computer-controlled seat.
pub trait AIOpponent: Send {
    /// Cards to put down when `party` is the active seat. Ids not in the
    /// party's hand are ignored by the core.
    fn choose_cards(&mut self, snapshot: &SessionSnapshot, party: usize) -> Vec<CardId>;

    /// Whether `party`, as the answering seat, calls bluff on the pending play.
    fn call_bluff(&mut self, snapshot: &SessionSnapshot, party: usize) -> bool;

    fn name(&self) -> &str;

    /// Intents that carry `party` through its part of the current phase.
    ///
    /// Empty when it is not `party`'s move or the game is over.
    fn intents_for(&mut self, snapshot: &SessionSnapshot, party: usize) -> Vec<Intent> {
        match snapshot.phase {
            Phase::Selecting if snapshot.active_party == party => {
                let mut picks = self.choose_cards(snapshot, party);
                picks.truncate(MAX_SELECTION);
                if picks.is_empty() {
                    picks.extend(snapshot.parties[party].cards.first().map(|c| c.id));
                }
                // toggle only the difference against what is already selected
                let mut intents: Vec<Intent> = snapshot
                    .selected
                    .iter()
                    .filter(|id| !picks.contains(id))
                    .chain(picks.iter().filter(|id| !snapshot.selected.contains(id)))
                    .map(|id| Intent::ToggleCardSelection(*id))
                    .collect();
                intents.push(Intent::SubmitPlay);
                intents
            }
            Phase::AwaitingBluffDecision if snapshot.opponent_index() == party => {
                if self.call_bluff(snapshot, party) {
                    vec![Intent::CallBluff]
                } else {
                    vec![Intent::Pass]
                }
            }
            _ => Vec::new(),
        }
    }
}

/// Builds an opponent by kind name. `seed` feeds kinds that use randomness.
///
/// Returns `None` for unknown kinds; see [`AI_KINDS`].
///
/// ```rust
/// use liarsclub_ai::create_ai;
///
/// let ai = create_ai("baseline", 0).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle", 0).is_none());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Option<Box<dyn AIOpponent>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "random" => Some(Box::new(random::RandomAI::new(seed))),
        _ => None,
    }
}
