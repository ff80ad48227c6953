//! Baseline AI implementation for Liar's Club.
//!
//! Provides a simple rule-based opponent used for testing and simulations.
//! It never consults randomness, so a seeded session with two baseline seats
//! replays exactly.

use crate::AIOpponent;
use liarsclub_engine::cards::{CardId, Rank};
use liarsclub_engine::game::SessionSnapshot;

/// Claims of this many cards or more are always challenged.
const ALWAYS_CALL_AT: usize = 3;
/// Claims of this many cards are challenged when our own hand holds at least
/// [`SUSPICIOUS_HOLDING`] cards of the declared rank.
const SUSPICIOUS_CLAIM: usize = 2;
const SUSPICIOUS_HOLDING: usize = 2;

/// Simple baseline AI implementation for testing and comparison.
///
/// # Strategy
///
/// **Playing:**
/// - Holds cards of the declared rank: plays every one of them (an honest claim)
/// - Holds none: bluffs with a single card, the first in hand
///
/// **Answering:**
/// - Calls bluff on claims of three or more cards
/// - Calls bluff on a two-card claim when it holds two or more of that rank itself
/// - Passes otherwise
///
/// # Example
///
/// ```rust
/// use liarsclub_ai::baseline::BaselineAI;
/// use liarsclub_ai::AIOpponent;
/// use liarsclub_engine::game::{default_names, GameSession};
///
/// let mut ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
///
/// let mut session = GameSession::with_seed(default_names(), 42).unwrap();
/// let snap = session.snapshot();
/// let picks = ai.choose_cards(&snap, 0);
/// assert!(!picks.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    fn held_of(snapshot: &SessionSnapshot, party: usize, rank: Rank) -> usize {
        snapshot.parties[party]
            .cards
            .iter()
            .filter(|c| c.rank == rank)
            .count()
    }

    fn should_call(claimed: usize, held: usize) -> bool {
        claimed >= ALWAYS_CALL_AT || (claimed >= SUSPICIOUS_CLAIM && held >= SUSPICIOUS_HOLDING)
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AIOpponent for BaselineAI {
    fn choose_cards(&mut self, snapshot: &SessionSnapshot, party: usize) -> Vec<CardId> {
        let hand = &snapshot.parties[party].cards;
        let honest: Vec<CardId> = hand
            .iter()
            .filter(|c| c.rank == snapshot.declared_rank)
            .map(|c| c.id)
            .collect();
        if !honest.is_empty() {
            return honest;
        }
        hand.first().map(|c| vec![c.id]).unwrap_or_default()
    }

    fn call_bluff(&mut self, snapshot: &SessionSnapshot, party: usize) -> bool {
        let Some(pending) = &snapshot.pending_play else {
            return false;
        };
        let held = Self::held_of(snapshot, party, pending.declared_rank);
        let call = Self::should_call(pending.count, held);
        tracing::debug!(
            claimed = pending.count,
            held,
            call,
            "baseline bluff decision"
        );
        call
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liarsclub_engine::cards::Card;
    use liarsclub_engine::engine::Phase;
    use liarsclub_engine::game::PendingPlay;
    use liarsclub_engine::party::PartyView;

    fn view(name: &str, first_id: u64, ranks: &[Rank]) -> PartyView {
        PartyView {
            name: name.to_string(),
            cards: ranks
                .iter()
                .enumerate()
                .map(|(i, r)| Card {
                    id: CardId(first_id + i as u64),
                    rank: *r,
                })
                .collect(),
            alive: true,
        }
    }

    fn snapshot(a: &[Rank], b: &[Rank], declared: Rank, pending: Option<usize>) -> SessionSnapshot {
        SessionSnapshot {
            phase: if pending.is_some() {
                Phase::AwaitingBluffDecision
            } else {
                Phase::Selecting
            },
            parties: [view("A", 0, a), view("B", 5, b)],
            declared_rank: declared,
            active_party: 0,
            selected: Vec::new(),
            winner: None,
            last_eliminated: None,
            turn: 1,
            pending_play: pending.map(|count| PendingPlay {
                party: 0,
                count,
                declared_rank: declared,
            }),
            announcements: Vec::new(),
        }
    }

    #[test]
    fn test_baseline_ai_default() {
        let ai = BaselineAI;
        assert_eq!(ai.name(), "BaselineAI");
    }

    #[test]
    fn plays_every_matching_card() {
        let snap = snapshot(
            &[Rank::King, Rank::Ace, Rank::King, Rank::Jack, Rank::King],
            &[Rank::Jack; 5],
            Rank::King,
            None,
        );
        let picks = BaselineAI::new().choose_cards(&snap, 0);
        assert_eq!(picks, vec![CardId(0), CardId(2), CardId(4)]);
    }

    #[test]
    fn bluffs_with_one_card_when_nothing_matches() {
        let snap = snapshot(
            &[Rank::Queen, Rank::Jack, Rank::Jack],
            &[Rank::Jack; 5],
            Rank::Ace,
            None,
        );
        assert_eq!(BaselineAI::new().choose_cards(&snap, 0), vec![CardId(0)]);
    }

    #[test]
    fn large_claims_are_always_called() {
        let snap = snapshot(&[Rank::Ace; 5], &[Rank::Jack; 5], Rank::Ace, Some(3));
        assert!(BaselineAI::new().call_bluff(&snap, 1));
    }

    #[test]
    fn two_card_claim_depends_on_own_holding() {
        let mut ai = BaselineAI::new();
        let holding = [Rank::Ace, Rank::Ace, Rank::Jack, Rank::Jack, Rank::Jack];
        let snap = snapshot(&[Rank::Queen; 5], &holding, Rank::Ace, Some(2));
        assert!(ai.call_bluff(&snap, 1));

        let snap = snapshot(&[Rank::Queen; 5], &holding, Rank::King, Some(2));
        assert!(!ai.call_bluff(&snap, 1));
    }

    #[test]
    fn single_card_claims_pass() {
        let snap = snapshot(&[Rank::Queen; 5], &[Rank::Ace; 5], Rank::Ace, Some(1));
        assert!(!BaselineAI::new().call_bluff(&snap, 1));
    }

    #[test]
    fn no_pending_play_means_no_call() {
        let snap = snapshot(&[Rank::Queen; 5], &[Rank::Ace; 5], Rank::Ace, None);
        assert!(!BaselineAI::new().call_bluff(&snap, 1));
    }
}
