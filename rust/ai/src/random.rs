//! Opponent that picks cards and calls bluffs at random.
//!
//! Seeded, so simulations that include it stay reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AIOpponent;
use liarsclub_engine::cards::CardId;
use liarsclub_engine::game::SessionSnapshot;

/// Chance of calling bluff on any claim.
const CALL_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AIOpponent for RandomAI {
    fn choose_cards(&mut self, snapshot: &SessionSnapshot, party: usize) -> Vec<CardId> {
        let mut ids: Vec<CardId> = snapshot.parties[party].cards.iter().map(|c| c.id).collect();
        if ids.is_empty() {
            return ids;
        }
        ids.shuffle(&mut self.rng);
        let take = self.rng.random_range(1..=ids.len());
        ids.truncate(take);
        ids
    }

    fn call_bluff(&mut self, _snapshot: &SessionSnapshot, _party: usize) -> bool {
        self.rng.random_bool(CALL_PROBABILITY)
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
