use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Number of cards in a freshly dealt or refilled hand.
pub const HAND_SIZE: usize = 5;

/// An ordered run of cards held by one party.
///
/// Cards only ever leave a hand through [`Hand::remove_played`]; an emptied
/// hand is replaced wholesale by a fresh deal rather than topped up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<Card> {
        self.cards.iter().copied().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Removes every card in `played` that is still in the hand, matched by
    /// id. Cards that are not present are skipped. Returns how many were
    /// removed.
    pub fn remove_played(&mut self, played: &[Card]) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| !played.iter().any(|p| p.id == c.id));
        before - self.cards.len()
    }
}
