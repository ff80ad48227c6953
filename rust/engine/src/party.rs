use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;

/// Number of seats at the table.
pub const PARTY_COUNT: usize = 2;

/// One of the two players at the table.
/// Once eliminated a party stays eliminated for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    name: String,
    hand: Hand,
    alive: bool,
}

impl Party {
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
            alive: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn eliminate(&mut self) {
        self.alive = false;
    }

    pub fn view(&self) -> PartyView {
        PartyView {
            name: self.name.clone(),
            cards: self.hand.cards().to_vec(),
            alive: self.alive,
        }
    }
}

/// Read-only copy of a party handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyView {
    pub name: String,
    /// Cards in hand order
    pub cards: Vec<Card>,
    pub alive: bool,
}
