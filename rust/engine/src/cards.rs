use serde::{Deserialize, Serialize};
use std::fmt;

/// The four ranks a card can carry and a play can be declared as.
/// Ranks have no ordering in this game; only equality matters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace,
    /// King
    King,
    /// Queen
    Queen,
    /// Jack
    Jack,
}

impl Rank {
    /// Maps a draw in `0..=3` onto a rank.
    pub fn from_index(v: u32) -> Option<Rank> {
        match v {
            0 => Some(Rank::Ace),
            1 => Some(Rank::King),
            2 => Some(Rank::Queen),
            3 => Some(Rank::Jack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::King => "King",
            Rank::Queen => "Queen",
            Rank::Jack => "Jack",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a single dealt card. Only used to tell apart cards of the
/// same rank inside a hand; it carries no gameplay meaning.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A dealt card. Immutable once created by a [`crate::deck::Deck`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id assigned at deal time
    pub id: CardId,
    /// Face rank of the card
    pub rank: Rank,
}

pub fn all_ranks() -> [Rank; 4] {
    [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_covers_all_ranks_in_order() {
        let mapped: Vec<Rank> = (0..4).filter_map(Rank::from_index).collect();
        assert_eq!(mapped, all_ranks().to_vec());
    }

    #[test]
    fn from_index_rejects_values_past_jack() {
        assert_eq!(Rank::from_index(4), None);
        assert_eq!(Rank::from_index(u32::MAX), None);
    }

    #[test]
    fn rank_serializes_as_plain_name() {
        let json = serde_json::to_string(&Rank::Queen).unwrap();
        assert_eq!(json, "\"Queen\"");
    }

    #[test]
    fn card_id_is_transparent_in_json() {
        let card = Card {
            id: CardId(7),
            rank: Rank::Ace,
        };
        let value = serde_json::to_value(card).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["rank"], "Ace");
    }
}
