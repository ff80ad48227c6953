use crate::cards::{Card, CardId, Rank};
use crate::errors::GameError;
use crate::hand::{Hand, HAND_SIZE};
use crate::rng::RandomSource;

/// Card factory and the single owner of the card-id counter.
///
/// There is no finite pile: every card gets an independently drawn rank, so
/// a hand may hold any mix, including five of a kind. Ids increase by one per
/// card and are never handed out twice by the same deck.
#[derive(Debug, Default)]
pub struct Deck {
    next_id: u64,
}

impl Deck {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Number of cards created so far.
    pub fn issued(&self) -> u64 {
        self.next_id
    }

    pub fn draw_rank(&mut self, rng: &mut dyn RandomSource) -> Result<Rank, GameError> {
        let idx = rng.roll(0, 3)?;
        match Rank::from_index(idx) {
            Some(rank) => Ok(rank),
            None => Err(GameError::RandomSource(format!(
                "rank draw {} outside 0..=3",
                idx
            ))),
        }
    }

    pub fn deal_card(&mut self, rng: &mut dyn RandomSource) -> Result<Card, GameError> {
        let rank = self.draw_rank(rng)?;
        let id = CardId(self.next_id);
        self.next_id += 1;
        Ok(Card { id, rank })
    }

    pub fn deal_hand(&mut self, rng: &mut dyn RandomSource) -> Result<Hand, GameError> {
        let cards = (0..HAND_SIZE)
            .map(|_| self.deal_card(rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Hand::new(cards))
    }
}
