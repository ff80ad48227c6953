//! Text rendering of cards, hands and announcements.
//!
//! Pure functions; nothing here writes to a stream.
//!
//! ## Example
//!
//! ```rust
//! use liarsclub_engine::cards::{Card, CardId, Rank};
//! use liarsclub_cli::formatters::{format_card, format_hand};
//!
//! let king = Card { id: CardId(3), rank: Rank::King };
//! assert_eq!(format_card(&king), "K");
//! assert_eq!(format_hand(&[king], &[CardId(3)]), "1:[K]");
//! ```

use liarsclub_engine::cards::{Card, CardId, Rank};
use liarsclub_engine::events::Announcement;
use liarsclub_engine::game::SessionSnapshot;
use liarsclub_engine::roulette::Outcome;

pub fn rank_letter(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::King => "K",
        Rank::Queen => "Q",
        Rank::Jack => "J",
    }
}

pub fn format_card(card: &Card) -> String {
    rank_letter(card.rank).to_string()
}

/// Hand with 1-based positions; selected cards are bracketed.
pub fn format_hand(cards: &[Card], selected: &[CardId]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if selected.contains(&c.id) {
                format!("{}:[{}]", i + 1, format_card(c))
            } else {
                format!("{}:{}", i + 1, format_card(c))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "card"
    } else {
        "cards"
    }
}

/// One line describing `event`. Party indices are resolved to names
/// through `snap`.
pub fn format_announcement(event: &Announcement, snap: &SessionSnapshot) -> String {
    match event {
        Announcement::TurnStarted {
            party,
            declared_rank,
        } => format!(
            "Turn for {}. Declared rank: {}",
            snap.name_of(*party),
            declared_rank
        ),
        Announcement::CardsPlayed {
            party,
            count,
            declared_rank,
        } => format!(
            "{} plays {} {}, claiming {}",
            snap.name_of(*party),
            count,
            plural(*count),
            declared_rank
        ),
        Announcement::BluffCalled { caller, declarer } => format!(
            "{} calls {}'s bluff!",
            snap.name_of(*caller),
            snap.name_of(*declarer)
        ),
        Announcement::BluffRevealed {
            declarer,
            was_bluff,
        } => {
            if *was_bluff {
                format!("{} was lying!", snap.name_of(*declarer))
            } else {
                format!("{} told the truth.", snap.name_of(*declarer))
            }
        }
        Announcement::PlayAccepted { party } => {
            format!("{}'s play is accepted.", snap.name_of(*party))
        }
        Announcement::EliminationCheckStarted { party } => {
            format!("{} pulls the trigger...", snap.name_of(*party))
        }
        Announcement::EliminationResult { party, outcome } => match outcome {
            Outcome::Survived => format!("Click. {} survives.", snap.name_of(*party)),
            Outcome::Eliminated => format!("BANG! {} is eliminated.", snap.name_of(*party)),
        },
        Announcement::HandRefilled { party } => {
            format!("{} draws a fresh hand.", snap.name_of(*party))
        }
        Announcement::GameOver { winner } => match winner {
            Some(w) => format!("Game over. {} wins!", snap.name_of(*w)),
            None => "Game over. Nobody is left standing.".to_string(),
        },
    }
}
