use crate::cards::{Card, Rank};
use crate::engine::{Intent, Phase};
use crate::hand::HAND_SIZE;

/// Most cards a party may put down in a single play.
pub const MAX_SELECTION: usize = HAND_SIZE;

/// Whether `intent` is meaningful in `phase`.
///
/// Intents that fail this check are dropped without touching state. Starting
/// a new session is accepted from every phase, including [`Phase::GameOver`].
///
/// ```
/// use liarsclub_engine::engine::{Intent, Phase};
/// use liarsclub_engine::rules::accepts;
///
/// assert!(accepts(Phase::Selecting, &Intent::SubmitPlay));
/// assert!(!accepts(Phase::Selecting, &Intent::CallBluff));
/// assert!(accepts(Phase::AwaitingBluffDecision, &Intent::Pass));
/// assert!(!accepts(Phase::GameOver, &Intent::SubmitPlay));
/// ```
pub fn accepts(phase: Phase, intent: &Intent) -> bool {
    match intent {
        Intent::NewSession(..) => true,
        Intent::ToggleCardSelection(_) | Intent::SubmitPlay => phase == Phase::Selecting,
        Intent::CallBluff | Intent::Pass => phase == Phase::AwaitingBluffDecision,
    }
}

/// A play is a bluff as soon as one card differs from the declared rank.
///
/// ```
/// use liarsclub_engine::cards::{Card, CardId, Rank};
/// use liarsclub_engine::rules::is_bluff;
///
/// let king = Card { id: CardId(0), rank: Rank::King };
/// let queen = Card { id: CardId(1), rank: Rank::Queen };
/// assert!(!is_bluff(&[king], Rank::King));
/// assert!(is_bluff(&[king, queen], Rank::King));
/// ```
pub fn is_bluff(played: &[Card], declared: Rank) -> bool {
    played.iter().any(|c| c.rank != declared)
}

/// Who faces the elimination check after a bluff is called: the declarer
/// when the call was right, the caller when it was a false accusation.
pub fn risk_target(declarer: usize, caller: usize, was_bluff: bool) -> usize {
    if was_bluff {
        declarer
    } else {
        caller
    }
}

pub fn alive_count(alive: &[bool]) -> usize {
    alive.iter().filter(|a| **a).count()
}

/// Next living seat after `from`, walking the table in order and wrapping.
///
/// Dead seats are skipped; if every other seat is dead the walk comes back to
/// `from` itself when it is alive. Returns `None` only when nobody is alive.
pub fn next_living(alive: &[bool], from: usize) -> Option<usize> {
    let n = alive.len();
    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&idx| alive[idx])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// Selection already holds [`MAX_SELECTION`] cards
    Full,
}

/// Toggles `card` in `selected`, preserving selection order.
pub fn toggle_selection(selected: &mut Vec<Card>, card: Card) -> SelectionChange {
    if let Some(pos) = selected.iter().position(|c| c.id == card.id) {
        selected.remove(pos);
        SelectionChange::Removed
    } else if selected.len() < MAX_SELECTION {
        selected.push(card);
        SelectionChange::Added
    } else {
        SelectionChange::Full
    }
}
