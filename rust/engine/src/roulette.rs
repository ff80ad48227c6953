//! The elimination check faced by whoever was wrong about a bluff.
//!
//! A six-chamber draw with two live chambers: a roll of 1 or 2 eliminates,
//! anything else survives, for a 1-in-3 chance of elimination.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::party::Party;
use crate::rng::RandomSource;

pub const CHAMBERS: u32 = 6;
pub const LIVE_CHAMBERS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Survived,
    Eliminated,
}

/// Runs the elimination check for `party`.
///
/// The party is not modified; on [`Outcome::Eliminated`] the caller is
/// responsible for calling [`Party::eliminate`].
///
/// # Errors
///
/// Propagates any failure of the random source.
///
/// ```
/// use liarsclub_engine::hand::Hand;
/// use liarsclub_engine::party::Party;
/// use liarsclub_engine::rng::ScriptedRandom;
/// use liarsclub_engine::roulette::{resolve_risk, Outcome};
///
/// let party = Party::new("Player 1", Hand::default());
/// let mut rng = ScriptedRandom::new([2, 3]);
/// assert_eq!(resolve_risk(&party, &mut rng), Ok(Outcome::Eliminated));
/// assert_eq!(resolve_risk(&party, &mut rng), Ok(Outcome::Survived));
/// ```
pub fn resolve_risk(party: &Party, rng: &mut dyn RandomSource) -> Result<Outcome, GameError> {
    let chamber = rng.roll(1, CHAMBERS)?;
    let outcome = if chamber <= LIVE_CHAMBERS {
        Outcome::Eliminated
    } else {
        Outcome::Survived
    };
    tracing::debug!(party = party.name(), chamber, ?outcome, "elimination check");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;
    use crate::rng::{ScriptedRandom, SeededRandom};

    #[test]
    fn each_chamber_maps_to_expected_outcome() {
        let party = Party::new("p", Hand::default());
        let mut rng = ScriptedRandom::new(1..=6);
        let outcomes: Vec<Outcome> = (0..6)
            .map(|_| resolve_risk(&party, &mut rng).unwrap())
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Eliminated,
                Outcome::Eliminated,
                Outcome::Survived,
                Outcome::Survived,
                Outcome::Survived,
                Outcome::Survived,
            ]
        );
    }

    #[test]
    fn elimination_rate_is_about_one_third() {
        let party = Party::new("p", Hand::default());
        let mut rng = SeededRandom::new(2024);
        let trials = 6_000;
        let eliminated = (0..trials)
            .map(|_| resolve_risk(&party, &mut rng).unwrap())
            .filter(|outcome| *outcome == Outcome::Eliminated)
            .count();
        let rate = eliminated as f64 / trials as f64;
        assert!((0.30..0.37).contains(&rate), "rate was {}", rate);
    }

    #[test]
    fn does_not_touch_the_party() {
        let party = Party::new("p", Hand::default());
        let mut rng = ScriptedRandom::new([1]);
        assert_eq!(resolve_risk(&party, &mut rng), Ok(Outcome::Eliminated));
        assert!(party.is_alive());
    }

    #[test]
    fn random_failure_propagates() {
        let party = Party::new("p", Hand::default());
        let mut rng = ScriptedRandom::new(Vec::new());
        assert_eq!(
            resolve_risk(&party, &mut rng),
            Err(GameError::RandomExhausted)
        );
    }
}
