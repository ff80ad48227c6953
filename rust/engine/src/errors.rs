use thiserror::Error;

/// Failures the core cannot recover from.
///
/// Every other irregular input (a stray intent, an unknown card id) is policy
/// and handled as a no-op; only a broken random source ends the game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Random source failure: {0}")]
    RandomSource(String),
    #[error("Random source exhausted")]
    RandomExhausted,
}
