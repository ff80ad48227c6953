//! # liarsclub-engine: Bluffing Card Game Core
//!
//! Turn/bluff state machine for a two-party game of Liar's Club. Each turn
//! the active party puts down one to five cards under a declared rank; the
//! opponent either passes or calls bluff, and whoever turns out to be wrong
//! faces a 1-in-3 elimination check. The last party alive wins.
//!
//! The core is purely reactive: it never draws, sleeps or polls. A
//! presentation layer feeds it [`engine::Intent`]s through
//! [`game::GameSession`] and renders the returned [`game::SessionSnapshot`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank, card identity
//! - [`deck`] - Card factory and id counter
//! - [`hand`] - Hand composition and removal of played cards
//! - [`party`] - Parties and their read-only views
//! - [`roulette`] - The elimination check
//! - [`rules`] - Bluff truth, selection limits, turn order
//! - [`engine`] - Turn/bluff state machine
//! - [`game`] - Session facade and snapshots
//! - [`events`] - Announcements for the presentation layer
//! - [`logger`] - In-memory turn history
//! - [`rng`] - Injectable random sources
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use liarsclub_engine::engine::{Intent, Phase};
//! use liarsclub_engine::game::{default_names, GameSession};
//!
//! let mut session = GameSession::with_seed(default_names(), 42).unwrap();
//! let snap = session.snapshot();
//! assert_eq!(snap.phase, Phase::Selecting);
//!
//! let card = snap.active().cards[0].id;
//! session.apply_intent(Intent::ToggleCardSelection(card)).unwrap();
//! let snap = session.apply_intent(Intent::SubmitPlay).unwrap();
//! assert_eq!(snap.phase, Phase::AwaitingBluffDecision);
//!
//! let snap = session.apply_intent(Intent::CallBluff).unwrap();
//! assert!(matches!(snap.phase, Phase::Selecting | Phase::GameOver));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All randomness flows through [`rng::RandomSource`]. Seeded sessions are
//! reproducible, and [`rng::ScriptedRandom`] pins every draw for tests.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod party;
pub mod rng;
pub mod roulette;
pub mod rules;
