//! Game session
//!
//! Owns the per-match state the core leaves to its caller: whose turn it
//! is, scores, history and the set of words already played.

pub mod session;
pub mod types;

pub use session::GameSession;
pub use types::{AcceptedGuess, GuessRejection, HistoryEntry, PlayerId};
