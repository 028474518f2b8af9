//! Word validation pipeline
//!
//! Stages run in a fixed order and the first one to settle wins:
//!
//! 1. length gate (single letters A and I, whitelisted two-letter words)
//! 2. profanity gate
//! 3. common-word table
//! 4. dictionary lookup and part-of-speech screen
//! 5. gloss screen, or the lexeme fallback when the dictionary has no entry
//!
//! Transport failures in steps 4 and 5 become [`ErrorKind::NetworkError`].

pub mod resolver;
pub mod stages;
pub mod types;

pub use resolver::LexicalResolver;
pub use stages::{Flow, LocalStage, SAFETY_GLOSS};
pub use types::{ErrorKind, ValidationResult};
