//! Error handling for word-duel
//!
//! This module defines the error types used outside the lookup clients.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{DuelError, Result};
