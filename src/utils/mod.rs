//! Utility modules shared across the crate

pub mod error;
pub mod logging;
pub mod net;
