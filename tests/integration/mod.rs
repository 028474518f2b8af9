//! Integration tests for word-duel
//!
//! These tests drive the real reqwest transport and service clients
//! against a local mock server.

pub mod config_tests;
pub mod game_tests;
pub mod hint_tests;
pub mod transport_tests;
pub mod validation_tests;
