//! End-to-end tests against the public lexical services
//!
//! Ignored by default; they need network access. Run with
//! `cargo test -- --ignored`.

pub mod live_services;
