//! Common test utilities for word-duel
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::MockServices;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let services = MockServices::start().await;
//!     services.dictionary_found("plane", "noun").await;
//!     let resolver = services.resolver();
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod services;

pub use services::MockServices;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
