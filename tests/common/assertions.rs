//! Custom test assertions

use word_duel::{ErrorKind, ValidationResult};

/// Assertions for ValidationResult
pub trait ValidationAssertions {
    /// Assert the word was accepted
    fn assert_valid(&self);

    /// Assert the word was refused with `kind`
    fn assert_rejected(&self, kind: ErrorKind);
}

impl ValidationAssertions for ValidationResult {
    fn assert_valid(&self) {
        assert!(
            self.is_valid(),
            "Expected a valid word, got {:?}",
            self.error_kind()
        );
        assert_eq!(self.error_kind(), ErrorKind::None);
    }

    fn assert_rejected(&self, kind: ErrorKind) {
        assert!(!self.is_valid(), "Expected a rejection, got a valid word");
        assert_eq!(self.error_kind(), kind, "unexpected error kind");
    }
}
