//! Type conversions for DuelError

use super::types::DuelError;
use crate::core::providers::LookupError;

impl From<LookupError> for DuelError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidRequest { message, .. } => DuelError::Validation(message),
            other => DuelError::Lookup(other),
        }
    }
}
