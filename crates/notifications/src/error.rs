use thiserror::Error;

use bookstore_core::DomainError;

/// Failure reported by a notification collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The channel refused the request (carrier down, mailbox rejected, ...).
    #[error("{channel} delivery rejected: {reason}")]
    Rejected {
        channel: &'static str,
        reason: String,
    },

    /// Internal lock poisoning in an in-process collaborator.
    #[error("notifier state poisoned")]
    Poisoned,
}

impl DeliveryError {
    pub fn rejected(channel: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            channel,
            reason: reason.into(),
        }
    }
}

impl From<DeliveryError> for DomainError {
    fn from(err: DeliveryError) -> Self {
        DomainError::fulfillment(err.to_string())
    }
}
