//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every inventory operation validates up front and fails with the most
/// specific variant that applies. A failed operation leaves the collection
/// and every item's stock exactly as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input (blank identifier, non-positive quantity, bad price).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An item with this identifier is already stored.
    #[error("item with id {0} already exists in inventory")]
    DuplicateKey(ItemId),

    /// No item with this identifier is stored.
    #[error("item with id {0} not found in inventory")]
    NotFound(ItemId),

    /// The item exists but is never sold.
    #[error("item with id {0} is not for sale")]
    NotForSale(ItemId),

    /// A physical item does not hold enough copies for the requested quantity.
    #[error("insufficient stock for item with id {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: ItemId,
        available: u32,
        requested: u32,
    },

    /// A notification collaborator failed while fulfilling an accepted purchase.
    #[error("fulfillment failed: {0}")]
    Fulfillment(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn duplicate_key(id: &ItemId) -> Self {
        Self::DuplicateKey(id.clone())
    }

    pub fn not_found(id: &ItemId) -> Self {
        Self::NotFound(id.clone())
    }

    pub fn not_for_sale(id: &ItemId) -> Self {
        Self::NotForSale(id.clone())
    }

    pub fn insufficient_stock(id: &ItemId, available: u32, requested: u32) -> Self {
        Self::InsufficientStock {
            id: id.clone(),
            available,
            requested,
        }
    }

    pub fn fulfillment(msg: impl Into<String>) -> Self {
        Self::Fulfillment(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_reports_both_counts() {
        let err = DomainError::insufficient_stock(&ItemId::new("978-0134685991"), 3, 5);
        assert_eq!(
            err.to_string(),
            "insufficient stock for item with id 978-0134685991: available 3, requested 5"
        );
    }

    #[test]
    fn constructors_build_matching_variants() {
        let id = ItemId::new("A");
        assert_eq!(DomainError::duplicate_key(&id), DomainError::DuplicateKey(id.clone()));
        assert_eq!(DomainError::not_found(&id), DomainError::NotFound(id.clone()));
        assert_eq!(DomainError::not_for_sale(&id), DomainError::NotForSale(id));
        match DomainError::invalid_input("quantity must be positive") {
            DomainError::InvalidInput(msg) => assert!(msg.contains("quantity")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
