//! Collaborator contracts (mechanics only).
//!
//! Implementations must be safe to share across threads; the inventory holds
//! them behind `Arc` and calls them synchronously from `buy`.

use std::sync::Arc;

use crate::error::DeliveryError;

/// Ships a physical order to a postal address.
pub trait ShippingService: Send + Sync {
    fn ship_order(&self, address: &str) -> Result<(), DeliveryError>;
}

/// Delivers a digital item to a customer contact (email address).
pub trait MailService: Send + Sync {
    fn send_digital_delivery(&self, contact: &str) -> Result<(), DeliveryError>;
}

impl<S> ShippingService for Arc<S>
where
    S: ShippingService + ?Sized,
{
    fn ship_order(&self, address: &str) -> Result<(), DeliveryError> {
        (**self).ship_order(address)
    }
}

impl<M> MailService for Arc<M>
where
    M: MailService + ?Sized,
{
    fn send_digital_delivery(&self, contact: &str) -> Result<(), DeliveryError> {
        (**self).send_digital_delivery(contact)
    }
}
