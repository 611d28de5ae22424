//! Notifier that reports each notification as a structured log event.

use crate::error::DeliveryError;
use crate::service::{MailService, ShippingService};

/// Stand-in for real carriers: logs the request and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl ShippingService for TracingNotifier {
    fn ship_order(&self, address: &str) -> Result<(), DeliveryError> {
        tracing::info!(channel = "shipping", %address, "order shipped");
        Ok(())
    }
}

impl MailService for TracingNotifier {
    fn send_digital_delivery(&self, contact: &str) -> Result<(), DeliveryError> {
        tracing::info!(channel = "mail", %contact, "digital delivery sent");
        Ok(())
    }
}
