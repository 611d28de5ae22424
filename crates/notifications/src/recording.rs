//! In-memory notifier for tests/dev.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::DeliveryError;
use crate::service::{MailService, ShippingService};

/// A notification sent through one of the collaborator channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum Notification {
    Shipment { address: String },
    DigitalDelivery { contact: String },
}

/// Records every notification in call order instead of delivering it.
///
/// - No IO
/// - `failing()` builds a notifier that rejects every request and records nothing
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    reject_all: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_all: true,
        }
    }

    /// Everything recorded so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    pub fn shipments(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Shipment { address } => Some(address),
                Notification::DigitalDelivery { .. } => None,
            })
            .collect()
    }

    pub fn deliveries(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::DigitalDelivery { contact } => Some(contact),
                Notification::Shipment { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.clear();
        }
    }

    fn record(&self, channel: &'static str, notification: Notification) -> Result<(), DeliveryError> {
        if self.reject_all {
            return Err(DeliveryError::rejected(channel, "notifier configured to fail"));
        }
        let mut sent = self.sent.lock().map_err(|_| DeliveryError::Poisoned)?;
        sent.push(notification);
        Ok(())
    }
}

impl ShippingService for RecordingNotifier {
    fn ship_order(&self, address: &str) -> Result<(), DeliveryError> {
        self.record(
            "shipping",
            Notification::Shipment {
                address: address.to_string(),
            },
        )
    }
}

impl MailService for RecordingNotifier {
    fn send_digital_delivery(&self, contact: &str) -> Result<(), DeliveryError> {
        self.record(
            "mail",
            Notification::DigitalDelivery {
                contact: contact.to_string(),
            },
        )
    }
}
