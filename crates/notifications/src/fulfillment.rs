//! The pair of collaborators injected into an inventory at construction.

use std::sync::Arc;

use crate::error::DeliveryError;
use crate::service::{MailService, ShippingService};

/// Shipping + mail capabilities used to fulfill purchases.
///
/// Cloning is cheap; both halves are reference counted.
#[derive(Clone)]
pub struct Fulfillment {
    shipping: Arc<dyn ShippingService>,
    mail: Arc<dyn MailService>,
}

impl Fulfillment {
    pub fn new(
        shipping: impl ShippingService + 'static,
        mail: impl MailService + 'static,
    ) -> Self {
        Self {
            shipping: Arc::new(shipping),
            mail: Arc::new(mail),
        }
    }

    /// Use one collaborator for both channels.
    pub fn shared<N>(notifier: Arc<N>) -> Self
    where
        N: ShippingService + MailService + 'static,
    {
        let shipping: Arc<dyn ShippingService> = notifier.clone();
        let mail: Arc<dyn MailService> = notifier;
        Self { shipping, mail }
    }

    pub fn ship_order(&self, address: &str) -> Result<(), DeliveryError> {
        self.shipping.ship_order(address)
    }

    pub fn send_digital_delivery(&self, contact: &str) -> Result<(), DeliveryError> {
        self.mail.send_digital_delivery(contact)
    }
}

impl core::fmt::Debug for Fulfillment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fulfillment").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Notification, RecordingNotifier};

    #[test]
    fn shared_routes_both_channels_to_one_notifier() {
        let notifier = Arc::new(RecordingNotifier::new());
        let fulfillment = Fulfillment::shared(notifier.clone());

        fulfillment.ship_order("Cairo, Egypt").unwrap();
        fulfillment.send_digital_delivery("test@test.com").unwrap();

        assert_eq!(
            notifier.notifications(),
            vec![
                Notification::Shipment {
                    address: "Cairo, Egypt".to_string()
                },
                Notification::DigitalDelivery {
                    contact: "test@test.com".to_string()
                },
            ]
        );
    }

    #[test]
    fn new_keeps_channels_separate() {
        let shipping = Arc::new(RecordingNotifier::new());
        let mail = Arc::new(RecordingNotifier::new());
        let fulfillment = Fulfillment::new(shipping.clone(), mail.clone());

        fulfillment.ship_order("New Cairo, Egypt").unwrap();

        assert_eq!(shipping.shipments(), vec!["New Cairo, Egypt".to_string()]);
        assert!(mail.notifications().is_empty());
    }
}
