//! Notification collaborators invoked while fulfilling a purchase.
//!
//! The inventory only knows these traits; shipping carriers and mail
//! gateways live behind them.

pub mod error;
pub mod fulfillment;
pub mod recording;
pub mod service;
pub mod tracing_notifier;

pub use error::DeliveryError;
pub use fulfillment::Fulfillment;
pub use recording::{Notification, RecordingNotifier};
pub use service::{MailService, ShippingService};
pub use tracing_notifier::TracingNotifier;
