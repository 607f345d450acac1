//! Outbound notification contract.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};

/// A message addressed to a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Destination phone number.
    pub destination: String,
    /// Message text, composed by the caller.
    pub body: String,
}

/// What the gateway reported back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    /// Whether the gateway accepted the message.
    pub delivered: bool,
    /// Gateway message id, when delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Gateway error, when not delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    /// Converts an undelivered outcome into `NotificationFailed`.
    pub fn into_result(self, destination: &str) -> LedgerResult<DeliveryOutcome> {
        if self.delivered {
            Ok(self)
        } else {
            Err(LedgerError::NotificationFailed {
                destination: destination.to_string(),
                message: self
                    .error
                    .unwrap_or_else(|| "gateway reported no error".to_string()),
            })
        }
    }
}

/// Sends notifications to employees.
pub trait NotificationSender: Send + Sync {
    /// Attempts delivery. Failures are reported in the outcome, not raised.
    fn send(&self, notification: &Notification) -> DeliveryOutcome;
}

/// Logs notifications instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSender for TracingNotifier {
    fn send(&self, notification: &Notification) -> DeliveryOutcome {
        if notification.destination.trim().is_empty() {
            warn!("Notification has no destination");
            return DeliveryOutcome {
                delivered: false,
                id: None,
                error: Some("destination is blank".to_string()),
            };
        }

        let id = Uuid::new_v4().to_string();
        info!(
            message_id = %id,
            destination = %notification.destination,
            length = notification.body.len(),
            "Notification sent"
        );
        DeliveryOutcome {
            delivered: true,
            id: Some(id),
            error: None,
        }
    }
}
