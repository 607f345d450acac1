//! Collaborators outside the balance engine.
//!
//! The record store feeds records in; the notification sender carries
//! messages out. Neither is touched by the engine itself.

mod notify;
mod records;

pub use notify::{DeliveryOutcome, Notification, NotificationSender, TracingNotifier};
pub use records::{InMemoryStore, RecordStore, Snapshot, load_snapshot};
