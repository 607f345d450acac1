//! Application state for the payroll ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{NotificationSender, RecordStore, TracingNotifier};

/// Shared application state.
///
/// Holds the loaded configuration, the record store and the notification
/// sender behind `Arc`s so the state is cheap to clone into handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn NotificationSender>,
}

impl AppState {
    /// Creates application state with a logging notifier.
    pub fn new(config: ConfigLoader, store: impl RecordStore + 'static) -> Self {
        Self::with_notifier(config, store, TracingNotifier)
    }

    /// Creates application state with an explicit notification sender.
    pub fn with_notifier(
        config: ConfigLoader,
        store: impl RecordStore + 'static,
        notifier: impl NotificationSender + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            notifier: Arc::new(notifier),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Returns the notification sender.
    pub fn notifier(&self) -> &dyn NotificationSender {
        self.notifier.as_ref()
    }
}
