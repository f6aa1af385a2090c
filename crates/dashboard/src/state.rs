//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::holded::{HoldedClient, HoldedError};
use crate::services::{ContactService, ContactSource};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The contact source is injected rather than
/// looked up globally, so tests can swap in a fake.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    contacts: ContactService,
}

impl AppState {
    /// Create application state backed by the Holded API.
    ///
    /// # Errors
    ///
    /// Returns an error if the Holded client cannot be built.
    pub fn new(config: &DashboardConfig) -> Result<Self, HoldedError> {
        let client = HoldedClient::new(config.holded())?;
        Ok(Self::with_source(Arc::new(client)))
    }

    /// Create application state over any contact source.
    #[must_use]
    pub fn with_source(source: Arc<dyn ContactSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                contacts: ContactService::new(source),
            }),
        }
    }

    /// Get a reference to the contact service.
    #[must_use]
    pub fn contacts(&self) -> &ContactService {
        &self.inner.contacts
    }
}
