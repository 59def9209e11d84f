//! Session - one user's store plus the page configuration
//!
//! The host creates a `Session` on first access and drops it when the user
//! session ends. Each request either submits a form (append, then render)
//! or just renders.

use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::entry::RaceEntry;
use crate::form::RaceForm;
use crate::store::RecordStore;
use crate::view::{self, Dashboard};
use crate::Result;

/// A single user session.
#[derive(Debug, Default)]
pub struct Session {
    store: RecordStore,
    config: DashboardConfig,
}

impl Session {
    /// Create an empty session with the default page configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with a custom configuration.
    #[must_use]
    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            store: RecordStore::new(),
            config,
        }
    }

    /// Get the page configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Get the session's record store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Coerce a form submission and append it.
    ///
    /// Returns the success message to show. A rejected submission leaves
    /// the store untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the form fails coercion or validation.
    pub fn submit(&mut self, form: RaceForm) -> Result<&str> {
        let entry = form.into_entry().map_err(|err| {
            warn!(error = %err, "race entry rejected");
            err
        })?;
        self.record(entry);
        Ok(&self.config.success_message)
    }

    /// Append an already validated entry.
    pub fn record(&mut self, entry: RaceEntry) {
        info!(
            participant = entry.participant(),
            race = entry.race_name(),
            "race entry added"
        );
        self.store.append(entry);
    }

    /// Derive the page from everything submitted so far.
    #[must_use]
    pub fn render(&self) -> Dashboard {
        view::derive(&self.store, &self.config)
    }
}
