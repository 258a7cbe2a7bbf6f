//! Store facade and configuration
//!
//! [`OrgAccessStore`] is what the dashboard talks to. It owns the
//! identifier guards and delegates everything else to the configured
//! backend: local (mock mode) or HTTP (real mode).

use crate::backend::OrgBackend;
use crate::error::OrgAccessError;
use crate::http::HttpOrgBackend;
use crate::local::LocalOrgBackend;
use crate::record::{OrgAction, OrganisationAccessRecord};
use carehub_localstore::{KeyValueStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;

/// Data-source selection for the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// Serve from the local persisted store
    #[default]
    Mock,
    /// Serve from the remote HTTP API
    Real,
}

/// Store configuration
#[derive(Debug, Clone)]
pub struct OrgAccessConfig {
    /// Backend selection
    pub mode: StoreMode,
    /// Remote API base URL (real mode)
    pub base_url: String,
    /// Artificial pacing delay (mock mode)
    pub mock_delay: Duration,
}

impl OrgAccessConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With backend mode
    #[inline]
    #[must_use]
    pub fn with_mode(mut self, mode: StoreMode) -> Self {
        self.mode = mode;
        self
    }

    /// With remote base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With mock pacing delay
    #[inline]
    #[must_use]
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }
}

impl Default for OrgAccessConfig {
    fn default() -> Self {
        Self {
            mode: StoreMode::Mock,
            base_url: "http://localhost:8080".to_string(),
            mock_delay: Duration::from_millis(90),
        }
    }
}

/// Organisation access store
///
/// One list of [`OrganisationAccessRecord`]s per opaque client id, mutated
/// only through [`OrgAccessStore::update`]. Empty identifiers degrade to
/// reads rather than erroring.
pub struct OrgAccessStore {
    backend: Arc<dyn OrgBackend>,
    mode: StoreMode,
}

impl std::fmt::Debug for OrgAccessStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrgAccessStore")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl OrgAccessStore {
    /// Create store from configuration
    ///
    /// Mock mode persists into a fresh in-process store; use
    /// [`OrgAccessStore::with_local_store`] to supply durable storage.
    #[must_use]
    pub fn new(config: &OrgAccessConfig) -> Self {
        match config.mode {
            StoreMode::Mock => Self::with_local_store(config, Arc::new(MemoryStore::new())),
            StoreMode::Real => Self {
                backend: Arc::new(HttpOrgBackend::new(config.base_url.clone())),
                mode: StoreMode::Real,
            },
        }
    }

    /// Create mock-mode store over the given local store
    #[must_use]
    pub fn with_local_store(config: &OrgAccessConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Arc::new(LocalOrgBackend::new(store, config.mock_delay)),
            mode: StoreMode::Mock,
        }
    }

    /// Create store over an explicit backend (tests, custom transports)
    #[must_use]
    pub fn with_backend(mode: StoreMode, backend: Arc<dyn OrgBackend>) -> Self {
        Self { backend, mode }
    }

    /// Configured mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    /// List the client's organisation-access records
    ///
    /// An empty client id yields an empty list without touching the
    /// backend.
    pub async fn list(
        &self,
        client_id: &str,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError> {
        if client_id.trim().is_empty() {
            tracing::debug!("list called with empty client id");
            return Ok(Vec::new());
        }
        self.backend.list(client_id).await
    }

    /// Apply a status transition and return the resulting list
    ///
    /// An empty client or organisation id degrades to [`OrgAccessStore::list`].
    pub async fn update(
        &self,
        client_id: &str,
        org_id: &str,
        action: OrgAction,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError> {
        if client_id.trim().is_empty() || org_id.trim().is_empty() {
            tracing::debug!("update called with empty identifier, degrading to list");
            return self.list(client_id).await;
        }
        tracing::debug!("applying {action} to organisation {org_id} for client {client_id}");
        self.backend.update(client_id, org_id, action).await
    }

    /// Bulk-replace the client's list; no-op in real mode
    pub async fn replace_all(
        &self,
        client_id: &str,
        records: Vec<OrganisationAccessRecord>,
    ) -> Result<(), OrgAccessError> {
        if client_id.trim().is_empty() {
            return Ok(());
        }
        self.backend.replace_all(client_id, records).await
    }

    /// Restore the client's list to the seed; no-op in real mode
    pub async fn reset_to_seed(&self, client_id: &str) -> Result<(), OrgAccessError> {
        if client_id.trim().is_empty() {
            return Ok(());
        }
        self.backend.reset_to_seed(client_id).await
    }
}
