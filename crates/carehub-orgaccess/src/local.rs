//! Mock-mode backend serving from a local key-value store
//!
//! Persists one JSON-serialized record list per client under a
//! deterministic key, reseeding from the fixed reference list whenever the
//! persisted value is absent or malformed. A small artificial delay
//! approximates network pacing.

use crate::backend::OrgBackend;
use crate::error::OrgAccessError;
use crate::record::{OrgAction, OrganisationAccessRecord};
use crate::seed::seed_records;
use async_trait::async_trait;
use carehub_localstore::KeyValueStore;
use std::sync::Arc;
use std::time::Duration;

/// Storage key for a client's record list
#[inline]
#[must_use]
pub fn storage_key(client_id: &str) -> String {
    format!("org_access::{client_id}")
}

/// Local-store backend used in mock mode
#[derive(Debug, Clone)]
pub struct LocalOrgBackend {
    store: Arc<dyn KeyValueStore>,
    delay: Duration,
}

impl LocalOrgBackend {
    /// Create backend over `store` with the given pacing delay
    #[inline]
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, delay: Duration) -> Self {
        Self { store, delay }
    }

    async fn pace(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Load the client's persisted list, reseeding on miss or malformed data
    fn load_or_seed(&self, client_id: &str) -> Vec<OrganisationAccessRecord> {
        let key = storage_key(client_id);
        if let Some(raw) = self.store.get(&key) {
            match serde_json::from_str(&raw) {
                Ok(records) => return records,
                Err(e) => {
                    tracing::warn!("malformed org list for client {client_id}, reseeding: {e}");
                }
            }
        }
        let seeded = seed_records();
        self.persist(client_id, &seeded);
        seeded
    }

    fn persist(&self, client_id: &str, records: &[OrganisationAccessRecord]) {
        match serde_json::to_string(records) {
            Ok(raw) => self.store.put(&storage_key(client_id), &raw),
            Err(e) => tracing::warn!("failed to serialize org list for client {client_id}: {e}"),
        }
    }
}

#[async_trait]
impl OrgBackend for LocalOrgBackend {
    async fn list(
        &self,
        client_id: &str,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError> {
        self.pace().await;
        Ok(self.load_or_seed(client_id))
    }

    async fn update(
        &self,
        client_id: &str,
        org_id: &str,
        action: OrgAction,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError> {
        self.pace().await;
        let mut records = self.load_or_seed(client_id);
        match records.iter_mut().find(|r| r.id == org_id) {
            Some(record) => {
                record.status = action.resulting_status();
                self.persist(client_id, &records);
            }
            None => {
                tracing::warn!("update for unknown organisation {org_id}, list unchanged");
            }
        }
        Ok(records)
    }

    async fn replace_all(
        &self,
        client_id: &str,
        records: Vec<OrganisationAccessRecord>,
    ) -> Result<(), OrgAccessError> {
        self.persist(client_id, &records);
        Ok(())
    }

    async fn reset_to_seed(&self, client_id: &str) -> Result<(), OrgAccessError> {
        self.persist(client_id, &seed_records());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OrgStatus;
    use carehub_localstore::MemoryStore;
    use pretty_assertions::assert_eq;

    fn backend() -> (LocalOrgBackend, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (
            LocalOrgBackend::new(store.clone(), Duration::ZERO),
            store,
        )
    }

    #[tokio::test]
    async fn list_seeds_on_first_access() {
        let (backend, store) = backend();
        let records = backend.list("client-1").await.unwrap();
        assert_eq!(records, seed_records());
        // Seed is persisted, not recomputed per call
        assert!(store.get(&storage_key("client-1")).is_some());
    }

    #[tokio::test]
    async fn malformed_persisted_list_reseeds() {
        let (backend, store) = backend();
        store.put(&storage_key("client-1"), "{ not json");

        let records = backend.list("client-1").await.unwrap();
        assert_eq!(records, seed_records());
    }

    #[tokio::test]
    async fn update_transitions_and_persists() {
        let (backend, _) = backend();
        let records = backend
            .update("client-1", "org-002", OrgAction::Approve)
            .await
            .unwrap();

        let updated = records.iter().find(|r| r.id == "org-002").unwrap();
        assert_eq!(updated.status, OrgStatus::Approved);

        // The persisted list reflects the transition
        let listed = backend.list("client-1").await.unwrap();
        assert_eq!(listed, records);
    }

    #[tokio::test]
    async fn update_unknown_org_leaves_list_unchanged() {
        let (backend, _) = backend();
        let before = backend.list("client-1").await.unwrap();
        let after = backend
            .update("client-1", "org-999", OrgAction::Revoke)
            .await
            .unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn lists_are_scoped_per_client() {
        let (backend, _) = backend();
        backend
            .update("client-1", "org-001", OrgAction::Revoke)
            .await
            .unwrap();

        let other = backend.list("client-2").await.unwrap();
        assert_eq!(other, seed_records());
    }

    #[tokio::test]
    async fn pacing_delay_is_applied() {
        let store = Arc::new(MemoryStore::new());
        let backend = LocalOrgBackend::new(store, Duration::from_millis(30));

        let started = std::time::Instant::now();
        backend.list("client-1").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
