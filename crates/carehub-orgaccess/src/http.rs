//! Real-mode backend over the dashboard HTTP API
//!
//! Reads and updates a client's organisation list against the remote
//! endpoint. Updates re-fetch the full list afterwards; the server is the
//! single source of truth and nothing is merged optimistically.

use crate::backend::OrgBackend;
use crate::error::OrgAccessError;
use crate::record::{OrgAction, OrganisationAccessRecord};
use async_trait::async_trait;
use serde_json::json;

/// HTTP backend used in real mode
#[derive(Debug, Clone)]
pub struct HttpOrgBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrgBackend {
    /// Create backend against `base_url` (scheme + host, no trailing slash)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Collection URL for a client's organisations
    #[must_use]
    pub fn organisations_url(&self, client_id: &str) -> String {
        format!("{}/api/v1/clients/{client_id}/organisations", self.base_url)
    }

    async fn fetch_list(
        &self,
        client_id: &str,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError> {
        let url = self.organisations_url(client_id);
        tracing::debug!("fetching organisation list from {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("organisation list request failed: {e}");
            OrgAccessError::Fetch
        })?;
        if !response.status().is_success() {
            tracing::error!("organisation list returned {}", response.status());
            return Err(OrgAccessError::Fetch);
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("organisation list body unreadable: {e}");
            OrgAccessError::Fetch
        })?;

        // A body that is not a sequence is treated as an empty list
        let Some(items) = body.as_array() else {
            tracing::warn!("organisation list for client {client_id} was not an array");
            return Ok(Vec::new());
        };

        let records: Vec<OrganisationAccessRecord> = items
            .iter()
            .filter_map(|item| match serde_json::from_value(item.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("skipping malformed organisation entry: {e}");
                    None
                }
            })
            .collect();
        Ok(records)
    }
}

#[async_trait]
impl OrgBackend for HttpOrgBackend {
    async fn list(
        &self,
        client_id: &str,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError> {
        self.fetch_list(client_id).await
    }

    async fn update(
        &self,
        client_id: &str,
        org_id: &str,
        action: OrgAction,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError> {
        let url = format!("{}/{org_id}", self.organisations_url(client_id));
        tracing::debug!("posting {action} for organisation {org_id}");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "action": action.as_str() }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("organisation update request failed: {e}");
                OrgAccessError::Fetch
            })?;
        if !response.status().is_success() {
            tracing::error!("organisation update returned {}", response.status());
            return Err(OrgAccessError::Fetch);
        }

        // Response body is ignored; the re-fetched list is the source of truth
        self.fetch_list(client_id).await
    }

    async fn replace_all(
        &self,
        _client_id: &str,
        _records: Vec<OrganisationAccessRecord>,
    ) -> Result<(), OrgAccessError> {
        tracing::debug!("replace_all ignored in real mode");
        Ok(())
    }

    async fn reset_to_seed(&self, _client_id: &str) -> Result<(), OrgAccessError> {
        tracing::debug!("reset_to_seed ignored in real mode");
        Ok(())
    }
}
