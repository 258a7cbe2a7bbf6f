//! Asynchronous role lookup seam
//!
//! The resolver issues one lookup per navigation; implementations are the
//! mock [`StaticRoleLookup`] and the real [`HttpRoleLookup`].

use crate::error::HelpError;
use crate::role::ViewerRole;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Source of the session's viewer role
#[async_trait]
pub trait RoleLookup: Send + Sync {
    /// Resolve the current role, `Ok(None)` when the backend has none
    async fn current_role(&self) -> Result<Option<ViewerRole>, HelpError>;
}

/// Mock lookup returning a configured outcome, optionally delayed
#[derive(Debug, Clone)]
pub struct StaticRoleLookup {
    outcome: Result<Option<ViewerRole>, HelpError>,
    delay: Duration,
}

impl StaticRoleLookup {
    /// Lookup that resolves to `role`
    #[inline]
    #[must_use]
    pub fn role(role: ViewerRole) -> Self {
        Self {
            outcome: Ok(Some(role)),
            delay: Duration::ZERO,
        }
    }

    /// Lookup that resolves with no usable role
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self {
            outcome: Ok(None),
            delay: Duration::ZERO,
        }
    }

    /// Lookup that fails
    #[inline]
    #[must_use]
    pub fn failing() -> Self {
        Self {
            outcome: Err(HelpError::Lookup),
            delay: Duration::ZERO,
        }
    }

    /// With an artificial resolution delay
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl RoleLookup for StaticRoleLookup {
    async fn current_role(&self) -> Result<Option<ViewerRole>, HelpError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

#[derive(Debug, Deserialize)]
struct RolePayload {
    role: String,
}

/// Real lookup against the dashboard session endpoint
#[derive(Debug, Clone)]
pub struct HttpRoleLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRoleLookup {
    /// Create lookup against `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Session-role endpoint URL
    #[must_use]
    pub fn role_url(&self) -> String {
        format!("{}/api/v1/session/role", self.base_url)
    }
}

#[async_trait]
impl RoleLookup for HttpRoleLookup {
    async fn current_role(&self) -> Result<Option<ViewerRole>, HelpError> {
        let response = self
            .client
            .get(self.role_url())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("role lookup request failed: {e}");
                HelpError::Lookup
            })?;
        if !response.status().is_success() {
            tracing::error!("role lookup returned {}", response.status());
            return Err(HelpError::Lookup);
        }

        let payload: RolePayload = response.json().await.map_err(|e| {
            tracing::error!("role lookup body unreadable: {e}");
            HelpError::Lookup
        })?;

        // An unknown role value is "no usable role", not an error
        Ok(ViewerRole::parse_opt(&payload.role))
    }
}
