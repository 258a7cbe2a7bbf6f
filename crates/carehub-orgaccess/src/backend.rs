//! Backend seam for the organisation access store
//!
//! The facade talks to one of two implementations behind this trait:
//! [`crate::local::LocalOrgBackend`] in mock mode and
//! [`crate::http::HttpOrgBackend`] in real mode.

use crate::error::OrgAccessError;
use crate::record::{OrgAction, OrganisationAccessRecord};
use async_trait::async_trait;

/// Data source behind [`crate::OrgAccessStore`]
///
/// Identifier guards (empty client/org ids) live in the facade; backends
/// may assume non-empty identifiers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrgBackend: Send + Sync {
    /// Fetch the client's organisation-access list
    async fn list(
        &self,
        client_id: &str,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError>;

    /// Apply a status transition and return the resulting list
    async fn update(
        &self,
        client_id: &str,
        org_id: &str,
        action: OrgAction,
    ) -> Result<Vec<OrganisationAccessRecord>, OrgAccessError>;

    /// Bulk-replace the client's list; no-op outside mock mode
    async fn replace_all(
        &self,
        client_id: &str,
        records: Vec<OrganisationAccessRecord>,
    ) -> Result<(), OrgAccessError>;

    /// Restore the client's list to the seed; no-op outside mock mode
    async fn reset_to_seed(&self, client_id: &str) -> Result<(), OrgAccessError>;
}
