//! Organisation access records and status transitions
//!
//! Defines the per-client record shape, the status domain, and the single
//! status-transition action records are mutated through.

use crate::error::OrgAccessError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Access status of an organisation for one client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgStatus {
    /// Access granted
    Approved,
    /// Request awaiting a decision
    Pending,
    /// Access withdrawn; terminal but still listed
    Revoked,
}

impl OrgStatus {
    /// Translate a raw backend status string
    ///
    /// The backend reports granted access as `active`; everything else in
    /// the canonical domain passes through unchanged.
    pub fn from_backend(raw: &str) -> Result<Self, OrgAccessError> {
        match raw.trim().to_lowercase().as_str() {
            "active" | "approved" => Ok(Self::Approved),
            "pending" => Ok(Self::Pending),
            "revoked" => Ok(Self::Revoked),
            other => Err(OrgAccessError::UnknownStatus(other.to_string())),
        }
    }

    /// Wire representation
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Revoked => "revoked",
        }
    }
}

impl FromStr for OrgStatus {
    type Err = OrgAccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_backend(s)
    }
}

impl std::fmt::Display for OrgStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status-transition action applied to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgAction {
    /// Grant access
    Approve,
    /// Decline a pending request
    Reject,
    /// Withdraw granted access
    Revoke,
}

impl OrgAction {
    /// Status a record ends up in after this action
    ///
    /// Reject collapses into `Revoked` rather than removing the record;
    /// the record stays listed either way.
    #[inline]
    #[must_use]
    pub fn resulting_status(&self) -> OrgStatus {
        match self {
            Self::Approve => OrgStatus::Approved,
            Self::Reject | Self::Revoke => OrgStatus::Revoked,
        }
    }

    /// Wire representation sent in update payloads
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Revoke => "revoke",
        }
    }
}

impl FromStr for OrgAction {
    type Err = OrgAccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "revoke" => Ok(Self::Revoke),
            other => Err(OrgAccessError::UnknownAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for OrgAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One organisation's access entry in a client's list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationAccessRecord {
    /// Opaque organisation identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Current access status
    pub status: OrgStatus,
}

impl OrganisationAccessRecord {
    /// Create new record
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: OrgStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }
}
