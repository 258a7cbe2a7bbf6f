//! Viewer roles and path-based role inference

use crate::error::HelpError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Access-level persona the current session operates under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    /// A family member of the cared-for client
    Family,
    /// A carer delivering support
    Carer,
    /// Organisation management
    Management,
}

impl ViewerRole {
    /// Wire and hint representation
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Carer => "carer",
            Self::Management => "management",
        }
    }

    /// Parse a hint value, ignoring anything outside the known domain
    #[must_use]
    pub fn parse_opt(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "family" => Some(Self::Family),
            "carer" => Some(Self::Carer),
            "management" => Some(Self::Management),
            _ => None,
        }
    }
}

impl FromStr for ViewerRole {
    type Err = HelpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_opt(s).ok_or_else(|| HelpError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route prefixes only management views use
const MANAGEMENT_PREFIXES: &[&str] = &[
    "/icon_dashboard",
    "/staff_list",
    "/client_list",
    "/organisation_settings",
];

/// Route prefixes that identify family views
const FAMILY_PREFIXES: &[&str] = &["/calendar", "/client_profile", "/family_dashboard"];

/// Infer the viewer role purely from the current path
///
/// The fallback of last resort when no hint is set and the asynchronous
/// lookup failed or returned nothing usable. Checked in order: management
/// prefixes, family prefixes, the carer marker, then family.
#[must_use]
pub fn infer_role_from_path(path: &str) -> ViewerRole {
    let path = path.to_lowercase();
    if MANAGEMENT_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return ViewerRole::Management;
    }
    if FAMILY_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return ViewerRole::Family;
    }
    if path.contains("carer") {
        return ViewerRole::Carer;
    }
    ViewerRole::Family
}
