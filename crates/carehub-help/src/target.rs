//! Help targets
//!
//! A help target names a page in the static help-content map and a section
//! anchor within it. Targets are immutable values recomputed on every
//! navigation; the full set lives in [`targets`].

use serde::Serialize;

/// (page key, section id) pair identifying help content to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HelpTarget {
    /// Identifier into the static help-content map
    pub page_key: &'static str,
    /// Anchor within the page
    pub section_id: &'static str,
}

impl HelpTarget {
    /// Create new target
    #[inline]
    #[must_use]
    pub const fn new(page_key: &'static str, section_id: &'static str) -> Self {
        Self {
            page_key,
            section_id,
        }
    }
}

impl std::fmt::Display for HelpTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.page_key, self.section_id)
    }
}

/// The static target table
///
/// Page keys follow `<area>/<page>`; section ids follow `<area>-<page>`,
/// with an `-overview` suffix on the per-role default dashboards.
pub mod targets {
    use super::HelpTarget;

    // Pre-login
    /// Login screen
    pub const LOGIN: HelpTarget = HelpTarget::new("prelogin/login", "login");
    /// Role selection screen
    pub const ROLE_SELECT: HelpTarget = HelpTarget::new("prelogin/role-select", "role-select");
    /// Family signup flow
    pub const SIGNUP_FAMILY: HelpTarget =
        HelpTarget::new("prelogin/signup-family", "signup-family");
    /// Carer signup flow
    pub const SIGNUP_CARER: HelpTarget = HelpTarget::new("prelogin/signup-carer", "signup-carer");
    /// Management signup flow (organisation chosen)
    pub const SIGNUP_MANAGEMENT: HelpTarget =
        HelpTarget::new("prelogin/signup-management", "signup-management");
    /// Management create-or-join organisation choice
    pub const MANAGEMENT_ORG_CHOICE: HelpTarget =
        HelpTarget::new("prelogin/management-org-choice", "management-org-choice");

    // Family
    /// Calendar budget/cost reports
    pub const FAMILY_BUDGET_REPORT: HelpTarget =
        HelpTarget::new("family/budget-report", "family-budget-report");
    /// Transaction history
    pub const FAMILY_TRANSACTION_HISTORY: HelpTarget =
        HelpTarget::new("family/transaction-history", "family-transaction-history");
    /// Care calendar
    pub const FAMILY_CALENDAR: HelpTarget = HelpTarget::new("family/calendar", "family-calendar");
    /// Client profile
    pub const FAMILY_CLIENT_PROFILE: HelpTarget =
        HelpTarget::new("family/client-profile", "family-client-profile");
    /// Payments
    pub const FAMILY_PAYMENTS: HelpTarget = HelpTarget::new("family/payments", "family-payments");
    /// Family dashboard (default)
    pub const FAMILY_DASHBOARD: HelpTarget =
        HelpTarget::new("family/dashboard", "family-dashboard-overview");

    // Carer
    /// Shift schedule
    pub const CARER_STAFF_SCHEDULE: HelpTarget =
        HelpTarget::new("carer/staff-schedule", "carer-staff-schedule");
    /// Transaction history
    pub const CARER_TRANSACTION_HISTORY: HelpTarget =
        HelpTarget::new("carer/transaction-history", "carer-transaction-history");
    /// Timesheets
    pub const CARER_TIMESHEETS: HelpTarget =
        HelpTarget::new("carer/timesheets", "carer-timesheets");
    /// Carer profile
    pub const CARER_PROFILE: HelpTarget = HelpTarget::new("carer/profile", "carer-profile");
    /// Carer dashboard (default)
    pub const CARER_DASHBOARD: HelpTarget =
        HelpTarget::new("carer/dashboard", "carer-dashboard-overview");

    // Management
    /// Staff list
    pub const MANAGEMENT_STAFF_LIST: HelpTarget =
        HelpTarget::new("management/staff-list", "management-staff-list");
    /// Staff schedule
    pub const MANAGEMENT_STAFF_SCHEDULE: HelpTarget =
        HelpTarget::new("management/staff-schedule", "management-staff-schedule");
    /// Client list
    pub const MANAGEMENT_CLIENT_LIST: HelpTarget =
        HelpTarget::new("management/client-list", "management-client-list");
    /// Client profile
    pub const MANAGEMENT_CLIENT_PROFILE: HelpTarget =
        HelpTarget::new("management/client-profile", "management-client-profile");
    /// Budget/cost reports
    pub const MANAGEMENT_BUDGET_REPORT: HelpTarget =
        HelpTarget::new("management/budget-report", "management-budget-report");
    /// Invoices
    pub const MANAGEMENT_INVOICES: HelpTarget =
        HelpTarget::new("management/invoices", "management-invoices");
    /// Management dashboard (default)
    pub const MANAGEMENT_DASHBOARD: HelpTarget =
        HelpTarget::new("management/dashboard", "management-dashboard-overview");
}
