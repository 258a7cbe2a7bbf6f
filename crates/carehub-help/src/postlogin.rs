//! Post-login route classification
//!
//! One ordered matcher table per viewer role, evaluated against the
//! lowercased path; the first matching rule wins and every table ends in
//! a role-specific default dashboard target.

use crate::route::Route;
use crate::target::{targets, HelpTarget};
use crate::ViewerRole;
use once_cell::sync::Lazy;
use regex::Regex;

/// A single path condition
#[derive(Debug)]
enum MatchRule {
    /// Path starts with the literal
    Prefix(&'static str),
    /// Path contains the literal anywhere
    Contains(&'static str),
    /// Path matches the regex
    Pattern(Regex),
}

impl MatchRule {
    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Prefix(prefix) => path.starts_with(prefix),
            Self::Contains(needle) => path.contains(needle),
            Self::Pattern(pattern) => pattern.is_match(path),
        }
    }
}

/// One (condition, target) entry in a role's table
#[derive(Debug)]
struct RouteRule {
    rule: MatchRule,
    target: HelpTarget,
}

impl RouteRule {
    const fn new(rule: MatchRule, target: HelpTarget) -> Self {
        Self { rule, target }
    }
}

fn budget_report_pattern() -> Regex {
    // Calendar subpages for budget-report / category-cost variants
    Regex::new(r"^/calendar/.*(budget[_-]report|category[_-]cost)").expect("valid pattern")
}

fn transaction_history_pattern() -> Regex {
    Regex::new(r"transactions?([_-]history)?").expect("valid pattern")
}

static FAMILY_RULES: Lazy<Vec<RouteRule>> = Lazy::new(|| {
    vec![
        RouteRule::new(
            MatchRule::Pattern(budget_report_pattern()),
            targets::FAMILY_BUDGET_REPORT,
        ),
        RouteRule::new(
            MatchRule::Pattern(transaction_history_pattern()),
            targets::FAMILY_TRANSACTION_HISTORY,
        ),
        RouteRule::new(MatchRule::Prefix("/calendar"), targets::FAMILY_CALENDAR),
        RouteRule::new(
            MatchRule::Prefix("/client_profile"),
            targets::FAMILY_CLIENT_PROFILE,
        ),
        RouteRule::new(MatchRule::Contains("payment"), targets::FAMILY_PAYMENTS),
    ]
});

static CARER_RULES: Lazy<Vec<RouteRule>> = Lazy::new(|| {
    vec![
        RouteRule::new(
            MatchRule::Prefix("/staff_schedule"),
            targets::CARER_STAFF_SCHEDULE,
        ),
        RouteRule::new(
            MatchRule::Pattern(transaction_history_pattern()),
            targets::CARER_TRANSACTION_HISTORY,
        ),
        RouteRule::new(MatchRule::Contains("timesheet"), targets::CARER_TIMESHEETS),
        RouteRule::new(MatchRule::Prefix("/carer_profile"), targets::CARER_PROFILE),
    ]
});

static MANAGEMENT_RULES: Lazy<Vec<RouteRule>> = Lazy::new(|| {
    vec![
        RouteRule::new(
            MatchRule::Prefix("/staff_list"),
            targets::MANAGEMENT_STAFF_LIST,
        ),
        RouteRule::new(
            MatchRule::Prefix("/staff_schedule"),
            targets::MANAGEMENT_STAFF_SCHEDULE,
        ),
        RouteRule::new(
            MatchRule::Prefix("/client_list"),
            targets::MANAGEMENT_CLIENT_LIST,
        ),
        RouteRule::new(
            MatchRule::Prefix("/client_profile"),
            targets::MANAGEMENT_CLIENT_PROFILE,
        ),
        RouteRule::new(
            MatchRule::Pattern(budget_report_pattern()),
            targets::MANAGEMENT_BUDGET_REPORT,
        ),
        RouteRule::new(MatchRule::Contains("invoice"), targets::MANAGEMENT_INVOICES),
        RouteRule::new(
            MatchRule::Prefix("/icon_dashboard"),
            targets::MANAGEMENT_DASHBOARD,
        ),
    ]
});

/// Default dashboard target for a role
#[inline]
#[must_use]
pub fn default_dashboard(role: ViewerRole) -> HelpTarget {
    match role {
        ViewerRole::Family => targets::FAMILY_DASHBOARD,
        ViewerRole::Carer => targets::CARER_DASHBOARD,
        ViewerRole::Management => targets::MANAGEMENT_DASHBOARD,
    }
}

/// Classify a post-login route for the given role
#[must_use]
pub fn postlogin_target(role: ViewerRole, route: &Route) -> HelpTarget {
    let rules = match role {
        ViewerRole::Family => &*FAMILY_RULES,
        ViewerRole::Carer => &*CARER_RULES,
        ViewerRole::Management => &*MANAGEMENT_RULES,
    };
    rules
        .iter()
        .find(|entry| entry.rule.matches(route.path()))
        .map_or_else(|| default_dashboard(role), |entry| entry.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn target(role: ViewerRole, location: &str) -> HelpTarget {
        postlogin_target(role, &Route::parse(location))
    }

    #[test]
    fn family_budget_report_variants() {
        assert_eq!(
            target(ViewerRole::Family, "/calendar/2026/budget_report"),
            targets::FAMILY_BUDGET_REPORT
        );
        assert_eq!(
            target(ViewerRole::Family, "/calendar/week/category-cost"),
            targets::FAMILY_BUDGET_REPORT
        );
    }

    #[test]
    fn family_plain_calendar_is_calendar() {
        assert_eq!(
            target(ViewerRole::Family, "/calendar/2026/08"),
            targets::FAMILY_CALENDAR
        );
    }

    #[test]
    fn family_transaction_history_variants() {
        assert_eq!(
            target(ViewerRole::Family, "/transaction_history"),
            targets::FAMILY_TRANSACTION_HISTORY
        );
        assert_eq!(
            target(ViewerRole::Family, "/transactions"),
            targets::FAMILY_TRANSACTION_HISTORY
        );
    }

    #[test]
    fn family_default_dashboard() {
        assert_eq!(
            target(ViewerRole::Family, "/something_else"),
            targets::FAMILY_DASHBOARD
        );
    }

    #[test]
    fn carer_schedule_and_timesheets() {
        assert_eq!(
            target(ViewerRole::Carer, "/staff_schedule/week"),
            targets::CARER_STAFF_SCHEDULE
        );
        assert_eq!(
            target(ViewerRole::Carer, "/my_timesheets"),
            targets::CARER_TIMESHEETS
        );
        assert_eq!(
            target(ViewerRole::Carer, "/carer_profile"),
            targets::CARER_PROFILE
        );
    }

    #[test]
    fn management_staff_list_with_id() {
        assert_eq!(
            target(ViewerRole::Management, "/staff_list/123"),
            targets::MANAGEMENT_STAFF_LIST
        );
    }

    #[test]
    fn same_path_differs_by_role() {
        assert_eq!(
            target(ViewerRole::Carer, "/staff_schedule"),
            targets::CARER_STAFF_SCHEDULE
        );
        assert_eq!(
            target(ViewerRole::Management, "/staff_schedule"),
            targets::MANAGEMENT_STAFF_SCHEDULE
        );
    }

    #[test]
    fn management_icon_dashboard_and_default() {
        assert_eq!(
            target(ViewerRole::Management, "/icon_dashboard"),
            targets::MANAGEMENT_DASHBOARD
        );
        assert_eq!(
            target(ViewerRole::Management, "/unknown"),
            targets::MANAGEMENT_DASHBOARD
        );
    }

    #[test]
    fn declared_order_wins_over_later_rules() {
        // budget-report regex outranks the plain calendar prefix
        assert_eq!(
            target(ViewerRole::Family, "/calendar/y/budget-report"),
            targets::FAMILY_BUDGET_REPORT
        );
    }

    #[test]
    fn matching_is_case_insensitive_via_route_normalization() {
        assert_eq!(
            target(ViewerRole::Management, "/Staff_List/9"),
            targets::MANAGEMENT_STAFF_LIST
        );
    }
}
