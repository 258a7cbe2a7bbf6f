//! Pre-login route classification
//!
//! Checked before any role-based routing and unconditionally overriding
//! it. A path is pre-login when its first segment falls under the
//! pre-login umbrella: root, the login variants, role selection,
//! organisation setup, or the legacy signup aliases.

use crate::route::Route;
use crate::target::{targets, HelpTarget};

/// Classify a pre-login route
///
/// Returns `None` when the path is not under the pre-login umbrella, in
/// which case post-login classification applies.
#[must_use]
pub fn prelogin_target(route: &Route) -> Option<HelpTarget> {
    let Some(first) = route.first_segment() else {
        // Root is the login screen
        return Some(targets::LOGIN);
    };
    match first {
        "login" | "signin" | "sign_in" => Some(targets::LOGIN),
        "role" => Some(role_selection_target(route)),
        "organisation" => Some(organisation_setup_target(route)),
        // Legacy aliases branch exactly like the role-selection route
        "signup" | "register" => Some(role_selection_target(route)),
        _ => None,
    }
}

/// Role-selection branching, shared with the legacy signup aliases
fn role_selection_target(route: &Route) -> HelpTarget {
    let Some(role) = route.query_param("role") else {
        return targets::ROLE_SELECT;
    };
    match role.to_lowercase().as_str() {
        "family" => targets::SIGNUP_FAMILY,
        "carer" => targets::SIGNUP_CARER,
        "management" => {
            if route.has_query_param("org") {
                targets::SIGNUP_MANAGEMENT
            } else {
                targets::MANAGEMENT_ORG_CHOICE
            }
        }
        // Unknown role values fall back to the selection screen
        _ => targets::ROLE_SELECT,
    }
}

/// Organisation-setup branching
///
/// `create`/`join` sub-routes and an explicit `org` parameter land in the
/// signup flow; everything else is still choosing an organisation.
fn organisation_setup_target(route: &Route) -> HelpTarget {
    if matches!(route.segment(1), Some("create" | "join")) || route.has_query_param("org") {
        targets::SIGNUP_MANAGEMENT
    } else {
        targets::MANAGEMENT_ORG_CHOICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn target(location: &str) -> Option<HelpTarget> {
        prelogin_target(&Route::parse(location))
    }

    #[test]
    fn root_and_login_variants_resolve_to_login() {
        assert_eq!(target("/"), Some(targets::LOGIN));
        assert_eq!(target("/login"), Some(targets::LOGIN));
        assert_eq!(target("/signin"), Some(targets::LOGIN));
        assert_eq!(target("/sign_in"), Some(targets::LOGIN));
    }

    #[test]
    fn role_selection_without_role_param() {
        assert_eq!(target("/role"), Some(targets::ROLE_SELECT));
    }

    #[test]
    fn role_selection_for_family_and_carer() {
        assert_eq!(target("/role?role=family"), Some(targets::SIGNUP_FAMILY));
        assert_eq!(target("/role?role=carer"), Some(targets::SIGNUP_CARER));
    }

    #[test]
    fn management_without_org_chooses_organisation() {
        assert_eq!(
            target("/role?role=management"),
            Some(targets::MANAGEMENT_ORG_CHOICE)
        );
    }

    #[test]
    fn management_with_org_goes_to_signup() {
        assert_eq!(
            target("/role?role=management&org=org-1"),
            Some(targets::SIGNUP_MANAGEMENT)
        );
    }

    #[test]
    fn unknown_role_value_falls_back_to_selection() {
        assert_eq!(target("/role?role=admin"), Some(targets::ROLE_SELECT));
    }

    #[test]
    fn organisation_create_and_join_are_signup() {
        assert_eq!(
            target("/organisation/create"),
            Some(targets::SIGNUP_MANAGEMENT)
        );
        assert_eq!(
            target("/organisation/join"),
            Some(targets::SIGNUP_MANAGEMENT)
        );
    }

    #[test]
    fn organisation_with_org_param_is_signup() {
        assert_eq!(
            target("/organisation?org=org-1"),
            Some(targets::SIGNUP_MANAGEMENT)
        );
    }

    #[test]
    fn organisation_without_choice_is_org_choice() {
        assert_eq!(
            target("/organisation"),
            Some(targets::MANAGEMENT_ORG_CHOICE)
        );
        assert_eq!(
            target("/organisation/browse"),
            Some(targets::MANAGEMENT_ORG_CHOICE)
        );
    }

    #[test]
    fn legacy_signup_aliases_branch_like_role_selection() {
        assert_eq!(target("/signup"), Some(targets::ROLE_SELECT));
        assert_eq!(target("/signup?role=family"), Some(targets::SIGNUP_FAMILY));
        assert_eq!(target("/register?role=carer"), Some(targets::SIGNUP_CARER));
        assert_eq!(
            target("/signup?role=management"),
            Some(targets::MANAGEMENT_ORG_CHOICE)
        );
        assert_eq!(
            target("/register?role=management&org=org-2"),
            Some(targets::SIGNUP_MANAGEMENT)
        );
    }

    #[test]
    fn post_login_paths_are_not_prelogin() {
        assert_eq!(target("/calendar"), None);
        assert_eq!(target("/staff_list/123"), None);
        assert_eq!(target("/icon_dashboard"), None);
    }
}
