//! Help target resolution entry points
//!
//! Pure classification: pre-login rules are checked first and override
//! role-based routing entirely; otherwise the role's post-login matcher
//! table decides.

use crate::postlogin::postlogin_target;
use crate::prelogin::prelogin_target;
use crate::route::Route;
use crate::target::HelpTarget;
use crate::ViewerRole;

/// Resolve the help target for a parsed route
#[must_use]
pub fn resolve_help_target(role: ViewerRole, route: &Route) -> HelpTarget {
    let target = prelogin_target(route)
        .unwrap_or_else(|| postlogin_target(role, route));
    tracing::debug!("help target {target} for {} as {role}", route.path());
    target
}

/// Resolve the help target for a raw location string
#[inline]
#[must_use]
pub fn resolve_location(role: ViewerRole, location: &str) -> HelpTarget {
    resolve_help_target(role, &Route::parse(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::targets;
    use pretty_assertions::assert_eq;

    #[test]
    fn prelogin_overrides_role_routing() {
        // Even a management viewer gets the pre-login target on /role
        assert_eq!(
            resolve_location(ViewerRole::Management, "/role?role=family"),
            targets::SIGNUP_FAMILY
        );
    }

    #[test]
    fn postlogin_applies_when_not_prelogin() {
        assert_eq!(
            resolve_location(ViewerRole::Management, "/staff_list/123"),
            targets::MANAGEMENT_STAFF_LIST
        );
        assert_eq!(
            resolve_location(ViewerRole::Family, "/staff_list/123"),
            targets::FAMILY_DASHBOARD
        );
    }
}
