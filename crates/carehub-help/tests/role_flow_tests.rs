//! Role resolution wired into help target classification

use carehub_help::{
    resolve_location, targets, HelpTarget, RoleHints, RoleResolver, StaticRoleLookup, ViewerRole,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn resolver(lookup: StaticRoleLookup) -> RoleResolver<StaticRoleLookup> {
    RoleResolver::new(Arc::new(RoleHints::in_memory()), Arc::new(lookup))
}

#[tokio::test]
async fn unresolved_role_on_icon_dashboard_infers_management() {
    // No hints, failing lookup: the path alone decides the role.
    let resolver = resolver(StaticRoleLookup::failing());

    let role = resolver.resolve("/icon_dashboard").await;
    assert_eq!(role, ViewerRole::Management);

    let target = resolve_location(role, "/icon_dashboard");
    assert_eq!(
        target,
        HelpTarget::new("management/dashboard", "management-dashboard-overview")
    );
}

#[tokio::test]
async fn looked_up_role_drives_classification() {
    let resolver = resolver(StaticRoleLookup::role(ViewerRole::Carer));

    let role = resolver.resolve("/staff_schedule/today").await;
    assert_eq!(role, ViewerRole::Carer);
    assert_eq!(
        resolve_location(role, "/staff_schedule/today"),
        targets::CARER_STAFF_SCHEDULE
    );
}

#[tokio::test]
async fn durable_hint_survives_new_resolver() {
    let durable = Arc::new(carehub_localstore::MemoryStore::new());

    {
        let hints = RoleHints::new(durable.clone(), Arc::new(carehub_localstore::MemoryStore::new()));
        hints.set_durable(ViewerRole::Management);
    }

    // A fresh session over the same durable store picks the hint up
    // without waiting for the lookup.
    let hints = Arc::new(RoleHints::new(
        durable,
        Arc::new(carehub_localstore::MemoryStore::new()),
    ));
    let resolver = RoleResolver::new(hints, Arc::new(StaticRoleLookup::none()));

    let role = resolver.resolve("/calendar").await;
    assert_eq!(role, ViewerRole::Management);
}

#[tokio::test]
async fn role_change_invalidation_forces_re_resolution() {
    let hints = Arc::new(RoleHints::in_memory());
    hints.cache(ViewerRole::Family);
    let resolver = RoleResolver::new(hints.clone(), Arc::new(StaticRoleLookup::none()));

    assert_eq!(resolver.resolve("/calendar").await, ViewerRole::Family);

    hints.invalidate();
    // Hints are gone and the lookup has nothing: inference takes over.
    assert_eq!(
        resolver.resolve("/icon_dashboard").await,
        ViewerRole::Management
    );
}
