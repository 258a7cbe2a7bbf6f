//! Fixed reference list used to (re)populate a client's mock store
//!
//! Entries carry raw backend status strings; [`seed_records`] applies the
//! `active` → `approved` translation on the way out.

use crate::record::{OrgStatus, OrganisationAccessRecord};

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    backend_status: &'static str,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: "org-001",
        name: "Sunrise Care Collective",
        backend_status: "active",
    },
    SeedEntry {
        id: "org-002",
        name: "Harbour Family Support",
        backend_status: "pending",
    },
    SeedEntry {
        id: "org-003",
        name: "Northside Home Care",
        backend_status: "active",
    },
    SeedEntry {
        id: "org-004",
        name: "Elm Street Respite",
        backend_status: "revoked",
    },
    SeedEntry {
        id: "org-005",
        name: "Westfield Care Partners",
        backend_status: "pending",
    },
];

/// Build the seed list with backend statuses translated
#[must_use]
pub fn seed_records() -> Vec<OrganisationAccessRecord> {
    SEED.iter()
        .map(|entry| {
            // The seed is fixed and well-formed; a bad entry is a bug here,
            // not a runtime condition.
            let status = OrgStatus::from_backend(entry.backend_status)
                .unwrap_or(OrgStatus::Pending);
            OrganisationAccessRecord::new(entry.id, entry.name, status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_translates_active_to_approved() {
        let records = seed_records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].status, OrgStatus::Approved);
        assert_eq!(records[2].status, OrgStatus::Approved);
    }

    #[test]
    fn seed_passes_other_statuses_through() {
        let records = seed_records();
        assert_eq!(records[1].status, OrgStatus::Pending);
        assert_eq!(records[3].status, OrgStatus::Revoked);
        assert_eq!(records[4].status, OrgStatus::Pending);
    }

    #[test]
    fn seed_ids_are_unique() {
        let records = seed_records();
        let mut ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }
}
