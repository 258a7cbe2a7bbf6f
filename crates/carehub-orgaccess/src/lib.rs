//! CareHub organisation access store
//!
//! List/update operations over a client's organisation-access records,
//! served by one of two backends behind a single facade:
//! - mock mode: a locally persisted list per client, reseeded from a fixed
//!   reference list when absent or malformed
//! - real mode: the dashboard HTTP API, with the re-fetched server list as
//!   the single source of truth after every update
//!
//! # Example
//!
//! ```rust,ignore
//! use carehub_orgaccess::{OrgAccessConfig, OrgAccessStore, OrgAction};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = OrgAccessStore::new(&OrgAccessConfig::new());
//!
//! let records = store.list("client-1").await?;
//! let updated = store.update("client-1", &records[0].id, OrgAction::Approve).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod http;
pub mod local;
pub mod record;
pub mod seed;
pub mod store;

pub use backend::OrgBackend;
pub use error::OrgAccessError;
pub use http::HttpOrgBackend;
pub use local::LocalOrgBackend;
pub use record::{OrgAction, OrgStatus, OrganisationAccessRecord};
pub use seed::seed_records;
pub use store::{OrgAccessConfig, OrgAccessStore, StoreMode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
