//! CareHub contextual help
//!
//! Resolves the floating help button's target for the current navigation:
//! - pure route classification from (viewer role, path, query) to a
//!   (page key, section id) pair into the static help-content map
//! - the layered viewer-role resolution protocol feeding it: synchronous
//!   hints, an asynchronous lookup, and path inference as the last
//!   fallback, with stale attempts suppressed by a generation counter
//!
//! # Example
//!
//! ```rust,ignore
//! use carehub_help::{resolve_location, RoleHints, RoleResolver, StaticRoleLookup, ViewerRole};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let hints = Arc::new(RoleHints::in_memory());
//! let lookup = Arc::new(StaticRoleLookup::role(ViewerRole::Management));
//! let resolver = RoleResolver::new(hints, lookup);
//!
//! let role = resolver.resolve("/staff_list/123").await;
//! let target = resolve_location(role, "/staff_list/123");
//! println!("open {}", target);
//! # }
//! ```

pub mod error;
pub mod hints;
pub mod lookup;
pub mod postlogin;
pub mod prelogin;
pub mod resolver;
pub mod route;
pub mod session;
pub mod target;

mod role;

pub use error::HelpError;
pub use hints::{RoleHints, ROLE_HINT_KEY};
pub use lookup::{HttpRoleLookup, RoleLookup, StaticRoleLookup};
pub use resolver::{resolve_help_target, resolve_location};
pub use role::{infer_role_from_path, ViewerRole};
pub use route::Route;
pub use session::{ResolvedRole, RoleResolver, RoleSource};
pub use target::{targets, HelpTarget};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
