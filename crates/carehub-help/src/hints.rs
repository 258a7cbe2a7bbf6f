//! Layered role hints
//!
//! The three places a previously resolved role can be found before any
//! lookup is issued, checked in priority order: a process-wide slot, the
//! durable per-browser store, then the session-scoped store. The context
//! is explicit and passed to the resolver; there are no ambient globals.

use crate::role::ViewerRole;
use carehub_localstore::{KeyValueStore, MemoryStore};
use parking_lot::RwLock;
use std::sync::Arc;

/// Storage key for role hints in both hint stores
pub const ROLE_HINT_KEY: &str = "viewer_role";

/// Explicit role-hint context
///
/// Values outside the role domain are ignored wherever they are read, so
/// a corrupted hint degrades to "no hint" rather than an error.
#[derive(Debug)]
pub struct RoleHints {
    process: RwLock<Option<ViewerRole>>,
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl RoleHints {
    /// Create hints over the given durable and session stores
    #[must_use]
    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self {
            process: RwLock::new(None),
            durable,
            session,
        }
    }

    /// Create hints with fresh in-memory stores (tests, mock sessions)
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    /// First valid hint in priority order: process, durable, session
    #[must_use]
    pub fn first_hint(&self) -> Option<ViewerRole> {
        if let Some(role) = *self.process.read() {
            return Some(role);
        }
        self.read_store(&self.durable)
            .or_else(|| self.read_store(&self.session))
    }

    /// Cache a lookup result into the session store and the process slot
    ///
    /// Lookup results are deliberately not written durably; only an
    /// explicit [`RoleHints::set_durable`] does that.
    pub fn cache(&self, role: ViewerRole) {
        *self.process.write() = Some(role);
        self.session.put(ROLE_HINT_KEY, role.as_str());
    }

    /// Persist a role durably (login-time write)
    pub fn set_durable(&self, role: ViewerRole) {
        self.durable.put(ROLE_HINT_KEY, role.as_str());
    }

    /// Clear every layer; the invalidation rule on role change
    pub fn invalidate(&self) {
        *self.process.write() = None;
        self.durable.remove(ROLE_HINT_KEY);
        self.session.remove(ROLE_HINT_KEY);
        tracing::debug!("role hints invalidated");
    }

    fn read_store(&self, store: &Arc<dyn KeyValueStore>) -> Option<ViewerRole> {
        store
            .get(ROLE_HINT_KEY)
            .and_then(|raw| ViewerRole::parse_opt(&raw))
    }
}
