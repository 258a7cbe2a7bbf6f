//! Per-view role resolution
//!
//! Drives the layered protocol on every navigation: synchronous hints
//! first, then the asynchronous lookup, then pure path inference. Stale
//! results are suppressed with a generation counter rather than a
//! liveness flag: each attempt is tagged with the generation it started
//! under, and a write only lands while that generation is still current.

use crate::hints::RoleHints;
use crate::lookup::RoleLookup;
use crate::role::{infer_role_from_path, ViewerRole};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Which step of the protocol produced the resolved role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSource {
    /// A synchronous hint layer
    Hint,
    /// The asynchronous lookup
    Lookup,
    /// Path-based inference fallback
    PathInference,
}

/// A completed resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRole {
    /// The resolved role
    pub role: ViewerRole,
    /// The step that produced it
    pub source: RoleSource,
}

/// Role resolution driver for one consuming view
///
/// Re-run [`RoleResolver::resolve`] on every path change; call
/// [`RoleResolver::retire`] when the view is torn down so an in-flight
/// lookup can never write afterwards.
#[derive(Debug)]
pub struct RoleResolver<L> {
    hints: Arc<RoleHints>,
    lookup: Arc<L>,
    generation: Arc<AtomicU64>,
    current: Arc<RwLock<Option<ResolvedRole>>>,
}

impl<L: RoleLookup + 'static> RoleResolver<L> {
    /// Create resolver over the given hints and lookup
    #[must_use]
    pub fn new(hints: Arc<RoleHints>, lookup: Arc<L>) -> Self {
        Self {
            hints,
            lookup,
            generation: Arc::new(AtomicU64::new(0)),
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Resolve the viewer role for the current path
    ///
    /// A hint returns immediately while a background lookup refreshes it;
    /// without a hint the lookup is awaited, and its failure (or an empty
    /// result) falls back to path inference. The returned role is also
    /// recorded as the current resolution unless a newer attempt has
    /// started in the meantime.
    pub async fn resolve(&self, path: &str) -> ViewerRole {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(role) = self.hints.first_hint() {
            tracing::debug!("role {role} from hint for {path}");
            self.record(generation, role, RoleSource::Hint);
            self.spawn_refresh(generation);
            return role;
        }

        match self.lookup.current_role().await {
            Ok(Some(role)) => {
                tracing::debug!("role {role} from lookup for {path}");
                self.hints.cache(role);
                self.record(generation, role, RoleSource::Lookup);
                role
            }
            Ok(None) | Err(_) => {
                let role = infer_role_from_path(path);
                tracing::debug!("role {role} inferred from path {path}");
                self.record(generation, role, RoleSource::PathInference);
                role
            }
        }
    }

    /// Most recently recorded resolution, if any
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<ResolvedRole> {
        *self.current.read()
    }

    /// Invalidate all outstanding attempts (view teardown)
    ///
    /// Bumps the generation so every in-flight lookup becomes stale; the
    /// calls themselves are not cancelled, only their effect.
    pub fn retire(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn record(&self, generation: u64, role: ViewerRole, source: RoleSource) {
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("dropping stale role resolution (generation {generation})");
            return;
        }
        *self.current.write() = Some(ResolvedRole { role, source });
    }

    /// Refresh the hinted role from the lookup in the background
    fn spawn_refresh(&self, generation: u64) {
        let lookup = self.lookup.clone();
        let hints = self.hints.clone();
        let counter = self.generation.clone();
        let current = self.current.clone();

        tokio::spawn(async move {
            let Ok(Some(role)) = lookup.current_role().await else {
                return;
            };
            if counter.load(Ordering::SeqCst) != generation {
                tracing::debug!("dropping stale role refresh (generation {generation})");
                return;
            }
            hints.cache(role);
            *current.write() = Some(ResolvedRole {
                role,
                source: RoleSource::Lookup,
            });
        });
    }
}
