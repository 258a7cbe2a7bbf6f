//! Error types for the organisation access store

/// Organisation access store errors
///
/// Fetch failures are deliberately generic: callers surface a fixed error
/// message and do not branch on transport detail. Malformed persisted data
/// never reaches this type; the mock backend reseeds instead.
#[derive(Debug, thiserror::Error)]
pub enum OrgAccessError {
    /// Network failure or non-success response
    #[error("organisation access request failed")]
    Fetch,

    /// Backend reported a status outside the known domain
    #[error("unknown organisation status: {0}")]
    UnknownStatus(String),

    /// Update payload named an action outside the known domain
    #[error("unknown organisation action: {0}")]
    UnknownAction(String),
}
