//! Error types for help and role resolution

/// Help service errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum HelpError {
    /// Network failure or non-success response from the role lookup
    #[error("role lookup request failed")]
    Lookup,

    /// A role string outside the known domain
    #[error("unknown viewer role: {0}")]
    UnknownRole(String),
}
