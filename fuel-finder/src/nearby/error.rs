//! Query error types.

/// Errors from a nearest-stations query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No town matches the requested name, ignoring case
    #[error("Town not found.")]
    TownNotFound {
        /// The name exactly as it was requested
        requested: String,
    },
}
