//! Application services orchestrating domain logic and side effects.
pub mod donations;
pub mod site;

/// Convenience alias for service results.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid path")]
    InvalidPath,
    #[error("not found")]
    NotFound,
    #[error("index.html not found")]
    IndexMissing,
    #[error("failed to read file")]
    ReadFile(#[source] std::io::Error),
}
