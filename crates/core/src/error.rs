#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The targeted row does not exist. Carries the user-facing message.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
