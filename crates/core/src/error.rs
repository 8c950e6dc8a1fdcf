#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The candidate is not a member of the trip status domain.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
