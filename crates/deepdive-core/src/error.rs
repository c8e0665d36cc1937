use thiserror::Error;

/// Non-fatal conditions reported by the controllers and their collaborators.
///
/// None of these terminate the session: callers log them and the affected
/// command becomes a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("entity `{0}` is not present in the scene")]
    MissingEntity(String),
    #[error("asset `{0}` is not loaded")]
    MissingAsset(String),
    #[error("panel index {0} is out of range")]
    InvalidIndex(usize),
}

impl CoreError {
    /// Log at warn level; used where a failure only degrades the experience.
    pub fn report(&self) {
        log::warn!("{}", self);
    }
}
