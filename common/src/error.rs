use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Command action was not one of `play`, `pause` or `seek`
    #[error("invalid action: {0}")]
    InvalidAction(String),
}
