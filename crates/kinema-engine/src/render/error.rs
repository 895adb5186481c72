use thiserror::Error;

/// Why a transition batch did not resolve normally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The batch's transitions were discarded before all of them completed
    /// (loop stopped or restarted, or an element left the scene).
    #[error("transition batch cancelled before completion")]
    Cancelled,
}
