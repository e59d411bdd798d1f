use thiserror::Error;

/// Errors returned by fallible tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The matched parent already has all of its child slots populated.
    #[error("capacity exceeded: node already has {branching_factor} children")]
    CapacityExceeded { branching_factor: usize },
}
