//! Error types for the configuration layer.
//!
//! The simulation itself never fails: tearing is a normal state change and
//! bad parameters degrade to empty or no-op behavior. These errors come only
//! from the opt-in checks (`validate`, `try_fix_node`).

use core::fmt;

/// Problems a host can detect before handing parameters to a cloth.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Node index is out of bounds.
    NodeOutOfBounds { index: usize, count: usize },
    /// Lattice side must be at least 2.
    InvalidSide,
    /// Spacing must be positive and finite.
    InvalidSpacing,
    /// Collision region extents must be non-negative.
    InvalidBounds,
    /// Friction must be in [0, 1].
    InvalidFriction,
    /// Bounce must be in [0, 1].
    InvalidBounce,
    /// Accuracy must be at least 2 to run any substep.
    InvalidAccuracy,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::NodeOutOfBounds { index, count } => {
                write!(f, "node index {} out of bounds (count: {})", index, count)
            }
            ClothError::InvalidSide => write!(f, "lattice side must be at least 2"),
            ClothError::InvalidSpacing => write!(f, "spacing must be positive and finite"),
            ClothError::InvalidBounds => write!(f, "bounds must have non-negative extents"),
            ClothError::InvalidFriction => write!(f, "friction must be in [0, 1]"),
            ClothError::InvalidBounce => write!(f, "bounce must be in [0, 1]"),
            ClothError::InvalidAccuracy => write!(f, "accuracy must be at least 2"),
        }
    }
}
