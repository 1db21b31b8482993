//! Error types for simulation setup and particle access.

use core::fmt;

/// Errors reported by configuration checks and index-checked accessors.
///
/// Stepping itself never fails; numerical blow-up is left to the caller's
/// tuning.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// Friction must be in [0, 1).
    InvalidFriction,
    /// Gravity and floor height must be finite.
    NonFiniteParameter,
    /// Point radius must not be negative.
    InvalidPointRadius,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            PhysicsError::InvalidFriction => write!(f, "friction must be in [0, 1)"),
            PhysicsError::NonFiniteParameter => write!(f, "gravity and floor must be finite"),
            PhysicsError::InvalidPointRadius => write!(f, "point radius must not be negative"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
