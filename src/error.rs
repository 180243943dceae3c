//! Error types for physics operations.

use core::fmt;

/// Errors that can occur during physics operations.
///
/// Every variant is raised at the call that supplied the bad value, before
/// any state has been changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Spring rest length must be positive and finite.
    InvalidRestLength,
    /// Strength must be finite, and positive for springs.
    InvalidStrength,
    /// Damping must be non-negative and finite.
    InvalidDamping,
    /// Attraction minimum distance must be positive and finite.
    InvalidMinimumDistance,
    /// Time step must be positive and finite.
    InvalidTimeStep,
    /// The operation needs a direction and the vector has zero length.
    DegenerateVector,
    /// A particle handle does not refer to a live particle.
    MissingParticle { index: u32, generation: u32 },
    /// Index into one of the force lists is out of bounds.
    IndexOutOfBounds {
        collection: &'static str,
        index: usize,
        count: usize,
    },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidRestLength => {
                write!(f, "spring rest length must be positive and finite")
            }
            PhysicsError::InvalidStrength => {
                write!(f, "strength must be finite, and positive for springs")
            }
            PhysicsError::InvalidDamping => write!(f, "damping must be non-negative and finite"),
            PhysicsError::InvalidMinimumDistance => {
                write!(f, "minimum distance must be positive and finite")
            }
            PhysicsError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            PhysicsError::DegenerateVector => write!(f, "vector has zero length"),
            PhysicsError::MissingParticle { index, generation } => {
                write!(f, "no particle at slot {} (generation {})", index, generation)
            }
            PhysicsError::IndexOutOfBounds { collection, index, count } => {
                write!(f, "{} index {} out of bounds (count: {})", collection, index, count)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
