//! Inverse-square attraction and repulsion between two particles.

use crate::arena::ParticleId;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::pair::{ForcePair, Link};
use crate::force::TwoBodyForce;
use crate::particle::Particle;
use crate::vector::Vector3;

/// An inverse-square force of scale `strength` between two particles.
///
/// The force on one end is `-strength * m1 * m2 / r^2` along the vector from
/// the other end to one end, so a positive strength attracts and a negative
/// one repels. Separations below `minimum_distance` are treated as exactly
/// `minimum_distance`, which caps the force instead of letting it blow up.
#[derive(Clone, Debug, PartialEq)]
pub struct Attraction<F: Float> {
    link: Link,
    strength: F,
    minimum_distance: F,
}

impl<F: Float> Attraction<F> {
    pub fn new(
        one_end: ParticleId,
        other_end: ParticleId,
        strength: F,
        minimum_distance: F,
    ) -> Result<Self, PhysicsError> {
        validate_strength(strength)?;
        validate_minimum_distance(minimum_distance)?;
        Ok(Attraction { link: Link::new(one_end, other_end), strength, minimum_distance })
    }

    pub fn strength(&self) -> F {
        self.strength
    }

    /// Any finite value; the sign selects attraction or repulsion.
    pub fn set_strength(&mut self, strength: F) -> Result<&mut Self, PhysicsError> {
        validate_strength(strength)?;
        self.strength = strength;
        Ok(self)
    }

    pub fn minimum_distance(&self) -> F {
        self.minimum_distance
    }

    pub fn set_minimum_distance(&mut self, distance: F) -> Result<&mut Self, PhysicsError> {
        validate_minimum_distance(distance)?;
        self.minimum_distance = distance;
        Ok(self)
    }
}

impl<F: Float> TwoBodyForce<F> for Attraction<F> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }

    fn force_pair(&self, one_end: &Particle<F>, other_end: &Particle<F>) -> ForcePair<F> {
        let mut separation = Vector3::difference(&one_end.position, &other_end.position);
        if separation.floor(self.minimum_distance).is_err() {
            // Coincident ends have no direction.
            return ForcePair::none();
        }
        let magnitude =
            -self.strength * one_end.mass() * other_end.mass() / separation.length_squared();
        match separation.set_length(magnitude) {
            Ok(force) => ForcePair::equal_and_opposite(*force),
            Err(_) => ForcePair::none(),
        }
    }
}

fn validate_strength<F: Float>(strength: F) -> Result<(), PhysicsError> {
    if strength.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidStrength)
    }
}

fn validate_minimum_distance<F: Float>(distance: F) -> Result<(), PhysicsError> {
    if distance.is_positive_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMinimumDistance)
    }
}
