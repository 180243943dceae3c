//! Damped Hookean springs between two particles.

use crate::arena::ParticleId;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::pair::{ForcePair, Link};
use crate::force::TwoBodyForce;
use crate::particle::Particle;
use crate::vector::Vector3;

/// A spring with constant `strength`, `damping` and `rest_length`.
///
/// Along the axis from the other end to one end the force on one end is
/// `-(length - rest_length) * strength`, minus `damping` times the relative
/// velocity projected onto that axis. The other end receives the opposite.
/// A stretched spring pulls its ends together; a compressed one pushes them
/// apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    link: Link,
    strength: F,
    damping: F,
    rest_length: F,
}

impl<F: Float> Spring<F> {
    pub fn new(
        one_end: ParticleId,
        other_end: ParticleId,
        strength: F,
        damping: F,
        rest_length: F,
    ) -> Result<Self, PhysicsError> {
        validate_strength(strength)?;
        validate_damping(damping)?;
        validate_rest_length(rest_length)?;
        Ok(Spring { link: Link::new(one_end, other_end), strength, damping, rest_length })
    }

    pub fn strength(&self) -> F {
        self.strength
    }

    pub fn set_strength(&mut self, strength: F) -> Result<&mut Self, PhysicsError> {
        validate_strength(strength)?;
        self.strength = strength;
        Ok(self)
    }

    pub fn damping(&self) -> F {
        self.damping
    }

    pub fn set_damping(&mut self, damping: F) -> Result<&mut Self, PhysicsError> {
        validate_damping(damping)?;
        self.damping = damping;
        Ok(self)
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    pub fn set_rest_length(&mut self, rest_length: F) -> Result<&mut Self, PhysicsError> {
        validate_rest_length(rest_length)?;
        self.rest_length = rest_length;
        Ok(self)
    }

    /// Live distance between the ends.
    pub fn current_length(&self, one_end: &Particle<F>, other_end: &Particle<F>) -> F {
        one_end.distance_to(other_end)
    }
}

impl<F: Float> TwoBodyForce<F> for Spring<F> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }

    fn force_pair(&self, one_end: &Particle<F>, other_end: &Particle<F>) -> ForcePair<F> {
        let axis = Vector3::difference(&one_end.position, &other_end.position);
        let length = axis.length();
        if length == F::zero() {
            // Coincident ends: no axis to push along.
            return ForcePair::none();
        }

        let stretch = length - self.rest_length;
        let mut force = Vector3::scaled(&axis, -stretch * self.strength / length);

        if self.damping > F::zero() {
            let relative = Vector3::difference(&one_end.velocity, &other_end.velocity);
            let along = Vector3::scaled(&axis, axis.dot(&relative) / (length * length));
            force.sub_in_place(&Vector3::scaled(&along, self.damping));
        }

        ForcePair::equal_and_opposite(force)
    }
}

fn validate_strength<F: Float>(strength: F) -> Result<(), PhysicsError> {
    if strength.is_positive_finite() { Ok(()) } else { Err(PhysicsError::InvalidStrength) }
}

fn validate_damping<F: Float>(damping: F) -> Result<(), PhysicsError> {
    if damping.is_finite() && damping >= F::zero() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidDamping)
    }
}

fn validate_rest_length<F: Float>(rest_length: F) -> Result<(), PhysicsError> {
    if rest_length.is_positive_finite() { Ok(()) } else { Err(PhysicsError::InvalidRestLength) }
}
