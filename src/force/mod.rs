//! Forces that act on particles.
//!
//! Two capability shapes:
//!
//! - [`TargetedForce`]: bound to specific particles and applied by the
//!   system on every force evaluation. Springs, attractions and any custom
//!   force the caller registers are of this shape. Forces between exactly two
//!   particles implement [`TwoBodyForce`] instead and get `TargetedForce` for
//!   free.
//! - [`UniversalForce`]: not bound to anything; the caller applies it to
//!   whichever particle it chooses. [`Gravity`] and [`Drag`] are of this shape.

pub mod attraction;
pub mod pair;
pub mod spring;
pub mod universal;

pub use attraction::Attraction;
pub use pair::{ForcePair, Link};
pub use spring::Spring;
pub use universal::{Drag, Gravity, UniversalForce};

use crate::arena::{ParticleArena, ParticleId};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;

/// A force bound to particular particles, applied by the owning system.
pub trait TargetedForce<F: Float> {
    fn is_on(&self) -> bool;

    fn set_on(&mut self, on: bool);

    /// The particles this force acts on.
    fn targets(&self) -> &[ParticleId];

    /// Add this force's contribution to its targets' accumulators.
    fn apply(&self, particles: &mut ParticleArena<F>) -> Result<(), PhysicsError>;

    fn turn_on(&mut self) {
        self.set_on(true);
    }

    fn turn_off(&mut self) {
        self.set_on(false);
    }

    fn is_off(&self) -> bool {
        !self.is_on()
    }

    fn references(&self, id: ParticleId) -> bool {
        self.targets().contains(&id)
    }
}

/// A force between exactly two particles.
///
/// Implementors supply the [`Link`] holding the two ends and the on/off
/// switch, and the force law in [`force_pair`](Self::force_pair). Applying
/// the force is shared: nothing happens while the force is off or both ends
/// are fixed, and each end only receives its share while it is free.
pub trait TwoBodyForce<F: Float> {
    fn link(&self) -> &Link;

    fn link_mut(&mut self) -> &mut Link;

    /// The forces on the two ends for their current state.
    fn force_pair(&self, one_end: &Particle<F>, other_end: &Particle<F>) -> ForcePair<F>;

    fn one_end(&self) -> ParticleId {
        self.link().one_end()
    }

    fn other_end(&self) -> ParticleId {
        self.link().other_end()
    }

    /// Compute the pair once and add it to whichever ends are free.
    fn apply_pair(&self, particles: &mut ParticleArena<F>) -> Result<(), PhysicsError> {
        let link = self.link();
        if !link.is_on() {
            return Ok(());
        }
        let one = particles.get(link.one_end())?;
        let other = particles.get(link.other_end())?;
        let (one_free, other_free) = (one.is_free(), other.is_free());
        if !one_free && !other_free {
            return Ok(());
        }
        let pair = self.force_pair(one, other);
        if one_free {
            particles.get_mut(link.one_end())?.add_force(&pair.on_one_end());
        }
        if other_free {
            particles.get_mut(link.other_end())?.add_force(&pair.on_other_end());
        }
        Ok(())
    }
}

impl<F: Float, T: TwoBodyForce<F>> TargetedForce<F> for T {
    fn is_on(&self) -> bool {
        self.link().is_on()
    }

    fn set_on(&mut self, on: bool) {
        self.link_mut().set_on(on);
    }

    fn targets(&self) -> &[ParticleId] {
        self.link().ends()
    }

    fn apply(&self, particles: &mut ParticleArena<F>) -> Result<(), PhysicsError> {
        self.apply_pair(particles)
    }
}
