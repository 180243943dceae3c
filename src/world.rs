//! Particles, forces and global fields: everything an integrator advances.

use crate::arena::{ParticleArena, ParticleId};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::{Attraction, Spring, TargetedForce};
use crate::vector::Vector3;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// The state a [`ParticleSystem`](crate::ParticleSystem) integrates.
///
/// Integrators receive `&mut World` and call
/// [`evaluate_forces`](Self::evaluate_forces) once per stage. Membership of
/// the particle and force lists cannot change while a step holds the borrow.
pub struct World<F: Float> {
    pub(crate) particles: ParticleArena<F>,
    pub(crate) springs: Vec<Spring<F>>,
    pub(crate) attractions: Vec<Attraction<F>>,
    pub(crate) custom_forces: Vec<Box<dyn TargetedForce<F>>>,
    pub(crate) gravity: Vector3<F>,
    pub(crate) drag: F,
}

impl<F: Float> World<F> {
    pub(crate) fn new(gravity: Vector3<F>, drag: F) -> Self {
        World {
            particles: ParticleArena::new(),
            springs: Vec::new(),
            attractions: Vec::new(),
            custom_forces: Vec::new(),
            gravity,
            drag,
        }
    }

    pub fn particles(&self) -> &ParticleArena<F> {
        &self.particles
    }

    /// Per-particle access. Adding and removing particles goes through the
    /// system, which keeps the force lists in step:
    ///
    /// ```compile_fail
    /// use pointmass::ParticleSystem;
    ///
    /// let mut system = ParticleSystem::<f64>::new();
    /// let id = system.make_default_particle();
    /// system.world_mut().particles_mut().remove(id);
    /// ```
    pub fn particles_mut(&mut self) -> &mut ParticleArena<F> {
        &mut self.particles
    }

    pub fn gravity(&self) -> &Vector3<F> {
        &self.gravity
    }

    pub fn drag(&self) -> F {
        self.drag
    }

    /// Zero every particle's force accumulator.
    pub fn clear_forces(&mut self) {
        for p in self.particles.particles_mut() {
            p.clear_force();
        }
    }

    /// Add gravity, drag, springs, attractions and custom forces, in that
    /// order, to the current accumulators.
    ///
    /// Gravity and drag reach every particle, fixed ones included; the
    /// integrators discard whatever lands on fixed particles.
    pub fn accumulate_forces(&mut self) -> Result<(), PhysicsError> {
        let gravity = self.gravity;
        let drag = self.drag;
        for p in self.particles.particles_mut() {
            let resistance = Vector3::scaled(&p.velocity, -drag);
            p.add_force(&gravity).add_force(&resistance);
        }
        for spring in &self.springs {
            spring.apply(&mut self.particles)?;
        }
        for attraction in &self.attractions {
            attraction.apply(&mut self.particles)?;
        }
        for force in &self.custom_forces {
            force.apply(&mut self.particles)?;
        }
        Ok(())
    }

    /// One full force evaluation: clear, then accumulate.
    pub fn evaluate_forces(&mut self) -> Result<(), PhysicsError> {
        self.clear_forces();
        self.accumulate_forces()
    }

    pub(crate) fn ensure_particle(&self, id: ParticleId) -> Result<(), PhysicsError> {
        self.particles.get(id).map(|_| ())
    }

    /// Remove every force that references `id`. Returns how many went.
    pub(crate) fn detach(&mut self, id: ParticleId) -> usize {
        let before = self.force_count();
        self.springs.retain(|s| !s.references(id));
        self.attractions.retain(|a| !a.references(id));
        self.custom_forces.retain(|f| !f.references(id));
        before - self.force_count()
    }

    fn force_count(&self) -> usize {
        self.springs.len() + self.attractions.len() + self.custom_forces.len()
    }
}
