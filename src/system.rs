//! The particle system: owner of particles, forces and the active integrator.

use crate::arena::{ParticleArena, ParticleId};
use crate::config::SystemConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::{Attraction, Spring, TargetedForce, TwoBodyForce};
use crate::integrator::{Integrator, IntegratorKind};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::vector::Vector3;
use crate::world::World;
use alloc::boxed::Box;

/// A self-contained simulation.
///
/// Particles are addressed by [`ParticleId`]; springs, attractions and custom
/// forces by their index in insertion order. Removing a force shifts the
/// indices of the ones added after it.
pub struct ParticleSystem<F: Float> {
    world: World<F>,
    integrator: Box<dyn Integrator<F>>,
    integrator_kind: Option<IntegratorKind>,
    time_step: F,
}

impl<F: Float> ParticleSystem<F> {
    /// Zero gravity, drag 0.001, Runge-Kutta.
    pub fn new() -> Self {
        let config = SystemConfig::new();
        Self::assemble(config.gravity, config.drag, config.time_step, config.integrator)
    }

    /// Gravity `(gx, gy, gz)` and the given drag, Runge-Kutta.
    pub fn with_gravity_and_drag(gx: F, gy: F, gz: F, drag: F) -> Self {
        let config = SystemConfig::new();
        Self::assemble(Vector3::new(gx, gy, gz), drag, config.time_step, config.integrator)
    }

    pub fn with_config(config: SystemConfig<F>) -> Result<Self, PhysicsError> {
        validate_time_step(config.time_step)?;
        Ok(Self::assemble(config.gravity, config.drag, config.time_step, config.integrator))
    }

    fn assemble(gravity: Vector3<F>, drag: F, time_step: F, kind: IntegratorKind) -> Self {
        ParticleSystem {
            world: World::new(gravity, drag),
            integrator: kind.build(),
            integrator_kind: Some(kind),
            time_step,
        }
    }

    // -- integrator ------------------------------------------------------

    /// Replace the integrator. Scratch state of the old one is dropped.
    pub fn set_integrator(&mut self, kind: IntegratorKind) -> &mut Self {
        self.integrator = kind.build();
        self.integrator_kind = Some(kind);
        log::debug!("integrator set to {}", self.integrator.name());
        self
    }

    /// Install an integrator that is not one of the built-in kinds.
    pub fn set_integrator_boxed(&mut self, integrator: Box<dyn Integrator<F>>) -> &mut Self {
        self.integrator = integrator;
        self.integrator_kind = None;
        log::debug!("integrator set to {}", self.integrator.name());
        self
    }

    /// `None` when a custom integrator is installed.
    pub fn integrator_kind(&self) -> Option<IntegratorKind> {
        self.integrator_kind
    }

    pub fn integrator_name(&self) -> &'static str {
        self.integrator.name()
    }

    // -- time ------------------------------------------------------------

    pub fn time_step(&self) -> F {
        self.time_step
    }

    pub fn set_time_step(&mut self, time_step: F) -> Result<&mut Self, PhysicsError> {
        validate_time_step(time_step)?;
        self.time_step = time_step;
        Ok(self)
    }

    /// Advance by the configured time step.
    pub fn tick(&mut self) -> Result<(), PhysicsError> {
        self.tick_by(self.time_step)
    }

    /// Advance by `dt`.
    pub fn tick_by(&mut self, dt: F) -> Result<(), PhysicsError> {
        self.tick_observed(dt, &mut NoOpStepObserver)
    }

    /// Advance by `dt`, reporting integrator stages to `observer`.
    pub fn tick_observed(
        &mut self,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        validate_time_step(dt)?;
        log::trace!(
            "{} step dt={} particles={}",
            self.integrator.name(),
            dt,
            self.world.particles.len()
        );
        self.integrator.step(&mut self.world, dt, observer)
    }

    // -- global fields ---------------------------------------------------

    pub fn gravity(&self) -> &Vector3<F> {
        &self.world.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector3<F>) -> &mut Self {
        self.world.gravity = gravity;
        self
    }

    /// Gravity of `g` along y only.
    pub fn set_gravity_y(&mut self, g: F) -> &mut Self {
        self.set_gravity(Vector3::new(F::zero(), g, F::zero()))
    }

    pub fn drag(&self) -> F {
        self.world.drag
    }

    pub fn set_drag(&mut self, drag: F) -> &mut Self {
        self.world.drag = drag;
        self
    }

    // -- particles -------------------------------------------------------

    pub fn make_particle(
        &mut self,
        mass: F,
        position: Vector3<F>,
    ) -> Result<ParticleId, PhysicsError> {
        let particle = Particle::at(mass, position)?;
        Ok(self.add_particle(particle))
    }

    /// A particle of default mass at the origin.
    pub fn make_default_particle(&mut self) -> ParticleId {
        self.add_particle(Particle::default())
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> ParticleId {
        self.world.particles.insert(particle)
    }

    /// Remove a particle together with every force that references it.
    pub fn remove_particle(&mut self, id: ParticleId) -> Result<Particle<F>, PhysicsError> {
        let particle = self.world.particles.remove(id)?;
        let detached = self.world.detach(id);
        log::debug!("removed {} and {} attached forces", id, detached);
        Ok(particle)
    }

    pub fn particle(&self, id: ParticleId) -> Result<&Particle<F>, PhysicsError> {
        self.world.particles.get(id)
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Result<&mut Particle<F>, PhysicsError> {
        self.world.particles.get_mut(id)
    }

    pub fn particles(&self) -> &ParticleArena<F> {
        &self.world.particles
    }

    pub fn particle_count(&self) -> usize {
        self.world.particles.len()
    }

    pub fn contains_particle(&self, id: ParticleId) -> bool {
        self.world.particles.contains(id)
    }

    // -- springs ---------------------------------------------------------

    pub fn make_spring(
        &mut self,
        one_end: ParticleId,
        other_end: ParticleId,
        strength: F,
        damping: F,
        rest_length: F,
    ) -> Result<usize, PhysicsError> {
        let spring = Spring::new(one_end, other_end, strength, damping, rest_length)?;
        self.add_spring(spring)
    }

    /// Both ends must be live particles of this system.
    pub fn add_spring(&mut self, spring: Spring<F>) -> Result<usize, PhysicsError> {
        self.ensure_targets(&spring)?;
        self.world.springs.push(spring);
        Ok(self.world.springs.len() - 1)
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.world.springs
    }

    pub fn spring(&self, index: usize) -> Option<&Spring<F>> {
        self.world.springs.get(index)
    }

    pub fn spring_mut(&mut self, index: usize) -> Option<&mut Spring<F>> {
        self.world.springs.get_mut(index)
    }

    /// Current distance between a spring's ends.
    pub fn spring_length(&self, index: usize) -> Result<F, PhysicsError> {
        let spring = self
            .world
            .springs
            .get(index)
            .ok_or_else(|| out_of_bounds("spring", index, self.world.springs.len()))?;
        let particles = &self.world.particles;
        Ok(spring.current_length(
            particles.get(spring.one_end())?,
            particles.get(spring.other_end())?,
        ))
    }

    pub fn remove_spring(&mut self, index: usize) -> Result<Spring<F>, PhysicsError> {
        let count = self.world.springs.len();
        if index >= count {
            return Err(out_of_bounds("spring", index, count));
        }
        Ok(self.world.springs.remove(index))
    }

    pub fn spring_count(&self) -> usize {
        self.world.springs.len()
    }

    // -- attractions -----------------------------------------------------

    pub fn make_attraction(
        &mut self,
        one_end: ParticleId,
        other_end: ParticleId,
        strength: F,
        minimum_distance: F,
    ) -> Result<usize, PhysicsError> {
        let attraction = Attraction::new(one_end, other_end, strength, minimum_distance)?;
        self.add_attraction(attraction)
    }

    pub fn add_attraction(&mut self, attraction: Attraction<F>) -> Result<usize, PhysicsError> {
        self.ensure_targets(&attraction)?;
        self.world.attractions.push(attraction);
        Ok(self.world.attractions.len() - 1)
    }

    pub fn attractions(&self) -> &[Attraction<F>] {
        &self.world.attractions
    }

    pub fn attraction(&self, index: usize) -> Option<&Attraction<F>> {
        self.world.attractions.get(index)
    }

    pub fn attraction_mut(&mut self, index: usize) -> Option<&mut Attraction<F>> {
        self.world.attractions.get_mut(index)
    }

    pub fn remove_attraction(&mut self, index: usize) -> Result<Attraction<F>, PhysicsError> {
        let count = self.world.attractions.len();
        if index >= count {
            return Err(out_of_bounds("attraction", index, count));
        }
        Ok(self.world.attractions.remove(index))
    }

    pub fn attraction_count(&self) -> usize {
        self.world.attractions.len()
    }

    // -- custom forces ---------------------------------------------------

    /// Register a caller-defined force, applied after springs and attractions.
    pub fn add_custom_force(
        &mut self,
        force: Box<dyn TargetedForce<F>>,
    ) -> Result<usize, PhysicsError> {
        self.ensure_targets(&*force)?;
        self.world.custom_forces.push(force);
        Ok(self.world.custom_forces.len() - 1)
    }

    pub fn custom_forces(&self) -> &[Box<dyn TargetedForce<F>>] {
        &self.world.custom_forces
    }

    pub fn custom_force(&self, index: usize) -> Option<&dyn TargetedForce<F>> {
        self.world.custom_forces.get(index).map(|f| &**f)
    }

    pub fn custom_force_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut (dyn TargetedForce<F> + 'static)> {
        self.world.custom_forces.get_mut(index).map(|f| &mut **f)
    }

    pub fn remove_custom_force(
        &mut self,
        index: usize,
    ) -> Result<Box<dyn TargetedForce<F>>, PhysicsError> {
        let count = self.world.custom_forces.len();
        if index >= count {
            return Err(out_of_bounds("custom force", index, count));
        }
        Ok(self.world.custom_forces.remove(index))
    }

    pub fn custom_force_count(&self) -> usize {
        self.world.custom_forces.len()
    }

    // -- whole system ----------------------------------------------------

    /// Remove every particle and force. Gravity, drag, time step and
    /// integrator are kept.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing {} particles, {} springs, {} attractions, {} custom forces",
            self.world.particles.len(),
            self.world.springs.len(),
            self.world.attractions.len(),
            self.world.custom_forces.len()
        );
        self.world.particles.clear();
        self.world.springs.clear();
        self.world.attractions.clear();
        self.world.custom_forces.clear();
    }

    pub fn world(&self) -> &World<F> {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World<F> {
        &mut self.world
    }

    fn ensure_targets<T: TargetedForce<F> + ?Sized>(&self, force: &T) -> Result<(), PhysicsError> {
        force.targets().iter().try_for_each(|&id| self.world.ensure_particle(id))
    }
}

impl<F: Float> Default for ParticleSystem<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_time_step<F: Float>(dt: F) -> Result<(), PhysicsError> {
    if dt.is_positive_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidTimeStep)
    }
}

fn out_of_bounds(collection: &'static str, index: usize, count: usize) -> PhysicsError {
    PhysicsError::IndexOutOfBounds { collection, index, count }
}
