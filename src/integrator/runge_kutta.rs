//! Classical fourth-order Runge-Kutta and its settling variant.
//!
//! The system is treated as the first-order ODE `dx/dt = v`,
//! `dv/dt = F(x, v) / m`. Each step evaluates forces four times:
//!
//! ```text
//! k1 = f(x0,              v0)
//! k2 = f(x0 + k1 dt/2,    v0 + k1 dt/2)
//! k3 = f(x0 + k2 dt/2,    v0 + k2 dt/2)
//! k4 = f(x0 + k3 dt,      v0 + k3 dt)
//! x  = x0 + dt/6 (k1v + 2 k2v + 2 k3v + k4v)
//! v  = v0 + dt/(6m) (k1f + 2 k2f + 2 k3f + k4f)
//! ```

use crate::arena::ParticleId;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::Integrator;
use crate::observer::StepObserver;
use crate::vector::Vector3;
use crate::world::World;
use alloc::vec::Vec;

/// Consecutive resting steps tolerated before [`SettlingRungeKutta`] fixes a particle.
pub const DEFAULT_SETTLING_AGE: u32 = 50;

/// Speed below which a particle counts as resting.
pub const SETTLING_SPEED: f64 = 0.0001;

const STAGES: usize = 4;

/// Derivatives captured at one stage: force (for `dv/dt`) and velocity (for `dx/dt`).
#[derive(Clone, Debug, Default)]
struct Derivatives<F: Float> {
    forces: Vec<Vector3<F>>,
    velocities: Vec<Vector3<F>>,
}

/// Classical RK4.
///
/// Scratch buffers are indexed in parallel with `free`, the particles that
/// were free when the step began. They keep their capacity between steps.
#[derive(Clone, Debug, Default)]
pub struct RungeKutta<F: Float> {
    free: Vec<ParticleId>,
    original_positions: Vec<Vector3<F>>,
    original_velocities: Vec<Vector3<F>>,
    stages: [Derivatives<F>; STAGES],
}

impl<F: Float> RungeKutta<F> {
    pub fn new() -> Self {
        RungeKutta {
            free: Vec::new(),
            original_positions: Vec::new(),
            original_velocities: Vec::new(),
            stages: Default::default(),
        }
    }

    /// Particles advanced by the most recent step.
    pub fn advanced_particles(&self) -> &[ParticleId] {
        &self.free
    }

    fn snapshot(&mut self, world: &World<F>) {
        self.free.clear();
        self.original_positions.clear();
        self.original_velocities.clear();
        for (id, p) in world.particles.iter().filter(|(_, p)| p.is_free()) {
            self.free.push(id);
            self.original_positions.push(p.position);
            self.original_velocities.push(p.velocity);
        }
        let n = self.free.len();
        for stage in self.stages.iter_mut() {
            stage.forces.clear();
            stage.forces.resize(n, Vector3::zero());
            stage.velocities.clear();
            stage.velocities.resize(n, Vector3::zero());
        }
    }

    /// Move every advanced particle to `original + k * h`.
    fn offset_from_original(
        &self,
        world: &mut World<F>,
        k: &Derivatives<F>,
        h: F,
    ) -> Result<(), PhysicsError> {
        for (i, &id) in self.free.iter().enumerate() {
            let p = world.particles.get_mut(id)?;
            let velocity_step = h / p.mass();
            p.position = self.original_positions[i] + k.velocities[i] * h;
            p.velocity = self.original_velocities[i] + k.forces[i] * velocity_step;
        }
        Ok(())
    }

    fn capture(&mut self, world: &World<F>, stage: usize) -> Result<(), PhysicsError> {
        let k = &mut self.stages[stage];
        for (i, &id) in self.free.iter().enumerate() {
            let p = world.particles.get(id)?;
            k.forces[i] = *p.force();
            k.velocities[i] = p.velocity;
        }
        Ok(())
    }

    /// Put every advanced particle back where the step found it.
    fn restore(&self, world: &mut World<F>) {
        for (i, &id) in self.free.iter().enumerate() {
            if let Ok(p) = world.particles.get_mut(id) {
                p.position = self.original_positions[i];
                p.velocity = self.original_velocities[i];
            }
        }
    }

    fn evaluate_stages(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        let half_dt = F::half() * dt;
        for stage in 0..STAGES {
            if stage > 0 {
                let h = if stage == STAGES - 1 { dt } else { half_dt };
                self.offset_from_original(world, &self.stages[stage - 1], h)?;
            }
            world.evaluate_forces()?;
            observer.on_force_evaluation(stage);
            self.capture(world, stage)?;
        }
        Ok(())
    }

    /// Run the four stages and the final update, without reporting completion.
    ///
    /// A failed stage rolls positions and velocities back to the snapshot.
    fn advance(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        self.snapshot(world);
        if let Err(err) = self.evaluate_stages(world, dt, observer) {
            self.restore(world);
            log::debug!("runge-kutta step rolled back: {}", err);
            return Err(err);
        }

        let two = F::two();
        let sixth_dt = dt / F::from_f64(6.0);
        let [k1, k2, k3, k4] = &self.stages;
        for (i, &id) in self.free.iter().enumerate() {
            let p = world.particles.get_mut(id)?;
            let dx = k1.velocities[i]
                + k2.velocities[i] * two
                + k3.velocities[i] * two
                + k4.velocities[i];
            let dv = k1.forces[i] + k2.forces[i] * two + k3.forces[i] * two + k4.forces[i];
            p.position = self.original_positions[i] + dx * sixth_dt;
            p.velocity = self.original_velocities[i] + dv * (sixth_dt / p.mass());
            p.advance_age(dt);
        }
        Ok(())
    }
}

impl<F: Float> Integrator<F> for RungeKutta<F> {
    fn step(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        self.advance(world, dt, observer)?;
        observer.on_step_complete();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "runge-kutta"
    }
}

/// RK4 that puts near-static particles to sleep.
///
/// After each step, a particle slower than [`SETTLING_SPEED`] has its resting
/// counter incremented and any faster particle has it reset. A particle
/// whose counter exceeds `settling_age` is fixed for good; freeing it again is
/// up to the caller.
#[derive(Clone, Debug)]
pub struct SettlingRungeKutta<F: Float> {
    inner: RungeKutta<F>,
    settling_age: u32,
}

impl<F: Float> SettlingRungeKutta<F> {
    pub fn new(settling_age: u32) -> Self {
        SettlingRungeKutta { inner: RungeKutta::new(), settling_age }
    }

    pub fn settling_age(&self) -> u32 {
        self.settling_age
    }
}

impl<F: Float> Default for SettlingRungeKutta<F> {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLING_AGE)
    }
}

impl<F: Float> Integrator<F> for SettlingRungeKutta<F> {
    fn step(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        self.inner.advance(world, dt, observer)?;

        let rest_speed = F::from_f64(SETTLING_SPEED);
        for &id in self.inner.advanced_particles() {
            let p = world.particles.get_mut(id)?;
            let resting = p.velocity.length() < rest_speed;
            if p.record_resting(resting) > self.settling_age {
                p.make_fixed();
                log::debug!("{} settled after {} resting steps", id, p.resting_steps());
                observer.on_settle(id);
            }
        }

        observer.on_step_complete();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "settling-runge-kutta"
    }
}
