//! Single-evaluation integrators.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::Integrator;
use crate::observer::StepObserver;
use crate::vector::Vector3;
use crate::world::World;

/// Symplectic Euler, position first.
///
/// ```text
/// x(t+dt) = x(t) + v(t) * dt
/// v(t+dt) = v(t) + F(t)/m * dt
/// ```
pub struct ForwardEuler;

impl<F: Float> Integrator<F> for ForwardEuler {
    fn step(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        world.evaluate_forces()?;
        observer.on_force_evaluation(0);

        for p in world.particles.particles_mut().filter(|p| p.is_free()) {
            let drift = Vector3::scaled(&p.velocity, dt);
            let kick = Vector3::scaled(p.force(), dt / p.mass());
            p.position.add_in_place(&drift);
            p.velocity.add_in_place(&kick);
        }

        observer.on_step_complete();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "forward-euler"
    }
}

/// Symplectic Euler, velocity first. Positions move with the updated velocity.
///
/// ```text
/// v(t+dt) = v(t) + F(t)/m * dt
/// x(t+dt) = x(t) + v(t+dt) * dt
/// ```
pub struct BackwardEuler;

impl<F: Float> Integrator<F> for BackwardEuler {
    fn step(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        world.evaluate_forces()?;
        observer.on_force_evaluation(0);

        for p in world.particles.particles_mut().filter(|p| p.is_free()) {
            let kick = Vector3::scaled(p.force(), dt / p.mass());
            p.velocity.add_in_place(&kick);
            let drift = Vector3::scaled(&p.velocity, dt);
            p.position.add_in_place(&drift);
        }

        observer.on_step_complete();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "backward-euler"
    }
}

/// Second-order Taylor expansion in position ("modified Euler").
///
/// ```text
/// a        = F(t)/m
/// x(t+dt)  = x(t) + v(t) * dt + a * dt^2 / 2
/// v(t+dt)  = v(t) + a * dt
/// ```
pub struct ModifiedEuler;

impl<F: Float> Integrator<F> for ModifiedEuler {
    fn step(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError> {
        world.evaluate_forces()?;
        observer.on_force_evaluation(0);

        let half_dt_sq = F::half() * dt * dt;
        for p in world.particles.particles_mut().filter(|p| p.is_free()) {
            let acceleration = Vector3::scaled(p.force(), F::one() / p.mass());
            let displacement = Vector3::scaled(&p.velocity, dt)
                + Vector3::scaled(&acceleration, half_dt_sq);
            p.position.add_in_place(&displacement);
            p.velocity.add_in_place(&Vector3::scaled(&acceleration, dt));
        }

        observer.on_step_complete();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "modified-euler"
    }
}
