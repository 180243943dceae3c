//! Step observer trait for monitoring simulation progress.

use crate::arena::ParticleId;

/// Trait for observing integrator steps.
///
/// Implement this trait to monitor integrator progress (e.g., for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after each force evaluation. `stage` counts from 0 within a
    /// step: Euler-family integrators report one stage, Runge-Kutta four.
    fn on_force_evaluation(&mut self, _stage: usize) {}

    /// Called when the settling integrator fixes a particle.
    fn on_settle(&mut self, _particle: ParticleId) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
