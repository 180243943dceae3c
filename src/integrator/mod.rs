//! Time integrators.
//!
//! An integrator advances every free particle of a [`World`] by one time
//! step. Each one owns whatever scratch buffers it needs between stages;
//! replacing the integrator on a system drops them.

pub mod euler;
pub mod runge_kutta;

pub use euler::{BackwardEuler, ForwardEuler, ModifiedEuler};
pub use runge_kutta::{RungeKutta, SettlingRungeKutta, DEFAULT_SETTLING_AGE, SETTLING_SPEED};

use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::world::World;
use alloc::boxed::Box;

/// Advances a [`World`] through time.
pub trait Integrator<F: Float> {
    /// Advance by `dt`, which the caller has already validated as positive.
    ///
    /// Fixed particles are never moved. When this returns an error every
    /// particle must still have the position and velocity it started with.
    fn step(
        &mut self,
        world: &mut World<F>,
        dt: F,
        observer: &mut dyn StepObserver,
    ) -> Result<(), PhysicsError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// The built-in integrators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Symplectic Euler, position first: `x += v dt`, then `v += a dt`.
    ForwardEuler,
    /// Symplectic Euler, velocity first: `v += a dt`, then `x += v dt`.
    BackwardEuler,
    /// Second-order Taylor step: `x += v dt + a dt^2 / 2`, `v += a dt`.
    ModifiedEuler,
    /// Classical four-stage Runge-Kutta.
    RungeKutta,
    /// Runge-Kutta that fixes particles which stay at rest for more than
    /// `settling_age` consecutive steps.
    SettlingRungeKutta { settling_age: u32 },
}

impl IntegratorKind {
    /// Settling Runge-Kutta with [`DEFAULT_SETTLING_AGE`].
    pub fn settling() -> Self {
        IntegratorKind::SettlingRungeKutta { settling_age: DEFAULT_SETTLING_AGE }
    }

    /// A fresh integrator of this kind with empty scratch state.
    pub fn build<F: Float>(self) -> Box<dyn Integrator<F>> {
        match self {
            IntegratorKind::ForwardEuler => Box::new(ForwardEuler),
            IntegratorKind::BackwardEuler => Box::new(BackwardEuler),
            IntegratorKind::ModifiedEuler => Box::new(ModifiedEuler),
            IntegratorKind::RungeKutta => Box::new(RungeKutta::new()),
            IntegratorKind::SettlingRungeKutta { settling_age } => {
                Box::new(SettlingRungeKutta::new(settling_age))
            }
        }
    }
}
