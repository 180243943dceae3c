//! Configuration for a particle system.

use crate::float::Float;
use crate::integrator::IntegratorKind;
use crate::vector::Vector3;

/// Drag applied by a system built from [`SystemConfig::new`].
pub const DEFAULT_DRAG: f64 = 0.001;

/// Time step used by [`ParticleSystem::tick`](crate::ParticleSystem::tick) unless reconfigured.
pub const DEFAULT_TIME_STEP: f64 = 1.0;

/// Configuration for a [`ParticleSystem`](crate::ParticleSystem).
///
/// # Builder Pattern
/// ```
/// use pointmass::{IntegratorKind, ParticleSystem, SystemConfig, Vector3};
///
/// let config: SystemConfig<f32> = SystemConfig::new()
///     .with_gravity(Vector3::new(0.0, -9.81, 0.0))
///     .with_drag(0.05)
///     .with_time_step(1.0 / 60.0)
///     .with_integrator(IntegratorKind::ModifiedEuler);
/// let system = ParticleSystem::with_config(config).unwrap();
/// assert_eq!(system.integrator_kind(), Some(IntegratorKind::ModifiedEuler));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SystemConfig<F: Float> {
    /// Force added to every particle on every evaluation. Default: zero.
    pub gravity: Vector3<F>,
    /// Every particle also receives `-drag * velocity`. Default: 0.001.
    pub drag: F,
    /// Step used by `tick()`. Must be positive. Default: 1.
    pub time_step: F,
    /// Integrator installed at construction. Default: Runge-Kutta.
    pub integrator: IntegratorKind,
}

impl<F: Float> SystemConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SystemConfig {
            gravity: Vector3::zero(),
            drag: F::from_f64(DEFAULT_DRAG),
            time_step: F::from_f64(DEFAULT_TIME_STEP),
            integrator: IntegratorKind::RungeKutta,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vector3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the drag coefficient.
    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    /// Set the default time step. Validated when the system is built.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the initial integrator.
    pub fn with_integrator(mut self, integrator: IntegratorKind) -> Self {
        self.integrator = integrator;
        self
    }
}

impl<F: Float> Default for SystemConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
