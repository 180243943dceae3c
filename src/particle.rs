//! Point masses driven by accumulated forces.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vector::Vector3;

/// Mass given to particles built with [`Particle::default`] or after [`Particle::reset`].
pub const DEFAULT_MASS: f64 = 1.0;

/// A point mass with position, velocity and a force accumulator.
///
/// Position and velocity are public so a host can read and place particles
/// directly. Mass and the fixed flag go through setters because they carry
/// invariants: mass is always positive and a fixed particle never has
/// velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vector3<F>,
    pub velocity: Vector3<F>,
    force: Vector3<F>,
    mass: F,
    fixed: bool,
    /// Simulated time this particle has been advanced by the Runge-Kutta integrators.
    age: F,
    /// Consecutive settling steps spent below the rest speed.
    resting_steps: u32,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest at the origin.
    pub fn new(mass: F) -> Result<Self, PhysicsError> {
        Self::at(mass, Vector3::zero())
    }

    /// A free particle at rest at `position`.
    pub fn at(mass: F, position: Vector3<F>) -> Result<Self, PhysicsError> {
        validate_mass(mass)?;
        Ok(Particle {
            position,
            velocity: Vector3::zero(),
            force: Vector3::zero(),
            mass,
            fixed: false,
            age: F::zero(),
            resting_steps: 0,
        })
    }

    /// A fixed particle at `position`, for anchors.
    pub fn fixed_at(mass: F, position: Vector3<F>) -> Result<Self, PhysicsError> {
        let mut p = Self::at(mass, position)?;
        p.make_fixed();
        Ok(p)
    }

    pub fn mass(&self) -> F {
        self.mass
    }

    pub fn set_mass(&mut self, mass: F) -> Result<&mut Self, PhysicsError> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(self)
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn is_free(&self) -> bool {
        !self.fixed
    }

    /// Set the fixed flag. Fixing a particle zeroes its velocity; freeing it
    /// restarts its resting count.
    pub fn set_fixed(&mut self, fixed: bool) -> &mut Self {
        self.fixed = fixed;
        if fixed {
            self.velocity.clear();
        } else {
            self.resting_steps = 0;
        }
        self
    }

    pub fn make_fixed(&mut self) -> &mut Self {
        self.set_fixed(true)
    }

    pub fn make_free(&mut self) -> &mut Self {
        self.set_fixed(false)
    }

    /// The force accumulated since the last clear.
    pub fn force(&self) -> &Vector3<F> {
        &self.force
    }

    pub fn add_force(&mut self, force: &Vector3<F>) -> &mut Self {
        self.force.add_in_place(force);
        self
    }

    pub fn clear_force(&mut self) -> &mut Self {
        self.force.clear();
        self
    }

    pub fn age(&self) -> F {
        self.age
    }

    pub fn resting_steps(&self) -> u32 {
        self.resting_steps
    }

    pub(crate) fn advance_age(&mut self, dt: F) {
        self.age = self.age + dt;
    }

    pub(crate) fn record_resting(&mut self, resting: bool) -> u32 {
        self.resting_steps = if resting { self.resting_steps.saturating_add(1) } else { 0 };
        self.resting_steps
    }

    /// Euclidean distance between the two particles' positions.
    pub fn distance_to(&self, other: &Particle<F>) -> F {
        self.position.distance_to(&other.position)
    }

    /// Back to a free particle of default mass at rest at the origin.
    pub fn reset(&mut self) -> &mut Self {
        self.position.clear();
        self.velocity.clear();
        self.force.clear();
        self.mass = F::from_f64(DEFAULT_MASS);
        self.fixed = false;
        self.age = F::zero();
        self.resting_steps = 0;
        self
    }
}

impl<F: Float> Default for Particle<F> {
    fn default() -> Self {
        Particle {
            position: Vector3::zero(),
            velocity: Vector3::zero(),
            force: Vector3::zero(),
            mass: F::from_f64(DEFAULT_MASS),
            fixed: false,
            age: F::zero(),
            resting_steps: 0,
        }
    }
}

fn validate_mass<F: Float>(mass: F) -> Result<(), PhysicsError> {
    if mass.is_positive_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass)
    }
}
