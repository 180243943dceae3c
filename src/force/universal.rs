//! Forces the caller applies to particles of its choosing.

use crate::float::Float;
use crate::particle::Particle;
use crate::vector::Vector3;

/// Coefficient used by [`Drag::default`].
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.01;

/// A force not bound to any particle.
///
/// The system never applies these on its own; call
/// [`apply_to`](Self::apply_to) on each particle that should feel it,
/// typically from a custom integrator or between ticks.
pub trait UniversalForce<F: Float> {
    fn is_on(&self) -> bool;

    fn set_on(&mut self, on: bool);

    /// Add the contribution for this particle's state to its accumulator.
    /// Nothing happens while the force is off.
    fn apply_to(&self, particle: &mut Particle<F>);
}

/// Constant force added to every particle it is applied to.
#[derive(Clone, Debug, PartialEq)]
pub struct Gravity<F: Float> {
    force: Vector3<F>,
    on: bool,
}

impl<F: Float> Gravity<F> {
    pub fn new(force: Vector3<F>) -> Self {
        Gravity { force, on: true }
    }

    /// Gravity of `g` along the y axis.
    pub fn from_y(g: F) -> Self {
        Self::new(Vector3::new(F::zero(), g, F::zero()))
    }

    pub fn force(&self) -> &Vector3<F> {
        &self.force
    }

    pub fn set_force(&mut self, force: Vector3<F>) -> &mut Self {
        self.force = force;
        self
    }
}

impl<F: Float> Default for Gravity<F> {
    fn default() -> Self {
        Self::new(Vector3::zero())
    }
}

impl<F: Float> UniversalForce<F> for Gravity<F> {
    fn is_on(&self) -> bool {
        self.on
    }

    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn apply_to(&self, particle: &mut Particle<F>) {
        if self.on {
            particle.add_force(&self.force);
        }
    }
}

/// Linear drag: adds `-coefficient * velocity`.
#[derive(Clone, Debug, PartialEq)]
pub struct Drag<F: Float> {
    coefficient: F,
    on: bool,
}

impl<F: Float> Drag<F> {
    pub fn new(coefficient: F) -> Self {
        Drag { coefficient, on: true }
    }

    pub fn coefficient(&self) -> F {
        self.coefficient
    }

    pub fn set_coefficient(&mut self, coefficient: F) -> &mut Self {
        self.coefficient = coefficient;
        self
    }
}

impl<F: Float> Default for Drag<F> {
    fn default() -> Self {
        Self::new(F::from_f64(DEFAULT_DRAG_COEFFICIENT))
    }
}

impl<F: Float> UniversalForce<F> for Drag<F> {
    fn is_on(&self) -> bool {
        self.on
    }

    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn apply_to(&self, particle: &mut Particle<F>) {
        if self.on {
            let drag = Vector3::scaled(&particle.velocity, -self.coefficient);
            particle.add_force(&drag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_adds_constant() {
        let mut p = Particle::<f64>::default();
        let g = Gravity::from_y(-9.81);
        g.apply_to(&mut p);
        g.apply_to(&mut p);
        assert_eq!(*p.force(), Vector3::new(0.0, -19.62, 0.0));
    }

    #[test]
    fn drag_opposes_velocity() {
        let mut p = Particle::<f64>::default();
        p.velocity = Vector3::new(2.0, 0.0, -4.0);
        Drag::new(0.5).apply_to(&mut p);
        assert_eq!(*p.force(), Vector3::new(-1.0, 0.0, 2.0));
    }

    #[test]
    fn switched_off_forces_do_nothing() {
        let mut p = Particle::<f32>::default();
        p.velocity = Vector3::new(1.0, 1.0, 1.0);
        let mut g = Gravity::from_y(1.0);
        let mut d = Drag::default();
        g.set_on(false);
        d.set_on(false);
        g.apply_to(&mut p);
        d.apply_to(&mut p);
        assert!(p.force().is_zero());
        assert!(!g.is_on());
    }
}
