use std::cell::Cell;

use pointmass::{
    IntegratorKind, ParticleArena, ParticleId, ParticleSystem, PhysicsError, TargetedForce,
    Vector3,
};

const STIFFNESS: f64 = 4.0;
const AMPLITUDE: f64 = 0.5;

/// A unit mass on an undamped spring (rest length 1) to a fixed anchor at the
/// origin, released from rest at `x = 1 + AMPLITUDE`.
fn oscillator(kind: IntegratorKind) -> (ParticleSystem<f64>, ParticleId) {
    let mut system = ParticleSystem::with_gravity_and_drag(0.0, 0.0, 0.0, 0.0);
    system.set_integrator(kind);
    let anchor = system.make_particle(1.0, Vector3::zero()).unwrap();
    system.particle_mut(anchor).unwrap().make_fixed();
    let bob = system.make_particle(1.0, Vector3::new(1.0 + AMPLITUDE, 0.0, 0.0)).unwrap();
    system.make_spring(anchor, bob, STIFFNESS, 0.0, 1.0).unwrap();
    (system, bob)
}

fn exact_x(t: f64) -> f64 {
    1.0 + AMPLITUDE * (STIFFNESS.sqrt() * t).cos()
}

/// Absolute position error after integrating to `t_end` in steps of `dt`.
fn error_at(kind: IntegratorKind, dt: f64, t_end: f64) -> f64 {
    let (mut system, bob) = oscillator(kind);
    let steps = (t_end / dt).round() as usize;
    for _ in 0..steps {
        system.tick_by(dt).unwrap();
    }
    (system.particle(bob).unwrap().position.x - exact_x(t_end)).abs()
}

#[test]
fn tracks_the_analytic_oscillator() {
    let (mut system, bob) = oscillator(IntegratorKind::RungeKutta);
    let dt = 0.01;
    for step in 1..=300 {
        system.tick_by(dt).unwrap();
        let x = system.particle(bob).unwrap().position.x;
        let t = step as f64 * dt;
        assert!((x - exact_x(t)).abs() < 1e-7, "t = {}: x = {}, exact = {}", t, x, exact_x(t));
    }
}

#[test]
fn global_error_is_fourth_order() {
    let coarse = error_at(IntegratorKind::RungeKutta, 0.05, 2.0);
    let fine = error_at(IntegratorKind::RungeKutta, 0.025, 2.0);
    let ratio = coarse / fine;
    assert!((13.0..19.0).contains(&ratio), "coarse {} fine {} ratio {}", coarse, fine, ratio);
}

#[test]
fn beats_the_euler_family_at_equal_step() {
    let rk = error_at(IntegratorKind::RungeKutta, 0.05, 2.0);
    for kind in [
        IntegratorKind::ForwardEuler,
        IntegratorKind::BackwardEuler,
        IntegratorKind::ModifiedEuler,
    ] {
        let euler = error_at(kind, 0.05, 2.0);
        assert!(rk * 100.0 < euler, "{:?}: rk {} euler {}", kind, rk, euler);
    }
}

#[test]
fn conserves_energy_over_many_periods() {
    let (mut system, bob) = oscillator(IntegratorKind::RungeKutta);
    let energy = |system: &ParticleSystem<f64>| {
        let p = system.particle(bob).unwrap();
        let stretch = p.position.length() - 1.0;
        0.5 * p.velocity.length_squared() + 0.5 * STIFFNESS * stretch * stretch
    };
    let initial = energy(&system);
    for _ in 0..2000 {
        system.tick_by(0.01).unwrap();
    }
    assert!((energy(&system) - initial).abs() / initial < 1e-6);
}

#[test]
fn works_in_single_precision() {
    let mut system = ParticleSystem::<f32>::with_gravity_and_drag(0.0, -1.0, 0.0, 0.0);
    let id = system.make_particle(2.0, Vector3::zero()).unwrap();
    for _ in 0..10 {
        system.tick_by(0.1).unwrap();
    }
    let p = system.particle(id).unwrap();
    // Gravity is a force, so a mass of 2 falls at half rate.
    assert!((p.position.y + 0.25).abs() < 1e-5);
    assert!((p.velocity.y + 0.5).abs() < 1e-5);
}

/// Succeeds on its first `healthy_calls` evaluations, then fails.
struct FailingForce {
    targets: Vec<ParticleId>,
    healthy_calls: usize,
    calls: Cell<usize>,
    on: bool,
}

impl TargetedForce<f64> for FailingForce {
    fn is_on(&self) -> bool {
        self.on
    }

    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn targets(&self) -> &[ParticleId] {
        &self.targets
    }

    fn apply(&self, _: &mut ParticleArena<f64>) -> Result<(), PhysicsError> {
        if !self.on {
            return Ok(());
        }
        let calls = self.calls.get() + 1;
        self.calls.set(calls);
        if calls > self.healthy_calls {
            Err(PhysicsError::DegenerateVector)
        } else {
            Ok(())
        }
    }
}

#[test]
fn failed_stage_leaves_particles_where_they_started() {
    for kind in [IntegratorKind::RungeKutta, IntegratorKind::settling()] {
        let mut system = ParticleSystem::<f64>::with_gravity_and_drag(0.0, 0.0, 0.0, 0.0);
        system.set_integrator(kind);
        let id = system.make_particle(1.0, Vector3::zero()).unwrap();
        system.particle_mut(id).unwrap().velocity = Vector3::new(1.0, 0.0, 0.0);
        let force =
            FailingForce { targets: vec![id], healthy_calls: 1, calls: Cell::new(0), on: true };
        let index = system.add_custom_force(Box::new(force)).unwrap();

        assert_eq!(system.tick_by(1.0), Err(PhysicsError::DegenerateVector));
        let p = system.particle(id).unwrap();
        assert!(p.position.is_zero(), "{:?} moved to {}", kind, p.position);
        assert_eq!(p.velocity, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(p.age(), 0.0);

        system.custom_force_mut(index).unwrap().turn_off();
        system.tick_by(1.0).unwrap();
        assert_eq!(system.particle(id).unwrap().position, Vector3::new(1.0, 0.0, 0.0));
    }
}
