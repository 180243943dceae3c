use pointmass::{
    Attraction, IntegratorKind, Particle, ParticleSystem, Spring, TwoBodyForce, Vector3,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    -50.0..50.0f64
}

fn point() -> impl Strategy<Value = Vector3<f64>> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn kind() -> impl Strategy<Value = IntegratorKind> {
    prop_oneof![
        Just(IntegratorKind::ForwardEuler),
        Just(IntegratorKind::BackwardEuler),
        Just(IntegratorKind::ModifiedEuler),
        Just(IntegratorKind::RungeKutta),
        (0u32..5).prop_map(|settling_age| IntegratorKind::SettlingRungeKutta { settling_age }),
    ]
}

fn assert_opposite(a: &Vector3<f64>, b: &Vector3<f64>) -> Result<(), TestCaseError> {
    let scale = 1.0 + a.length();
    prop_assert!((a.x + b.x).abs() <= 1e-9 * scale, "{} vs {}", a, b);
    prop_assert!((a.y + b.y).abs() <= 1e-9 * scale, "{} vs {}", a, b);
    prop_assert!((a.z + b.z).abs() <= 1e-9 * scale, "{} vs {}", a, b);
    Ok(())
}

proptest! {
    #[test]
    fn spring_forces_are_equal_and_opposite(
        a in point(),
        b in point(),
        va in point(),
        vb in point(),
        strength in 0.01..100.0f64,
        damping in 0.0..10.0f64,
        rest in 0.01..20.0f64,
    ) {
        let mut system = ParticleSystem::with_gravity_and_drag(0.0, 0.0, 0.0, 0.0);
        let one = system.make_particle(1.0, a).unwrap();
        let other = system.make_particle(3.0, b).unwrap();
        system.particle_mut(one).unwrap().velocity = va;
        system.particle_mut(other).unwrap().velocity = vb;

        let spring = Spring::new(one, other, strength, damping, rest).unwrap();
        spring.apply_pair(system.world_mut().particles_mut()).unwrap();
        let particles = system.particles();
        let (first, second) = (particles.get(one).unwrap(), particles.get(other).unwrap());
        assert_opposite(first.force(), second.force())?;
    }

    #[test]
    fn attraction_forces_are_equal_and_opposite(
        a in point(),
        b in point(),
        ma in 0.1..10.0f64,
        mb in 0.1..10.0f64,
        strength in -100.0..100.0f64,
        minimum_distance in 0.01..5.0f64,
    ) {
        let mut system = ParticleSystem::with_gravity_and_drag(0.0, 0.0, 0.0, 0.0);
        let one = system.make_particle(ma, a).unwrap();
        let other = system.make_particle(mb, b).unwrap();

        let attraction = Attraction::new(one, other, strength, minimum_distance).unwrap();
        let pair =
            attraction.force_pair(system.particle(one).unwrap(), system.particle(other).unwrap());
        prop_assert!(pair.is_equal_and_opposite());
        attraction.apply_pair(system.world_mut().particles_mut()).unwrap();
        let particles = system.particles();
        let (first, second) = (particles.get(one).unwrap(), particles.get(other).unwrap());
        assert_opposite(first.force(), second.force())?;

        // Never stronger than at the minimum distance.
        let cap = strength.abs() * ma * mb / (minimum_distance * minimum_distance);
        prop_assert!(first.force().length() <= cap * (1.0 + 1e-9));
    }

    #[test]
    fn fixed_particles_stay_put(
        kind in kind(),
        anchor in point(),
        bob in point(),
        gravity in point(),
        steps in 1usize..20,
    ) {
        let mut system =
            ParticleSystem::with_gravity_and_drag(gravity.x, gravity.y, gravity.z, 0.1);
        system.set_integrator(kind);
        let fixed = system.add_particle(Particle::fixed_at(1.0, anchor).unwrap());
        let free = system.make_particle(1.0, bob).unwrap();
        system.make_spring(fixed, free, 1.0, 0.1, 1.0).unwrap();
        system.make_attraction(fixed, free, 1.0, 1.0).unwrap();

        for _ in 0..steps {
            system.tick_by(0.01).unwrap();
        }
        let p = system.particle(fixed).unwrap();
        prop_assert_eq!(p.position, anchor);
        prop_assert!(p.velocity.is_zero());
    }
}
