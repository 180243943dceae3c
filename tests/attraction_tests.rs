use pointmass::{
    Attraction, ParticleId, ParticleSystem, PhysicsError, TargetedForce, TwoBodyForce, Vector3,
};

/// Two unit masses in a system with no global forces, and an unregistered
/// attraction between them.
fn attraction_between(
    a: Vector3<f64>,
    b: Vector3<f64>,
    strength: f64,
    minimum_distance: f64,
) -> (ParticleSystem<f64>, Attraction<f64>) {
    let mut system = ParticleSystem::with_gravity_and_drag(0.0, 0.0, 0.0, 0.0);
    let one = system.make_particle(1.0, a).unwrap();
    let other = system.make_particle(1.0, b).unwrap();
    let attraction = Attraction::new(one, other, strength, minimum_distance).unwrap();
    (system, attraction)
}

fn force_on(system: &ParticleSystem<f64>, id: ParticleId) -> Vector3<f64> {
    *system.particle(id).unwrap().force()
}

fn force_on_one_end(a: Vector3<f64>, b: Vector3<f64>, strength: f64, min: f64) -> Vector3<f64> {
    let (mut system, attraction) = attraction_between(a, b, strength, min);
    attraction.apply(system.world_mut().particles_mut()).unwrap();
    force_on(&system, attraction.one_end())
}

#[test]
fn positive_strength_attracts() {
    let (mut system, attraction) =
        attraction_between(Vector3::zero(), Vector3::new(3.0, 0.0, 0.0), 1.0, 0.1);
    attraction.apply(system.world_mut().particles_mut()).unwrap();

    let on_one = force_on(&system, attraction.one_end());
    let on_other = force_on(&system, attraction.other_end());
    assert!((on_one.x - 1.0 / 9.0).abs() < 1e-9, "got {}", on_one);
    assert!(on_one.y.abs() < 1e-12 && on_one.z.abs() < 1e-12);
    assert!((on_other.x + 1.0 / 9.0).abs() < 1e-9, "got {}", on_other);
}

#[test]
fn negative_strength_repels() {
    let f = force_on_one_end(Vector3::zero(), Vector3::new(3.0, 0.0, 0.0), -1.0, 0.1);
    assert!((f.x + 1.0 / 9.0).abs() < 1e-9);
}

#[test]
fn force_falls_off_with_inverse_square() {
    let near = force_on_one_end(Vector3::zero(), Vector3::new(0.0, 2.0, 0.0), 4.0, 0.1);
    let far = force_on_one_end(Vector3::zero(), Vector3::new(0.0, 4.0, 0.0), 4.0, 0.1);
    assert!((near.length() / far.length() - 4.0).abs() < 1e-9);
}

#[test]
fn force_scales_with_both_masses() {
    let (mut system, attraction) =
        attraction_between(Vector3::zero(), Vector3::new(0.0, 0.0, 2.0), 1.0, 0.1);
    system.particle_mut(attraction.one_end()).unwrap().set_mass(3.0).unwrap();
    system.particle_mut(attraction.other_end()).unwrap().set_mass(2.0).unwrap();
    attraction.apply(system.world_mut().particles_mut()).unwrap();
    let on_one = force_on(&system, attraction.one_end());
    assert!((on_one.z - 1.5).abs() < 1e-9);
}

#[test]
fn close_range_is_capped_at_minimum_distance() {
    let capped = force_on_one_end(Vector3::zero(), Vector3::new(0.01, 0.0, 0.0), 1.0, 0.5);
    let at_min = force_on_one_end(Vector3::zero(), Vector3::new(0.5, 0.0, 0.0), 1.0, 0.5);
    assert!((capped.x - 4.0).abs() < 1e-9);
    assert!((capped.x - at_min.x).abs() < 1e-9);
}

#[test]
fn coincident_ends_produce_no_force() {
    let f = force_on_one_end(Vector3::new(2.0, 2.0, 2.0), Vector3::new(2.0, 2.0, 2.0), 1.0, 0.1);
    assert!(f.is_zero());
}

#[test]
fn strength_may_change_sign_but_minimum_distance_stays_positive() {
    let mut system = ParticleSystem::<f32>::new();
    let a = system.make_default_particle();
    let b = system.make_default_particle();
    assert_eq!(
        system.make_attraction(a, b, 1.0, 0.0),
        Err(PhysicsError::InvalidMinimumDistance)
    );

    let index = system.make_attraction(a, b, 1.0, 0.2).unwrap();
    let attraction = system.attraction_mut(index).unwrap();
    attraction.set_strength(-5.0).unwrap();
    assert_eq!(attraction.strength(), -5.0);
    assert_eq!(
        attraction.set_minimum_distance(-1.0).err(),
        Some(PhysicsError::InvalidMinimumDistance)
    );
    assert_eq!(attraction.minimum_distance(), 0.2);
}

#[test]
fn strength_must_be_finite() {
    let mut system = ParticleSystem::<f64>::new();
    let a = system.make_default_particle();
    let b = system.make_default_particle();
    assert_eq!(system.make_attraction(a, b, f64::NAN, 0.2), Err(PhysicsError::InvalidStrength));
    assert_eq!(
        system.make_attraction(a, b, f64::NEG_INFINITY, 0.2),
        Err(PhysicsError::InvalidStrength)
    );
    assert_eq!(system.attraction_count(), 0);

    let index = system.make_attraction(a, b, 2.0, 0.2).unwrap();
    let attraction = system.attraction_mut(index).unwrap();
    assert_eq!(attraction.set_strength(f64::INFINITY).err(), Some(PhysicsError::InvalidStrength));
    assert!(attraction.set_strength(f64::NAN).is_err());
    assert_eq!(attraction.strength(), 2.0);
}

#[test]
fn two_free_bodies_fall_together() {
    let mut system = ParticleSystem::<f64>::with_gravity_and_drag(0.0, 0.0, 0.0, 0.0);
    let a = system.make_particle(1.0, Vector3::new(-5.0, 0.0, 0.0)).unwrap();
    let b = system.make_particle(1.0, Vector3::new(5.0, 0.0, 0.0)).unwrap();
    system.make_attraction(a, b, 10.0, 1.0).unwrap();
    system.set_time_step(0.01).unwrap();

    for _ in 0..100 {
        system.tick().unwrap();
    }
    let pa = system.particle(a).unwrap().position;
    let pb = system.particle(b).unwrap().position;
    assert!(pa.x > -5.0 && pb.x < 5.0);
    // Symmetric setup, so the centre of mass stays put.
    assert!((pa.x + pb.x).abs() < 1e-9);
}
