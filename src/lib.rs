//! Mass-spring particle dynamics with swappable integrators.
//!
//! `pointmass` simulates point masses joined by damped springs and
//! inverse-square attractions, under uniform gravity and linear drag. A host
//! creates particles and forces on a [`ParticleSystem`], calls
//! [`tick`](ParticleSystem::tick) once per frame and reads positions back.
//!
//! # Features
//!
//! - **Integrators**: symplectic Euler (position-first and velocity-first),
//!   modified Euler, classical Runge-Kutta and a settling Runge-Kutta that
//!   puts resting particles to sleep, swappable between steps
//! - **Forces**: damped springs, attractions/repulsions with a minimum
//!   distance, and caller-defined [`TargetedForce`]s
//! - **Handles**: particles live in a generational arena; stale
//!   [`ParticleId`]s fail with an error instead of aliasing
//! - **Observable**: monitor force evaluations and settling via [`StepObserver`]
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Quick start
//!
//! ```
//! use pointmass::{ParticleSystem, Vector3};
//!
//! let mut system = ParticleSystem::<f64>::with_gravity_and_drag(0.0, -9.81, 0.0, 0.01);
//! let anchor = system.make_particle(1.0, Vector3::zero()).unwrap();
//! system.particle_mut(anchor).unwrap().make_fixed();
//! let bob = system.make_particle(1.0, Vector3::new(0.0, -1.0, 0.0)).unwrap();
//! system.make_spring(anchor, bob, 50.0, 0.5, 1.0).unwrap();
//!
//! system.set_time_step(1.0 / 60.0).unwrap();
//! for _ in 0..60 {
//!     system.tick().unwrap();
//! }
//! assert!(system.particle(bob).unwrap().position.y < -1.0);
//! ```

#![no_std]

extern crate alloc;

pub mod arena;
pub mod config;
pub mod error;
pub mod float;
pub mod force;
pub mod integrator;
pub mod observer;
pub mod particle;
pub mod system;
pub mod vector;
pub mod world;

pub use arena::{ParticleArena, ParticleId};
pub use config::SystemConfig;
pub use error::PhysicsError;
pub use float::Float;
pub use force::{
    Attraction, Drag, ForcePair, Gravity, Link, Spring, TargetedForce, TwoBodyForce,
    UniversalForce,
};
pub use integrator::{
    BackwardEuler, ForwardEuler, Integrator, IntegratorKind, ModifiedEuler, RungeKutta,
    SettlingRungeKutta,
};
pub use observer::{NoOpStepObserver, StepObserver};
pub use particle::{Particle, DEFAULT_MASS};
pub use system::ParticleSystem;
pub use vector::Vector3;
pub use world::World;
