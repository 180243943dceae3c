//! Three-component vector used for positions, velocities and forces.
//!
//! Operations come in two flavours and are named so the difference is
//! visible at the call site:
//!
//! - **In-place** methods take `&mut self`, mutate the receiver and return it
//!   so calls can be chained: `force.add_in_place(&gravity).scale_in_place(dt)`.
//! - **Allocating** associated functions (`sum`, `difference`, `scaled`,
//!   `cross`) and the operator impls return a fresh vector and leave their
//!   inputs untouched. The `_into` forms write into an explicit target.

use crate::error::PhysicsError;
use crate::float::Float;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A mutable 3D vector. Equality is exact component equality.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vector3<F> {
    /// Create a new vector.
    pub fn new(x: F, y: F, z: F) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Vector3 { x: F::zero(), y: F::zero(), z: F::zero() }
    }

    // ----------------------------------------------------------------------
    // In-place
    // ----------------------------------------------------------------------

    /// Overwrite all three components.
    pub fn set(&mut self, x: F, y: F, z: F) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Copy the components of `other` into `self`.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.set(other.x, other.y, other.z)
    }

    /// `self += other`.
    pub fn add_in_place(&mut self, other: &Self) -> &mut Self {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
        self
    }

    /// `self -= other`.
    pub fn sub_in_place(&mut self, other: &Self) -> &mut Self {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
        self
    }

    /// `self *= f`.
    pub fn scale_in_place(&mut self, f: F) -> &mut Self {
        self.x = self.x * f;
        self.y = self.y * f;
        self.z = self.z * f;
        self
    }

    /// Scale to magnitude `length`, keeping the direction.
    ///
    /// A negative `length` reverses the direction; the force laws rely on
    /// this to express signed magnitudes along an axis.
    pub fn set_length(&mut self, length: F) -> Result<&mut Self, PhysicsError> {
        let current = self.length();
        if current == F::zero() {
            return Err(PhysicsError::DegenerateVector);
        }
        Ok(self.scale_in_place(length / current))
    }

    /// Scale to unit length.
    pub fn normalize(&mut self) -> Result<&mut Self, PhysicsError> {
        self.set_length(F::one())
    }

    /// Clamp the length to at most `max`. A non-positive `max` zeroes the vector.
    pub fn limit(&mut self, max: F) -> &mut Self {
        if max <= F::zero() {
            return self.clear();
        }
        let current = self.length();
        if current > max {
            self.scale_in_place(max / current);
        }
        self
    }

    /// Clamp the length to at least `min`. No-op when `min <= 0`.
    ///
    /// Fails on a zero vector that would need lengthening, since it has no
    /// direction to lengthen along.
    pub fn floor(&mut self, min: F) -> Result<&mut Self, PhysicsError> {
        if min <= F::zero() || self.length() >= min {
            return Ok(self);
        }
        self.set_length(min)
    }

    /// Replace `self` with its projection onto `onto`.
    pub fn project_onto(&mut self, onto: &Self) -> Result<&mut Self, PhysicsError> {
        let denominator = onto.length_squared();
        if denominator == F::zero() {
            return Err(PhysicsError::DegenerateVector);
        }
        let factor = onto.dot(self) / denominator;
        Ok(self.copy_from(onto).scale_in_place(factor))
    }

    /// Zero all components.
    pub fn clear(&mut self) -> &mut Self {
        self.set(F::zero(), F::zero(), F::zero())
    }

    // ----------------------------------------------------------------------
    // Allocating / explicit target
    // ----------------------------------------------------------------------

    /// `a + b` as a new vector.
    pub fn sum(a: &Self, b: &Self) -> Self {
        Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
    }

    /// `a + b` written into `target`, which is returned.
    ///
    /// `target` may not alias `a` or `b`; use [`add_in_place`](Self::add_in_place)
    /// for accumulation.
    pub fn sum_into<'t>(a: &Self, b: &Self, target: &'t mut Self) -> &'t mut Self {
        target.set(a.x + b.x, a.y + b.y, a.z + b.z)
    }

    /// `a - b` as a new vector.
    pub fn difference(a: &Self, b: &Self) -> Self {
        Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
    }

    /// `a - b` written into `target`, which is returned.
    pub fn difference_into<'t>(a: &Self, b: &Self, target: &'t mut Self) -> &'t mut Self {
        target.set(a.x - b.x, a.y - b.y, a.z - b.z)
    }

    /// `v * f` as a new vector.
    pub fn scaled(v: &Self, f: F) -> Self {
        Vector3::new(v.x * f, v.y * f, v.z * f)
    }

    /// `v * f` written into `target`, which is returned.
    pub fn scaled_into<'t>(v: &Self, f: F, target: &'t mut Self) -> &'t mut Self {
        target.set(v.x * f, v.y * f, v.z * f)
    }

    /// Cross product. Always a new vector.
    pub fn cross(&self, other: &Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    // ----------------------------------------------------------------------
    // Queries
    // ----------------------------------------------------------------------

    pub fn dot(&self, other: &Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length_squared(&self) -> F {
        self.dot(self)
    }

    pub fn length(&self) -> F {
        self.length_squared().sqrt()
    }

    pub fn distance_to(&self, other: &Self) -> F {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Self) -> F {
        self.distance_squared_to_xyz(other.x, other.y, other.z)
    }

    /// Distance to the point given by raw components.
    pub fn distance_to_xyz(&self, x: F, y: F, z: F) -> F {
        self.distance_squared_to_xyz(x, y, z).sqrt()
    }

    pub fn distance_squared_to_xyz(&self, x: F, y: F, z: F) -> F {
        let dx = self.x - x;
        let dy = self.y - y;
        let dz = self.z - z;
        dx * dx + dy * dy + dz * dz
    }

    /// Exact zero test, no epsilon.
    pub fn is_zero(&self) -> bool {
        self.x == F::zero() && self.y == F::zero() && self.z == F::zero()
    }
}

impl<F: Float> Add for Vector3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector3::sum(&self, &rhs)
    }
}

impl<F: Float> Sub for Vector3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vector3::difference(&self, &rhs)
    }
}

impl<F: Float> Mul<F> for Vector3<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self {
        Vector3::scaled(&self, rhs)
    }
}

impl<F: Float> Neg for Vector3<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Vector3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl<F: Float> AddAssign for Vector3<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl<F: Float> SubAssign for Vector3<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_in_place(&rhs);
    }
}

impl<F: Float> fmt::Display for Vector3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
