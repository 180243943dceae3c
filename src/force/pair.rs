//! Bookkeeping shared by every two-body force.

use crate::arena::ParticleId;
use crate::float::Float;
use crate::vector::Vector3;

/// The two ends of a two-body force plus its on/off switch.
///
/// Ends are fixed at construction. Forces start switched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    ends: [ParticleId; 2],
    on: bool,
}

impl Link {
    pub fn new(one_end: ParticleId, other_end: ParticleId) -> Self {
        Link { ends: [one_end, other_end], on: true }
    }

    pub fn one_end(&self) -> ParticleId {
        self.ends[0]
    }

    pub fn other_end(&self) -> ParticleId {
        self.ends[1]
    }

    pub fn ends(&self) -> &[ParticleId] {
        &self.ends
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }
}

/// The forces a two-body force contributes to its ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ForcePair<F: Float> {
    /// The other end receives the negation of this vector.
    EqualAndOpposite(Vector3<F>),
    /// Each end receives its own vector.
    Independent {
        on_one_end: Vector3<F>,
        on_other_end: Vector3<F>,
    },
}

impl<F: Float> ForcePair<F> {
    pub fn equal_and_opposite(on_one_end: Vector3<F>) -> Self {
        ForcePair::EqualAndOpposite(on_one_end)
    }

    pub fn specify_both(on_one_end: Vector3<F>, on_other_end: Vector3<F>) -> Self {
        ForcePair::Independent { on_one_end, on_other_end }
    }

    /// No force on either end.
    pub fn none() -> Self {
        ForcePair::EqualAndOpposite(Vector3::zero())
    }

    pub fn on_one_end(&self) -> Vector3<F> {
        match self {
            ForcePair::EqualAndOpposite(f) => *f,
            ForcePair::Independent { on_one_end, .. } => *on_one_end,
        }
    }

    /// Returned by value: changing it never touches the stored vector.
    pub fn on_other_end(&self) -> Vector3<F> {
        match self {
            ForcePair::EqualAndOpposite(f) => -*f,
            ForcePair::Independent { on_other_end, .. } => *on_other_end,
        }
    }

    pub fn is_equal_and_opposite(&self) -> bool {
        matches!(self, ForcePair::EqualAndOpposite(_))
    }
}
