//! Generational storage for particles.
//!
//! Forces refer to particles by [`ParticleId`] rather than by reference. A
//! handle pairs a slot index with the slot's generation at insertion time;
//! removing the particle bumps the generation, so a handle that outlives its
//! particle fails lookups with [`PhysicsError::MissingParticle`] instead of
//! silently resolving to whatever particle reuses the slot.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use alloc::vec::Vec;
use core::fmt;

/// Stable handle to a particle owned by a [`ParticleArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId {
    index: u32,
    generation: u32,
}

impl ParticleId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn missing(self) -> PhysicsError {
        PhysicsError::MissingParticle { index: self.index, generation: self.generation }
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticleId({}v{})", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot<F: Float> {
    generation: u32,
    particle: Option<Particle<F>>,
}

/// Slot arena owning every particle in a system.
///
/// Iteration is in slot order, which is insertion order until a removed
/// slot gets reused. Particles can be read and changed through the arena,
/// but only the owning [`ParticleSystem`](crate::ParticleSystem) adds or
/// removes them, so forces never outlive their ends.
#[derive(Debug)]
pub struct ParticleArena<F: Float> {
    slots: Vec<Slot<F>>,
    free: Vec<u32>,
    len: usize,
}

impl<F: Float> ParticleArena<F> {
    pub(crate) fn new() -> Self {
        ParticleArena { slots: Vec::new(), free: Vec::new(), len: 0 }
    }

    pub(crate) fn insert(&mut self, particle: Particle<F>) -> ParticleId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.particle = Some(particle);
            return ParticleId { index, generation: slot.generation };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, particle: Some(particle) });
        ParticleId { index, generation: 0 }
    }

    pub(crate) fn remove(&mut self, id: ParticleId) -> Result<Particle<F>, PhysicsError> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .ok_or_else(|| id.missing())?;
        let particle = slot.particle.take().ok_or_else(|| id.missing())?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Ok(particle)
    }

    pub fn get(&self, id: ParticleId) -> Result<&Particle<F>, PhysicsError> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.particle.as_ref())
            .ok_or_else(|| id.missing())
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Result<&mut Particle<F>, PhysicsError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.particle.as_mut())
            .ok_or_else(|| id.missing())
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.get(id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every particle. Outstanding handles all go stale.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.particle.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        // Hand out low slots first after a clear.
        self.free.reverse();
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle<F>)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.particle.as_ref().map(|p| {
                (ParticleId { index: index as u32, generation: slot.generation }, p)
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ParticleId, &mut Particle<F>)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.particle
                .as_mut()
                .map(|p| (ParticleId { index: index as u32, generation }, p))
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticleId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Mutable access to every live particle without handles.
    pub fn particles_mut(&mut self) -> impl Iterator<Item = &mut Particle<F>> + '_ {
        self.slots.iter_mut().filter_map(|slot| slot.particle.as_mut())
    }
}
