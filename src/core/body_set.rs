use std::collections::HashSet;

use indexmap::IndexMap;

use super::body::{Body, BodyId};
use crate::math::Real;

/// Insertion-ordered arena of bodies keyed by stable [`BodyId`]s.
#[derive(Clone, Debug, Default)]
pub struct BodySet {
    bodies: IndexMap<BodyId, Body>,
    next_id: u64,
}

impl BodySet {
    pub fn new() -> Self {
        Self {
            bodies: IndexMap::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(id, body);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(&id)
    }

    pub fn get_index(&self, index: usize) -> Option<(BodyId, &Body)> {
        self.bodies.get_index(index).map(|(&id, body)| (id, body))
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<(BodyId, &mut Body)> {
        self.bodies.get_index_mut(index).map(|(&id, body)| (id, body))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().map(|(&id, body)| (id, body))
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.values_mut()
    }

    pub fn wells(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.iter().filter(|(_, body)| body.is_well())
    }

    pub fn particles(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.iter().filter(|(_, body)| body.is_particle())
    }

    pub fn particle_count(&self) -> usize {
        self.particles().count()
    }

    pub fn total_mass(&self) -> Real {
        self.bodies.values().map(|body| body.mass).sum()
    }

    /// Remove every id in `ids`, keeping the relative order of the survivors.
    pub fn remove_all(&mut self, ids: &HashSet<BodyId>) {
        if ids.is_empty() {
            return;
        }
        self.bodies.retain(|id, _| !ids.contains(id));
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}
