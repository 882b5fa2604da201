//! Reflexive and symmetric closure of the relations of a structure.
//!
//! Knowledge is factive only on a reflexive relation, and indistinguishability is mutual, and so relations are closed once a structure is built.
//! Closure is skipped when a builder is told the relations already have the property.
//! This is not checked.

use crate::misc::log::targets::{self};

use super::{KripkeStructure, Relation, WorldKey};

impl Relation {
    /// Adds `(w, w)` for every given world, returning a count of fresh arcs.
    pub fn add_reflexive_arcs(&mut self, worlds: impl Iterator<Item = WorldKey>) -> usize {
        worlds.filter(|world| self.add(*world, *world)).count()
    }

    /// Adds `(v, w)` for every arc `(w, v)`, returning a count of fresh arcs.
    pub fn add_symmetric_arcs(&mut self) -> usize {
        let converse = self.pairs().map(|(from, to)| (to, from)).collect::<Vec<_>>();
        converse
            .into_iter()
            .filter(|(from, to)| self.add(*from, *to))
            .count()
    }
}

impl KripkeStructure {
    /// Makes the relation of every agent reflexive.
    pub fn add_reflexive_arcs(&mut self) {
        for (agent, relation) in self.relations.iter_mut() {
            let fresh = relation.add_reflexive_arcs(self.worlds.keys());
            log::trace!(target: targets::CLOSURE, "Reflexive closure for {agent}: {fresh} arcs");
        }
    }

    /// Makes the relation of every agent symmetric.
    pub fn add_symmetric_arcs(&mut self) {
        for (agent, relation) in self.relations.iter_mut() {
            let fresh = relation.add_symmetric_arcs();
            log::trace!(target: targets::CLOSURE, "Symmetric closure for {agent}: {fresh} arcs");
        }
    }

    /// Whether the relation of every agent is reflexive.
    pub fn is_reflexive(&self) -> bool {
        self.relations.values().all(|relation| {
            self.worlds
                .keys()
                .all(|world| relation.contains(world, world))
        })
    }

    /// Whether the relation of every agent is symmetric.
    pub fn is_symmetric(&self) -> bool {
        self.relations.values().all(|relation| {
            relation
                .pairs()
                .all(|(from, to)| relation.contains(to, from))
        })
    }
}
