/*!
Kripke structures --- worlds, related per agent.

A [KripkeStructure] stores [worlds](KripkeWorld) in an arena, and worlds are referred to by [WorldKey]s.
Keys are stable: removing a world never changes the key of another world, and a clone of a structure uses the same keys as the original.
So, a key taken from some structure continues to identify the same world in any copy of the structure, for as long as the world survives.

For each agent the structure has a [Relation], read as indistinguishability: if `(w, v)` is in the relation of `a` then at `w` agent `a` cannot rule out `v`.
Relations are typically [closed](closure) to be reflexive and symmetric.

Structures only shrink after construction, through [public announcements](announce).

# Example

```rust
# use epistemic_kbp::kripke::builder::StructureBuilder;
# use epistemic_kbp::structures::{agent_id::AgentId, formula::Formula, world::KripkeWorld};
let a = AgentId::from("a");

let mut builder = StructureBuilder::default();
let w1 = builder.world(KripkeWorld::named("w1", [("p", true)]));
let w2 = builder.world(KripkeWorld::named("w2", [("p", false)]));
builder.arc(&a, w1, w2).unwrap();

let mut structure = builder.build();
assert_eq!(structure.worlds_accessible_from(w1, &a).len(), 2);

let removed = structure.announce(&Formula::atom("p")).unwrap();
assert_eq!(removed, vec![w2]);
assert_eq!(structure.worlds_accessible_from(w1, &a).len(), 1);
```
*/

pub mod announce;
pub mod builder;
pub mod closure;
mod relation;
pub use relation::Relation;

use std::collections::{BTreeMap, BTreeSet};

use slotmap::SlotMap;

use crate::{
    structures::{agent_id::AgentId, world::KripkeWorld},
    types::err::StructureError,
};

slotmap::new_key_type! {
    /// The key of a world in a structure.
    pub struct WorldKey;
}

/// A Kripke structure.
#[derive(Clone, Debug, Default)]
pub struct KripkeStructure {
    /// The worlds of the structure.
    worlds: SlotMap<WorldKey, KripkeWorld>,

    /// An indistinguishability relation for each agent.
    relations: BTreeMap<AgentId, Relation>,
}

impl KripkeStructure {
    /// Adds a world to the structure, unrelated to any world.
    pub fn add_world(&mut self, world: KripkeWorld) -> WorldKey {
        self.worlds.insert(world)
    }

    /// Ensures the structure has a relation for `agent`.
    pub fn add_agent(&mut self, agent: AgentId) {
        self.relations.entry(agent).or_default();
    }

    /// Adds the arc `(from, to)` to the relation of `agent`.
    pub fn add_arc(
        &mut self,
        agent: &AgentId,
        from: WorldKey,
        to: WorldKey,
    ) -> Result<(), StructureError> {
        for key in [from, to] {
            if !self.worlds.contains_key(key) {
                return Err(StructureError::UnknownWorld(key));
            }
        }
        match self.relations.get_mut(agent) {
            Some(relation) => {
                relation.add(from, to);
            }
            None => {
                let mut relation = Relation::default();
                relation.add(from, to);
                self.relations.insert(agent.clone(), relation);
            }
        }
        Ok(())
    }

    pub fn world(&self, key: WorldKey) -> Option<&KripkeWorld> {
        self.worlds.get(key)
    }

    pub fn contains_world(&self, key: WorldKey) -> bool {
        self.worlds.contains_key(key)
    }

    /// The key of the first world with the given name.
    pub fn find_world(&self, name: &str) -> Result<WorldKey, StructureError> {
        self.worlds
            .iter()
            .find(|(_, world)| world.name() == name)
            .map(|(key, _)| key)
            .ok_or_else(|| StructureError::UnnamedWorld(name.to_owned()))
    }

    /// An iterator over the keys of all worlds in the structure.
    pub fn world_keys(&self) -> impl Iterator<Item = WorldKey> + '_ {
        self.worlds.keys()
    }

    /// An iterator over all (key, world) pairs in the structure.
    pub fn worlds(&self) -> impl Iterator<Item = (WorldKey, &KripkeWorld)> {
        self.worlds.iter()
    }

    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    /// An iterator over the agents with a relation on the structure.
    pub fn agents(&self) -> impl Iterator<Item = &AgentId> {
        self.relations.keys()
    }

    pub fn relation(&self, agent: &AgentId) -> Option<&Relation> {
        self.relations.get(agent)
    }

    /// An iterator over the worlds `agent` relates to `world`.
    ///
    /// Empty if either the agent has no relation or the world is not related to any world.
    pub fn accessible<'a>(
        &'a self,
        world: WorldKey,
        agent: &AgentId,
    ) -> impl Iterator<Item = WorldKey> + 'a {
        self.relations
            .get(agent)
            .and_then(|relation| relation.successors(world))
            .into_iter()
            .flatten()
            .copied()
    }

    /// The set of worlds `agent` relates to `world`.
    pub fn worlds_accessible_from(&self, world: WorldKey, agent: &AgentId) -> BTreeSet<WorldKey> {
        self.accessible(world, agent).collect()
    }

    /// Removes a world, and every arc to or from the world.
    pub fn remove_world(&mut self, key: WorldKey) -> Option<KripkeWorld> {
        let world = self.worlds.remove(key)?;
        for relation in self.relations.values_mut() {
            relation.remove_world(key);
        }
        Some(world)
    }

    /// Whether `self` and `other` have the same worlds under the same keys, and the same relations.
    pub fn same_model(&self, other: &KripkeStructure) -> bool {
        self.worlds.len() == other.worlds.len()
            && self
                .worlds
                .iter()
                .all(|(key, world)| other.worlds.get(key) == Some(world))
            && self.relations == other.relations
    }
}

impl std::fmt::Display for KripkeStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, world) in &self.worlds {
            writeln!(f, "{world}")?;
        }
        for (agent, relation) in &self.relations {
            write!(f, "{agent}:")?;
            for (from, to) in relation.pairs() {
                if from < to {
                    if let (Some(a), Some(b)) = (self.worlds.get(from), self.worlds.get(to)) {
                        write!(f, " {}~{}", a.name(), b.name())?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
