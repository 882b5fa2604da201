use std::collections::{BTreeMap, BTreeSet};

use super::WorldKey;

/// A binary relation over worlds, as a map from each world to the worlds it is related to.
///
/// Worlds related to nothing have no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relation {
    arcs: BTreeMap<WorldKey, BTreeSet<WorldKey>>,
}

impl Relation {
    /// Adds the arc `(from, to)`, returning true if the arc is new.
    pub fn add(&mut self, from: WorldKey, to: WorldKey) -> bool {
        self.arcs.entry(from).or_default().insert(to)
    }

    pub fn contains(&self, from: WorldKey, to: WorldKey) -> bool {
        self.arcs.get(&from).is_some_and(|successors| successors.contains(&to))
    }

    pub fn successors(&self, from: WorldKey) -> Option<&BTreeSet<WorldKey>> {
        self.arcs.get(&from)
    }

    /// An iterator over every arc of the relation.
    pub fn pairs(&self) -> impl Iterator<Item = (WorldKey, WorldKey)> + '_ {
        self.arcs
            .iter()
            .flat_map(|(from, successors)| successors.iter().map(move |to| (*from, *to)))
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.values().map(BTreeSet::len).sum()
    }

    /// Removes both directions of every arc involving `world`.
    pub fn remove_world(&mut self, world: WorldKey) {
        self.arcs.remove(&world);
        self.arcs.retain(|_, successors| {
            successors.remove(&world);
            !successors.is_empty()
        });
    }
}
