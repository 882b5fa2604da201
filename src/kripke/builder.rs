/*!
Tools for building a structure.

A [StructureBuilder] collects worlds and arcs, and closes the relations of the structure when built.
If the arcs given are already reflexive (or symmetric) this may be certified to skip the relevant closure.

Two common shapes of structure have direct constructors:
- [all_valuations] gives a world for every valuation of some atoms.
- [from_observability] relates two worlds for an agent exactly when the worlds agree on every atom the agent observes.

```rust
# use std::collections::{BTreeMap, BTreeSet};
# use epistemic_kbp::kripke::builder::{all_valuations, from_observability};
# use epistemic_kbp::structures::{agent_id::AgentId, atom::Atom};
let p = Atom::from("p");
let q = Atom::from("q");
let worlds = all_valuations(&[p.clone(), q.clone()]);
assert_eq!(worlds.len(), 4);

// a sees p, but not q.
let a = AgentId::from("a");
let observations = BTreeMap::from([(a.clone(), BTreeSet::from([p]))]);
let (structure, keys) = from_observability(worlds, &observations);

for key in keys {
    assert_eq!(structure.worlds_accessible_from(key, &a).len(), 2);
}
```
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    structures::{agent_id::AgentId, atom::Atom, valuation::Valuation, world::KripkeWorld},
    types::err::StructureError,
};

use super::{KripkeStructure, WorldKey};

/// A builder for a structure.
#[derive(Default)]
pub struct StructureBuilder {
    structure: KripkeStructure,

    /// The arcs given are known to be reflexive.
    reflexive: bool,

    /// The arcs given are known to be symmetric.
    symmetric: bool,
}

impl StructureBuilder {
    /// Adds a world.
    pub fn world(&mut self, world: KripkeWorld) -> WorldKey {
        self.structure.add_world(world)
    }

    /// Adds an agent, with no arcs.
    pub fn agent(&mut self, agent: AgentId) {
        self.structure.add_agent(agent)
    }

    /// Adds the arc `(from, to)` for `agent`.
    pub fn arc(&mut self, agent: &AgentId, from: WorldKey, to: WorldKey) -> Result<(), StructureError> {
        self.structure.add_arc(agent, from, to)
    }

    /// Makes every pair of `worlds` indistinguishable to `agent`.
    pub fn indistinguishable(
        &mut self,
        agent: &AgentId,
        worlds: &[WorldKey],
    ) -> Result<(), StructureError> {
        for from in worlds {
            for to in worlds {
                self.structure.add_arc(agent, *from, *to)?;
            }
        }
        Ok(())
    }

    /// Notes the arcs given are reflexive, skipping reflexive closure.
    pub fn certify_reflexive(&mut self) {
        self.reflexive = true;
    }

    /// Notes the arcs given are symmetric, skipping symmetric closure.
    pub fn certify_symmetric(&mut self) {
        self.symmetric = true;
    }

    /// The structure, with relations closed unless certified.
    pub fn build(self) -> KripkeStructure {
        let mut structure = self.structure;
        if !self.reflexive {
            structure.add_reflexive_arcs();
        }
        if !self.symmetric {
            structure.add_symmetric_arcs();
        }
        structure
    }
}

/// A world for each valuation of `atoms`.
///
/// Each world is named by 'w' followed by the value of each atom, in order, as 0 or 1.
pub fn all_valuations(atoms: &[Atom]) -> Vec<KripkeWorld> {
    let mut worlds = Vec::with_capacity(1 << atoms.len());
    for index in 0..(1_usize << atoms.len()) {
        let mut valuation = Valuation::default();
        let mut name = String::from("w");
        for (position, atom) in atoms.iter().enumerate() {
            let value = (index >> (atoms.len() - 1 - position)) & 1 == 1;
            valuation.set(atom.clone(), value);
            name.push(if value { '1' } else { '0' });
        }
        worlds.push(KripkeWorld::with_valuation(name, valuation));
    }
    worlds
}

/// A structure on `worlds` where two worlds are indistinguishable to an agent iff the worlds agree on every atom the agent observes.
///
/// The keys of the worlds are returned in the order of `worlds`.
pub fn from_observability(
    worlds: Vec<KripkeWorld>,
    observations: &BTreeMap<AgentId, BTreeSet<Atom>>,
) -> (KripkeStructure, Vec<WorldKey>) {
    let mut structure = KripkeStructure::default();
    let keys = worlds
        .into_iter()
        .map(|world| structure.add_world(world))
        .collect::<Vec<_>>();

    for (agent, observed) in observations {
        let relation = structure.relations.entry(agent.clone()).or_default();

        for (index, from) in keys.iter().enumerate() {
            for to in &keys[index..] {
                let (Some(a), Some(b)) = (structure.worlds.get(*from), structure.worlds.get(*to))
                else {
                    continue;
                };
                if a.valuation().agrees_on(b.valuation(), observed) {
                    relation.add(*from, *to);
                    relation.add(*to, *from);
                }
            }
        }
    }

    (structure, keys)
}
