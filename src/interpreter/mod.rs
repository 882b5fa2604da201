/*!
The interpreter of a knowledge-based program.

An interpreter owns one private [structure](KripkeStructure) for each agent, each an independent copy of some base structure, and drives rounds of the [protocol](Interpreter::public_announcement) on those structures.

Alongside the structures an interpreter holds:
- Permissions, mapping an agent to the agents whose explanations the agent hears.
- Arguments, mapping the name of an action to the arguments the action is performed on.
- Associations, mapping an agent to the atoms the agent observes directly, from which the observation of an agent is built.

# Example

```rust
# use epistemic_kbp::actions::library::Utterance;
# use epistemic_kbp::agent::Agent;
# use epistemic_kbp::config::Config;
# use epistemic_kbp::interpreter::Interpreter;
# use epistemic_kbp::kripke::builder::StructureBuilder;
# use epistemic_kbp::program::AgentProgram;
# use epistemic_kbp::structures::{agent_id::AgentId, formula::Formula, world::KripkeWorld};
# use epistemic_kbp::types::err::ModelError;
let p = Formula::atom("p");
let (alice, bob) = (AgentId::from("alice"), AgentId::from("bob"));

let mut builder = StructureBuilder::default();
let w1 = builder.world(KripkeWorld::named("w1", [("p", true)]));
let w2 = builder.world(KripkeWorld::named("w2", [("p", false)]));
for agent in [&alice, &bob] {
    assert!(builder.indistinguishable(agent, &[w1, w2]).is_ok());
}
let base = builder.build();

let agents = [&alice, &bob].map(|id| {
    let mut program = AgentProgram::default();
    program.push(Formula::knows(id.clone(), p.clone()), Utterance::shared("p", "p"));
    Agent::new(id.clone(), program)
});

let mut interpreter = Interpreter::from_config(Config::default(), &base, agents.to_vec()).unwrap();
let report = interpreter.public_announcement(&p, w1).unwrap();

assert_eq!(report.outcomes[&alice].action.as_deref(), Some("p"));
assert_eq!(interpreter.is_finished_at(w1), Ok(true));
assert!(matches!(
    interpreter.is_finished_at(w2),
    Err(ModelError::InvalidModel { .. })
));
```
*/

mod counters;
pub use counters::Counters;

mod round;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    actions::Value,
    agent::Agent,
    config::Config,
    kripke::{KripkeStructure, WorldKey},
    misc::log::targets::{self},
    reports::Report,
    structures::{agent_id::AgentId, atom::Atom, formula::Formula},
    types::err::{self, BuildError, ModelError},
};

/// An interpreter of the programs of some collection of agents.
pub struct Interpreter {
    /// The configuration of the interpreter.
    pub config: Config,

    /// Counters related to the interpreter.
    pub counters: Counters,

    agents: BTreeMap<AgentId, Agent>,

    /// The private structure of each agent.
    structures: BTreeMap<AgentId, KripkeStructure>,

    /// The agents each agent hears.
    permissions: BTreeMap<AgentId, BTreeSet<AgentId>>,

    /// Arguments bound to actions, by name of the action.
    arguments: HashMap<String, Vec<Value>>,

    /// The atoms associated with each agent.
    associations: BTreeMap<AgentId, BTreeSet<Atom>>,
}

impl Interpreter {
    /// An interpreter for `agents`, each with a private copy of `base`.
    ///
    /// Every agent is given an empty permission set and an empty association.
    pub fn from_config(
        config: Config,
        base: &KripkeStructure,
        agents: Vec<Agent>,
    ) -> Result<Self, BuildError> {
        if agents.is_empty() {
            return Err(BuildError::NoAgents);
        }

        let mut the_agents = BTreeMap::default();
        let mut structures = BTreeMap::default();
        let mut permissions = BTreeMap::default();
        let mut associations = BTreeMap::default();

        for agent in agents {
            let id = agent.id().clone();
            if the_agents.contains_key(&id) {
                return Err(BuildError::DuplicateAgent(id));
            }
            structures.insert(id.clone(), base.clone());
            permissions.insert(id.clone(), BTreeSet::default());
            associations.insert(id.clone(), BTreeSet::default());
            the_agents.insert(id, agent);
        }

        log::info!(target: targets::INTERPRETER,
            "Interpreter for {} agents on {} worlds", the_agents.len(), base.world_count());

        Ok(Interpreter {
            config,
            counters: Counters::default(),
            agents: the_agents,
            structures,
            permissions,
            arguments: HashMap::default(),
            associations,
        })
    }

    fn check_agent(&self, agent: &AgentId) -> Result<(), BuildError> {
        match self.agents.contains_key(agent) {
            true => Ok(()),
            false => Err(BuildError::UnknownAgent(agent.clone())),
        }
    }

    /// Sets the agents `agent` hears, replacing any previous permissions.
    pub fn set_permissions(
        &mut self,
        agent: &AgentId,
        hears: impl IntoIterator<Item = AgentId>,
    ) -> Result<(), BuildError> {
        self.check_agent(agent)?;
        let hears = hears.into_iter().collect::<BTreeSet<_>>();
        for heard in &hears {
            self.check_agent(heard)?;
        }
        self.permissions.insert(agent.clone(), hears);
        Ok(())
    }

    /// Permits `agent` to hear `heard`, in addition to any existing permissions.
    pub fn permit(&mut self, agent: &AgentId, heard: &AgentId) -> Result<(), BuildError> {
        self.check_agent(agent)?;
        self.check_agent(heard)?;
        self.permissions
            .entry(agent.clone())
            .or_default()
            .insert(heard.clone());
        Ok(())
    }

    /// Binds `arguments` to the action named `action`.
    ///
    /// An action with no bound arguments is performed on an empty list of arguments.
    pub fn bind_arguments(&mut self, action: impl Into<String>, arguments: Vec<Value>) {
        self.arguments.insert(action.into(), arguments);
    }

    /// Associates `atoms` with `agent`, in addition to any existing association.
    pub fn associate(
        &mut self,
        agent: &AgentId,
        atoms: impl IntoIterator<Item = Atom>,
    ) -> Result<(), BuildError> {
        self.check_agent(agent)?;
        self.associations
            .entry(agent.clone())
            .or_default()
            .extend(atoms);
        Ok(())
    }

    pub fn permissions(&self) -> &BTreeMap<AgentId, BTreeSet<AgentId>> {
        &self.permissions
    }

    pub fn structures(&self) -> &BTreeMap<AgentId, KripkeStructure> {
        &self.structures
    }

    pub fn structure(&self, agent: &AgentId) -> Option<&KripkeStructure> {
        self.structures.get(agent)
    }

    pub fn associations(&self) -> &BTreeMap<AgentId, BTreeSet<Atom>> {
        &self.associations
    }

    pub fn arguments(&self, action: &str) -> &[Value] {
        match self.arguments.get(action) {
            Some(arguments) => arguments,
            None => &[],
        }
    }

    pub fn agent(&self, agent: &AgentId) -> Option<&Agent> {
        self.agents.get(agent)
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// Announces `formula` to the structure of `agent`, returning a count of the worlds removed.
    fn announce_to(&mut self, agent: &AgentId, formula: &Formula) -> Result<usize, err::ErrorKind> {
        let Some(structure) = self.structures.get_mut(agent) else {
            return Err(err::ErrorKind::Build(BuildError::UnknownAgent(agent.clone())));
        };
        let removed = structure.announce(formula)?.len();
        self.counters.announcements += 1;
        self.counters.worlds_removed += removed;
        Ok(removed)
    }

    /// Announces `formula` to the structure of every agent, with no distinguished real world.
    ///
    /// If some structure is left without a world, the announcement is made to every structure and a [NoConvergence](ModelError::NoConvergence) error is returned for the first such structure.
    pub fn announce(&mut self, formula: &Formula) -> Result<(), err::ErrorKind> {
        let ids = self.agents.keys().cloned().collect::<Vec<_>>();
        let mut emptied = None;
        for id in ids {
            self.announce_to(&id, formula)?;
            if emptied.is_none() && self.structures.get(&id).is_some_and(|s| s.world_count() == 0) {
                emptied = Some(id);
            }
        }
        match emptied {
            Some(agent) => Err(ModelError::NoConvergence { agent }.into()),
            None => Ok(()),
        }
    }

    /// Whether every structure has exactly one world.
    ///
    /// Fails if some structure has no worlds.
    pub fn is_finished(&self) -> Result<bool, ModelError> {
        let mut finished = true;
        for (agent, structure) in &self.structures {
            match structure.world_count() {
                0 => return Err(ModelError::NoConvergence { agent: agent.clone() }),
                1 => {}
                _ => finished = false,
            }
        }
        Ok(finished)
    }

    /// Whether every structure has exactly one world, given `world` is the real world.
    ///
    /// Fails if `world` has been removed from some structure.
    pub fn is_finished_at(&self, world: WorldKey) -> Result<bool, ModelError> {
        let mut finished = true;
        for (agent, structure) in &self.structures {
            if !structure.contains_world(world) {
                return Err(ModelError::InvalidModel {
                    agent: agent.clone(),
                    world,
                });
            }
            if structure.world_count() != 1 {
                finished = false;
            }
        }
        Ok(finished)
    }

    /// A high-level report on the structures of the interpreter.
    pub fn report(&self) -> Report {
        match self.is_finished() {
            Ok(true) => Report::Converged,
            Ok(false) => Report::Running,
            Err(_) => Report::Exhausted,
        }
    }
}
