/*!
A round of the protocol.

A round, given an announced formula and the real (pointed) world, proceeds as follows:

1. The formula is announced to the structure of every agent.
2. Each agent observes the atoms associated with the agent at the pointed world.
   If the agent has more than one world accessible from the pointed world, the observation is that the agent does not know the conjunction of those literals.
3. Each agent selects an action, on the pointed world of the private structure of the agent.
4. Each agent explains the selected action, by reverse engineering the program of the agent.
5. Each agent hears the explanations of every other agent in the permission set of the agent, and the explanations heard are announced to the structure of the agent.
   An agent hears its own explanation only if [self_hearing](crate::config::Config::self_hearing) is set.
6. Each agent performs the selected action on the arguments bound to the action.

Steps two through five are made only after the first announcement has been made to every structure.
The real world is required to be in every structure after the first announcement, and again after the explanations heard are announced.

The observation of step two is recorded in the outcome of the agent, and is not otherwise used.
Selection evaluates the program of the agent on the private structure of the agent, pointed at the real world, and knowledge conditions are decided by that structure.
Actions are performed last, and so an action which fails to perform leaves every structure as it would be otherwise.
The failure is noted in the outcome of the agent.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    actions::{self},
    config::Redistribution,
    kripke::{KripkeStructure, WorldKey},
    misc::log::targets::{self},
    reports::{AgentOutcome, RoundReport},
    structures::{agent_id::AgentId, atom::Atom, context::Context, formula::Formula},
    types::err::{self, BuildError, EvaluationError, ModelError},
};

use super::Interpreter;

/// The observation of `agent` at `world` of `structure`, built from the literals of `atoms` at `world`.
pub fn observation(
    structure: &KripkeStructure,
    world: WorldKey,
    agent: &AgentId,
    atoms: &BTreeSet<Atom>,
) -> Result<Formula, EvaluationError> {
    let Some(pointed) = structure.world(world) else {
        return Err(EvaluationError::MissingWorld(world));
    };

    let literals = atoms.iter().map(|atom| {
        let formula = Formula::atom(atom.clone());
        match pointed.valuation().value_of(atom) {
            true => formula,
            false => Formula::not(formula),
        }
    });
    let fact = Formula::conjunction(literals);

    match structure.worlds_accessible_from(world, agent).len() > 1 {
        true => Ok(Formula::not(Formula::knows(agent.clone(), fact))),
        false => Ok(fact),
    }
}

impl Interpreter {
    /// Runs a round of the protocol, announcing `formula` with `world` as the real world.
    ///
    /// Fails with an [InvalidModel](ModelError::InvalidModel) error if the announcement, or some explanation heard, removes `world` from the structure of some agent.
    /// On failure no action is performed.
    pub fn public_announcement(
        &mut self,
        formula: &Formula,
        world: WorldKey,
    ) -> Result<RoundReport, err::ErrorKind> {
        let ids = self.agents.keys().cloned().collect::<Vec<_>>();
        log::info!(target: targets::INTERPRETER, "Round {}: {formula}", self.counters.rounds + 1);

        for id in &ids {
            self.announce_to(id, formula)?;
        }

        self.require_world(world)?;

        let limit = self.config.simplification_limit.value;
        let mut observations = BTreeMap::default();
        let mut explanations = BTreeMap::default();

        for id in &ids {
            let (Some(structure), Some(agent)) = (self.structures.get(id), self.agents.get_mut(id))
            else {
                return Err(BuildError::UnknownAgent(id.clone()).into());
            };

            let atoms = self.associations.get(id).cloned().unwrap_or_default();
            let observed = observation(structure, world, id, &atoms)?;
            log::debug!(target: targets::INTERPRETER, "{id} observes {observed}");
            observations.insert(id.clone(), observed);

            agent.select_action(&Context::pointed(structure, world)?)?;
            if let Some(explanation) = agent.explain(limit) {
                log::debug!(target: targets::EXPLANATION, "{id} explained by {explanation}");
                explanations.insert(id.clone(), explanation);
            }
        }

        let self_hearing = self.config.self_hearing.value;
        for id in &ids {
            let heard = self
                .permissions
                .get(id)
                .into_iter()
                .flatten()
                .filter(|peer| self_hearing || *peer != id)
                .filter_map(|peer| explanations.get(peer))
                .cloned()
                .collect::<Vec<_>>();

            if heard.is_empty() {
                continue;
            }

            match self.config.redistribution.value {
                Redistribution::Conjoined => {
                    self.announce_to(id, &Formula::conjunction(heard))?;
                }
                Redistribution::Successive => {
                    for explanation in &heard {
                        self.announce_to(id, explanation)?;
                    }
                }
            }
        }

        self.require_world(world)?;

        let mut outcomes = BTreeMap::default();
        for (id, observation) in observations {
            let Some(agent) = self.agents.get(&id) else {
                continue;
            };

            let result = agent
                .selected_action()
                .map(|action| actions::invoke(action, self.arguments(action.name())));

            if let Some(Err(error)) = &result {
                log::info!(target: targets::ACTION, "{id} failed to perform: {error:?}");
            }

            let outcome = AgentOutcome {
                observation,
                action: agent.selected_action().map(|action| action.name().to_owned()),
                explanation: explanations.remove(&id),
                result,
            };
            outcomes.insert(id, outcome);
        }

        self.counters.rounds += 1;

        Ok(RoundReport {
            round: self.counters.rounds,
            outcomes,
            worlds: self
                .structures
                .iter()
                .map(|(id, structure)| (id.clone(), structure.world_count()))
                .collect(),
        })
    }

    /// Fails with an [InvalidModel](ModelError::InvalidModel) error if `world` is missing from the structure of some agent.
    fn require_world(&self, world: WorldKey) -> Result<(), ModelError> {
        match self
            .structures
            .iter()
            .find(|(_, structure)| !structure.contains_world(world))
        {
            Some((agent, _)) => Err(ModelError::InvalidModel {
                agent: agent.clone(),
                world,
            }),
            None => Ok(()),
        }
    }
}
