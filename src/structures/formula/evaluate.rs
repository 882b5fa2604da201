//! Evaluation of a formula against a context.
//!
//! The propositional connectives are evaluated directly against the valuation of the context.
//! Each modal operator quantifies over worlds of the structure of the context:
//!
//! | Operator | True at *w* iff … |
//! |---|---|
//! | K[a] φ | φ holds at every world *a* relates to *w* |
//! | M[a] φ | φ holds at some world *a* relates to *w* |
//! | E[G] φ | K[a] φ holds at *w*, for every *a* in G |
//! | C[G] φ | φ holds at every world reachable from *w* in one or more steps of the relations of G |
//!
//! As a consequence, knowledge holds vacuously when an agent relates a world to no world, though this does not happen on a reflexive structure.

use std::collections::BTreeSet;

use crate::{
    kripke::{KripkeStructure, WorldKey},
    structures::{agent_id::AgentId, context::Context},
    types::err::EvaluationError,
};

use super::Formula;

impl Formula {
    /// Whether the formula is true on the context.
    ///
    /// Errs if the formula contains a modal operator and the context has no pointed world.
    pub fn evaluate(&self, context: &Context) -> Result<bool, EvaluationError> {
        match self {
            Formula::Atom(atom) => Ok(context.valuation().value_of(atom)),

            Formula::Not(inner) => Ok(!inner.evaluate(context)?),

            Formula::And(operands) => {
                for operand in operands {
                    if !operand.evaluate(context)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Formula::Or(operands) => {
                for operand in operands {
                    if operand.evaluate(context)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Formula::Implication(left, right) => {
                Ok(!left.evaluate(context)? || right.evaluate(context)?)
            }

            Formula::Equivalence(left, right) => {
                Ok(left.evaluate(context)? == right.evaluate(context)?)
            }

            Formula::AgentKnowledge(agent, inner) => {
                let (world, structure) = pointed(context)?;
                knows(structure, world, agent, inner)
            }

            Formula::Diamond(agent, inner) => {
                let (world, structure) = pointed(context)?;
                for successor in structure.accessible(world, agent) {
                    if inner.evaluate(&Context::pointed(structure, successor)?)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Formula::GroupKnowledge(group, inner) => {
                let (world, structure) = pointed(context)?;
                for agent in group {
                    if !knows(structure, world, agent, inner)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Formula::CommonKnowledge(group, inner) => {
                let (world, structure) = pointed(context)?;
                for reachable in group_reachable(structure, world, group) {
                    if !inner.evaluate(&Context::pointed(structure, reachable)?)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

fn pointed<'a>(
    context: &Context<'a>,
) -> Result<(WorldKey, &'a KripkeStructure), EvaluationError> {
    context
        .pointed_world()
        .ok_or(EvaluationError::UnpointedModal)
}

/// Whether `formula` holds at every world `agent` relates to `world`.
fn knows(
    structure: &KripkeStructure,
    world: WorldKey,
    agent: &AgentId,
    formula: &Formula,
) -> Result<bool, EvaluationError> {
    for successor in structure.accessible(world, agent) {
        if !formula.evaluate(&Context::pointed(structure, successor)?)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The worlds reachable from `world` in one or more steps of the union of the relations of `group`.
fn group_reachable(
    structure: &KripkeStructure,
    world: WorldKey,
    group: &BTreeSet<AgentId>,
) -> BTreeSet<WorldKey> {
    let mut reached = BTreeSet::default();
    let mut frontier = vec![world];

    while let Some(current) = frontier.pop() {
        for agent in group {
            for successor in structure.accessible(current, agent) {
                if reached.insert(successor) {
                    frontier.push(successor);
                }
            }
        }
    }

    reached
}
