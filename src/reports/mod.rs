/*!
Reports from an interpreter.
*/

use std::collections::BTreeMap;

use crate::{
    actions::Value,
    structures::{agent_id::AgentId, formula::Formula},
    types::err::ActionError,
};

/// High-level reports regarding the state of an interpreter.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Some agent has a structure with more than one world.
    Running,

    /// Every agent has a structure with exactly one world.
    Converged,

    /// Some agent has a structure with no worlds.
    Exhausted,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Converged => write!(f, "Converged"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// What happened to a single agent during a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentOutcome {
    /// What the agent observed of the pointed world.
    pub observation: Formula,

    /// The name of the selected action, if any.
    pub action: Option<String>,

    /// The condition under which the selected action is selected.
    pub explanation: Option<Formula>,

    /// The result of performing the selected action, if some action was selected.
    pub result: Option<Result<Value, ActionError>>,
}

/// A report on a round of the interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The count of the round, from one.
    pub round: usize,

    /// The outcome of the round for each agent.
    pub outcomes: BTreeMap<AgentId, AgentOutcome>,

    /// A count of the worlds of each structure at the end of the round.
    pub worlds: BTreeMap<AgentId, usize>,
}

impl RoundReport {
    /// The result of the action performed by each agent, if any.
    pub fn results(&self) -> BTreeMap<&AgentId, Option<&Result<Value, ActionError>>> {
        self.outcomes
            .iter()
            .map(|(agent, outcome)| (agent, outcome.result.as_ref()))
            .collect()
    }
}
