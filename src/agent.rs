/*!
Agents --- an identity paired with a [program](AgentProgram).

An agent remembers the last selection it made, so that the selected action can be performed and explained after the selection.

```rust
# use epistemic_kbp::agent::Agent;
# use epistemic_kbp::actions::{library::Utterance, Value};
# use epistemic_kbp::program::AgentProgram;
# use epistemic_kbp::structures::{context::Context, formula::Formula, valuation::Valuation};
let mut program = AgentProgram::default();
program.push(Formula::atom("rain"), Utterance::shared("umbrella", "take an umbrella"));

let mut agent = Agent::new("alice", program);

let valuation = Valuation::from_pairs([("rain", true)]);
assert!(agent.select_action(&Context::from_valuation(&valuation)).is_ok());

assert_eq!(agent.perform(&[]), Ok(Value::from("take an umbrella")));
assert_eq!(agent.explain(16), Some(Formula::atom("rain")));
```
*/

use crate::{
    actions::{self, ActionRef, Value},
    misc::log::targets::{self},
    program::{AgentProgram, Selection},
    structures::{agent_id::AgentId, context::Context, formula::Formula},
    types::err::{ActionError, EvaluationError},
};

/// An agent.
#[derive(Clone)]
pub struct Agent {
    id: AgentId,
    program: AgentProgram,

    /// The last selection made, if any.
    last_selection: Option<Selection>,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>, program: AgentProgram) -> Self {
        Agent {
            id: id.into(),
            program,
            last_selection: None,
        }
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn program(&self) -> &AgentProgram {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut AgentProgram {
        &mut self.program
    }

    /// Selects an action on `context`, and remembers the selection.
    ///
    /// The selection is cleared if no action is selected, or if evaluation fails.
    pub fn select_action(&mut self, context: &Context) -> Result<Option<ActionRef>, EvaluationError> {
        self.last_selection = None;
        let selection = self.program.select(context)?;
        match &selection {
            Some(selected) => {
                log::trace!(target: targets::PROGRAM, "{} selected {}", self.id, selected.action.name())
            }
            None => log::trace!(target: targets::PROGRAM, "{} selected nothing", self.id),
        }
        self.last_selection = selection;
        Ok(self.selected_action().cloned())
    }

    pub fn last_selection(&self) -> Option<&Selection> {
        self.last_selection.as_ref()
    }

    pub fn selected_action(&self) -> Option<&ActionRef> {
        self.last_selection.as_ref().map(|selection| &selection.action)
    }

    /// Performs the last selected action on `arguments`.
    pub fn perform(&self, arguments: &[Value]) -> Result<Value, ActionError> {
        match self.selected_action() {
            Some(action) => actions::invoke(action, arguments),
            None => Err(ActionError::NoSelection),
        }
    }

    /// The condition under which the last selected action is selected, normalised with at most `limit` passes.
    pub fn explain(&self, limit: usize) -> Option<Formula> {
        let action = self.selected_action()?;
        self.program.explain(action.name(), limit)
    }
}
