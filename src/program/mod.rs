/*!
Agent programs --- ordered lists of (condition, action) rules.

A program is read top to bottom, and the first rule whose condition is true on a context selects its action.
A program may end with a default action, selected whenever no rule matches.
If there is no default and no rule matches, no action is selected.

Conditions are unique within a program: pushing a rule with the condition of some existing rule moves the rule, rather than duplicating the condition.
Order is significant, and encodes the priority of the rules.

From a selected action a program can be read in reverse, to recover the condition under which the action would have been selected.
See [explain](AgentProgram::explain).

```rust
# use epistemic_kbp::program::AgentProgram;
# use epistemic_kbp::actions::library::Utterance;
# use epistemic_kbp::structures::{context::Context, formula::Formula, valuation::Valuation};
let mut program = AgentProgram::default();
program.push(Formula::atom("p"), Utterance::shared("yes", "p"));
program.set_default(Utterance::shared("no", "not p"));

let valuation = Valuation::from_pairs([("p", false)]);
let selection = program.select(&Context::from_valuation(&valuation)).unwrap();
assert_eq!(selection.map(|s| s.action.name().to_owned()), Some("no".to_owned()));
```
*/

pub mod explain;

use crate::{
    actions::ActionRef,
    misc::log::targets::{self},
    structures::{context::Context, formula::Formula},
    types::err::{EvaluationError, ProgramError},
};

/// A condition paired with an action.
#[derive(Clone)]
pub struct Rule {
    pub condition: Formula,
    pub action: ActionRef,
}

/// Where in a program a selection was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// The rule at the given index.
    Rule(usize),

    /// The default action.
    Default,
}

/// A selected action, and where the selection was made.
#[derive(Clone)]
pub struct Selection {
    pub action: ActionRef,
    pub position: Position,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("action", &self.action.name())
            .field("position", &self.position)
            .finish()
    }
}

/// An agent program.
#[derive(Clone, Default)]
pub struct AgentProgram {
    /// The rules of the program, in order of priority.
    rules: Vec<Rule>,

    /// The action selected if no rule matches.
    default: Option<ActionRef>,
}

impl AgentProgram {
    /// Appends a rule, after every other rule but before the default.
    ///
    /// If some rule has the same condition, that rule is removed first.
    pub fn push(&mut self, condition: Formula, action: ActionRef) {
        if let Some(index) = self.position_of(&condition) {
            log::trace!(target: targets::PROGRAM, "Relocating rule {index}: {condition}");
            self.rules.remove(index);
        }
        self.rules.push(Rule { condition, action });
    }

    /// Inserts a rule at `index`, shifting later rules down.
    ///
    /// If some rule has the same condition, that rule is removed first, and `index` is read after removal.
    pub fn insert(
        &mut self,
        index: usize,
        condition: Formula,
        action: ActionRef,
    ) -> Result<(), ProgramError> {
        let existing = self.position_of(&condition);
        let len = self.rules.len() - usize::from(existing.is_some());
        if index > len {
            return Err(ProgramError::IndexOutOfBounds { index, len });
        }
        if let Some(existing) = existing {
            self.rules.remove(existing);
        }
        self.rules.insert(index, Rule { condition, action });
        Ok(())
    }

    /// Removes the rule with the given condition, returning its action.
    pub fn remove(&mut self, condition: &Formula) -> Result<ActionRef, ProgramError> {
        match self.position_of(condition) {
            Some(index) => Ok(self.rules.remove(index).action),
            None => Err(ProgramError::MissingRule),
        }
    }

    /// Sets the default action, returning the previous default, if any.
    pub fn set_default(&mut self, action: ActionRef) -> Option<ActionRef> {
        self.default.replace(action)
    }

    /// Removes the default action, returning it, if any.
    pub fn clear_default(&mut self) -> Option<ActionRef> {
        self.default.take()
    }

    pub fn default_action(&self) -> Option<&ActionRef> {
        self.default.as_ref()
    }

    /// The rules of the program, in order of priority, without the default.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The index of the rule with the given condition.
    pub fn position_of(&self, condition: &Formula) -> Option<usize> {
        self.rules.iter().position(|rule| &rule.condition == condition)
    }

    /// A count of rules, including the default.
    pub fn len(&self) -> usize {
        self.rules.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first action whose condition is true on `context`, or else the default, if any.
    pub fn select(&self, context: &Context) -> Result<Option<Selection>, EvaluationError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.condition.evaluate(context)? {
                log::trace!(target: targets::PROGRAM, "Rule {index} matched: {}", rule.condition);
                return Ok(Some(Selection {
                    action: rule.action.clone(),
                    position: Position::Rule(index),
                }));
            }
        }

        Ok(self.default.as_ref().map(|action| Selection {
            action: action.clone(),
            position: Position::Default,
        }))
    }
}

impl std::fmt::Display for AgentProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{} => {}", rule.condition, rule.action.name())?;
        }
        if let Some(action) = &self.default {
            writeln!(f, "_ => {}", action.name())?;
        }
        Ok(())
    }
}
