//! Reverse engineering of a selected action.
//!
//! An action is selected by the rule at position *i* exactly when the condition of the rule is true and the conditions of every earlier rule are false.
//! So, the condition under which an action is selected is the disjunction, over every position of the action, of:
//!
//! > ¬c₀ ∧ … ∧ ¬cᵢ₋₁ ∧ cᵢ
//!
//! The default is read as a rule at the end of the program whose condition is true, and so contributes the conjunction of the negation of every condition.
//!
//! The result is normalised, and so explaining an action selected by the first rule of a program returns the (simplified) condition of the rule.
//!
//! ```rust
//! # use epistemic_kbp::program::AgentProgram;
//! # use epistemic_kbp::actions::library::Utterance;
//! # use epistemic_kbp::structures::formula::Formula;
//! let p = Formula::atom("p");
//! let q = Formula::atom("q");
//!
//! let mut program = AgentProgram::default();
//! program.push(p.clone(), Utterance::shared("first", ""));
//! program.push(q.clone(), Utterance::shared("second", ""));
//! program.set_default(Utterance::shared("otherwise", ""));
//!
//! assert_eq!(program.explain("first", 16), Some(p.clone()));
//! assert_eq!(
//!     program.explain("second", 16),
//!     Some(Formula::and([Formula::not(p.clone()), q.clone()]))
//! );
//! assert_eq!(
//!     program.explain("otherwise", 16),
//!     Some(Formula::and([Formula::not(p), Formula::not(q)]))
//! );
//! assert_eq!(program.explain("absent", 16), None);
//! ```

use std::iter::once;

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
};

use super::AgentProgram;

impl AgentProgram {
    /// The condition under which the action named `action` is selected, or none if the program never selects the action.
    ///
    /// The condition is normalised with at most `limit` passes of simplification.
    pub fn explain(&self, action: &str, limit: usize) -> Option<Formula> {
        let mut cases = Vec::default();
        let mut excluded = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            if rule.action.name() == action {
                let case = excluded.iter().cloned().chain(once(rule.condition.clone()));
                cases.push(Formula::conjunction(case));
            }
            excluded.push(rule.condition.negation());
        }

        if self
            .default
            .as_ref()
            .is_some_and(|default| default.name() == action)
        {
            cases.push(Formula::conjunction(excluded));
        }

        if cases.is_empty() {
            log::trace!(target: targets::EXPLANATION, "No rule selects {action}");
            return None;
        }

        let explanation = Formula::disjunction(cases).normalise(limit);
        log::debug!(target: targets::EXPLANATION, "{action} explained by {explanation}");
        Some(explanation)
    }
}
