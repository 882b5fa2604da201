//! Simplification and negation of formulas.
//!
//! [simplify](Formula::simplify) makes a single pass over a formula:
//! - Conjunctions nested directly within a conjunction are merged into the outer conjunction (and likewise for disjunctions).
//! - Negations are pushed inward through the propositional connectives, until they rest on an atom or a modal operator.
//!
//! Merging happens before operands are simplified, and so a pass may produce a new nested conjunction (or disjunction) which only a further pass merges.
//! [normalise](Formula::normalise) repeats passes until the formula no longer changes.
//!
//! ```rust
//! # use epistemic_kbp::structures::formula::Formula;
//! let p = Formula::atom("p");
//! let q = Formula::atom("q");
//! let r = Formula::atom("r");
//!
//! let f = Formula::and([p.clone(), Formula::not(Formula::or([q.clone(), r.clone()]))]);
//! let once = f.simplify();
//! let twice = once.simplify();
//!
//! assert_ne!(once, twice);
//! assert_eq!(
//!     twice,
//!     Formula::and([p, Formula::not(q), Formula::not(r)])
//! );
//! assert_eq!(twice.simplify(), twice);
//! ```

use std::collections::BTreeSet;

use crate::misc::log::targets::{self};

use super::Formula;

impl Formula {
    /// A single pass of simplification.
    pub fn simplify(&self) -> Formula {
        match self {
            Formula::Atom(_) => self.clone(),

            Formula::Not(inner) => inner.negation(),

            Formula::And(operands) => {
                let mut flat = Vec::with_capacity(operands.len());
                flatten(operands, &mut flat, &|formula| match formula {
                    Formula::And(nested) => Some(nested),
                    _ => None,
                });
                Formula::And(flat.into_iter().map(Formula::simplify).collect())
            }

            Formula::Or(operands) => {
                let mut flat = Vec::with_capacity(operands.len());
                flatten(operands, &mut flat, &|formula| match formula {
                    Formula::Or(nested) => Some(nested),
                    _ => None,
                });
                Formula::Or(flat.into_iter().map(Formula::simplify).collect())
            }

            Formula::Implication(left, right) => {
                Formula::Implication(Box::new(left.simplify()), Box::new(right.simplify()))
            }

            Formula::Equivalence(left, right) => {
                Formula::Equivalence(Box::new(left.simplify()), Box::new(right.simplify()))
            }

            Formula::AgentKnowledge(agent, inner) => {
                Formula::AgentKnowledge(agent.clone(), Box::new(inner.simplify()))
            }

            Formula::Diamond(agent, inner) => {
                Formula::Diamond(agent.clone(), Box::new(inner.simplify()))
            }

            Formula::GroupKnowledge(group, inner) => {
                Formula::GroupKnowledge(group.clone(), Box::new(inner.simplify()))
            }

            Formula::CommonKnowledge(group, inner) => {
                Formula::CommonKnowledge(group.clone(), Box::new(inner.simplify()))
            }
        }
    }

    /// The negation of the formula, in simplified form.
    ///
    /// - The negation of an atom is the negated atom.
    /// - A double negation is removed.
    /// - Negation passes through conjunction, disjunction, implication, and equivalence.
    /// - The negation of a diamond is knowledge of the negation.
    /// - The negation of (group, or common) knowledge is the negated knowledge, as knowledge has no dual in the language other than the diamond.
    pub fn negation(&self) -> Formula {
        match self {
            Formula::Atom(_) => Formula::Not(Box::new(self.clone())),

            Formula::Not(inner) => inner.simplify(),

            Formula::And(operands) => {
                Formula::Or(operands.iter().map(Formula::negation).collect()).simplify()
            }

            Formula::Or(operands) => {
                Formula::And(operands.iter().map(Formula::negation).collect()).simplify()
            }

            Formula::Implication(left, right) => {
                Formula::and([left.simplify(), right.negation()]).simplify()
            }

            Formula::Equivalence(left, right) => Formula::or([
                Formula::and([left.simplify(), right.negation()]),
                Formula::and([left.negation(), right.simplify()]),
            ])
            .simplify(),

            Formula::AgentKnowledge(..)
            | Formula::GroupKnowledge(..)
            | Formula::CommonKnowledge(..) => Formula::Not(Box::new(self.simplify())),

            Formula::Diamond(agent, inner) => {
                Formula::AgentKnowledge(agent.clone(), Box::new(inner.negation()))
            }
        }
    }

    /// Repeated simplification, until a pass makes no change or `limit` passes have been made.
    pub fn normalise(&self, limit: usize) -> Formula {
        let mut current = self.simplify();
        for pass in 1..limit {
            let next = current.simplify();
            if next == current {
                log::trace!(target: targets::FORMULA, "Fixed point after {pass} passes: {current}");
                return current;
            }
            current = next;
        }
        log::debug!(target: targets::FORMULA, "Simplification limit of {limit} reached: {current}");
        current
    }
}

/// Pushes the operands of `operands` to `flat`, replacing any operand `nested` returns some set for with the (flattened) members of that set.
fn flatten<'a>(
    operands: &'a BTreeSet<Formula>,
    flat: &mut Vec<&'a Formula>,
    nested: &dyn Fn(&'a Formula) -> Option<&'a BTreeSet<Formula>>,
) {
    for operand in operands {
        match nested(operand) {
            Some(inner) => flatten(inner, flat, nested),
            None => flat.push(operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Formula {
        Formula::atom("p")
    }

    fn q() -> Formula {
        Formula::atom("q")
    }

    #[test]
    fn double_negation() {
        let f = Formula::implies(p(), Formula::knows("a", q()));
        assert_eq!(Formula::not(Formula::not(f.clone())).simplify(), f.simplify());
    }

    #[test]
    fn nested_flatten() {
        let f = Formula::and([Formula::and([p(), Formula::and([q()])]), p()]);
        assert_eq!(f.simplify(), Formula::and([p(), q()]));
    }

    #[test]
    fn implication_negation() {
        let f = Formula::implies(p(), q());
        assert_eq!(f.negation(), Formula::and([p(), Formula::not(q())]));
    }

    #[test]
    fn equivalence_negation() {
        let f = Formula::iff(p(), q());
        let expected = Formula::or([
            Formula::and([p(), Formula::not(q())]),
            Formula::and([Formula::not(p()), q()]),
        ]);
        assert_eq!(f.negation(), expected);
    }

    #[test]
    fn modal_negation() {
        let knows = Formula::knows("a", p());
        assert_eq!(knows.negation(), Formula::not(knows.clone()));

        let possible = Formula::possible("a", p());
        assert_eq!(possible.negation(), Formula::knows("a", Formula::not(p())));

        let group = Formula::everybody_knows(["a", "b"], Formula::not(Formula::not(p())));
        assert_eq!(
            group.negation(),
            Formula::not(Formula::everybody_knows(["a", "b"], p()))
        );
    }

    #[test]
    fn irreducible_negations() {
        let f = Formula::not(p());
        assert_eq!(f.simplify(), f);

        let g = Formula::not(Formula::knows("a", p()));
        assert_eq!(g.simplify(), g);
    }

    #[test]
    fn normalise_limit() {
        let f = Formula::and([p(), Formula::not(Formula::or([q(), Formula::not(p())]))]);
        assert_eq!(f.normalise(1), f.simplify());
        assert_eq!(f.normalise(16), Formula::and([p(), Formula::not(q())]));
    }
}
