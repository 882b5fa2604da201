/*!
Formulas of multi-agent epistemic logic.

A formula is a tree built from [atoms](Atom), the propositional connectives, and modal operators indexed by [agents](AgentId):

- [AgentKnowledge](Formula::AgentKnowledge) --- 'the agent knows …', true at a world when the inner formula is true at every world the agent cannot distinguish from it.
- [Diamond](Formula::Diamond) --- 'the agent considers … possible', the dual of knowledge.
- [GroupKnowledge](Formula::GroupKnowledge) --- 'everybody in the group knows …'.
- [CommonKnowledge](Formula::CommonKnowledge) --- 'it is common knowledge in the group that …', the limit of iterated group knowledge.

Conjunctions and disjunctions are sets of operands, and so are unordered and free of duplicates.
The empty conjunction is a tautology (⊤) and the empty disjunction a contradiction (⊥).

Formulas are immutable, and the transformations [simplify](Formula::simplify) and [negation](Formula::negation) return a fresh formula.

```rust
# use epistemic_kbp::structures::formula::Formula;
let p = Formula::atom("p");
let q = Formula::atom("q");

assert_eq!(Formula::and([p.clone(), q.clone()]), Formula::and([q.clone(), p.clone()]));
assert_eq!(Formula::and([p.clone(), p.clone()]).simplify(), Formula::and([p.clone()]));

let a_knows_p = Formula::knows("a", p.clone());
assert!(Formula::not(a_knows_p.clone()).contains(&p));
assert_eq!(format!("{}", Formula::not(a_knows_p)), "¬K[a] p");
```
*/

mod evaluate;
mod simplify;

use std::collections::BTreeSet;

use super::{agent_id::AgentId, atom::Atom};

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    /// A propositional symbol.
    Atom(Atom),

    /// Negation.
    Not(Box<Formula>),

    /// Conjunction of a set of operands.
    And(BTreeSet<Formula>),

    /// Disjunction of a set of operands.
    Or(BTreeSet<Formula>),

    /// Material implication, antecedent first.
    Implication(Box<Formula>, Box<Formula>),

    /// Material equivalence.
    Equivalence(Box<Formula>, Box<Formula>),

    /// The agent knows the formula, aka. 'box'.
    AgentKnowledge(AgentId, Box<Formula>),

    /// The agent considers the formula possible.
    Diamond(AgentId, Box<Formula>),

    /// Every agent of the group knows the formula.
    GroupKnowledge(BTreeSet<AgentId>, Box<Formula>),

    /// The formula is common knowledge among the group.
    CommonKnowledge(BTreeSet<AgentId>, Box<Formula>),
}

#[allow(clippy::should_implement_trait)]
impl Formula {
    pub fn atom(atom: impl Into<Atom>) -> Self {
        Formula::Atom(atom.into())
    }

    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    pub fn and(operands: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(operands.into_iter().collect())
    }

    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implication(Box::new(antecedent), Box::new(consequent))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Equivalence(Box::new(left), Box::new(right))
    }

    pub fn knows(agent: impl Into<AgentId>, formula: Formula) -> Self {
        Formula::AgentKnowledge(agent.into(), Box::new(formula))
    }

    pub fn possible(agent: impl Into<AgentId>, formula: Formula) -> Self {
        Formula::Diamond(agent.into(), Box::new(formula))
    }

    pub fn everybody_knows<A: Into<AgentId>>(
        group: impl IntoIterator<Item = A>,
        formula: Formula,
    ) -> Self {
        Formula::GroupKnowledge(group.into_iter().map(Into::into).collect(), Box::new(formula))
    }

    pub fn common_knowledge<A: Into<AgentId>>(
        group: impl IntoIterator<Item = A>,
        formula: Formula,
    ) -> Self {
        Formula::CommonKnowledge(group.into_iter().map(Into::into).collect(), Box::new(formula))
    }

    /// The empty conjunction, true on every context.
    pub fn top() -> Self {
        Formula::And(BTreeSet::default())
    }

    /// The empty disjunction, false on every context.
    pub fn bottom() -> Self {
        Formula::Or(BTreeSet::default())
    }

    /// The conjunction of the operands, or the operand itself if there is exactly one (distinct) operand.
    pub fn conjunction(operands: impl IntoIterator<Item = Formula>) -> Self {
        let mut operands = operands.into_iter().collect::<BTreeSet<_>>();
        match operands.len() {
            1 => operands.pop_first().unwrap_or_else(Formula::top),
            _ => Formula::And(operands),
        }
    }

    /// The disjunction of the operands, or the operand itself if there is exactly one (distinct) operand.
    pub fn disjunction(operands: impl IntoIterator<Item = Formula>) -> Self {
        let mut operands = operands.into_iter().collect::<BTreeSet<_>>();
        match operands.len() {
            1 => operands.pop_first().unwrap_or_else(Formula::bottom),
            _ => Formula::Or(operands),
        }
    }

    /// Whether `sub` is the formula, or occurs somewhere within the formula.
    ///
    /// A structural check, and so equivalent but distinct formulas do not contain one another.
    pub fn contains(&self, sub: &Formula) -> bool {
        if self == sub {
            return true;
        }
        match self {
            Formula::Atom(_) => false,

            Formula::Not(inner)
            | Formula::AgentKnowledge(_, inner)
            | Formula::Diamond(_, inner)
            | Formula::GroupKnowledge(_, inner)
            | Formula::CommonKnowledge(_, inner) => inner.contains(sub),

            Formula::And(operands) | Formula::Or(operands) => {
                operands.iter().any(|operand| operand.contains(sub))
            }

            Formula::Implication(left, right) | Formula::Equivalence(left, right) => {
                left.contains(sub) || right.contains(sub)
            }
        }
    }

    /// Whether the formula contains some modal operator.
    pub fn is_modal(&self) -> bool {
        match self {
            Formula::Atom(_) => false,

            Formula::Not(inner) => inner.is_modal(),

            Formula::And(operands) | Formula::Or(operands) => operands.iter().any(Formula::is_modal),

            Formula::Implication(left, right) | Formula::Equivalence(left, right) => {
                left.is_modal() || right.is_modal()
            }

            Formula::AgentKnowledge(..)
            | Formula::Diamond(..)
            | Formula::GroupKnowledge(..)
            | Formula::CommonKnowledge(..) => true,
        }
    }

    /// The atoms which occur in the formula.
    pub fn atoms(&self) -> BTreeSet<&Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'a>(&'a self, atoms: &mut BTreeSet<&'a Atom>) {
        match self {
            Formula::Atom(atom) => {
                atoms.insert(atom);
            }

            Formula::Not(inner)
            | Formula::AgentKnowledge(_, inner)
            | Formula::Diamond(_, inner)
            | Formula::GroupKnowledge(_, inner)
            | Formula::CommonKnowledge(_, inner) => inner.collect_atoms(atoms),

            Formula::And(operands) | Formula::Or(operands) => {
                for operand in operands {
                    operand.collect_atoms(atoms);
                }
            }

            Formula::Implication(left, right) | Formula::Equivalence(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Formula::Atom(atom)
    }
}

fn write_group(f: &mut std::fmt::Formatter<'_>, group: &BTreeSet<AgentId>) -> std::fmt::Result {
    let names = group.iter().map(AgentId::name).collect::<Vec<_>>();
    write!(f, "[{}]", names.join(","))
}

fn write_operands(
    f: &mut std::fmt::Formatter<'_>,
    operands: &BTreeSet<Formula>,
    connective: &str,
) -> std::fmt::Result {
    write!(f, "(")?;
    for (index, operand) in operands.iter().enumerate() {
        if index > 0 {
            write!(f, " {connective} ")?;
        }
        write!(f, "{operand}")?;
    }
    write!(f, ")")
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{atom}"),
            Formula::Not(inner) => write!(f, "¬{inner}"),

            Formula::And(operands) if operands.is_empty() => write!(f, "⊤"),
            Formula::And(operands) => write_operands(f, operands, "∧"),

            Formula::Or(operands) if operands.is_empty() => write!(f, "⊥"),
            Formula::Or(operands) => write_operands(f, operands, "∨"),

            Formula::Implication(left, right) => write!(f, "({left} → {right})"),
            Formula::Equivalence(left, right) => write!(f, "({left} ↔ {right})"),

            Formula::AgentKnowledge(agent, inner) => write!(f, "K[{agent}] {inner}"),
            Formula::Diamond(agent, inner) => write!(f, "M[{agent}] {inner}"),

            Formula::GroupKnowledge(group, inner) => {
                write!(f, "E")?;
                write_group(f, group)?;
                write!(f, " {inner}")
            }

            Formula::CommonKnowledge(group, inner) => {
                write!(f, "C")?;
                write_group(f, group)?;
                write!(f, " {inner}")
            }
        }
    }
}
