/*!
The muddy children.

Some number of children play outside, and some get mud on their foreheads.
Each child sees the forehead of every other child, but not their own.
The father announces at least one child is muddy, and then repeatedly asks whether any child knows whether they are muddy.

With `k` muddy children who each hear every answer, the muddy children know they are muddy after `k` rounds.

# Representation

- Atom `mi` for each child `i`, true iff child `i` is muddy.
- A world for every valuation of the atoms.
- Child `i` observes every atom except `mi`, so two worlds are indistinguishable to child `i` iff they differ at most on `mi`.
- The program of child `i` is: if `K[i] mi` then say "muddy", if `K[i] ¬mi` then say "clean", otherwise say "unknown".
- Child `i` is associated with `mi`.

Who hears whom is set by a [Hearing] policy.
A child hears their own answer as they give it, and so with any policy other than [Hearing::None] the scenario sets [self_hearing](Config::self_hearing).
The structures of the children then receive the same announcements, and the answers heard act as public announcements.

```rust
# use std::collections::BTreeSet;
# use epistemic_kbp::config::Config;
# use epistemic_kbp::scenarios::muddy::{muddy_children, Hearing};
let mut scenario = muddy_children(3, &BTreeSet::from([1, 3]), Hearing::All, Config::default()).unwrap();

let reports = scenario.run().unwrap();
assert!(scenario.is_finished().unwrap());
assert_eq!(reports.len(), 2);
```
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    actions::library::Utterance,
    agent::Agent,
    config::Config,
    interpreter::Interpreter,
    kripke::{
        builder::{all_valuations, from_observability},
        WorldKey,
    },
    misc::log::targets::{self},
    program::AgentProgram,
    reports::RoundReport,
    structures::{agent_id::AgentId, atom::Atom, formula::Formula},
    types::err::{self, BuildError},
};

/// The name of the action taken by a child who knows they are muddy.
pub const MUDDY: &str = "muddy";

/// The name of the action taken by a child who knows they are clean.
pub const CLEAN: &str = "clean";

/// The name of the action taken by a child who does not know.
pub const UNKNOWN: &str = "unknown";

/// Which children hear the answer of which children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Hearing {
    /// Every child hears every child, themselves included.
    #[default]
    All,

    /// No child hears any answer.
    None,

    /// Each child hears themselves and the next child, with the last child followed by the first.
    Ring,
}

impl std::fmt::Display for Hearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::None => write!(f, "none"),
            Self::Ring => write!(f, "ring"),
        }
    }
}

/// An instance of the muddy children.
pub struct MuddyChildren {
    pub interpreter: Interpreter,

    /// The real world, where exactly the muddy children are muddy.
    pub actual: WorldKey,

    /// The children, in order.
    pub children: Vec<AgentId>,

    /// The announcement of the father, that some child is muddy.
    pub father: Formula,
}

/// The atom for child `index`, counting from one.
pub fn muddy_atom(index: usize) -> Atom {
    Atom::from(format!("m{index}"))
}

/// The identity of child `index`, counting from one.
pub fn child(index: usize) -> AgentId {
    AgentId::from(format!("child{index}"))
}

fn program(id: &AgentId, atom: &Atom) -> AgentProgram {
    let mudded = Formula::atom(atom.clone());

    let mut program = AgentProgram::default();
    program.push(
        Formula::knows(id.clone(), mudded.clone()),
        Utterance::shared(MUDDY, "I am muddy"),
    );
    program.push(
        Formula::knows(id.clone(), Formula::not(mudded)),
        Utterance::shared(CLEAN, "I am clean"),
    );
    program.set_default(Utterance::shared(UNKNOWN, "I don't know"));
    program
}

/// Sets up `count` children, where the children indexed (from one) by `muddy` are muddy.
///
/// Fails if there are no children, or some index does not name a child.
pub fn muddy_children(
    count: usize,
    muddy: &BTreeSet<usize>,
    hearing: Hearing,
    mut config: Config,
) -> Result<MuddyChildren, err::ErrorKind> {
    if count == 0 {
        return Err(BuildError::NoAgents.into());
    }
    if let Some(index) = muddy.iter().find(|index| **index == 0 || **index > count) {
        return Err(BuildError::UnknownAgent(child(*index)).into());
    }

    let atoms = (1..=count).map(muddy_atom).collect::<Vec<_>>();
    let children = (1..=count).map(child).collect::<Vec<_>>();

    let observations = children
        .iter()
        .zip(&atoms)
        .map(|(id, own)| {
            let seen = atoms.iter().filter(|atom| *atom != own).cloned().collect::<BTreeSet<_>>();
            (id.clone(), seen)
        })
        .collect::<BTreeMap<_, _>>();

    let (base, keys) = from_observability(all_valuations(&atoms), &observations);

    let actual_name = (1..=count).fold(String::from("w"), |mut name, index| {
        name.push(if muddy.contains(&index) { '1' } else { '0' });
        name
    });
    let actual = base.find_world(&actual_name)?;
    log::info!(target: targets::INTERPRETER,
        "{count} children on {} worlds, actual world {actual_name}", keys.len());

    let agents = children
        .iter()
        .zip(&atoms)
        .map(|(id, atom)| Agent::new(id.clone(), program(id, atom)))
        .collect();

    if hearing != Hearing::None {
        config.self_hearing.value = true;
    }
    let mut interpreter = Interpreter::from_config(config, &base, agents)?;

    for (index, (id, atom)) in children.iter().zip(&atoms).enumerate() {
        interpreter.associate(id, [atom.clone()])?;

        let hears = match hearing {
            Hearing::All => children.clone(),
            Hearing::None => Vec::default(),
            Hearing::Ring => vec![id.clone(), children[(index + 1) % count].clone()],
        };
        interpreter.set_permissions(id, hears)?;
    }

    Ok(MuddyChildren {
        interpreter,
        actual,
        father: Formula::disjunction(atoms.iter().cloned().map(Formula::atom)),
        children,
    })
}

impl MuddyChildren {
    /// The formula announced in the next round.
    ///
    /// The father announces some child is muddy in the first round, and nothing of substance after.
    pub fn announcement(&self) -> Formula {
        match self.interpreter.counters.rounds {
            0 => self.father.clone(),
            _ => Formula::top(),
        }
    }

    /// Runs the next round.
    pub fn round(&mut self) -> Result<RoundReport, err::ErrorKind> {
        let announcement = self.announcement();
        self.interpreter.public_announcement(&announcement, self.actual)
    }

    /// Whether every child has a single world left.
    pub fn is_finished(&self) -> Result<bool, err::ErrorKind> {
        Ok(self.interpreter.is_finished_at(self.actual)?)
    }

    /// Runs rounds until every child has a single world left, or the round limit is reached.
    pub fn run(&mut self) -> Result<Vec<RoundReport>, err::ErrorKind> {
        let limit = self.interpreter.config.round_limit.value;
        let mut reports = Vec::default();

        while reports.len() < limit {
            reports.push(self.round()?);
            if self.is_finished()? {
                break;
            }
        }

        Ok(reports)
    }
}
