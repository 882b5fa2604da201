/*!
A function from atoms to truth values.

The valuation of a world is total: any atom the valuation does not mention is false.
Still, the atoms which have been explicitly valued are recorded, as it is useful to distinguish an atom set to false from an atom never mentioned when displaying a valuation.
Comparison ignores the distinction, and two valuations are equal exactly when the same atoms are true.

```rust
# use epistemic_kbp::structures::{atom::Atom, valuation::Valuation};
let valuation = Valuation::from_pairs([("p", true), ("q", false)]);

assert!(valuation.value_of(&Atom::from("p")));
assert!(!valuation.value_of(&Atom::from("q")));
assert!(!valuation.value_of(&Atom::from("r")));

assert_eq!(valuation.true_atoms().count(), 1);
assert_eq!(valuation, Valuation::from_pairs([("p", true)]));
```
*/

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    hash::{Hash, Hasher},
};

use super::atom::Atom;

/// A valuation, as a map from atoms to values.
#[derive(Clone, Debug, Default)]
pub struct Valuation {
    values: BTreeMap<Atom, bool>,
}

impl Valuation {
    /// A valuation from (atom, value) pairs.
    /// Later pairs overwrite earlier pairs.
    pub fn from_pairs<A: Into<Atom>>(pairs: impl IntoIterator<Item = (A, bool)>) -> Self {
        Valuation {
            values: pairs
                .into_iter()
                .map(|(atom, value)| (atom.into(), value))
                .collect(),
        }
    }

    /// The value of `atom`, with any unmentioned atom false.
    pub fn value_of(&self, atom: &Atom) -> bool {
        self.values.get(atom).copied().unwrap_or(false)
    }

    /// Sets the value of `atom`, returning the value previously recorded, if any.
    pub fn set(&mut self, atom: Atom, value: bool) -> Option<bool> {
        self.values.insert(atom, value)
    }

    /// An iterator through all explicitly valued (atom, value) pairs, in atom order.
    pub fn atom_value_pairs(&self) -> impl Iterator<Item = (&Atom, bool)> {
        self.values.iter().map(|(atom, value)| (atom, *value))
    }

    /// An iterator through the atoms which are true.
    pub fn true_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.values
            .iter()
            .filter_map(|(atom, value)| if *value { Some(atom) } else { None })
    }

    /// Whether the valuation agrees with `other` on every atom in `atoms`.
    pub fn agrees_on<'a>(&self, other: &Valuation, atoms: impl IntoIterator<Item = &'a Atom>) -> bool {
        atoms
            .into_iter()
            .all(|atom| self.value_of(atom) == other.value_of(atom))
    }

}

impl PartialEq for Valuation {
    fn eq(&self, other: &Self) -> bool {
        self.true_atoms().eq(other.true_atoms())
    }
}

impl Eq for Valuation {}

impl PartialOrd for Valuation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Valuation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.true_atoms().cmp(other.true_atoms())
    }
}

impl Hash for Valuation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for atom in self.true_atoms() {
            atom.hash(state);
        }
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (atom, value) in self.atom_value_pairs() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match value {
                true => write!(f, "{atom}")?,
                false => write!(f, "-{atom}")?,
            }
        }
        Ok(())
    }
}
