/*!
A (possible) world --- a name paired with a [valuation](Valuation).

Worlds are compared structurally, and so two worlds with the same valuation but different names are different worlds.
When no name is given a fresh name is generated, beginning with `#`.

```rust
# use epistemic_kbp::structures::world::KripkeWorld;
let w = KripkeWorld::named("w", [("p", true)]);
let v = KripkeWorld::named("v", [("p", true)]);

assert_eq!(w.valuation(), v.valuation());
assert_ne!(w, v);
```
*/

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{atom::Atom, valuation::Valuation};

/// A source of fresh world names.
static WORLD_COUNT: AtomicUsize = AtomicUsize::new(0);

/// A world.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KripkeWorld {
    name: String,
    valuation: Valuation,
}

impl KripkeWorld {
    /// A world with a fresh name.
    pub fn new(valuation: Valuation) -> Self {
        let index = WORLD_COUNT.fetch_add(1, Ordering::Relaxed);
        KripkeWorld {
            name: format!("#{index}"),
            valuation,
        }
    }

    /// A world with the given name, valued by the given (atom, value) pairs.
    pub fn named<A: Into<Atom>>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (A, bool)>,
    ) -> Self {
        KripkeWorld {
            name: name.into(),
            valuation: Valuation::from_pairs(pairs),
        }
    }

    /// A world with the given name and valuation.
    pub fn with_valuation(name: impl Into<String>, valuation: Valuation) -> Self {
        KripkeWorld {
            name: name.into(),
            valuation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn valuation(&self) -> &Valuation {
        &self.valuation
    }
}

impl std::fmt::Display for KripkeWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {{{}}}", self.name, self.valuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_names_differ() {
        let a = KripkeWorld::new(Valuation::default());
        let b = KripkeWorld::new(Valuation::default());
        assert_ne!(a.name(), b.name());
        assert_ne!(a, b);
        assert!(a.name().starts_with('#'));
    }

    #[test]
    fn unmentioned_atoms_are_false() {
        assert_eq!(
            KripkeWorld::named("w", [("p", false)]),
            KripkeWorld::named("w", Vec::<(Atom, bool)>::default())
        );
        assert_ne!(
            KripkeWorld::named("w", [("p", true)]),
            KripkeWorld::named("w", [("p", false)])
        );
    }
}
