/*!
An atom, aka. a 'propositional symbol'.

Atoms are opaque names, and two atoms are the same atom exactly when their names are the same.

```rust
# use epistemic_kbp::structures::atom::Atom;
let p = Atom::from("p");
assert_eq!(p, Atom::from(String::from("p")));
assert_ne!(p, Atom::from("q"));
```
*/

/// An atom, identified by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    name: String,
}

impl Atom {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom {
            name: name.to_owned(),
        }
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Atom { name }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
