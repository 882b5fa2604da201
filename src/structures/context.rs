/*!
The context a formula is evaluated against.

A context is always a [valuation](Valuation), and optionally a world of some [structure](KripkeStructure).
The world and structure are required to evaluate modal operators, and evaluating a modal operator against a context without them is an [error](crate::types::err::EvaluationError::UnpointedModal).

```rust
# use epistemic_kbp::structures::{context::Context, formula::Formula, valuation::Valuation};
# use epistemic_kbp::types::err::EvaluationError;
let valuation = Valuation::from_pairs([("p", true)]);
let context = Context::from_valuation(&valuation);

assert_eq!(Formula::atom("p").evaluate(&context), Ok(true));

let knows_p = Formula::knows("a", Formula::atom("p"));
assert_eq!(knows_p.evaluate(&context), Err(EvaluationError::UnpointedModal));
```
*/

use crate::{
    kripke::{KripkeStructure, WorldKey},
    types::err::EvaluationError,
};

use super::valuation::Valuation;

/// A valuation, perhaps paired with a pointed world of a structure.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    valuation: &'a Valuation,
    pointed: Option<(WorldKey, &'a KripkeStructure)>,
}

impl<'a> Context<'a> {
    /// A propositional context.
    pub fn from_valuation(valuation: &'a Valuation) -> Self {
        Context {
            valuation,
            pointed: None,
        }
    }

    /// A context pointed at `world` of `structure`, whose valuation is the valuation of the world.
    pub fn pointed(structure: &'a KripkeStructure, world: WorldKey) -> Result<Self, EvaluationError> {
        match structure.world(world) {
            Some(the_world) => Ok(Context {
                valuation: the_world.valuation(),
                pointed: Some((world, structure)),
            }),
            None => Err(EvaluationError::MissingWorld(world)),
        }
    }

    pub fn valuation(&self) -> &'a Valuation {
        self.valuation
    }

    /// The pointed world and structure, if the context has some.
    pub fn pointed_world(&self) -> Option<(WorldKey, &'a KripkeStructure)> {
        self.pointed
    }
}
