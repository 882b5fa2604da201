/*!
Actions an agent may perform.

An action is anything which implements the [Action] trait: a name, an [Arity], and a method to perform the action on some arguments.
Actions are shared between programs (and agents) through an [ActionRef], and actions are identified by name.

Arguments are [Value]s, and are bound to an action by the [interpreter](crate::interpreter) rather than chosen by an agent.
The arity of an action is checked before the action is performed, and so an action only needs to check the *kind* of each argument.

```rust
# use epistemic_kbp::actions::{invoke, library::Utterance, Value};
let greet = Utterance::shared("greet", "hello");
assert_eq!(invoke(&greet, &[Value::from("world")]), Ok(Value::from("hello world")));
```
*/

pub mod library;
mod value;
pub use value::Value;

use std::sync::Arc;

use crate::{
    misc::log::targets::{self},
    types::err::ActionError,
};

/// Something an agent can do.
pub trait Action: Send + Sync {
    /// The name of the action, unique among the actions of an interpreter.
    fn name(&self) -> &str;

    /// The count of arguments the action accepts.
    fn arity(&self) -> Arity;

    /// Performs the action.
    ///
    /// Called only with a count of arguments the arity of the action accepts.
    fn perform(&self, arguments: &[Value]) -> Result<Value, ArgumentError>;
}

/// A shared action.
pub type ActionRef = Arc<dyn Action>;

/// The count of arguments accepted by an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly some count of arguments.
    Exact(usize),

    /// At least some count of arguments.
    AtLeast(usize),

    /// Any count of arguments.
    Any,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
            Arity::Any => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "{n} or more"),
            Arity::Any => write!(f, "any"),
        }
    }
}

/// An action rejected an argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// The argument at some position is not of the expected kind.
    Kind {
        position: usize,
        expected: &'static str,
    },

    /// The argument at some position is of the right kind, but an unacceptable value.
    Value { position: usize },
}

/// Performs `action` on `arguments`, after checking the arity of the action.
pub fn invoke(action: &ActionRef, arguments: &[Value]) -> Result<Value, ActionError> {
    let arity = action.arity();
    if !arity.accepts(arguments.len()) {
        log::debug!(target: targets::ACTION,
            "{} expects {arity} arguments, given {}", action.name(), arguments.len());
        return Err(ActionError::ArityMismatch {
            action: action.name().to_owned(),
            expected: arity,
            found: arguments.len(),
        });
    }

    match action.perform(arguments) {
        Ok(value) => {
            log::trace!(target: targets::ACTION, "{} performed: {value}", action.name());
            Ok(value)
        }
        Err(error) => Err(ActionError::Argument {
            action: action.name().to_owned(),
            error,
        }),
    }
}
