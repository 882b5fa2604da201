//! A small library of actions.

use std::sync::Arc;

use super::{Action, ActionRef, ArgumentError, Arity, Value};

/// Says a phrase, followed by any arguments.
pub struct Utterance {
    name: String,
    phrase: String,
}

impl Utterance {
    pub fn new(name: impl Into<String>, phrase: impl Into<String>) -> Self {
        Utterance {
            name: name.into(),
            phrase: phrase.into(),
        }
    }

    pub fn shared(name: impl Into<String>, phrase: impl Into<String>) -> ActionRef {
        Arc::new(Utterance::new(name, phrase))
    }
}

impl Action for Utterance {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> Arity {
        Arity::Any
    }

    fn perform(&self, arguments: &[Value]) -> Result<Value, ArgumentError> {
        let mut said = self.phrase.clone();
        for argument in arguments {
            said.push(' ');
            said.push_str(&argument.to_string());
        }
        Ok(Value::Text(said))
    }
}

/// The type of function performed by a [FnAction].
pub type ActionFn = dyn Fn(&[Value]) -> Result<Value, ArgumentError> + Send + Sync;

/// An action performed by calling some function.
pub struct FnAction {
    name: String,
    arity: Arity,
    function: Box<ActionFn>,
}

impl FnAction {
    pub fn new(name: impl Into<String>, arity: Arity, function: Box<ActionFn>) -> Self {
        FnAction {
            name: name.into(),
            arity,
            function,
        }
    }

    pub fn shared(name: impl Into<String>, arity: Arity, function: Box<ActionFn>) -> ActionRef {
        Arc::new(FnAction::new(name, arity, function))
    }
}

impl Action for FnAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> Arity {
        self.arity
    }

    fn perform(&self, arguments: &[Value]) -> Result<Value, ArgumentError> {
        (self.function)(arguments)
    }
}
