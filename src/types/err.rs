//! Error types used in the library.
//!
//! - Evaluation errors are contract violations: a modal operator was evaluated without a world and structure to evaluate it on.
//! - Model errors are fatal to a run of the interpreter, as there is no world left to reason about.
//! - Action errors are local to the execution of a single action, and never touch a structure.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    actions::{ArgumentError, Arity},
    kripke::WorldKey,
    structures::agent_id::AgentId,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Action(ActionError),
    Build(BuildError),
    Evaluation(EvaluationError),
    Model(ModelError),
    Program(ProgramError),
    Structure(StructureError),
}

/// Noted errors when performing an action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActionError {
    /// The arguments bound to an action do not fit the arity of the action.
    /// Checked before the action is invoked.
    ArityMismatch {
        action: String,
        expected: Arity,
        found: usize,
    },

    /// The action itself rejected the arguments it was given.
    Argument {
        action: String,
        error: ArgumentError,
    },

    /// An attempt to perform or explain an action before any action was selected.
    NoSelection,
}

impl From<ActionError> for ErrorKind {
    fn from(e: ActionError) -> Self {
        ErrorKind::Action(e)
    }
}

/// Noted errors when building an interpreter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An interpreter requires at least one agent.
    NoAgents,

    /// Two agents share an identity.
    DuplicateAgent(AgentId),

    /// Some permission or association mentions an agent the interpreter does not know.
    UnknownAgent(AgentId),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during evaluation of a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// A modal operator was evaluated against a context with no pointed world and structure.
    UnpointedModal,

    /// The pointed world of a context is not part of the structure.
    MissingWorld(WorldKey),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Fatal conditions of a model under a sequence of announcements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModelError {
    /// The pointed (real) world was eliminated from the structure of some agent.
    ///
    /// A truthful sequence of announcements never excludes the real world, so this signals inconsistent use of the protocol.
    InvalidModel { agent: AgentId, world: WorldKey },

    /// The structure of some agent has no worlds left, and no real world was expected to survive.
    NoConvergence { agent: AgentId },
}

impl From<ModelError> for ErrorKind {
    fn from(e: ModelError) -> Self {
        ErrorKind::Model(e)
    }
}

/// Errors when editing an agent program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgramError {
    /// No rule has the given condition.
    MissingRule,

    /// An insertion past the last (non-default) rule.
    IndexOutOfBounds { index: usize, len: usize },
}

impl From<ProgramError> for ErrorKind {
    fn from(e: ProgramError) -> Self {
        ErrorKind::Program(e)
    }
}

/// Errors when building or querying a structure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StructureError {
    /// An arc mentions a world which is not part of the structure.
    UnknownWorld(WorldKey),

    /// A world was requested by a name no world has.
    UnnamedWorld(String),
}

impl From<StructureError> for ErrorKind {
    fn from(e: StructureError) -> Self {
        ErrorKind::Structure(e)
    }
}
