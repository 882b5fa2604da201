//! Key structures, such as atoms, valuations, worlds, and formulas.
//!
//! # Formulas
//!
//! A [formula](formula::Formula) is built from [atoms](atom), the propositional connectives, and modal operators indexed by [agents](agent_id).
//! Formulas are immutable, and every transformation of a formula returns a fresh formula.
//!
//! # Valuations and worlds
//!
//! A [valuation](valuation::Valuation) maps atoms to truth values, with any atom not mentioned taken to be false.
//! A [world](world::KripkeWorld) is a named valuation, and a [structure](crate::kripke) relates worlds, per agent.
//!
//! # Contexts
//!
//! Formulas are evaluated against a [context](context::Context).
//! A context always has a valuation, and may also point to a world of some structure.
//! Only a pointed context supports evaluation of modal operators.

pub mod agent_id;
pub mod atom;
pub mod context;
pub mod formula;
pub mod valuation;
pub mod world;
