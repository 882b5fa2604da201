//! A library for reasoning about what agents know, and for running programs whose conditions are knowledge.
//!
//! epistemic_kbp represents possible worlds models (Kripke structures), evaluates epistemic formulas on those models, and interprets knowledge-based programs: programs whose rules select an action when some agent knows (or does not know) some fact.
//!
//! # Orientation
//!
//! The library is built around three things:
//! - [Formulas](crate::structures::formula), including knowledge operators for single agents and groups of agents.
//! - [Kripke structures](crate::kripke), which give truth conditions to knowledge operators, and shrink under [public announcement](crate::kripke::announce).
//! - An [interpreter](crate::interpreter), which gives each agent a private structure and runs rounds of announcement, action selection, and [reverse engineering](crate::program::explain) of the actions selected.
//!
//! Useful starting points, then, may be:
//! - The [round](crate::interpreter::Interpreter::public_announcement) of the interpreter to inspect the dynamics of a run.
//! - The [muddy children](crate::scenarios::muddy) for a complete scenario.
//! - The [configuration](crate::config) to see what may be adjusted.
//!
//! # Examples
//!
//! + Check what an agent knows at a world.
//!
//! ```rust
//! # use epistemic_kbp::kripke::builder::StructureBuilder;
//! # use epistemic_kbp::structures::{agent_id::AgentId, context::Context, formula::Formula, world::KripkeWorld};
//! let alice = AgentId::from("alice");
//!
//! let mut builder = StructureBuilder::default();
//! let sunny = builder.world(KripkeWorld::named("sunny", [("warm", true), ("dry", true)]));
//! let humid = builder.world(KripkeWorld::named("humid", [("warm", true), ("dry", false)]));
//! assert!(builder.indistinguishable(&alice, &[sunny, humid]).is_ok());
//! let mut structure = builder.build();
//!
//! let knows_warm = Formula::knows("alice", Formula::atom("warm"));
//! let knows_dry = Formula::knows("alice", Formula::atom("dry"));
//!
//! let at_sunny = Context::pointed(&structure, sunny).unwrap();
//! assert_eq!(knows_warm.evaluate(&at_sunny), Ok(true));
//! assert_eq!(knows_dry.evaluate(&at_sunny), Ok(false));
//!
//! // After it is announced to be dry, alice knows as much.
//! assert!(structure.announce(&Formula::atom("dry")).is_ok());
//! let at_sunny = Context::pointed(&structure, sunny).unwrap();
//! assert_eq!(knows_dry.evaluate(&at_sunny), Ok(true));
//! ```
//!
//! + Ask which observations explain an action.
//!
//! ```rust
//! # use epistemic_kbp::actions::library::Utterance;
//! # use epistemic_kbp::program::AgentProgram;
//! # use epistemic_kbp::structures::formula::Formula;
//! let (rain, wind) = (Formula::atom("rain"), Formula::atom("wind"));
//!
//! let mut program = AgentProgram::default();
//! program.push(rain.clone(), Utterance::shared("umbrella", ""));
//! program.push(wind.clone(), Utterance::shared("coat", ""));
//! program.set_default(Utterance::shared("nothing", ""));
//!
//! assert_eq!(
//!     program.explain("coat", 16),
//!     Some(Formula::and([Formula::not(rain.clone()), wind.clone()]))
//! );
//! assert_eq!(
//!     program.explain("nothing", 16),
//!     Some(Formula::and([Formula::not(rain), Formula::not(wind)]))
//! );
//! ```
//!
//! # Logs
//!
//! Calls to [log] are made throughout the library, with targets listed in [misc::log::targets].
//! No log implementation is provided, though the `kbp_cli` binary uses `env_logger` when built with the `logging` feature.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod actions;
pub mod agent;
pub mod config;
pub mod interpreter;
pub mod kripke;
pub mod program;
pub mod reports;
pub mod scenarios;
pub mod structures;
pub mod types;

pub mod misc;
