//! Public announcement.
//!
//! Announcing a formula removes every world at which the formula is false, together with every arc to or from a removed world.
//! The formula is evaluated at each world on the structure *before* any world is removed, as an announcement is made of the current state of affairs.
//!
//! Announcements never add worlds or arcs, and so a structure only shrinks under a sequence of announcements.
//! A formula true at every world leaves the structure unchanged.
//! A formula false at every world leaves the structure empty, which is not an error of the structure (though it may be for some use of the structure).

use crate::{
    misc::log::targets::{self},
    structures::{context::Context, formula::Formula},
    types::err::EvaluationError,
};

use super::{KripkeStructure, WorldKey};

impl KripkeStructure {
    /// The worlds of the structure at which `formula` is false.
    pub fn refuting_worlds(&self, formula: &Formula) -> Result<Vec<WorldKey>, EvaluationError> {
        let mut refuting = Vec::default();
        for key in self.worlds.keys() {
            if !formula.evaluate(&Context::pointed(self, key)?)? {
                refuting.push(key);
            }
        }
        Ok(refuting)
    }

    /// Announces `formula`, returning the keys of the worlds removed.
    pub fn announce(&mut self, formula: &Formula) -> Result<Vec<WorldKey>, EvaluationError> {
        let refuting = self.refuting_worlds(formula)?;

        for key in &refuting {
            if let Some(world) = self.remove_world(*key) {
                log::trace!(target: targets::ANNOUNCEMENT, "Removed {world}");
            }
        }

        log::debug!(target: targets::ANNOUNCEMENT,
            "Announced {formula}: {} removed, {} remain", refuting.len(), self.worlds.len());

        Ok(refuting)
    }
}
