/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [formulas](crate::structures::formula)
    pub const FORMULA: &str = "formula";

    /// Logs related to reflexive and symmetric [closure](crate::kripke::closure)
    pub const CLOSURE: &str = "closure";

    /// Logs related to public [announcements](crate::kripke::announce), and the worlds they remove
    pub const ANNOUNCEMENT: &str = "announcement";

    /// Logs related to [agent programs](crate::program)
    pub const PROGRAM: &str = "program";

    /// Logs related to [reverse engineering](crate::program::explain) of a selected action
    pub const EXPLANATION: &str = "explanation";

    /// Logs related to rounds of the [interpreter](crate::interpreter)
    pub const INTERPRETER: &str = "interpreter";

    /// Logs related to performing [actions](crate::actions)
    pub const ACTION: &str = "action";
}
