/*!
Configuration of an interpreter.

All configuration for an interpreter is contained within a [Config], and each option records its name and bounds alongside its value.
*/

mod config_option;
pub use config_option::ConfigOption;

mod redistribution;
pub use redistribution::Redistribution;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How explanations heard by an agent are announced to the structure of the agent.
    pub redistribution: ConfigOption<Redistribution>,

    /// Whether an agent in its own permission set hears its own explanation.
    pub self_hearing: ConfigOption<bool>,

    /// The most passes of simplification made when normalising a formula.
    pub simplification_limit: ConfigOption<usize>,

    /// The most rounds to run before giving up on convergence.
    pub round_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redistribution: ConfigOption {
                name: "redistribution",
                min: Redistribution::MIN,
                max: Redistribution::MAX,
                value: Redistribution::Conjoined,
            },

            self_hearing: ConfigOption {
                name: "self_hearing",
                min: false,
                max: true,
                value: false,
            },

            simplification_limit: ConfigOption {
                name: "simplification_limit",
                min: 1,
                max: usize::MAX,
                value: 16,
            },

            round_limit: ConfigOption {
                name: "round_limit",
                min: 1,
                max: usize::MAX,
                value: 64,
            },
        }
    }
}
