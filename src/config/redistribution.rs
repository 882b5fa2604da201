/// How the explanations an agent hears are announced to the structure of the agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum Redistribution {
    /// A single announcement of the conjunction of every explanation heard.
    #[default]
    Conjoined,

    /// An announcement of each explanation heard, one after another, in agent order.
    Successive,
}

impl Redistribution {
    pub const MIN: Redistribution = Redistribution::Conjoined;
    pub const MAX: Redistribution = Redistribution::Successive;
}

impl std::fmt::Display for Redistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conjoined => write!(f, "conjoined"),
            Self::Successive => write!(f, "successive"),
        }
    }
}
