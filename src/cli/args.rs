use clap::{Args, Parser, Subcommand};
use epistemic_kbp::{config::Redistribution, scenarios::muddy::Hearing};

/// Run scenarios of knowledge-based programs, round by round.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print help as markdown, and exit.
    #[arg(long, hide = true)]
    pub markdown_help: bool,

    #[command(subcommand)]
    pub scenario: Option<Scenario>,
}

#[derive(Subcommand, Debug)]
pub enum Scenario {
    /// The muddy children.
    Muddy(MuddyArgs),
}

#[derive(Args, Debug)]
pub struct MuddyArgs {
    /// The number of children.
    #[arg(short, long, default_value_t = 3)]
    pub children: usize,

    /// The muddy children, indexed from one, separated by commas.
    ///
    /// If omitted, a nonempty set of muddy children is drawn at random.
    #[arg(short, long, value_delimiter = ',')]
    pub muddy: Option<Vec<usize>>,

    /// A seed for drawing the muddy children.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Who hears whose answer.
    #[arg(long, value_enum, default_value_t = Hearing::All)]
    pub hearing: Hearing,

    /// How the answers heard by a child are announced.
    #[arg(long, value_enum)]
    pub redistribution: Option<Redistribution>,

    /// Announce each answer heard separately, short for `--redistribution successive`.
    #[arg(long)]
    pub successive: bool,

    /// The most rounds to run.
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// The most passes of simplification when explaining an answer.
    #[arg(long)]
    pub simplification_limit: Option<usize>,
}
