#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::collections::BTreeSet;

use clap::Parser;
use rand::{seq::index, Rng, SeedableRng};

use epistemic_kbp::{
    config::{Config, Redistribution},
    scenarios::muddy::{muddy_children, MuddyChildren},
    types::err::{self, ModelError},
};

mod args;
mod display;

use args::{Cli, MuddyArgs, Scenario};

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let cli = Cli::parse();

    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return;
    }

    match cli.scenario {
        Some(Scenario::Muddy(args)) => muddy(args),
        None => {
            println!("A scenario is required, see --help");
            std::process::exit(1);
        }
    }
}

/// Applies the options of `args` to `config`, exiting if some value is out of bounds.
fn config_from_args(args: &MuddyArgs) -> Config {
    let mut config = Config::default();

    if let Some(redistribution) = args.redistribution {
        config.redistribution.value = redistribution;
    }
    if args.successive {
        config.redistribution.value = Redistribution::Successive;
    }

    if let Some(rounds) = args.rounds {
        let (min, max) = config.round_limit.min_max();
        if !config.round_limit.set(rounds) {
            println!("{} requires a value between {min} and {max}", config.round_limit.name);
            std::process::exit(1);
        }
    }

    if let Some(limit) = args.simplification_limit {
        let (min, max) = config.simplification_limit.min_max();
        if !config.simplification_limit.set(limit) {
            println!("{} requires a value between {min} and {max}", config.simplification_limit.name);
            std::process::exit(1);
        }
    }

    config
}

/// Draws a nonempty set of muddy children from `count` children.
fn draw_muddy(count: usize, seed: Option<u64>) -> BTreeSet<usize> {
    let mut rng = match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };
    let amount = rng.gen_range(1..=count);
    index::sample(&mut rng, count, amount)
        .into_iter()
        .map(|index| index + 1)
        .collect()
}

fn muddy(args: MuddyArgs) {
    const CHILD_LIMIT: usize = 16;
    if args.children == 0 || args.children > CHILD_LIMIT {
        println!("The number of children must be between 1 and {CHILD_LIMIT}");
        std::process::exit(1);
    }

    let config = config_from_args(&args);

    let muddy = match &args.muddy {
        Some(indices) => indices.iter().copied().collect(),
        None => draw_muddy(args.children, args.seed),
    };

    let mut scenario = match muddy_children(args.children, &muddy, args.hearing, config) {
        Ok(scenario) => scenario,
        Err(e) => {
            println!("Failed to set up the children: {e:?}");
            std::process::exit(1);
        }
    };

    println!(
        "{} children, muddy: {:?}, hearing: {}, redistribution: {}",
        args.children,
        muddy,
        args.hearing,
        scenario.interpreter.config.redistribution.value
    );

    match run(&mut scenario) {
        Ok(rounds) => display::print_report(scenario.interpreter.report(), rounds),

        Err(err::ErrorKind::Model(ModelError::InvalidModel { agent, .. })) => {
            println!("Invalid model: the actual world was removed from the structure of {agent}");
            std::process::exit(2);
        }

        Err(e) => {
            println!("Error: {e:?}");
            std::process::exit(2);
        }
    }
}

/// Runs rounds until the children converge or the round limit is reached, and then one more round so every answer reflects what is known.
fn run(scenario: &mut MuddyChildren) -> Result<usize, err::ErrorKind> {
    let reports = scenario.run()?;
    for report in &reports {
        display::print_round(report);
    }

    if scenario.is_finished()? {
        display::print_round(&scenario.round()?);
    }

    Ok(scenario.interpreter.counters.rounds)
}
