use crossterm::style::Stylize;
use epistemic_kbp::{
    reports::{Report, RoundReport},
    scenarios::muddy::{CLEAN, MUDDY},
};

/// Prints the outcome of each agent in a round, with the count of worlds left to the agent.
pub fn print_round(report: &RoundReport) {
    println!("{}", format!("Round {}", report.round).bold());

    for (agent, outcome) in &report.outcomes {
        let action = match outcome.action.as_deref() {
            Some(MUDDY) => MUDDY.red().to_string(),
            Some(CLEAN) => CLEAN.green().to_string(),
            Some(other) => other.to_string(),
            None => "-".dark_grey().to_string(),
        };

        let said = match &outcome.result {
            Some(Ok(value)) => format!("\"{value}\""),
            Some(Err(e)) => format!("{e:?}").yellow().to_string(),
            None => String::default(),
        };

        let worlds = report.worlds.get(agent).copied().unwrap_or_default();
        println!("  {agent:<10} {action:<8} {said} ({worlds} worlds)");
        log::debug!("{agent} observed {} and was explained by {:?}", outcome.observation, outcome.explanation);
    }
}

pub fn print_report(report: Report, rounds: usize) {
    let line = format!("{report} after {rounds} rounds");
    match report {
        Report::Converged => println!("{}", line.green().bold()),
        Report::Running => println!("{}", line.yellow().bold()),
        Report::Exhausted => println!("{}", line.red().bold()),
    }
}
