use anyhow::Context;
use clap::Parser;
use metrogen::city;
use metrogen::logging::{self, LogLevel};
use metrogen::metromap::{self, Verdict};
use std::fs;
use std::path::PathBuf;

/// Checks a `.metromap` solution against its `.city` problem.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the problem file
    city: PathBuf,
    /// Path to the solution file
    metromap: PathBuf,
    #[clap(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.log_level, false)?;
    let problem_text = fs::read_to_string(&cli.city)
        .with_context(|| format!("No such input: {}", cli.city.display()))?;
    let problem = city::parse(&problem_text)
        .with_context(|| format!("Invalid problem {}", cli.city.display()))?;
    let solution_text = fs::read_to_string(&cli.metromap)
        .with_context(|| format!("No such input: {}", cli.metromap.display()))?;
    let solution = metromap::parse(&solution_text, problem.endpoints.len())
        .with_context(|| format!("Invalid solution {}", cli.metromap.display()))?;

    match metromap::verify(&problem, &solution) {
        Verdict::Accepted => println!("AC"),
        Verdict::DeclaredUnsat => println!("UNSAT (not verified)"),
        Verdict::Rejected(reason) => {
            println!("WA: {reason}");
            std::process::exit(1);
        }
    }
    Ok(())
}
