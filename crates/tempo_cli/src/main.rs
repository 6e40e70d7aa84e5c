//! tempo CLI — static timing analysis for synthesized netlists.
//!
//! Reads a Yosys JSON netlist, enumerates every combinational path
//! between sequential boundaries, and reports setup-timing slack for the
//! slowest paths against the configured clock constraints.

#![warn(missing_docs)]

mod render;

use std::path::Path;
use std::process;

use clap::{Parser, ValueEnum};
use tempo_netlist::read_circuit;
use tempo_sta::{k_shortest, read_config, run_analysis, TimingConfig, DEFAULT_ANALYZED_PATHS};

/// tempo — setup-timing analysis over synthesized netlists.
#[derive(Parser, Debug)]
#[command(name = "tempo", version, about = "Static timing analysis for synthesized netlists")]
pub struct Cli {
    /// Path to the Yosys JSON netlist to analyze.
    pub netlist: String,

    /// Path to a `tempo.toml` with constraint and delay overrides.
    #[arg(short, long)]
    pub constraints: Option<String>,

    /// How many critical paths to analyze (clamped to the number found).
    #[arg(short = 'n', long, default_value_t = DEFAULT_ANALYZED_PATHS)]
    pub paths: usize,

    /// Output format for the analysis results.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Also list the fastest paths.
    #[arg(long)]
    pub shortest: bool,

    /// Suppress the circuit summary and path listing; print only timing.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Analysis output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Runs the analysis pipeline and prints the results.
fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let circuit = read_circuit(Path::new(&cli.netlist))?;
    let config = match &cli.constraints {
        Some(path) => read_config(Path::new(path))?,
        None => TimingConfig::default(),
    };

    let analysis = run_analysis(&circuit, &config.delays, &config.constraints, cli.paths)?;

    match cli.format {
        ReportFormat::Text => {
            if !cli.quiet {
                print!("{}", render::circuit_summary(&circuit));
                print!("{}", render::paths_section(&circuit, &analysis.paths));
            }
            if cli.shortest {
                let all: Vec<tempo_sta::Path> =
                    analysis.paths.iter().map(|r| r.path.clone()).collect();
                let fastest = k_shortest(&circuit, &config.delays, &all, cli.paths);
                print!("{}", render::ranked_section(&circuit, "fastest paths", &fastest));
            }
            print!("{}", render::report_section(&circuit, &analysis.report));
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    Ok(0)
}
