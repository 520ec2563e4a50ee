use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use advent_runner_core::solve_raw;

#[derive(Parser)]
#[command(
    name = "advent-runner-cli",
    version,
    about = "Run Advent of Code solvers from the command line"
)]
struct Cli {
    /// Puzzle year (2015-2024)
    year: String,
    /// Puzzle day (1-25)
    day: String,
    /// Puzzle part (1 or 2)
    part: String,
    /// Read the puzzle input from a file instead of stdin
    #[arg(long)]
    input_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(cli.input_file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match solve_raw(&cli.year, &cli.day, &cli.part, &input) {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> Result<String, String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("could not read {}: {err}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|err| format!("could not read stdin: {err}"))?;
            Ok(input)
        }
    }
}
