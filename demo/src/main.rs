//! gridpath: run an A* search over a grid map from the command line.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use gridpath_demo::cli::Cli;
use gridpath_demo::{Outcome, run};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut out = stdout.lock();
    let res = run(&cli, color, &mut out).and_then(|o| {
        out.flush()?;
        Ok(o)
    });

    match res {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
