//! # exec
//!
//! Runs a script file, or starts an interactive session.

use clap::Parser;
use exec::mach::Config;
use exec::term;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exec", version, about)]
struct Cli {
    /// Script to run. Starts an interactive session when omitted.
    script: Option<PathBuf>,

    /// Abort a run after this many lines have been executed.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Log engine activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    term::init_tracing(cli.verbose);
    let config = Config {
        step_limit: cli.max_steps,
    };
    let code = match cli.script {
        Some(path) => term::run_file(&path, config),
        None => term::main(config),
    };
    std::process::exit(code);
}
