//! A command line interface to *Empty Container Repositioning* solver.

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn get_app() -> Command {
    Command::new("Empty Container Repositioning Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to empty container repositioning solver")
        .subcommand(get_solve_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
