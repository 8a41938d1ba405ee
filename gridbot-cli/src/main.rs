//! gridbot CLI — run, trace, and check robot programs against puzzles.
//!
//! Exit codes:
//! - 0: Success (puzzle solved, or input valid)
//! - 1: Input/parse error
//! - 2: Puzzle not solved (lost)

use std::process;

use gridbot_cli::commands;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "trace" => commands::trace(&args[2..]),
        "check" => commands::check(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: gridbot <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <puzzle.gbp> <program.gbf>                Run a program to completion");
    eprintln!("  trace <puzzle.gbp> <program.gbf> [--limit N]  Run, printing each step");
    eprintln!("  check <puzzle.gbp> <program.gbf>              Validate without running");
}
