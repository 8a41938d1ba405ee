//! CLI command implementations.

use std::fs;

use gridbot_common::{Program, Puzzle};
use gridbot_engine::{Engine, Session};

use crate::parse;

/// Read and parse a puzzle and program pair from disk.
fn load(puzzle_path: &str, program_path: &str) -> Result<(Puzzle, Program), i32> {
    let puzzle_text = fs::read_to_string(puzzle_path).map_err(|e| {
        eprintln!("error: cannot read '{puzzle_path}': {e}");
        1
    })?;
    let puzzle = parse::parse_puzzle(&puzzle_text).map_err(|e| {
        eprintln!("error: {puzzle_path}: {e}");
        1
    })?;

    let program_text = fs::read_to_string(program_path).map_err(|e| {
        eprintln!("error: cannot read '{program_path}': {e}");
        1
    })?;
    let program = parse::parse_program(&program_text, &puzzle).map_err(|e| {
        eprintln!("error: {program_path}: {e}");
        1
    })?;

    Ok((puzzle, program))
}

/// Run a program to completion and report the outcome.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.len() != 2 {
        eprintln!("error: run requires a puzzle file and a program file");
        eprintln!("Usage: gridbot run <puzzle.gbp> <program.gbf>");
        return Err(1);
    }
    let (puzzle, program) = load(&args[0], &args[1])?;

    let mut session = Session::new(Engine::new(puzzle));
    session.set_program(program);
    session.start();

    loop {
        let outcome = session.step();
        if outcome.finished {
            let world = session.world();
            if outcome.won {
                println!(
                    "won: {}/{} goals in {} steps",
                    world.goals_collected, world.total_goals, world.steps_taken
                );
                return Ok(());
            }
            println!(
                "lost: {}/{} goals after {} steps",
                world.goals_collected, world.total_goals, world.steps_taken
            );
            return Err(2);
        }
    }
}

/// Run a program, printing one line per executed step.
pub fn trace(args: &[String]) -> Result<(), i32> {
    let (files, limit) = match args {
        [puzzle, program] => ((puzzle, program), None),
        [puzzle, program, flag, n] if flag == "--limit" => {
            let limit: usize = n.parse().map_err(|_| {
                eprintln!("error: --limit takes a number");
                1
            })?;
            ((puzzle, program), Some(limit))
        }
        _ => {
            eprintln!("error: trace requires a puzzle file and a program file");
            eprintln!("Usage: gridbot trace <puzzle.gbp> <program.gbf> [--limit N]");
            return Err(1);
        }
    };
    let (puzzle, program) = load(files.0, files.1)?;

    let mut session = Session::new(Engine::new(puzzle));
    session.set_program(program);
    session.start();

    loop {
        if let Some(limit) = limit {
            if session.world().steps_taken >= limit {
                println!("stopped after {limit} steps");
                return Ok(());
            }
        }
        let outcome = session.step();
        let world = session.world();
        println!(
            "step {:>4}: robot ({}, {}) facing {}, goals {}/{}, stack {}",
            world.steps_taken,
            world.robot.position.x,
            world.robot.position.y,
            world.robot.facing.name(),
            world.goals_collected,
            world.total_goals,
            session.stack_depth(),
        );
        if outcome.finished {
            if outcome.won {
                println!("won");
                return Ok(());
            }
            println!("lost");
            return Err(2);
        }
    }
}

/// Validate a puzzle/program pair without running it.
pub fn check(args: &[String]) -> Result<(), i32> {
    if args.len() != 2 {
        eprintln!("error: check requires a puzzle file and a program file");
        eprintln!("Usage: gridbot check <puzzle.gbp> <program.gbf>");
        return Err(1);
    }
    let (puzzle, program) = load(&args[0], &args[1])?;

    println!(
        "ok: {} tiles, {} goals, {} instructions in {} slots",
        puzzle.grid().tile_count(),
        puzzle.grid().remaining_goals(),
        program.non_empty_count(),
        program.total_capacity(),
    );
    Ok(())
}
