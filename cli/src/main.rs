//! Console front end: argument glue around the search engine.
//!
//! ```text
//! npuzzle <bfs|dfs> <comma-separated-tiles> [--json]
//! npuzzle bfs 1,2,5,3,4,0,6,7,8
//! ```
//!
//! The engine performs no I/O; everything printed here is rendering of
//! its returned report.

use std::env;
use std::process::ExitCode;

use npuzzle_board::Board;
use npuzzle_search::{search, Strategy};

fn usage() -> ExitCode {
    eprintln!("Usage: npuzzle <bfs|dfs> <comma-separated-tiles> [--json]");
    eprintln!("       npuzzle bfs 1,2,5,3,4,0,6,7,8");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();
    let [strategy_arg, tiles_arg] = positional.as_slice() else {
        return usage();
    };

    let strategy: Strategy = match strategy_arg.parse() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut tiles = Vec::new();
    for token in tiles_arg.split(',') {
        match token.trim().parse::<u8>() {
            Ok(v) => tiles.push(v),
            Err(_) => {
                eprintln!("tile list entry {token:?} is not a number in 0..=255");
                return ExitCode::FAILURE;
            }
        }
    }

    let initial = match Board::from_flat(&tiles) {
        Ok(b) => b,
        Err(err) => {
            eprintln!("invalid board: {err}");
            return ExitCode::FAILURE;
        }
    };

    if !json {
        println!("Executing {}", strategy.token());
        println!("Initial tiles:\n{initial}");
        println!("Success tiles:\n{}", Board::goal(initial.side()));
    }

    match search::search(&tiles, strategy) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report.to_json()) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(err) => {
                        eprintln!("failed to render report: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                if report.is_goal_reached() {
                    println!("Success!\n");
                } else {
                    println!("Solution not found (empty fringe)\n");
                }
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
