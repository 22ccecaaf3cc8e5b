use std::process;

use clap::{App, Arg};

use npuzzle_solver::moves::Moves;
use npuzzle_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("npuzzle-solver")
        .about("Finds a shortest sequence of slides between two sliding-puzzle configurations")
        .arg(
            Arg::with_name("status")
                .short("-s")
                .long("--status")
                .help("print progress while searching"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let print_status = matches.is_present("status");
    let path = matches.value_of("file").unwrap();

    let puzzle = path.load_puzzle().unwrap_or_else(|err| {
        println!("Can't load puzzle {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = puzzle.solve(print_status).unwrap_or_else(|err| {
        println!("Invalid puzzle: {}", err);
        process::exit(1);
    });

    print!("{}", solver_ok.stats);
    println!();
    match solver_ok.path_states {
        Ok(path_states) => {
            println!("Found solution:");
            for board in &path_states {
                println!("{}", board);
            }
            let moves = Moves::from_path(&path_states);
            if moves.move_cnt() > 0 {
                println!("Moves: {}", moves);
            }
            println!("{} moves", path_states.len() - 1);
        }
        Err(reason) => println!("{}", reason),
    }
}
