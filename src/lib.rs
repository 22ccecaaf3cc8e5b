// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod data;
pub mod moves;
pub mod puzzle;
pub mod solver;

mod fs;
mod parser;

use std::error::Error;
use std::path::Path;

use crate::puzzle::Puzzle;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

impl<T: AsRef<Path>> LoadPuzzle for T {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse::<Puzzle>()?)
    }
}

pub trait Solve {
    fn solve(&self, print_status: bool) -> Result<SolverOk, SolverErr>;
}
