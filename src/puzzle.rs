use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::board::Board;

/// A solve request: where the tiles are and where they should end up.
#[derive(Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: Board,
    pub goal: Board,
}

impl Puzzle {
    pub fn new(initial: Board, goal: Board) -> Self {
        Puzzle { initial, goal }
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial)?;
        writeln!(f)?;
        write!(f, "{}", self.goal)
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
