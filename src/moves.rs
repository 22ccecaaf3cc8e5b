use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Dir;

/// The slide sequence of a solution, as directions the blank travels.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Moves(Vec<Dir>);

impl Moves {
    /// Reads the moves off a sequence of snapshots by tracking the blank.
    ///
    /// Pairs that don't differ by a single blank step are skipped - a path
    /// produced by the solver never contains any.
    pub fn from_path(path: &[Board]) -> Moves {
        let mut dirs = Vec::new();
        for pair in path.windows(2) {
            if let (Some(from), Some(to)) = (pair[0].blank_pos(), pair[1].blank_pos()) {
                if let Some(dir) = Dir::between(from, to) {
                    dirs.push(dir);
                }
            }
        }
        Moves(dirs)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
