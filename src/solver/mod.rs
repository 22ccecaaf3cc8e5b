pub mod a_star;
pub mod model;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::debug;

use crate::board::Board;
use crate::puzzle::Puzzle;
use crate::Solve;

use self::a_star::{SearchNode, Stats};
use self::model::SearchModel;

/// Precondition violations caught before any search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    SizeMismatch,
    TileOutOfRange(u8),
    NoBlank,
    MultipleBlanks,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::SizeMismatch => write!(f, "Initial and goal boards have different sizes"),
            SolverErr::TileOutOfRange(tile) => {
                write!(f, "Tile {} does not fit the board", tile)
            }
            SolverErr::NoBlank => write!(f, "Board has no blank cell"),
            SolverErr::MultipleBlanks => write!(f, "Board has more than one blank cell"),
        }
    }
}

impl Error for SolverErr {}

/// Why a well-formed pair has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSolution {
    /// The boards are provably unreachable from one another - detected
    /// analytically, no search performed.
    ParityMismatch,
    /// The frontier emptied without reaching the goal - happens only when
    /// the input bypassed the parity guard (e.g. mismatched tile sets).
    Exhausted,
}

impl Display for NoSolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            NoSolution::ParityMismatch => write!(
                f,
                "No solution: initial and goal boards have different inversion parity"
            ),
            NoSolution::Exhausted => write!(
                f,
                "No solution: search space exhausted without reaching the goal"
            ),
        }
    }
}

pub struct SolverOk {
    /// The snapshot sequence from initial to goal inclusive, or the reason
    /// there is none.
    pub path_states: Result<Vec<Board>, NoSolution>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(path_states: Result<Vec<Board>, NoSolution>, stats: Stats) -> Self {
        Self { path_states, stats }
    }

    /// Number of slides in the solution, if one was found.
    pub fn move_cnt(&self) -> Option<usize> {
        self.path_states.as_ref().ok().map(|path| path.len() - 1)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            Ok(ref path) => writeln!(f, "moves: {}", path.len() - 1)?,
            Err(reason) => writeln!(f, "{}", reason)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, print_status)
    }
}

fn solve(puzzle: &Puzzle, print_status: bool) -> Result<SolverOk, SolverErr> {
    debug!("Building search model...");
    let model = SearchModel::new(&puzzle.initial, &puzzle.goal)?;
    debug!("Built search model");

    if !model.is_solvable() {
        debug!("Parity mismatch, skipping search");
        return Ok(SolverOk::new(Err(NoSolution::ParityMismatch), Stats::new()));
    }

    Ok(search(&model, print_status))
}

fn search(model: &SearchModel, print_status: bool) -> SolverOk {
    debug!("Search called");

    let mut stats = Stats::new();

    let mut to_visit = BinaryHeap::new();
    let mut best_g: FnvHashMap<Board, i32> = FnvHashMap::default();
    let mut prevs: FnvHashMap<Board, Board> = FnvHashMap::default();
    let mut next_order = 0;

    let initial = model.initial().clone();
    let start = SearchNode::new(initial.clone(), 0, model.heuristic(&initial), next_order);
    stats.add_created(&start);
    best_g.insert(initial, 0);
    to_visit.push(Reverse(start));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        // a strictly better path to this board was queued after this node
        if cur_node.dist > best_g[&cur_node.board] {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if cur_node.board == *model.goal() {
            // the heuristic never overestimates, so the first pop of the
            // goal is already at the optimal distance
            debug!("Solved, backtracking path");
            return SolverOk::new(Ok(backtrack_path(&prevs, &cur_node.board)), stats);
        }

        for neighbor in model.successors(&cur_node.board) {
            let dist = cur_node.dist + 1;
            if let Some(&g) = best_g.get(&neighbor) {
                if g <= dist {
                    continue;
                }
            }
            best_g.insert(neighbor.clone(), dist);
            prevs.insert(neighbor.clone(), cur_node.board.clone());

            next_order += 1;
            let h = model.heuristic(&neighbor);
            let next_node = SearchNode::new(neighbor, dist, h, next_order);
            stats.add_created(&next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    // the whole reachable component was explored - the input must have
    // bypassed the parity guard (e.g. mismatched tile sets)
    SolverOk::new(Err(NoSolution::Exhausted), stats)
}

fn backtrack_path(prevs: &FnvHashMap<Board, Board>, final_board: &Board) -> Vec<Board> {
    let mut ret = Vec::new();
    let mut board = final_board;
    loop {
        ret.push(board.clone());
        match prevs.get(board) {
            Some(prev) => board = prev,
            None => {
                ret.reverse();
                return ret;
            }
        }
    }
}
