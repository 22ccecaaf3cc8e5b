use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use separator::Separatable;

use crate::board::Board;

/// Per-depth bookkeeping of how much work the search did.
#[derive(PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<i32>, node: &SearchNode) -> bool {
        let mut ret = false;

        // while because depths might be skipped - a node queued at one depth
        // can be superseded before it is ever popped
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(
            f,
            "total created: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique states visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Duplicates"
        )?;
        for depth in 0..self.created_states.len() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                depth,
                self.created_states[depth].separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
            )?;
        }
        Ok(())
    }
}

/// A queued board: distance from the start, cached heuristic and the
/// discovery order used to break f-score ties first-in-first-out.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    pub dist: i32,
    pub h: i32,
    order: u64,
}

impl SearchNode {
    pub fn new(board: Board, dist: i32, h: i32, order: u64) -> Self {
        SearchNode {
            board,
            dist,
            h,
            order,
        }
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-first on (f-score, discovery order); the search wraps nodes in
        // `Reverse` so the max-heap pops the lowest f-score, FIFO among equals
        (self.dist + self.h, self.order).cmp(&(other.dist + other.h, other.order))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}
