//! Checks the solver against an independent breadth-first oracle on 3x3
//! boards: breadth-first distances are optimal by construction, so they pin
//! down both the returned path lengths and the heuristic's admissibility.

use std::collections::{HashMap, VecDeque};

use npuzzle_solver::board::Board;
use npuzzle_solver::puzzle::Puzzle;
use npuzzle_solver::solver::model::SearchModel;
use npuzzle_solver::Solve;

fn goal_3x3() -> Board {
    Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]])
}

/// Breadth-first distances from `goal` to every board within `max_depth`.
/// Slides are reversible, so distance from the goal equals distance to it.
fn bfs_distances(goal: &Board, max_depth: i32) -> HashMap<Board, i32> {
    let model = SearchModel::new(goal, goal).unwrap();

    let mut dists = HashMap::new();
    let mut queue = VecDeque::new();
    dists.insert(goal.clone(), 0);
    queue.push_back(goal.clone());

    while let Some(board) = queue.pop_front() {
        let dist = dists[&board];
        if dist == max_depth {
            continue;
        }
        for neighbor in model.successors(&board) {
            if !dists.contains_key(&neighbor) {
                dists.insert(neighbor.clone(), dist + 1);
                queue.push_back(neighbor);
            }
        }
    }
    dists
}

fn is_single_slide(a: &Board, b: &Board) -> bool {
    let (from, to) = match (a.blank_pos(), b.blank_pos()) {
        (Some(from), Some(to)) => (from, to),
        _ => return false,
    };
    from.dist(to) == 1 && a.swap(from, to) == *b
}

#[test]
fn paths_are_optimal_and_well_formed() {
    let goal = goal_3x3();
    let dists = bfs_distances(&goal, 14);

    let mut checked = 0;
    for (i, (board, &dist)) in dists.iter().enumerate() {
        // sampling keeps the runtime sane - the component within depth 14
        // has a few thousand boards
        if i % 97 != 0 {
            continue;
        }
        checked += 1;

        let puzzle = Puzzle::new(board.clone(), goal.clone());
        let solver_ok = puzzle.solve(false).unwrap();
        let path = solver_ok.path_states.unwrap();

        assert_eq!(path.len() as i32 - 1, dist, "suboptimal for\n{:?}", board);
        assert_eq!(path[0], *board);
        assert_eq!(*path.last().unwrap(), goal);
        for pair in path.windows(2) {
            assert!(is_single_slide(&pair[0], &pair[1]));
        }
    }
    assert!(checked > 10);
}

#[test]
fn heuristic_is_admissible() {
    let goal = goal_3x3();
    let model = SearchModel::new(&goal, &goal).unwrap();

    let dists = bfs_distances(&goal, 12);
    for (board, &dist) in dists.iter() {
        assert!(
            model.heuristic(board) <= dist,
            "heuristic overestimates for\n{:?}",
            board
        );
    }
}

#[test]
fn oracle_agrees_on_two_slide_example() {
    let initial = Board::from_rows(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]);
    let dists = bfs_distances(&goal_3x3(), 4);
    assert_eq!(dists[&initial], 2);

    let solver_ok = Puzzle::new(initial, goal_3x3()).solve(false).unwrap();
    assert_eq!(solver_ok.move_cnt(), Some(2));
}

#[test]
fn solver_works_against_scrambled_goals() {
    // the goal is an arbitrary reachable configuration, not the ascending
    // layout - distances still come from a breadth-first sweep around it
    let goal = Board::from_rows(&[vec![4, 1, 3], vec![7, 0, 2], vec![5, 8, 6]]);
    let dists = bfs_distances(&goal, 6);

    for (i, (board, &dist)) in dists.iter().enumerate() {
        if i % 53 != 0 {
            continue;
        }
        let solver_ok = Puzzle::new(board.clone(), goal.clone()).solve(false).unwrap();
        assert_eq!(solver_ok.path_states.unwrap().len() as i32 - 1, dist);
    }
}
