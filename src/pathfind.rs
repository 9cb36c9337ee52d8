//! # Turn-constrained pathfinding
//!
//! Breadth-first search over `(cell, heading, turns used)` states. The start
//! cell is seeded once per heading with zero turns, so the first move is never
//! charged; every later change of heading costs one turn. Because all moves
//! have unit cost, the first time the end cell is dequeued the walk is a
//! shortest admissible one, and a shortest admissible walk never revisits a
//! cell (cutting out a loop removes at least as many turns as it can add).
//!
//! States are dequeued in order of distance, so a state is only worth
//! expanding when it uses strictly fewer turns than every earlier state with
//! the same cell and heading. Memory is one slot per `(cell, heading)` plus
//! the states actually enqueued, independent of the turn budget.

use crate::grid::{Cell, Direction, Grid};
use std::collections::VecDeque;

const ROOT: usize = usize::MAX;

/// One enqueued state and the arena index of the state it was reached from.
#[derive(Debug, Clone, Copy)]
struct Node {
    cell: usize,
    heading: Direction,
    turns: usize,
    parent: usize,
}

/// Minimum number of turns of any path between two distinct cells on an
/// empty grid.
pub fn min_turns(a: Cell, b: Cell) -> usize {
    if a.shares_axis(b) { 0 } else { 1 }
}

/// Finds a shortest path from `start` to `end` with at most `max_turns`
/// turns, using only free cells of `grid` (plus `end` itself).
///
/// Returns the full cell sequence including both endpoints, or `None` when no
/// admissible path exists.
pub fn find_path(grid: &Grid, start: Cell, end: Cell, max_turns: usize) -> Option<Vec<Cell>> {
    if !grid.contains(start) || !grid.contains(end) {
        return None;
    }
    if start == end {
        return Some(vec![start]);
    }

    let slot = |cell: usize, heading: Direction| cell * 4 + heading.index();
    let mut best_turns = vec![usize::MAX; grid.num_cells() * 4];
    let mut nodes: Vec<Node> = Vec::new();
    let mut queue = VecDeque::new();

    let start_index = grid.index(start);
    for heading in Direction::ALL {
        best_turns[slot(start_index, heading)] = 0;
        queue.push_back(nodes.len());
        nodes.push(Node {
            cell: start_index,
            heading,
            turns: 0,
            parent: ROOT,
        });
    }

    while let Some(id) = queue.pop_front() {
        let node = nodes[id];
        let cell = grid.cell_at(node.cell);
        if cell == end {
            log::trace!(
                "pathfind: found start={start:?} end={end:?} states={}",
                nodes.len()
            );
            return Some(reconstruct(grid, &nodes, id));
        }
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(cell, dir) else {
                continue;
            };
            if next != end && !grid.is_free(next) {
                continue;
            }
            let turns = if dir == node.heading {
                node.turns
            } else {
                node.turns + 1
            };
            if turns > max_turns {
                continue;
            }
            let next_index = grid.index(next);
            let best = &mut best_turns[slot(next_index, dir)];
            if turns >= *best {
                continue;
            }
            *best = turns;
            queue.push_back(nodes.len());
            nodes.push(Node {
                cell: next_index,
                heading: dir,
                turns,
                parent: id,
            });
        }
    }
    log::trace!(
        "pathfind: exhausted start={start:?} end={end:?} states={}",
        nodes.len()
    );
    None
}

fn reconstruct(grid: &Grid, nodes: &[Node], mut id: usize) -> Vec<Cell> {
    let mut path = vec![grid.cell_at(nodes[id].cell)];
    while nodes[id].parent != ROOT {
        id = nodes[id].parent;
        path.push(grid.cell_at(nodes[id].cell));
    }
    path.reverse();
    path
}
