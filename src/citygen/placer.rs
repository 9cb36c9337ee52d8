//! # Line placement
//!
//! Samples endpoint pairs among the free cells and routes them with the
//! turn-constrained pathfinder. The first routable pair is committed to the
//! grid; nothing is claimed on failed attempts.

use crate::error::{GenError, Result};
use crate::grid::Grid;
use crate::instance::Line;
use crate::pathfind::find_path;
use rand::prelude::*;

/// Attempts per line before the whole instance is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 200;

/// Places and commits one line. `line` is only used for diagnostics.
pub fn place_line<R: Rng>(
    grid: &mut Grid,
    max_turns: usize,
    line: usize,
    rng: &mut R,
) -> Result<Line> {
    let free = grid.free_cells();
    if free.len() < 2 {
        log::warn!("placer: no room for line {line}, free={}", free.len());
        return Err(GenError::InsufficientCapacity {
            what: "line endpoints",
            needed: 2,
            available: free.len(),
        });
    }
    for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
        let start = free[rng.random_range(0..free.len())];
        let end = free[rng.random_range(0..free.len())];
        if start == end {
            continue;
        }
        if let Some(path) = find_path(grid, start, end, max_turns) {
            log::debug!(
                "placer: line={line} attempt={attempt} len={} start={start:?} end={end:?}",
                path.len()
            );
            grid.claim(&path);
            return Ok(Line::routed(path));
        }
    }
    log::warn!("placer: line {line} exhausted {MAX_PLACEMENT_ATTEMPTS} attempts");
    Err(GenError::PlacementExhausted {
        line,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Places `count` lines one after another on the shared grid. The first
/// failure aborts; already placed lines are dropped with the error.
pub fn place_lines<R: Rng>(
    grid: &mut Grid,
    count: usize,
    max_turns: usize,
    rng: &mut R,
) -> Result<Vec<Line>> {
    (0..count)
        .map(|line| place_line(grid, max_turns, line, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn committed_line_is_claimed() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut grid = Grid::new(6, 6);
        let line = place_line(&mut grid, 1, 0, &mut rng).unwrap();
        let path = line.path.as_ref().unwrap();
        assert!(path.len() >= 2);
        assert!(line.turns().unwrap() <= 1);
        assert_eq!(grid.num_free(), 36 - path.len());
        assert!(path.iter().all(|&c| !grid.is_free(c)));
    }

    #[test]
    fn lines_are_disjoint() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut grid = Grid::new(12, 12);
        let lines = place_lines(&mut grid, 6, 2, &mut rng).unwrap();
        assert_eq!(lines.len(), 6);
        let mut seen = std::collections::HashSet::new();
        for line in &lines {
            for &c in line.path.as_ref().unwrap() {
                assert!(seen.insert(c), "cell {c:?} used twice");
            }
        }
    }

    #[test]
    fn full_grid_reports_capacity() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let mut grid = Grid::new(2, 1);
        grid.claim(&[Cell::new(0, 0)]);
        assert_eq!(
            place_line(&mut grid, 3, 4, &mut rng),
            Err(GenError::InsufficientCapacity {
                what: "line endpoints",
                needed: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn unreachable_free_cells_exhaust_attempts() {
        // Only the two opposite corners are free and they share no axis.
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut grid = Grid::new(3, 3);
        let blocked: Vec<Cell> = grid
            .cells()
            .filter(|&c| c != Cell::new(0, 0) && c != Cell::new(2, 2))
            .collect();
        grid.claim(&blocked);
        assert_eq!(
            place_line(&mut grid, 4, 2, &mut rng),
            Err(GenError::PlacementExhausted {
                line: 2,
                attempts: MAX_PLACEMENT_ATTEMPTS,
            })
        );
        assert_eq!(grid.num_free(), 2);
    }
}
