//! # Forced-unsat instances
//!
//! K-1 lines are routed exactly as in the constructive strategy, then one
//! more endpoint pair is chosen so that no line can ever connect it.
//!
//! Lines are cell-disjoint and every line occupies its own endpoints, so in
//! any solution the extra pair has to avoid the endpoints of all other lines.
//! A pair is therefore blocked when no path within J turns exists on a grid
//! where only those endpoints are walls. The routed paths of the other lines
//! are not walls here: a solver may route them differently.
//!
//! With J = 0 only pairs sharing neither row nor column are drawn. For
//! J >= 1 an empty grid joins any two cells with one turn, so the walls do
//! all the work and a lone pair (K = 1) can never be forced.

use crate::citygen::{placer, popular};
use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::grid::{Cell, Grid};
use crate::instance::{Instance, Line, Satisfiability};
use crate::pathfind::{find_path, min_turns};
use rand::prelude::*;

pub const MAX_UNSAT_ATTEMPTS: usize = 200;

pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Instance> {
    let mut grid = Grid::new(config.width, config.height);
    let routed = config.lines.saturating_sub(1);
    let mut lines = placer::place_lines(&mut grid, routed, config.max_turns, rng)?;

    let (start, end) = sample_blocked_pair(&grid, &lines, config.max_turns, rng)?;
    grid.claim(&[start, end]);
    let position = rng.random_range(0..=lines.len());
    lines.insert(position, Line::unrouted(start, end));

    let popular = popular::select(&grid, config.popular, rng)?;
    Ok(Instance {
        width: config.width,
        height: config.height,
        max_turns: config.max_turns,
        lines,
        popular,
        satisfiability: Satisfiability::Unsat,
    })
}

/// Grid whose only claimed cells are the endpoints of `lines`.
fn endpoint_walls(width: usize, height: usize, lines: &[Line]) -> Grid {
    let mut walls = Grid::new(width, height);
    for line in lines {
        walls.claim(&[line.start, line.end]);
    }
    walls
}

/// No route between `a` and `b` exists in any solution of the instance.
/// `walls` marks the endpoints of the other lines.
pub fn is_blocked_pair(walls: &Grid, a: Cell, b: Cell, max_turns: usize) -> bool {
    if a == b {
        return false;
    }
    if min_turns(a, b) > max_turns {
        return true;
    }
    find_path(walls, a, b, max_turns).is_none()
}

fn sample_blocked_pair<R: Rng>(
    grid: &Grid,
    lines: &[Line],
    max_turns: usize,
    rng: &mut R,
) -> Result<(Cell, Cell)> {
    let free = grid.free_cells();
    if free.len() < 2 {
        log::warn!("unsat: no room for the blocked pair, free={}", free.len());
        return Err(GenError::InsufficientCapacity {
            what: "unsat endpoints",
            needed: 2,
            available: free.len(),
        });
    }
    let walls = endpoint_walls(grid.width(), grid.height(), lines);

    for attempt in 0..MAX_UNSAT_ATTEMPTS {
        let a = free[rng.random_range(0..free.len())];
        let b = free[rng.random_range(0..free.len())];
        // At J = 0 the pair never shares a row or column, walls or not.
        if max_turns == 0 && a.shares_axis(b) {
            continue;
        }
        if is_blocked_pair(&walls, a, b, max_turns) {
            log::debug!("unsat: pair a={a:?} b={b:?} attempt={attempt}");
            return Ok((a, b));
        }
    }
    log::warn!("unsat: exhausted {MAX_UNSAT_ATTEMPTS} attempts for J={max_turns}");
    Err(GenError::UnsatConstructionExhausted {
        attempts: MAX_UNSAT_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use rand_chacha::ChaCha20Rng;

    fn config(width: usize, height: usize, lines: usize, max_turns: usize) -> GeneratorConfig {
        GeneratorConfig {
            width,
            height,
            lines,
            max_turns,
            popular: 0,
            mode: Mode::Unsat,
            seed: None,
        }
    }

    #[test]
    fn zero_turn_pair_shares_no_axis() {
        for seed in 0..20 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let instance = generate(&config(8, 8, 4, 0), &mut rng).unwrap();
            assert_eq!(instance.lines.len(), 4);
            assert_eq!(instance.satisfiability, Satisfiability::Unsat);
            let blocked: Vec<&Line> =
                instance.lines.iter().filter(|l| l.path.is_none()).collect();
            assert_eq!(blocked.len(), 1);
            let pair = blocked[0];
            assert_ne!(pair.start.row, pair.end.row);
            assert_ne!(pair.start.col, pair.end.col);
            for line in instance.lines.iter().filter(|l| l.path.is_some()) {
                let path = line.path.as_ref().unwrap();
                assert!(!path.contains(&pair.start));
                assert!(!path.contains(&pair.end));
            }
        }
    }

    #[test]
    fn single_line_is_just_the_pair() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let instance = generate(&config(5, 5, 1, 0), &mut rng).unwrap();
        assert_eq!(instance.lines.len(), 1);
        assert!(instance.lines[0].path.is_none());
    }

    #[test]
    fn single_row_cannot_be_forced_at_zero_turns() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(
            generate(&config(6, 1, 1, 0), &mut rng),
            Err(GenError::UnsatConstructionExhausted {
                attempts: MAX_UNSAT_ATTEMPTS,
            })
        );
    }

    #[test]
    fn lone_pair_cannot_be_forced_with_turns() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(
            generate(&config(5, 5, 1, 2), &mut rng),
            Err(GenError::UnsatConstructionExhausted {
                attempts: MAX_UNSAT_ATTEMPTS,
            })
        );
    }

    #[test]
    fn typical_configs_with_turns_succeed() {
        for (width, height, lines, max_turns) in [(10, 10, 5, 1)] {
            for seed in 0..20 {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                let instance = generate(&config(width, height, lines, max_turns), &mut rng)
                    .unwrap_or_else(|e| panic!("{width}x{height} seed {seed}: {e}"));
                assert_eq!(instance.lines.len(), lines);

                let (pair, others): (Vec<&Line>, Vec<&Line>) =
                    instance.lines.iter().partition(|l| l.path.is_none());
                assert_eq!(pair.len(), 1);
                let others: Vec<Line> = others.into_iter().cloned().collect();
                let walls = endpoint_walls(width, height, &others);
                assert_eq!(find_path(&walls, pair[0].start, pair[0].end, max_turns), None);
            }
        }
    }

    #[test]
    fn walled_in_corner_blocks_any_budget() {
        // Corner (0,0) is walled in by two endpoints.
        let mut walls = Grid::new(4, 4);
        walls.claim(&[Cell::new(0, 1), Cell::new(1, 0)]);
        let corner = Cell::new(0, 0);
        assert!(is_blocked_pair(&walls, corner, Cell::new(3, 3), 5));
        assert!(is_blocked_pair(&walls, Cell::new(0, 3), corner, 5));
        assert!(!is_blocked_pair(&walls, Cell::new(2, 2), Cell::new(3, 3), 5));
        assert!(is_blocked_pair(&walls, Cell::new(2, 2), Cell::new(3, 3), 0));
        assert!(!is_blocked_pair(&walls, Cell::new(2, 2), Cell::new(2, 3), 0));
    }

    #[test]
    fn straight_pair_blocked_by_endpoint_between() {
        let mut walls = Grid::new(5, 5);
        walls.claim(&[Cell::new(2, 2)]);
        assert!(is_blocked_pair(&walls, Cell::new(2, 0), Cell::new(2, 4), 0));
        assert!(!is_blocked_pair(&walls, Cell::new(2, 0), Cell::new(2, 4), 2));
        assert!(!is_blocked_pair(&walls, Cell::new(1, 0), Cell::new(1, 4), 0));
    }

    #[test]
    fn routed_paths_are_not_walls() {
        // The routed line cuts the grid in two, but only its endpoints are
        // fixed in a solution.
        let path: Vec<Cell> = (0..4).map(|row| Cell::new(row, 1)).collect();
        let walls = endpoint_walls(4, 4, &[Line::routed(path)]);
        assert!(!is_blocked_pair(&walls, Cell::new(1, 0), Cell::new(2, 3), 1));
        assert!(is_blocked_pair(&walls, Cell::new(0, 0), Cell::new(3, 2), 1));
        assert!(!is_blocked_pair(&walls, Cell::new(0, 0), Cell::new(3, 2), 2));
    }

    #[test]
    fn sampling_finds_the_walled_in_corner() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let mut grid = Grid::new(4, 4);
        let lines = vec![
            Line::routed(vec![Cell::new(0, 1), Cell::new(0, 2)]),
            Line::routed(vec![Cell::new(1, 0), Cell::new(2, 0)]),
        ];
        for line in &lines {
            grid.claim(line.path.as_ref().unwrap());
        }
        let (a, b) = sample_blocked_pair(&grid, &lines, 3, &mut rng).unwrap();
        assert!(a == Cell::new(0, 0) || b == Cell::new(0, 0));
        assert!(a.manhattan(b) > 1);
    }
}
