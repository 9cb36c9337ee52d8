//! Endpoint sampling with no routing at all. Solvability is unknown.

use crate::citygen::popular;
use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::grid::{Cell, Grid};
use crate::instance::{Instance, Line, Satisfiability};
use rand::prelude::*;

/// Samples 2K distinct cells and pairs them up in sampling order.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Instance> {
    let mut grid = Grid::new(config.width, config.height);
    let needed = 2 * config.lines;
    if needed > grid.num_cells() {
        return Err(GenError::InsufficientCapacity {
            what: "random endpoints",
            needed,
            available: grid.num_cells(),
        });
    }
    let cells: Vec<Cell> = rand::seq::index::sample(rng, grid.num_cells(), needed)
        .into_iter()
        .map(|i| grid.cell_at(i))
        .collect();
    grid.claim(&cells);
    let lines = cells
        .chunks_exact(2)
        .map(|pair| Line::unrouted(pair[0], pair[1]))
        .collect();
    let popular = popular::select(&grid, config.popular, rng)?;
    Ok(Instance {
        width: config.width,
        height: config.height,
        max_turns: config.max_turns,
        lines,
        popular,
        satisfiability: Satisfiability::Unknown,
    })
}
