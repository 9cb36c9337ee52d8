//! Solvable-by-construction instances: every line is routed on a shared grid,
//! so the committed paths are a witness solution.

use crate::citygen::{placer, popular};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::instance::{Instance, Satisfiability};
use rand::prelude::*;

pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Instance> {
    let mut grid = Grid::new(config.width, config.height);
    let lines = placer::place_lines(&mut grid, config.lines, config.max_turns, rng)?;
    let popular = popular::select(&grid, config.popular, rng)?;
    Ok(Instance {
        width: config.width,
        height: config.height,
        max_turns: config.max_turns,
        lines,
        popular,
        satisfiability: Satisfiability::Sat,
    })
}
