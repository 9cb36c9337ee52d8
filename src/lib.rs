// # metrogen: test-instance generator for the metro line planning puzzle
//
// Given an N x M grid, K lines with a turn budget J and optionally P popular
// cells, this crate builds instances that are solvable by construction,
// deliberately unsolvable, or plainly random, and reads/writes the `.city`
// problem and `.metromap` solution formats around them.

pub mod error;

pub use error::{GenError, Result};

/// Generator configuration and its validation.
pub mod config;

/// Cells, headings and the append-only occupancy grid.
pub mod grid;

/// Turn-constrained shortest paths.
pub mod pathfind;

/// Lines and finished instances.
pub mod instance;

/// Construction strategies.
pub mod citygen {
    /// Routed, solvable instances.
    pub mod constructive;
    /// Sampling and committing single lines.
    pub mod placer;
    /// Popular cells for scenario 2.
    pub mod popular;
    /// Unrouted random endpoints.
    pub mod random;
    /// Instances with one provably unconnectable pair.
    pub mod unsat;
}

/// Seeded batch driver over the strategies.
pub mod generator;

/// The `.city` problem format.
pub mod city;

/// The `.metromap` solution format and its checker.
pub mod metromap;

/// SVG rendering of instances.
pub mod svg;

/// stderr logging for the binaries.
pub mod logging;
