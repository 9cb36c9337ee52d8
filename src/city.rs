//! # `.city` problem files
//!
//! ```text
//! <scenario>
//! N M K J [P]
//! sx sy ex ey        (K rows, x = column, y = row)
//! x1 y1 x2 y2 ...    (scenario 2 only, P popular cells)
//! ```
//!
//! Blank lines are ignored when reading.

use crate::error::{GenError, Result};
use crate::grid::Cell;
use crate::instance::Instance;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A problem as seen by a solver: endpoints only, no routes and no label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityProblem {
    pub scenario: u8,
    pub width: usize,
    pub height: usize,
    pub max_turns: usize,
    pub endpoints: Vec<(Cell, Cell)>,
    pub popular: Vec<Cell>,
}

impl From<&Instance> for CityProblem {
    fn from(instance: &Instance) -> Self {
        Self {
            scenario: instance.scenario(),
            width: instance.width,
            height: instance.height,
            max_turns: instance.max_turns,
            endpoints: instance.lines.iter().map(|l| (l.start, l.end)).collect(),
            popular: instance.popular.clone(),
        }
    }
}

impl CityProblem {
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }
}

fn xy(cell: Cell) -> String {
    format!("{} {}", cell.col, cell.row)
}

pub fn render(instance: &Instance) -> String {
    render_problem(&CityProblem::from(instance))
}

pub fn render_problem(problem: &CityProblem) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", problem.scenario));
    out.push_str(&format!(
        "{} {} {} {}",
        problem.width,
        problem.height,
        problem.endpoints.len(),
        problem.max_turns
    ));
    if problem.scenario == 2 {
        out.push_str(&format!(" {}", problem.popular.len()));
    }
    out.push('\n');
    for &(start, end) in &problem.endpoints {
        out.push_str(&format!("{} {}\n", xy(start), xy(end)));
    }
    if problem.scenario == 2 && !problem.popular.is_empty() {
        out.push_str(&problem.popular.iter().map(|&c| xy(c)).join(" "));
        out.push('\n');
    }
    out
}

fn numbers<T: FromStr>(row: &str, what: &str) -> Result<Vec<T>> {
    row.split_whitespace()
        .map(|tok| {
            tok.parse::<T>()
                .map_err(|_| GenError::parse(format!("bad {what} token {tok:?}")))
        })
        .collect()
}

pub fn parse(input: &str) -> Result<CityProblem> {
    let mut rows = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut next_row = |what: &str| {
        rows.next()
            .ok_or_else(|| GenError::parse(format!("missing {what} row")))
    };

    let scenario = numbers::<u8>(next_row("scenario")?, "scenario")?;
    let scenario = match scenario[..] {
        [s @ (1 | 2)] => s,
        _ => return Err(GenError::parse(format!("bad scenario {scenario:?}"))),
    };
    let params = numbers::<usize>(next_row("parameter")?, "parameter")?;
    let (width, height, k, max_turns, p) = match params[..] {
        [n, m, k, j] => (n, m, k, j, 0),
        [n, m, k, j, p] => (n, m, k, j, p),
        _ => {
            return Err(GenError::parse(format!(
                "expected 4 or 5 parameters, got {}",
                params.len()
            )));
        }
    };
    if width == 0 || height == 0 {
        return Err(GenError::parse("grid must be at least 1x1"));
    }
    let in_bounds = |x: usize, y: usize| -> Result<Cell> {
        if x < width && y < height {
            Ok(Cell::new(y, x))
        } else {
            Err(GenError::parse(format!("cell ({x}, {y}) outside {width}x{height}")))
        }
    };

    let mut endpoints = Vec::with_capacity(k);
    for i in 0..k {
        let coords = numbers::<usize>(next_row("line")?, "coordinate")?;
        let [sx, sy, ex, ey] = coords[..] else {
            return Err(GenError::parse(format!("line {i}: expected 4 coordinates")));
        };
        endpoints.push((in_bounds(sx, sy)?, in_bounds(ex, ey)?));
    }

    let mut popular = Vec::with_capacity(p);
    if p > 0 {
        let coords = numbers::<usize>(next_row("popular cell")?, "coordinate")?;
        if coords.len() != 2 * p {
            return Err(GenError::parse(format!(
                "expected {} popular coordinates, got {}",
                2 * p,
                coords.len()
            )));
        }
        for (x, y) in coords.into_iter().tuples() {
            popular.push(in_bounds(x, y)?);
        }
    }

    Ok(CityProblem {
        scenario,
        width,
        height,
        max_turns,
        endpoints,
        popular,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{Line, Satisfiability};

    fn sample() -> Instance {
        Instance {
            width: 5,
            height: 3,
            max_turns: 1,
            lines: vec![
                Line::routed(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]),
                Line::unrouted(Cell::new(2, 4), Cell::new(0, 3)),
            ],
            popular: vec![Cell::new(2, 0), Cell::new(1, 3)],
            satisfiability: Satisfiability::Unsat,
        }
    }

    #[test]
    fn renders_scenario_two() {
        let text = render(&sample());
        assert_eq!(text, "2\n5 3 2 1 2\n0 0 1 1\n4 2 3 0\n0 2 3 1\n");
    }

    #[test]
    fn renders_scenario_one_without_p() {
        let mut instance = sample();
        instance.popular.clear();
        assert_eq!(render(&instance), "1\n5 3 2 1\n0 0 1 1\n4 2 3 0\n");
    }

    #[test]
    fn parses_what_it_renders() {
        let instance = sample();
        let problem = parse(&render(&instance)).unwrap();
        assert_eq!(problem, CityProblem::from(&instance));
    }

    #[test]
    fn tolerates_blank_lines() {
        let problem = parse("\n1\n\n3 3 1 0\n0 0 2 0\n\n").unwrap();
        assert_eq!(problem.endpoints, vec![(Cell::new(0, 0), Cell::new(0, 2))]);
        assert!(problem.popular.is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("").is_err());
        assert!(parse("3\n3 3 0 0\n").is_err());
        assert!(parse("1\n3 3 1\n").is_err());
        assert!(parse("1\n3 3 1 0\n0 0 3 0\n").is_err());
        assert!(parse("1\n3 3 2 0\n0 0 2 0\n").is_err());
        assert!(parse("2\n3 3 0 0 2\n0 0 1\n").is_err());
        assert!(parse("1\n3 x 0 0\n").is_err());
    }
}
