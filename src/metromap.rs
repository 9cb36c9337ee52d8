//! # `.metromap` solutions
//!
//! One row per line, listing the moves from its start as `R`/`L`/`D`/`U`
//! (R: x+1, L: x-1, D: y+1, U: y-1) and ending with `0`. A file whose only
//! row is `0` declares the problem unsatisfiable.

use crate::city::CityProblem;
use crate::error::{GenError, Result};
use crate::grid::{Cell, Direction, count_turns};
use crate::instance::Instance;
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metromap {
    Unsat,
    Routes(Vec<Vec<Direction>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// The solution claims unsatisfiability, which cannot be checked here.
    DeclaredUnsat,
    Rejected(String),
}

fn moves_of(path: &[Cell]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|w| Direction::between(w[0], w[1]))
        .collect()
}

fn render_row(moves: &[Direction]) -> String {
    moves
        .iter()
        .map(|d| d.symbol().to_string())
        .chain(std::iter::once("0".to_string()))
        .join(" ")
}

pub fn render(map: &Metromap) -> String {
    match map {
        Metromap::Unsat => "0\n".to_string(),
        Metromap::Routes(routes) => routes.iter().map(|r| render_row(r) + "\n").collect(),
    }
}

/// The committed paths of an instance as a solution, if every line is routed.
///
/// Popular cells are kept off every committed path, so for scenario 2 the
/// paths never cover them and there is no witness.
pub fn witness(instance: &Instance) -> Option<Metromap> {
    if !instance.popular.is_empty() || !instance.is_fully_routed() {
        return None;
    }
    let routes = instance
        .lines
        .iter()
        .filter_map(|l| l.path.as_deref())
        .map(moves_of)
        .collect();
    Some(Metromap::Routes(routes))
}

pub fn render_witness(instance: &Instance) -> Option<String> {
    witness(instance).map(|m| render(&m))
}

/// Parses a solution for a problem with `k` lines. For any `k > 0` a lone
/// `0` row is read as an unsat declaration, even when `k == 1` would also
/// allow it as an empty route.
pub fn parse(input: &str, k: usize) -> Result<Metromap> {
    let rows: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if rows == ["0"] && k > 0 {
        return Ok(Metromap::Unsat);
    }
    if rows.len() != k {
        return Err(GenError::parse(format!(
            "expected {k} route rows, got {}",
            rows.len()
        )));
    }
    let mut routes = Vec::with_capacity(k);
    for (i, row) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        let Some((&"0", moves)) = tokens.split_last() else {
            return Err(GenError::parse(format!("route {i} is not terminated by 0")));
        };
        let moves = moves
            .iter()
            .map(|&t| {
                Direction::from_symbol(t)
                    .ok_or_else(|| GenError::parse(format!("route {i}: bad move {t:?}")))
            })
            .collect::<Result<Vec<_>>>()?;
        routes.push(moves);
    }
    Ok(Metromap::Routes(routes))
}

/// Replays every route and checks it against the problem's rules.
pub fn verify(problem: &CityProblem, map: &Metromap) -> Verdict {
    let routes = match map {
        Metromap::Unsat => return Verdict::DeclaredUnsat,
        Metromap::Routes(routes) => routes,
    };
    if routes.len() != problem.endpoints.len() {
        return Verdict::Rejected(format!(
            "{} routes for {} lines",
            routes.len(),
            problem.endpoints.len()
        ));
    }

    let index = |c: Cell| c.row * problem.width + c.col;
    let mut owner: Vec<Option<usize>> = vec![None; problem.width * problem.height];
    for (i, &(start, end)) in problem.endpoints.iter().enumerate() {
        for c in [start, end] {
            if let Some(j) = owner[index(c)].filter(|&j| j != i) {
                return Verdict::Rejected(format!("lines {j} and {i} share endpoint {c:?}"));
            }
            owner[index(c)] = Some(i);
        }
    }

    for (i, (moves, &(start, end))) in routes.iter().zip(&problem.endpoints).enumerate() {
        let mut path = vec![start];
        let mut cur = start;
        for &dir in moves {
            let Some(next) = cur.step(dir).filter(|&c| problem.contains(c)) else {
                return Verdict::Rejected(format!("line {i} leaves the grid at {cur:?}"));
            };
            if path.contains(&next) {
                return Verdict::Rejected(format!("line {i} revisits {next:?}"));
            }
            let slot = &mut owner[index(next)];
            match *slot {
                Some(j) if j != i => {
                    return Verdict::Rejected(format!("line {i} crosses line {j} at {next:?}"));
                }
                _ => *slot = Some(i),
            }
            path.push(next);
            cur = next;
        }
        if cur != end {
            return Verdict::Rejected(format!("line {i} ends at {cur:?}, expected {end:?}"));
        }
        let turns = count_turns(&path);
        if turns > problem.max_turns {
            return Verdict::Rejected(format!(
                "line {i} makes {turns} turns, limit {}",
                problem.max_turns
            ));
        }
    }

    if problem.scenario == 2 {
        if let Some(c) = problem.popular.iter().find(|&&c| owner[index(c)].is_none()) {
            return Verdict::Rejected(format!("popular cell {c:?} is not covered"));
        }
    }
    Verdict::Accepted
}
