use crate::grid::{Cell, count_turns};
use serde::{Deserialize, Serialize};

/// Solvability label attached by the strategy that built an instance. It is
/// bookkeeping for the generator and is never written into `.city` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Satisfiability {
    Sat,
    Unsat,
    Unknown,
}

/// One metro line. `path` is the committed route including both endpoints,
/// or `None` for an endpoint-only spec (random and forced-unsat lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub start: Cell,
    pub end: Cell,
    pub path: Option<Vec<Cell>>,
}

impl Line {
    pub fn routed(path: Vec<Cell>) -> Self {
        Self {
            start: path[0],
            end: path[path.len() - 1],
            path: Some(path),
        }
    }

    pub fn unrouted(start: Cell, end: Cell) -> Self {
        Self {
            start,
            end,
            path: None,
        }
    }

    pub fn turns(&self) -> Option<usize> {
        self.path.as_deref().map(count_turns)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub width: usize,
    pub height: usize,
    pub max_turns: usize,
    pub lines: Vec<Line>,
    pub popular: Vec<Cell>,
    pub satisfiability: Satisfiability,
}

impl Instance {
    /// `1` for plain instances, `2` when popular cells are present.
    pub fn scenario(&self) -> u8 {
        if self.popular.is_empty() { 1 } else { 2 }
    }

    /// Every line carries a committed path.
    pub fn is_fully_routed(&self) -> bool {
        self.lines.iter().all(|l| l.path.is_some())
    }
}
