use crate::error::{GenError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Construction strategy.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every line is routed, so the instance is solvable.
    #[default]
    Constructive,
    /// K-1 routed lines plus one endpoint pair that cannot be connected.
    Unsat,
    /// Endpoints sampled without any routing.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid width N (columns).
    pub width: usize,
    /// Grid height M (rows).
    pub height: usize,
    /// Number of lines K.
    pub lines: usize,
    /// Turn budget J per line.
    pub max_turns: usize,
    /// Number of popular cells P.
    #[serde(default)]
    pub popular: usize,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            lines: 3,
            max_turns: 2,
            popular: 0,
            mode: Mode::Constructive,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| GenError::invalid_config(e.to_string()))
    }

    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    /// Rejects dimensions the generator cannot work with and requests that
    /// could never fit, before any randomness is consumed.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GenError::invalid_config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.mode == Mode::Unsat && self.lines == 0 {
            return Err(GenError::invalid_config(
                "unsat mode needs at least one line",
            ));
        }
        let needed = 2 * self.lines + self.popular;
        if needed > self.num_cells() {
            return Err(GenError::InsufficientCapacity {
                what: "endpoints and popular cells",
                needed,
                available: self.num_cells(),
            });
        }
        Ok(())
    }
}
