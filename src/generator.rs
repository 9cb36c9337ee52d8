//! # Batch driver
//!
//! Owns the validated configuration and the single random stream shared by
//! every instance of a batch. Instance `n` therefore depends on all draws made
//! for instances `0..n`; a batch is reproducible as a whole from its seed.

use crate::citygen::{constructive, random, unsat};
use crate::config::{GeneratorConfig, Mode};
use crate::error::Result;
use crate::instance::Instance;
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

pub struct Generator {
    config: GeneratorConfig,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Generator {
    /// Validates `config` and seeds the stream. Without an explicit seed one
    /// is drawn from the OS so that it can still be logged and replayed.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("generator: mode={:?} seed={seed}", config.mode);
        Ok(Self {
            config,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the next instance with the configured strategy.
    pub fn generate(&mut self) -> Result<Instance> {
        let instance = match self.config.mode {
            Mode::Constructive => constructive::generate(&self.config, &mut self.rng),
            Mode::Unsat => unsat::generate(&self.config, &mut self.rng),
            Mode::Random => random::generate(&self.config, &mut self.rng),
        }?;
        log::info!(
            "generator: {}x{} lines={} popular={} label={:?}",
            instance.width,
            instance.height,
            instance.lines.len(),
            instance.popular.len(),
            instance.satisfiability
        );
        Ok(instance)
    }

    /// Builds `count` instances, stopping at the first failure.
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<Instance>> {
        (0..count).map(|_| self.generate()).collect()
    }
}
