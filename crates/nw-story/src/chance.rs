//! Randomness source for probabilistic transitions.
//!
//! Every probabilistic decision draws one uniform value in `[0, 1)` and
//! succeeds when the draw falls below the scene's threshold. The source is
//! passed into the scene graph explicitly, so a playthrough can be driven
//! by a seeded generator or by a fixed script of draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws.
pub trait Chance {
    /// Draw a fresh value in `[0, 1)`.
    fn draw(&mut self) -> f64;

    /// Draw once and report whether the value fell below `threshold`.
    fn roll(&mut self, threshold: f64) -> bool {
        let draw = self.draw();
        let success = draw < threshold;
        tracing::debug!(threshold, draw, success, "chance roll");
        success
    }
}

/// The standard per-playthrough generator.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
}

impl SessionRng {
    /// Seed deterministically.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Chance for SessionRng {
    fn draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A fixed sequence of draws, repeated once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedChance {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedChance {
    /// Create a script. An empty script always draws `0.0`.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }
}

impl Chance for ScriptedChance {
    fn draw(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}
