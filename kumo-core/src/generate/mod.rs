//! Random graph generators.
//!
//! Each generator takes a configuration struct and returns a
//! [`GraphDocument`](crate::GraphDocument). The random source is a
//! [`SmallRng`] constructed per invocation: seeded from the configuration
//! when a seed is supplied, from process entropy otherwise. No global RNG
//! state is consulted, so fixed-seed runs are reproducible.

mod community;
mod cycle;

pub use community::generate_community;
pub use cycle::generate_cycle;

use rand::{SeedableRng, rngs::SmallRng};

use crate::error::GenerateError;

/// Default number of vertices generated by either generator.
pub const DEFAULT_VERTEX_COUNT: usize = 1000;
/// Default intra-community edge probability.
pub const DEFAULT_INTRA_PROBABILITY: f64 = 0.01;
/// Default inter-community edge probability.
pub const DEFAULT_INTER_PROBABILITY: f64 = 0.001;

/// Configuration for the random cycle generator.
#[derive(Clone, Debug)]
pub struct CycleConfig {
    /// Number of vertices in the cycle.
    pub vertex_count: usize,
    /// RNG seed for reproducibility; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            seed: None,
        }
    }
}

/// Configuration for the two-block community graph generator.
#[derive(Clone, Debug)]
pub struct CommunityConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Edge probability between two vertices of community A.
    pub intra_probability_a: f64,
    /// Edge probability between two vertices of community B.
    pub intra_probability_b: f64,
    /// Edge probability between vertices of different communities.
    pub inter_probability: f64,
    /// RNG seed for reproducibility; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            intra_probability_a: DEFAULT_INTRA_PROBABILITY,
            intra_probability_b: DEFAULT_INTRA_PROBABILITY,
            inter_probability: DEFAULT_INTER_PROBABILITY,
            seed: None,
        }
    }
}

pub(super) fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Vertex label for a zero-based index: the string form of `index + 1`.
pub(super) fn vertex_label(index: usize) -> String {
    index.saturating_add(1).to_string()
}

pub(super) fn validate_probability(
    parameter: &'static str,
    value: f64,
) -> Result<(), GenerateError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerateError::InvalidProbability { parameter, value })
    }
}
