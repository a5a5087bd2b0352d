//! Kumo core library.
//!
//! Synthesizes random graphs for exercising community-detection algorithms
//! and serializes them to a JSON document of `vertices` and `edges`. Two
//! generators are provided:
//!
//! - [`generate_cycle`] builds a single closed cycle visiting a uniformly
//!   random permutation of the vertices.
//! - [`generate_community`] builds a two-block stochastic block model:
//!   vertices are split into two communities at random and edges are sampled
//!   with separate intra- and inter-community probabilities.
//!
//! Both generators construct their random source per invocation from an
//! optional seed, so a fixed seed yields byte-identical output.

mod document;
mod error;
mod generate;

pub use crate::{
    document::{DocumentError, GraphDocument},
    error::GenerateError,
    generate::{
        CommunityConfig, CycleConfig, DEFAULT_INTER_PROBABILITY, DEFAULT_INTRA_PROBABILITY,
        DEFAULT_VERTEX_COUNT, generate_community, generate_cycle,
    },
};
