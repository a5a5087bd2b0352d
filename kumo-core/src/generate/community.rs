//! Two-block stochastic block model sampling.

use rand::{Rng, rngs::SmallRng};
use tracing::info;

use super::{CommunityConfig, rng_from_seed, validate_probability, vertex_label};
use crate::{document::GraphDocument, error::GenerateError};

/// Generates a two-block community-structured random graph.
///
/// Each vertex joins community A with probability 0.5, otherwise community
/// B, via an independent draw per vertex; the community sizes are themselves
/// random. Every unordered pair within a community is then included as an
/// edge with that community's intra probability, and every cross-community
/// pair with the inter probability. Each inclusion is an independent
/// Bernoulli trial.
///
/// Nothing is guaranteed about the resulting edge count, connectivity, or
/// absence of isolated vertices.
///
/// # Errors
/// Returns [`GenerateError::InvalidProbability`] before generating any data
/// when a probability is non-finite or outside `[0.0, 1.0]`.
pub fn generate_community(config: &CommunityConfig) -> Result<GraphDocument, GenerateError> {
    validate_probability("intra_probability_a", config.intra_probability_a)?;
    validate_probability("intra_probability_b", config.intra_probability_b)?;
    validate_probability("inter_probability", config.inter_probability)?;

    let mut rng = rng_from_seed(config.seed);
    let vertices = GraphDocument::labels(config.vertex_count);
    let (community_a, community_b) = assign_communities(config.vertex_count, &mut rng);

    let mut edges = Vec::new();
    sample_intra_edges(
        &community_a,
        config.intra_probability_a,
        &mut rng,
        &mut edges,
    );
    sample_intra_edges(
        &community_b,
        config.intra_probability_b,
        &mut rng,
        &mut edges,
    );
    sample_inter_edges(
        &community_a,
        &community_b,
        config.inter_probability,
        &mut rng,
        &mut edges,
    );

    info!(
        vertex_count = vertices.len(),
        edge_count = edges.len(),
        community_a = community_a.len(),
        community_b = community_b.len(),
        "generated community graph"
    );
    Ok(GraphDocument { vertices, edges })
}

/// Partitions the vertex indices `[0, N)` into two communities with an
/// independent fair coin flip per vertex.
pub(super) fn assign_communities(
    vertex_count: usize,
    rng: &mut SmallRng,
) -> (Vec<usize>, Vec<usize>) {
    let mut community_a = Vec::new();
    let mut community_b = Vec::new();
    for index in 0..vertex_count {
        if rng.gen_bool(0.5) {
            community_a.push(index);
        } else {
            community_b.push(index);
        }
    }
    (community_a, community_b)
}

fn sample_intra_edges(
    members: &[usize],
    probability: f64,
    rng: &mut SmallRng,
    edges: &mut Vec<[String; 2]>,
) {
    for (offset, &left) in members.iter().enumerate() {
        for &right in members.iter().skip(offset + 1) {
            if rng.gen_bool(probability) {
                edges.push([vertex_label(left), vertex_label(right)]);
            }
        }
    }
}

fn sample_inter_edges(
    left_members: &[usize],
    right_members: &[usize],
    probability: f64,
    rng: &mut SmallRng,
    edges: &mut Vec<[String; 2]>,
) {
    for &left in left_members {
        for &right in right_members {
            if rng.gen_bool(probability) {
                edges.push([vertex_label(left), vertex_label(right)]);
            }
        }
    }
}
