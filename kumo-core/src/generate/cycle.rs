//! Hamiltonian cycle generation over a random permutation.

use rand::seq::SliceRandom;
use tracing::info;

use super::{CycleConfig, rng_from_seed, vertex_label};
use crate::document::GraphDocument;

/// Generates a single closed cycle visiting a uniformly random permutation
/// of the configured vertices.
///
/// The vertex indices `[0, N)` are shuffled and consecutive shuffled
/// vertices are linked, with one closing edge from the last shuffled vertex
/// back to the first. Every vertex therefore appears as an endpoint in
/// exactly two edges and the edge list forms one closed tour.
///
/// Edge cases: a single vertex yields the closing self-loop `["1", "1"]`;
/// two vertices yield the same pair twice; zero vertices yield an empty
/// document.
#[must_use]
pub fn generate_cycle(config: &CycleConfig) -> GraphDocument {
    let mut rng = rng_from_seed(config.seed);
    let vertices = GraphDocument::labels(config.vertex_count);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let mut edges = Vec::with_capacity(config.vertex_count);
    for pair in order.windows(2) {
        if let [left, right] = pair {
            edges.push([vertex_label(*left), vertex_label(*right)]);
        }
    }
    // Close the tour. Absent for the empty graph; a self-loop for N = 1.
    if let (Some(&last), Some(&first)) = (order.last(), order.first()) {
        edges.push([vertex_label(last), vertex_label(first)]);
    }

    info!(
        vertex_count = vertices.len(),
        edge_count = edges.len(),
        "generated random cycle"
    );
    GraphDocument { vertices, edges }
}
