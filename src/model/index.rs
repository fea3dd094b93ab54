//! Nearest-neighbor retrieval over the product catalog.
//!
//! Exact brute-force Euclidean search. The catalog is a few hundred to a
//! few thousand rows, so a linear scan per query is fast enough and avoids
//! approximate-index recall surprises.

use ndarray::Array2;

use super::QUERY_DIM;

/// One retrieval hit: catalog row index + Euclidean distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f32,
}

/// Nearest-neighbor capability consumed by the recommendation path.
pub trait NearestNeighborIndex: Send + Sync {
    /// The `k` nearest catalog entries, ascending by distance.
    fn nearest(&self, query: &[f32; QUERY_DIM], k: usize) -> Vec<Neighbor>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exact Euclidean index over a row-per-product matrix.
pub struct BruteForceIndex {
    vectors: Array2<f32>,
}

impl BruteForceIndex {
    /// `vectors` must be `(n, QUERY_DIM)`; the `ModelStore` loader
    /// guarantees this for catalog-backed indexes.
    pub fn new(vectors: Array2<f32>) -> Self {
        debug_assert_eq!(vectors.ncols(), QUERY_DIM);
        Self { vectors }
    }
}

impl NearestNeighborIndex for BruteForceIndex {
    fn nearest(&self, query: &[f32; QUERY_DIM], k: usize) -> Vec<Neighbor> {
        let mut hits: Vec<Neighbor> = self
            .vectors
            .rows()
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let distance = row
                    .iter()
                    .zip(query.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f32>()
                    .sqrt();
                Neighbor { index, distance }
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);
        hits
    }

    fn len(&self) -> usize {
        self.vectors.nrows()
    }
}
