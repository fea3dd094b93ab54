//! Fixed catalog of candidate products for recommendation.
//!
//! Built at training time, loaded read-only at startup: one display name +
//! category label per row of the feature matrix. Row order is the join key
//! between the two artifacts and the neighbor index.

use std::path::Path;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::{read_artifact, ModelError, QUERY_DIM};

fn default_category() -> String {
    "General".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
}

#[derive(Debug)]
pub struct ProductCatalog {
    entries: Vec<CatalogEntry>,
    vectors: Array2<f32>,
}

impl ProductCatalog {
    pub fn load(vectors_path: &Path, names_path: &Path) -> Result<Self, ModelError> {
        let rows: Vec<Vec<f32>> = read_artifact(vectors_path)?;
        let entries: Vec<CatalogEntry> = read_artifact(names_path)?;
        Self::from_rows(entries, rows)
    }

    fn from_rows(entries: Vec<CatalogEntry>, rows: Vec<Vec<f32>>) -> Result<Self, ModelError> {
        for row in &rows {
            if row.len() != QUERY_DIM {
                return Err(ModelError::DimensionMismatch {
                    artifact: "catalog vectors",
                    expected: QUERY_DIM,
                    got: row.len(),
                });
            }
        }
        if entries.len() != rows.len() {
            return Err(ModelError::DimensionMismatch {
                artifact: "catalog names",
                expected: rows.len(),
                got: entries.len(),
            });
        }

        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let vectors = Array2::from_shape_vec((entries.len(), QUERY_DIM), flat)
            .map_err(|e| ModelError::InvalidStructure(format!("catalog matrix: {e}")))?;

        Ok(Self { entries, vectors })
    }

    /// Test seam: build a catalog from in-memory rows.
    pub fn from_parts(
        entries: Vec<CatalogEntry>,
        rows: Vec<[f32; QUERY_DIM]>,
    ) -> Result<Self, ModelError> {
        Self::from_rows(entries, rows.into_iter().map(|r| r.to_vec()).collect())
    }

    pub fn entry(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn vector(&self, index: usize) -> Option<ArrayView1<'_, f32>> {
        if index < self.vectors.nrows() {
            Some(self.vectors.row(index))
        } else {
            None
        }
    }

    pub fn vectors(&self) -> &Array2<f32> {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
