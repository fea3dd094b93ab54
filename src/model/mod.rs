//! Fitted model artifacts and the capability traits the engine consumes.
//!
//! The engine never trains anything. It loads previously fitted artifacts
//! (scaler, regressor, classifier, product catalog) once at startup and
//! treats them as immutable. Load failure of any artifact is fatal; a
//! process that cannot score must refuse to serve rather than degrade.

pub mod catalog;
pub mod index;
pub mod predictor;
pub mod scaler;

use std::path::Path;

use thiserror::Error;

pub use catalog::{CatalogEntry, ProductCatalog};
pub use index::{BruteForceIndex, NearestNeighborIndex, Neighbor};
pub use predictor::{Classifier, GradientBoostedRegressor, Predictor, RandomForestClassifier};
pub use scaler::StandardScaler;

/// Number of features in the regressor/classifier input vector.
pub const FEATURE_DIM: usize = 12;

/// Dimensionality of the recommendation query space.
pub const QUERY_DIM: usize = 7;

/// Version of the feature contract: field order, disease encoding, and
/// severity-flag derivation. Artifacts record the version they were trained
/// against, and the loader rejects mismatches, since serving a model trained on
/// a different encoding silently corrupts every score.
pub const FEATURE_CONTRACT_VERSION: u32 = 1;

/// Field offsets within a recommendation query/catalog vector.
pub mod query_field {
    pub const SUGARS: usize = 0;
    pub const SALT: usize = 1;
    pub const SATURATED_FAT: usize = 2;
    pub const FIBER: usize = 3;
    pub const PROTEIN: usize = 4;
    pub const ENERGY: usize = 5;
    pub const HEALTH_SCORE: usize = 6;
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("artifact not found: {path}")]
    ArtifactMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact {path} is malformed: {source}")]
    ArtifactMalformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "{artifact} trained against feature contract v{artifact_version}, \
         engine speaks v{engine_version}; retrain or roll back"
    )]
    ContractMismatch {
        artifact: &'static str,
        artifact_version: u32,
        engine_version: u32,
    },

    #[error("{artifact} has wrong dimensionality: expected {expected}, got {got}")]
    DimensionMismatch {
        artifact: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("model structure invalid: {0}")]
    InvalidStructure(String),
}

/// Read and deserialize one JSON artifact.
pub(crate) fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let bytes = std::fs::read(path).map_err(|source| ModelError::ArtifactMissing {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ModelError::ArtifactMalformed {
        path: path.display().to_string(),
        source,
    })
}

/// All fitted artifacts, loaded once at startup.
///
/// The regressor/classifier/index fields are trait objects so the engine
/// can be exercised with deterministic stubs in tests.
pub struct ModelStore {
    pub scaler: StandardScaler,
    pub regressor: Box<dyn Predictor>,
    pub classifier: Box<dyn Classifier>,
    pub index: Box<dyn NearestNeighborIndex>,
    pub catalog: ProductCatalog,
}

impl std::fmt::Debug for ModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStore")
            .field("scaler", &self.scaler)
            .field("catalog_products", &self.catalog.len())
            .field("index_entries", &self.index.len())
            .finish_non_exhaustive()
    }
}

impl ModelStore {
    /// Load every artifact from `dir`. Any failure aborts startup.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let scaler = StandardScaler::load(&dir.join("scaler.json"))?;
        let regressor = GradientBoostedRegressor::load(&dir.join("regressor.json"))?;
        let classifier = RandomForestClassifier::load(&dir.join("classifier.json"))?;
        let catalog = ProductCatalog::load(
            &dir.join("catalog_vectors.json"),
            &dir.join("catalog_names.json"),
        )?;
        // The neighbor index is rebuilt from the catalog vectors at load
        // time; brute force is exact and the catalog is small.
        let index = BruteForceIndex::new(catalog.vectors().to_owned());

        tracing::info!(
            catalog_products = catalog.len(),
            "model artifacts loaded from {}",
            dir.display()
        );

        Ok(Self {
            scaler,
            regressor: Box::new(regressor),
            classifier: Box::new(classifier),
            index: Box::new(index),
            catalog,
        })
    }

    /// Assemble a store from parts. Test seam for deterministic stubs.
    pub fn from_parts(
        scaler: StandardScaler,
        regressor: Box<dyn Predictor>,
        classifier: Box<dyn Classifier>,
        index: Box<dyn NearestNeighborIndex>,
        catalog: ProductCatalog,
    ) -> Self {
        Self {
            scaler,
            regressor,
            classifier,
            index,
            catalog,
        }
    }
}
