//! The risk-scoring and recommendation engine.
//!
//! Three independent paths per request, joined by the orchestrator:
//! symbolic ingredient tagging (knowledgebase only), numeric risk
//! prediction (feature vector → fitted regressor → weighted aggregation),
//! and healthier-alternative retrieval (nearest neighbors + re-ranking).

pub mod aggregate;
pub mod features;
pub mod normalize;
pub mod orchestrator;
pub mod recommend;
pub mod tagger;
pub mod types;

use thiserror::Error;

use crate::model::ModelError;

pub use orchestrator::Engine;
pub use types::{AnalysisReport, AnalysisRequest, ProductInput, RiskLevel};

/// Request-scoped analysis failures. A capability failure fails the whole
/// request. The disease key is carried for diagnosis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("risk prediction failed for '{disease}': {source}")]
    Prediction {
        disease: String,
        #[source]
        source: ModelError,
    },

    #[error("risk classification failed for '{disease}': {source}")]
    Classification {
        disease: String,
        #[source]
        source: ModelError,
    },
}
