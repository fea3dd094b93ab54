//! Request orchestration: one entry point that fans out to the symbolic,
//! numeric, and retrieval paths and assembles the final report.

use std::sync::Arc;

use crate::knowledge::Knowledgebase;
use crate::model::ModelStore;

use super::aggregate::{aggregate, DiseasePrediction};
use super::features::build_features;
use super::recommend::recommend;
use super::tagger::analyze_ingredients;
use super::types::{AnalysisReport, AnalysisRequest, NutrientPanel, RiskLevel};
use super::AnalysisError;

/// Number of alternatives returned per report.
const ALTERNATIVES_PER_REPORT: usize = 5;

/// The analysis engine. Cheap to clone; all heavy state sits behind the
/// shared model store.
#[derive(Clone)]
pub struct Engine {
    kb: Knowledgebase,
    models: Arc<ModelStore>,
}

impl Engine {
    pub fn new(models: Arc<ModelStore>) -> Self {
        Self {
            kb: Knowledgebase::builtin(),
            models,
        }
    }

    pub fn knowledgebase(&self) -> &Knowledgebase {
        &self.kb
    }

    pub fn catalog_len(&self) -> usize {
        self.models.catalog.len()
    }

    /// Run one full analysis. The three paths are independent; a model
    /// failure on the numeric path fails the request as a whole.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        let panel = request.product.nutrients.sanitized();
        let conditions = &request.conditions;

        tracing::debug!(
            product = %request.product.name,
            conditions = conditions.len(),
            "analysis started"
        );

        let symbolic = async {
            analyze_ingredients(&self.kb, &request.product.ingredients_text, conditions)
        };
        let numeric = async { self.predict_all(&panel, conditions) };
        let retrieval = async {
            recommend(
                self.models.index.as_ref(),
                &self.models.catalog,
                &panel,
                &request.product.name,
                conditions,
                ALTERNATIVES_PER_REPORT,
            )
        };

        let (ingredient_analysis, score, alternatives) = tokio::join!(symbolic, numeric, retrieval);
        let score = score?;

        let report = AnalysisReport {
            risk_score: score as u8,
            risk_level: RiskLevel::from_score(score),
            ingredient_analysis,
            alternatives,
        };

        tracing::info!(
            product = %request.product.name,
            risk_score = report.risk_score,
            risk_level = report.risk_level.as_str(),
            ingredients = report.ingredient_analysis.len(),
            alternatives = report.alternatives.len(),
            "analysis complete"
        );

        Ok(report)
    }

    /// Predict the risk magnitude for every knowledgebase disease, then
    /// collapse to one score. All diseases are scored, not just the user's
    /// conditions, so the population-mean fallback always has inputs.
    fn predict_all(
        &self,
        panel: &NutrientPanel,
        conditions: &[String],
    ) -> Result<f64, AnalysisError> {
        let mut predictions = Vec::with_capacity(self.kb.disease_count());

        for record in self.kb.diseases() {
            let features = build_features(panel, record);
            let scaled = self.models.scaler.transform(&features);

            let magnitude = self
                .models
                .regressor
                .predict(&scaled)
                .map_err(|source| AnalysisError::Prediction {
                    disease: record.key.to_string(),
                    source,
                })?
                .clamp(0.0, 100.0);

            let risky = self
                .models
                .classifier
                .classify(&scaled)
                .map_err(|source| AnalysisError::Classification {
                    disease: record.key.to_string(),
                    source,
                })?;

            tracing::trace!(disease = record.key, magnitude, risky, "disease scored");

            predictions.push(DiseasePrediction {
                disease: record.key.to_string(),
                magnitude,
                weight: record.severity_weight,
                risky,
            });
        }

        Ok(aggregate(&predictions, conditions).clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::ProductInput;
    use crate::knowledge::SeverityTier;
    use crate::model::{
        CatalogEntry, Classifier, ModelError, NearestNeighborIndex, Neighbor, Predictor,
        ProductCatalog, StandardScaler, FEATURE_DIM, QUERY_DIM,
    };

    struct FixedPredictor(f64);

    impl Predictor for FixedPredictor {
        fn predict(&self, _features: &[f64; FEATURE_DIM]) -> Result<f64, ModelError> {
            Ok(self.0)
        }
    }

    struct FailingPredictor;

    impl Predictor for FailingPredictor {
        fn predict(&self, _features: &[f64; FEATURE_DIM]) -> Result<f64, ModelError> {
            Err(ModelError::InvalidStructure("stub failure".into()))
        }
    }

    struct FixedClassifier(bool);

    impl Classifier for FixedClassifier {
        fn classify(&self, _features: &[f64; FEATURE_DIM]) -> Result<bool, ModelError> {
            Ok(self.0)
        }
    }

    struct EmptyIndex;

    impl NearestNeighborIndex for EmptyIndex {
        fn nearest(&self, _query: &[f32; QUERY_DIM], _k: usize) -> Vec<Neighbor> {
            Vec::new()
        }

        fn len(&self) -> usize {
            0
        }
    }

    fn engine_with(magnitude: f64) -> Engine {
        let store = ModelStore::from_parts(
            StandardScaler::identity(),
            Box::new(FixedPredictor(magnitude)),
            Box::new(FixedClassifier(magnitude > 50.0)),
            Box::new(EmptyIndex),
            ProductCatalog::from_parts(vec![], vec![]).unwrap(),
        );
        Engine::new(Arc::new(store))
    }

    fn cola_request(conditions: &[&str]) -> AnalysisRequest {
        AnalysisRequest {
            product: ProductInput {
                name: "Fizzy Cola".to_string(),
                ingredients_text: "water, sugar, caramel color, caffeine".to_string(),
                nutrients: crate::analysis::types::NutrientPanel {
                    sugars_100g: 10.6,
                    carbohydrates_100g: 10.6,
                    energy_kcal_100g: 42.0,
                    ..Default::default()
                },
                category: None,
                brand: None,
            },
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn cola_is_risky_for_a_diabetic() {
        let engine = engine_with(90.0);
        let report = engine.analyze(&cola_request(&["diabetes"])).await.unwrap();

        assert_eq!(report.risk_score, 90);
        assert_eq!(report.risk_level, RiskLevel::High);

        let sugar = report
            .ingredient_analysis
            .iter()
            .find(|r| r.normalized_name == "sugar")
            .unwrap();
        assert_eq!(sugar.risk, SeverityTier::High);
        assert_eq!(sugar.risk_score, 80);
    }

    #[tokio::test]
    async fn no_conditions_still_produces_a_population_score() {
        let engine = engine_with(40.0);
        let report = engine.analyze(&cola_request(&[])).await.unwrap();

        // Every disease predicts 40, so the unweighted mean is 40.
        assert_eq!(report.risk_score, 40);
        assert_eq!(report.risk_level, RiskLevel::Safe);
        assert!(!report.ingredient_analysis.is_empty());
    }

    #[tokio::test]
    async fn predictor_failure_fails_the_request() {
        let store = ModelStore::from_parts(
            StandardScaler::identity(),
            Box::new(FailingPredictor),
            Box::new(FixedClassifier(false)),
            Box::new(EmptyIndex),
            ProductCatalog::from_parts(vec![], vec![]).unwrap(),
        );
        let engine = Engine::new(Arc::new(store));

        let err = engine.analyze(&cola_request(&["diabetes"])).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Prediction { .. }));
    }

    #[tokio::test]
    async fn score_is_truncated_not_rounded() {
        let engine = engine_with(67.9);
        let report = engine.analyze(&cola_request(&["diabetes"])).await.unwrap();
        assert_eq!(report.risk_score, 67);
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[tokio::test]
    async fn empty_catalog_means_no_alternatives() {
        let engine = engine_with(60.0);
        let report = engine.analyze(&cola_request(&["diabetes"])).await.unwrap();
        assert!(report.alternatives.is_empty());
    }

    #[tokio::test]
    async fn identical_inputs_give_identical_reports() {
        let engine = engine_with(67.9);
        let request = cola_request(&["diabetes", "hypertension"]);
        let first = engine.analyze(&request).await.unwrap();
        let second = engine.analyze(&request).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn catalog_backed_engine_returns_alternatives() {
        let catalog = ProductCatalog::from_parts(
            vec![
                CatalogEntry {
                    name: "Sparkling Water Lemon".to_string(),
                    category: "Beverages".to_string(),
                },
                CatalogEntry {
                    name: "Herbal Iced Tea".to_string(),
                    category: "Beverages".to_string(),
                },
            ],
            vec![
                [0.0, 0.01, 0.0, 0.0, 0.0, 1.0, 70.0],
                [2.0, 0.05, 0.0, 0.0, 0.0, 45.0, 70.0],
            ],
        )
        .unwrap();
        let index = crate::model::BruteForceIndex::new(catalog.vectors().clone());

        let store = ModelStore::from_parts(
            StandardScaler::identity(),
            Box::new(FixedPredictor(90.0)),
            Box::new(FixedClassifier(true)),
            Box::new(index),
            catalog,
        );
        let engine = Engine::new(Arc::new(store));

        // Alternatives come from the nutrient panel alone; no conditions
        // are needed.
        let report = engine.analyze(&cola_request(&[])).await.unwrap();
        assert_eq!(report.alternatives.len(), 2);
    }
}
