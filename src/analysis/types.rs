//! Request/response entities of the analysis engine.
//!
//! Everything here is ephemeral: created per request, discarded with the
//! response. The wire-facing DTOs live in `api::types`.

use serde::{Deserialize, Serialize};

use crate::knowledge::SeverityTier;

/// Nutrient panel per 100 g. Missing keys default to 0; the original
/// OpenFoodFacts exports spell two fields with dashes, so those are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientPanel {
    #[serde(default)]
    pub sugars_100g: f64,
    #[serde(default)]
    pub carbohydrates_100g: f64,
    #[serde(default)]
    pub salt_100g: f64,
    #[serde(default)]
    pub fat_100g: f64,
    #[serde(default, alias = "saturated-fat_100g")]
    pub saturated_fat_100g: f64,
    #[serde(default)]
    pub fiber_100g: f64,
    #[serde(default, alias = "protein_100g")]
    pub proteins_100g: f64,
    #[serde(default, alias = "energy-kcal_100g")]
    pub energy_kcal_100g: f64,
}

fn coerce(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

impl NutrientPanel {
    /// Copy with every non-finite or negative value coerced to 0. Applied
    /// before any numeric use.
    pub fn sanitized(&self) -> Self {
        Self {
            sugars_100g: coerce(self.sugars_100g),
            carbohydrates_100g: coerce(self.carbohydrates_100g),
            salt_100g: coerce(self.salt_100g),
            fat_100g: coerce(self.fat_100g),
            saturated_fat_100g: coerce(self.saturated_fat_100g),
            fiber_100g: coerce(self.fiber_100g),
            proteins_100g: coerce(self.proteins_100g),
            energy_kcal_100g: coerce(self.energy_kcal_100g),
        }
    }
}

/// Product under analysis.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub name: String,
    pub ingredients_text: String,
    pub nutrients: NutrientPanel,
    pub category: Option<String>,
    pub brand: Option<String>,
}

/// One analysis request: a product plus the user's stated conditions.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub product: ProductInput,
    pub conditions: Vec<String>,
}

/// Risk band of the final aggregated score. Pure function of the score;
/// the medium/low boundary adopted here is 50 (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Safe,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            RiskLevel::High
        } else if score > 50.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Safe
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Safe => "safe",
        }
    }
}

/// Severity of one ingredient for one requested condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseRisk {
    pub disease: String,
    pub risk: SeverityTier,
    pub risk_score: u8,
}

/// Symbolic analysis of one parsed ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientReport {
    /// The raw parsed token, as it appeared on the label.
    pub name: String,
    /// Canonical key, or the lowercased raw token when unmatched.
    pub normalized_name: String,
    /// Worst tier across the requested conditions.
    pub risk: SeverityTier,
    pub risk_score: u8,
    pub disease_risks: Vec<DiseaseRisk>,
}

/// One re-ranked recommendation candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub name: String,
    pub category: String,
    pub reason: String,
    /// Similarity-derived score in [0, 95].
    pub match_score: f64,
    /// Mean per-nutrient percentage improvement, 0 when nothing improves.
    pub improvement: f64,
}

/// Final assembled result.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Aggregated risk, truncated to an integer in [0, 100].
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub ingredient_analysis: Vec<IngredientReport>,
    pub alternatives: Vec<Alternative>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_coerces_nan_and_negatives() {
        let panel = NutrientPanel {
            sugars_100g: f64::NAN,
            salt_100g: -3.0,
            fiber_100g: f64::INFINITY,
            proteins_100g: 4.5,
            ..Default::default()
        };
        let clean = panel.sanitized();
        assert_eq!(clean.sugars_100g, 0.0);
        assert_eq!(clean.salt_100g, 0.0);
        assert_eq!(clean.fiber_100g, 0.0);
        assert_eq!(clean.proteins_100g, 4.5);
    }

    #[test]
    fn panel_accepts_dashed_aliases() {
        let panel: NutrientPanel = serde_json::from_str(
            r#"{"sugars_100g": 10.6, "saturated-fat_100g": 2.0, "energy-kcal_100g": 42.0}"#,
        )
        .unwrap();
        assert_eq!(panel.sugars_100g, 10.6);
        assert_eq!(panel.saturated_fat_100g, 2.0);
        assert_eq!(panel.energy_kcal_100g, 42.0);
    }

    #[test]
    fn missing_panel_keys_default_to_zero() {
        let panel: NutrientPanel = serde_json::from_str(r#"{"salt_100g": 1.2}"#).unwrap();
        assert_eq!(panel.salt_100g, 1.2);
        assert_eq!(panel.sugars_100g, 0.0);
        assert_eq!(panel.energy_kcal_100g, 0.0);
    }

    #[test]
    fn risk_banding_boundaries() {
        assert_eq!(RiskLevel::from_score(95.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(81.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(51.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Safe);
    }

    #[test]
    fn banding_is_stable() {
        for _ in 0..3 {
            assert_eq!(RiskLevel::from_score(67.4), RiskLevel::Medium);
        }
    }
}
