//! Wire types for the HTTP surface.
//!
//! camelCase on the wire, with aliases for the field spellings older
//! clients send (`ingredients`, `nutriments`). These convert to and from
//! the engine's domain types at the router boundary; the engine itself
//! never sees serde.

use serde::{Deserialize, Serialize};

use crate::analysis::types::{Alternative, IngredientReport, NutrientPanel};
use crate::analysis::{AnalysisReport, AnalysisRequest, ProductInput};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequestBody {
    pub product: ProductBody,
    #[serde(default, alias = "user_conditions")]
    pub user_conditions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    #[serde(default, alias = "product_name")]
    pub name: String,
    #[serde(default, alias = "ingredients_text", alias = "ingredients")]
    pub ingredients_text: String,
    #[serde(default, alias = "nutrient_panel", alias = "nutriments")]
    pub nutrient_panel: NutrientPanel,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl From<AnalyzeRequestBody> for AnalysisRequest {
    fn from(body: AnalyzeRequestBody) -> Self {
        AnalysisRequest {
            product: ProductInput {
                name: body.product.name,
                ingredients_text: body.product.ingredients_text,
                nutrients: body.product.nutrient_panel,
                category: body.product.category,
                brand: body.product.brand,
            },
            conditions: body.user_conditions,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponseBody {
    pub risk_score: u8,
    pub risk_level: &'static str,
    pub ingredient_analysis: Vec<IngredientBody>,
    pub alternatives: Vec<AlternativeBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientBody {
    pub name: String,
    pub normalized_name: String,
    pub risk: &'static str,
    pub risk_score: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeBody {
    pub name: String,
    pub category: String,
    pub reason: String,
    pub match_score: f64,
}

impl From<&IngredientReport> for IngredientBody {
    fn from(report: &IngredientReport) -> Self {
        Self {
            name: report.name.clone(),
            normalized_name: report.normalized_name.clone(),
            risk: report.risk.as_str(),
            risk_score: report.risk_score,
        }
    }
}

impl From<&Alternative> for AlternativeBody {
    fn from(alt: &Alternative) -> Self {
        Self {
            name: alt.name.clone(),
            category: alt.category.clone(),
            reason: alt.reason.clone(),
            match_score: alt.match_score,
        }
    }
}

impl From<&AnalysisReport> for AnalyzeResponseBody {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            risk_score: report.risk_score,
            risk_level: report.risk_level.as_str(),
            ingredient_analysis: report.ingredient_analysis.iter().map(Into::into).collect(),
            alternatives: report.alternatives.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBody {
    pub status: &'static str,
    pub version: &'static str,
    pub diseases_loaded: usize,
    pub catalog_products: usize,
}
