//! Weighted aggregation of per-disease predictions into one score.
//!
//! The user's conditions pick which predictions count; clinical weights
//! from the knowledgebase make a celiac hit matter more than an IBS hit.
//! Predictions for diseases the user did not report are computed anyway
//! (they feed the fallback mean) but carry no weight here.

use super::tagger::condition_key;

/// One per-disease model output, ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseasePrediction {
    /// Canonical disease key.
    pub disease: String,
    /// Regressor output clamped to [0, 100].
    pub magnitude: f64,
    /// Clinical weight from the knowledgebase record.
    pub weight: f64,
    /// Classifier label, surfaced in logs only.
    pub risky: bool,
}

fn matches_condition(disease: &str, conditions: &[String]) -> bool {
    // Canonicalize each condition the same way the tagger resolves them,
    // so "Celiac Disease", "celiac disease", and "celiac_disease" all
    // land on the "celiac_disease" prediction.
    conditions
        .iter()
        .any(|cond| condition_key(cond).contains(disease))
}

/// Collapse per-disease predictions into one score.
///
/// Weighted mean over the predictions whose disease appears in the user's
/// conditions; plain mean over everything when none match (a user with no
/// reported conditions still gets a population-level score); 50.0 neutral
/// when there are no predictions at all.
pub fn aggregate(predictions: &[DiseasePrediction], conditions: &[String]) -> f64 {
    if predictions.is_empty() {
        return 50.0;
    }

    let matched: Vec<&DiseasePrediction> = predictions
        .iter()
        .filter(|p| matches_condition(&p.disease, conditions))
        .collect();

    if matched.is_empty() {
        return predictions.iter().map(|p| p.magnitude).sum::<f64>() / predictions.len() as f64;
    }

    let weighted: f64 = matched.iter().map(|p| p.weight * p.magnitude).sum();
    let total_weight: f64 = matched.iter().map(|p| p.weight).sum();
    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        matched.iter().map(|p| p.magnitude).sum::<f64>() / matched.len() as f64
    }
}
