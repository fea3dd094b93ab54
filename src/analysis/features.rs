//! Feature extraction for the learned risk models.
//!
//! The 12-slot layout is a frozen contract with the training pipeline;
//! `FEATURE_CONTRACT_VERSION` in the model module is bumped whenever it
//! changes, and artifact loaders refuse mismatched versions. Slots 0..8
//! are raw per-100g nutrients, slot 8 is a stable disease code, slots
//! 9..12 are knowledgebase-derived flags.

use crate::knowledge::DiseaseRecord;
use crate::model::FEATURE_DIM;

use super::types::NutrientPanel;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable numeric code for a disease key: FNV-1a over the key bytes,
/// reduced mod 100. Process-independent, so artifacts trained elsewhere
/// agree with the serving side.
pub fn disease_code(key: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in key.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash % 100
}

/// Assemble the feature vector for one (product, disease) pair. The panel
/// must already be sanitized.
pub fn build_features(panel: &NutrientPanel, record: &DiseaseRecord) -> [f64; FEATURE_DIM] {
    [
        panel.sugars_100g,
        panel.carbohydrates_100g,
        panel.salt_100g,
        panel.fat_100g,
        panel.saturated_fat_100g,
        panel.fiber_100g,
        panel.proteins_100g,
        panel.energy_kcal_100g,
        disease_code(record.key) as f64,
        if record.critical { 1.0 } else { 0.0 },
        if record.severity_weight >= 1.5 { 1.0 } else { 0.0 },
        if (1.2..1.5).contains(&record.severity_weight) {
            1.0
        } else {
            0.0
        },
    ]
}
