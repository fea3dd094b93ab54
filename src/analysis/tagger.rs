//! Symbolic ingredient tagging against the disease knowledgebase.
//!
//! Deterministic and knowledgebase-only: no learned model is consulted
//! here. Each canonical ingredient is matched against a disease's
//! beneficial list first, then its tiered trigger lists; when several
//! tiers fire the worst one wins.

use crate::knowledge::{DiseaseRecord, Knowledgebase, SeverityTier};

use super::normalize::{normalize, parse_ingredients};
use super::types::{DiseaseRisk, IngredientReport};

/// Trigger match, substring in both directions. Labels carry compounds
/// ("brown sugar syrup") and the knowledgebase carries compounds
/// ("corn syrup"), so either side may contain the other.
fn term_matches(ingredient: &str, term: &str) -> bool {
    ingredient == term || ingredient.contains(term) || term.contains(ingredient)
}

/// Beneficial match, forward only: the term must equal or be contained in
/// the ingredient. Reverse containment would let a longer beneficial term
/// absorb a trigger it happens to contain ("buckwheat" vs "wheat").
fn beneficial_matches(ingredient: &str, term: &str) -> bool {
    ingredient == term || ingredient.contains(term)
}

/// Tier of one canonical ingredient for one disease.
///
/// Beneficial terms win outright: an ingredient on the disease's
/// beneficial list is Safe even when a trigger tier would also fire.
/// Otherwise the worst firing tier wins, and an ingredient that matches
/// nothing is Safe.
pub fn tag_for_disease(record: &DiseaseRecord, canonical: &str) -> SeverityTier {
    if record
        .beneficial
        .iter()
        .any(|term| beneficial_matches(canonical, term))
    {
        return SeverityTier::Safe;
    }

    record
        .triggers
        .iter()
        .filter(|(_, terms)| terms.iter().any(|term| term_matches(canonical, term)))
        .map(|(tier, _)| *tier)
        .max()
        .unwrap_or(SeverityTier::Safe)
}

/// Resolve a user-supplied condition name to a knowledgebase key.
/// "Heart Disease" and "heart_disease" both land on the same record.
pub(crate) fn condition_key(condition: &str) -> String {
    condition.trim().to_lowercase().replace(' ', "_")
}

/// Per-condition tiers of one canonical ingredient. Conditions absent
/// from the knowledgebase are skipped, not errors.
pub fn tag_risk(kb: &Knowledgebase, canonical: &str, conditions: &[String]) -> Vec<DiseaseRisk> {
    conditions
        .iter()
        .filter_map(|cond| kb.disease(&condition_key(cond)))
        .map(|record| {
            let tier = tag_for_disease(record, canonical);
            DiseaseRisk {
                disease: record.key.to_string(),
                risk: tier,
                risk_score: tier.score(),
            }
        })
        .collect()
}

/// Full symbolic pass: parse the label, canonicalize each token, tag it
/// per requested condition, and roll up the worst tier per ingredient.
pub fn analyze_ingredients(
    kb: &Knowledgebase,
    ingredients_text: &str,
    conditions: &[String],
) -> Vec<IngredientReport> {
    parse_ingredients(ingredients_text)
        .into_iter()
        .map(|raw| {
            let canonical = normalize(kb, &raw);
            let disease_risks = tag_risk(kb, &canonical, conditions);
            let worst = disease_risks
                .iter()
                .map(|r| r.risk)
                .max()
                .unwrap_or(SeverityTier::Safe);
            IngredientReport {
                name: raw,
                normalized_name: canonical,
                risk: worst,
                risk_score: worst.score(),
                disease_risks,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sugar_is_high_for_diabetes() {
        let kb = Knowledgebase::builtin();
        let record = kb.disease("diabetes").unwrap();
        assert_eq!(tag_for_disease(record, "sugar"), SeverityTier::High);
    }

    #[test]
    fn wheat_is_critical_for_celiac() {
        let kb = Knowledgebase::builtin();
        let record = kb.disease("celiac_disease").unwrap();
        assert_eq!(tag_for_disease(record, "wheat"), SeverityTier::Critical);
        assert_eq!(tag_for_disease(record, "wheat flour"), SeverityTier::Critical);
    }

    #[test]
    fn beneficial_substrings_do_not_mask_triggers() {
        let kb = Knowledgebase::builtin();
        let record = kb.disease("celiac_disease").unwrap();
        // "buckwheat" sits on the beneficial list; plain "wheat" must still
        // hit the Critical trigger, not be absorbed by the longer term.
        assert_eq!(tag_for_disease(record, "wheat"), SeverityTier::Critical);
        assert_eq!(tag_for_disease(record, "buckwheat"), SeverityTier::Safe);
    }

    #[test]
    fn beneficial_beats_trigger() {
        let kb = Knowledgebase::builtin();
        // Quinoa sits on both the celiac Low-trigger list and the
        // beneficial list; beneficial wins.
        let record = kb.disease("celiac_disease").unwrap();
        assert_eq!(tag_for_disease(record, "quinoa"), SeverityTier::Safe);
    }

    #[test]
    fn unmatched_ingredient_is_safe() {
        let kb = Knowledgebase::builtin();
        let record = kb.disease("diabetes").unwrap();
        assert_eq!(tag_for_disease(record, "dragon fruit"), SeverityTier::Safe);
    }

    #[test]
    fn condition_names_are_normalized() {
        let kb = Knowledgebase::builtin();
        let risks = tag_risk(&kb, "wheat", &conds(&["Celiac Disease"]));
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].disease, "celiac_disease");
        assert_eq!(risks[0].risk, SeverityTier::Critical);
        assert_eq!(risks[0].risk_score, 90);
    }

    #[test]
    fn unknown_conditions_are_skipped() {
        let kb = Knowledgebase::builtin();
        let risks = tag_risk(&kb, "sugar", &conds(&["space madness", "diabetes"]));
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].disease, "diabetes");
    }

    #[test]
    fn report_carries_worst_tier_across_conditions() {
        let kb = Knowledgebase::builtin();
        let reports = analyze_ingredients(
            &kb,
            "wheat flour, salt",
            &conds(&["diabetes", "celiac_disease"]),
        );
        assert_eq!(reports.len(), 2);

        let wheat = &reports[0];
        assert_eq!(wheat.normalized_name, "wheat");
        assert_eq!(wheat.risk, SeverityTier::Critical);
        assert_eq!(wheat.risk_score, 90);
        assert_eq!(wheat.disease_risks.len(), 2);
    }

    #[test]
    fn display_name_keeps_label_casing() {
        let kb = Knowledgebase::builtin();
        let reports = analyze_ingredients(&kb, "Wheat Flour, Sea Salt", &conds(&["celiac_disease"]));
        assert_eq!(reports[0].name, "Wheat Flour");
        assert_eq!(reports[0].normalized_name, "wheat");
        assert_eq!(reports[1].name, "Sea Salt");
    }

    #[test]
    fn empty_label_yields_no_reports() {
        let kb = Knowledgebase::builtin();
        assert!(analyze_ingredients(&kb, "", &conds(&["diabetes"])).is_empty());
        assert!(
            analyze_ingredients(&kb, "ingredients not specified", &conds(&["diabetes"]))
                .is_empty()
        );
    }

    #[test]
    fn no_conditions_means_every_ingredient_safe() {
        let kb = Knowledgebase::builtin();
        let reports = analyze_ingredients(&kb, "sugar, salt", &[]);
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.risk, SeverityTier::Safe);
            assert_eq!(report.risk_score, 10);
            assert!(report.disease_risks.is_empty());
        }
    }
}
