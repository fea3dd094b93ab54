//! Healthier-alternative retrieval and re-ranking.
//!
//! A nutritional query vector goes to the nearest-neighbor index, then the
//! raw hits pass through domain filters (plausible names, comparable
//! energy), a similarity score with a same-category bonus, per-condition
//! reason text, and name-level deduplication.

use crate::model::{query_field, NearestNeighborIndex, ProductCatalog, QUERY_DIM};

use super::types::{Alternative, NutrientPanel};

/// Raw hits pulled from the index before filtering.
const RETRIEVAL_K: usize = 20;
/// Placeholder health score used in the query until a real one exists.
const DEFAULT_HEALTH_SCORE: f32 = 70.0;
/// Candidates above this multiple of the product's energy are rejected.
const ENERGY_BOUND: f32 = 1.5;
/// Shorter names are catalog noise ("N/A", truncated imports).
const MIN_NAME_LEN: usize = 6;
const SAME_CATEGORY_BONUS: f64 = 15.0;
const SCORE_CAP: f64 = 95.0;

/// Coarse product category from keywords in the display name. First
/// matching group wins; unmatched names land in "General".
pub fn detect_category(name: &str) -> &'static str {
    const GROUPS: &[(&str, &[&str])] = &[
        ("Beverages", &["soda", "cola", "juice", "drink", "water", "tea", "coffee"]),
        ("Snacks", &["chips", "crisp", "cracker", "popcorn", "snack"]),
        ("Sweets", &["chocolate", "candy", "cookie", "cake", "sweet"]),
        ("Grains", &["bread", "pasta", "oats", "cereal", "rice", "grain"]),
        ("Dairy", &["yogurt", "milk", "cheese", "dairy", "cream"]),
        ("Protein", &["burger", "meat", "chicken", "fish", "protein"]),
        ("Condiments", &["sauce", "dressing", "oil", "mayo", "condiment"]),
    ];

    // Keywords match at word starts only. A bare substring scan would let
    // "cola" fire inside "chocolate".
    let lowered = name.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    for (category, keywords) in GROUPS {
        if keywords
            .iter()
            .any(|kw| words.iter().any(|w| w.starts_with(kw)))
        {
            return category;
        }
    }
    "General"
}

/// Nutritional query vector for the retrieval index. Same layout as the
/// catalog rows (`query_field`).
pub fn build_query(panel: &NutrientPanel) -> [f32; QUERY_DIM] {
    let mut q = [0.0f32; QUERY_DIM];
    q[query_field::SUGARS] = panel.sugars_100g as f32;
    q[query_field::SALT] = panel.salt_100g as f32;
    q[query_field::SATURATED_FAT] = panel.saturated_fat_100g as f32;
    q[query_field::FIBER] = panel.fiber_100g as f32;
    q[query_field::PROTEIN] = panel.proteins_100g as f32;
    q[query_field::ENERGY] = panel.energy_kcal_100g as f32;
    q[query_field::HEALTH_SCORE] = DEFAULT_HEALTH_SCORE;
    q
}

/// Mean percentage improvement of a candidate over the query, floored at
/// zero per nutrient so a regression on one axis never cancels a gain on
/// another.
fn improvement_score(query: &[f32; QUERY_DIM], candidate: &[f32]) -> f64 {
    let mut parts: Vec<f64> = Vec::new();

    for field in [
        query_field::SUGARS,
        query_field::SALT,
        query_field::SATURATED_FAT,
    ] {
        let q = f64::from(query[field]);
        let c = f64::from(candidate[field]);
        if q > 0.0 {
            parts.push(((q - c) / q * 100.0).max(0.0));
        }
    }

    let fiber_gain =
        f64::from(candidate[query_field::FIBER]) - f64::from(query[query_field::FIBER]);
    parts.push((fiber_gain * 10.0).max(0.0));

    let protein_gain =
        f64::from(candidate[query_field::PROTEIN]) - f64::from(query[query_field::PROTEIN]);
    parts.push((protein_gain * 5.0).max(0.0));

    let q_energy = f64::from(query[query_field::ENERGY]);
    if q_energy > 0.0 {
        let c_energy = f64::from(candidate[query_field::ENERGY]);
        parts.push(((q_energy - c_energy) / q_energy * 50.0).max(0.0));
    }

    if parts.is_empty() {
        0.0
    } else {
        parts.iter().sum::<f64>() / parts.len() as f64
    }
}

/// Why this candidate suits the user. Condition-specific clauses first,
/// generic nutritional wins after; a candidate with nothing concrete to
/// say still gets a generic line.
fn build_reason(conditions: &[String], candidate: &[f32]) -> String {
    let joined = conditions.join(" ").to_lowercase();
    let mut clauses: Vec<&str> = Vec::new();

    if joined.contains("diabet") && candidate[query_field::SUGARS] < 5.0 {
        clauses.push("Low sugar for diabetes");
    }
    if (joined.contains("hypertension") || joined.contains("blood pressure"))
        && candidate[query_field::SALT] < 1.0
    {
        clauses.push("Low sodium for blood pressure");
    }
    if (joined.contains("heart") || joined.contains("cholesterol"))
        && candidate[query_field::SATURATED_FAT] < 3.0
    {
        clauses.push("Low saturated fat for heart health");
    }
    if candidate[query_field::FIBER] > 5.0 {
        clauses.push("High fiber");
    }
    if candidate[query_field::PROTEIN] > 10.0 {
        clauses.push("Good protein");
    }
    if candidate[query_field::ENERGY] < 200.0 {
        clauses.push("Low calorie");
    }

    if clauses.is_empty() {
        "Healthier alternative".to_string()
    } else {
        clauses.join("; ")
    }
}

/// Retrieve, filter, score, and rank up to `n` healthier alternatives.
pub fn recommend(
    index: &dyn NearestNeighborIndex,
    catalog: &ProductCatalog,
    panel: &NutrientPanel,
    product_name: &str,
    conditions: &[String],
    n: usize,
) -> Vec<Alternative> {
    if index.is_empty() || n == 0 {
        return Vec::new();
    }

    let query = build_query(panel);
    let product_category = detect_category(product_name);
    let product_name_lower = product_name.trim().to_lowercase();

    let mut ranked: Vec<(bool, Alternative)> = Vec::new();
    for hit in index.nearest(&query, RETRIEVAL_K) {
        let (entry, vector) = match (catalog.entry(hit.index), catalog.vector(hit.index)) {
            (Some(entry), Some(vector)) => (entry, vector),
            _ => continue,
        };

        if entry.name.trim().chars().count() < MIN_NAME_LEN {
            continue;
        }
        if entry.name.trim().to_lowercase() == product_name_lower {
            continue;
        }
        // Unconditional: a zero-energy product only accepts zero-energy
        // alternatives.
        if vector[query_field::ENERGY] > query[query_field::ENERGY] * ENERGY_BOUND {
            continue;
        }

        let candidate = vector
            .as_slice()
            .map(<[f32]>::to_vec)
            .unwrap_or_else(|| vector.iter().copied().collect());

        let same_category = entry.category == product_category;
        let mut score = ((1.0 - f64::from(hit.distance)) * 100.0).clamp(0.0, 100.0);
        if same_category {
            score += SAME_CATEGORY_BONUS;
        }
        score = score.min(SCORE_CAP);

        ranked.push((
            same_category,
            Alternative {
                name: entry.name.clone(),
                category: entry.category.clone(),
                reason: build_reason(conditions, &candidate),
                match_score: score,
                improvement: improvement_score(&query, &candidate),
            },
        ));
    }

    // Same-category candidates first, then by score.
    ranked.sort_by(|(a_same, a), (b_same, b)| {
        b_same.cmp(a_same).then(
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    let mut seen = std::collections::HashSet::new();
    ranked
        .into_iter()
        .map(|(_, alt)| alt)
        .filter(|alt| seen.insert(alt.name.trim().to_lowercase()))
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BruteForceIndex, CatalogEntry};

    fn entry(name: &str, category: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    /// [sugars, salt, sat fat, fiber, protein, energy, health]
    fn catalog_and_index(rows: Vec<(&str, &str, [f32; QUERY_DIM])>) -> (ProductCatalog, BruteForceIndex) {
        let entries = rows.iter().map(|(n, c, _)| entry(n, c)).collect();
        let vectors: Vec<[f32; QUERY_DIM]> = rows.iter().map(|(_, _, v)| *v).collect();
        let catalog = ProductCatalog::from_parts(entries, vectors.clone()).unwrap();
        let index = BruteForceIndex::new(catalog.vectors().clone());
        (catalog, index)
    }

    fn soda_panel() -> NutrientPanel {
        NutrientPanel {
            sugars_100g: 10.0,
            salt_100g: 0.02,
            saturated_fat_100g: 0.0,
            fiber_100g: 0.0,
            proteins_100g: 0.0,
            energy_kcal_100g: 42.0,
            ..Default::default()
        }
    }

    #[test]
    fn category_detection_first_group_wins() {
        assert_eq!(detect_category("Fizzy Cola Zero"), "Beverages");
        assert_eq!(detect_category("Potato Chips XXL"), "Snacks");
        assert_eq!(detect_category("Dark Chocolate 85%"), "Sweets");
        assert_eq!(detect_category("Mystery Item"), "General");
        // "rice drink" hits Beverages before Grains.
        assert_eq!(detect_category("Organic Rice Drink"), "Beverages");
    }

    #[test]
    fn embedded_keywords_do_not_match() {
        // "chocolate" contains "cola" as a substring; only word starts
        // count, so these stay Sweets.
        assert_eq!(detect_category("Chocolate Bar"), "Sweets");
        assert_eq!(detect_category("Milk Chocolate Truffles"), "Sweets");
    }

    #[test]
    fn query_layout_matches_catalog_rows() {
        let q = build_query(&soda_panel());
        assert_eq!(q[query_field::SUGARS], 10.0);
        assert_eq!(q[query_field::ENERGY], 42.0);
        assert_eq!(q[query_field::HEALTH_SCORE], 70.0);
    }

    #[test]
    fn short_names_and_energy_outliers_are_filtered() {
        let (catalog, index) = catalog_and_index(vec![
            ("N/A", "Beverages", [9.0, 0.02, 0.0, 0.0, 0.0, 42.0, 70.0]),
            ("Calorie Bomb Drink", "Beverages", [9.0, 0.02, 0.0, 0.0, 0.0, 90.0, 70.0]),
            ("Sparkling Water Lemon", "Beverages", [0.0, 0.01, 0.0, 0.0, 0.0, 1.0, 70.0]),
        ]);

        let alts = recommend(
            &index,
            &catalog,
            &soda_panel(),
            "Fizzy Cola",
            &[],
            5,
        );

        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].name, "Sparkling Water Lemon");
    }

    #[test]
    fn zero_energy_product_rejects_caloric_candidates() {
        let (catalog, index) = catalog_and_index(vec![
            ("Herbal Iced Tea", "Beverages", [0.0, 0.01, 0.0, 0.0, 0.0, 45.0, 70.0]),
            ("Sparkling Water Lime", "Beverages", [0.0, 0.01, 0.0, 0.0, 0.0, 0.0, 70.0]),
        ]);

        let panel = NutrientPanel {
            energy_kcal_100g: 0.0,
            ..Default::default()
        };
        let alts = recommend(&index, &catalog, &panel, "Diet Fizzy Cola", &[], 5);

        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].name, "Sparkling Water Lime");
    }

    #[test]
    fn same_category_ranks_first() {
        let (catalog, index) = catalog_and_index(vec![
            ("Plain Oat Cakes", "Grains", [1.0, 0.1, 0.2, 6.0, 8.0, 40.0, 70.0]),
            ("Herbal Iced Tea", "Beverages", [2.0, 0.05, 0.0, 0.0, 0.0, 45.0, 70.0]),
        ]);

        let alts = recommend(
            &index,
            &catalog,
            &soda_panel(),
            "Fizzy Cola",
            &[],
            5,
        );

        assert_eq!(alts.len(), 2);
        assert_eq!(alts[0].name, "Herbal Iced Tea");
        assert_eq!(alts[0].category, "Beverages");
    }

    #[test]
    fn duplicate_names_collapse() {
        let (catalog, index) = catalog_and_index(vec![
            ("Sparkling Water", "Beverages", [0.0, 0.01, 0.0, 0.0, 0.0, 1.0, 70.0]),
            ("sparkling water", "Beverages", [0.0, 0.02, 0.0, 0.0, 0.0, 2.0, 70.0]),
        ]);

        let alts = recommend(
            &index,
            &catalog,
            &soda_panel(),
            "Fizzy Cola",
            &[],
            5,
        );

        assert_eq!(alts.len(), 1);
    }

    #[test]
    fn product_itself_is_excluded() {
        let (catalog, index) = catalog_and_index(vec![
            ("Fizzy Cola", "Beverages", [10.0, 0.02, 0.0, 0.0, 0.0, 42.0, 70.0]),
            ("Herbal Iced Tea", "Beverages", [2.0, 0.05, 0.0, 0.0, 0.0, 45.0, 70.0]),
        ]);

        let alts = recommend(
            &index,
            &catalog,
            &soda_panel(),
            "Fizzy Cola",
            &[],
            5,
        );

        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].name, "Herbal Iced Tea");
    }

    #[test]
    fn match_score_never_exceeds_cap() {
        let (catalog, index) = catalog_and_index(vec![(
            "Identical Twin Cola",
            "Beverages",
            // Exactly the query vector: distance 0, plus category bonus.
            [10.0, 0.02, 0.0, 0.0, 0.0, 42.0, 70.0],
        )]);

        let alts = recommend(
            &index,
            &catalog,
            &soda_panel(),
            "Fizzy Cola",
            &[],
            5,
        );

        assert_eq!(alts.len(), 1);
        assert!(alts[0].match_score <= SCORE_CAP);
    }

    #[test]
    fn reasons_follow_conditions() {
        let (catalog, index) = catalog_and_index(vec![(
            "Unsweetened Green Tea",
            "Beverages",
            [0.5, 0.01, 0.0, 0.0, 0.0, 1.0, 70.0],
        )]);

        let alts = recommend(
            &index,
            &catalog,
            &soda_panel(),
            "Fizzy Cola",
            &["diabetes".to_string()],
            5,
        );

        assert_eq!(alts.len(), 1);
        assert!(alts[0].reason.contains("Low sugar for diabetes"));
        assert!(alts[0].reason.contains("Low calorie"));
    }

    #[test]
    fn generic_reason_when_nothing_concrete() {
        let candidate = [8.0, 2.0, 4.0, 1.0, 2.0, 350.0, 70.0];
        assert_eq!(build_reason(&[], &candidate), "Healthier alternative");
    }

    #[test]
    fn improvement_rewards_lower_sugar_and_more_fiber() {
        let query = build_query(&soda_panel());
        let better = [1.0, 0.01, 0.0, 4.0, 2.0, 20.0, 70.0];
        let worse = [10.0, 0.02, 0.0, 0.0, 0.0, 42.0, 70.0];
        assert!(improvement_score(&query, &better) > improvement_score(&query, &worse));
        assert_eq!(improvement_score(&query, &worse), 0.0);
    }

    #[test]
    fn empty_catalog_yields_no_alternatives() {
        let catalog = ProductCatalog::from_parts(vec![], vec![]).unwrap();
        let index = BruteForceIndex::new(catalog.vectors().clone());
        let alts = recommend(
            &index,
            &catalog,
            &soda_panel(),
            "Fizzy Cola",
            &[],
            5,
        );
        assert!(alts.is_empty());
    }
}
