//! Multilingual ingredient synonym table.
//!
//! Maps canonical English ingredient keys to localized spellings seen on
//! European packaging. Declaration order matters: the normalizer scans
//! entries top to bottom and returns the first match, so a spelling that
//! appears under two keys resolves to the earlier entry. That ordinal
//! precedence is documented behavior, not an accident; do not "fix" it by
//! sorting.

/// (canonical key, localized spellings). Spellings are lower-case.
pub static SYNONYMS: &[(&str, &[&str])] = &[
    // Sugars
    (
        "sugar",
        &[
            "sucre", "azúcar", "zucker", "zucchero", "cukor", "socker", "cukr", "zahar",
            "şeker", "sukker", "açúcar",
        ],
    ),
    (
        "glucose",
        &["glucosa", "glukose", "glucosio", "glikoz", "glicose", "glykose"],
    ),
    ("fructose", &["fructosa", "fruktose", "fruttosio", "fruktoz", "frutose"]),
    ("honey", &["miel", "honig", "miele", "med", "bal", "méz", "hunaja"]),
    // Salt
    (
        "salt",
        &["sel", "salz", "sale", "só", "tuz", "sare", "suola", "zout", "soľ", "sůl"],
    ),
    ("sodium", &["sodio", "natrium", "sodík", "nátrium", "sódio"]),
    // Fats
    (
        "trans fat",
        &["gras trans", "transfett", "grasso trans", "trans zsír", "transfet"],
    ),
    (
        "saturated fat",
        &["gras saturé", "gesättigtes fett", "grasso saturo", "telített zsír"],
    ),
    (
        "palm oil",
        &["huile de palme", "palmöl", "olio de palma", "pálmaolaj", "olej palmowy"],
    ),
    // Gluten grains
    ("gluten", &["glutén", "глютен"]),
    (
        "wheat",
        &["blé", "weizen", "grano", "frumento", "búza", "trigo", "pszenica"],
    ),
    ("barley", &["orge", "gerste", "cebada", "orzo", "árpa", "jęczmień"]),
    // Dairy
    (
        "milk",
        &["lait", "milch", "leche", "latte", "tej", "mlijeko", "mjölk"],
    ),
    ("lactose", &["laktose", "lactosa", "lattosio", "laktóz", "laktoza"]),
    (
        "cheese",
        &["fromage", "käse", "queso", "formaggio", "sajt", "queijo", "ser"],
    ),
    // Allergens
    (
        "peanut",
        &["arachide", "erdnuss", "cacahuete", "arachidi", "földimogyoró", "amendoim"],
    ),
    ("soy", &["soja", "soia", "szója", "соя"]),
    ("egg", &["œuf", "ei", "huevo", "uovo", "tojás", "ovo", "jajko"]),
    // Preservatives
    (
        "msg",
        &["glutamate", "e621", "monosodium glutamate", "natriumglutamat"],
    ),
    ("nitrate", &["nitrat", "nitrato", "nitrát"]),
    ("benzoate", &["benzoat", "benzoato", "benzoát"]),
];
