//! Curated disease → ingredient-trigger knowledgebase.
//!
//! One record per supported chronic condition: trigger terms grouped by
//! severity tier, beneficial terms that never raise risk, the clinical
//! weight used by the aggregator, and the nutrient cutoffs the training
//! pipeline consults when labeling data. The tables are static data compiled
//! into the binary; nothing mutates them after startup.

use super::severity::SeverityTier;

/// Knowledgebase entry for one condition.
#[derive(Debug)]
pub struct DiseaseRecord {
    /// Canonical identifier, lower-case with underscores (`heart_disease`).
    pub key: &'static str,
    /// Trigger terms by severity tier. Every record has at least one tier.
    pub triggers: &'static [(SeverityTier, &'static [&'static str])],
    /// Ingredients that never raise risk for this condition.
    pub beneficial: &'static [&'static str],
    /// Clinical weight used only in risk aggregation.
    pub severity_weight: f64,
    /// Conditions where exposure is outright harmful rather than dose-
    /// dependent (celiac). Drives the critical feature flag.
    pub critical: bool,
    /// Nutrient cutoffs used at training time; kept for reference.
    pub thresholds: &'static [(&'static str, f64)],
}

impl DiseaseRecord {
    /// Display name: underscores replaced by spaces.
    pub fn display_key(&self) -> String {
        self.key.replace('_', " ")
    }
}

pub static DISEASES: &[DiseaseRecord] = &[
    // ── Metabolic ───────────────────────────────────────────
    DiseaseRecord {
        key: "diabetes",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "sugar", "glucose", "fructose", "sucrose", "dextrose", "corn syrup", "honey",
                    "molasses", "maltodextrin", "maple syrup", "brown sugar", "agave nectar",
                    "invert sugar", "treacle", "palm sugar", "coconut sugar",
                    "fruit juice concentrate", "rice syrup", "barley malt syrup", "caramel",
                    "golden syrup", "malt syrup", "evaporated cane juice", "turbinado sugar",
                    "demerara sugar", "muscovado sugar",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "refined flour", "white rice", "potato starch", "tapioca", "corn flour",
                    "white bread flour", "puffed rice", "crisped rice", "instant oatmeal",
                    "cornmeal", "white pasta", "semolina", "pretzels", "rice cakes", "cornflakes",
                    "instant rice", "panko breadcrumbs",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "artificial sweeteners", "sugar alcohols", "aspartame", "saccharin",
                    "sucralose", "acesulfame potassium", "stevia leaf extract",
                    "monk fruit extract", "xylitol", "erythritol", "mannitol", "sorbitol",
                    "isomalt", "maltitol",
                ],
            ),
        ],
        beneficial: &[
            "cinnamon", "bitter melon", "fenugreek", "fiber", "chromium", "chia seeds",
            "flaxseed", "apple cider vinegar", "turmeric", "ginger", "psyllium husk",
            "resistant starch", "lentils", "blueberries", "oats", "quinoa", "almonds",
            "walnuts", "avocado", "green tea", "garlic", "onions", "extra virgin olive oil",
        ],
        severity_weight: 1.5,
        critical: false,
        thresholds: &[("sugar_g_per_100g", 5.0), ("carbs_g_per_100g", 15.0)],
    },
    // ── Cardiovascular ──────────────────────────────────────
    DiseaseRecord {
        key: "hypertension",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "salt", "sodium chloride", "msg", "soy sauce", "baking soda", "baking powder",
                    "disodium phosphate", "sodium benzoate", "sodium nitrite", "sodium nitrate",
                    "sodium alginate", "sodium caseinate", "sodium citrate", "sodium lactate",
                    "sodium metabisulfite", "sodium phosphate", "sodium propionate",
                    "teriyaki sauce", "fish sauce", "hoisin sauce", "worcestershire sauce",
                    "bouillon", "stock concentrate", "cured meats", "bacon", "anchovies",
                    "salted nuts", "potato chips", "salted crackers", "capers", "brined olives",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "processed meat", "canned soup", "pickles", "cheese", "frozen ready meals",
                    "sandwich meats", "sausages", "hot dogs", "ketchup", "prepared mustard",
                    "relish", "barbecue sauce", "bottled salad dressing", "jarred salsa",
                    "self-rising flour", "cake mixes", "pancake mixes",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "caffeine", "licorice", "energy drinks", "guarana extract", "yerba mate",
                ],
            ),
        ],
        beneficial: &[
            "potassium", "magnesium", "garlic", "hibiscus", "beetroot", "celery seed extract",
            "pomegranate", "watermelon", "spinach", "kale", "sweet potatoes", "bananas",
            "oranges", "tomatoes", "cucumbers", "yogurt", "kefir", "pumpkin seeds", "almonds",
            "cashews", "avocados", "flaxseeds", "chia seeds", "walnuts", "olive oil",
        ],
        severity_weight: 1.4,
        critical: false,
        thresholds: &[("salt_g_per_100g", 1.5)],
    },
    DiseaseRecord {
        key: "heart_disease",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "trans fat", "hydrogenated oil", "saturated fat", "palm oil", "coconut oil",
                    "butter", "lard", "shortening", "partially hydrogenated oils",
                    "stick margarine", "beef tallow", "dripping", "suet", "cream",
                    "non-dairy whipped topping", "powdered coffee creamer", "frosting",
                    "commercial pie crust", "donuts", "butter crackers", "frozen fried foods",
                    "processed pastries", "packaged cookie dough",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "red meat", "processed meat", "full-fat dairy", "sausages", "salami",
                    "pepperoni", "bologna", "pork ribs", "lamb chops", "duck", "goose", "liver",
                    "kidney", "bacon", "prime rib", "cream cheese", "sour cream", "heavy cream",
                    "ice cream", "buttermilk", "whole milk yogurt", "custard",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "cholesterol", "egg yolk", "shrimp", "lobster", "squid", "caviar", "offal",
                ],
            ),
        ],
        beneficial: &[
            "omega-3", "fiber", "antioxidants", "plant sterols", "salmon", "mackerel",
            "sardines", "herring", "walnuts", "flaxseeds", "chia seeds", "soybeans",
            "kidney beans", "lentils", "oats", "barley", "psyllium", "berries", "green tea",
            "tomatoes", "broccoli", "artichokes", "almonds", "pistachios", "avocado",
            "olive oil", "garlic", "turmeric", "ginger",
        ],
        severity_weight: 1.6,
        critical: false,
        thresholds: &[("saturated_fat_g", 5.0), ("cholesterol_mg", 300.0)],
    },
    DiseaseRecord {
        key: "high_cholesterol",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "trans fat", "saturated fat", "dietary cholesterol",
                    "partially hydrogenated oils", "shortening", "stick margarine",
                    "commercial baked goods", "fried fast food", "non-dairy creamers",
                    "frosting", "frozen pastries", "coffee whiteners", "packaged biscuits",
                    "cake mixes", "cookie dough", "creamy salad dressings", "processed cheese",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "full-fat dairy", "red meat", "butter", "palm oil", "cream", "whole milk",
                    "cheese", "ice cream", "sour cream", "whipped cream", "ribeye", "lamb",
                    "pork belly", "sausage", "salami", "duck", "goose", "coconut cream",
                    "palm kernel oil",
                ],
            ),
            (
                SeverityTier::Low,
                &["coconut oil", "mct oil", "virgin coconut oil"],
            ),
        ],
        beneficial: &[
            "fiber", "plant sterols", "stanols", "omega-3", "oats", "barley", "psyllium husk",
            "apples", "pears", "prunes", "brussels sprouts", "carrots", "eggplant", "okra",
            "almonds", "walnuts", "pistachios", "flaxseeds", "chia seeds", "soy protein",
            "avocado", "olive oil", "green tea", "garlic", "turmeric",
        ],
        severity_weight: 1.4,
        critical: false,
        thresholds: &[("saturated_fat_g", 5.0)],
    },
    DiseaseRecord {
        key: "obesity",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "high fructose corn syrup", "added sugars", "trans fat", "soda",
                    "energy drinks", "fruit punch", "sweetened iced tea", "sports drinks",
                    "sugar-coated cereal", "granola bars", "candy", "chocolate bars", "cookies",
                    "cakes", "pastries", "donuts", "ice cream", "sweetened yogurt",
                    "pancake syrup", "condensed milk", "canned fruit in syrup", "jam", "jelly",
                    "fried fast foods",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "refined carbs", "fried foods", "white bread", "bagels", "white rice",
                    "pretzels", "crackers", "chips", "buttered popcorn", "french fries",
                    "onion rings", "fried chicken", "nachos", "cream-based soups",
                    "alfredo sauce", "gravies", "cream cheese", "candied nuts",
                    "sugared dried fruit",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "saturated fat", "processed foods", "full-fat dairy", "butter", "cream",
                    "bacon", "sausages", "instant noodles", "frozen dinners",
                    "instant mashed potatoes",
                ],
            ),
        ],
        beneficial: &[
            "fiber", "protein", "leafy greens", "cruciferous vegetables", "legumes",
            "whole fruits", "whole grains", "lean poultry", "fish", "eggs", "greek yogurt",
            "cottage cheese", "tofu", "tempeh", "broth-based soups", "chia seeds",
            "flaxseeds", "apple cider vinegar", "green tea", "cucumber", "celery",
        ],
        severity_weight: 1.3,
        critical: false,
        thresholds: &[("calories_per_100g", 400.0)],
    },
    DiseaseRecord {
        key: "celiac_disease",
        triggers: &[
            (
                SeverityTier::Critical,
                &[
                    "gluten", "wheat", "barley", "rye", "spelt", "kamut", "triticale",
                    "wheat berries", "wheat germ", "wheat bran", "farina", "durum", "einkorn",
                    "emmer", "farro", "graham flour", "semolina", "couscous", "bulgur",
                    "seitan", "malt", "malt extract", "malt vinegar", "brewer's yeast",
                    "barley malt", "rye bread", "pumpernickel",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "oats", "modified food starch", "dextrin", "caramel color",
                    "natural flavors", "soy sauce", "teriyaki sauce", "hoisin sauce", "miso",
                    "imitation crab", "blue cheese", "communion wafers",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "rice", "corn", "quinoa", "buckwheat", "amaranth", "millet", "sorghum",
                    "teff", "certified gluten-free oats", "arrowroot", "tapioca",
                    "potato starch", "cassava", "nut flours", "coconut flour",
                ],
            ),
        ],
        beneficial: &[
            "gluten-free grains", "quinoa", "rice", "corn", "buckwheat", "amaranth", "millet",
            "sorghum", "teff", "certified gluten-free oats", "potatoes", "sweet potatoes",
            "legumes", "nuts", "seeds", "fresh meats", "fish", "eggs", "fruits", "vegetables",
        ],
        severity_weight: 2.0,
        critical: true,
        thresholds: &[],
    },
    DiseaseRecord {
        key: "lactose_intolerance",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "lactose", "milk", "whey", "curd", "cheese", "cream", "buttermilk",
                    "condensed milk", "evaporated milk", "powdered milk", "malted milk",
                    "cream cheese", "sour cream", "ice cream", "yogurt", "kefir", "casein",
                    "caseinates", "milk solids", "non-fat dry milk", "lactulose",
                    "milk chocolate", "white chocolate", "whey protein concentrate",
                    "whey powder",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "butter", "ghee", "margarine", "creamy soups", "creamy sauces",
                    "gravy mixes", "creamy salad dressings", "protein bars",
                    "meal replacement shakes", "processed breakfast cereals",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "lactose-free dairy", "lactose-free milk", "aged hard cheeses", "parmesan",
                    "cheddar", "swiss cheese", "probiotic yogurt",
                ],
            ),
        ],
        beneficial: &[
            "lactase enzyme", "fermented dairy", "lactose-free dairy products", "almond milk",
            "soy milk", "oat milk", "rice milk", "calcium-fortified juices", "broccoli",
            "almonds", "canned fish with bones", "calcium-set tofu", "tempeh", "sauerkraut",
            "kimchi", "probiotic supplements",
        ],
        severity_weight: 1.2,
        critical: false,
        thresholds: &[("lactose_g", 1.0)],
    },
    // ── Digestive ───────────────────────────────────────────
    DiseaseRecord {
        key: "ibs",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "fodmaps", "onion", "garlic", "wheat", "beans", "lentils", "asparagus",
                    "artichokes", "cauliflower", "mushrooms", "apples", "pears", "mango",
                    "watermelon", "peaches", "plums", "dried fruit", "fruit juice",
                    "high-fructose corn syrup", "honey", "agave", "milk", "soft cheeses",
                    "yogurt", "rye", "barley", "cashews", "pistachios", "chickpeas", "inulin",
                    "mannitol", "sorbitol", "xylitol", "isomalt",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "dairy", "caffeine", "artificial sweeteners", "broccoli", "cabbage",
                    "bell peppers", "celery", "corn", "cherries", "nectarines", "apricots",
                    "blackberries", "canned coconut milk", "cottage cheese", "ricotta",
                    "coffee", "black tea", "cola", "aspartame", "spicy foods", "fried foods",
                ],
            ),
            (
                SeverityTier::Low,
                &["gluten", "fructose", "wheat-based products"],
            ),
        ],
        beneficial: &[
            "low-fodmap foods", "peppermint oil", "fiber", "ginger", "turmeric",
            "fennel seeds", "chamomile", "ripe bananas", "blueberries", "strawberries",
            "oranges", "grapes", "carrots", "cucumbers", "lettuce", "potatoes", "zucchini",
            "oats", "quinoa", "rice", "eggs", "tofu", "lean meats", "fish",
            "lactose-free dairy", "almond milk", "psyllium husk",
        ],
        severity_weight: 1.1,
        critical: false,
        thresholds: &[],
    },
    // ── Renal ───────────────────────────────────────────────
    DiseaseRecord {
        key: "kidney_disease",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "potassium", "phosphorus", "sodium", "bananas", "oranges", "tomatoes",
                    "potatoes", "sweet potatoes", "spinach", "avocados", "dried fruits",
                    "beans", "lentils", "nuts", "seeds", "dairy products", "cola",
                    "processed meats", "whole grains", "chocolate", "bran", "wheat germ",
                    "soy products", "salt substitutes", "sea salt", "soy sauce",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "melons", "mangoes", "kiwis", "pomegranates", "beets", "brussels sprouts",
                    "pumpkin", "squash", "mushrooms", "peas", "corn", "whole wheat bread",
                    "brown rice", "oatmeal", "yogurt", "cheese", "ice cream", "pudding",
                    "organ meats", "shellfish", "protein powders",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "preservatives", "canned soups", "frozen dinners", "instant noodles",
                    "snack chips", "cured meats", "pickled foods", "bouillon cubes", "msg",
                    "sodium benzoate", "phosphoric acid", "artificial flavors",
                ],
            ),
        ],
        beneficial: &[
            "apples", "berries", "pineapple", "cabbage", "cauliflower", "onions", "garlic",
            "bell peppers", "radishes", "turnips", "cucumber", "eggplant", "white bread",
            "white rice", "pasta", "egg whites", "olive oil", "vinegar", "lemon juice",
            "ginger", "turmeric",
        ],
        severity_weight: 1.5,
        critical: false,
        thresholds: &[("potassium_mg", 200.0), ("phosphorus_mg", 100.0)],
    },
    DiseaseRecord {
        key: "gout",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "purines", "red meat", "organ meat", "seafood", "alcohol", "beef", "lamb",
                    "pork", "venison", "liver", "kidneys", "sweetbreads", "anchovies",
                    "sardines", "mackerel", "herring", "trout", "tuna", "scallops", "mussels",
                    "crab", "lobster", "shrimp", "beer", "whiskey", "vodka", "gin", "rum",
                    "yeast extracts", "meat extracts", "bouillon", "gravies",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "fructose", "sugary drinks", "yeast", "high-fructose corn syrup", "soda",
                    "fruit juices", "pastries", "cakes", "candy", "chocolate", "baker's yeast",
                    "nutritional yeast", "asparagus", "spinach", "cauliflower", "mushrooms",
                    "peas", "beans", "lentils",
                ],
            ),
            (
                SeverityTier::Low,
                &["plant purines", "legumes", "whole grains", "nuts", "seeds"],
            ),
        ],
        beneficial: &[
            "cherries", "vitamin c", "water", "low-fat dairy", "tart cherry juice",
            "strawberries", "blueberries", "citrus fruits", "bell peppers", "broccoli",
            "kiwi", "skim milk", "low-fat yogurt", "olive oil", "flaxseeds",
        ],
        severity_weight: 1.3,
        critical: false,
        thresholds: &[],
    },
    // ── Neurological ────────────────────────────────────────
    DiseaseRecord {
        key: "migraine",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "tyramine", "msg", "nitrates", "caffeine", "alcohol", "aged cheddar",
                    "blue cheese", "gouda", "salami", "pepperoni", "sauerkraut", "soy sauce",
                    "miso", "teriyaki sauce", "smoked fish", "dried fish", "overripe bananas",
                    "red wine", "beer", "champagne", "vermouth", "monosodium glutamate",
                    "hydrolyzed vegetable protein", "autolyzed yeast", "sodium nitrite",
                    "cured meats", "hot dogs", "bacon", "ham", "energy drinks",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "aged cheese", "processed meat", "chocolate", "citrus", "parmesan", "feta",
                    "brie", "camembert", "corned beef", "pastrami", "bologna", "oranges",
                    "lemons", "limes", "grapefruit", "tomatoes", "onions", "peanuts",
                    "pickled foods",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "artificial sweeteners", "fermented foods", "aspartame", "sucralose",
                    "yogurt", "kefir", "kombucha", "sourdough bread", "vinegar",
                ],
            ),
        ],
        beneficial: &[
            "magnesium", "riboflavin", "coenzyme q10", "leafy green vegetables", "nuts",
            "seeds", "whole grains", "legumes", "avocado", "bananas", "fatty fish",
            "spinach", "broccoli", "eggs", "ginger", "feverfew", "omega-3 fatty acids",
        ],
        severity_weight: 1.2,
        critical: false,
        thresholds: &[],
    },
    // ── Endocrine ───────────────────────────────────────────
    DiseaseRecord {
        key: "pcos",
        triggers: &[
            (
                SeverityTier::High,
                &[
                    "high glycemic foods", "sugars", "refined carbs", "white bread",
                    "white rice", "pastries", "cakes", "cookies", "sugary cereals", "soda",
                    "fruit juices", "candy", "chocolate bars", "ice cream", "sweetened yogurt",
                    "syrups", "jams", "honey", "agave", "dried fruits", "cornflakes",
                    "rice cakes", "pretzels",
                ],
            ),
            (
                SeverityTier::Medium,
                &[
                    "saturated fats", "processed foods", "dairy", "fatty red meat", "butter",
                    "cream", "cheese", "fried foods", "fast food", "frozen meals",
                    "canned soups", "packaged snacks", "full-fat yogurt", "cream-based sauces",
                    "gravies", "processed meats",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "gluten", "soy", "wheat products", "barley", "rye", "soy milk", "tofu",
                    "tempeh", "edamame", "soy protein isolate",
                ],
            ),
        ],
        beneficial: &[
            "fiber", "lean protein", "anti-inflammatory foods", "leafy greens",
            "cruciferous vegetables", "berries", "cherries", "fatty fish", "flaxseeds",
            "chia seeds", "walnuts", "extra virgin olive oil", "turmeric", "ginger",
            "garlic", "cinnamon", "green tea", "lentils", "quinoa", "buckwheat",
            "sweet potatoes", "avocado", "spearmint tea",
        ],
        severity_weight: 1.3,
        critical: false,
        thresholds: &[("sugar_g", 10.0)],
    },
    DiseaseRecord {
        key: "thyroid_issues",
        triggers: &[
            (
                SeverityTier::Medium,
                &[
                    "goitrogens", "soy", "cruciferous vegetables", "gluten", "broccoli",
                    "cauliflower", "cabbage", "kale", "brussels sprouts", "bok choy",
                    "turnips", "radishes", "mustard greens", "collard greens", "soy milk",
                    "tofu", "tempeh", "edamame", "soy protein", "soy sauce", "miso", "wheat",
                    "barley", "rye", "triticale", "peanuts", "pine nuts", "millet",
                ],
            ),
            (
                SeverityTier::Low,
                &[
                    "processed foods", "sugars", "refined carbohydrates", "added sugars",
                    "artificial sweeteners", "food colorings", "preservatives", "fast food",
                    "packaged snacks", "sugary beverages",
                ],
            ),
        ],
        beneficial: &[
            "iodine", "selenium", "zinc", "iron", "seaweed", "fish", "shellfish",
            "iodized salt", "eggs", "brazil nuts", "sunflower seeds", "mushrooms",
            "whole grains", "poultry", "legumes", "spinach", "pumpkin seeds", "quinoa",
            "dark chocolate", "fermented foods",
        ],
        severity_weight: 1.1,
        critical: false,
        thresholds: &[],
    },
];
