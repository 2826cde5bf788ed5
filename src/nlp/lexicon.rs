use std::collections::HashSet;

use super::{NounClassifier, NounType};
use crate::config::LexiconConfig;

const FOODS: &[&str] = &[
    "allspice", "almond", "anchovy", "apple", "apricot", "asparagus", "avocado", "bacon",
    "banana", "basil", "batter", "bean", "beef", "beet", "berry", "biscuit", "blueberry",
    "bread", "breadcrumb", "broccoli", "broth", "butter", "buttermilk", "cabbage", "cake",
    "caper", "cardamom", "carrot", "cashew", "cauliflower", "cayenne", "celery", "cheddar",
    "cheese", "cherry", "chicken", "chickpea", "chili", "chive", "chocolate", "cilantro",
    "cinnamon", "clove", "cocoa", "coconut", "cod", "coffee", "corn", "cornmeal", "cornstarch",
    "crab", "cracker", "cranberry", "cream", "cucumber", "cumin", "curry", "date", "dill",
    "dough", "dressing", "duck", "egg", "eggplant", "fennel", "feta", "fig", "fillet", "fish",
    "flour", "garlic", "gelatin", "ginger", "glaze", "grape", "gravy", "ham", "herb", "honey",
    "jam", "juice", "kale", "ketchup", "lamb", "lard", "leaf", "leek", "lemon", "lentil",
    "lettuce", "lime", "lobster", "margarine", "marinade", "mayonnaise", "meat", "milk", "mint",
    "molasses", "mozzarella", "mushroom", "mussel", "mustard", "noodle", "nut", "nutmeg", "oat",
    "oil", "olive", "onion", "orange", "oregano", "paprika", "parmesan", "parsley", "pasta",
    "pastry", "pea", "peach", "peanut", "pear", "pecan", "pepper", "pie", "pineapple",
    "pistachio", "pork", "potato", "powder", "prosciutto", "pumpkin", "raisin", "raspberry",
    "rice", "ricotta", "rosemary", "saffron", "sage", "salmon", "salsa", "salt", "sauce",
    "sausage", "scallion", "seed", "sesame", "shallot", "shortening", "shrimp", "soda", "soup",
    "spinach", "squash", "steak", "stock", "strawberry", "sugar", "syrup", "thyme", "tofu",
    "tomato", "tortilla", "tuna", "turkey", "turmeric", "vanilla", "vinegar", "walnut", "water",
    "wine", "yeast", "yogurt", "yolk", "zucchini",
];

const MEASURES: &[&str] = &[
    "bunch", "can", "clove", "cup", "dash", "day", "drop", "g", "gallon", "gram", "handful",
    "head", "hour", "hr", "inch", "jar", "kg", "kilogram", "l", "lb", "liter", "litre",
    "milliliter", "min", "minute", "ml", "ounce", "oz", "package", "piece", "pinch", "pint",
    "pound", "quart", "second", "slice", "sprig", "stalk", "stick", "tablespoon", "tbsp",
    "teaspoon", "tsp",
];

const TOOLS: &[&str] = &[
    "blender", "board", "bowl", "casserole", "colander", "cup", "dish", "foil", "fork",
    "grater", "griddle", "grill", "jar", "knife", "ladle", "lid", "mixer", "mold", "oven",
    "pan", "parchment", "peeler", "plate", "platter", "pot", "processor", "rack", "ramekin",
    "saucepan", "sheet", "sieve", "skewer", "skillet", "spatula", "spoon", "stockpot",
    "strainer", "thermometer", "tin", "tongs", "tray", "whisk", "wok",
];

const TEMPERATURES: &[&str] = &[
    "boil", "celsius", "degree", "fahrenheit", "flame", "heat", "simmer", "temperature",
];

const INVARIANT: &[&str] = &[
    "asparagus", "couscous", "grits", "hummus", "molasses", "swiss", "tongs",
];

/// Folds a regular English plural to its singular form.
///
/// Only handles the suffix patterns common in ingredient lists, it is not a
/// general lemmatizer.
pub(crate) fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.len() < 4 || INVARIANT.contains(&lower.as_str()) {
        return lower;
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    for suffix in ["oes", "ches", "shes", "sses", "xes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") {
        return lower[..lower.len() - 1].to_string();
    }
    lower
}

/// Word-list noun classifier.
#[derive(Debug, Clone)]
pub struct Lexicon {
    food: HashSet<String>,
    measure: HashSet<String>,
    tool: HashSet<String>,
    temperature: HashSet<String>,
}

fn word_set(defaults: &[&str], extra: &[String]) -> HashSet<String> {
    defaults
        .iter()
        .map(|w| w.to_string())
        .chain(extra.iter().map(|w| w.trim().to_lowercase()))
        .filter(|w| !w.is_empty())
        .collect()
}

impl Lexicon {
    pub fn new() -> Self {
        Self::from_config(&LexiconConfig::default())
    }

    pub fn from_config(config: &LexiconConfig) -> Self {
        Self {
            food: word_set(FOODS, &config.food),
            measure: word_set(MEASURES, &config.measure),
            tool: word_set(TOOLS, &config.tool),
            temperature: word_set(TEMPERATURES, &config.temperature),
        }
    }

    fn lookup(set: &HashSet<String>, lower: &str, singular: &str) -> bool {
        set.contains(lower) || set.contains(singular)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl NounClassifier for Lexicon {
    fn classify(&self, word: &str) -> Vec<NounType> {
        let lower = word.trim().to_lowercase();
        if lower.is_empty() {
            return Vec::new();
        }
        let singular = singularize(&lower);

        let mut types = Vec::new();
        if Self::lookup(&self.tool, &lower, &singular) {
            types.push(NounType::Tool);
        }
        if Self::lookup(&self.measure, &lower, &singular) {
            types.push(NounType::Measure);
        }
        if Self::lookup(&self.food, &lower, &singular) {
            types.push(NounType::Food);
        }
        if lower.contains('°') || Self::lookup(&self.temperature, &lower, &singular) {
            types.push(NounType::Temperature);
        }
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("eggs"), "egg");
        assert_eq!(singularize("Berries"), "berry");
        assert_eq!(singularize("tomatoes"), "tomato");
        assert_eq!(singularize("peaches"), "peach");
        assert_eq!(singularize("glass"), "glass");
        assert_eq!(singularize("molasses"), "molasses");
        assert_eq!(singularize("cups"), "cup");
        assert_eq!(singularize("egg"), "egg");
    }

    #[test]
    fn test_classify_categories() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.classify("eggs"), vec![NounType::Food]);
        assert_eq!(lexicon.classify("Cups"), vec![NounType::Tool, NounType::Measure]);
        assert_eq!(lexicon.classify("skillet"), vec![NounType::Tool]);
        assert_eq!(lexicon.classify("minutes"), vec![NounType::Measure]);
        assert!(lexicon.is("degrees", NounType::Temperature));
        assert!(lexicon.is("350°F", NounType::Temperature));
        assert!(lexicon.classify("happiness").is_empty());
    }

    #[test]
    fn test_config_extends_word_lists() {
        let config = LexiconConfig {
            food: vec!["Gochujang".to_string()],
            tool: vec!["mandoline".to_string()],
            ..Default::default()
        };
        let lexicon = Lexicon::from_config(&config);
        assert!(lexicon.is("gochujang", NounType::Food));
        assert!(lexicon.is("mandolines", NounType::Tool));
        // defaults are kept
        assert!(lexicon.is("flour", NounType::Food));
    }
}
