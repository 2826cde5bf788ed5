use std::collections::HashMap;

use recipe_steps::nlp::{
    Dependency, Doc, EntityLabel, Lexicon, NounChunk, PartOfSpeech, RuleTagger, Tagger, Token,
};
use recipe_steps::{Ingredient, IngredientState, Quantity, Recipe, StepParser};

/// Replays hand-written parses for known sentences and defers to the rule
/// tagger for everything else.
struct ScriptedTagger {
    docs: HashMap<String, Doc>,
    fallback: RuleTagger,
}

impl ScriptedTagger {
    fn new(docs: Vec<(&str, Doc)>) -> Self {
        Self {
            docs: docs
                .into_iter()
                .map(|(text, doc)| (text.to_string(), doc))
                .collect(),
            fallback: RuleTagger::new(),
        }
    }
}

impl Tagger for ScriptedTagger {
    fn tag(&self, text: &str) -> Doc {
        self.docs
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.tag(text))
    }
}

fn tok(index: usize, text: &str, pos: PartOfSpeech, dep: Dependency, head: usize) -> Token {
    Token {
        index,
        text: text.to_string(),
        lemma: text.to_lowercase(),
        pos,
        dep,
        head,
        trailing_space: true,
        ent_type: None,
    }
}

fn qty(n: i64) -> Quantity {
    Quantity::from_integer(n)
}

fn flour_and_eggs() -> Vec<Ingredient> {
    vec![
        Ingredient::new("flour").with_quantity(qty(2)).with_unit("cup"),
        Ingredient::new("egg").with_quantity(qty(3)),
    ]
}

fn remaining_quantity(state: &IngredientState, name: &str) -> Option<Quantity> {
    state.get(name).and_then(|ingredient| ingredient.quantity)
}

#[test]
fn test_instruction_splits_into_sentences() {
    let parser = StepParser::default();
    let recipe = parser.build_recipe(
        "Cake",
        flour_and_eggs(),
        &["Mix flour and sugar. Bake for 10 minutes."],
    );

    let texts: Vec<&str> = recipe.steps.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Mix flour and sugar.", "Bake for 10 minutes."]);
    assert_eq!(recipe.steps[1].times, vec!["10 minutes"]);
}

#[test]
fn test_whisk_then_add_scenario() {
    let parser = StepParser::default();
    let recipe = parser.build_recipe(
        "Batter",
        flour_and_eggs(),
        &["Whisk 2 eggs; add 1 cup flour."],
    );
    assert_eq!(recipe.steps.len(), 2);

    let whisk = &recipe.steps[0];
    assert_eq!(whisk.text, "Whisk 2 eggs.");
    assert!(whisk.methods.contains(&"whisk".to_string()));
    assert_eq!(whisk.ingredients, vec![Ingredient::new("egg").with_quantity(qty(2))]);
    assert_eq!(remaining_quantity(&whisk.state, "egg"), Some(qty(1)));
    assert_eq!(remaining_quantity(&whisk.state, "flour"), Some(qty(2)));

    let add = &recipe.steps[1];
    assert_eq!(add.text, "Add 1 cup flour.");
    assert!(add.methods.contains(&"add".to_string()));
    assert_eq!(
        add.ingredients,
        vec![Ingredient::new("flour").with_quantity(qty(1)).with_unit("cup")]
    );
    assert_eq!(remaining_quantity(&add.state, "flour"), Some(qty(1)));
    // carried over from the whisk step
    assert_eq!(remaining_quantity(&add.state, "egg"), Some(qty(1)));

    // the declared ingredient list is left alone
    assert_eq!(recipe.ingredients, flour_and_eggs());
}

#[test]
fn test_repeated_use_depletes_then_removes() {
    let parser = StepParser::default();
    let pool = vec![Ingredient::new("flour").with_quantity(qty(2)).with_unit("cup")];
    let recipe = parser.build_recipe("Dough", pool, &["Add 1 cup flour.", "Add 1 cup flour."]);

    assert_eq!(remaining_quantity(&recipe.steps[0].state, "flour"), Some(qty(1)));
    assert!(recipe.steps[1].state.remaining.is_empty());
    assert_eq!(
        recipe.steps[1].ingredients,
        vec![Ingredient::new("flour").with_quantity(qty(1)).with_unit("cup")]
    );
}

#[test]
fn test_signed_or_oversized_amounts_never_grow_the_ledger() {
    let parser = StepParser::default();
    let pool = vec![Ingredient::new("flour").with_quantity(qty(2)).with_unit("cup")];
    let recipe = parser.build_recipe(
        "Dough",
        pool,
        &["Add -1 cup flour.", "Add -9223372036854775808/-1 cups flour."],
    );

    assert_eq!(recipe.steps.len(), 2);
    for step in &recipe.steps {
        for ingredient in &step.state.remaining {
            assert!(ingredient.quantity <= Some(qty(2)));
        }
        for used in &step.ingredients {
            assert!(used.quantity.map_or(true, |q| q > Quantity::ZERO));
        }
    }
}

#[test]
fn test_ledger_chains_across_instructions() {
    let parser = StepParser::default();
    let mut recipe = Recipe::new("Omelette", flour_and_eggs());

    parser.add_instruction(&mut recipe, "Crack 2 eggs into a bowl.");
    let after_first = recipe.steps[0].state.clone();
    parser.add_instruction(&mut recipe, "Whisk in the flour.");

    assert_eq!(remaining_quantity(&after_first, "egg"), Some(qty(1)));
    assert_eq!(recipe.steps[0].tools, vec!["a bowl"]);
    assert_eq!(recipe.tools, vec!["a bowl"]);

    // the second step starts from the first step's ledger, not the full pool
    let second = &recipe.steps[1];
    assert_eq!(remaining_quantity(&second.state, "egg"), Some(qty(1)));
    assert!(second.state.get("flour").is_none());
    // earlier snapshots stay as they were
    assert_eq!(recipe.steps[0].state, after_first);
}

#[test]
fn test_ambiguous_reference_uses_every_candidate() {
    let parser = StepParser::default();
    let pool = vec![
        Ingredient::new("brown sugar").with_quantity(qty(1)).with_unit("cup"),
        Ingredient::new("butter").with_quantity(qty(1)).with_unit("stick"),
        Ingredient::new("white sugar").with_quantity(qty(1)).with_unit("cup"),
    ];
    let recipe = parser.build_recipe("Cookies", pool, &["Stir in the sugar."]);
    let step = &recipe.steps[0];

    let names: Vec<&str> = step.ingredients.iter().map(|i| i.name_or_empty()).collect();
    assert_eq!(names, vec!["brown sugar", "white sugar"]);
    let left: Vec<&str> = step.state.remaining.iter().map(|i| i.name_or_empty()).collect();
    assert_eq!(left, vec!["butter"]);
}

#[test]
fn test_tools_and_temperatures() {
    let parser = StepParser::default();
    let recipe = parser.build_recipe(
        "Roast",
        vec![],
        &["Preheat the oven to 350 degrees F.", "Chill overnight."],
    );

    let preheat = &recipe.steps[0];
    assert_eq!(preheat.methods, vec!["preheat"]);
    assert_eq!(preheat.tools, vec!["the oven"]);
    assert_eq!(preheat.temps, vec!["350 degrees F"]);

    assert_eq!(recipe.steps[1].times, vec!["overnight"]);
}

#[test]
fn test_conjoined_methods() {
    let parser = StepParser::default();
    let recipe = parser.build_recipe("Mousse", vec![], &["Stir and fold the cream."]);
    assert_eq!(recipe.steps[0].methods, vec!["stir", "fold"]);
}

#[test]
fn test_split_measure_chunk_joins_the_next_chunk() {
    let sentence = "add 2 cups of flour.";
    let mut two = tok(1, "2", PartOfSpeech::Num, Dependency::NumModifier, 2);
    two.ent_type = Some(EntityLabel::Cardinal);
    let mut period = tok(5, ".", PartOfSpeech::Punct, Dependency::Punct, 0);
    period.trailing_space = false;
    let mut flour = tok(4, "flour", PartOfSpeech::Noun, Dependency::PrepObject, 3);
    flour.trailing_space = false;
    let doc = Doc {
        tokens: vec![
            tok(0, "add", PartOfSpeech::Verb, Dependency::Root, 0),
            two,
            tok(2, "cups", PartOfSpeech::Noun, Dependency::DirectObject, 0),
            tok(3, "of", PartOfSpeech::Adposition, Dependency::Prep, 2),
            flour,
            period,
        ],
        noun_chunks: vec![
            NounChunk { start: 1, end: 3, root: 2 },
            NounChunk { start: 4, end: 5, root: 4 },
        ],
        entities: vec![],
    };

    let parser = StepParser::new(ScriptedTagger::new(vec![(sentence, doc)]), Lexicon::new());
    let pool = vec![Ingredient::new("flour").with_quantity(qty(3)).with_unit("cups")];
    let step = parser.build_step("Add 2 cups of flour.", IngredientState::new(pool));

    assert_eq!(step.methods, vec!["add"]);
    // "cups" is not reported as a tool; it became the unit of the flour
    assert!(step.tools.is_empty());
    assert_eq!(
        step.ingredients,
        vec![Ingredient::new("flour").with_quantity(qty(2)).with_unit("cups")]
    );
    assert_eq!(remaining_quantity(&step.state, "flour"), Some(qty(1)));
}

#[test]
fn test_imperative_read_as_noun_phrase_is_corrected() {
    let sentence = "sift the flour.";
    let mut flour = tok(2, "flour", PartOfSpeech::Noun, Dependency::Root, 2);
    flour.trailing_space = false;
    let doc = Doc {
        tokens: vec![
            tok(0, "sift", PartOfSpeech::Noun, Dependency::Compound, 2),
            tok(1, "the", PartOfSpeech::Determiner, Dependency::Determiner, 2),
            flour,
            tok(3, ".", PartOfSpeech::Punct, Dependency::Punct, 2),
        ],
        noun_chunks: vec![NounChunk { start: 0, end: 3, root: 2 }],
        entities: vec![],
    };

    let parser = StepParser::new(ScriptedTagger::new(vec![(sentence, doc)]), Lexicon::new());
    let step = parser.build_step("Sift the flour.", IngredientState::new(flour_and_eggs()));

    assert_eq!(step.methods, vec!["sift"]);
    assert_eq!(
        step.ingredients,
        vec![Ingredient::new("the flour").with_quantity(qty(2)).with_unit("cup")]
    );
    assert!(step.state.get("flour").is_none());
    assert_eq!(step.state.remaining.len(), 1);
}

#[test]
fn test_chunks_in_other_roles_are_skipped() {
    let sentence = "let the eggs rest.";
    let doc = Doc {
        tokens: vec![
            tok(0, "let", PartOfSpeech::Verb, Dependency::Root, 0),
            tok(1, "the", PartOfSpeech::Determiner, Dependency::Determiner, 2),
            tok(2, "eggs", PartOfSpeech::Noun, Dependency::Other, 3),
            tok(3, "rest", PartOfSpeech::Verb, Dependency::Other, 0),
            tok(4, ".", PartOfSpeech::Punct, Dependency::Punct, 0),
        ],
        noun_chunks: vec![NounChunk { start: 1, end: 3, root: 2 }],
        entities: vec![],
    };

    let parser = StepParser::new(ScriptedTagger::new(vec![(sentence, doc)]), Lexicon::new());
    let step = parser.build_step("Let the eggs rest.", IngredientState::new(flour_and_eggs()));

    assert_eq!(step.methods, vec!["let"]);
    assert!(step.ingredients.is_empty());
    assert_eq!(step.state.remaining, flour_and_eggs());
}
