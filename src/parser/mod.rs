//! Turning instruction text into [`Step`]s while tracking which ingredients
//! each step uses up.

use log::{debug, warn};

use crate::config::ParserConfig;
use crate::model::{Ingredient, IngredientState, Recipe, Step};
use crate::quantity::Quantity;
use crate::nlp::{
    Dependency, Doc, EntityLabel, Lexicon, NounClassifier, NounType, PartOfSpeech, RuleTagger,
    Tagger,
};
use crate::resolver::find_ingredient;

mod ingredient;
mod split;

pub use split::{normalize_sentence, split_instruction};

const OBJECT_ROLES: &[Dependency] = &[
    Dependency::DirectObject,
    Dependency::PrepObject,
    Dependency::Conjunct,
    Dependency::Root,
    Dependency::Appositive,
];

/// Builds recipe steps from instruction text using a tagger and a noun classifier.
#[derive(Debug, Clone)]
pub struct StepParser<T, C> {
    tagger: T,
    classifier: C,
}

impl Default for StepParser<RuleTagger, Lexicon> {
    fn default() -> Self {
        Self::new(RuleTagger::new(), Lexicon::new())
    }
}

impl StepParser<RuleTagger, Lexicon> {
    /// Parser backed by the built-in tagger and word lists, extended by `config`.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(
            RuleTagger::from_config(&config.lexicon),
            Lexicon::from_config(&config.lexicon),
        )
    }
}

impl<T: Tagger, C: NounClassifier> StepParser<T, C> {
    pub fn new(tagger: T, classifier: C) -> Self {
        Self { tagger, classifier }
    }

    /// Builds a recipe by feeding every instruction, in order, through
    /// [`StepParser::add_instruction`].
    pub fn build_recipe<S: AsRef<str>>(
        &self,
        title: impl Into<String>,
        ingredients: Vec<Ingredient>,
        instructions: &[S],
    ) -> Recipe {
        let mut recipe = Recipe::new(title, ingredients);
        for instruction in instructions {
            self.add_instruction(&mut recipe, instruction.as_ref());
        }
        recipe
    }

    /// Splits an instruction into sentences and appends one step per sentence.
    ///
    /// Each step starts from the ledger the previous step left behind. Tools
    /// not seen before are added to the recipe's tool list.
    pub fn add_instruction(&self, recipe: &mut Recipe, instruction: &str) {
        for fragment in split_instruction(instruction) {
            let text = normalize_sentence(&fragment);
            let step = self.build_step(&text, recipe.current_state());
            for tool in &step.tools {
                if !recipe.tools.contains(tool) {
                    recipe.tools.push(tool.clone());
                }
            }
            recipe.steps.push(step);
        }
    }

    /// Parses one sentence into a step, charging consumed ingredients to `state`.
    pub fn build_step(&self, text: &str, state: IngredientState) -> Step {
        let mut step = Step::new(text, state);
        let mut doc = self.tagger.tag(&split::decapitalize(text));

        let method_tokens = find_methods(&mut step, &mut doc);
        self.parse_nouns(&mut step, &doc, &method_tokens);

        for entity in &doc.entities {
            if matches!(entity.label, EntityLabel::Time | EntityLabel::Date) {
                step.times.push(entity.text.clone());
            }
        }

        debug!(
            "Step {:?}: methods={:?} ingredients={} tools={:?} times={:?} temps={:?}",
            step.text,
            step.methods,
            step.ingredients.len(),
            step.tools,
            step.times,
            step.temps
        );
        step
    }

    /// Routes every noun chunk to tools, temperatures or consumed ingredients.
    fn parse_nouns(&self, step: &mut Step, doc: &Doc, method_tokens: &[usize]) {
        let mut from_prev: Option<String> = None;

        for chunk in &doc.noun_chunks {
            // a chunk that swallowed the verb keeps only what follows it
            let mut start = chunk.start;
            if let Some(&verb) = method_tokens
                .iter()
                .filter(|&&m| m >= chunk.start && m < chunk.end)
                .max()
            {
                start = verb + 1;
                if start >= chunk.end {
                    continue;
                }
            }

            let mut name = doc.span_text(start, chunk.end);
            if let Some(prefix) = from_prev.take() {
                name = format!("{} {}", prefix, name);
            }

            let root = doc.root(chunk);
            if !OBJECT_ROLES.contains(&root.dep) {
                continue;
            }

            let types = self.classifier.classify(&root.text);
            if types.contains(&NounType::Measure)
                && doc.tokens[chunk.start].ent_type == Some(EntityLabel::Cardinal)
            {
                // "2 cups" split from "flour": read them together
                from_prev = Some(doc.chunk_text(chunk));
                continue;
            }

            if types.contains(&NounType::Tool) {
                step.tools.push(doc.chunk_text(chunk));
            } else if types.contains(&NounType::Temperature)
                || (chunk.len() > 2 && doc.tokens[chunk.end - 2].text == "degrees")
            {
                let text = doc.chunk_text(chunk);
                step.temps.push(
                    text.trim_matches(|c| matches!(c, '(' | ')' | '.' | ':' | ','))
                        .to_string(),
                );
            } else {
                let reference = self.parse_ingredient(&name);
                if reference.name.is_some() {
                    charge_ingredient(step, reference);
                }
            }
        }
    }
}

/// Finds the verbs the step is about and returns their token indices.
///
/// The root is a method, and so is a conjunct of a method ("stir and fold").
/// When the tagger read the whole imperative as a noun phrase, the first word
/// of the clause is promoted to root and the old root demoted to object.
fn find_methods(step: &mut Step, doc: &mut Doc) -> Vec<usize> {
    let mut methods = Vec::new();

    for i in 0..doc.tokens.len() {
        let head = doc.tokens[i].head;
        if doc.tokens[i].dep == Dependency::Root
            && doc.tokens.get(head).map(|t| t.pos) == Some(PartOfSpeech::Noun)
        {
            if let Some(j) =
                (0..=i).rev().find(|&j| j == 0 || doc.tokens[j - 1].dep == Dependency::Punct)
            {
                doc.tokens[j].dep = Dependency::Root;
                doc.tokens[i].dep = Dependency::DirectObject;
                debug!(
                    "Promoting {:?} to root over noun {:?}",
                    doc.tokens[j].text, doc.tokens[i].text
                );
                step.methods.push(doc.tokens[j].text.clone());
                methods.push(j);
            }
        }

        let token = &doc.tokens[i];
        if token.dep == Dependency::Root {
            step.methods.push(token.text.clone());
            methods.push(i);
        } else if token.dep == Dependency::Conjunct {
            let head_text = doc.tokens.get(token.head).map(|t| t.text.as_str());
            if head_text.is_some_and(|h| step.methods.iter().any(|m| m == h)) {
                step.methods.push(token.text.clone());
                methods.push(i);
            }
        }
    }

    methods
}

/// Charges a referenced ingredient against the ledger.
///
/// Every ledger entry the reference resolves to is charged, so an ambiguous
/// reference uses up all of its candidates. A charge at least as large as
/// what is left removes the entry; a smaller one reduces it. Entries with no
/// recorded quantity are never removed, and a non-positive amount charges
/// nothing.
fn charge_ingredient(step: &mut Step, reference: Ingredient) {
    let indices = find_ingredient(reference.name_or_empty(), &step.state.remaining);
    let single = indices.len() == 1;
    let mut offset = 0;

    for i in indices {
        let idx = i - offset;
        let entry = &step.state.remaining[idx];
        let used = Ingredient {
            name: if single {
                reference.name.clone()
            } else {
                entry.name.clone()
            },
            quantity: reference.quantity.or(entry.quantity),
            unit: reference.unit.clone().or_else(|| entry.unit.clone()),
        };

        match (used.quantity, entry.quantity) {
            // the ledger only ever shrinks
            (Some(amount), _) if amount <= Quantity::ZERO => {
                warn!("Ignoring amount {} for {:?}", amount, entry.name);
            }
            (Some(amount), Some(left)) if left <= amount => {
                debug!("Used up {:?}", entry.name);
                step.state.remaining.remove(idx);
                offset += 1;
            }
            (Some(amount), Some(left)) => {
                debug!("Charged {} against {:?}", amount, entry.name);
                step.state.remaining[idx].quantity = Some(left - amount);
            }
            _ => {}
        }
        step.ingredients.push(used);
    }
}
