use log::warn;

use super::StepParser;
use crate::model::Ingredient;
use crate::nlp::{Doc, NounChunk, NounClassifier, NounType, PartOfSpeech, Tagger};
use crate::quantity::Quantity;

/// Text of tokens `[start, chunk.end)` with the head noun replaced by its lemma,
/// so "2 eggs" names "egg".
fn lemmatized_name(doc: &Doc, start: usize, chunk: &NounChunk) -> String {
    let mut name = String::new();
    for k in start..chunk.end {
        let token = &doc.tokens[k];
        name.push_str(if k == chunk.root { &token.lemma } else { &token.text });
        if token.trailing_space && k + 1 < chunk.end {
            name.push(' ');
        }
    }
    name
}

impl<T: Tagger, C: NounClassifier> StepParser<T, C> {
    /// Reads quantity, unit and name out of a short ingredient phrase such as
    /// "1 1/2 cups flour" or "a pinch of salt".
    ///
    /// Noun chunks are read left to right. A leading "a"/"an" means one,
    /// otherwise the first run of numbers is the quantity; a measure word right
    /// after it is the unit; the rest of the chunk is the name provided it
    /// holds a food word. Quantity and unit carry over to later chunks, so
    /// "a cup of milk" still gets both. Without any food word every field is
    /// left empty or as last set.
    pub fn parse_ingredient(&self, text: &str) -> Ingredient {
        let doc = self.tagger.tag(text);
        let mut ingredient = Ingredient::default();

        for chunk in &doc.noun_chunks {
            let tokens = &doc.tokens;
            let mut i = chunk.start;

            let first = tokens[i].text.as_str();
            if first.eq_ignore_ascii_case("a") || first.eq_ignore_ascii_case("an") {
                ingredient.quantity = Some(Quantity::ONE);
                i += 1;
            } else {
                let mut numbers = Vec::new();
                while i < chunk.end {
                    if tokens[i].pos == PartOfSpeech::Num {
                        numbers.push(tokens[i].text.as_str());
                    } else if !numbers.is_empty() {
                        break;
                    }
                    i += 1;
                }
                if numbers.is_empty() {
                    i = chunk.start;
                } else {
                    let joined = numbers.join(" ");
                    ingredient.quantity = Quantity::parse_nonzero(&joined);
                    if ingredient.quantity.is_none() {
                        warn!("Could not read a quantity from {:?}", joined);
                    }
                }
            }

            if i < chunk.end && self.classifier.is(&tokens[i].text, NounType::Measure) {
                ingredient.unit = Some(tokens[i].text.clone());
                i += 1;
            }

            if (i..chunk.end).any(|j| self.classifier.is(&tokens[j].text, NounType::Food)) {
                ingredient.name = Some(lemmatized_name(&doc, i, chunk));
                return ingredient;
            }
        }

        ingredient
    }
}
