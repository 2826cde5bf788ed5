//! Matching a noun phrase from an instruction against the ingredient ledger.

use crate::model::Ingredient;

const DETERMINERS: &[&str] = &["the", "a", "an"];

/// Finds the indices of the ledger entries that `name` may refer to.
///
/// An exact name match wins outright. Otherwise every entry whose name
/// contains `name` is a candidate, and once one such substring hit is seen
/// the looser word-overlap scoring is switched off for the rest of the scan.
/// Word overlap counts how many words of `name` occur in an entry's name; an
/// entry must reach half the word count to qualify, a strictly better score
/// replaces the candidates found so far and an equal score joins them.
///
/// An empty result means `name` is not an ingredient reference. Several
/// indices mean the reference is ambiguous; they come back in ledger order.
pub fn find_ingredient(name: &str, ingredients: &[Ingredient]) -> Vec<usize> {
    let mut components: Vec<&str> = name.split_whitespace().collect();
    if components
        .first()
        .is_some_and(|first| DETERMINERS.contains(first))
    {
        components.remove(0);
    }
    let name = components.join(" ");
    if name.is_empty() {
        return Vec::new();
    }

    let words = components.len() as f64;
    let mut max_confidence = words / 2.0;
    let mut matches = Vec::new();

    for (i, ingredient) in ingredients.iter().enumerate() {
        let Some(candidate) = ingredient.name.as_deref() else {
            continue;
        };
        if name == candidate {
            return vec![i];
        } else if candidate.contains(name.as_str()) {
            matches.push(i);
            max_confidence = words + 1.0;
        } else if max_confidence <= words {
            let confidence = components
                .iter()
                .filter(|word| candidate.contains(**word))
                .count() as f64;
            if confidence > max_confidence {
                matches = vec![i];
                max_confidence = confidence;
            } else if confidence == max_confidence {
                matches.push(i);
            }
        }
    }

    matches
}
