use std::collections::HashSet;

use super::lexicon::singularize;
use super::{Dependency, Doc, Entity, EntityLabel, NounChunk, PartOfSpeech, Tagger, Token};
use crate::config::LexiconConfig;

const VERBS: &[&str] = &[
    "add", "arrange", "bake", "baste", "beat", "blend", "boil", "braise", "bring", "broil",
    "brown", "brush", "chill", "chop", "coat", "combine", "cook", "cool", "cover", "crack",
    "crush", "cut", "dice", "dip", "discard", "dissolve", "divide", "drain", "drizzle", "dust",
    "fill", "flip", "fold", "fry", "garnish", "grate", "grease", "grill", "heat", "knead",
    "layer", "let", "line", "marinate", "mash", "measure", "melt", "mince", "mix", "peel",
    "place", "pour", "preheat", "press", "put", "reduce", "refrigerate", "remove", "return",
    "rinse", "roast", "roll", "rub", "saute", "sauté", "scatter", "season", "serve", "set",
    "shake", "shape", "shred", "sift", "simmer", "slice", "soak", "spoon", "spread",
    "sprinkle", "squeeze", "stir", "strain", "stuff", "taste", "toast", "top", "toss",
    "transfer", "trim", "turn", "warm", "wash", "whip", "whisk", "wrap",
];

const DETERMINERS: &[&str] = &[
    "a", "all", "an", "another", "any", "each", "every", "its", "some", "that", "the",
    "their", "these", "this", "those", "your",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "below", "beneath", "beside", "between", "by", "for", "from", "in", "inside",
    "into", "near", "of", "off", "on", "onto", "out", "over", "through", "throughout", "to",
    "toward", "towards", "under", "until", "up", "upon", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "nor", "or", "plus", "then"];

const PRONOUNS: &[&str] = &["everything", "it", "them", "they", "you"];

const ADVERBS: &[&str] = &[
    "again", "aside", "away", "back", "down", "just", "more", "once", "not", "together",
    "too", "very", "well",
];

const ADJECTIVES: &[&str] = &[
    "all-purpose", "big", "black", "brown", "cold", "dark", "dry", "extra", "fresh",
    "golden", "green", "hot", "large", "light", "little", "medium", "red", "remaining",
    "small", "smooth", "sweet", "tender", "thick", "thin", "warm", "white", "whole", "yellow",
];

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "half", "dozen",
];

const TIME_UNITS: &[&str] = &[
    "sec", "secs", "second", "seconds", "min", "mins", "minute", "minutes", "hr", "hrs",
    "hour", "hours", "day", "days",
];

const DATE_WORDS: &[&str] = &["overnight", "tomorrow"];

const LEADING_PUNCT: &[char] = &['(', '"', '\'', '['];
const TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?', ')', '"', '\'', ']'];

/// Deterministic tagger for short imperative recipe sentences.
///
/// It uses closed word lists and position rules only: a cooking verb (or any
/// unknown word followed by a determiner or number) at the start of a clause is
/// an imperative verb, runs of determiners, numbers, adjectives and nouns form
/// noun chunks, and each chunk's dependency label comes from the word in front
/// of it.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    verbs: HashSet<String>,
}

impl RuleTagger {
    pub fn new() -> Self {
        Self::from_config(&LexiconConfig::default())
    }

    pub fn from_config(config: &LexiconConfig) -> Self {
        let verbs = VERBS
            .iter()
            .map(|v| v.to_string())
            .chain(config.verbs.iter().map(|v| v.trim().to_lowercase()))
            .filter(|v| !v.is_empty())
            .collect();
        Self { verbs }
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

fn split_words(text: &str) -> Vec<(String, bool)> {
    let mut words = Vec::new();
    let pieces: Vec<&str> = text.split_whitespace().collect();
    for (n, piece) in pieces.iter().enumerate() {
        let spaced = n + 1 < pieces.len();
        let mut body = *piece;

        let mut leading = Vec::new();
        while let Some(c) = body.chars().next().filter(|c| LEADING_PUNCT.contains(c)) {
            leading.push(c.to_string());
            body = &body[c.len_utf8()..];
        }
        let mut trailing = Vec::new();
        while let Some(c) = body.chars().last().filter(|c| TRAILING_PUNCT.contains(c)) {
            trailing.push(c.to_string());
            body = &body[..body.len() - c.len_utf8()];
        }
        trailing.reverse();

        let parts: Vec<String> = leading
            .into_iter()
            .chain(Some(body.to_string()).filter(|b| !b.is_empty()))
            .chain(trailing)
            .collect();
        let last = parts.len().saturating_sub(1);
        for (i, part) in parts.into_iter().enumerate() {
            words.push((part, spaced && i == last));
        }
    }
    words
}

fn is_numeric(word: &str) -> bool {
    let lower = word.to_lowercase();
    if NUMBER_WORDS.contains(&lower.as_str()) {
        return true;
    }
    let is_digit = |c: char| {
        c.is_ascii_digit() || ('¼'..='¾').contains(&c) || ('⅐'..='⅞').contains(&c)
    };
    lower.chars().any(is_digit)
        && lower
            .chars()
            .all(|c| is_digit(c) || matches!(c, '/' | '.' | '-' | '\u{2044}'))
}

fn in_list(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

impl RuleTagger {
    fn base_pos(&self, lower: &str) -> PartOfSpeech {
        if lower.chars().all(|c| c.is_ascii_punctuation()) {
            PartOfSpeech::Punct
        } else if is_numeric(lower) {
            PartOfSpeech::Num
        } else if in_list(DETERMINERS, lower) {
            PartOfSpeech::Determiner
        } else if in_list(PREPOSITIONS, lower) {
            PartOfSpeech::Adposition
        } else if in_list(CONJUNCTIONS, lower) {
            PartOfSpeech::Conjunction
        } else if in_list(PRONOUNS, lower) {
            PartOfSpeech::Pronoun
        } else if in_list(ADVERBS, lower)
            || (lower.len() > 4 && lower.ends_with("ly") && !lower.ends_with("elly"))
        {
            PartOfSpeech::Adverb
        } else if in_list(ADJECTIVES, lower)
            || (lower.len() > 4 && lower.ends_with("ed") && !self.verbs.contains(lower))
        {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Noun
        }
    }

    /// Imperative verbs open a clause; inside a clause verb-list words such as
    /// "heat" or "slice" are nouns unless they follow a conjunction.
    fn assign_verbs(&self, lowers: &[String], pos: &mut [PartOfSpeech]) {
        for i in 0..pos.len() {
            if !matches!(pos[i], PartOfSpeech::Noun | PartOfSpeech::Adjective) {
                continue;
            }
            let prev = i.checked_sub(1).map(|p| (pos[p], lowers[p].as_str()));
            let clause_start = match prev {
                None => true,
                Some((PartOfSpeech::Punct, text)) => text != "(",
                Some((PartOfSpeech::Conjunction, _)) => true,
                Some((PartOfSpeech::Adverb, _)) => i == 1,
                _ => false,
            };
            if !clause_start {
                continue;
            }
            let next = pos.get(i + 1).copied();
            let hard_start = match prev {
                None => true,
                Some((_, text)) => text == ";" || text == "." || text == "then",
            };
            let opens_object = matches!(
                next,
                Some(PartOfSpeech::Determiner | PartOfSpeech::Num | PartOfSpeech::Pronoun)
            );
            // "brown the beef" but "brown sugar"
            if pos[i] == PartOfSpeech::Adjective && !opens_object {
                continue;
            }
            if self.verbs.contains(&lowers[i]) || (hard_start && opens_object) {
                pos[i] = PartOfSpeech::Verb;
            }
        }
    }
}

fn chunk_spans(pos: &[PartOfSpeech]) -> Vec<NounChunk> {
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < pos.len() {
        let starts = matches!(
            pos[i],
            PartOfSpeech::Determiner
                | PartOfSpeech::Num
                | PartOfSpeech::Adjective
                | PartOfSpeech::Noun
        );
        if !starts {
            i += 1;
            continue;
        }
        let start = i;
        let mut j = i + 1;
        while j < pos.len()
            && matches!(
                pos[j],
                PartOfSpeech::Num | PartOfSpeech::Adjective | PartOfSpeech::Noun
            )
        {
            j += 1;
        }
        if let Some(root) = (start..j).rev().find(|&k| pos[k] == PartOfSpeech::Noun) {
            chunks.push(NounChunk {
                start,
                end: root + 1,
                root,
            });
        }
        i = j;
    }
    chunks
}

fn find_entities(tokens: &mut [Token]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let lower = tokens[i].text.to_lowercase();
        if in_list(DATE_WORDS, &lower) {
            tokens[i].ent_type = Some(EntityLabel::Date);
            entities.push(Entity {
                text: tokens[i].text.clone(),
                label: EntityLabel::Date,
                start: i,
                end: i + 1,
            });
            i += 1;
            continue;
        }
        if tokens[i].pos != PartOfSpeech::Num {
            i += 1;
            continue;
        }
        let start = i;
        while i < tokens.len() && tokens[i].pos == PartOfSpeech::Num {
            i += 1;
        }
        let next = tokens.get(i).map(|t| t.text.to_lowercase());
        let (label, end) = match next.as_deref() {
            Some(unit) if in_list(TIME_UNITS, unit) => (EntityLabel::Time, i + 1),
            Some(unit) if unit.starts_with("degree") || unit.starts_with('°') => {
                (EntityLabel::Quantity, i + 1)
            }
            _ => (EntityLabel::Cardinal, i),
        };
        let mut text = String::new();
        for token in &mut tokens[start..end] {
            token.ent_type = Some(label);
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&token.text);
        }
        entities.push(Entity {
            text,
            label,
            start,
            end,
        });
        i = end;
    }
    entities
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Doc {
        let words = split_words(text);
        let lowers: Vec<String> = words.iter().map(|(w, _)| w.to_lowercase()).collect();
        let mut pos: Vec<PartOfSpeech> = lowers.iter().map(|w| self.base_pos(w)).collect();
        self.assign_verbs(&lowers, &mut pos);

        let chunks = chunk_spans(&pos);
        let verbs: Vec<usize> = (0..pos.len())
            .filter(|&i| pos[i] == PartOfSpeech::Verb)
            .collect();
        let root = verbs
            .first()
            .copied()
            .or_else(|| chunks.first().map(|c| c.root))
            .unwrap_or(0);

        let mut tokens: Vec<Token> = words
            .into_iter()
            .enumerate()
            .map(|(index, (text, trailing_space))| {
                let lemma = match pos[index] {
                    PartOfSpeech::Noun => singularize(&text),
                    _ => lowers[index].clone(),
                };
                let dep = match pos[index] {
                    PartOfSpeech::Punct => Dependency::Punct,
                    PartOfSpeech::Conjunction => Dependency::Coordinator,
                    PartOfSpeech::Adposition => Dependency::Prep,
                    _ => Dependency::Other,
                };
                Token {
                    index,
                    text,
                    lemma,
                    pos: pos[index],
                    dep,
                    head: root,
                    trailing_space,
                    ent_type: None,
                }
            })
            .collect();

        if tokens.is_empty() {
            return Doc::default();
        }
        tokens[root].dep = Dependency::Root;

        // verbs joined to the root by a conjunction or comma
        for &v in verbs.iter().skip(1) {
            let prev = (0..v)
                .rev()
                .find(|&p| tokens[p].pos != PartOfSpeech::Adverb)
                .map(|p| tokens[p].pos);
            if matches!(prev, Some(PartOfSpeech::Conjunction | PartOfSpeech::Punct)) {
                tokens[v].dep = Dependency::Conjunct;
            }
        }

        let mut previous_root: Option<usize> = None;
        for chunk in &chunks {
            for k in chunk.start..chunk.root {
                tokens[k].head = chunk.root;
                tokens[k].dep = match tokens[k].pos {
                    PartOfSpeech::Determiner => Dependency::Determiner,
                    PartOfSpeech::Num => Dependency::NumModifier,
                    PartOfSpeech::Adjective => Dependency::Modifier,
                    _ => Dependency::Compound,
                };
            }
            if chunk.root != root {
                let prev = (0..chunk.start)
                    .rev()
                    .find(|&p| tokens[p].pos != PartOfSpeech::Adverb);
                let (dep, head) = match prev.map(|p| (p, tokens[p].pos)) {
                    Some((p, PartOfSpeech::Adposition)) => (Dependency::PrepObject, p),
                    Some((p, PartOfSpeech::Verb)) => (Dependency::DirectObject, p),
                    Some((_, PartOfSpeech::Conjunction | PartOfSpeech::Punct))
                        if previous_root.is_some() =>
                    {
                        (Dependency::Conjunct, previous_root.unwrap_or(root))
                    }
                    _ => (Dependency::Appositive, root),
                };
                tokens[chunk.root].dep = dep;
                tokens[chunk.root].head = head;
            }
            previous_root = Some(chunk.root);
        }

        let entities = find_entities(&mut tokens);

        Doc {
            tokens,
            noun_chunks: chunks,
            entities,
        }
    }
}
