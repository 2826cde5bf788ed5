//! Token, chunk and entity types produced by a sentence tagger, plus the
//! two capabilities the step parser depends on: [`Tagger`] and
//! [`NounClassifier`].
//!
//! Any part-of-speech/dependency tagger can drive the parser as long as it
//! fills in a [`Doc`]. The crate ships a small rule based one
//! ([`RuleTagger`]) and a word-list classifier ([`Lexicon`]).

use serde::{Deserialize, Serialize};

mod lexicon;
mod rule_tagger;

pub use lexicon::Lexicon;
pub use rule_tagger::RuleTagger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Adposition,
    Determiner,
    Conjunction,
    Pronoun,
    Num,
    Punct,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dependency {
    Root,
    DirectObject,
    PrepObject,
    Conjunct,
    Appositive,
    Prep,
    Determiner,
    NumModifier,
    Compound,
    Modifier,
    Coordinator,
    Punct,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Time,
    Date,
    Cardinal,
    Quantity,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub dep: Dependency,
    /// Index of the syntactic head; a root token is its own head
    pub head: usize,
    /// Whether the token was followed by whitespace in the source text
    pub trailing_space: bool,
    pub ent_type: Option<EntityLabel>,
}

/// Token span `[start, end)` forming a noun phrase, with its head noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounChunk {
    pub start: usize,
    pub end: usize,
    pub root: usize,
}

impl NounChunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// A tagged sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub tokens: Vec<Token>,
    pub noun_chunks: Vec<NounChunk>,
    pub entities: Vec<Entity>,
}

impl Doc {
    /// Source text of tokens `[start, end)`, keeping the original spacing.
    pub fn span_text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.tokens.len());
        let mut text = String::new();
        for (i, token) in self.tokens[start.min(end)..end].iter().enumerate() {
            text.push_str(&token.text);
            if token.trailing_space && start + i + 1 < end {
                text.push(' ');
            }
        }
        text
    }

    pub fn chunk_text(&self, chunk: &NounChunk) -> String {
        self.span_text(chunk.start, chunk.end)
    }

    pub fn root(&self, chunk: &NounChunk) -> &Token {
        &self.tokens[chunk.root]
    }
}

/// Semantic category of a noun, as used to route noun chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NounType {
    Unknown,
    Food,
    Measure,
    Temperature,
    Tool,
}

/// Splits a sentence into tagged tokens, noun chunks and entities.
pub trait Tagger {
    fn tag(&self, text: &str) -> Doc;
}

/// Maps a single word to the categories it can belong to.
pub trait NounClassifier {
    fn classify(&self, word: &str) -> Vec<NounType>;

    fn is(&self, word: &str, kind: NounType) -> bool {
        self.classify(word).contains(&kind)
    }
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Doc {
        (**self).tag(text)
    }
}

impl<T: NounClassifier + ?Sized> NounClassifier for &T {
    fn classify(&self, word: &str) -> Vec<NounType> {
        (**self).classify(word)
    }
}
