use serde::{Serialize, Deserialize};
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;
use crate::corpus::dictionary::Dictionary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermId(pub u32);

impl TermId {
    pub fn new(id: u32) -> Self {
        TermId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for TermId {
    fn from(id: u32) -> Self {
        TermId(id)
    }
}

/// Sparse term-frequency vector of one document, sorted by term id.
pub type BagOfWords = Vec<(TermId, u32)>;

/// A topic's top terms with their weights, strongest first.
pub type WeightedTerms = Vec<(String, f64)>;

/// Ordered token sequences of a whole corpus, index-aligned with the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentBatch {
    documents: Vec<Vec<Token>>,
}

impl DocumentBatch {
    pub fn new(documents: Vec<Vec<Token>>) -> Self {
        DocumentBatch { documents }
    }

    /// Builds a batch from plain words, numbering each document's tokens from 0.
    pub fn from_texts<S: AsRef<str>>(texts: &[Vec<S>]) -> Self {
        let documents = texts.iter()
            .map(|words| {
                words.iter()
                    .enumerate()
                    .map(|(position, word)| Token::new(word.as_ref().to_string(), position as u32))
                    .collect()
            })
            .collect();

        DocumentBatch { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Vec<Token>] {
        &self.documents
    }

    pub fn token_count(&self) -> usize {
        self.documents.iter().map(Vec::len).sum()
    }

    /// Runs one per-document stage over every document.
    pub fn apply(self, filter: &dyn TokenFilter) -> Self {
        let documents = self.documents
            .into_iter()
            .map(|tokens| filter.filter(tokens))
            .collect();

        DocumentBatch { documents }
    }

    pub fn texts(&self) -> Vec<Vec<String>> {
        self.documents.iter()
            .map(|tokens| tokens.iter().map(|t| t.text.clone()).collect())
            .collect()
    }

    pub fn into_texts(self) -> Vec<Vec<String>> {
        self.documents.into_iter()
            .map(|tokens| tokens.into_iter().map(|t| t.text).collect())
            .collect()
    }
}

/// Output of one preprocessing run. `texts`, `corpus` and the input are
/// index-aligned, and every id in `corpus` resolves in `dictionary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessedData {
    pub texts: Vec<Vec<String>>,
    pub dictionary: Dictionary,
    pub corpus: Vec<BagOfWords>,
}
