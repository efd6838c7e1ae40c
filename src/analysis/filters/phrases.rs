use std::collections::{BTreeMap, HashMap};
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;
use crate::core::config::Config;
use crate::core::types::DocumentBatch;

/// Collocation scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scoring {
    /// `(count_ab - min_count) / (count_a * count_b) * vocab_len`
    Default,
    /// Normalized pointwise mutual information, in [-1, 1].
    Npmi,
}

impl Scoring {
    fn score(&self, counts: PairCounts, min_count: u64, vocab_len: usize, corpus_word_count: u64) -> f64 {
        match self {
            Scoring::Default => {
                let denom = counts.a as f64 * counts.b as f64;
                if denom == 0.0 {
                    return f64::NEG_INFINITY;
                }
                (counts.ab as f64 - min_count as f64) / denom * vocab_len as f64
            }
            Scoring::Npmi => {
                if corpus_word_count == 0 {
                    return f64::NEG_INFINITY;
                }
                let total = corpus_word_count as f64;
                let pa = counts.a as f64 / total;
                let pb = counts.b as f64 / total;
                let pab = counts.ab as f64 / total;
                let npmi = (pab / (pa * pb)).ln() / -pab.ln();
                // pab == 1 makes the denominator zero
                if npmi.is_finite() { npmi } else { f64::NEG_INFINITY }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PairCounts {
    a: u64,
    b: u64,
    ab: u64,
}

/// Learns collocations from a whole corpus. Must see every document before
/// any merge is applied.
pub struct PhraseDetector {
    pub min_count: u64,
    pub threshold: f64,
    pub delimiter: String,
    pub scoring: Scoring,
}

impl PhraseDetector {
    pub fn new(min_count: u64, threshold: f64) -> Self {
        PhraseDetector {
            min_count,
            threshold,
            delimiter: "_".to_string(),
            scoring: Scoring::Default,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        PhraseDetector {
            min_count: config.bigram_min_count,
            threshold: config.bigram_threshold,
            delimiter: config.bigram_delimiter.clone(),
            scoring: config.bigram_scoring,
        }
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Counts unigrams and adjacent pairs over the batch and freezes the
    /// pairs whose joint count reaches `min_count` and whose score is
    /// strictly above `threshold`.
    pub fn learn(&self, batch: &DocumentBatch) -> PhraseModel {
        let mut unigrams: HashMap<&str, u64> = HashMap::new();
        let mut bigrams: HashMap<(&str, &str), u64> = HashMap::new();
        let mut corpus_word_count = 0u64;

        for tokens in batch.documents() {
            for token in tokens {
                *unigrams.entry(token.text.as_str()).or_insert(0) += 1;
                corpus_word_count += 1;
            }
            for pair in tokens.windows(2) {
                if pair[0].is_adjacent_to(&pair[1]) {
                    *bigrams.entry((pair[0].text.as_str(), pair[1].text.as_str())).or_insert(0) += 1;
                }
            }
        }

        let vocab_len = unigrams.len() + bigrams.len();
        let mut phrases = BTreeMap::new();

        for (&(a, b), &ab) in &bigrams {
            if ab < self.min_count {
                continue;
            }
            let counts = PairCounts {
                a: unigrams.get(a).copied().unwrap_or(0),
                b: unigrams.get(b).copied().unwrap_or(0),
                ab,
            };
            let score = self.scoring.score(counts, self.min_count, vocab_len, corpus_word_count);
            if score > self.threshold {
                phrases.insert((a.to_string(), b.to_string()), score);
            }
        }

        debug!(
            candidates = bigrams.len(),
            phrases = phrases.len(),
            words = corpus_word_count,
            "learned collocations"
        );

        PhraseModel {
            phrases,
            delimiter: self.delimiter.clone(),
        }
    }
}

/// Frozen set of qualifying pairs with their scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseModel {
    phrases: BTreeMap<(String, String), f64>,
    delimiter: String,
}

impl PhraseModel {
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn score(&self, first: &str, second: &str) -> Option<f64> {
        self.phrases
            .get(&(first.to_string(), second.to_string()))
            .copied()
    }

    pub fn contains(&self, first: &str, second: &str) -> bool {
        self.score(first, second).is_some()
    }

    /// Merged phrases in key order, joined with the delimiter.
    pub fn phrases(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.phrases
            .iter()
            .map(|((a, b), score)| (format!("{}{}{}", a, self.delimiter, b), *score))
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Per-document stage applying this model.
    pub fn into_filter(self) -> PhraseFilter {
        PhraseFilter::new(self)
    }
}

/// Greedy left-to-right merge of qualifying adjacent pairs. A merged token
/// never takes part in a second merge.
pub struct PhraseFilter {
    lookup: HashMap<String, HashMap<String, f64>>,
    delimiter: String,
}

impl PhraseFilter {
    pub fn new(model: PhraseModel) -> Self {
        let mut lookup: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for ((a, b), score) in model.phrases {
            lookup.entry(a).or_default().insert(b, score);
        }

        PhraseFilter {
            lookup,
            delimiter: model.delimiter,
        }
    }

    fn qualifies(&self, first: &Token, second: &Token) -> bool {
        first.is_adjacent_to(second)
            && self.lookup
                .get(&first.text)
                .is_some_and(|seconds| seconds.contains_key(&second.text))
    }
}

impl TokenFilter for PhraseFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut result = Vec::with_capacity(tokens.len());
        let mut pending: Option<Token> = None;

        for token in tokens {
            match pending.take() {
                Some(last) if self.qualifies(&last, &token) => {
                    let text = format!("{}{}{}", last.text, self.delimiter, token.text);
                    result.push(Token::new(text, last.position));
                }
                Some(last) => {
                    result.push(last);
                    pending = Some(token);
                }
                None => pending = Some(token),
            }
        }

        result.extend(pending);
        result
    }

    fn name(&self) -> &str {
        "phrases"
    }
}
