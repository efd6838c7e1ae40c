use serde::{Serialize, Deserialize};
use crate::analysis::annotator::PartOfSpeech;
use crate::analysis::filters::phrases::Scoring;
use crate::evaluation::coherence::CoherenceMeasure;

/// Characters stripped by the cleaner. Plain `-` is handled separately
/// (replaced with a space), the en dash is removed outright.
pub const DEFAULT_SYMBOLS: &str = "!\"£$€%^&*()_=+\\|,<.>/?;:'@#~[]{}”’–";

pub const DEFAULT_EXCLUDED_TERMS: [&str; 15] = [
    "say", "year", "people", "new", "good",
    "time", "come", "take", "want", "use",
    "day", "week", "month", "get", "set",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Cleaner
    pub symbols: String,

    // Lexical filter
    pub min_word_length: usize,                 // lemmas must be strictly longer
    pub excluded_terms: Vec<String>,
    pub allowed_pos: Vec<PartOfSpeech>,

    // Collocations
    pub bigram_min_count: u64,
    pub bigram_threshold: f64,
    pub bigram_delimiter: String,
    pub bigram_scoring: Scoring,

    // Evaluation
    pub coherence_measure: CoherenceMeasure,
    pub coherence_topn: usize,                  // terms pulled per topic

    // Visualization
    pub wordcloud_max_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            symbols: DEFAULT_SYMBOLS.to_string(),

            min_word_length: 2,
            excluded_terms: DEFAULT_EXCLUDED_TERMS.iter().map(|t| t.to_string()).collect(),
            allowed_pos: vec![
                PartOfSpeech::Noun,
                PartOfSpeech::Adj,
                PartOfSpeech::Verb,
                PartOfSpeech::Adv,
            ],

            bigram_min_count: 5,
            bigram_threshold: 100.0,
            bigram_delimiter: "_".to_string(),
            bigram_scoring: Scoring::Default,

            coherence_measure: CoherenceMeasure::CV,
            coherence_topn: 20,

            wordcloud_max_words: 200,
        }
    }
}

impl Config {
    pub fn with_symbols(mut self, symbols: &str) -> Self {
        self.symbols = symbols.to_string();
        self
    }

    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    pub fn with_excluded_terms(mut self, terms: Vec<String>) -> Self {
        self.excluded_terms = terms;
        self
    }

    pub fn with_allowed_pos(mut self, allowed: Vec<PartOfSpeech>) -> Self {
        self.allowed_pos = allowed;
        self
    }

    /// Bigram learning thresholds: minimum joint count and minimum score.
    pub fn with_bigrams(mut self, min_count: u64, threshold: f64) -> Self {
        self.bigram_min_count = min_count;
        self.bigram_threshold = threshold;
        self
    }

    pub fn with_bigram_delimiter(mut self, delimiter: &str) -> Self {
        self.bigram_delimiter = delimiter.to_string();
        self
    }

    pub fn with_bigram_scoring(mut self, scoring: Scoring) -> Self {
        self.bigram_scoring = scoring;
        self
    }

    pub fn with_coherence_measure(mut self, measure: CoherenceMeasure) -> Self {
        self.coherence_measure = measure;
        self
    }

    /// Number of top terms taken from each topic for coherence.
    pub fn with_coherence_topn(mut self, topn: usize) -> Self {
        self.coherence_topn = topn;
        self
    }

    pub fn with_wordcloud_max_words(mut self, max_words: usize) -> Self {
        self.wordcloud_max_words = max_words;
        self
    }
}
