pub mod core;
pub mod analysis;
pub mod corpus;
pub mod evaluation;
pub mod visualization;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::preprocessor::{preprocess_data, Preprocessor};
pub use crate::core::types::{BagOfWords, DocumentBatch, PreprocessedData, TermId, WeightedTerms};
pub use crate::corpus::dictionary::Dictionary;
pub use crate::evaluation::coherence::{calculate_coherence, coherence_sweep, CoherenceMeasure};
pub use crate::visualization::{form_wordcloud, form_wordcloud_with_config, graph_results};

/// Labels of the news corpus the default configuration was tuned on.
pub const DEFAULT_LABELS: [&str; 5] = [
    "business", "entertainment", "politics",
    "sport", "technology",
];

/*
┌──────────────────────────────── PREPROCESSING ────────────────────────────────┐
│                                                                               │
│  raw documents (&[S: AsRef<str>])                                             │
│        │                                                                      │
│        ▼                                                                      │
│  CleaningTokenizer      lowercase, -digits, -symbols, squash ws, '-'→' ',     │
│        │                trim, split                                           │
│        ▼                                                                      │
│  DocumentBatch ───────► PhraseDetector::learn ──► PhraseModel (frozen)        │
│        │                                              │                       │
│        ▼                                              ▼                       │
│  Analyzer::filter_batch                                                       │
│     StopWordFilter ──► PhraseFilter ──► LemmaFilter ──► ExclusionFilter       │
│                                            │                                  │
│                                            └── Arc<dyn Annotator>             │
│        │                                                                      │
│        ▼                                                                      │
│  Dictionary::from_documents ──► doc2bow per document                          │
│        │                                                                      │
│        ▼                                                                      │
│  PreprocessedData { texts, dictionary, corpus }                               │
└───────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── EVALUATION ───────────────────────────────────┐
│  TopicModel ──► calculate_coherence ──► CoherenceRequest ──► CoherenceEstimator│
│  coherence_sweep ──► CoherenceSweep { num_topics, scores }                    │
│  form_wordcloud / graph_results ──► WordCloud / LineChart ──► PlotSurface     │
└───────────────────────────────────────────────────────────────────────────────┘
*/
