use std::path::Path;
use std::sync::Arc;
use tracing::info;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::annotator::{Annotator, LexiconAnnotator};
use crate::analysis::filters::exclusion::ExclusionFilter;
use crate::analysis::filters::lemma::LemmaFilter;
use crate::analysis::filters::phrases::{PhraseDetector, PhraseModel};
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{CleaningTokenizer, Tokenizer};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::{DocumentBatch, PreprocessedData};
use crate::corpus::dictionary::Dictionary;

/// Corpus-level preprocessing pipeline.
///
/// clean -> learn bigrams -> stopwords -> merge bigrams -> lemma/POS ->
/// exclusion -> dictionary + bag-of-words. Bigram learning sees the cleaned
/// corpus before stopwords are removed; merging happens after, so a removed
/// stopword both stays out of every phrase and separates its neighbours.
pub struct Preprocessor {
    config: Config,
    cleaner: CleaningTokenizer,
    annotator: Arc<dyn Annotator>,
}

impl Preprocessor {
    /// Takes an already loaded annotator, so an unavailable model has failed
    /// before a `Preprocessor` can exist.
    pub fn new(config: Config, annotator: Arc<dyn Annotator>) -> Result<Self> {
        let cleaner = CleaningTokenizer::from_config(&config)?;

        Ok(Preprocessor {
            config,
            cleaner,
            annotator,
        })
    }

    /// Loads a JSON lexicon and builds the pipeline around it.
    pub fn with_lexicon<P: AsRef<Path>>(config: Config, lexicon_path: P) -> Result<Self> {
        let annotator = LexiconAnnotator::load(lexicon_path)?;
        Self::new(config, Arc::new(annotator))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cleaner stage only.
    pub fn clean<S: AsRef<str>>(&self, documents: &[S]) -> DocumentBatch {
        DocumentBatch::new(
            documents.iter()
                .map(|doc| self.cleaner.tokenize(doc.as_ref()))
                .collect()
        )
    }

    /// Learns collocations from a cleaned batch.
    pub fn learn_phrases(&self, cleaned: &DocumentBatch) -> PhraseModel {
        PhraseDetector::from_config(&self.config).learn(cleaned)
    }

    /// Per-document analyzer running every stage after bigram learning,
    /// using the given phrase model. Also usable on unseen documents.
    pub fn analyzer(&self, phrases: PhraseModel) -> Result<Analyzer> {
        Ok(Analyzer::new("topic_modelling".to_string(), Box::new(CleaningTokenizer::from_config(&self.config)?))
            .add_filter(Box::new(StopWordFilter::english()))
            .add_filter(Box::new(phrases.into_filter()))
            .add_filter(Box::new(LemmaFilter::new(self.annotator.clone(), &self.config.allowed_pos)))
            .add_filter(Box::new(ExclusionFilter::new(
                &self.config.excluded_terms,
                self.config.min_word_length,
            ))))
    }

    /// Runs the full pipeline. `texts`, `corpus` and `documents` are
    /// index-aligned.
    pub fn preprocess<S: AsRef<str>>(&self, documents: &[S]) -> Result<PreprocessedData> {
        let cleaned = self.clean(documents);
        info!(documents = cleaned.len(), tokens = cleaned.token_count(), "cleaned corpus");

        let phrases = self.learn_phrases(&cleaned);
        info!(phrases = phrases.len(), "learned bigram phrases");

        let filtered = self.analyzer(phrases)?.filter_batch(cleaned);
        let texts = filtered.into_texts();

        let dictionary = Dictionary::from_documents(&texts);
        let corpus = texts.iter().map(|text| dictionary.doc2bow(text)).collect();
        info!(
            terms = dictionary.len(),
            tokens = dictionary.num_pos(),
            "built dictionary"
        );

        Ok(PreprocessedData { texts, dictionary, corpus })
    }
}

/// One-shot helper: build a `Preprocessor` and run it over `documents`.
pub fn preprocess_data<S: AsRef<str>>(
    config: Config,
    annotator: Arc<dyn Annotator>,
    documents: &[S],
) -> Result<PreprocessedData> {
    Preprocessor::new(config, annotator)?.preprocess(documents)
}
