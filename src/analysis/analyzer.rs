use tracing::debug;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::types::DocumentBatch;

/// Text analysis pipeline: one tokenizer followed by an ordered chain of
/// per-document filters.
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        self.filter_tokens(self.tokenizer.tokenize(text))
    }

    pub fn filter_tokens(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Runs the filter chain stage by stage over an already tokenized batch.
    pub fn filter_batch(&self, mut batch: DocumentBatch) -> DocumentBatch {
        for filter in &self.filters {
            batch = batch.apply(filter.as_ref());
            debug!(
                analyzer = %self.name,
                stage = filter.name(),
                tokens = batch.token_count(),
                "applied stage"
            );
        }

        batch
    }

    pub fn stage_names(&self) -> Vec<&str> {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }
}
