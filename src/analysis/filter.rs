use crate::analysis::token::Token;

/// One pure per-document stage of the pipeline.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token>;

    fn name(&self) -> &str;
}
