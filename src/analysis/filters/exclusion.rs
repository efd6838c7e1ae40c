use std::collections::HashSet;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Drops excluded terms and terms of at most `min_length` characters.
pub struct ExclusionFilter {
    pub excluded: HashSet<String>,
    pub min_length: usize,
}

impl ExclusionFilter {
    pub fn new(excluded: &[String], min_length: usize) -> Self {
        ExclusionFilter {
            excluded: excluded.iter().cloned().collect(),
            min_length,
        }
    }

    pub fn keeps(&self, term: &str) -> bool {
        !self.excluded.contains(term) && term.chars().count() > self.min_length
    }
}

impl TokenFilter for ExclusionFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| self.keeps(&token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "exclusion"
    }
}
