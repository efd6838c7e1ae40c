use std::collections::HashSet;
use std::sync::Arc;
use crate::analysis::annotator::{Annotator, PartOfSpeech};
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Re-joins a document, annotates it, and keeps the lemmas whose tag is
/// allowed. Output tokens are renumbered from 0.
pub struct LemmaFilter {
    pub annotator: Arc<dyn Annotator>,
    pub allowed_pos: HashSet<PartOfSpeech>,
}

impl LemmaFilter {
    pub fn new(annotator: Arc<dyn Annotator>, allowed_pos: &[PartOfSpeech]) -> Self {
        LemmaFilter {
            annotator,
            allowed_pos: allowed_pos.iter().copied().collect(),
        }
    }
}

impl TokenFilter for LemmaFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        if tokens.is_empty() {
            return tokens;
        }

        let text = tokens.iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        self.annotator
            .annotate(&text)
            .into_iter()
            .filter(|annotation| self.allowed_pos.contains(&annotation.pos))
            .enumerate()
            .map(|(position, annotation)| Token::new(annotation.lemma, position as u32))
            .collect()
    }

    fn name(&self) -> &str {
        "lemma"
    }
}
