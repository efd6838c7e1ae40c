use regex::Regex;
use crate::analysis::token::Token;
use crate::core::config::Config;
use crate::core::error::Result;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;
}

/// Noise-stripping tokenizer.
///
/// Applies, in order: lowercase, drop digit runs, drop configured symbols,
/// collapse whitespace, replace `-` with a space, trim, split on whitespace.
/// The order matters: a dash is turned into a space only after whitespace
/// has been collapsed, so `"a - b"` yields three spaces that the final
/// split absorbs.
pub struct CleaningTokenizer {
    digits: Regex,
    symbols: Option<Regex>,
    whitespace: Regex,
    dash: Regex,
}

impl CleaningTokenizer {
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols = if symbols.is_empty() {
            None
        } else {
            let class: String = symbols.chars()
                .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
                .collect();
            Some(Regex::new(&format!("[{}]", class))?)
        };

        Ok(CleaningTokenizer {
            digits: Regex::new(r"\d+")?,
            symbols,
            whitespace: Regex::new(r"\s+")?,
            dash: Regex::new("-")?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.symbols)
    }

    /// Cleaned text before splitting.
    pub fn clean(&self, text: &str) -> String {
        let value = text.to_lowercase();
        let value = self.digits.replace_all(&value, "").into_owned();
        let value = match &self.symbols {
            Some(symbols) => symbols.replace_all(&value, "").into_owned(),
            None => value,
        };
        let value = self.whitespace.replace_all(&value, " ");
        let value = self.dash.replace_all(&value, " ");

        value.trim().to_string()
    }
}

impl Tokenizer for CleaningTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.clean(text)
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word.to_string(), position as u32))
            .collect()
    }

    fn name(&self) -> &str {
        "cleaning"
    }
}
