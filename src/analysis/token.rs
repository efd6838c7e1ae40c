use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // The token text
    pub position: u32,     // Position in the cleaned document; gaps mark removed tokens
}

impl Token {
    pub fn new(text: String, position: u32) -> Self {
        Token { text, position }
    }

    /// True when `next` directly followed this token in the cleaned document.
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        next.position == self.position + 1
    }
}
