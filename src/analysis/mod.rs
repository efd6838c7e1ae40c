pub mod token;
pub mod tokenizer;
pub mod filter;
pub mod filters;
pub mod annotator;
pub mod analyzer;
