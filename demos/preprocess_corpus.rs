/// Preprocessing walkthrough
///
/// Usage: preprocess_corpus <lexicon.json> [corpus.txt]
///
/// Reads one document per line (or a built-in sample), runs the full
/// preprocessing pipeline and prints the vocabulary and bag-of-words corpus.
/// Set RUST_LOG=debug to see every stage.

use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;
use topic_modelling::{Config, Preprocessor, DEFAULT_LABELS};

const SAMPLE: &[&str] = &[
    "The Economy Grew by 5% in 2021!",
    "Stocks dropped 10% yesterday.",
    "The central bank raised interest rates for the third time this year.",
    "The striker scored twice as the home side won the cup final.",
    "Parliament voted on the new election bill after a long debate.",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).init();

    let mut args = env::args().skip(1);
    let lexicon = args.next().ok_or("usage: preprocess_corpus <lexicon.json> [corpus.txt]")?;

    let documents: Vec<String> = match args.next() {
        Some(path) => fs::read_to_string(path)?.lines().map(str::to_string).collect(),
        None => SAMPLE.iter().map(|s| s.to_string()).collect(),
    };

    // Fails here, before any document is touched, if the lexicon is unusable
    let preprocessor = Preprocessor::with_lexicon(Config::default(), &lexicon)?;
    let data = preprocessor.preprocess(&documents)?;

    println!("Labels: {}", DEFAULT_LABELS.join(", "));
    println!("Vocabulary ({} terms):", data.dictionary.len());
    for (id, term) in data.dictionary.iter() {
        println!("  {:>4}  {}", id.value(), term);
    }

    println!("\nCorpus:");
    for (i, (text, bow)) in data.texts.iter().zip(&data.corpus).enumerate() {
        println!("  [{}] {:?}", i, text);
        println!("      {:?}", bow.iter().map(|(id, n)| (id.value(), *n)).collect::<Vec<_>>());
    }

    Ok(())
}
