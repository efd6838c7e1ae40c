use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;
use crate::core::error::{Error, ErrorKind, Result};

/// Coarse universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl PartOfSpeech {
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
            PartOfSpeech::Space => "SPACE",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let pos = match s.to_ascii_uppercase().as_str() {
            "ADJ" => PartOfSpeech::Adj,
            "ADP" => PartOfSpeech::Adp,
            "ADV" => PartOfSpeech::Adv,
            "AUX" => PartOfSpeech::Aux,
            "CCONJ" => PartOfSpeech::Cconj,
            "DET" => PartOfSpeech::Det,
            "INTJ" => PartOfSpeech::Intj,
            "NOUN" => PartOfSpeech::Noun,
            "NUM" => PartOfSpeech::Num,
            "PART" => PartOfSpeech::Part,
            "PRON" => PartOfSpeech::Pron,
            "PROPN" => PartOfSpeech::Propn,
            "PUNCT" => PartOfSpeech::Punct,
            "SCONJ" => PartOfSpeech::Sconj,
            "SYM" => PartOfSpeech::Sym,
            "VERB" => PartOfSpeech::Verb,
            "X" => PartOfSpeech::X,
            "SPACE" => PartOfSpeech::Space,
            other => return Err(Error::invalid_argument(format!("Unknown part-of-speech tag '{}'", other))),
        };
        Ok(pos)
    }
}

/// One annotated word of a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
}

/// Linguistic annotation model: splits a text into words and assigns each a
/// lemma and a coarse tag. Loading a model is the only fallible step, so
/// annotation itself cannot fail.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Vec<Annotation>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub lemma: String,
    pub pos: PartOfSpeech,
}

fn default_unknown_pos() -> PartOfSpeech {
    PartOfSpeech::Noun
}

/// On-disk lexicon layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_unknown_pos")]
    pub unknown_pos: PartOfSpeech,
    pub entries: BTreeMap<String, LexiconEntry>,
}

fn default_language() -> String {
    "english".to_string()
}

fn stemmer_algorithm(language: &str) -> Result<Algorithm> {
    let algorithm = match language.to_ascii_lowercase().as_str() {
        "english" | "en" => Algorithm::English,
        "french" | "fr" => Algorithm::French,
        "german" | "de" => Algorithm::German,
        "spanish" | "es" => Algorithm::Spanish,
        "italian" | "it" => Algorithm::Italian,
        "portuguese" | "pt" => Algorithm::Portuguese,
        "dutch" | "nl" => Algorithm::Dutch,
        other => return Err(Error::new(
            ErrorKind::ModelUnavailable,
            format!("No stemmer for lexicon language '{}'", other),
        )),
    };
    Ok(algorithm)
}

/// Dictionary-driven annotator.
///
/// Lookup order for a word: exact surface form, then a lexicon lemma with
/// the same Snowball stem of which the word is a plain inflection, then the
/// word itself tagged with the lexicon's `unknown_pos`. Non-alphanumeric
/// segments are tagged `PUNCT`.
pub struct LexiconAnnotator {
    entries: HashMap<String, LexiconEntry>,
    stem_index: HashMap<String, Vec<LexiconEntry>>,
    stemmer: Stemmer,
    unknown_pos: PartOfSpeech,
}

impl LexiconAnnotator {
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        let stemmer = Stemmer::create(stemmer_algorithm(&lexicon.language)?);

        // BTreeMap order keeps candidates per stem deterministic
        let mut stem_index: HashMap<String, Vec<LexiconEntry>> = HashMap::new();
        for entry in lexicon.entries.values() {
            let candidates = stem_index
                .entry(stemmer.stem(&entry.lemma.to_lowercase()).to_string())
                .or_default();
            if !candidates.iter().any(|c| c.lemma == entry.lemma) {
                candidates.push(entry.clone());
            }
        }

        let entries: HashMap<String, LexiconEntry> = lexicon.entries
            .into_iter()
            .map(|(surface, entry)| (surface.to_lowercase(), entry))
            .collect();

        debug!(entries = entries.len(), stems = stem_index.len(), "built lexicon annotator");

        Ok(LexiconAnnotator {
            entries,
            stem_index,
            stemmer,
            unknown_pos: lexicon.unknown_pos,
        })
    }

    /// Loads a JSON lexicon. A missing or unreadable file means the model
    /// is unavailable and nothing downstream may run.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::new(
            ErrorKind::ModelUnavailable,
            format!("Cannot read lexicon {}: {}", path.display(), e),
        ))?;
        let lexicon: Lexicon = serde_json::from_str(&raw).map_err(|e| Error::new(
            ErrorKind::ModelUnavailable,
            format!("Cannot parse lexicon {}: {}", path.display(), e),
        ))?;

        info!(path = %path.display(), entries = lexicon.entries.len(), "loaded lexicon");
        Self::new(lexicon)
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, PartOfSpeech)>,
        S: Into<String>,
    {
        let entries = entries.into_iter()
            .map(|(surface, lemma, pos)| (surface.into(), LexiconEntry { lemma: lemma.into(), pos }))
            .collect();

        Self::new(Lexicon {
            language: default_language(),
            unknown_pos: default_unknown_pos(),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, word: &str) -> Annotation {
        let lowered = word.to_lowercase();

        if !lowered.chars().any(char::is_alphanumeric) {
            return Annotation { text: word.to_string(), lemma: lowered, pos: PartOfSpeech::Punct };
        }

        let entry = self.entries.get(&lowered).or_else(|| {
            self.stem_index
                .get(&*self.stemmer.stem(&lowered))
                .and_then(|candidates| {
                    candidates.iter().find(|c| is_inflection_of(&lowered, &c.lemma.to_lowercase()))
                })
        });

        match entry {
            Some(entry) => Annotation {
                text: word.to_string(),
                lemma: entry.lemma.clone(),
                pos: entry.pos,
            },
            None => Annotation {
                text: word.to_string(),
                lemma: lowered,
                pos: self.unknown_pos,
            },
        }
    }
}

const INFLECTION_SUFFIXES: [&str; 6] = ["s", "es", "ed", "ing", "er", "est"];

/// True when `word` is `lemma` plus a regular inflectional suffix, allowing
/// a dropped final `e`, a doubled final consonant or `y` turned into `i`.
/// Snowball stems also strip derivational endings (`university` and
/// `universe` share one), so a shared stem alone is not enough.
fn is_inflection_of(word: &str, lemma: &str) -> bool {
    if lemma.is_empty() {
        return false;
    }

    let mut bases = vec![lemma.to_string()];
    if let Some(stripped) = lemma.strip_suffix('e') {
        bases.push(stripped.to_string());
    }
    if let Some(stripped) = lemma.strip_suffix('y') {
        bases.push(format!("{}i", stripped));
    }
    if let Some(last) = lemma.chars().last() {
        bases.push(format!("{}{}", lemma, last));
    }

    bases.iter().any(|base| {
        word.strip_prefix(base.as_str())
            .is_some_and(|suffix| INFLECTION_SUFFIXES.contains(&suffix))
    })
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Vec<Annotation> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| self.lookup(segment))
            .collect()
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotator() -> LexiconAnnotator {
        LexiconAnnotator::from_entries(vec![
            ("grew", "grow", PartOfSpeech::Verb),
            ("grow", "grow", PartOfSpeech::Verb),
            ("economy", "economy", PartOfSpeech::Noun),
            ("the", "the", PartOfSpeech::Det),
            ("quickly", "quickly", PartOfSpeech::Adv),
        ]).unwrap()
    }

    #[test]
    fn test_exact_lookup() {
        let annotations = annotator().annotate("the economy grew");

        let lemmas: Vec<&str> = annotations.iter().map(|a| a.lemma.as_str()).collect();
        let tags: Vec<PartOfSpeech> = annotations.iter().map(|a| a.pos).collect();
        assert_eq!(lemmas, vec!["the", "economy", "grow"]);
        assert_eq!(tags, vec![PartOfSpeech::Det, PartOfSpeech::Noun, PartOfSpeech::Verb]);
    }

    #[test]
    fn test_stem_backoff() {
        let annotations = annotator().annotate("growing");

        assert_eq!(annotations[0].lemma, "grow");
        assert_eq!(annotations[0].pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_inflections_share_the_lemma() {
        let annotator = LexiconAnnotator::from_entries(vec![
            ("rate", "rate", PartOfSpeech::Noun),
            ("stop", "stop", PartOfSpeech::Verb),
            ("economy", "economy", PartOfSpeech::Noun),
        ]).unwrap();

        let lemmas: Vec<String> = annotator.annotate("rates stopped economies")
            .into_iter()
            .map(|a| a.lemma)
            .collect();
        assert_eq!(lemmas, vec!["rate", "stop", "economy"]);
    }

    #[test]
    fn test_derived_words_keep_their_own_lemma() {
        let annotator = LexiconAnnotator::from_entries(vec![
            ("universe", "universe", PartOfSpeech::Noun),
            ("organ", "organ", PartOfSpeech::Noun),
            ("general", "general", PartOfSpeech::Adj),
        ]).unwrap();

        let annotations = annotator.annotate("university organization universal organs generally");
        let lemmas: Vec<&str> = annotations.iter().map(|a| a.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["university", "organization", "universal", "organ", "generally"]);

        // not borrowed from a lexicon entry
        assert_eq!(annotations[2].pos, PartOfSpeech::Noun);
        assert_eq!(annotations[4].pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_inflection_check() {
        assert!(is_inflection_of("growing", "grow"));
        assert!(is_inflection_of("raised", "raise"));
        assert!(is_inflection_of("rising", "rise"));
        assert!(is_inflection_of("bigger", "big"));
        assert!(!is_inflection_of("university", "universe"));
        assert!(!is_inflection_of("grow", "grow"));
    }

    #[test]
    fn test_unknown_word_uses_fallback_tag() {
        let annotations = annotator().annotate("zebra new_york");

        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].lemma, "zebra");
        assert_eq!(annotations[0].pos, PartOfSpeech::Noun);
        assert_eq!(annotations[1].lemma, "new_york");
    }

    #[test]
    fn test_whitespace_runs_are_skipped() {
        let annotations = annotator().annotate("  the   economy ");
        assert_eq!(annotations.len(), 2);
    }

    #[test]
    fn test_missing_file_is_model_unavailable() {
        let err = LexiconAnnotator::load("/nonexistent/lexicon.json").err().unwrap();
        assert_eq!(err.kind, ErrorKind::ModelUnavailable);
    }

    #[test]
    fn test_tag_round_trip() {
        assert_eq!("noun".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::Propn.to_string(), "PROPN");
        assert!("NOPE".parse::<PartOfSpeech>().is_err());
    }
}
