use std::collections::{BTreeMap, HashMap};
use serde::{Serialize, Deserialize};
use crate::core::types::{BagOfWords, TermId};

/// Per-term statistics, indexed by term id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermInfo {
    pub term: String,
    pub doc_freq: u32,        // Number of documents containing term
    pub total_freq: u64,      // Total occurrences across all documents
}

/// Bidirectional term <-> id mapping built from the final token sequences.
///
/// Ids are handed out document by document: the unseen terms of each
/// document are sorted and appended in that order. Once built, the
/// dictionary exposes no mutating method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    term_infos: Vec<TermInfo>,
    term_map: HashMap<String, TermId>,
    num_docs: usize,
    num_pos: u64,     // processed tokens
    num_nnz: u64,     // non-zero bag-of-words entries
}

impl Dictionary {
    pub fn from_documents<S: AsRef<str>>(documents: &[Vec<S>]) -> Self {
        let mut dictionary = Dictionary::default();
        for document in documents {
            dictionary.add_document(document);
        }
        dictionary
    }

    fn add_document<S: AsRef<str>>(&mut self, document: &[S]) -> BagOfWords {
        let counts = count_terms(document);

        for (term, _) in counts.iter() {
            if !self.term_map.contains_key(*term) {
                let id = TermId(self.term_infos.len() as u32);
                self.term_map.insert(term.to_string(), id);
                self.term_infos.push(TermInfo {
                    term: term.to_string(),
                    doc_freq: 0,
                    total_freq: 0,
                });
            }
        }

        let mut bow: BagOfWords = counts.iter()
            .map(|(term, &count)| (self.term_map[*term], count))
            .collect();
        bow.sort_unstable_by_key(|(id, _)| *id);

        for &(id, count) in &bow {
            let info = &mut self.term_infos[id.0 as usize];
            info.doc_freq += 1;
            info.total_freq += count as u64;
        }

        self.num_docs += 1;
        self.num_pos += document.len() as u64;
        self.num_nnz += bow.len() as u64;
        bow
    }

    /// Bag-of-words of a document, sorted by id. Unknown terms are ignored.
    pub fn doc2bow<S: AsRef<str>>(&self, document: &[S]) -> BagOfWords {
        let mut bow: BagOfWords = count_terms(document)
            .into_iter()
            .filter_map(|(term, count)| self.term_map.get(term).map(|&id| (id, count)))
            .collect();
        bow.sort_unstable_by_key(|(id, _)| *id);
        bow
    }

    pub fn token_to_id(&self, term: &str) -> Option<TermId> {
        self.term_map.get(term).copied()
    }

    pub fn id_to_token(&self, id: TermId) -> Option<&str> {
        self.term_infos.get(id.0 as usize).map(|info| info.term.as_str())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.term_map.contains_key(term)
    }

    fn term_info(&self, id: TermId) -> Option<&TermInfo> {
        self.term_infos.get(id.0 as usize)
    }

    pub fn doc_freq(&self, id: TermId) -> Option<u32> {
        self.term_info(id).map(|info| info.doc_freq)
    }

    pub fn collection_freq(&self, id: TermId) -> Option<u64> {
        self.term_info(id).map(|info| info.total_freq)
    }

    /// Terms in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> + '_ {
        self.term_infos
            .iter()
            .enumerate()
            .map(|(i, info)| (TermId(i as u32), info.term.as_str()))
    }

    pub fn len(&self) -> usize {
        self.term_infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_infos.is_empty()
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn num_pos(&self) -> u64 {
        self.num_pos
    }

    pub fn num_nnz(&self) -> u64 {
        self.num_nnz
    }
}

// Sorted so new terms of a document receive ids in lexicographic order.
fn count_terms<S: AsRef<str>>(document: &[S]) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for term in document {
        *counts.entry(term.as_ref()).or_insert(0) += 1;
    }
    counts
}
