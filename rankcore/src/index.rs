use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub type DocId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocMeta {
    pub external_id: String,
    /// Location of the document's text, used by the I/O layer only.
    pub path: PathBuf,
}

/// Term -> document -> raw occurrence count.
///
/// Grows monotonically while a corpus is indexed; an inner map exists only
/// once its term has at least one recorded occurrence, so every inner map
/// is non-empty and every count is positive.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    postings: HashMap<String, HashMap<DocId, u32>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `term` in `doc`.
    ///
    /// Returns true iff the term had never been seen anywhere in the index
    /// before this call. Callers use that to track how many terms each
    /// document introduced, a diagnostic that never feeds into scoring.
    pub fn record_occurrence(&mut self, term: &str, doc: DocId) -> bool {
        match self.postings.get_mut(term) {
            Some(docs) => {
                *docs.entry(doc).or_insert(0) += 1;
                false
            }
            None => {
                self.postings.insert(term.to_string(), HashMap::from([(doc, 1)]));
                true
            }
        }
    }

    /// Normalize and record every raw token of one document, in order.
    ///
    /// Returns the number of terms first seen in this document.
    pub fn index_document<I, S>(&mut self, doc: DocId, raw_tokens: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut new_terms = 0u32;
        for raw in raw_tokens {
            let term = normalize(raw.as_ref());
            if self.record_occurrence(&term, doc) {
                new_terms += 1;
            }
        }
        tracing::debug!(doc, new_terms, "indexed document");
        new_terms
    }

    /// Raw occurrence count of `term` in `doc`, 0 when absent.
    pub fn term_frequency(&self, term: &str, doc: DocId) -> u32 {
        self.postings
            .get(term)
            .and_then(|docs| docs.get(&doc))
            .copied()
            .unwrap_or(0)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }

    pub(crate) fn postings(&self) -> &HashMap<String, HashMap<DocId, u32>> {
        &self.postings
    }
}

/// Term -> number of distinct documents containing it.
///
/// The value is the size of the term's posting map, never the sum of its
/// occurrence counts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DocumentFrequencies {
    counts: HashMap<String, u32>,
}

impl DocumentFrequencies {
    /// Derive the table from a completed index, once per run.
    ///
    /// The index must already cover the whole corpus: a table taken mid-run
    /// under-counts every document indexed after it.
    pub fn from_index(index: &InvertedIndex) -> Self {
        let counts = index
            .postings()
            .iter()
            .map(|(term, docs)| (term.clone(), docs.len() as u32))
            .collect();
        Self { counts }
    }

    pub fn get(&self, term: &str) -> Option<u32> {
        self.counts.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
