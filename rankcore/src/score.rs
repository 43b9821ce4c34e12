use crate::index::{DocId, DocumentFrequencies, InvertedIndex};
use anyhow::{bail, Result};
use serde::Serialize;

/// One TF-IDF value for a (term, document) pair with nonzero term frequency.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub term: String,
    pub doc: DocId,
    pub score: f64,
}

/// Score every term of `doc` against the corpus.
///
/// `corpus_size` is the fixed document count N for the whole run. Terms
/// absent from `doc` produce no row. A term with tf == 1 scores exactly 1.0,
/// as does any term present in all N documents: the formula is
/// `1 + log10(tf) * log10(N/df)`, an additive baseline on top of the
/// product.
///
/// A term present in the index but missing from `df` means the table was
/// not derived from this index; that is a caller bug and fails the run.
pub fn score_document(
    index: &InvertedIndex,
    df: &DocumentFrequencies,
    corpus_size: u32,
    doc: DocId,
) -> Result<Vec<ScoreRow>> {
    let n = corpus_size as f64;
    let mut rows = Vec::new();
    for (term, docs) in index.postings() {
        let tf = match docs.get(&doc) {
            Some(&tf) => tf,
            None => continue,
        };
        let df_t = match df.get(term) {
            Some(df_t) if df_t > 0 => df_t,
            _ => bail!("no document frequency for indexed term {term:?}"),
        };
        let score = 1.0 + (tf as f64).log10() * (n / df_t as f64).log10();
        rows.push(ScoreRow {
            term: term.clone(),
            doc,
            score,
        });
    }
    Ok(rows)
}
