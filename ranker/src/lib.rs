use anyhow::{ensure, Context, Result};
use rankcore::persist::{read_tokens, write_scores};
use rankcore::{score_document, DocId, DocMeta, DocumentFrequencies, InvertedIndex};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    path: PathBuf,
}

/// Enumerate the fixed, ordered corpus for one scoring run.
///
/// A directory is walked for `.txt` files and sorted by path; a file is
/// parsed as a JSON manifest, an array of `{"id", "path"}` entries taken in
/// order. Either way the list, and with it N, is final before indexing
/// starts.
pub fn enumerate_corpus(input: &Path) -> Result<Vec<DocMeta>> {
    ensure!(input.exists(), "input path {} does not exist", input.display());
    if input.is_file() {
        return corpus_from_manifest(input);
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
            files.push(p.to_path_buf());
        }
    }
    files.sort();

    let docs = files
        .into_iter()
        .map(|path| {
            let external_id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            DocMeta { external_id, path }
        })
        .collect();
    Ok(docs)
}

fn corpus_from_manifest(path: &Path) -> Result<Vec<DocMeta>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    let entries: Vec<ManifestEntry> = serde_json::from_str(&data)
        .with_context(|| format!("parsing manifest {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(entries
        .into_iter()
        .map(|e| {
            let path = if e.path.is_absolute() { e.path } else { base.join(e.path) };
            DocMeta { external_id: e.id, path }
        })
        .collect())
}

/// Index the corpus strictly in order, derive document frequencies once,
/// then write one `<external_id>.csv` score table per document.
///
/// Any unreadable document or unwritable table aborts the whole run; there
/// are no partial results to trust after an error.
pub fn score_corpus(input: &Path, output: &Path) -> Result<()> {
    let corpus = enumerate_corpus(input)?;
    fs::create_dir_all(output)?;

    let mut index = InvertedIndex::new();
    for (doc_id, meta) in corpus.iter().enumerate() {
        let tokens = read_tokens(&meta.path)
            .with_context(|| format!("reading {}", meta.path.display()))?;
        index.index_document(doc_id as DocId, tokens);
    }

    // Frequencies are only meaningful once every document has been indexed.
    let df = DocumentFrequencies::from_index(&index);
    let n = corpus.len() as u32;
    tracing::info!(num_docs = n, num_terms = index.num_terms(), "indexed corpus");

    for (doc_id, meta) in corpus.iter().enumerate() {
        let mut rows = score_document(&index, &df, n, doc_id as DocId)?;
        // Stable files across runs; consumers still must not rely on row order.
        rows.sort_by(|a, b| a.term.cmp(&b.term));
        let out = output.join(format!("{}.csv", meta.external_id));
        write_scores(&out, &rows).with_context(|| format!("writing {}", out.display()))?;
    }

    tracing::info!(output = %output.display(), "score tables written");
    Ok(())
}
