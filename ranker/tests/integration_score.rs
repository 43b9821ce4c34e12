use ranker::{enumerate_corpus, score_corpus};
use std::fs;
use tempfile::tempdir;

#[test]
fn scores_a_directory_corpus() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("docs");
    let output = dir.path().join("scores");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("a.txt"), "cat cat dog").unwrap();
    fs::write(input.join("b.txt"), "dog dog dog").unwrap();

    score_corpus(&input, &output).unwrap();

    let a = fs::read_to_string(output.join("a.csv")).unwrap();
    let lines: Vec<&str> = a.lines().collect();
    assert_eq!(lines, vec!["cat,1.090619", "dog,1.000000"]);

    let b = fs::read_to_string(output.join("b.csv")).unwrap();
    assert_eq!(b.lines().collect::<Vec<_>>(), vec!["dog,1.000000"]);
}

#[test]
fn scores_a_manifest_corpus() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "red fox").unwrap();
    fs::write(dir.path().join("two.txt"), "red red").unwrap();
    let manifest = dir.path().join("corpus.json");
    fs::write(
        &manifest,
        r#"[{"id":"one","path":"one.txt"},{"id":"two","path":"two.txt"}]"#,
    )
    .unwrap();
    let output = dir.path().join("scores");

    score_corpus(&manifest, &output).unwrap();

    let one = fs::read_to_string(output.join("one.csv")).unwrap();
    assert_eq!(one.lines().collect::<Vec<_>>(), vec!["fox,1.000000", "red,1.000000"]);
    let two = fs::read_to_string(output.join("two.csv")).unwrap();
    assert_eq!(two.trim(), "red,1.000000");
}

#[test]
fn corpus_order_is_stable_and_fixed_before_indexing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("docs");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("zebra.txt"), "z").unwrap();
    fs::write(input.join("apple.txt"), "a").unwrap();
    fs::write(input.join("notes.md"), "ignored").unwrap();

    let corpus = enumerate_corpus(&input).unwrap();
    let ids: Vec<&str> = corpus.iter().map(|d| d.external_id.as_str()).collect();
    assert_eq!(ids, vec!["apple", "zebra"]);
}

#[test]
fn unreadable_document_aborts_the_run() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("corpus.json");
    fs::write(&manifest, r#"[{"id":"ghost","path":"missing.txt"}]"#).unwrap();
    let output = dir.path().join("scores");

    assert!(score_corpus(&manifest, &output).is_err());
}

#[test]
fn empty_corpus_produces_no_tables() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("docs");
    let output = dir.path().join("scores");
    fs::create_dir_all(&input).unwrap();

    score_corpus(&input, &output).unwrap();

    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}
