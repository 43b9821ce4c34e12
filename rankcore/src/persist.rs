use crate::score::ScoreRow;
use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read one document's raw tokens: whitespace-split, in file order.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path)?;
    let reader = BufReader::new(f);
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

/// Write one document's score table: a `<term>,<score>` line per row,
/// score with six decimal places, no header.
pub fn write_scores(path: &Path, rows: &[ScoreRow]) -> Result<()> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    for row in rows {
        writeln!(w, "{},{:.6}", row.term, row.score)?;
    }
    w.flush()?;
    Ok(())
}
