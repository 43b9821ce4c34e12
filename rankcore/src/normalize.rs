use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Joining characters become hyphens instead of disappearing.
    static ref SEPARATORS: Regex = Regex::new(r"[ &_=+:]").expect("valid regex");
    static ref NON_TERM: Regex = Regex::new(r"[^[:alnum:]-]").expect("valid regex");
}

/// Map a raw whitespace-split token to its canonical term.
///
/// Lowercases, strips a possessive `'s` and then a single trailing `s`,
/// rewrites joining punctuation to hyphens, drops every other non-ASCII
/// alphanumeric character, collapses doubled hyphens, and trims the tail.
/// The plural strip is a naive heuristic: "bus" comes out as "bu".
/// A token made entirely of dropped characters normalizes to the empty
/// string, which is still a valid term.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let depossessed = lowered.strip_suffix("'s").unwrap_or(&lowered);
    let singular = depossessed.strip_suffix('s').unwrap_or(depossessed);

    let hyphenated = SEPARATORS.replace_all(singular, "-");
    let cleaned = NON_TERM.replace_all(&hyphenated, "");
    let collapsed = cleaned.replace("--", "-");

    let trimmed = collapsed.strip_suffix('-').unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize() {
        assert_eq!(normalize("Dogs"), "dog");
        assert_eq!(normalize("owner's"), "owner");
        assert_eq!(normalize("client:server"), "client-server");
    }
}
