//! Normalization of user-entered search terms.

/// Normalizes a raw search string into the canonical form used for matching.
///
/// Leading and trailing whitespace is removed, internal runs of whitespace
/// collapse to a single space and the result is lowercased. The function is
/// idempotent. A string with no non-whitespace characters normalizes to the
/// empty string, which callers treat as missing input.
#[must_use]
pub fn search_term(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::search_term;

    #[test]
    fn trims_collapses_and_lowercases() {
        assert_eq!("dune", search_term("  Dune  "));
        assert_eq!(
            "the left hand of darkness",
            search_term("The  Left\tHand \n of  Darkness")
        );
    }

    #[test]
    fn already_normal_input_is_unchanged() {
        for raw in ["  Dune  ", "HARRY  potter", "ça  VA", "already normal"] {
            let once = search_term(raw);
            assert_eq!(once, search_term(&once));
        }
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!("", search_term(""));
        assert_eq!("", search_term(" \t\n "));
    }
}
