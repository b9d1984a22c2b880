use crate::config::MIN_TOKEN_LEN;

/// Canned example queries surfaced when a search comes back empty.
const EXAMPLE_QUERIES: &[&str] = &[
    "B2B SaaS — manual onboarding, slow support replies",
    "D2C skincare brand — slow lead response, manual support",
    "Consulting firm — scattered documents, hard to find info",
    "E-commerce store — inventory chaos, manual reorders",
    "Agency — client reporting, manual social posts",
    "Healthcare clinic — appointment scheduling, patient follow-up",
    "Real estate — lead nurturing, property updates",
    "Restaurant — order management, customer feedback",
];

/// Pick suggestions for a zero-result query.
///
/// A blank query gets the first four general examples. Otherwise examples
/// sharing at least one query token (case-insensitive substring) are
/// preferred, capped at three, falling back to the first three generics
/// when nothing overlaps.
pub fn suggest(query: &str) -> Vec<String> {
    if query.trim().is_empty() {
        return EXAMPLE_QUERIES.iter().take(4).map(|s| s.to_string()).collect();
    }

    let query_lower = query.to_lowercase();
    let filtered: Vec<String> = EXAMPLE_QUERIES
        .iter()
        .filter(|example| {
            let example_lower = example.to_lowercase();
            query_lower
                .split_whitespace()
                .any(|term| term.len() >= MIN_TOKEN_LEN && example_lower.contains(term))
        })
        .take(3)
        .map(|s| s.to_string())
        .collect();

    if filtered.is_empty() {
        EXAMPLE_QUERIES.iter().take(3).map(|s| s.to_string()).collect()
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_query_gets_four_general_suggestions() {
        let suggestions = suggest("   ");
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[0].starts_with("B2B SaaS"));
    }

    #[test]
    fn overlapping_terms_are_preferred() {
        let suggestions = suggest("inventory headaches");
        assert!(suggestions.iter().any(|s| s.contains("inventory")));
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn no_overlap_falls_back_to_generics() {
        let suggestions = suggest("xyzzy plugh");
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].starts_with("B2B SaaS"));
    }

    #[test]
    fn short_terms_do_not_count_as_overlap() {
        // "ai" is below the token floor, so only generics come back.
        let suggestions = suggest("ai");
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].starts_with("B2B SaaS"));
    }
}
