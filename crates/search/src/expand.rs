use crate::config::{MAX_EXPANDED_TERMS, MIN_TOKEN_LEN};
use crate::synonyms::SYNONYM_TABLE;

/// Query expander with a built-in business-vocabulary synonym table.
pub struct QueryExpander {
    synonyms: &'static [(&'static str, &'static [&'static str])],
}

impl QueryExpander {
    pub fn new() -> Self {
        Self {
            synonyms: SYNONYM_TABLE,
        }
    }

    /// Expand a raw query into a deduplicated, lowercased term set.
    ///
    /// The original tokens come first, then synonyms for every table phrase
    /// contained in the query. Insertion order is preserved so truncation
    /// favors the user's own words.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let base = query.to_lowercase().trim().to_string();
        if base.is_empty() {
            return Vec::new();
        }

        let mut terms: Vec<String> = Vec::new();

        for token in tokenize(&base) {
            if !terms.contains(&token) {
                terms.push(token);
            }
        }

        for (phrase, synonyms) in self.synonyms {
            if base.contains(phrase) {
                for syn in synonyms.iter() {
                    let syn = syn.to_lowercase();
                    if !terms.contains(&syn) {
                        terms.push(syn);
                    }
                }
            }
        }

        terms.truncate(MAX_EXPANDED_TERMS);
        terms
    }
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self::new()
    }
}

/// Split on non-word characters and drop short tokens.
fn tokenize(query: &str) -> Vec<String> {
    query
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|word| word.len() >= MIN_TOKEN_LEN)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_query_expands_to_nothing() {
        let expander = QueryExpander::new();
        assert_eq!(expander.expand(""), Vec::<String>::new());
        assert_eq!(expander.expand("   "), Vec::<String>::new());
    }

    #[test]
    fn original_tokens_come_first() {
        let expander = QueryExpander::new();
        let terms = expander.expand("whatsapp support");
        assert_eq!(terms[0], "whatsapp");
        assert_eq!(terms[1], "support");
    }

    #[test]
    fn short_tokens_are_dropped() {
        let expander = QueryExpander::new();
        let terms = expander.expand("ai to do crm");
        assert!(!terms.contains(&"ai".to_string()));
        assert!(!terms.contains(&"to".to_string()));
        assert!(terms.contains(&"crm".to_string()));
    }

    #[test]
    fn phrase_synonyms_trigger_on_substring() {
        let expander = QueryExpander::new();
        let terms = expander.expand("need better customer service");
        assert!(terms.contains(&"helpdesk".to_string()));
        assert!(terms.contains(&"zendesk".to_string()));
    }

    #[test]
    fn synonyms_are_deduplicated() {
        let expander = QueryExpander::new();
        // "crm" maps to "hubspot" and "hubspot" maps back to "crm".
        let terms = expander.expand("crm hubspot");
        let hubspot_count = terms.iter().filter(|t| *t == "hubspot").count();
        assert_eq!(hubspot_count, 1);
    }

    #[test]
    fn expansion_is_capped() {
        let expander = QueryExpander::new();
        let terms = expander.expand("support crm whatsapp automation content scraping inventory");
        assert!(terms.len() <= MAX_EXPANDED_TERMS);
    }

    #[test]
    fn query_is_lowercased() {
        let expander = QueryExpander::new();
        let terms = expander.expand("WhatsApp SUPPORT");
        assert!(terms.contains(&"whatsapp".to_string()));
        assert!(terms.contains(&"support".to_string()));
    }
}
