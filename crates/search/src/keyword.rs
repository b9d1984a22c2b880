use crate::config::DIRECT_HIT_WEIGHT;
use agent_protocol::{Agent, SearchResult};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Maximum number of match reasons attached to a keyword result.
const MAX_REASONS: usize = 3;

/// Score every catalog entry against the expanded term set.
///
/// Each term found anywhere in the entry's searchable text counts as one
/// direct hit worth [`DIRECT_HIT_WEIGHT`]; the doc score divided by ten is
/// added as a tie-breaker so it can never outrank a real hit. Results come
/// back sorted by score, descending.
pub fn score_all(terms: &[String], agents: &[Agent]) -> Vec<SearchResult> {
    let mut scored: Vec<SearchResult> = agents
        .iter()
        .map(|agent| {
            let text = searchable_text(agent);
            let direct_hits = terms.iter().filter(|term| text.contains(term.as_str())).count();
            let score = direct_hits as f32 * DIRECT_HIT_WEIGHT + agent.doc_score as f32 / 10.0;
            SearchResult::new(agent.clone(), score, match_reasons(terms, agent))
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    scored
}

/// Flatten the fields the keyword pass matches against into one lowercased
/// string. Substring containment over this blob is what makes phrase
/// synonyms like "google sheets" land.
pub fn searchable_text(agent: &Agent) -> String {
    let mut parts: Vec<&str> = vec![&agent.name, &agent.one_liner];
    parts.extend(agent.tags.iter().map(String::as_str));
    parts.extend(agent.categories.iter().map(String::as_str));
    parts.extend(agent.tools.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Human-readable reasons, in field-priority order (tags, tools, categories,
/// name), deduplicated and capped at [`MAX_REASONS`].
fn match_reasons(terms: &[String], agent: &Agent) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut why = Vec::new();

    let mut push = |reason: String| {
        if seen.insert(reason.clone()) {
            why.push(reason);
        }
    };

    for term in terms {
        if agent.tags.iter().any(|t| t.to_lowercase().contains(term.as_str())) {
            push(format!("tag: {term}"));
        }
        if agent.tools.iter().any(|t| t.to_lowercase().contains(term.as_str())) {
            push(format!("tool: {term}"));
        }
        if agent
            .categories
            .iter()
            .any(|c| c.to_lowercase().contains(term.as_str()))
        {
            push(format!("category: {term}"));
        }
        if agent.name.to_lowercase().contains(term.as_str()) {
            push(format!("name: {term}"));
        }
    }

    why.truncate(MAX_REASONS);
    why
}
