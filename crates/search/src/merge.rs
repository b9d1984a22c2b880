use agent_protocol::{Agent, SearchResult};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Merge the keyword pool with the fuzzy fallback pool.
///
/// First occurrence of an id wins, so a keyword result always shadows the
/// fuzzy rendition of the same entry. The merged list is re-sorted by score
/// (stable, so earlier pool position breaks exact ties) and capped.
pub fn merge_results(
    primary: Vec<SearchResult>,
    fallback: Vec<SearchResult>,
    max_results: usize,
) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<SearchResult> = Vec::new();

    for result in primary.into_iter().chain(fallback) {
        if seen.insert(result.agent.id.clone()) {
            merged.push(result);
        }
    }

    merged.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    merged.truncate(max_results);
    merged
}

/// Blank-query ranking: the whole catalog ordered by doc score.
pub fn quality_ranking(agents: &[Agent]) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = agents
        .iter()
        .map(|agent| {
            SearchResult::new(
                agent.clone(),
                agent.doc_score as f32,
                vec!["high quality".to_string()],
            )
        })
        .collect();

    results.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    results
}
