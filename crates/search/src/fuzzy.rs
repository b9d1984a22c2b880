use agent_protocol::{Agent, SearchResult};
use nucleo_matcher::{pattern::Pattern, Matcher, Utf32String};
use std::cmp::Ordering;

/// Queries shorter than this skip the fuzzy pass entirely.
const MIN_MATCH_LEN: usize = 3;

/// Entries whose weighted distance exceeds this are rejected.
const DISTANCE_THRESHOLD: f32 = 0.4;

/// Relative weight of each field in the distance computation.
const WEIGHT_NAME: f32 = 0.3;
const WEIGHT_ONE_LINER: f32 = 0.3;
const WEIGHT_TAGS: f32 = 0.2;
const WEIGHT_CATEGORIES: f32 = 0.1;
const WEIGHT_TOOLS: f32 = 0.1;

/// Typo-tolerant fallback matcher over the catalog using nucleo-matcher.
///
/// Each entry gets a 0..1 distance: per-field fuzzy similarities (normalized
/// against the pattern's self-match score) are averaged with the field
/// weights above, over the fields that matched at all. Entries with no
/// matching field, or a distance above the threshold, are dropped.
pub struct FuzzyMatcher {
    matcher: Matcher,
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Fuzzy-match the raw query against every agent, returning up to
    /// `limit` candidates sorted by ascending distance.
    ///
    /// Distances are converted to display scores on the keyword scale:
    /// `max(10, 60 - round(distance * 60))`, so a perfect fuzzy match still
    /// ranks below a multi-hit keyword result.
    pub fn search(&mut self, query: &str, agents: &[Agent], limit: usize) -> Vec<SearchResult> {
        let query = query.trim();
        if query.len() < MIN_MATCH_LEN {
            return Vec::new();
        }

        let pattern = Pattern::parse(
            query,
            nucleo_matcher::pattern::CaseMatching::Ignore,
            nucleo_matcher::pattern::Normalization::Smart,
        );

        // The pattern's score against its own text is the ceiling used to
        // normalize raw nucleo scores into 0..1 similarities.
        let self_haystack = Utf32String::from(query);
        let Some(self_score) = pattern.score(self_haystack.slice(..), &mut self.matcher) else {
            return Vec::new();
        };
        if self_score == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<(f32, &Agent)> = agents
            .iter()
            .filter_map(|agent| {
                let distance = self.distance(&pattern, self_score, agent)?;
                (distance <= DISTANCE_THRESHOLD).then_some((distance, agent))
            })
            .collect();

        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        candidates.truncate(limit);

        let why = vec![format!("fuzzy match: \"{query}\"")];
        candidates
            .into_iter()
            .map(|(distance, agent)| {
                SearchResult::new(agent.clone(), display_score(distance), why.clone())
            })
            .collect()
    }

    /// Weighted distance over the fields the pattern matched, or `None`
    /// when nothing matched.
    fn distance(&mut self, pattern: &Pattern, self_score: u32, agent: &Agent) -> Option<f32> {
        let mut weighted_sim = 0.0;
        let mut weight_total = 0.0;

        let mut fold = |sim: Option<f32>, weight: f32| {
            if let Some(sim) = sim {
                weighted_sim += sim * weight;
                weight_total += weight;
            }
        };

        fold(
            self.similarity(pattern, self_score, std::slice::from_ref(&agent.name)),
            WEIGHT_NAME,
        );
        fold(
            self.similarity(pattern, self_score, std::slice::from_ref(&agent.one_liner)),
            WEIGHT_ONE_LINER,
        );
        fold(self.similarity(pattern, self_score, &agent.tags), WEIGHT_TAGS);
        fold(
            self.similarity(pattern, self_score, &agent.categories),
            WEIGHT_CATEGORIES,
        );
        fold(self.similarity(pattern, self_score, &agent.tools), WEIGHT_TOOLS);

        (weight_total > 0.0).then(|| 1.0 - weighted_sim / weight_total)
    }

    /// Best 0..1 similarity across a field's values, `None` if no value
    /// matches the pattern.
    fn similarity(&mut self, pattern: &Pattern, self_score: u32, values: &[String]) -> Option<f32> {
        values
            .iter()
            .filter(|v| !v.is_empty())
            .filter_map(|value| {
                let haystack = Utf32String::from(value.as_str());
                let score = pattern.score(haystack.slice(..), &mut self.matcher)?;
                Some((score as f32 / self_score as f32).min(1.0))
            })
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn display_score(distance: f32) -> f32 {
    (60.0 - (distance * 60.0).round()).max(10.0)
}
