use crate::boost::SemanticBooster;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::expand::QueryExpander;
use crate::fuzzy::FuzzyMatcher;
use crate::keyword;
use crate::merge::{merge_results, quality_ranking};
use crate::suggest;
use agent_protocol::{Agent, SearchResponse, SearchResult};

/// Per-request options for the search entry point.
#[derive(Debug, Default, Clone)]
pub struct SearchOptions {
    /// Opt in to the semantic booster. Without a configured provider this
    /// is a silent no-op.
    pub boost: bool,
}

/// The hybrid search pipeline over an immutable catalog snapshot.
///
/// A query flows through expansion, keyword scoring, an optional fuzzy
/// fallback when the keyword pool is thin, merge/dedup, and the optional
/// semantic boost. A blank query short-circuits to the doc-score ranking
/// of the whole catalog.
pub struct SearchEngine {
    agents: Vec<Agent>,
    expander: QueryExpander,
    fuzzy: FuzzyMatcher,
    booster: SemanticBooster,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(agents: Vec<Agent>, booster: SemanticBooster) -> Self {
        Self::with_config(agents, booster, SearchConfig::default())
    }

    pub fn with_config(agents: Vec<Agent>, booster: SemanticBooster, config: SearchConfig) -> Self {
        Self {
            agents,
            expander: QueryExpander::new(),
            fuzzy: FuzzyMatcher::new(),
            booster,
            config,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Run the full pipeline and wrap the outcome in a response envelope.
    ///
    /// Zero-result responses carry suggestions and the expanded term set so
    /// the caller can explain what was understood; non-empty responses
    /// carry neither.
    pub async fn search(&mut self, query: &str, options: &SearchOptions) -> Result<SearchResponse> {
        let query = query.trim();

        let (mut results, terms) = if query.is_empty() {
            (quality_ranking(&self.agents), Vec::new())
        } else {
            let terms = self.expander.expand(query);
            (self.ranked_results(query, &terms), terms)
        };

        if options.boost {
            self.booster
                .boost(query, &mut results, self.config.semantic_boost)
                .await;
        }

        log::debug!(
            "Search \"{query}\" expanded to {} terms, {} results",
            terms.len(),
            results.len()
        );

        if results.is_empty() {
            let message = if query.is_empty() {
                "Try searching for your business type and challenges".to_string()
            } else {
                format!("No agents found for \"{query}\". Try these suggestions:")
            };
            return Ok(SearchResponse {
                results: Vec::new(),
                suggestions: suggest::suggest(query),
                understood_terms: terms,
                total: 0,
                query: query.to_string(),
                message: Some(message),
            });
        }

        let total = results.len();
        Ok(SearchResponse {
            results,
            suggestions: Vec::new(),
            understood_terms: Vec::new(),
            total,
            query: query.to_string(),
            message: None,
        })
    }

    /// Keyword pass plus fuzzy fallback when the primary pool is thin.
    fn ranked_results(&mut self, query: &str, terms: &[String]) -> Vec<SearchResult> {
        let scored = keyword::score_all(terms, &self.agents);
        let mut primary: Vec<SearchResult> = scored
            .into_iter()
            .filter(|r| r.score() >= self.config.keyword_score_floor)
            .collect();
        primary.truncate(self.config.max_results);

        if primary.len() >= self.config.fuzzy_trigger_min || terms.is_empty() {
            return primary;
        }

        let fallback = self
            .fuzzy
            .search(query, &self.agents, self.config.max_fuzzy_candidates);
        merge_results(primary, fallback, self.config.max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn agent(id: &str, name: &str, one_liner: &str, tags: &[&str], doc: u32) -> Agent {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "oneLiner": one_liner,
            "tags": tags,
            "docScore": doc,
        }))
        .unwrap()
    }

    fn catalog() -> Vec<Agent> {
        vec![
            agent(
                "a1",
                "WhatsApp Support Bot",
                "Answers customer questions on WhatsApp",
                &["support", "whatsapp"],
                80,
            ),
            agent(
                "a2",
                "Invoice Chaser",
                "Chases overdue invoices automatically",
                &["billing", "invoicing"],
                95,
            ),
            agent(
                "a3",
                "Lead Router",
                "Routes inbound leads to the right rep",
                &["sales", "lead"],
                60,
            ),
        ]
    }

    fn engine(agents: Vec<Agent>) -> SearchEngine {
        SearchEngine::new(agents, SemanticBooster::disabled())
    }

    #[tokio::test]
    async fn blank_query_ranks_whole_catalog_by_doc_score() {
        let mut engine = engine(catalog());

        let response = engine.search("  ", &SearchOptions::default()).await.unwrap();

        assert_eq!(response.total, 3);
        assert_eq!(response.results[0].agent.id, "a2");
        assert_eq!(response.results[0].why, vec!["high quality"]);
        assert!(response.suggestions.is_empty());
    }

    #[tokio::test]
    async fn keyword_hits_rank_first_with_reasons() {
        let mut engine = engine(catalog());

        let response = engine
            .search("whatsapp support", &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(response.results[0].agent.id, "a1");
        assert!(response.results[0].score() >= 48.0);
        assert!(response.results[0]
            .why
            .iter()
            .any(|w| w.starts_with("tag:")));
        assert!(response.suggestions.is_empty());
        assert!(response.understood_terms.is_empty());
    }

    #[tokio::test]
    async fn typo_falls_back_to_fuzzy() {
        let mut engine = engine(catalog());

        let response = engine
            .search("invoce", &SearchOptions::default())
            .await
            .unwrap();

        assert!(!response.results.is_empty());
        assert_eq!(response.results[0].agent.id, "a2");
        assert!(response.results[0].why[0].starts_with("fuzzy match:"));
    }

    #[tokio::test]
    async fn zero_results_carry_suggestions_and_terms() {
        let mut engine = engine(catalog());

        let response = engine
            .search("quantum blockchain notary", &SearchOptions::default())
            .await
            .unwrap();

        assert!(response.results.is_empty());
        assert_eq!(response.total, 0);
        assert!(!response.suggestions.is_empty());
        assert!(response
            .understood_terms
            .contains(&"quantum".to_string()));
        assert_eq!(
            response.message.as_deref(),
            Some(r#"No agents found for "quantum blockchain notary". Try these suggestions:"#)
        );
    }

    #[tokio::test]
    async fn search_is_deterministic_without_boost() {
        let mut engine = engine(catalog());
        let options = SearchOptions::default();

        let first = engine.search("support", &options).await.unwrap();
        let second = engine.search("support", &options).await.unwrap();

        let ids: Vec<&str> = first.results.iter().map(|r| r.agent.id.as_str()).collect();
        let ids_again: Vec<&str> = second.results.iter().map(|r| r.agent.id.as_str()).collect();
        assert_eq!(ids, ids_again);
    }

    #[tokio::test]
    async fn boost_without_provider_leaves_ranking_unchanged() {
        let mut engine = engine(catalog());

        let base = engine
            .search("support", &SearchOptions::default())
            .await
            .unwrap();
        let boosted = engine
            .search("support", &SearchOptions { boost: true })
            .await
            .unwrap();

        let base_scores: Vec<f32> = base.results.iter().map(|r| r.score()).collect();
        let boosted_scores: Vec<f32> = boosted.results.iter().map(|r| r.score()).collect();
        assert_eq!(base_scores, boosted_scores);
    }

    #[tokio::test]
    async fn shrunk_caps_limit_the_result_list() {
        let agents: Vec<Agent> = (0..10)
            .map(|i| {
                let id = format!("a{i}");
                agent(&id, "Support Desk", "Handles support tickets", &["support"], 50)
            })
            .collect();
        let config = SearchConfig {
            max_results: 4,
            ..SearchConfig::default()
        };
        let mut engine = SearchEngine::with_config(agents, SemanticBooster::disabled(), config);

        let response = engine
            .search("support", &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(response.results.len(), 4);
    }
}
