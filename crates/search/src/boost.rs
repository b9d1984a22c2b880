use agent_embedding::EmbeddingClient;
use agent_protocol::SearchResult;

/// Reason string appended to boosted results.
const BOOST_REASON: &str = "AI enhanced";

/// Flat-score semantic booster.
///
/// The query is embedded to confirm the provider is reachable, then every
/// result gets the same fixed increment. No corpus embeddings exist, so
/// this preserves the base ordering; true nearest-neighbor re-ranking would
/// need a precomputed corpus index. Any provider failure degrades to the
/// unboosted ranking.
pub struct SemanticBooster {
    client: Option<EmbeddingClient>,
}

impl SemanticBooster {
    pub fn new(client: Option<EmbeddingClient>) -> Self {
        Self { client }
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    /// Apply the boost in place. Returns whether it was applied.
    pub async fn boost(&self, query: &str, results: &mut [SearchResult], increment: f32) -> bool {
        let Some(client) = &self.client else {
            return false;
        };
        if query.is_empty() || results.is_empty() {
            return false;
        }

        let vector = match client.embed(query).await {
            Ok(vector) => vector,
            Err(e) => {
                log::warn!("Embedding failed, keeping keyword ranking: {e}");
                return false;
            }
        };
        if vector.is_empty() {
            log::info!("Embedding skipped (provider not configured), keeping keyword ranking");
            return false;
        }

        for result in results.iter_mut() {
            result.score = Some(result.score() + increment);
            result.why.push(BOOST_REASON.to_string());
        }
        true
    }
}
