use crate::error::{EmbeddingError, Result};
use serde::Deserialize;
use serde_json::json;

const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
const OPENAI_MODEL: &str = "text-embedding-3-small";
const GEMINI_EMBEDDINGS_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/text-embedding-004:embedText";

/// Supported embedding providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    fn env_key(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Gemini => "GOOGLE_API_KEY",
        }
    }
}

/// Thin client over the provider embedding endpoints.
///
/// A client without a configured key is valid: [`embed`](Self::embed)
/// returns an empty vector so callers can treat "not configured" as "no
/// embedding available" rather than a failure.
pub struct EmbeddingClient {
    provider: Provider,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    data: Vec<OpenAiEmbedding>,
}

#[derive(Deserialize)]
struct OpenAiEmbedding {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    embedding: GeminiEmbedding,
}

#[derive(Deserialize)]
struct GeminiEmbedding {
    value: Vec<f32>,
}

impl EmbeddingClient {
    pub fn new(provider: Provider, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client reading the provider's key from the environment.
    pub fn from_env(provider: Provider) -> Self {
        let api_key = std::env::var(provider.env_key()).ok();
        Self::new(provider, api_key)
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Embed a single text. Missing credentials yield `Ok(vec![])`;
    /// transport failures and non-success responses are real errors.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let Some(api_key) = self.api_key.as_deref() else {
            log::warn!(
                "{} API key not configured, skipping embedding",
                self.provider.as_str()
            );
            return Ok(Vec::new());
        };

        match self.provider {
            Provider::OpenAi => self.embed_openai(api_key, text).await,
            Provider::Gemini => self.embed_gemini(api_key, text).await,
        }
    }

    async fn embed_openai(&self, api_key: &str, text: &str) -> Result<Vec<f32>> {
        let response = self
            .client
            .post(OPENAI_EMBEDDINGS_URL)
            .bearer_auth(api_key)
            .json(&json!({
                "input": text,
                "model": OPENAI_MODEL,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EmbeddingError::Provider(format!(
                "OpenAI API error: {}",
                response.status()
            )));
        }

        let body: OpenAiResponse = response.json().await?;
        Ok(body.data.into_iter().next().map(|e| e.embedding).unwrap_or_default())
    }

    async fn embed_gemini(&self, api_key: &str, text: &str) -> Result<Vec<f32>> {
        let response = self
            .client
            .post(format!("{GEMINI_EMBEDDINGS_URL}?key={api_key}"))
            .json(&json!({ "text": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EmbeddingError::Provider(format!(
                "Gemini API error: {}",
                response.status()
            )));
        }

        let body: GeminiResponse = response.json().await?;
        Ok(body.embedding.value)
    }
}
