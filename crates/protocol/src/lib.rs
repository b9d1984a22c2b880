use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One addressable listing in the searchable catalog.
///
/// Catalog data files are camelCase JSON; optional collections default to
/// empty so partially filled records never fail deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub one_liner: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub doc_score: u32,
    #[serde(default)]
    pub setup_time_mins: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub config_url: String,
}

/// An agent snapshot plus relevance score and human-readable match reasons.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(flatten)]
    pub agent: Agent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub why: Vec<String>,
}

impl SearchResult {
    pub fn new(agent: Agent, score: f32, why: Vec<String>) -> Self {
        Self {
            agent,
            score: Some(score),
            why,
        }
    }

    pub fn score(&self) -> f32 {
        self.score.unwrap_or(0.0)
    }
}

/// Response envelope for the search entry point.
///
/// `suggestions` and `understood_terms` are populated only when `results`
/// is empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub understood_terms: Vec<String>,
    pub total: usize,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Unique facet values across the catalog, alphabetically sorted.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub tools: Vec<String>,
    pub tags: Vec<String>,
    pub industries: Vec<String>,
}

/// Most frequent facet values, ranked by how many listings carry them.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PopularFacets {
    pub categories: Vec<String>,
    pub tools: Vec<String>,
    pub tags: Vec<String>,
}

/// Why a recommendation matched, grouped by signal.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchReason {
    pub industry: Vec<String>,
    pub pain_points: Vec<String>,
    pub tools: Vec<String>,
}

/// An agent plus its composite recommendation score.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AgentMatch {
    #[serde(flatten)]
    pub agent: Agent,
    pub score: f32,
    pub match_reason: MatchReason,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UtmParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
}

/// Lead-capture form payload as submitted by the caller.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub agent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default)]
    pub consent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm: Option<UtmParams>,
}

/// A validated lead as persisted to the lead store.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    #[serde(flatten)]
    pub form: LeadForm,
    pub captured_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn capture(form: LeadForm) -> Self {
        Self {
            form,
            captured_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
