use crate::config::MIN_TOKEN_LEN;
use agent_protocol::{Agent, AgentMatch, MatchReason};
use std::cmp::Ordering;

/// Composite score weights, summing to 100 with the doc-score component.
const WEIGHT_INDUSTRY: f32 = 35.0;
const WEIGHT_PAIN_POINTS: f32 = 40.0;
const WEIGHT_TOOLS: f32 = 15.0;
const WEIGHT_CATEGORY_BONUS: f32 = 5.0;
const WEIGHT_DOC_SCORE: f32 = 10.0;

/// Matches below this composite score are not worth showing.
const RELEVANCE_FLOOR: f32 = 20.0;

/// Known tool names recognized inside free-text problem descriptions.
const KNOWN_TOOLS: &[&str] = &[
    "gmail",
    "hubspot",
    "salesforce",
    "slack",
    "notion",
    "airtable",
    "shopify",
    "woocommerce",
    "zendesk",
    "intercom",
    "calendly",
    "google drive",
    "sheets",
    "whatsapp",
    "instagram",
    "youtube",
    "openai",
    "pinecone",
    "twilio",
    "clearbit",
    "mixpanel",
];

/// Known industry names recognized inside free-text problem descriptions.
const KNOWN_INDUSTRIES: &[&str] = &[
    "e-commerce",
    "saas",
    "b2b",
    "retail",
    "healthcare",
    "education",
    "consulting",
    "agencies",
    "fintech",
    "media",
    "d2c",
    "manufacturing",
];

/// Structured inputs for the recommendation matcher.
#[derive(Debug, Default, Clone)]
pub struct MatchOptions {
    pub query: String,
    pub industries: Vec<String>,
    pub tools: Vec<String>,
    pub categories: Vec<String>,
}

/// Score every agent against a structured problem statement.
///
/// The composite blends four signals: industry overlap, pain-point keyword
/// overlap, tool affinity, and a small category bonus, with the doc score
/// normalized in as the final ten percent. Matches under the relevance
/// floor are dropped; the rest come back sorted by score, descending.
pub fn match_agents(agents: &[Agent], options: &MatchOptions) -> Vec<AgentMatch> {
    let query_words: Vec<String> = options
        .query
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.' || c == '-')
        .filter(|w| w.len() >= MIN_TOKEN_LEN)
        .map(String::from)
        .collect();

    let mut matches: Vec<AgentMatch> = agents
        .iter()
        .map(|agent| score_agent(agent, options, &query_words))
        .filter(|m| m.score > RELEVANCE_FLOOR)
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches
}

fn score_agent(agent: &Agent, options: &MatchOptions, query_words: &[String]) -> AgentMatch {
    let mut score = 0.0;
    let mut reason = MatchReason::default();

    let industry_matches = overlap(&agent.industries, &options.industries);
    if !industry_matches.is_empty() {
        let denom = agent.industries.len().max(options.industries.len()) as f32;
        score += WEIGHT_INDUSTRY * industry_matches.len() as f32 / denom;
        reason.industry = industry_matches;
    }

    if !query_words.is_empty() {
        let text = pain_point_text(agent);
        let matched: Vec<String> = query_words
            .iter()
            .filter(|word| {
                text.contains(word.as_str())
                    || agent.tags.iter().any(|tag| tag.contains(word.as_str()))
            })
            .cloned()
            .collect();
        if !matched.is_empty() {
            score += WEIGHT_PAIN_POINTS * matched.len() as f32 / query_words.len() as f32;
            reason.pain_points = matched;
        }
    }

    let tool_matches = overlap(&agent.tools, &options.tools);
    if !tool_matches.is_empty() {
        let denom = agent.tools.len().max(options.tools.len()) as f32;
        score += WEIGHT_TOOLS * tool_matches.len() as f32 / denom;
        reason.tools = tool_matches;
    }

    let category_matches = overlap(&agent.categories, &options.categories);
    if !category_matches.is_empty() {
        score += WEIGHT_CATEGORY_BONUS * category_matches.len() as f32
            / options.categories.len() as f32;
    }

    score += WEIGHT_DOC_SCORE * agent.doc_score as f32 / 100.0;

    AgentMatch {
        agent: agent.clone(),
        score: score.min(100.0),
        match_reason: reason,
    }
}

/// Agent values that overlap a user-supplied list, where either side
/// containing the other (case-insensitive) counts.
fn overlap(agent_values: &[String], user_values: &[String]) -> Vec<String> {
    agent_values
        .iter()
        .filter(|value| {
            let value_lower = value.to_lowercase();
            user_values.iter().any(|user| {
                let user_lower = user.to_lowercase();
                user_lower.contains(&value_lower) || value_lower.contains(&user_lower)
            })
        })
        .cloned()
        .collect()
}

fn pain_point_text(agent: &Agent) -> String {
    let mut parts: Vec<&str> = agent.tags.iter().map(String::as_str).collect();
    parts.push(&agent.one_liner);
    parts.extend(agent.categories.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Pull known tool names out of a free-text query.
pub fn extract_tools(query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    KNOWN_TOOLS
        .iter()
        .filter(|tool| query_lower.contains(*tool))
        .map(|t| t.to_string())
        .collect()
}

/// Pull known industry names out of a free-text query.
pub fn extract_industries(query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    KNOWN_INDUSTRIES
        .iter()
        .filter(|industry| query_lower.contains(*industry))
        .map(|i| i.to_string())
        .collect()
}
