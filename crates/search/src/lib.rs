//! # Agent Search
//!
//! Hybrid relevance search over the agent catalog: synonym-based query
//! expansion, field-weighted keyword scoring, typo-tolerant fuzzy fallback,
//! merge/dedup, an optional flat semantic boost, and zero-result
//! suggestions. A separate recommendation matcher scores agents against a
//! structured problem statement.

mod boost;
mod config;
mod engine;
mod error;
mod expand;
mod fuzzy;
mod keyword;
mod matcher;
mod merge;
mod suggest;
mod synonyms;

pub use boost::SemanticBooster;
pub use config::SearchConfig;
pub use engine::{SearchEngine, SearchOptions};
pub use error::{Result, SearchError};
pub use expand::QueryExpander;
pub use fuzzy::FuzzyMatcher;
pub use matcher::{extract_industries, extract_tools, match_agents, MatchOptions};
pub use suggest::suggest;
pub use synonyms::SYNONYM_TABLE;
