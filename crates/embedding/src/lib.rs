//! # Agent Embedding
//!
//! Optional embedding-provider clients (OpenAI, Gemini) used by the
//! semantic booster. Credentials come from the environment; a missing key
//! downgrades the client to a no-op instead of failing.

mod client;
mod error;
mod similarity;

pub use client::{EmbeddingClient, Provider};
pub use error::{EmbeddingError, Result};
pub use similarity::cosine;
