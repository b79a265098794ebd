//! librank - Book search and relevance ranking service
//!
//! Ranks a candidate set of book records against a free-text query
//! and optional structured filters (author, language, year),
//! producing a relevance-ordered result list with an explainable
//! score.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - catalog (candidate retrieval)
//!   - index (term-frequency lookup over the inverted index)
//!   - ranking (scorers + orchestrator)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, error-to-status mapping
//!
//! # Ranking
//!
//! Four component scores per candidate, each in [0, 1]:
//! TF-IDF-style text relevance, title match, author match, and
//! recency decay. They combine under configurable weights
//! (0.40 / 0.35 / 0.15 / 0.10 by default) with a floor of 0.1 on
//! the final score. Degraded inputs never fail a ranking request:
//! a missing inverted index falls back to default term frequencies,
//! and an empty query returns the candidates unscored.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{LibrankError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
