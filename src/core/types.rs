//! Core data types for the librank service.
//!
//! Defines the book record consumed from the catalog, the ranked
//! result value produced by the ranking engine, and the wire types
//! shared with the HTTP adapter.

use serde::{Deserialize, Serialize};

/// A catalog book record.
///
/// Owned by the catalog collaborator; the ranking engine only reads
/// it. Serialized field names follow the catalog wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique catalog identifier (positive)
    #[serde(rename = "book_id")]
    pub id: u64,

    /// Title text
    pub title: String,

    /// Author name; may be empty
    #[serde(default)]
    pub author: String,

    /// Short language code, e.g. "en"
    #[serde(default)]
    pub language: String,

    /// Publication year; zero or negative means unknown
    #[serde(default)]
    pub year: i32,
}

/// A book together with its relevance scores.
///
/// Plain composition over [`Book`]: one instance is created per
/// candidate per ranking request and dropped once the response is
/// serialized. All five scores are non-negative; `final_score` is at
/// least the configured floor whenever scoring ran.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBook {
    #[serde(flatten)]
    pub book: Book,

    /// Weighted combination of the four component scores
    pub final_score: f64,

    /// TF-IDF-style text relevance component
    pub text_score: f64,

    /// Title match component
    pub title_score: f64,

    /// Author match component
    pub author_score: f64,

    /// Recency decay component
    pub recency_score: f64,
}

impl RankedBook {
    /// Wrap a book with all scores zeroed.
    pub fn new(book: Book) -> Self {
        Self {
            book,
            final_score: 0.0,
            text_score: 0.0,
            title_score: 0.0,
            author_score: 0.0,
            recency_score: 0.0,
        }
    }

    /// Formatted score breakdown for diagnostics.
    pub fn score_breakdown(&self) -> String {
        format!(
            "Final: {:.3} (Text: {:.3}, Title: {:.3}, Author: {:.3}, Recency: {:.3})",
            self.final_score,
            self.text_score,
            self.title_score,
            self.author_score,
            self.recency_score
        )
    }
}

/// Structured search filters passed alongside the free-text query.
///
/// Only filters that were actually supplied are serialized back in
/// responses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl SearchFilters {
    /// True when no structured filter was supplied.
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.language.is_none() && self.year.is_none()
    }
}

/// Response for plain search: books in rank order, scores omitted.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Structured filters that were applied
    pub filters: SearchFilters,

    /// Number of results returned
    pub count: usize,

    /// Matching books, best first
    pub results: Vec<Book>,
}

/// Response for ranked search: full score detail per book.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSearchResponse {
    /// Original query string
    pub query: String,

    /// Structured filters that were applied
    pub filters: SearchFilters,

    /// Number of results returned
    pub count: usize,

    /// Ranked books, best first
    pub results: Vec<RankedBook>,

    /// Ranking algorithm summary, present when debug was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_info: Option<RankingInfo>,

    /// Score breakdowns for the top results, present when debug was
    /// requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_top_results: Option<Vec<DebugResult>>,
}

/// Summary of the ranking formula, rendered into debug responses.
#[derive(Debug, Clone, Serialize)]
pub struct RankingInfo {
    /// Human-readable algorithm name
    pub algorithm: String,

    /// Weight assignment as a display string
    pub weights: String,

    /// Final score of the best result
    pub top_score: f64,
}

/// Per-book diagnostic entry for debug responses.
#[derive(Debug, Clone, Serialize)]
pub struct DebugResult {
    pub book_id: u64,
    pub title: String,
    pub author: String,

    /// Rendered output of [`RankedBook::score_breakdown`]
    pub breakdown: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Service status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Service name
    pub service: String,

    /// Service status
    pub status: String,

    /// Listen port
    pub port: u16,
}
