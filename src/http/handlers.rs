//! HTTP request handlers for the librank API
//!
//! Implements handlers for the four endpoints: health, status,
//! search, and ranked search. Handlers own request-parameter
//! validation; everything past this boundary degrades gracefully
//! instead of failing.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::core::error::{LibrankError, Result};
use crate::core::services::Services;
use crate::core::types::*;

/// Query parameters accepted by the search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query (required)
    pub q: Option<String>,

    /// Author filter (substring match)
    pub author: Option<String>,

    /// Language filter (exact match)
    pub language: Option<String>,

    /// Year filter; parsed here so a bad value yields an explicit
    /// 400 instead of a generic rejection
    pub year: Option<String>,

    /// Result limit, capped at the configured maximum
    pub limit: Option<usize>,

    /// When "true", the ranked endpoint includes score diagnostics
    pub debug: Option<String>,
}

/// A validated search request
struct SearchQuery {
    query: String,
    filters: SearchFilters,
    limit: usize,
    debug: bool,
}

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Service status handler
///
/// Returns the service name and listen port.
pub async fn status_handler(State(services): State<Arc<Services>>) -> impl IntoResponse {
    Json(StatusResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        status: "running".to_string(),
        port: services.config.server.port,
    })
}

/// Search handler
///
/// Retrieves candidates from the catalog, ranks them, and returns
/// the books in rank order without score detail.
///
/// # Errors
///
/// - `InvalidQuery`: the `q` parameter is missing or blank
/// - `InvalidFilter`: the `year` parameter is not an integer
/// - `CatalogUnavailable`: the catalog artifact cannot be read
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let request = validate_params(params, &services)?;
    let ranked = run_ranked_search(&services, &request)?;

    let results: Vec<Book> = ranked.into_iter().map(|r| r.book).collect();
    Ok(Json(SearchResponse {
        query: request.query,
        filters: request.filters,
        count: results.len(),
        results,
    }))
}

/// Ranked search handler
///
/// Same pipeline as [`search_handler`] but exposes the per-factor
/// scores, and with `debug=true` a formatted breakdown of the top
/// results.
///
/// # Errors
///
/// - `InvalidQuery`: the `q` parameter is missing or blank
/// - `InvalidFilter`: the `year` parameter is not an integer
/// - `CatalogUnavailable`: the catalog artifact cannot be read
pub async fn ranked_search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<RankedSearchResponse>> {
    let request = validate_params(params, &services)?;
    let results = run_ranked_search(&services, &request)?;

    let (ranking_info, debug_top_results) = if request.debug && !results.is_empty() {
        let cfg = services.ranking.config();
        let info = RankingInfo {
            algorithm: "TF-IDF + Title Match + Author Match + Recency".to_string(),
            weights: format!(
                "Text: {:.0}%, Title: {:.0}%, Author: {:.0}%, Recency: {:.0}%",
                cfg.text_weight * 100.0,
                cfg.title_weight * 100.0,
                cfg.author_weight * 100.0,
                cfg.recency_weight * 100.0
            ),
            top_score: results[0].final_score,
        };
        let top = results
            .iter()
            .take(3)
            .map(|r| DebugResult {
                book_id: r.book.id,
                title: r.book.title.clone(),
                author: r.book.author.clone(),
                breakdown: r.score_breakdown(),
            })
            .collect();
        (Some(info), Some(top))
    } else {
        (None, None)
    };

    Ok(Json(RankedSearchResponse {
        query: request.query,
        filters: request.filters,
        count: results.len(),
        results,
        ranking_info,
        debug_top_results,
    }))
}

/// Validate raw query parameters into a search request.
fn validate_params(params: SearchParams, services: &Services) -> Result<SearchQuery> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            LibrankError::InvalidQuery("Query parameter 'q' is required".to_string())
        })?
        .to_string();

    let year = match params.year.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| LibrankError::InvalidFilter {
            field: "year".to_string(),
            message: format!("expected an integer, got '{raw}'"),
        })?),
    };

    let filters = SearchFilters {
        author: params.author.filter(|a| !a.trim().is_empty()),
        language: params.language.filter(|l| !l.trim().is_empty()),
        year,
    };

    let ranking = &services.config.ranking;
    let limit = params
        .limit
        .unwrap_or(ranking.default_limit)
        .min(ranking.max_limit);

    let debug = params
        .debug
        .as_deref()
        .is_some_and(|d| d.eq_ignore_ascii_case("true"));

    Ok(SearchQuery {
        query,
        filters,
        limit,
        debug,
    })
}

/// Retrieve, rank, and truncate candidates for a validated request.
fn run_ranked_search(services: &Services, request: &SearchQuery) -> Result<Vec<RankedBook>> {
    let candidates = services.catalog.search(&request.query, &request.filters)?;
    let ranked = services.ranking.rank(candidates, &request.query);
    Ok(ranked.into_iter().take(request.limit).collect())
}
