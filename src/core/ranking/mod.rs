//! Multi-factor relevance ranking engine.
//!
//! Combines four component scores per candidate book -- text
//! relevance, title match, author match, recency -- into a weighted
//! final score and returns the candidates in descending score order.
//!
//! Ranking is a pure computation over its inputs: no state is shared
//! between invocations, so the service is safe to call concurrently
//! from request handlers without locking. The only I/O is the
//! per-request inverted-index read inside the term-frequency source.
//!
//! The engine never fails. Missing or degraded inputs resolve to
//! defaults; an empty query returns the candidates unscored.

pub mod score;

use crate::core::config::RankingConfig;
use crate::core::index::TermFrequencySource;
use crate::core::types::{Book, RankedBook};
use std::collections::HashMap;

/// Relevance ranking service.
pub struct RankingService {
    term_frequencies: TermFrequencySource,
    config: RankingConfig,
    current_year: i32,
}

impl RankingService {
    /// Create a ranking service.
    ///
    /// `current_year` is the recency reference point; the caller
    /// resolves it from configuration or the clock.
    pub fn new(
        term_frequencies: TermFrequencySource,
        config: RankingConfig,
        current_year: i32,
    ) -> Self {
        Self {
            term_frequencies,
            config,
            current_year,
        }
    }

    /// Rank candidate books against a free-text query.
    ///
    /// Every candidate is wrapped in a [`RankedBook`]. If the
    /// candidate list is empty, or the query is empty or whitespace
    /// only, the wraps are returned immediately with all scores at
    /// exactly zero -- the score floor applies only on the scoring
    /// path.
    ///
    /// Scored results are ordered by final score descending, with
    /// ties broken ascending by book id so the ordering is
    /// deterministic.
    pub fn rank(&self, books: Vec<Book>, query: &str) -> Vec<RankedBook> {
        let mut ranked: Vec<RankedBook> = books.into_iter().map(RankedBook::new).collect();
        if ranked.is_empty() {
            return ranked;
        }

        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        if terms.is_empty() {
            return ranked;
        }

        // One index read per ranking request, shared by all books.
        let frequencies = self.term_frequencies.lookup(&terms);

        for book in &mut ranked {
            self.score_book(book, &terms, &frequencies);
        }

        ranked.sort_by(|a, b| {
            b.final_score
                .total_cmp(&a.final_score)
                .then_with(|| a.book.id.cmp(&b.book.id))
        });
        ranked
    }

    fn score_book(
        &self,
        ranked: &mut RankedBook,
        terms: &[String],
        frequencies: &HashMap<String, u64>,
    ) {
        let cfg = &self.config;

        ranked.text_score = score::text_score(terms, frequencies, cfg.corpus_size_estimate);
        ranked.title_score = score::title_score(&ranked.book.title, terms);
        ranked.author_score = score::author_score(&ranked.book.author, terms);
        ranked.recency_score = score::recency_score(ranked.book.year, self.current_year);

        let combined = ranked.text_score * cfg.text_weight
            + ranked.title_score * cfg.title_weight
            + ranked.author_score * cfg.author_weight
            + ranked.recency_score * cfg.recency_weight;

        ranked.final_score = combined.max(cfg.score_floor);
    }

    /// The recency reference year this service scores against.
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// The ranking tunables this service was built with.
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }
}
