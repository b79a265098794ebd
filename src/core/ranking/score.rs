//! The four component scorers.
//!
//! Each scorer maps a (book field, query terms) pair to a value in
//! [0, 1]. They are free functions so the tunables can be tested
//! independently of the orchestration logic.

use std::collections::HashMap;

/// Divisor applied to the summed IDF before clamping to 1.0.
pub const TEXT_SCORE_NORMALIZER: f64 = 10.0;

/// Credit for a whole-word title match.
const WHOLE_WORD_CREDIT: f64 = 1.0;

/// Credit for a substring-only title match.
const SUBSTRING_CREDIT: f64 = 0.6;

/// Extra credit when the title starts with the term.
const TITLE_PREFIX_BONUS: f64 = 0.3;

/// Credit per term found in the author field.
const AUTHOR_MATCH_CREDIT: f64 = 0.8;

/// Recency score for books with an unknown publication year.
const UNKNOWN_YEAR_SCORE: f64 = 0.1;

/// TF-IDF-style text relevance.
///
/// Per term: `idf = ln(corpus_size / max(freq, 1))`, summed across
/// terms and normalized by [`TEXT_SCORE_NORMALIZER`]. A term missing
/// from the frequency table counts as rare (frequency 1).
/// `corpus_size` is a configured estimate, not a live document count;
/// treating it as exact is a known approximation.
pub fn text_score(terms: &[String], frequencies: &HashMap<String, u64>, corpus_size: u64) -> f64 {
    let mut sum = 0.0;
    for term in terms {
        let frequency = frequencies.get(term).copied().unwrap_or(1).max(1);
        sum += (corpus_size as f64 / frequency as f64).ln();
    }
    (sum / TEXT_SCORE_NORMALIZER).clamp(0.0, 1.0)
}

/// Title match score.
///
/// Whole-word occurrences earn full credit, substring-only
/// occurrences partial credit, and a title beginning with the term
/// earns an extra bonus. Averaged over the term count.
pub fn title_score(title: &str, terms: &[String]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let title = title.to_lowercase();
    let mut sum = 0.0;
    for term in terms {
        if title.contains(term.as_str()) {
            if contains_whole_word(&title, term) {
                sum += WHOLE_WORD_CREDIT;
            } else {
                sum += SUBSTRING_CREDIT;
            }
            if title.starts_with(term.as_str()) {
                sum += TITLE_PREFIX_BONUS;
            }
        }
    }
    (sum / terms.len() as f64).min(1.0)
}

/// Author match score: fixed credit per term occurring as a
/// substring of the author field, averaged over the term count.
pub fn author_score(author: &str, terms: &[String]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let author = author.to_lowercase();
    let mut sum = 0.0;
    for term in terms {
        if author.contains(term.as_str()) {
            sum += AUTHOR_MATCH_CREDIT;
        }
    }
    (sum / terms.len() as f64).min(1.0)
}

/// Recency decay in discrete age buckets; newer books score higher.
///
/// Buckets are checked in ascending age order, first match wins.
pub fn recency_score(year: i32, current_year: i32) -> f64 {
    if year <= 0 {
        return UNKNOWN_YEAR_SCORE;
    }

    let age = current_year - year;
    match age {
        a if a <= 10 => 1.0,
        a if a <= 25 => 0.8,
        a if a <= 50 => 0.6,
        a if a <= 100 => 0.4,
        _ => 0.2,
    }
}

/// Whole-word occurrence check. A word character is an alphanumeric
/// or underscore; the match must be bounded by non-word characters
/// or string edges.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();

        let left_bounded = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let right_bounded = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));

        if left_bounded && right_bounded {
            return true;
        }

        // Advance one character to keep overlapping occurrences
        // reachable.
        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
