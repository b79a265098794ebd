//! Catalog search collaborator.
//!
//! Retrieves the unranked candidate set for a query and optional
//! structured filters from the `books.json` artifact in the shared
//! data repository. The ranking engine treats this module as an
//! opaque candidate source and never re-filters its output.
//!
//! Unlike the inverted-index artifact, a missing catalog is a real
//! error: there is nothing to rank without candidates.

use crate::core::error::{LibrankError, Result};
use crate::core::types::{Book, SearchFilters};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the catalog artifact inside the data repository.
pub const CATALOG_FILE_NAME: &str = "books.json";

/// Candidate retrieval over the on-disk book catalog.
pub struct CatalogService {
    catalog_path: PathBuf,
}

impl CatalogService {
    /// Create a catalog reading from `data_dir/books.json`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            catalog_path: data_dir.as_ref().join(CATALOG_FILE_NAME),
        }
    }

    /// Return every book matching the query and filters, in catalog
    /// order.
    ///
    /// A book is a candidate when any lower-cased query term occurs
    /// as a substring of its title or author. Filters narrow the set
    /// further: author by case-insensitive substring, language by
    /// case-insensitive equality, year by equality.
    ///
    /// The catalog is re-read on every call; candidates are never
    /// cached across requests.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Result<Vec<Book>> {
        let books = self.read_catalog().map_err(|e| {
            LibrankError::CatalogUnavailable(format!(
                "{}: {e}",
                self.catalog_path.display()
            ))
        })?;

        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        let candidates: Vec<Book> = books
            .into_iter()
            .filter(|book| Self::matches_query(book, &terms) && Self::matches_filters(book, filters))
            .collect();

        debug!(
            query = %query,
            candidates = candidates.len(),
            "Catalog search completed"
        );
        Ok(candidates)
    }

    fn matches_query(book: &Book, terms: &[String]) -> bool {
        if terms.is_empty() {
            return true;
        }

        let title = book.title.to_lowercase();
        let author = book.author.to_lowercase();
        terms
            .iter()
            .any(|term| title.contains(term.as_str()) || author.contains(term.as_str()))
    }

    fn matches_filters(book: &Book, filters: &SearchFilters) -> bool {
        if let Some(author) = &filters.author {
            if !book
                .author
                .to_lowercase()
                .contains(&author.to_lowercase())
            {
                return false;
            }
        }
        if let Some(language) = &filters.language {
            if !book.language.eq_ignore_ascii_case(language) {
                return false;
            }
        }
        if let Some(year) = filters.year {
            if book.year != year {
                return false;
            }
        }
        true
    }

    fn read_catalog(&self) -> Result<Vec<Book>> {
        let contents = fs::read_to_string(&self.catalog_path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, contents: &str) -> CatalogService {
        fs::write(dir.path().join(CATALOG_FILE_NAME), contents).unwrap();
        CatalogService::new(dir.path())
    }

    fn sample_catalog(dir: &TempDir) -> CatalogService {
        write_catalog(
            dir,
            r#"[
                {"book_id": 1, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "language": "en", "year": 1925},
                {"book_id": 2, "title": "Moby Dick", "author": "Herman Melville", "language": "en", "year": 1851},
                {"book_id": 3, "title": "Der Prozess", "author": "Franz Kafka", "language": "de", "year": 1925}
            ]"#,
        )
    }

    #[test]
    fn test_query_matches_title_substring() {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        let books = catalog.search("gatsby", &SearchFilters::default()).unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
    }

    #[test]
    fn test_query_matches_author() {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        let books = catalog
            .search("melville", &SearchFilters::default())
            .unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 2);
    }

    #[test]
    fn test_any_term_qualifies() {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        let books = catalog
            .search("gatsby kafka", &SearchFilters::default())
            .unwrap();

        assert_eq!(books.len(), 2);
    }

    #[test]
    fn test_language_filter() {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        let filters = SearchFilters {
            language: Some("DE".to_string()),
            ..SearchFilters::default()
        };
        let books = catalog.search("1925 prozess kafka", &filters).unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 3);
    }

    #[test]
    fn test_author_filter_is_substring() {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        let filters = SearchFilters {
            author: Some("fitz".to_string()),
            ..SearchFilters::default()
        };
        let books = catalog.search("the", &filters).unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
    }

    #[test]
    fn test_year_filter() {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        let filters = SearchFilters {
            year: Some(1851),
            ..SearchFilters::default()
        };
        let books = catalog.search("dick prozess", &filters).unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = sample_catalog(&dir);

        let books = catalog
            .search("zanzibar", &SearchFilters::default())
            .unwrap();

        assert!(books.is_empty());
    }

    #[test]
    fn test_missing_catalog_is_error() {
        let dir = TempDir::new().unwrap();
        let catalog = CatalogService::new(dir.path());

        let result = catalog.search("gatsby", &SearchFilters::default());

        match result {
            Err(LibrankError::CatalogUnavailable(_)) => {}
            other => panic!("Expected CatalogUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_catalog_is_error() {
        let dir = TempDir::new().unwrap();
        let catalog = write_catalog(&dir, "this is not json");

        let result = catalog.search("gatsby", &SearchFilters::default());

        assert!(matches!(result, Err(LibrankError::CatalogUnavailable(_))));
    }
}
