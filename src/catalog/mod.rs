use crate::error::{ApiError, Result};
use crate::models::Book;
use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;
use std::{collections::HashMap, fs::File, path::Path};

#[derive(Debug, Deserialize)]
struct BookCsvRecord {
    #[serde(alias = "isbn")]
    isbn13: Option<String>,
    #[serde(alias = "Title")]
    title: Option<String>,
    #[serde(alias = "Authors", alias = "Author")]
    authors: Option<String>,
    #[serde(alias = "Description")]
    description: Option<String>,
    simple_category: Option<String>,
    #[serde(alias = "image_url")]
    thumbnail: Option<String>,
    joy: f64,
    anger: f64,
    surprise: f64,
    fear: f64,
    sadness: f64,
}

impl BookCsvRecord {
    fn into_book(self) -> Option<Book> {
        let isbn = self.isbn13?.trim().to_string();
        if isbn.is_empty() {
            return None;
        }

        let thumbnail = self
            .thumbnail
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Some(Book {
            large_thumbnail: Book::derive_large_thumbnail(thumbnail.as_deref()),
            isbn,
            title: self.title.unwrap_or_default().trim().to_string(),
            authors: self.authors.unwrap_or_default().trim().to_string(),
            description: self.description.unwrap_or_default().trim().to_string(),
            category: self
                .simple_category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            thumbnail,
            joy: self.joy,
            anger: self.anger,
            surprise: self.surprise,
            fear: self.fear,
            sadness: self.sadness,
        })
    }
}

/// In-memory book catalog keyed by isbn.
///
/// Loaded once at startup and read-only afterwards, so it is shared across
/// requests behind an `Arc` without locking.
#[derive(Debug)]
pub struct CatalogStore {
    books: Vec<Book>,
    by_isbn: HashMap<String, usize>,
}

impl CatalogStore {
    /// Load the catalog from a CSV file with emotion-score columns.
    ///
    /// A parse failure anywhere in the file is fatal; rows without an isbn
    /// are skipped since nothing can reference them.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            ApiError::CatalogLoad(format!("cannot open {}: {}", path.display(), e))
        })?;
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut books: Vec<Book> = Vec::new();
        let mut by_isbn: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0;

        for result in rdr.deserialize() {
            let record: BookCsvRecord = result?;
            let book = match record.into_book() {
                Some(book) => book,
                None => {
                    skipped += 1;
                    continue;
                }
            };

            if by_isbn.contains_key(&book.isbn) {
                warn!("Duplicate isbn {} in catalog, keeping first row", book.isbn);
                skipped += 1;
                continue;
            }

            by_isbn.insert(book.isbn.clone(), books.len());
            books.push(book);
        }

        if books.is_empty() {
            return Err(ApiError::CatalogLoad(format!(
                "{} contains no usable rows",
                path.display()
            )));
        }

        info!(
            "Loaded catalog from {}: {} books, {} rows skipped",
            path.display(),
            books.len(),
            skipped
        );

        Ok(Self { books, by_isbn })
    }

    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.by_isbn.get(isbn).map(|&i| &self.books[i])
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Distinct categories present in the catalog, sorted for dropdown use.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .books
            .iter()
            .filter_map(|b| b.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    #[cfg(test)]
    pub fn from_books(books: Vec<Book>) -> Self {
        let by_isbn = books
            .iter()
            .enumerate()
            .map(|(i, b)| (b.isbn.clone(), i))
            .collect();
        Self { books, by_isbn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "isbn13,title,authors,description,simple_category,thumbnail,joy,anger,surprise,fear,sadness";

    fn write_catalog(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn loads_rows_and_derives_large_thumbnail() {
        let file = write_catalog(&[
            "111,Dune,Frank Herbert,A desert planet,Fiction,http://x,0.9,0.1,0.2,0.3,0.1",
            "222,Cosmos,Carl Sagan,The universe,Nonfiction,,0.5,0.0,0.6,0.1,0.2",
        ]);

        let catalog = CatalogStore::load(file.path()).expect("load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("111").unwrap().large_thumbnail, "http://x&fife=w800");
        assert_eq!(catalog.get("222").unwrap().large_thumbnail, "cover-not-found.jpg");
        assert!(catalog.get("999").is_none());
    }

    #[test]
    fn duplicate_isbn_keeps_first_row() {
        let file = write_catalog(&[
            "111,First,A,d,Fiction,,0.1,0.1,0.1,0.1,0.1",
            "111,Second,B,d,Fiction,,0.2,0.2,0.2,0.2,0.2",
        ]);

        let catalog = CatalogStore::load(file.path()).expect("load");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("111").unwrap().title, "First");
    }

    #[test]
    fn malformed_emotion_score_is_fatal() {
        let file = write_catalog(&["111,Dune,A,d,Fiction,,not-a-number,0.1,0.1,0.1,0.1"]);

        let err = CatalogStore::load(file.path()).unwrap_err();
        assert!(matches!(err, ApiError::CatalogLoad(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = CatalogStore::load(Path::new("/nonexistent/books.csv")).unwrap_err();
        assert!(matches!(err, ApiError::CatalogLoad(_)));
    }

    #[test]
    fn categories_are_sorted_and_deduped() {
        let file = write_catalog(&[
            "111,A,a,d,Nonfiction,,0.1,0.1,0.1,0.1,0.1",
            "222,B,b,d,Fiction,,0.1,0.1,0.1,0.1,0.1",
            "333,C,c,d,Fiction,,0.1,0.1,0.1,0.1,0.1",
        ]);

        let catalog = CatalogStore::load(file.path()).expect("load");
        assert_eq!(catalog.categories(), vec!["Fiction", "Nonfiction"]);
    }
}
