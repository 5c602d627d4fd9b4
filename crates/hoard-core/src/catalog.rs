//! Book list files.
//!
//! A list is a JSON array of objects written with 4-space indentation and
//! non-ASCII text kept verbatim, so that a refresh only touches the lines of
//! the ratings that changed.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::book::BookRecord;
use crate::errors::CoreError;
use crate::link::canonical_link;
use crate::rating::RatingTable;

/// A book list loaded from disk.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub path: PathBuf,
    pub books: Vec<BookRecord>,
    trailing_newline: bool,
}

impl CatalogFile {
    /// Read and validate a book list.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read,
    /// [`CoreError::Json`] if it is not JSON, and [`CoreError::Validation`]
    /// if the top level is not an array of objects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| CoreError::Io {
            path: path.clone(),
            source,
        })?;
        let mut file = Self::parse(&text, &path)?;
        file.path = path;
        Ok(file)
    }

    /// Parse a book list from text. `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogFile::load`], minus I/O.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(text).map_err(|source| CoreError::Json {
            path: origin.to_path_buf(),
            source,
        })?;

        let Value::Array(entries) = value else {
            return Err(CoreError::Validation(format!(
                "{}: expected a JSON array of book objects",
                origin.display()
            )));
        };

        let books = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(map) => Ok(BookRecord::from_map(map)),
                other => Err(CoreError::Validation(format!(
                    "{}: entry {index} is {}, expected an object",
                    origin.display(),
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path: origin.to_path_buf(),
            books,
            trailing_newline: text.ends_with('\n'),
        })
    }

    /// Apply scraped ratings to every book whose canonical link has one.
    ///
    /// Returns the number of books whose stored rating changed.
    pub fn apply(&mut self, ratings: &RatingTable) -> usize {
        let mut changed = 0;
        for book in &mut self.books {
            let Some((_, url)) = book.rating_source() else {
                continue;
            };
            let Some(rating) = ratings.get(&canonical_link(url)) else {
                continue;
            };
            if book.apply_rating(rating) {
                changed += 1;
            }
        }
        tracing::debug!(path = %self.path.display(), changed, "applied ratings");
        changed
    }

    /// Serialize the list in the on-disk layout.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.books
            .serialize(&mut ser)
            .map_err(|source| CoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        // serde_json only ever writes valid UTF-8.
        let mut text = String::from_utf8_lossy(&buf).into_owned();
        if self.trailing_newline {
            text.push('\n');
        }
        Ok(text)
    }

    /// Write the list back to [`CatalogFile::path`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] or [`CoreError::Io`].
    pub fn save(&self) -> Result<(), CoreError> {
        let text = self.to_json_string()?;
        std::fs::write(&self.path, text).map_err(|source| CoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Rating;
    use pretty_assertions::assert_eq;

    const LIST: &str = r#"[
    {
        "title": "Drachenherz",
        "author": "Zoë Ålund",
        "url": "https://www.goodreads.com/book/show/7?ref=nav",
        "rating": "4.1",
        "r_count": "99"
    },
    {
        "title": "Scales",
        "url": null,
        "vendors": {
            "rr": {
                "url": "https://www.royalroad.com/fiction/3"
            }
        },
        "rating": "",
        "r_count": ""
    }
]"#;

    fn parse(text: &str) -> Result<CatalogFile, CoreError> {
        CatalogFile::parse(text, Path::new("books.json"))
    }

    #[test]
    fn serialization_matches_source_layout() {
        let file = parse(LIST).unwrap();
        assert_eq!(file.to_json_string().unwrap(), LIST);
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let text = format!("{LIST}\n");
        let file = parse(&text).unwrap();
        assert_eq!(file.to_json_string().unwrap(), text);
    }

    #[test]
    fn apply_matches_on_canonical_link() {
        let mut file = parse(LIST).unwrap();
        let mut ratings = RatingTable::new();
        ratings.insert(
            "https://www.goodreads.com/book/show/7".into(),
            Rating::new(4.1, 120),
        );
        ratings.insert(
            "https://www.royalroad.com/fiction/3".into(),
            Rating::new(4.5, 8),
        );

        assert_eq!(file.apply(&ratings), 2);
        assert_eq!(file.books[0].rating_count(), "120");
        assert_eq!(file.books[1].rating(), "4.5");

        // Applying the same table again changes nothing.
        assert_eq!(file.apply(&ratings), 0);
    }

    #[test]
    fn rejects_non_array_document() {
        let err = parse(r#"{"title": "x"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_non_object_entry() {
        let err = parse(r#"[{"title": "x"}, "oops"]"#).unwrap_err();
        match err {
            CoreError::Validation(message) => assert!(message.contains("entry 1 is a string")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse("[{").unwrap_err();
        assert!(matches!(err, CoreError::Json { .. }));
    }
}
