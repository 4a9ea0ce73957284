use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::field::Field;

/// Pod authors: author name mapped to an optional email address.
///
/// Names are never empty and an author without an email maps to `None`,
/// never to an empty string.
pub type Authors = BTreeMap<String, Option<String>>;

/// The shapes the `authors` attribute can take in a podspec.
///
/// Both the JSON and the script readers classify the raw value into one of
/// these, and [`AuthorsShape::into_authors`] turns it into the uniform
/// [`Authors`] map.
///
/// See [`authors`](https://guides.cocoapods.org/syntax/podspec.html#authors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorsShape {
    /// A single author name: `spec.authors = 'Darth Vader'`.
    Single(String),
    /// A list of author names: `spec.authors = 'Darth Vader', 'Wookiee'`.
    List(Vec<String>),
    /// Author names with emails: `spec.authors = { 'Darth Vader' => 'dv@darkside.com' }`.
    Mapping(Vec<(String, String)>),
}

impl AuthorsShape {
    /// Resolve the shape into an [`Authors`] map.
    ///
    /// Names and emails are trimmed, entries with an empty name are dropped
    /// and empty emails become `None`. An empty list or mapping gives an
    /// empty map, but a single author must have a non-empty name.
    ///
    /// # Examples
    ///
    /// ```
    /// use podspec_metadata::AuthorsShape;
    ///
    /// let authors = AuthorsShape::Mapping(vec![
    ///     ("Darth Vader".to_string(), "dv@darkside.com".to_string()),
    /// ])
    /// .into_authors()
    /// .unwrap();
    /// assert_eq!(authors["Darth Vader"].as_deref(), Some("dv@darkside.com"));
    /// ```
    pub fn into_authors(self) -> Result<Authors> {
        if let AuthorsShape::Single(name) = &self {
            if name.trim().is_empty() {
                return Err(Error::invalid(Field::Authors, "empty author name"));
            }
        }

        let entries: Vec<(String, Option<String>)> = match self {
            AuthorsShape::Single(name) => vec![(name, None)],
            AuthorsShape::List(names) => names.into_iter().map(|name| (name, None)).collect(),
            AuthorsShape::Mapping(pairs) => pairs
                .into_iter()
                .map(|(name, email)| (name, Some(email)))
                .collect(),
        };

        Ok(entries
            .into_iter()
            .filter_map(|(name, email)| {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let email = email
                    .map(|e| e.trim().to_string())
                    .filter(|e| !e.is_empty());
                Some((name.to_string(), email))
            })
            .collect())
    }
}
