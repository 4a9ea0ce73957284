use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the metadata fields extracted from a podspec.
///
/// See the [CocoaPods specification reference](https://guides.cocoapods.org/syntax/podspec.html#specification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Pod name (`name`).
    Name,
    /// Pod version (`version`).
    Version,
    /// Authors, optionally with emails (`authors`).
    Authors,
    /// License identifier or free text (`license`).
    License,
    /// Homepage URL (`homepage`).
    Homepage,
    /// Source location map (`source`).
    Source,
    /// Short description (`summary`).
    Summary,
}

impl Field {
    /// All fields, in the order they are extracted.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Version,
        Field::Authors,
        Field::License,
        Field::Homepage,
        Field::Source,
        Field::Summary,
    ];

    /// Key of the field in a JSON podspec.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Version => "version",
            Field::Authors => "authors",
            Field::License => "license",
            Field::Homepage => "homepage",
            Field::Source => "source",
            Field::Summary => "summary",
        }
    }

    /// Assignment marker of the field in a script podspec.
    ///
    /// ```
    /// use podspec_metadata::Field;
    ///
    /// assert_eq!(Field::Authors.marker(), ".authors");
    /// ```
    pub fn marker(self) -> &'static str {
        match self {
            Field::Name => ".name",
            Field::Version => ".version",
            Field::Authors => ".authors",
            Field::License => ".license",
            Field::Homepage => ".homepage",
            Field::Source => ".source",
            Field::Summary => ".summary",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}
