//! CocoaPods [podspec] metadata reader.
//!
//! This crate extracts the registry-relevant metadata of a pod (name,
//! version, authors, license, homepage, source and summary) from its
//! podspec, regardless of the format it was written in.
//!
//! [podspec]: https://guides.cocoapods.org/syntax/podspec.html
//!
//! # Overview
//!
//! Podspecs come in two formats:
//!
//! - **JSON** (`*.podspec.json`), read by plain key lookup.
//! - **Ruby** (`*.podspec`), a DSL that needs a Ruby interpreter to evaluate.
//!   This crate does not evaluate it; it scans the text for the assignment
//!   markers of each field (`spec.name = ...`) and slices out the values.
//!   Only the common literal shapes are understood.
//!
//! [`Podspec::parse`] detects the format (a document that parses as a JSON
//! object is JSON, anything else is Ruby) and returns a uniform [`Podspec`].
//!
//! # Examples
//!
//! ```
//! use podspec_metadata::Podspec;
//!
//! let input = br#"{
//!   "name": "BatteryHandlerSpec",
//!   "version": "0.0.2",
//!   "summary": "A summary to help",
//!   "homepage": "https://github.com/MohamedJaffer-24/BatteryHandler",
//!   "license": "MIT",
//!   "authors": ["Ann", "Jacob"],
//!   "source": { "git": "https://github.com/MohamedJaffer-24/BatteryHandler.git", "tag": "0.0.2" }
//! }"#;
//! let podspec = Podspec::parse(input).unwrap();
//! assert_eq!(podspec.version, "0.0.2");
//! assert_eq!(podspec.authors["Ann"], None);
//! ```

mod authors;
mod document;
mod error;
mod field;
mod homepage;
mod json;
mod metadata;
mod script;

// Re-export public types
pub use authors::{Authors, AuthorsShape};
pub use document::{Document, Format};
pub use error::{Error, Result};
pub use field::Field;
pub use homepage::Homepage;
pub use json::JsonSpec;
pub use metadata::{Podspec, PodspecFields, Source};
pub use script::ScriptSpec;
pub use url::Url;
