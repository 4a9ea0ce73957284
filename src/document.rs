use std::fmt;

use tracing::debug;

use crate::authors::Authors;
use crate::error::{Error, Result};
use crate::homepage::Homepage;
use crate::json::{parse_object, JsonSpec};
use crate::metadata::{Podspec, PodspecFields, Source};
use crate::script::ScriptSpec;

/// The two podspec formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `*.podspec.json`.
    Json,
    /// `*.podspec`, the Ruby DSL.
    Script,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Script => write!(f, "script"),
        }
    }
}

/// A podspec document whose format has been detected.
#[derive(Debug, Clone, PartialEq)]
pub enum Document<'a> {
    /// The input was a JSON object.
    Json(JsonSpec),
    /// Anything else, read as a Ruby podspec.
    Script(ScriptSpec<'a>),
}

impl<'a> Document<'a> {
    /// Detect the format of a raw podspec.
    ///
    /// The input must be UTF-8. If it parses as a JSON object it is a JSON
    /// podspec; if it is not valid JSON, or is JSON but not an object, it is
    /// treated as a Ruby podspec. No other heuristic is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use podspec_metadata::{Document, Format};
    ///
    /// let doc = Document::sniff(br#"{"name": "Foo"}"#).unwrap();
    /// assert_eq!(doc.format(), Format::Json);
    ///
    /// let doc = Document::sniff(b"spec.name = 'Foo'\n").unwrap();
    /// assert_eq!(doc.format(), Format::Script);
    /// ```
    pub fn sniff(raw: &'a [u8]) -> Result<Document<'a>> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| Error::MalformedDocument(format!("not UTF-8: {e}")))?;

        let document = match parse_object(text) {
            Ok(Some(data)) => Document::Json(JsonSpec::new(data)),
            Ok(None) => {
                debug!("podspec is JSON but not an object, reading as script");
                Document::Script(ScriptSpec::new(text))
            }
            Err(Error::Syntax(reason)) => {
                debug!(%reason, "podspec is not JSON, reading as script");
                Document::Script(ScriptSpec::new(text))
            }
            Err(e) => return Err(e),
        };
        debug!(format = %document.format(), "detected podspec format");
        Ok(document)
    }

    /// The detected format.
    pub fn format(&self) -> Format {
        match self {
            Document::Json(_) => Format::Json,
            Document::Script(_) => Format::Script,
        }
    }
}

impl PodspecFields for Document<'_> {
    fn name(&self) -> Result<String> {
        match self {
            Document::Json(spec) => spec.name(),
            Document::Script(spec) => spec.name(),
        }
    }

    fn version(&self) -> Result<String> {
        match self {
            Document::Json(spec) => spec.version(),
            Document::Script(spec) => spec.version(),
        }
    }

    fn authors(&self) -> Result<Authors> {
        match self {
            Document::Json(spec) => spec.authors(),
            Document::Script(spec) => spec.authors(),
        }
    }

    fn license(&self) -> Result<String> {
        match self {
            Document::Json(spec) => spec.license(),
            Document::Script(spec) => spec.license(),
        }
    }

    fn homepage(&self) -> Result<Homepage> {
        match self {
            Document::Json(spec) => spec.homepage(),
            Document::Script(spec) => spec.homepage(),
        }
    }

    fn source(&self) -> Result<Source> {
        match self {
            Document::Json(spec) => spec.source(),
            Document::Script(spec) => spec.source(),
        }
    }

    fn summary(&self) -> Result<String> {
        match self {
            Document::Json(spec) => spec.summary(),
            Document::Script(spec) => spec.summary(),
        }
    }
}

impl Podspec {
    /// Parse a podspec of either format into a `Podspec`.
    ///
    /// The format is detected with [`Document::sniff`]; the record is then
    /// built all-or-nothing, so the first field that cannot be read fails
    /// the whole parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use podspec_metadata::Podspec;
    ///
    /// let input = b"\
    /// Pod::Spec.new do |spec|
    ///   spec.name     = 'Foo'
    ///   spec.version  = '1.0.0'
    ///   spec.license  = 'MIT'
    ///   spec.homepage = 'https://example.com/foo'
    ///   spec.authors  = 'Jane Doe'
    ///   spec.summary  = 'Does foo things.'
    ///   spec.source   = { :git => 'https://example.com/foo.git', :tag => 'v1.0.0' }
    /// end
    /// ";
    /// let podspec = Podspec::parse(input).unwrap();
    /// assert_eq!(podspec.name, "Foo");
    /// assert_eq!(podspec.source["tag"], "v1.0.0");
    /// ```
    pub fn parse(raw: &[u8]) -> Result<Podspec> {
        Document::sniff(raw)?.to_podspec()
    }

    /// Parse a podspec known to be JSON.
    ///
    /// Unlike [`Podspec::parse`] there is no fallback: invalid JSON is an
    /// [`Error::Syntax`].
    pub fn from_json_str(text: &str) -> Result<Podspec> {
        text.parse::<JsonSpec>()?.to_podspec()
    }

    /// Parse a podspec known to be a Ruby script.
    pub fn from_script(text: &str) -> Result<Podspec> {
        ScriptSpec::new(text).to_podspec()
    }
}
