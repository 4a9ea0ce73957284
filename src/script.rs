use tracing::trace;
use winnow::combinator::separated_pair;
use winnow::prelude::*;
use winnow::token::{rest, take_till, take_until, take_while};

use crate::authors::{Authors, AuthorsShape};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::homepage::Homepage;
use crate::metadata::{PodspecFields, Source};

/// A podspec written in the Ruby DSL (`*.podspec`).
///
/// There is no Ruby evaluation here. Each field is recovered by locating its
/// assignment marker (`.name`, `.authors`, ...) and slicing the text up to a
/// field specific boundary:
///
/// - plain string fields run to the end of the marker's line;
/// - `authors` and `source` hashes run to the next closing `}`.
///
/// Only one level of `{ ... }` is understood; string interpolation,
/// conditionals and nested hashes are not.
///
/// # Examples
///
/// ```
/// use podspec_metadata::{PodspecFields, ScriptSpec};
///
/// let spec = ScriptSpec::new("spec.name = 'Foo'\nspec.version = '1.0'\n");
/// assert_eq!(spec.name().unwrap(), "Foo");
/// assert_eq!(spec.version().unwrap(), "1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSpec<'a> {
    text: &'a str,
}

impl<'a> ScriptSpec<'a> {
    /// Wrap the text of a Ruby podspec.
    pub fn new(text: &'a str) -> Self {
        ScriptSpec { text }
    }

    /// Byte offset right after the first assignment marker of `field`.
    ///
    /// A marker followed by an identifier character (as in `.source_files`)
    /// belongs to another attribute and is skipped.
    fn locate(&self, field: Field) -> Result<usize> {
        let marker = field.marker();
        let start = self
            .text
            .match_indices(marker)
            .map(|(at, _)| at + marker.len())
            .find(|&end| !self.text[end..].starts_with(is_ident_char))
            .ok_or(Error::MissingField(field))?;
        trace!(%field, offset = start, "located podspec marker");
        Ok(start)
    }

    /// Text from `start` to the next line break, or to the end of input.
    fn line_from(&self, start: usize) -> &'a str {
        let rest = &self.text[start..];
        rest.find('\n').map_or(rest, |end| &rest[..end])
    }

    /// Text from `start` to the next closing brace.
    fn span_to_brace(&self, field: Field, start: usize) -> Result<&'a str> {
        let rest = &self.text[start..];
        rest.find('}')
            .map(|end| &rest[..end])
            .ok_or_else(|| Error::invalid(field, "unterminated `{`"))
    }

    fn string(&self, field: Field) -> Result<String> {
        let start = self.locate(field)?;
        let value = clean_value(self.line_from(start));
        if value.is_empty() {
            return Err(Error::invalid(field, "empty value"));
        }
        Ok(value.to_string())
    }

    /// Classify the `authors` assignment.
    ///
    /// The line holding the marker decides the shape: a `{` means a hash of
    /// names to emails, otherwise a `,` means a list of names, otherwise the
    /// value is a single name. The `{` check comes first since hash entries
    /// are comma separated too.
    pub fn authors_shape(&self) -> Result<AuthorsShape> {
        let start = self.locate(Field::Authors)?;
        let line = self.line_from(start);

        if line.contains('{') {
            let span = self.span_to_brace(Field::Authors, start)?;
            span.split(',')
                .filter(|chunk| !clean_token(chunk).is_empty())
                .map(|chunk| {
                    let (name, email) = author_entry.parse(chunk).map_err(|_| {
                        Error::invalid(
                            Field::Authors,
                            format!("expected `name => email`, found {:?}", chunk.trim()),
                        )
                    })?;
                    Ok((clean_token(name).to_string(), clean_token(email).to_string()))
                })
                .collect::<Result<Vec<_>>>()
                .map(AuthorsShape::Mapping)
        } else if line.contains(',') {
            Ok(AuthorsShape::List(
                clean_value(line)
                    .split(',')
                    .map(clean_token)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            ))
        } else {
            Ok(AuthorsShape::Single(clean_value(line).to_string()))
        }
    }
}

impl PodspecFields for ScriptSpec<'_> {
    fn name(&self) -> Result<String> {
        self.string(Field::Name)
    }

    fn version(&self) -> Result<String> {
        self.string(Field::Version)
    }

    fn authors(&self) -> Result<Authors> {
        self.authors_shape()?.into_authors()
    }

    fn license(&self) -> Result<String> {
        self.string(Field::License)
    }

    fn homepage(&self) -> Result<Homepage> {
        self.string(Field::Homepage)?.parse()
    }

    /// Read the `source` hash.
    ///
    /// Every `=`, brace, quote and whitespace character in the hash is
    /// dropped, leaving `:git>url,:tag>ref`, which is then split into
    /// entries on `,` and into kind and value on the first `>`.
    fn source(&self) -> Result<Source> {
        let start = self.locate(Field::Source)?;
        let compact: String = self
            .span_to_brace(Field::Source, start)?
            .chars()
            .filter(|&c| !(c == '=' || c == '{' || c == '}' || is_quote(c) || c.is_whitespace()))
            .collect();

        compact
            .split(',')
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| {
                let (kind, value) = source_entry.parse(chunk).map_err(|_| {
                    Error::invalid(
                        Field::Source,
                        format!("expected `:kind => value`, found {chunk:?}"),
                    )
                })?;
                if kind.is_empty() {
                    return Err(Error::invalid(Field::Source, "empty source kind"));
                }
                Ok((kind.to_string(), value.to_string()))
            })
            .collect()
    }

    /// Read the `summary`.
    ///
    /// The value ends at the first line break, so a multi-line summary is
    /// truncated to its first line.
    fn summary(&self) -> Result<String> {
        self.string(Field::Summary)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Strip the `= '` before a value and the `'` after it.
fn clean_value(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c.is_whitespace() || c == '=' || is_quote(c))
        .trim_end_matches(|c: char| c.is_whitespace() || is_quote(c))
}

/// Strip assignment, brace, quote and whitespace characters around a hash
/// or list item.
fn clean_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '=' | '{' | '}') || is_quote(c))
}

// Winnow parsers

/// `lhs => rhs`, split on the first arrow.
fn author_entry<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    separated_pair(take_until(0.., "=>"), "=>", rest).parse_next(input)
}

/// `:kind>value` once the hash has been compacted, split on the first `>`.
fn source_entry<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    separated_pair(
        (take_while(0.., ':'), take_till(0.., '>')).map(|(_, kind)| kind),
        '>',
        rest,
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_SPEC: &str = "\
Pod::Spec.new do |s|
  s.name         = 'Reachability'
  s.version      = '3.1.0'
  s.license      = 'BSD'
  s.homepage     = 'https://github.com/tonymillion/Reachability'
  s.authors      = { 'Tony Million' => 'tonymillion@gmail.com' }
  s.summary      = 'ARC and GCD Compatible Reachability Class for iOS and macOS.'
  s.source       = { :git => 'https://github.com/tonymillion/Reachability.git', :tag => 'v3.1.0' }
  s.source_files = 'Reachability.{h,m}'
  s.framework    = 'SystemConfiguration'
  s.requires_arc = true
end
";

    fn example() -> ScriptSpec<'static> {
        ScriptSpec::new(EXAMPLE_SPEC)
    }

    #[test]
    fn reads_name() {
        assert_eq!(example().name().unwrap(), "Reachability");
    }

    #[test]
    fn reads_summary() {
        assert_eq!(
            example().summary().unwrap(),
            "ARC and GCD Compatible Reachability Class for iOS and macOS."
        );
    }

    #[test]
    fn reads_license() {
        assert_eq!(example().license().unwrap(), "BSD");
    }

    #[test]
    fn reads_version() {
        assert_eq!(example().version().unwrap(), "3.1.0");
    }

    #[test]
    fn reads_homepage() {
        assert_eq!(
            example().homepage().unwrap().as_str(),
            "https://github.com/tonymillion/Reachability"
        );
    }

    #[test]
    fn reads_authors() {
        let authors = example().authors().unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(
            authors["Tony Million"],
            Some("tonymillion@gmail.com".to_string())
        );
    }

    #[test]
    fn reads_several_authors_and_emails() {
        let spec = ScriptSpec::new(
            "spec.authors = { 'Darth Vader' => 'darthvader@darkside.com',\n                 'Wookiee'     => 'wookiee@aggrrttaaggrrt.com' }",
        );
        let authors = spec.authors().unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(
            authors["Darth Vader"],
            Some("darthvader@darkside.com".to_string())
        );
        assert_eq!(
            authors["Wookiee"],
            Some("wookiee@aggrrttaaggrrt.com".to_string())
        );
    }

    #[test]
    fn reads_single_author() {
        let spec = ScriptSpec::new(
            "spec.name = 'Reachability'\nspec.authors = 'Darth Vader'\nspec.version = '0.0.1'",
        );
        assert_eq!(
            spec.authors_shape().unwrap(),
            AuthorsShape::Single("Darth Vader".to_string())
        );
        let authors = spec.authors().unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors["Darth Vader"], None);
    }

    #[test]
    fn reads_authors_list() {
        let spec = ScriptSpec::new(
            "spec.name = 'Reachability'\nspec.authors = 'Darth Vader', 'Wookiee'\nspec.version = '0.0.1'",
        );
        assert_eq!(
            spec.authors_shape().unwrap(),
            AuthorsShape::List(vec!["Darth Vader".to_string(), "Wookiee".to_string()])
        );
        let authors = spec.authors().unwrap();
        assert_eq!(authors["Darth Vader"], None);
        assert_eq!(authors["Wookiee"], None);
    }

    #[test]
    fn authors_mapping_trailing_comma() {
        let spec = ScriptSpec::new("spec.authors = { 'A' => 'a@x.com', 'B' => 'b@y.com', }\n");
        let authors = spec.authors().unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors["B"], Some("b@y.com".to_string()));
    }

    #[test]
    fn authors_mapping_without_arrow() {
        let spec = ScriptSpec::new("spec.authors = { 'A' => 'a@x.com', 'B' }\n");
        let err = spec.authors().unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: Field::Authors, .. }));
    }

    #[test]
    fn authors_mapping_unterminated() {
        let spec = ScriptSpec::new("spec.authors = { 'A' => 'a@x.com'\n");
        let err = spec.authors().unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: Field::Authors, .. }));
    }

    #[test]
    fn reads_source() {
        let source = example().source().unwrap();
        assert_eq!(source.len(), 2);
        assert_eq!(
            source["git"],
            "https://github.com/tonymillion/Reachability.git"
        );
        assert_eq!(source["tag"], "v3.1.0");
    }

    #[test]
    fn reads_source_with_param() {
        let spec = ScriptSpec::new(
            "spec.source = { :git => 'https://github.com/AFNetworking/AFNetworking.git',\n                :tag => spec.version.to_s }",
        );
        let source = spec.source().unwrap();
        assert_eq!(
            source["git"],
            "https://github.com/AFNetworking/AFNetworking.git"
        );
        assert_eq!(source["tag"], "spec.version.to_s");
    }

    #[test]
    fn source_without_separator() {
        let spec = ScriptSpec::new("spec.source = { 'https://x/y.git' }\n");
        let err = spec.source().unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: Field::Source, .. }));
    }

    #[test]
    fn source_empty_kind() {
        let spec = ScriptSpec::new("spec.source = { => 'https://x/y.git' }\n");
        let err = spec.source().unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: Field::Source, .. }));
    }

    #[test]
    fn source_skips_source_files() {
        let spec = ScriptSpec::new(
            "s.source_files = 'Foo/*.{h,m}'\ns.source = { :http => 'https://x/foo.zip' }\n",
        );
        let source = spec.source().unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source["http"], "https://x/foo.zip");
    }

    #[test]
    fn missing_name() {
        let spec = ScriptSpec::new("spec.version = '1.0'\n");
        assert_eq!(spec.name().unwrap_err(), Error::MissingField(Field::Name));
    }

    #[test]
    fn empty_value() {
        let spec = ScriptSpec::new("spec.name = ''\n");
        assert!(matches!(
            spec.name().unwrap_err(),
            Error::InvalidField { field: Field::Name, .. }
        ));
    }

    #[test]
    fn double_quotes_and_crlf() {
        let spec = ScriptSpec::new("spec.version = \"2.0\"\r\nspec.name = \"Foo\"");
        assert_eq!(spec.version().unwrap(), "2.0");
        assert_eq!(spec.name().unwrap(), "Foo");
    }

    #[test]
    fn homepage_not_a_url() {
        let spec = ScriptSpec::new("spec.homepage = 'not a url'\n");
        assert!(matches!(
            spec.homepage().unwrap_err(),
            Error::InvalidField { field: Field::Homepage, .. }
        ));
    }

    #[test]
    fn homepage_needing_repair() {
        let spec = ScriptSpec::new("spec.homepage = 'https://github.com/foo bar baz'\n");
        assert!(matches!(
            spec.homepage().unwrap_err(),
            Error::InvalidField { field: Field::Homepage, .. }
        ));
        let spec = ScriptSpec::new("spec.homepage = 'HTTPS://Example.COM/a\\b'\n");
        assert!(spec.homepage().is_err());
    }

    #[test]
    fn homepage_kept_as_written() {
        let spec = ScriptSpec::new("spec.homepage = 'https://example.com'\n");
        assert_eq!(spec.homepage().unwrap().as_str(), "https://example.com");
    }

    #[test]
    fn summary_is_first_line() {
        let spec = ScriptSpec::new("spec.summary = 'First line\nsecond line'\n");
        assert_eq!(spec.summary().unwrap(), "First line");
    }

    #[test]
    fn to_podspec() {
        let podspec = example().to_podspec().unwrap();
        assert_eq!(podspec.name, "Reachability");
        assert_eq!(podspec.version, "3.1.0");
        assert_eq!(podspec.source["tag"], "v3.1.0");
    }

    #[test]
    fn clean_helpers() {
        assert_eq!(clean_value("      = 'BSD'"), "BSD");
        assert_eq!(clean_value(" = \"x\"  "), "x");
        assert_eq!(clean_token(" = { 'Darth Vader' "), "Darth Vader");
    }

    #[test]
    fn entry_parsers() {
        assert_eq!(
            author_entry.parse(" 'A' => 'a@x.com'").unwrap(),
            (" 'A' ", " 'a@x.com'")
        );
        assert_eq!(
            source_entry.parse(":git>https://x/y.git").unwrap(),
            ("git", "https://x/y.git")
        );
        assert!(source_entry.parse("git").is_err());
    }
}
