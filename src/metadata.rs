use std::collections::BTreeMap;

use crate::authors::Authors;
use crate::error::Result;
use crate::homepage::Homepage;

/// Pod source location: source kind (`git`, `tag`, `http`, ...) mapped to its value.
///
/// See [`source`](https://guides.cocoapods.org/syntax/podspec.html#source).
pub type Source = BTreeMap<String, String>;

/// Metadata for a single pod, as read from its podspec.
///
/// The record is the same whether the podspec was written as JSON or as a
/// Ruby script. All fields are mandatory: a podspec missing any of them is
/// rejected as a whole.
///
/// See the [CocoaPods specification reference](https://guides.cocoapods.org/syntax/podspec.html#specification).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Podspec {
    /// Pod name.
    pub name: String,

    /// Pod version, kept verbatim.
    pub version: String,

    /// Authors with optional emails.
    pub authors: Authors,

    /// License identifier or free text.
    pub license: String,

    /// Homepage, always an absolute URI.
    pub homepage: Homepage,

    /// Source location entries, kept verbatim.
    pub source: Source,

    /// Short description.
    pub summary: String,
}

/// Per-field access to a podspec document.
///
/// Every accessor is independent: a caller that needs only the version can
/// call [`PodspecFields::version`] without the other fields being read or
/// validated.
pub trait PodspecFields {
    /// Pod name.
    fn name(&self) -> Result<String>;

    /// Pod version.
    fn version(&self) -> Result<String>;

    /// Authors with optional emails.
    fn authors(&self) -> Result<Authors>;

    /// License.
    fn license(&self) -> Result<String>;

    /// Homepage URI.
    fn homepage(&self) -> Result<Homepage>;

    /// Source location entries.
    fn source(&self) -> Result<Source>;

    /// Short description.
    fn summary(&self) -> Result<String>;

    /// Read every field and build a [`Podspec`].
    ///
    /// Stops at the first field that fails.
    fn to_podspec(&self) -> Result<Podspec> {
        Ok(Podspec {
            name: self.name()?,
            version: self.version()?,
            authors: self.authors()?,
            license: self.license()?,
            homepage: self.homepage()?,
            source: self.source()?,
            summary: self.summary()?,
        })
    }
}
