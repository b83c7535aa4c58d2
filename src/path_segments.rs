use crate::compat::{String, ToString, Vec};
use crate::error::{Result, UrlError};
use crate::helpers::strings_match;

const PATH_SEPARATOR: char = '/';

/// Ordered `/`-delimited segments of a URL path.
///
/// `www.example.com/my/web/path` holds `["my", "web", "path"]`.
/// The root path `/` is a single empty segment; an empty list means no path.
///
/// Lookups by name compare case-insensitively unless stated otherwise and
/// always pick the first matching segment. Name-based edits report whether
/// they found their target; a miss leaves the segments untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSegments {
    segments: Vec<String>,
}

impl PathSegments {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Take segments as-is.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidArgument`] if a segment contains `/`.
    pub fn try_from_segments(segments: Vec<String>) -> Result<Self> {
        if let Some(bad) = segments.iter().find(|s| s.contains(PATH_SEPARATOR)) {
            return Err(UrlError::invalid_argument("path", bad.as_str()));
        }
        Ok(Self { segments })
    }

    /// Trim `/` from both ends of `path` and split on `/`.
    /// `"/my/web/path/"` gives `["my", "web", "path"]`, `"/"` gives `[""]`.
    pub fn from_trimmed(path: &str) -> Self {
        Self::split(path.trim_matches(PATH_SEPARATOR))
    }

    /// Drop the single leading `/` of a URL path and split on `/`.
    /// A trailing slash survives as a trailing empty segment.
    pub(crate) fn from_url_path(path: &str) -> Self {
        Self::split(path.strip_prefix(PATH_SEPARATOR).unwrap_or(path))
    }

    fn split(path: &str) -> Self {
        Self {
            segments: path.split(PATH_SEPARATOR).map(ToString::to_string).collect(),
        }
    }

    /// Index of the first segment equal to `name`.
    pub fn find(&self, name: &str, case_sensitive: bool) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| strings_match(name, segment, case_sensitive))
    }

    /// Overwrite the first segment matching `name`.
    pub fn replace(&mut self, name: &str, replacement: &str) -> Option<usize> {
        let index = self.find(name, false)?;
        self.segments[index] = replacement.to_string();
        Some(index)
    }

    /// Insert `segment` right before the first segment matching `name`.
    /// Returns the index of the inserted segment.
    pub fn insert_before(&mut self, name: &str, segment: &str) -> Option<usize> {
        let index = self.find(name, false)?;
        self.segments.insert(index, segment.to_string());
        Some(index)
    }

    /// Insert `segment` right after the first segment matching `name`.
    /// Returns the index of the inserted segment.
    pub fn insert_after(&mut self, name: &str, segment: &str) -> Option<usize> {
        let index = self.find(name, false)? + 1;
        self.segments.insert(index, segment.to_string());
        Some(index)
    }

    /// Remove the first segment matching `name`, returning it.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        let index = self.find(name, false)?;
        Some(self.segments.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    /// `"/" + segments.join("/")` into buffer; nothing when there are no segments.
    pub fn serialize_into(&self, buffer: &mut String) {
        for segment in &self.segments {
            buffer.push(PATH_SEPARATOR);
            buffer.push_str(segment);
        }
    }
}

impl core::fmt::Display for PathSegments {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut path = String::new();
        self.serialize_into(&mut path);
        f.write_str(&path)
    }
}

impl PartialEq<[&str]> for PathSegments {
    fn eq(&self, other: &[&str]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl<const N: usize> PartialEq<[&str; N]> for PathSegments {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
