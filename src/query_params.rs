use crate::compat::{String, ToString, Vec};
use crate::error::{Result, UrlError};
use crate::percent_encode::{decode_form_component, encode_form_component_into};

/// Query parameters of a URL.
///
/// Keys are unique and keep the position of their first insertion; writing an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Pairs are split on `&`, then at the first `=`. A pair without `=` is a
    /// key with an empty value, empty pairs are skipped. A repeated key keeps
    /// its first position and takes the last value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (decode_form_component(key), decode_form_component(value)),
                None => (decode_form_component(pair), String::new()),
            };
            params.insert(key, value);
        }

        params
    }

    /// Build from pairs, rejecting a repeated key.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidArgument`] naming the first repeated key.
    pub fn try_from_pairs(pairs: Vec<(String, String)>) -> Result<Self> {
        for (i, (key, _)) in pairs.iter().enumerate() {
            if pairs[..i].iter().any(|(seen, _)| seen == key) {
                return Err(UrlError::invalid_argument("query", key.as_str()));
            }
        }
        Ok(Self { params: pairs })
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.params.iter().position(|(k, _)| k == key)
    }

    fn insert(&mut self, key: String, value: String) {
        match self.position(&key) {
            Some(index) => self.params[index].1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert `key`, or replace its value when `overwrite` is set.
    /// Returns whether the value was stored.
    pub fn set(&mut self, key: &str, value: &str, overwrite: bool) -> bool {
        match self.position(key) {
            Some(index) if overwrite => {
                self.params[index].1 = value.to_string();
                true
            }
            Some(_) => false,
            None => {
                self.params.push((key.to_string(), value.to_string()));
                true
            }
        }
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.position(key)?;
        Some(self.params.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Write the form-encoded query (without leading `?`) into buffer.
    pub fn serialize_into(&self, buffer: &mut String) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            encode_form_component_into(buffer, key);
            buffer.push('=');
            encode_form_component_into(buffer, value);
        }
    }

    /// Form-encoded query without leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        let mut result = String::new();
        self.serialize_into(&mut result);
        result
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
