use crate::compat::{Cow, String, ToString};
use crate::error::Result;
use crate::helpers::clean_tabs_and_newlines;
use crate::parser::split_url;
use crate::path_segments::PathSegments;
use crate::query_params::QueryParams;
use crate::redirect::Redirect;
use crate::types::{PathInput, QueryInput};

const SCHEME_SEPARATOR: &str = "://";
const WWW_PREFIX: &str = "www.";

/// A URL split into editable components.
///
/// Every setter returns `&mut Self` so edits chain; [`build_url`](Self::build_url)
/// reassembles the current state into a string without changing it.
///
/// ```
/// use urlvalue::UrlValue;
///
/// let mut url = UrlValue::parse("http://test.example.com/test1/test2");
/// url.set_force_www(true)
///     .set_scheme("https")
///     .insert_path_after("test1", "test3")
///     .set_query_param("page", "2", true);
///
/// assert_eq!(
///     url.build_url(),
///     "https://www.test.example.com/test1/test3/test2?page=2"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlValue {
    scheme: Option<String>,
    username: Option<String>,
    password: Option<String>,
    host: String,
    force_www: bool,
    port: Option<String>,
    path: PathSegments,
    query: QueryParams,
    fragment: Option<String>,
}

/// Treat an empty component like an absent one
fn non_empty(component: Option<&String>) -> Option<&str> {
    component.map(String::as_str).filter(|s| !s.is_empty())
}

impl UrlValue {
    /// Create a URL with every component unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL string.
    ///
    /// `[scheme:][//[user[:pass]@]host[:port]][/path][?query][#fragment]`
    ///
    /// Unrecognized pieces fall into the path; empty input gives an empty URL.
    pub fn parse(input: &str) -> Self {
        let cleaned = clean_tabs_and_newlines(input);
        let raw = split_url(&cleaned);
        let mut url = Self::new();
        if raw.is_empty() {
            return url;
        }

        if let Some(scheme) = raw.scheme {
            url.set_scheme(scheme);
        }
        if let Some(host) = raw.host {
            url.set_domain(host);
        }
        if let Some(username) = raw.username {
            url.set_username(username);
        }
        if let Some(password) = raw.password {
            url.set_password(password);
        }
        if let Some(path) = raw.path {
            url.path = PathSegments::from_url_path(path);
        }
        if let Some(query) = raw.query {
            url.query = QueryParams::parse(query);
        }
        if let Some(fragment) = raw.fragment {
            url.set_fragment(fragment);
        }
        if let Some(port) = raw.port {
            url.set_port(port);
        }

        tracing::trace!(input, components = ?raw, "parsed url");
        url
    }

    // Getters

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The stored host, without any forced `www.`
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The host as emitted: prefixed with `www.` when forced and the host
    /// does not already start with `www`.
    pub fn domain(&self) -> Cow<'_, str> {
        if self.force_www && !self.host.starts_with("www") {
            let mut domain = String::with_capacity(WWW_PREFIX.len() + self.host.len());
            domain.push_str(WWW_PREFIX);
            domain.push_str(&self.host);
            Cow::Owned(domain)
        } else {
            Cow::Borrowed(&self.host)
        }
    }

    pub fn force_www(&self) -> bool {
        self.force_www
    }

    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    pub fn path(&self) -> &PathSegments {
        &self.path
    }

    /// Mutable access to the path for edits that report whether they matched
    pub fn path_mut(&mut self) -> &mut PathSegments {
        &mut self.path
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    // Setters

    pub fn set_scheme(&mut self, scheme: impl ToString) -> &mut Self {
        self.scheme = Some(scheme.to_string());
        self
    }

    pub fn set_username(&mut self, username: impl ToString) -> &mut Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn set_password(&mut self, password: impl ToString) -> &mut Self {
        self.password = Some(password.to_string());
        self
    }

    pub fn set_domain(&mut self, domain: impl ToString) -> &mut Self {
        self.host = domain.to_string();
        self
    }

    pub fn set_force_www(&mut self, force_www: bool) -> &mut Self {
        self.force_www = force_www;
        self
    }

    pub fn set_port(&mut self, port: impl ToString) -> &mut Self {
        self.port = Some(port.to_string());
        self
    }

    /// Replace the whole path.
    ///
    /// A raw string is trimmed of `/` on both ends and split on `/`;
    /// segments are taken as given.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidArgument`](crate::UrlError::InvalidArgument)
    /// if a given segment contains `/`. The path is left unchanged.
    pub fn set_path(&mut self, path: impl Into<PathInput>) -> Result<&mut Self> {
        let segments = match path.into() {
            PathInput::Raw(raw) => PathSegments::from_trimmed(&raw),
            PathInput::Segments(segments) => PathSegments::try_from_segments(segments)
                .inspect_err(|err| tracing::debug!(%err, "rejected path"))?,
        };
        self.path = segments;
        Ok(self)
    }

    /// Replace every query parameter.
    ///
    /// A raw string is parsed as `k=v&k2=v2`, a repeated key keeping its last
    /// value; pairs are taken as given.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidArgument`](crate::UrlError::InvalidArgument)
    /// if given pairs repeat a key. The query is left unchanged.
    pub fn set_query_params(&mut self, params: impl Into<QueryInput>) -> Result<&mut Self> {
        let params = match params.into() {
            QueryInput::Raw(raw) => QueryParams::parse(&raw),
            QueryInput::Pairs(pairs) => QueryParams::try_from_pairs(pairs)
                .inspect_err(|err| tracing::debug!(%err, "rejected query parameters"))?,
            QueryInput::Params(params) => params,
        };
        self.query = params;
        Ok(self)
    }

    /// Add a query parameter; an existing key is only replaced when `overwrite` is set.
    pub fn set_query_param(&mut self, key: &str, value: &str, overwrite: bool) -> &mut Self {
        if !self.query.set(key, value, overwrite) {
            tracing::debug!(key, "query parameter kept, overwrite disabled");
        }
        self
    }

    pub fn remove_query_param(&mut self, key: &str) -> &mut Self {
        self.query.remove(key);
        self
    }

    pub fn set_fragment(&mut self, fragment: impl ToString) -> &mut Self {
        self.fragment = Some(fragment.to_string());
        self
    }

    // Path edits

    /// Index of the first path segment equal to `name`
    pub fn find_path(&self, name: &str, case_sensitive: bool) -> Option<usize> {
        self.path.find(name, case_sensitive)
    }

    /// Replace the first segment matching `name`; no-op if there is none
    pub fn replace_path(&mut self, name: &str, replacement: &str) -> &mut Self {
        if self.path.replace(name, replacement).is_none() {
            tracing::debug!(name, "replace_path: segment not found");
        }
        self
    }

    /// Insert `segment` before the first segment matching `name`; no-op if there is none
    pub fn insert_path_before(&mut self, name: &str, segment: &str) -> &mut Self {
        if self.path.insert_before(name, segment).is_none() {
            tracing::debug!(name, "insert_path_before: segment not found");
        }
        self
    }

    /// Insert `segment` after the first segment matching `name`; no-op if there is none
    pub fn insert_path_after(&mut self, name: &str, segment: &str) -> &mut Self {
        if self.path.insert_after(name, segment).is_none() {
            tracing::debug!(name, "insert_path_after: segment not found");
        }
        self
    }

    /// Remove the first segment matching `name`; no-op if there is none
    pub fn delete_path(&mut self, name: &str) -> &mut Self {
        if self.path.delete(name).is_none() {
            tracing::debug!(name, "delete_path: segment not found");
        }
        self
    }

    // Serialization

    fn credentials(&self) -> Option<(&str, &str)> {
        Some((non_empty(self.username.as_ref())?, non_empty(self.password.as_ref())?))
    }

    /// Assemble the URL from its current components.
    ///
    /// Separators of empty components are left out. Without a scheme, an
    /// authority is introduced by `//` alone.
    pub fn build_url(&self) -> String {
        let domain = self.domain();
        let credentials = self.credentials();
        let port = non_empty(self.port.as_ref());

        let mut url = String::with_capacity(64);

        if let Some(scheme) = non_empty(self.scheme.as_ref()) {
            url.push_str(scheme);
            url.push_str(SCHEME_SEPARATOR);
        } else if !domain.is_empty() || credentials.is_some() || port.is_some() {
            url.push_str("//");
        }

        if let Some((username, password)) = credentials {
            url.push_str(username);
            url.push(':');
            url.push_str(password);
            url.push('@');
        }

        url.push_str(&domain);

        if let Some(port) = port {
            url.push(':');
            url.push_str(port);
        }

        self.path.serialize_into(&mut url);

        if !self.query.is_empty() {
            url.push('?');
            self.query.serialize_into(&mut url);
        }

        if let Some(fragment) = non_empty(self.fragment.as_ref()) {
            url.push('#');
            url.push_str(fragment);
        }

        url
    }

    /// Describe a redirect to the current URL. `status` is passed through untouched.
    pub fn redirect(&self, status: u16) -> Redirect {
        Redirect::new(status, self.build_url())
    }
}

impl core::str::FromStr for UrlValue {
    type Err = crate::error::UrlError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse(s))
    }
}

impl core::fmt::Display for UrlValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.build_url())
    }
}
