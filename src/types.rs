use crate::compat::{String, ToString, Vec};
use crate::query_params::QueryParams;

/// Argument of [`UrlValue::set_path`](crate::UrlValue::set_path)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// Segments taken as-is, each one must be free of `/`
    Segments(Vec<String>),
    /// A path like `/my/web/path`, trimmed of `/` on both ends and split on `/`
    Raw(String),
}

impl From<&str> for PathInput {
    fn from(path: &str) -> Self {
        Self::Raw(path.to_string())
    }
}

impl From<String> for PathInput {
    fn from(path: String) -> Self {
        Self::Raw(path)
    }
}

impl From<Vec<String>> for PathInput {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

impl From<Vec<&str>> for PathInput {
    fn from(segments: Vec<&str>) -> Self {
        Self::Segments(segments.into_iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathInput {
    fn from(segments: [&str; N]) -> Self {
        Self::Segments(segments.iter().map(ToString::to_string).collect())
    }
}

/// Argument of [`UrlValue::set_query_params`](crate::UrlValue::set_query_params)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    /// Key/value pairs taken in order, keys must be unique
    Pairs(Vec<(String, String)>),
    /// A query string like `a=1&b=2` (leading `?` allowed)
    Raw(String),
    /// An already validated mapping
    Params(QueryParams),
}

impl From<&str> for QueryInput {
    fn from(query: &str) -> Self {
        Self::Raw(query.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(query: String) -> Self {
        Self::Raw(query)
    }
}

impl From<Vec<(String, String)>> for QueryInput {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Pairs(pairs)
    }
}

impl From<Vec<(&str, &str)>> for QueryInput {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for QueryInput {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl From<QueryParams> for QueryInput {
    fn from(params: QueryParams) -> Self {
        Self::Params(params)
    }
}
