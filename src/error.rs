use crate::compat::String;

/// Errors raised by the fallible setters of [`UrlValue`](crate::UrlValue)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// A setter received a value that is not a proper segment list or mapping.
    ///
    /// `field` names the component (`"path"` or `"query"`), `value` the
    /// offending input.
    InvalidArgument { field: &'static str, value: String },
}

impl UrlError {
    pub(crate) fn invalid_argument(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            value: value.into(),
        }
    }

    /// Name of the component whose setter rejected its argument
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => field,
        }
    }
}

impl core::fmt::Display for UrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument { field, value } => {
                write!(f, "Invalid argument for {field}: {value:?}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UrlError {}

/// Result type for fallible `UrlValue` operations
pub type Result<T> = core::result::Result<T, UrlError>;
