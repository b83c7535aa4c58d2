#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod helpers;
mod parser;
mod path_segments;
mod percent_encode;
mod query_params;
mod redirect;
mod types;
mod url_components;
mod url_value;

// Public API
pub use error::{Result, UrlError};
pub use path_segments::PathSegments;
pub use query_params::QueryParams;
pub use redirect::Redirect;
pub use types::{PathInput, QueryInput};
pub use url_value::UrlValue;
