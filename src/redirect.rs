use crate::compat::{String, ToString};

/// A redirect to a built URL, ready for a transport layer to apply.
///
/// The status code is carried as given and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    status: u16,
    location: String,
}

impl Redirect {
    /// Moved Permanently
    pub const DEFAULT_STATUS: u16 = 301;

    pub fn new(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            location: location.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn into_parts(self) -> (u16, String) {
        (self.status, self.location)
    }

    /// `Status` and `Location` response headers
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Status", self.status.to_string()),
            ("Location", self.location.clone()),
        ]
    }

    /// Client-side fallback for when response headers were already sent
    pub fn script(&self) -> String {
        let mut script = String::from("<script type=\"text/javascript\">window.location=\"");
        push_js_string_escaped(&mut script, &self.location);
        script.push_str("\";</script>");
        script
    }
}

/// Escape for a double-quoted JavaScript string inside an HTML `<script>`.
fn push_js_string_escaped(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());
    for c in input.chars() {
        match c {
            '\\' => buffer.push_str("\\\\"),
            '"' => buffer.push_str("\\\""),
            '<' => buffer.push_str("\\u003C"),
            '\n' => buffer.push_str("\\n"),
            '\r' => buffer.push_str("\\r"),
            _ => buffer.push(c),
        }
    }
}
