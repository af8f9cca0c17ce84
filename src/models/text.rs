//! Display text coercion
//!
//! Names and symbols are never rejected. An absent value is stored as the
//! literal text `null`.

use std::fmt;

/// Text stored in place of an absent name or symbol
pub const NULL_TEXT: &str = "null";

/// A display string built from possibly-absent input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText(String);

impl DisplayText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for DisplayText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DisplayText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for DisplayText {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<Option<&str>> for DisplayText {
    fn from(s: Option<&str>) -> Self {
        s.map(DisplayText::from)
            .unwrap_or_else(|| Self(NULL_TEXT.to_string()))
    }
}

impl From<Option<String>> for DisplayText {
    fn from(s: Option<String>) -> Self {
        Self(s.unwrap_or_else(|| NULL_TEXT.to_string()))
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
