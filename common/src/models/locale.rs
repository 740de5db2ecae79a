// common/src/models/locale.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display languages, selected by URL path prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Hi,
    Mr,
    Ta,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Hi, Locale::Mr, Locale::Ta];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Mr => "mr",
            Locale::Ta => "ta",
        }
    }

    /// Parse a path segment into a supported locale
    pub fn from_prefix(segment: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|locale| locale.as_str() == segment)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
