//! Resource category classification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::EntryKind;

/// Extension lookup table, checked once per classification.
const EXTENSIONS: &[(&str, ResourceCategory)] = &[
    ("css", ResourceCategory::Css),
    ("scss", ResourceCategory::Css),
    ("sass", ResourceCategory::Css),
    ("less", ResourceCategory::Css),
    ("js", ResourceCategory::Js),
    ("mjs", ResourceCategory::Js),
    ("jsx", ResourceCategory::Js),
    ("ts", ResourceCategory::Js),
    ("tsx", ResourceCategory::Js),
    ("cjs", ResourceCategory::Js),
    ("vue", ResourceCategory::Js),
    ("svelte", ResourceCategory::Js),
    ("svg", ResourceCategory::Media),
    ("jpg", ResourceCategory::Media),
    ("webp", ResourceCategory::Media),
    ("avif", ResourceCategory::Media),
    ("mp4", ResourceCategory::Media),
    ("png", ResourceCategory::Media),
    ("gif", ResourceCategory::Media),
];

/// Category of a loaded resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    /// Images and video.
    Media,
    /// Scripts and script-like component sources.
    Js,
    /// Stylesheets.
    Css,
    /// The document markup.
    Html,
    /// Anything else, including names without an extension.
    Other,
}

impl ResourceCategory {
    /// Classifies a resource by entry kind and name.
    ///
    /// Navigation entries are always [`Html`](Self::Html). Otherwise the text
    /// after the last `.` in `name` is looked up in the extension table.
    #[must_use]
    pub fn classify(name: &str, kind: EntryKind) -> Self {
        if matches!(kind, EntryKind::Navigation) {
            return Self::Html;
        }
        Self::from_extension(extension_of(name))
    }

    /// Returns the category for a file extension, or [`Other`](Self::Other).
    #[must_use]
    pub fn from_extension(extension: &str) -> Self {
        if extension.is_empty() {
            return Self::Other;
        }
        EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map_or(Self::Other, |(_, category)| *category)
    }

    /// Returns the category as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Js => "js",
            Self::Css => "css",
            Self::Html => "html",
            Self::Other => "other",
        }
    }

    /// Returns all categories.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Media, Self::Js, Self::Css, Self::Html, Self::Other]
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "media" => Ok(Self::Media),
            "js" | "script" => Ok(Self::Js),
            "css" | "style" => Ok(Self::Css),
            "html" | "markup" => Ok(Self::Html),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid category '{}', expected one of: media, js, css, html, other",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

/// Returns the text after the last `.` in `name`, or `""` if there is none.
#[must_use]
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map_or("", |(_, ext)| ext)
}
