use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

pub mod catalog;
pub mod defaults;
pub mod document;
pub mod roles;

pub use catalog::{bundled_sources, sources_in_dir, LoadError, ThemeCatalog, ThemeSource};
pub use defaults::{apply_defaults, resolved, DEFAULT_FALLBACKS};
pub use document::{parse_theme_document, ThemeDocument};

/// Role id → color literal. Colors are opaque strings.
pub type ThemeEntries = HashMap<String, String>;

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed theme document")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute in theme document")]
    Attribute(#[from] AttrError),
    #[error("theme document has no root element")]
    MissingRoot,
    #[error("theme root element has no name")]
    MissingName,
    #[error("theme root element is never closed")]
    UnclosedRoot,
    #[error("unexpected content after theme root element")]
    TrailingContent,
}

/// A named, fully resolved theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub entries: ThemeEntries,
}

impl Theme {
    /// Build a theme from a parsed document, filling defaults.
    pub fn from_document(document: ThemeDocument) -> Self {
        let ThemeDocument { name, mut entries } = document;
        apply_defaults(&mut entries);
        Self { name, entries }
    }
}
