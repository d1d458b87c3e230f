use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::document::parse_theme_document;
use super::{Theme, ThemeEntries, ThemeError, ThemeResult};

const THEME_FILE_EXTENSION: &str = "xml";

const BUNDLED_THEMES: &[(&str, &str)] = &[
    ("zenburn.xml", include_str!("themes/zenburn.xml")),
    ("inkpot.xml", include_str!("themes/inkpot.xml")),
    ("vibrantink.xml", include_str!("themes/vibrantink.xml")),
    ("oblivion.xml", include_str!("themes/oblivion.xml")),
];

/// Where a theme document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Compiled into the binary.
    Bundled { id: &'static str, xml: &'static str },
    /// A theme file on disk.
    File(PathBuf),
    /// Theme text handed in by the caller.
    Text { id: String, xml: String },
}

impl ThemeSource {
    pub fn id(&self) -> String {
        match self {
            Self::Bundled { id, .. } => (*id).to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Text { id, .. } => id.clone(),
        }
    }

    fn read(&self) -> ThemeResult<String> {
        match self {
            Self::Bundled { xml, .. } => Ok((*xml).to_string()),
            Self::File(path) => fs::read_to_string(path).map_err(|source| ThemeError::Read {
                path: path.clone(),
                source,
            }),
            Self::Text { xml, .. } => Ok(xml.clone()),
        }
    }
}

/// Bundled themes in load order.
pub fn bundled_sources() -> Vec<ThemeSource> {
    BUNDLED_THEMES
        .iter()
        .map(|&(id, xml)| ThemeSource::Bundled { id, xml })
        .collect()
}

/// Theme files (`*.xml`) in `dir`, sorted by file name.
///
/// A missing directory yields nothing. An unreadable one is logged and yields nothing.
pub fn sources_in_dir(dir: &Path) -> Vec<ThemeSource> {
    if !dir.exists() {
        return Vec::new();
    }
    match read_theme_paths(dir) {
        Ok(paths) => paths.into_iter().map(ThemeSource::File).collect(),
        Err(err) => {
            tracing::warn!(dir = %dir.display(), ?err, "failed to list theme directory");
            Vec::new()
        }
    }
}

fn read_theme_paths(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(THEME_FILE_EXTENSION))
        {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// A theme source that could not be loaded.
#[derive(Debug, Error)]
#[error("failed to load theme from {source_id}")]
pub struct LoadError {
    pub source_id: String,
    #[source]
    pub error: ThemeError,
}

/// Resolved themes keyed by name.
#[derive(Debug, Default)]
pub struct ThemeCatalog {
    themes: HashMap<String, ThemeEntries>,
    load_errors: Vec<LoadError>,
}

impl ThemeCatalog {
    /// Load every source, skipping (and recording) the ones that fail.
    ///
    /// Later sources overwrite earlier ones that declare the same name.
    pub fn load<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = ThemeSource>,
    {
        let mut catalog = Self::default();
        for source in sources {
            match load_source(&source) {
                Ok(Theme { name, entries }) => {
                    tracing::debug!(
                        theme = %name,
                        source = %source.id(),
                        roles = entries.len(),
                        "loaded theme"
                    );
                    if catalog.themes.insert(name.clone(), entries).is_some() {
                        tracing::debug!(
                            theme = %name,
                            source = %source.id(),
                            "theme name redefined; keeping latest"
                        );
                    }
                }
                Err(error) => {
                    let source_id = source.id();
                    tracing::warn!(source = %source_id, %error, "skipping theme source");
                    catalog.load_errors.push(LoadError { source_id, error });
                }
            }
        }
        catalog
    }

    /// Catalog of the bundled themes only.
    pub fn bundled() -> Self {
        Self::load(bundled_sources())
    }

    /// Names of all loaded themes, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn lookup(&self, name: &str) -> Option<&ThemeEntries> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn load_errors(&self) -> &[LoadError] {
        &self.load_errors
    }
}

impl fmt::Display for ThemeCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThemeCatalog[{}]", self.names().join(", "))
    }
}

fn load_source(source: &ThemeSource) -> ThemeResult<Theme> {
    let xml = source.read()?;
    Ok(Theme::from_document(parse_theme_document(&xml)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::defaults::DEFAULT_FALLBACKS;
    use crate::theme::roles::{FIELD, FOREGROUND, JAVADOC_TAG, METHOD};

    fn text(id: &str, xml: &str) -> ThemeSource {
        ThemeSource::Text {
            id: id.to_string(),
            xml: xml.to_string(),
        }
    }

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("colortheme-catalog-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn bundled_catalog_loads_all_themes() {
        let catalog = ThemeCatalog::bundled();

        assert!(catalog.load_errors().is_empty());
        assert_eq!(
            catalog.names(),
            vec!["Inkpot", "Oblivion", "Vibrant Ink", "Zenburn"]
        );
    }

    #[test]
    fn display_lists_sorted_names() {
        let catalog = ThemeCatalog::load([
            text("b", r#"<theme name="Beta"/>"#),
            text("a", r#"<theme name="Alpha"/>"#),
        ]);
        assert!(catalog.contains("Alpha"));
        assert_eq!(catalog.to_string(), "ThemeCatalog[Alpha, Beta]");
    }

    #[test]
    fn bundled_themes_are_closed_under_defaults() {
        let catalog = ThemeCatalog::bundled();
        for name in catalog.names() {
            let entries = catalog.lookup(name).unwrap();
            for &(role, fallback) in DEFAULT_FALLBACKS {
                assert!(
                    entries.contains_key(role),
                    "theme {name} lacks {role} (fallback {fallback})"
                );
            }
        }
    }

    #[test]
    fn stored_entries_are_resolved() {
        let catalog = ThemeCatalog::load([text(
            "partial",
            r##"<theme name="Partial"><foreground color="#FFFFFF"/><multiLineComment color="#808080"/></theme>"##,
        )]);

        let entries = catalog.lookup("Partial").unwrap();
        assert_eq!(entries[METHOD], "#FFFFFF");
        assert_eq!(entries[FIELD], "#FFFFFF");
        assert_eq!(entries[JAVADOC_TAG], "#808080");
    }

    #[test]
    fn malformed_source_is_skipped_and_recorded() {
        let catalog = ThemeCatalog::load([
            text("a", r##"<theme name="A"><foreground color="#111111"/></theme>"##),
            text("broken", r##"<theme name="B"><foreground color="#222222"></theme>"##),
            text("c", r##"<theme name="C"><foreground color="#333333"/></theme>"##),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["A", "C"]);
        assert_eq!(catalog.load_errors().len(), 1);
        assert_eq!(catalog.load_errors()[0].source_id, "broken");
        assert!(matches!(catalog.load_errors()[0].error, ThemeError::Xml(_)));
    }

    #[test]
    fn missing_file_is_recorded_as_read_error() {
        let missing = std::env::temp_dir().join("colortheme-definitely-missing.xml");
        let catalog = ThemeCatalog::load([ThemeSource::File(missing.clone())]);

        assert!(catalog.is_empty());
        let error = &catalog.load_errors()[0];
        assert_eq!(error.source_id, missing.display().to_string());
        assert!(matches!(error.error, ThemeError::Read { .. }));
    }

    #[test]
    fn lookup_of_unknown_name_is_none() {
        let catalog = ThemeCatalog::bundled();
        assert!(catalog.lookup("No Such Theme").is_none());
        assert!(!catalog.contains("No Such Theme"));
    }

    #[test]
    fn duplicate_names_keep_last_loaded() {
        let catalog = ThemeCatalog::load([
            text("first", r##"<theme name="Dup"><foreground color="#000000"/></theme>"##),
            text("second", r##"<theme name="Dup"><foreground color="#FFFFFF"/></theme>"##),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("Dup").unwrap()[FOREGROUND], "#FFFFFF");
    }

    #[test]
    fn sources_in_dir_lists_xml_files_sorted() {
        with_temp_root(|root| {
            fs::write(root.join("b.xml"), r##"<theme name="B"/>"##).unwrap();
            fs::write(root.join("a.XML"), r##"<theme name="A"/>"##).unwrap();
            fs::write(root.join("notes.txt"), "ignored").unwrap();
            fs::create_dir_all(root.join("dir.xml")).unwrap();

            let sources = sources_in_dir(root);
            assert_eq!(
                sources,
                vec![
                    ThemeSource::File(root.join("a.XML")),
                    ThemeSource::File(root.join("b.xml")),
                ]
            );

            let catalog = ThemeCatalog::load(sources);
            assert_eq!(catalog.names(), vec!["A", "B"]);
        });
    }

    #[test]
    fn sources_in_missing_dir_is_empty() {
        with_temp_root(|root| {
            assert!(sources_in_dir(&root.join("absent")).is_empty());
        });
    }

    #[test]
    fn user_theme_overrides_bundled_theme_of_same_name() {
        with_temp_root(|root| {
            fs::write(
                root.join("zenburn.xml"),
                r##"<theme name="Zenburn"><foreground color="#ABCDEF"/></theme>"##,
            )
            .unwrap();

            let catalog =
                ThemeCatalog::load(bundled_sources().into_iter().chain(sources_in_dir(root)));
            assert_eq!(catalog.len(), 4);
            assert_eq!(catalog.lookup("Zenburn").unwrap()[FOREGROUND], "#ABCDEF");
        });
    }
}
