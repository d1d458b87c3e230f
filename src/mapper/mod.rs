//! Destinations a theme is written into.
//!
//! Every destination satisfies [`ThemePreferenceMapper`]; the set of
//! destinations is closed and described by [`EditorKind`].

use std::fmt;
use std::path::Path;

use crate::storage::{node_path, JsonPreferenceStore, PersistenceResult, PreferenceStore};
use crate::theme::ThemeEntries;

mod translations;

pub use translations::Translation;
use translations::translation_for;

/// One apply cycle is always `clear`, then `map` (only for a known theme),
/// then `flush`.
pub trait ThemePreferenceMapper {
    fn kind(&self) -> EditorKind;

    /// Drop every value this destination owns. Idempotent.
    fn clear(&mut self);

    /// Stage the roles this destination understands; others are ignored.
    fn map(&mut self, entries: &ThemeEntries);

    /// Durably commit what was staged since the last `clear`.
    fn flush(&mut self) -> PersistenceResult<()>;
}

pub type MapperSet = Vec<Box<dyn ThemePreferenceMapper + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupType {
    Xml,
    Html,
    Css,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    Text,
    Java,
    JavaProperties,
    Markup(MarkupType),
    JavaScript,
    Cpp,
    Php,
    Ant,
    Sql,
}

impl EditorKind {
    /// Every registered destination.
    pub fn all() -> &'static [EditorKind] {
        &[
            EditorKind::Text,
            EditorKind::Java,
            EditorKind::JavaProperties,
            EditorKind::Markup(MarkupType::Xml),
            EditorKind::Markup(MarkupType::Html),
            EditorKind::Markup(MarkupType::Css),
            EditorKind::JavaScript,
            EditorKind::Cpp,
            EditorKind::Php,
            EditorKind::Ant,
            EditorKind::Sql,
        ]
    }

    /// Preference node this destination persists under.
    pub fn node(&self) -> &'static str {
        match self {
            EditorKind::Text => "text",
            EditorKind::Java => "java",
            EditorKind::JavaProperties => "java-properties",
            EditorKind::Markup(MarkupType::Xml) => "markup-xml",
            EditorKind::Markup(MarkupType::Html) => "markup-html",
            EditorKind::Markup(MarkupType::Css) => "markup-css",
            EditorKind::JavaScript => "javascript",
            EditorKind::Cpp => "cpp",
            EditorKind::Php => "php",
            EditorKind::Ant => "ant",
            EditorKind::Sql => "sql",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorKind::Text => "Text editor",
            EditorKind::Java => "Java editor",
            EditorKind::JavaProperties => "Properties file editor",
            EditorKind::Markup(MarkupType::Xml) => "XML editor",
            EditorKind::Markup(MarkupType::Html) => "HTML editor",
            EditorKind::Markup(MarkupType::Css) => "CSS editor",
            EditorKind::JavaScript => "JavaScript editor",
            EditorKind::Cpp => "C/C++ editor",
            EditorKind::Php => "PHP editor",
            EditorKind::Ant => "Ant editor",
            EditorKind::Sql => "SQL editor",
        }
    }

    pub fn translation(&self) -> &'static Translation {
        translation_for(*self)
    }
}

impl fmt::Display for EditorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Table-driven mapper writing through a [`PreferenceStore`].
#[derive(Debug)]
pub struct EditorMapper<S> {
    kind: EditorKind,
    translation: &'static Translation,
    store: S,
}

impl<S: PreferenceStore> EditorMapper<S> {
    pub fn new(kind: EditorKind, store: S) -> Self {
        Self {
            kind,
            translation: kind.translation(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: PreferenceStore> ThemePreferenceMapper for EditorMapper<S> {
    fn kind(&self) -> EditorKind {
        self.kind
    }

    fn clear(&mut self) {
        for key in self.translation.keys() {
            self.store.remove(key);
        }
    }

    fn map(&mut self, entries: &ThemeEntries) {
        let mut mapped = 0usize;
        for &(role, key) in self.translation.colors {
            if let Some(color) = entries.get(role) {
                self.store.put(key, color);
                mapped += 1;
            }
        }
        for &(key, value) in self.translation.flags {
            self.store.put(key, value);
        }
        tracing::trace!(destination = %self.kind, mapped, "staged theme colors");
    }

    fn flush(&mut self) -> PersistenceResult<()> {
        self.store.commit()
    }
}

/// Build one mapper per [`EditorKind`], each with the store `store_for` returns.
pub fn default_mappers<S, F>(mut store_for: F) -> MapperSet
where
    S: PreferenceStore + Send + 'static,
    F: FnMut(EditorKind) -> S,
{
    EditorKind::all()
        .iter()
        .map(|&kind| {
            Box::new(EditorMapper::new(kind, store_for(kind)))
                as Box<dyn ThemePreferenceMapper + Send>
        })
        .collect()
}

/// Mappers persisting to `<dir>/<node>.json`.
pub fn json_mappers(dir: &Path) -> MapperSet {
    default_mappers(|kind| JsonPreferenceStore::open(node_path(dir, kind.node())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferenceStore;
    use crate::theme::roles::{FOREGROUND, KEYWORD, STRING};
    use crate::theme::ThemeCatalog;
    use std::collections::HashSet;

    fn entries(pairs: &[(&str, &str)]) -> ThemeEntries {
        pairs
            .iter()
            .map(|(role, color)| (role.to_string(), color.to_string()))
            .collect()
    }

    #[test]
    fn registered_destinations_are_distinct() {
        let kinds = EditorKind::all();
        assert_eq!(kinds.len(), 11);

        let unique: HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());

        let nodes: HashSet<_> = kinds.iter().map(EditorKind::node).collect();
        assert_eq!(nodes.len(), kinds.len());
    }

    #[test]
    fn default_mappers_cover_every_kind() {
        let mappers = default_mappers(|_| MemoryPreferenceStore::new());
        let kinds: Vec<_> = mappers.iter().map(|mapper| mapper.kind()).collect();
        assert_eq!(kinds, EditorKind::all());
    }

    #[test]
    fn map_stages_known_roles_and_ignores_unknown() {
        let mut mapper = EditorMapper::new(EditorKind::Sql, MemoryPreferenceStore::new());
        mapper.map(&entries(&[
            (KEYWORD, "#EFEFAF"),
            (STRING, "#CC9393"),
            ("sparkle", "#FF00FF"),
        ]));

        let store = mapper.store();
        assert_eq!(store.get("sql.keyword"), Some("#EFEFAF"));
        assert_eq!(store.get("sql.string"), Some("#CC9393"));
        assert_eq!(store.get("sql.quotedLiteral"), Some("#CC9393"));
        assert_eq!(store.get("sql.identifier"), None);
        assert!(store.committed().is_empty());
    }

    #[test]
    fn map_writes_destination_flags() {
        let mut mapper = EditorMapper::new(EditorKind::Text, MemoryPreferenceStore::new());
        mapper.map(&entries(&[(FOREGROUND, "#DCDCCC")]));

        let store = mapper.store();
        assert_eq!(store.get("AbstractTextEditor.Color.Foreground"), Some("#DCDCCC"));
        assert_eq!(
            store.get("AbstractTextEditor.Color.Foreground.SystemDefault"),
            Some("false")
        );
    }

    #[test]
    fn clear_removes_owned_keys_only() {
        let mut store = MemoryPreferenceStore::new();
        store.put("unrelated.setting", "keep");
        let mut mapper = EditorMapper::new(EditorKind::Text, store);

        mapper.map(&entries(&[(FOREGROUND, "#DCDCCC")]));
        mapper.clear();
        mapper.clear();
        mapper.flush().unwrap();

        let committed = mapper.store().committed();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed.get("unrelated.setting").map(String::as_str), Some("keep"));
    }

    #[test]
    fn flush_commits_staged_values() {
        let mut mapper = EditorMapper::new(EditorKind::Ant, MemoryPreferenceStore::new());
        mapper.clear();
        mapper.map(&entries(&[(KEYWORD, "#808BED")]));
        mapper.flush().unwrap();

        let store = mapper.store();
        assert_eq!(store.committed().get("ant.tag").map(String::as_str), Some("#808BED"));
        assert_eq!(store.commit_count(), 1);
    }

    #[test]
    fn bundled_themes_reach_every_destination() {
        let catalog = ThemeCatalog::bundled();
        for name in catalog.names() {
            let theme = catalog.lookup(name).unwrap();
            for &kind in EditorKind::all() {
                let mapped = kind
                    .translation()
                    .colors
                    .iter()
                    .any(|&(role, _)| theme.contains_key(role));
                assert!(mapped, "theme {name} maps nothing for {kind}");
            }
        }
    }
}
