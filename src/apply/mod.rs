use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::mapper::{EditorKind, MapperSet, ThemePreferenceMapper};
use crate::storage::PersistenceError;
use crate::theme::{ThemeCatalog, ThemeEntries};

/// A destination whose flush failed during an apply cycle.
#[derive(Debug)]
pub struct MapperFailure {
    pub kind: EditorKind,
    pub error: PersistenceError,
}

impl fmt::Display for MapperFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

/// Outcome of one apply cycle across all destinations.
#[derive(Debug)]
pub struct ApplyReport {
    pub theme: String,
    /// Whether the theme was in the catalog. When it was not, every
    /// destination was reset to its own defaults.
    pub found: bool,
    pub visited: Vec<EditorKind>,
    pub failures: Vec<MapperFailure>,
}

impl ApplyReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_kinds(&self) -> Vec<EditorKind> {
        self.failures.iter().map(|failure| failure.kind).collect()
    }
}

/// Drives the clear/map/flush lifecycle for a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ThemeApplier<'a> {
    catalog: &'a ThemeCatalog,
}

impl<'a> ThemeApplier<'a> {
    pub fn new(catalog: &'a ThemeCatalog) -> Self {
        Self { catalog }
    }

    /// Apply `theme` to every mapper.
    ///
    /// A failing flush is recorded and the remaining mappers are still visited.
    pub fn apply(
        &self,
        theme: &str,
        mappers: &mut [Box<dyn ThemePreferenceMapper + Send>],
    ) -> ApplyReport {
        let entries = self.catalog.lookup(theme);
        if entries.is_none() {
            tracing::info!(theme, "theme not in catalog; resetting destinations to defaults");
        }

        let mut report = ApplyReport {
            theme: theme.to_string(),
            found: entries.is_some(),
            visited: Vec::with_capacity(mappers.len()),
            failures: Vec::new(),
        };
        for mapper in mappers.iter_mut() {
            let kind = mapper.kind();
            report.visited.push(kind);
            if let Err(error) = run_cycle(&mut **mapper, entries) {
                let failure = MapperFailure { kind, error };
                tracing::warn!(%failure, "failed to persist theme preferences");
                report.failures.push(failure);
            }
        }

        tracing::info!(
            theme,
            found = report.found,
            destinations = report.visited.len(),
            failed = report.failures.len(),
            "applied theme"
        );
        report
    }
}

fn run_cycle(
    mapper: &mut (dyn ThemePreferenceMapper + Send),
    entries: Option<&ThemeEntries>,
) -> Result<(), PersistenceError> {
    mapper.clear();
    if let Some(entries) = entries {
        mapper.map(entries);
    }
    mapper.flush()
}

/// Catalog plus the fixed destination set, with apply cycles serialized.
pub struct ThemeManager {
    catalog: ThemeCatalog,
    mappers: Mutex<MapperSet>,
}

impl ThemeManager {
    pub fn new(catalog: ThemeCatalog, mappers: MapperSet) -> Self {
        Self {
            catalog,
            mappers: Mutex::new(mappers),
        }
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn theme_names(&self) -> Vec<&str> {
        self.catalog.names()
    }

    pub fn theme(&self, name: &str) -> Option<&ThemeEntries> {
        self.catalog.lookup(name)
    }

    /// Apply `theme` to every destination. Concurrent callers run one at a time.
    pub fn apply_theme(&self, theme: &str) -> ApplyReport {
        // A panicked cycle leaves nothing half-applied that the next `clear` won't reset.
        let mut mappers = self.mappers.lock().unwrap_or_else(PoisonError::into_inner);
        ThemeApplier::new(&self.catalog).apply(theme, mappers.as_mut_slice())
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
