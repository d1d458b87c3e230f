use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{app_config_path, ConfigPathError, APP_DIR};

const PREFERENCES_SUBDIR: &str = "preferences";
const PREFERENCES_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to write preferences: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize preferences")]
    Serialize(#[from] serde_json::Error),
}

pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;

/// Key/value preferences with a stage-then-commit contract.
///
/// `put` and `remove` only touch staged state; nothing is durable until
/// `commit` succeeds.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn put(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn commit(&mut self) -> PersistenceResult<()>;
}

/// Preferences persisted as one JSON object per file.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    committed: BTreeMap<String, String>,
    staged: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    /// Open the store at `path`, reading whatever was committed before.
    ///
    /// Unreadable or invalid files are logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let committed = read_committed(&path);
        Self {
            staged: committed.clone(),
            committed,
            path,
        }
    }

    pub fn committed(&self) -> &BTreeMap<String, String> {
        &self.committed
    }

    pub fn is_dirty(&self) -> bool {
        self.staged != self.committed
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.staged.get(key).map(String::as_str)
    }

    fn put(&mut self, key: &str, value: &str) {
        self.staged.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.staged.remove(key);
    }

    fn commit(&mut self) -> PersistenceResult<()> {
        if !self.is_dirty() {
            return Ok(());
        }

        let serialized = serde_json::to_string_pretty(&self.staged)?;
        write_atomic(&self.path, &serialized).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.committed = self.staged.clone();
        tracing::debug!(
            path = %self.path.display(),
            keys = self.committed.len(),
            "committed preferences"
        );
        Ok(())
    }
}

fn read_committed(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(
                ?err,
                path = %path.display(),
                "failed to parse preferences; starting empty"
            );
            BTreeMap::new()
        }),
        Err(err) => {
            tracing::warn!(
                ?err,
                path = %path.display(),
                "failed to read preferences; starting empty"
            );
            BTreeMap::new()
        }
    }
}

fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let temp = temp_path(path);
    fs::write(&temp, contents)?;
    fs::rename(&temp, path).inspect_err(|_| {
        if let Err(err) = fs::remove_file(&temp) {
            tracing::warn!(
                ?err,
                path = %temp.display(),
                "failed to remove temporary preferences file"
            );
        }
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

/// In-process preferences; commits never fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    committed: BTreeMap<String, String>,
    staged: BTreeMap<String, String>,
    commits: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed(&self) -> &BTreeMap<String, String> {
        &self.committed
    }

    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.staged.get(key).map(String::as_str)
    }

    fn put(&mut self, key: &str, value: &str) {
        self.staged.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.staged.remove(key);
    }

    fn commit(&mut self) -> PersistenceResult<()> {
        self.committed = self.staged.clone();
        self.commits += 1;
        Ok(())
    }
}

/// Directory holding one preference file per destination node.
pub fn preferences_dir(
    configured: Option<&Path>,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> PersistenceResult<PathBuf> {
    if let Some(dir) = configured {
        return Ok(dir.to_path_buf());
    }
    app_config_path(APP_DIR, PREFERENCES_SUBDIR, xdg_config_home, home).map_err(|error| {
        match error {
            ConfigPathError::MissingHomeDirectory => PersistenceError::MissingHomeDirectory,
        }
    })
}

/// Path of the preference file for `node` inside `dir`.
pub fn node_path(dir: &Path, node: &str) -> PathBuf {
    let mut path = dir.join(node);
    path.set_extension(PREFERENCES_EXTENSION);
    path
}
