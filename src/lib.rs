pub mod apply;
pub mod config;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod notification;
pub mod storage;
pub mod theme;
pub use apply::{ApplyReport, ThemeApplier, ThemeManager};
pub use error::{AppError, AppResult};

use config::AppConfig;
use theme::{bundled_sources, sources_in_dir, ThemeCatalog};

/// Build a manager from the bundled themes, the configured theme
/// directories and JSON preference files under the preferences directory.
pub fn manager_from_config(config: &AppConfig) -> AppResult<ThemeManager> {
    let (xdg_config_home, home) = config::config_env_dirs();
    let prefs_dir = storage::preferences_dir(
        config.preferences_dir.as_deref(),
        xdg_config_home.as_deref(),
        home.as_deref(),
    )?;

    let user_sources = config.theme_dirs.iter().flat_map(|dir| sources_in_dir(dir));
    let catalog = ThemeCatalog::load(bundled_sources().into_iter().chain(user_sources));
    if !catalog.load_errors().is_empty() {
        tracing::warn!(
            failed = catalog.load_errors().len(),
            "some themes could not be loaded"
        );
    }
    tracing::info!(
        themes = catalog.len(),
        prefs = %prefs_dir.display(),
        "theme catalog ready"
    );
    tracing::debug!(%catalog, "loaded themes");

    Ok(ThemeManager::new(catalog, mapper::json_mappers(&prefs_dir)))
}

/// Entrypoint used by higher-level integrations and CLI bindings.
///
/// Applies the theme named in `config.json`; returns `None` when none is set.
pub fn run() -> AppResult<Option<ApplyReport>> {
    logging::init();
    tracing::info!("starting colortheme");

    let config = config::load_app_config();
    let Some(theme) = config.theme.clone() else {
        tracing::info!("no theme configured; nothing to apply");
        return Ok(None);
    };

    let manager = manager_from_config(&config)?;
    if !manager.catalog().contains(&theme) {
        tracing::warn!(theme, "configured theme not found; resetting destinations to defaults");
    }
    let report = manager.apply_theme(&theme);
    if let Some(message) = notification::failure_message(&report) {
        notification::send(message);
    }
    Ok(Some(report))
}
