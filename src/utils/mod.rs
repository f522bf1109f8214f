use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Once,
};

use crate::errors::CatalogError;

const DEFAULT_DIR_NAME: &str = ".catalog_core";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("catalog_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.catalog_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CATALOG_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates the directory (and parents) when it does not exist yet.
pub fn ensure_dir(path: &Path) -> Result<(), CatalogError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
