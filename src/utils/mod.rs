use std::{env, path::PathBuf, sync::Once};

const DEFAULT_DIR_NAME: &str = ".expense_core";
const HOME_ENV: &str = "EXPENSE_CORE_HOME";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Resolves filesystem locations for application data.
pub struct PathResolver;

impl PathResolver {
    /// Base directory for preferences, honoring the `EXPENSE_CORE_HOME` override.
    pub fn base_dir() -> PathBuf {
        if let Some(overridden) = env::var_os(HOME_ENV) {
            return PathBuf::from(overridden);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_file_in(base: &std::path::Path) -> PathBuf {
        base.join("config.json")
    }

    pub fn history_file_in(base: &std::path::Path) -> PathBuf {
        base.join("history.txt")
    }
}

/// Creates the directory if it does not already exist.
pub fn ensure_dir(path: &std::path::Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
