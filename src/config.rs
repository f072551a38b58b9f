use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::Backend;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigBackend {
    Json,
    Sqlite,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) backend: Option<ConfigBackend>,
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,

    /// Where this config came from, reported once logging is up
    #[serde(skip)]
    pub(crate) loaded_from: Option<PathBuf>,
    #[serde(skip)]
    pub(crate) problems: Vec<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        let mut problems = Vec::new();

        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.loaded_from = Some(path);
                        config.problems = problems;
                        return config;
                    }
                    Err(e) => problems.push(format!("Failed to parse {}: {}", path.display(), e)),
                }
            }
        }

        Self {
            problems,
            ..Self::default()
        }
    }

    /// Log the config origin and any files that failed to parse
    pub(crate) fn log_origin(&self) {
        for problem in &self.problems {
            log::warn!("{problem}");
        }
        match &self.loaded_from {
            Some(path) => log::debug!("loaded config from {}", path.display()),
            None => log::debug!("no config file found, using defaults"),
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/pomostats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("pomostats").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/pomostats/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("pomostats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.pomostats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".pomostats.toml"));
        }

        paths
    }
}

/// Default session file inside the platform data directory
pub(crate) fn default_data_path(backend: Backend) -> PathBuf {
    let file_name = match backend {
        Backend::Json => "sessions.json",
        Backend::Sqlite => "sessions.db",
    };
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pomostats")
        .join(file_name)
}
