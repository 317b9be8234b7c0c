//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `hivemark.<ext>` in current directory or any parent
//! - `.hivemark.<ext>` in current directory or any parent
//! - `hive.<ext>` in current directory or any parent
//! - `.hive.<ext>` in current directory or any parent
//! - `~/.config/hivemark/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use hivemark_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let config = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log verbosity.
    pub log_level: LogLevel,
    /// Directory for log files; stderr-only logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Excerpt length override, in words.
    pub excerpt_length: Option<usize>,
    /// Load the Droid Serif family (body text).
    pub droid_serif: bool,
    /// Load the Playfair Display family (headings).
    pub playfair_display: bool,
    /// Maximum input size in bytes for file-reading commands.
    ///
    /// Omit to use the default (5 MiB). Use `disable_input_limit` to remove
    /// the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is
    /// performed. Default: `false`.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            excerpt_length: None,
            droid_serif: true,
            playfair_display: true,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// The font toggles this configuration selects.
    pub const fn font_toggles(&self) -> crate::fonts::FontToggles {
        crate::fonts::FontToggles {
            droid_serif: self.droid_serif,
            playfair_display: self.playfair_display,
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "hivemark";

/// Application names to search for config files (in precedence order, lowest first).
const APP_NAMES: &[&str] = &["hive", "hivemark"];

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/hivemark/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Returns the merged config alongside metadata about which files
    /// were loaded — pass the [`ConfigSources`] to commands instead of
    /// having them re-discover config files.
    ///
    /// Precedence (highest to lowest):
    /// 1. Explicit files (in order added via `with_file`)
    /// 2. Project config (closest to search root)
    /// 3. User config (`~/.config/hivemark/config.<ext>`)
    /// 4. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // Start with user config (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        // Add project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        // Add explicit files
        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        // HIVEMARK_LOG_LEVEL=debug, HIVEMARK_EXCERPT_LENGTH=40, etc.
        figment = figment.merge(Env::prefixed("HIVEMARK_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .map(|root| !self.find_project_configs(root).is_empty())
            .unwrap_or(false);
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has any
    /// match, ordered low-to-high precedence: `hive` names before `hivemark`
    /// names, dotfiles before regular files within each app name.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            // Search order (low→high precedence, figment merges last-wins):
            //   1. .hive.{toml,yaml,yml,json}
            //   2. hive.{toml,yaml,yml,json}
            //   3. .hivemark.{toml,yaml,yml,json}
            //   4. hivemark.{toml,yaml,yml,json}
            for app_name in APP_NAMES {
                // Dotfiles first (lower precedence within same app name)
                for ext in CONFIG_EXTENSIONS {
                    let dotfile = dir.join(format!(".{app_name}.{ext}"));
                    if dotfile.is_file() {
                        found.push(dotfile);
                    }
                }
                // Regular files (higher precedence within same app name)
                for ext in CONFIG_EXTENSIONS {
                    let regular = dir.join(format!("{app_name}.{ext}"));
                    if regular.is_file() {
                        found.push(regular);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        let config_dir = proj_dirs.config_dir();

        // Try each supported extension
        for ext in CONFIG_EXTENSIONS {
            let config_path = config_dir.join(format!("config.{ext}"));
            if config_path.is_file() {
                return Utf8PathBuf::from_path_buf(config_path).ok();
            }
        }

        None
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("toml") => figment.merge(Toml::file_exact(path.as_str())),
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/hivemark/` on Linux, `~/Library/Application Support/hivemark/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}
