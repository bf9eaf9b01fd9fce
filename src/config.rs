use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::BUNDLED_LOCALE;

pub const CONFIG_FILE_NAME: &str = ".kernelrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Directory of `<locale>.json` files. The bundled dictionary is used
    /// when unset.
    #[serde(default, alias = "localesDir")]
    pub locales_root: Option<String>,
}

fn default_locale() -> String {
    BUNDLED_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            locales_root: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The locale names a file, so it must be non-empty and free of path
    /// separators.
    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            bail!("Invalid 'locale': must not be empty");
        }
        if self.locale.contains(['/', '\\']) || self.locale == ".." {
            bail!(
                "Invalid 'locale': \"{}\" must be a bare locale name such as \"it\"",
                self.locale
            );
        }
        if let Some(root) = &self.locales_root
            && root.trim().is_empty()
        {
            bail!("Invalid 'localesRoot': must not be empty");
        }
        Ok(())
    }

    /// Whether lookups use the dictionary bundled into the binary.
    pub fn uses_bundled(&self) -> bool {
        self.locales_root.is_none()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory a relative `localesRoot` is resolved against: the one
    /// holding the config file, or the start directory for defaults.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    /// The configured locales directory, anchored at `base_dir`.
    pub fn locales_dir(&self) -> Option<PathBuf> {
        self.config
            .locales_root
            .as_ref()
            .map(|root| self.base_dir.join(root))
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
