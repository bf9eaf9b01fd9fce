use std::{borrow::Cow, env, path::Path};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::{SkippedEntry, TranslationDictionary, TranslationResolver, parsers::json::load_locale},
};

/// Everything a command needs: the effective config and the loaded
/// dictionary.
pub struct CommandContext {
    pub config: Config,
    pub dictionary: Cow<'static, TranslationDictionary>,
    /// Entries of the locale file that could not become translations.
    pub skipped: Vec<SkippedEntry>,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(&cwd, args)
    }

    pub fn from_dir(dir: &Path, args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(dir)?;
        // A configured root is relative to the config file, a flag to `dir`.
        let locales_dir = match &args.locales_root {
            Some(root) => Some(dir.join(root)),
            None => loaded.locales_dir(),
        };

        let mut config = loaded.config;
        if let Some(locale) = &args.locale {
            config.locale = locale.clone();
        }
        if let Some(root) = &args.locales_root {
            config.locales_root = Some(root.to_string_lossy().to_string());
        }
        config.validate()?;

        let (dictionary, skipped) = match locales_dir {
            Some(locales_dir) => {
                let file = load_locale(locales_dir, &config.locale)?;
                tracing::debug!(path = %file.file_path.display(), "loaded locale file");
                (Cow::Owned(file.dictionary), file.skipped)
            }
            None => {
                let dictionary = TranslationDictionary::bundled()
                    .context("Failed to load bundled translations")?;
                if config.locale != crate::core::BUNDLED_LOCALE {
                    tracing::warn!(
                        locale = %config.locale,
                        "no localesRoot configured, using bundled '{}' translations",
                        crate::core::BUNDLED_LOCALE
                    );
                }
                (Cow::Borrowed(dictionary), Vec::new())
            }
        };

        Ok(Self {
            config,
            dictionary,
            skipped,
            verbose: args.verbose,
        })
    }

    pub fn resolver(&self) -> TranslationResolver<'_> {
        TranslationResolver::new(&self.dictionary)
    }
}
