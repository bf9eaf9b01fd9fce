use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::core::{LoadedDictionary, SkippedEntry, TranslationDictionary};

/// A warning from scanning locale files.
#[derive(Debug, Clone)]
pub struct LocaleScanWarning {
    pub file_path: String,
    pub error: String,
}

/// A parsed locale file.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    pub locale: String,
    pub file_path: PathBuf,
    pub dictionary: TranslationDictionary,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Default)]
pub struct ScanLocalesResult {
    /// Parsed files keyed by locale.
    pub locales: BTreeMap<String, LocaleFile>,
    pub warnings: Vec<LocaleScanWarning>,
}

pub fn parse_locale_file(path: &Path, locale: &str) -> Result<LocaleFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    let LoadedDictionary {
        dictionary,
        skipped,
    } = TranslationDictionary::from_json_str(&content)
        .with_context(|| format!("Failed to parse locale file: {:?}", path))?;

    Ok(LocaleFile {
        locale: locale.to_string(),
        file_path: path.to_path_buf(),
        dictionary,
        skipped,
    })
}

/// Extracts locale from filename.
///
/// Examples:
/// - "it.json" -> Some("it")
/// - "en-GB.json" -> Some("en-GB")
/// - "/path/to/locales/de.json" -> Some("de")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Path of the file holding `locale` under `locales_root`.
pub fn locale_file_path(locales_root: impl AsRef<Path>, locale: &str) -> PathBuf {
    locales_root.as_ref().join(format!("{}.json", locale))
}

/// Load the dictionary for `locale` from `locales_root`.
pub fn load_locale(locales_root: impl AsRef<Path>, locale: &str) -> Result<LocaleFile> {
    let locales_root = locales_root.as_ref();
    let path = locale_file_path(locales_root, locale);

    if !path.is_file() {
        bail!(
            "Locale file '{}' does not exist.\n\
             Hint: Check your .kernelrc.json 'localesRoot' and 'locale' settings.",
            path.display()
        );
    }

    parse_locale_file(&path, locale)
}

pub fn scan_locale_files(locales_root: impl AsRef<Path>) -> Result<ScanLocalesResult> {
    let locales_root = locales_root.as_ref();
    let mut result = ScanLocalesResult::default();

    if !locales_root.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your .kernelrc.json 'localesRoot' setting.",
            locales_root.display()
        );
    }

    if !locales_root.is_dir() {
        bail!("'{}' is not a directory.", locales_root.display());
    }

    for entry in fs::read_dir(locales_root)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            match parse_locale_file(&path, &locale) {
                Ok(file) => {
                    result.locales.insert(locale, file);
                }
                Err(e) => {
                    result.warnings.push(LocaleScanWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
    }

    Ok(result)
}
