//! Locale file loading and parsing.
//!
//! Dictionaries ship embedded in the binary and can be overridden by
//! files in `<config>/locales/{code}.yml`. Both languages are loaded at
//! startup; lookups after that never touch the filesystem.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::Language;
use crate::i18n::translations::TranslationMap;

/// English dictionary compiled into the binary.
pub(crate) const EMBEDDED_EN: &str = include_str!("../../config/locales/en.yml");
/// Indonesian dictionary compiled into the binary.
pub(crate) const EMBEDDED_ID: &str = include_str!("../../config/locales/id.yml");

/// What: Load one language's dictionary from an override file.
///
/// Inputs:
/// - `language`: Language whose file to load
/// - `locales_dir`: Directory containing `{code}.yml` files
///
/// Output:
/// - `Result<TranslationMap, String>` with the flattened dictionary or a
///   human-readable error.
///
/// # Errors
/// - Returns `Err` when the file is missing, unreadable, empty, or not
///   valid YAML.
pub fn load_locale_file(language: Language, locales_dir: &Path) -> Result<TranslationMap, String> {
    let file_path = locales_dir.join(format!("{}.yml", language.code()));

    if !file_path.exists() {
        return Err(format!("locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents)
        .map_err(|e| format!("failed to parse locale file {}: {e}", file_path.display()))
}

/// What: Load a language's dictionary, preferring a disk override.
///
/// Inputs:
/// - `language`: Language to load
/// - `locales_dir`: Optional override directory
///
/// Output:
/// - Flattened dictionary; the embedded copy when no usable override
///   exists.
///
/// Details:
/// - Override failures are logged and fall back to the embedded copy, so
///   a bad edit to a locale file never takes the site down.
#[must_use]
pub fn load_or_embedded(language: Language, locales_dir: Option<&Path>) -> TranslationMap {
    if let Some(dir) = locales_dir {
        match load_locale_file(language, dir) {
            Ok(map) => {
                tracing::info!(
                    language = language.code(),
                    keys = map.len(),
                    dir = %dir.display(),
                    "loaded locale override"
                );
                return map;
            }
            Err(err) => {
                tracing::warn!(
                    language = language.code(),
                    error = %err,
                    "locale override unusable; using embedded dictionary"
                );
            }
        }
    }
    embedded(language)
}

/// What: Parse the embedded dictionary for a language.
///
/// Output:
/// - Flattened dictionary; empty (with an error log) if the embedded
///   asset fails to parse, which would indicate a packaging defect.
#[must_use]
pub fn embedded(language: Language) -> TranslationMap {
    let raw = match language {
        Language::En => EMBEDDED_EN,
        Language::Id => EMBEDDED_ID,
    };
    match parse_locale_yaml(raw) {
        Ok(map) => map,
        Err(err) => {
            tracing::error!(
                language = language.code(),
                error = %err,
                "embedded dictionary failed to parse"
            );
            TranslationMap::new()
        }
    }
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as a string
///
/// Output:
/// - `Result<TranslationMap, String>` containing flattened translations
///
/// Details:
/// - Expects a single top-level key naming the locale (e.g. `en:`);
///   everything below it is flattened into dot-notation keys.
fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("invalid YAML: {e}"))?;

    let mut translations = HashMap::new();

    if let Some(root) = doc.as_mapping() {
        for (_locale_key, locale_value) in root {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }

    Ok(translations)
}

/// What: Recursively flatten a YAML tree into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Accumulated key prefix (e.g. "blog.search")
/// - `translations`: Map to populate
///
/// Details:
/// - Nested maps become dotted keys; scalars are stored as strings.
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

/// What: Report keys that are not present in every loaded dictionary.
///
/// Inputs:
/// - `tables`: Dictionary per language
///
/// Output:
/// - Sorted list of `"key (missing: codes)"` entries; empty when the
///   dictionaries cover the same key set.
///
/// Details:
/// - Run at startup so drift between `en.yml` and `id.yml` is visible in
///   the logs instead of surfacing as raw keys on rendered pages.
#[must_use]
pub fn coverage_gaps(tables: &HashMap<Language, TranslationMap>) -> Vec<String> {
    let mut all_keys: Vec<&String> = tables.values().flat_map(|map| map.keys()).collect();
    all_keys.sort();
    all_keys.dedup();

    let mut gaps = Vec::new();
    for key in all_keys {
        let missing: Vec<&str> = Language::ALL
            .iter()
            .filter(|lang| !tables.get(lang).is_some_and(|map| map.contains_key(key)))
            .map(|lang| lang.code())
            .collect();
        if !missing.is_empty() {
            gaps.push(format!("{key} (missing: {})", missing.join(", ")));
        }
    }
    gaps
}
