use crate::config::ResolverConfig;
use crate::error::{LoadError, LoadResult};
use crate::settings::Settings;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

fn read(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load the fallback settings from a JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "search_label": "Your location",
///     "max_results": 25
/// }
/// ```
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON
/// - Root is not an object
pub fn load_settings_from_file(path: &Path) -> LoadResult<Settings> {
    let content = read(path)?;
    parse_settings(&content, &path.display().to_string())
}

/// Parse settings from JSON text; `source` names the input in errors
///
/// Strings are taken as they are, numbers and booleans are stored in their
/// JSON spelling. `@`-prefixed keys are metadata and skipped. Null, arrays
/// and objects are skipped with a warning.
pub fn parse_settings(content: &str, source: &str) -> LoadResult<Settings> {
    let json: Value = serde_json::from_str(content).map_err(|e| LoadError::Json {
        path: source.to_string(),
        source: e,
    })?;

    let obj = json
        .as_object()
        .ok_or_else(|| LoadError::NotAnObject(source.to_string()))?;

    let mut settings = Settings::new();
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        match value {
            Value::String(text) => {
                settings.with_setting(key, text);
            }
            Value::Number(number) => {
                settings.with_setting(key, &number.to_string());
            }
            Value::Bool(flag) => {
                settings.with_setting(key, if *flag { "1" } else { "0" });
            }
            _ => warn!(%key, %source, "Setting is not a scalar, skipping"),
        }
    }

    Ok(settings)
}

/// Load the resolver configuration from a JSON file
///
/// Every field is optional; see [`ResolverConfig`] for the defaults.
pub fn load_config_from_file(path: &Path) -> LoadResult<ResolverConfig> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.display().to_string(),
        source,
    })
}
