//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        // Custom TOML is checked in init_custom; the default by build.rs.
        parse_settings_toml(active_toml())
            .expect("converter settings were validated before installation")
    })
}

/// The TOML `settings()` is built from: custom if installed, else the default.
fn active_toml() -> &'static str {
    CUSTOM_TOML
        .get()
        .map_or(DEFAULT_SETTINGS_TOML, String::as_str)
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub store: StoreSettings,
    #[serde(default)]
    pub parse: ParseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseSettings {
    /// Reject malformed numerals rather than returning a partial value.
    #[serde(default)]
    pub strict: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.store.file_name.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "store.file_name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
