// XCompose Settings Module
// Optional user defaults for the command line tool

use std::path::{Path, PathBuf};

/// User defaults loaded from a TOML file (default: ~/.config/xcompose/settings.toml)
///
/// Every value is optional; command line flags take precedence over these,
/// and these take precedence over the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Draft file to read
    input: Option<PathBuf>,

    /// Transliteration table (JSON)
    translit: Option<PathBuf>,

    /// Directory holding per-locale Compose files
    system_compose_dir: Option<PathBuf>,

    /// Locale override for the system check
    locale: Option<String>,

    /// Treat collisions as failures
    strict: Option<bool>,

    /// Compare against the system Compose file
    system_check: Option<bool>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    paths: Option<PathSettings>,

    #[serde(default)]
    check: Option<CheckSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PathSettings {
    #[serde(default)]
    input: Option<PathBuf>,
    #[serde(default)]
    translit: Option<PathBuf>,
    #[serde(default)]
    system_compose_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct CheckSettings {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    strict: Option<toml::Value>,
    #[serde(default)]
    system_check: Option<toml::Value>,
}

impl Settings {
    /// Create empty settings (all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let parsed: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(paths) = parsed.paths {
            settings.input = paths.input;
            settings.translit = paths.translit;
            settings.system_compose_dir = paths.system_compose_dir;
        }

        if let Some(check) = parsed.check {
            settings.locale = check.locale.filter(|locale| !locale.is_empty());
            settings.strict = check.strict.as_ref().map(parse_bool_value).transpose()?;
            settings.system_check = check
                .system_check
                .as_ref()
                .map(parse_bool_value)
                .transpose()?;
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("xcompose").join("settings.toml"))
    }

    /// Load from default location (~/.config/xcompose/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                log::debug!("loading settings from {}", path.display());
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn translit(&self) -> Option<&Path> {
        self.translit.as_deref()
    }

    pub fn system_compose_dir(&self) -> Option<&Path> {
        self.system_compose_dir.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Strict mode, off unless configured
    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// System collision check, on unless configured
    pub fn system_check(&self) -> bool {
        self.system_check.unwrap_or(true)
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(settings.input(), None);
        assert!(!settings.strict());
        assert!(settings.system_check());
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[paths]
input = "drafts/XCompose-draft"
translit = "maps/ru.json"
system_compose_dir = "/opt/X11/locale"

[check]
locale = "ru_RU.UTF-8"
strict = true
system_check = false
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.input(), Some(Path::new("drafts/XCompose-draft")));
        assert_eq!(settings.translit(), Some(Path::new("maps/ru.json")));
        assert_eq!(settings.system_compose_dir(), Some(Path::new("/opt/X11/locale")));
        assert_eq!(settings.locale(), Some("ru_RU.UTF-8"));
        assert!(settings.strict());
        assert!(!settings.system_check());
    }

    #[test]
    fn test_settings_with_string_values() {
        let toml = r#"
[check]
strict = "yes"
system_check = "off"
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert!(settings.strict());
        assert!(!settings.system_check());
    }

    #[test]
    fn test_invalid_bool() {
        let result = Settings::from_toml("[check]\nstrict = \"maybe\"\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = Settings::from_toml("[check]\nverbose = true\n");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[check]\nlocale = \"de_DE.UTF-8\"\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.locale(), Some("de_DE.UTF-8"));
    }
}
