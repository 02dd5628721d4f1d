//! Configuration file management for metar-decode.
//!
//! Reads/writes `~/.metar-decode/config.yaml` with output and batch-decode
//! settings used by the `metar` CLI.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::types::MetarError;

/// Full configuration structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub output: OutputConfig,
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Summary,
}

impl FromStr for OutputFormat {
    type Err = MetarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            other => Err(MetarError::Config(format!("unknown output format: {other}"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Summary => write!(f, "summary"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodeConfig {
    /// Keep going past reports that fail to decode.
    pub skip_invalid: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        DecodeConfig { skip_invalid: true }
    }
}

/// Get the config directory path (`~/.metar-decode/`).
pub fn config_dir() -> PathBuf {
    dirs_home().join(".metar-decode")
}

/// Get the config file path.
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Load config from `~/.metar-decode/config.yaml`.
///
/// Returns default config if file doesn't exist.
pub fn load_config() -> Config {
    let path = config_file();
    if !path.exists() {
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(text) => parse_config(&text),
        Err(e) => {
            log::warn!("could not read {}: {e}", path.display());
            Config::default()
        }
    }
}

/// Save config to `~/.metar-decode/config.yaml`.
pub fn save_config(config: &Config) -> Result<PathBuf, MetarError> {
    let path = config_file();
    save_config_to(&path, config)?;
    Ok(path)
}

/// Write config to `path`, creating its parent directory.
pub fn save_config_to(path: &Path, config: &Config) -> Result<(), MetarError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, serialize_config(config))?;
    Ok(())
}

/// Parse simple YAML-like config text. Unknown keys and bad values keep
/// their defaults.
pub fn parse_config(text: &str) -> Config {
    let mut config = Config::default();
    let mut current_section: Option<&str> = None;

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let is_indented = line.starts_with("  ") || line.starts_with('\t');

        let Some((key, val)) = stripped.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let val = strip_comment(val.trim());

        if !is_indented {
            current_section = val.is_empty().then_some(key);
            continue;
        }

        match (current_section, key) {
            (Some("output"), "format") => {
                if let Some(v) = parse_string_value(val) {
                    match v.parse() {
                        Ok(format) => config.output.format = format,
                        Err(e) => log::warn!("{e}"),
                    }
                }
            }
            (Some("output"), "pretty") => {
                if let Some(v) = parse_bool_value(val) {
                    config.output.pretty = v;
                }
            }
            (Some("decode"), "skip_invalid") => {
                if let Some(v) = parse_bool_value(val) {
                    config.decode.skip_invalid = v;
                }
            }
            _ => log::debug!("ignoring config key {key}"),
        }
    }

    config
}

fn strip_comment(val: &str) -> &str {
    if val.starts_with('"') || val.starts_with('\'') {
        return val;
    }
    val.split_once(" #").map_or(val, |(v, _)| v.trim_end())
}

fn parse_string_value(val: &str) -> Option<String> {
    if val == "null" || val == "~" || val.is_empty() {
        return None;
    }
    // Strip quotes
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        return Some(val[1..val.len() - 1].to_string());
    }
    Some(val.to_string())
}

fn parse_bool_value(val: &str) -> Option<bool> {
    match val {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Serialize config to YAML-like text.
pub fn serialize_config(config: &Config) -> String {
    let lines = [
        "# metar-decode configuration".to_string(),
        String::new(),
        "output:".into(),
        format!("  format: \"{}\"", config.output.format),
        format!("  pretty: {}", config.output.pretty),
        String::new(),
        "decode:".into(),
        format!("  skip_invalid: {}", config.decode.skip_invalid),
    ];

    lines.join("\n") + "\n"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
        assert!(config.decode.skip_invalid);
    }

    #[test]
    fn test_parse_config() {
        let text = r#"
output:
  format: "summary"
  pretty: true   # indent JSON

decode:
  skip_invalid: false
"#;
        let config = parse_config(text);
        assert_eq!(config.output.format, OutputFormat::Summary);
        assert!(config.output.pretty);
        assert!(!config.decode.skip_invalid);
    }

    #[test]
    fn test_parse_config_bad_values_keep_defaults() {
        let text = r#"
output:
  format: xml
  pretty: maybe
decode:
  skip_invalid: ~
unknown:
  key: 1
"#;
        assert_eq!(parse_config(text), Config::default());
    }

    #[test]
    fn test_keys_outside_section_ignored() {
        let text = "pretty: true\nformat: summary\n";
        assert_eq!(parse_config(text), Config::default());
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            output: OutputConfig {
                format: OutputFormat::Summary,
                pretty: true,
            },
            decode: DecodeConfig {
                skip_invalid: false,
            },
        };
        let parsed = parse_config(&serialize_config(&config));
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_config_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            output: OutputConfig {
                format: OutputFormat::Summary,
                pretty: false,
            },
            ..Config::default()
        };
        save_config_to(&path, &config).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_config(&text), config);
    }

    #[test]
    fn test_save_config_io_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().join("config.yaml");
        assert!(matches!(
            save_config_to(&path, &Config::default()),
            Err(MetarError::Io(_))
        ));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(MetarError::Config(_))
        ));
    }
}
