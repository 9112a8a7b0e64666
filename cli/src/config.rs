use crate::engine::Calculator;
use crate::format::{NumberFormat, MAX_FRACTION_DIGITS};
use log::warn;
use serde::{Deserialize, Serialize};

/// File the CLI reads when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "voicecalc.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Filter directive for the log subscriber, e.g. "debug" or "voicecalc=trace"
    #[serde(default)]
    pub log_level: Option<String>,

    // How numeric results are rendered
    #[serde(default)]
    pub format: NumberFormat,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    // Print serialized results instead of "parsed = result" lines
    #[serde(default)]
    pub json: bool,
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number format with out-of-range settings pulled back into range
    pub fn number_format(&self) -> NumberFormat {
        let mut format = self.format.clone();
        if format.max_fraction_digits > MAX_FRACTION_DIGITS {
            warn!(
                "max_fraction_digits = {} is above {}, clamping",
                format.max_fraction_digits, MAX_FRACTION_DIGITS
            );
            format.max_fraction_digits = MAX_FRACTION_DIGITS;
        }
        format
    }

    pub fn calculator(&self) -> Calculator {
        Calculator::with_format(self.number_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_defaults() {
        let config = Config::empty();
        assert_eq!(config.log_level, None);
        assert_eq!(config.format, NumberFormat::default());
        assert!(!config.output.json);
    }

    #[test]
    fn test_load_from_str() {
        let config = Config::load_from_str(
            r#"
log_level = "debug"

[format]
group_separator = " "
max_fraction_digits = 3

[output]
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.format.group_separator, " ");
        assert_eq!(config.format.decimal_separator, ".");
        assert_eq!(config.format.max_fraction_digits, 3);
        assert!(config.output.json);

        let result = config.calculator().process("1000 divided by 3");
        assert_eq!(result.result, "333.333");
        let result = config.calculator().process("2000 times 3");
        assert_eq!(result.result, "6 000");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::load_from_str("[output]\njson = true\n").unwrap();
        assert!(config.output.json);
        assert_eq!(config.format, NumberFormat::default());
    }

    #[test]
    fn test_fraction_digits_are_clamped() {
        let config = Config::load_from_str("[format]\nmax_fraction_digits = 99\n").unwrap();
        assert_eq!(config.number_format().max_fraction_digits, MAX_FRACTION_DIGITS);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::load_from_str("format = 3").is_err());
        assert!(Config::load_from_str("[format\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from_file("/nonexistent/voicecalc.toml").is_err());
    }
}
