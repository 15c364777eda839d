use crate::error::{config_error, GroupResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;

/// Event-type keywords recognised as title prefixes, in priority order
pub const DEFAULT_EVENT_TYPE_KEYWORDS: [&str; 7] = [
    "rehearsal",
    "performance",
    "concert",
    "dress",
    "soundcheck",
    "setup",
    "teardown",
];

/// Minimum similarity score for two titles to belong to the same group
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Default timezone for rendering dates
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Default locale for user-facing output
pub const DEFAULT_LOCALE: &str = "en";

/// Default location of the optional grouping config file
pub const DEFAULT_GROUPING_CONFIG_PATH: &str = "config/grouping.toml";

/// Keyword table and threshold used by the grouping engine
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingConfig {
    keywords: Vec<String>,
    similarity_threshold: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_EVENT_TYPE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl GroupingConfig {
    /// Build a validated config. Keywords are trimmed and lower-cased, empty
    /// entries are dropped; list order is kept as the match priority.
    pub fn new<I, S>(keywords: I, similarity_threshold: f64) -> GroupResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(config_error("At least one event-type keyword is required"));
        }

        if !(0.0..=1.0).contains(&similarity_threshold) {
            return Err(config_error(&format!(
                "Similarity threshold must be between 0 and 1, got {}",
                similarity_threshold
            )));
        }

        Ok(Self {
            keywords,
            similarity_threshold,
        })
    }

    /// Event-type keywords, lower-cased, in priority order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }
}

/// Optional overrides read from the grouping TOML file
#[derive(Debug, Default, Deserialize)]
struct GroupingFile {
    keywords: Option<Vec<String>>,
    similarity_threshold: Option<f64>,
}

/// Main configuration structure for the command-line front end
#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone used when rendering dates and bucketing by month
    pub timezone: String,
    /// Locale for user-facing output
    pub locale: String,
    /// Group each calendar month separately
    pub group_by_month: bool,
    /// Grouping engine configuration
    pub grouping: GroupingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            group_by_month: false,
            grouping: GroupingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> GroupResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let file_content = read_grouping_file(env::var("GROUPING_CONFIG_PATH").ok().as_deref())?;

        Self::from_sources(|key| env::var(key).ok(), file_content.as_deref())
    }

    /// Build a config from an environment lookup and optional TOML content.
    /// Environment values take precedence over the file.
    pub fn from_sources<F>(lookup: F, file_content: Option<&str>) -> GroupResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: GroupingFile = match file_content {
            Some(content) => toml::from_str(content)?,
            None => GroupingFile::default(),
        };

        let timezone = lookup("TIMEZONE").unwrap_or_else(|| String::from(DEFAULT_TIMEZONE));
        let locale = lookup("LOCALE").unwrap_or_else(|| String::from(DEFAULT_LOCALE));

        let group_by_month = match lookup("GROUP_BY_MONTH") {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                config_error(&format!("Invalid GROUP_BY_MONTH value: {}", value))
            })?,
            None => false,
        };

        let similarity_threshold = match lookup("GROUPING_THRESHOLD") {
            Some(value) => value
                .trim()
                .parse::<f64>()
                .map_err(|_| config_error(&format!("Invalid GROUPING_THRESHOLD value: {}", value)))?,
            None => file
                .similarity_threshold
                .unwrap_or(DEFAULT_SIMILARITY_THRESHOLD),
        };

        let keywords: Vec<String> = match lookup("GROUPING_KEYWORDS") {
            Some(value) => value.split(',').map(|k| k.to_string()).collect(),
            None => file.keywords.unwrap_or_else(|| {
                DEFAULT_EVENT_TYPE_KEYWORDS
                    .iter()
                    .map(|k| k.to_string())
                    .collect()
            }),
        };

        Ok(Config {
            timezone,
            locale,
            group_by_month,
            grouping: GroupingConfig::new(keywords, similarity_threshold)?,
        })
    }
}

/// Read the grouping config file. A missing file is fine at the default
/// location, but a path given explicitly has to be readable.
fn read_grouping_file(explicit_path: Option<&str>) -> GroupResult<Option<String>> {
    let content = match explicit_path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                config_error(&format!("Failed to read grouping config {}: {}", path, e))
            })?;
            tracing::debug!("Read grouping config from {}", path);
            Some(content)
        }
        None => fs::read_to_string(DEFAULT_GROUPING_CONFIG_PATH).ok(),
    };

    Ok(content)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_grouping_config() {
        let config = GroupingConfig::default();
        assert_eq!(config.keywords().len(), 7);
        assert_eq!(config.keywords()[0], "rehearsal");
        assert_eq!(config.keywords()[6], "teardown");
        assert_eq!(config.similarity_threshold(), 0.6);
    }

    #[test]
    fn test_grouping_config_normalizes_keywords() {
        let config = GroupingConfig::new([" Warmup ", "", "GIG"], 0.5).unwrap();
        assert_eq!(config.keywords(), &["warmup".to_string(), "gig".to_string()]);
    }

    #[test]
    fn test_grouping_config_rejects_invalid_values() {
        assert!(GroupingConfig::new(Vec::<String>::new(), 0.6).is_err());
        assert!(GroupingConfig::new(["  "], 0.6).is_err());
        assert!(GroupingConfig::new(["gig"], 1.5).is_err());
        assert!(GroupingConfig::new(["gig"], -0.1).is_err());
        assert!(GroupingConfig::new(["gig"], f64::NAN).is_err());
        assert!(GroupingConfig::new(["gig"], 0.0).is_ok());
        assert!(GroupingConfig::new(["gig"], 1.0).is_ok());
    }

    #[test]
    fn test_config_defaults_without_sources() {
        let config = Config::from_sources(lookup_from(&[]), None).unwrap();
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.locale, "en");
        assert!(!config.group_by_month);
        assert_eq!(config.grouping, GroupingConfig::default());
    }

    #[test]
    fn test_config_file_values() {
        let content = r#"
            keywords = ["warmup", "show"]
            similarity_threshold = 0.75
        "#;
        let config = Config::from_sources(lookup_from(&[]), Some(content)).unwrap();
        assert_eq!(config.grouping.keywords(), &["warmup".to_string(), "show".to_string()]);
        assert_eq!(config.grouping.similarity_threshold(), 0.75);
    }

    #[test]
    fn test_env_overrides_file() {
        let content = "similarity_threshold = 0.75\nkeywords = [\"show\"]";
        let env = lookup_from(&[
            ("GROUPING_THRESHOLD", "0.5"),
            ("GROUPING_KEYWORDS", "Gig, Jam"),
            ("TIMEZONE", "Europe/Helsinki"),
            ("GROUP_BY_MONTH", "yes"),
            ("LOCALE", "fi"),
        ]);
        let config = Config::from_sources(env, Some(content)).unwrap();
        assert_eq!(config.grouping.similarity_threshold(), 0.5);
        assert_eq!(config.grouping.keywords(), &["gig".to_string(), "jam".to_string()]);
        assert_eq!(config.timezone, "Europe/Helsinki");
        assert_eq!(config.locale, "fi");
        assert!(config.group_by_month);
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let missing = std::env::temp_dir().join("opus-sync-missing-grouping.toml");
        assert!(read_grouping_file(missing.to_str()).is_err());
    }

    #[test]
    fn test_explicit_config_path_is_read() {
        let path = std::env::temp_dir()
            .join(format!("opus-sync-grouping-{}.toml", std::process::id()));
        fs::write(&path, "similarity_threshold = 0.7").unwrap();

        let content = read_grouping_file(path.to_str()).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(content.as_deref(), Some("similarity_threshold = 0.7"));
    }

    #[test]
    fn test_default_config_path_may_be_missing() {
        // Whether or not config/grouping.toml exists, the default path never errors
        assert!(read_grouping_file(None).is_ok());
    }

    #[test]
    fn test_invalid_sources_are_errors() {
        assert!(Config::from_sources(lookup_from(&[("GROUPING_THRESHOLD", "high")]), None).is_err());
        assert!(Config::from_sources(lookup_from(&[("GROUP_BY_MONTH", "maybe")]), None).is_err());
        assert!(Config::from_sources(lookup_from(&[]), Some("keywords = 3")).is_err());
    }
}
