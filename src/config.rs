//! Page Configuration
//!
//! Values are baked in at build time; the page has no runtime environment.

use log::LevelFilter;

use crate::validation::{NameRules, DEFAULT_FORBIDDEN, DEFAULT_MAX_LEN};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Endpoint root, e.g. `https://api.example.com`
    pub api_base: String,
    pub rules: NameRules,
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            rules: NameRules::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl PageConfig {
    /// Read `API_BASE_URL`, `MAX_NAME_LEN`, `FORBIDDEN_WORDS` and `LOG_LEVEL`
    /// as set when the page was built
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("MAX_NAME_LEN"),
            option_env!("FORBIDDEN_WORDS"),
        )
        .with_log_level(option_env!("LOG_LEVEL"))
    }

    pub fn from_values(api_base: Option<&str>, max_len: Option<&str>, forbidden: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        let max_len = max_len
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_LEN);

        let forbidden = forbidden
            .map(parse_word_list)
            .filter(|words| !words.is_empty())
            .unwrap_or_else(|| DEFAULT_FORBIDDEN.iter().map(|w| w.to_string()).collect());

        Self {
            api_base,
            rules: NameRules { max_len, forbidden },
            log_level: LevelFilter::Info,
        }
    }

    /// Override the log level; unknown names keep the current one
    pub fn with_log_level(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level.and_then(|s| s.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }

    /// Full URL of the items collection
    pub fn items_url(&self) -> String {
        format!("{}/items", self.api_base.trim_end_matches('/'))
    }
}

/// Split a comma-separated list, dropping blank entries
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
