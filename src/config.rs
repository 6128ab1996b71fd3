//! Catalog Configuration
//!
//! Settings baked into the bundle at build time.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Tiles per carousel row
pub const PAGE_SIZE: usize = 6;

/// Duration of the row slide transition, kept in sync with `styles.css`
pub const SLIDE_DURATION_MS: u32 = 2000;

/// Remote catalog settings provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub api_base: String,
    pub image_base: String,
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            api_key: None,
            language: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl CatalogConfig {
    /// Read `TMDB_*` and `CATALOG_LOG` from the build environment
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TMDB_API_BASE"),
            option_env!("TMDB_IMAGE_BASE"),
            option_env!("TMDB_API_KEY"),
            option_env!("TMDB_LANGUAGE"),
            option_env!("CATALOG_LOG"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        image_base: Option<&str>,
        api_key: Option<&str>,
        language: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: non_empty(api_base)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            image_base: non_empty(image_base)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.image_base),
            api_key: non_empty(api_key).map(str::to_string),
            language: non_empty(language).map(str::to_string),
            log_level: non_empty(log_level)
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = CatalogConfig::from_values(None, None, None, None, None);
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_values_trimmed_and_parsed() {
        let config = CatalogConfig::from_values(
            Some("http://localhost:9000/3/"),
            Some(" "),
            Some(" abc123 "),
            Some("ko-KR"),
            Some("debug"),
        );
        assert_eq!(config.api_base, "http://localhost:9000/3");
        assert_eq!(config.image_base, DEFAULT_IMAGE_BASE);
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.language.as_deref(), Some("ko-KR"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = CatalogConfig::from_values(None, None, None, None, Some("loud"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
