//! Build-time configuration.
//!
//! The client is a static bundle, so settings are baked in when it is built:
//!
//! - `SITE_FORMS_API_BASE_URL`: prefix for the form endpoints. Empty means
//!   the endpoints live on the page's own origin.
//! - `SITE_FORMS_LOG_LEVEL`: `off`, `error`, `warn`, `info`, `debug` or
//!   `trace`. Defaults to `info`.

use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SITE_FORMS_API_BASE_URL"),
            option_env!("SITE_FORMS_LOG_LEVEL"),
        )
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url: api_base_url
                .unwrap_or_default()
                .trim()
                .trim_end_matches('/')
                .to_string(),
            log_level,
        }
    }
}
