//! Console configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:4567/schedule/";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the schedule server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCHEDULE_CONSOLE")]
pub struct ConsoleSettings {
    /// Base URL that endpoint paths such as `board/alluser` are joined onto.
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl ConsoleSettings {
    /// Return the configured base URL, normalised to end with a slash.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when the configured value is not a URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        if raw.ends_with('/') {
            Url::parse(raw)
        } else {
            Url::parse(&format!("{raw}/"))
        }
    }

    /// Return the configured request timeout, falling back to the default.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for console configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ConsoleSettings {
        ConsoleSettings::load_from_iter([OsString::from("schedule-console")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SCHEDULE_CONSOLE_API_BASE_URL", None::<String>),
            ("SCHEDULE_CONSOLE_REQUEST_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("default url").as_str(),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(
            settings.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SCHEDULE_CONSOLE_API_BASE_URL",
                Some("https://schedule.example.com/api".to_owned()),
            ),
            ("SCHEDULE_CONSOLE_REQUEST_TIMEOUT_SECS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("configured url").as_str(),
            "https://schedule.example.com/api/"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    #[case::zero(Some(0))]
    #[case::missing(None)]
    fn unusable_timeouts_fall_back_to_the_default(#[case] secs: Option<u64>) {
        let settings = ConsoleSettings {
            api_base_url: None,
            request_timeout_secs: secs,
        };
        assert_eq!(
            settings.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[rstest]
    fn malformed_base_urls_are_reported() {
        let settings = ConsoleSettings {
            api_base_url: Some("not a url".to_owned()),
            request_timeout_secs: None,
        };
        assert!(settings.api_base_url().is_err());
    }
}
