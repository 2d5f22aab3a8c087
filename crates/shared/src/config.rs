//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote spreadsheet configuration.
    pub sheet: SheetConfig,
    /// Replay token configuration.
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Remote spreadsheet API configuration.
///
/// The four identifiers without defaults are required; a missing one fails
/// [`AppConfig::load`] at startup.
#[derive(Clone, Deserialize)]
pub struct SheetConfig {
    /// Bearer token sent in the `Authorization` header.
    pub token: String,
    /// Project identifier.
    pub project: String,
    /// Tab holding the expense rows.
    pub tab: String,
    /// Owner/user identifier.
    pub user: String,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Tab receiving published summaries.
    #[serde(default = "default_summaries_tab")]
    pub summaries_tab: String,
}

impl std::fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetConfig")
            .field("token", &"[hidden]")
            .field("project", &self.project)
            .field("tab", &self.tab)
            .field("user", &self.user)
            .field("base_url", &self.base_url)
            .field("summaries_tab", &self.summaries_tab)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.sheety.co".to_string()
}

fn default_summaries_tab() -> String {
    "summaries".to_string()
}

impl SheetConfig {
    /// Builds the endpoint URL for a tab: `{base_url}/{user}/{project}/{tab}`.
    #[must_use]
    pub fn endpoint(&self, tab: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.user,
            self.project,
            tab
        )
    }

    /// Value for the `Authorization` header.
    ///
    /// Tokens that already carry a scheme (`Bearer abc`, `Basic abc`) are sent as-is.
    #[must_use]
    pub fn authorization(&self) -> String {
        let token = self.token.trim();
        if token.contains(' ') {
            token.to_string()
        } else {
            format!("Bearer {token}")
        }
    }
}

/// Replay token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayConfig {
    /// Secret used to sign report summaries. A random one is generated when unset.
    #[serde(default)]
    pub secret: Option<String>,
    /// How long a rendered report can be saved, in minutes.
    #[serde(default = "default_replay_ttl")]
    pub ttl_minutes: i64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_minutes: default_replay_ttl(),
        }
    }
}

/// Longest accepted replay token lifetime: one year.
pub const MAX_REPLAY_TTL_MINUTES: i64 = 60 * 24 * 365;

fn default_replay_ttl() -> i64 {
    1440 // 24 hours
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Environment variables use the `TALLY` prefix and `__` as separator,
    /// e.g. `TALLY__SHEET__TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a required value is missing.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects blank values for the required sheet identifiers and a replay
    /// lifetime outside `1..=MAX_REPLAY_TTL_MINUTES`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first invalid field.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let required = [
            ("sheet.token", &self.sheet.token),
            ("sheet.project", &self.sheet.project),
            ("sheet.tab", &self.sheet.tab),
            ("sheet.user", &self.sheet.user),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "required configuration value `{key}` is empty"
                )));
            }
        }

        if !(1..=MAX_REPLAY_TTL_MINUTES).contains(&self.replay.ttl_minutes) {
            return Err(config::ConfigError::Message(format!(
                "replay.ttl_minutes must be between 1 and {MAX_REPLAY_TTL_MINUTES}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sheet() -> SheetConfig {
        SheetConfig {
            token: "secret".to_string(),
            project: "expenses".to_string(),
            tab: "sheet1".to_string(),
            user: "abc123".to_string(),
            base_url: default_base_url(),
            summaries_tab: default_summaries_tab(),
        }
    }

    const REQUIRED: [&str; 4] = [
        "TALLY__SHEET__TOKEN",
        "TALLY__SHEET__PROJECT",
        "TALLY__SHEET__TAB",
        "TALLY__SHEET__USER",
    ];

    #[test]
    fn test_endpoint_assembles_path() {
        assert_eq!(
            sheet().endpoint("sheet1"),
            "https://api.sheety.co/abc123/expenses/sheet1"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let mut config = sheet();
        config.base_url = "http://localhost:9000/".to_string();
        assert_eq!(
            config.endpoint("summaries"),
            "http://localhost:9000/abc123/expenses/summaries"
        );
    }

    #[test]
    fn test_authorization_adds_bearer_scheme() {
        assert_eq!(sheet().authorization(), "Bearer secret");

        let mut config = sheet();
        config.token = "Basic dXNlcjpwYXNz".to_string();
        assert_eq!(config.authorization(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", sheet());
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[hidden]"));
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                (REQUIRED[0], Some("token")),
                (REQUIRED[1], Some("project")),
                (REQUIRED[2], Some("tab")),
                (REQUIRED[3], Some("user")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.sheet.token, "token");
                assert_eq!(config.sheet.project, "project");
                assert_eq!(config.sheet.tab, "tab");
                assert_eq!(config.sheet.user, "user");
                assert_eq!(config.sheet.summaries_tab, "summaries");
                assert_eq!(config.server.port, 5000);
                assert_eq!(config.replay.ttl_minutes, 1440);
                assert!(config.replay.secret.is_none());
            },
        );
    }

    #[test]
    fn test_load_fails_without_required_value() {
        temp_env::with_vars(
            [
                (REQUIRED[0], Some("token")),
                (REQUIRED[1], Some("project")),
                (REQUIRED[2], Some("tab")),
                (REQUIRED[3], None),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_validate_rejects_blank_value() {
        let config = AppConfig {
            server: ServerConfig::default(),
            sheet: SheetConfig {
                project: "  ".to_string(),
                ..sheet()
            },
            replay: ReplayConfig::default(),
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sheet.project"));
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[case(MAX_REPLAY_TTL_MINUTES + 1)]
    #[case(i64::MAX)]
    fn test_validate_rejects_out_of_range_ttl(#[case] ttl_minutes: i64) {
        let config = AppConfig {
            server: ServerConfig::default(),
            sheet: sheet(),
            replay: ReplayConfig {
                secret: None,
                ttl_minutes,
            },
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("replay.ttl_minutes"));
    }

    #[test]
    fn test_validate_accepts_longest_ttl() {
        let config = AppConfig {
            server: ServerConfig::default(),
            sheet: sheet(),
            replay: ReplayConfig {
                secret: None,
                ttl_minutes: MAX_REPLAY_TTL_MINUTES,
            },
        };

        assert!(config.validate().is_ok());
    }
}
