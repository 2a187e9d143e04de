use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clevio_core::AuthConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got `{value}`")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
    pub admin_email: String,
    pub admin_password: String,
    /// Salt mixed into the session token.
    pub auth_secret: String,
    /// External endpoint notified after every save.
    pub sync_webhook_url: Option<String>,
    pub content_path: PathBuf,
    pub template_path: PathBuf,
    /// Root of the theme's static files; `/assets` is served from here.
    pub public_dir: PathBuf,
    pub uploads_dir: PathBuf,
    /// Mark the session cookie `Secure`.
    pub secure_cookies: bool,
    /// Quiet period before a live preview re-renders.
    pub preview_settle: Duration,
    /// Content event channel capacity.
    pub event_bus_capacity: usize,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let text = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let public_dir = PathBuf::from(text("PUBLIC_DIR", "public"));
        let uploads_dir = var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| public_dir.join("uploads"));

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse(var("PORT"), "PORT", "a valid port", 3000)?,
            log_level: text("LOG_LEVEL", "info"),
            admin_email: text("ADMIN_EMAIL", "admin@clevio.id"),
            admin_password: text("ADMIN_PASSWORD", "clevio123"),
            auth_secret: text("AUTH_SECRET", "clevio-secret"),
            sync_webhook_url: var("SYNC_WEBHOOK_URL").or_else(|| var("N8N_SYNC_WEBHOOK")),
            content_path: PathBuf::from(text("CONTENT_PATH", "data/content.json")),
            template_path: PathBuf::from(text("TEMPLATE_PATH", "templates/home.html")),
            public_dir,
            uploads_dir,
            secure_cookies: parse_flag(var("SECURE_COOKIES"), "SECURE_COOKIES")?,
            preview_settle: Duration::from_millis(parse(
                var("PREVIEW_SETTLE_MS"),
                "PREVIEW_SETTLE_MS",
                "a number of milliseconds",
                200,
            )?),
            event_bus_capacity: parse(
                var("EVENT_BUS_CAPACITY"),
                "EVENT_BUS_CAPACITY",
                "a positive integer",
                64,
            )
            .and_then(|capacity: usize| {
                if capacity == 0 {
                    Err(ConfigError::Invalid {
                        name: "EVENT_BUS_CAPACITY",
                        expected: "a positive integer",
                        value: capacity.to_string(),
                    })
                } else {
                    Ok(capacity)
                }
            })?,
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            email: self.admin_email.clone(),
            password: self.admin_password.clone(),
            secret: self.auth_secret.clone(),
        }
    }
}

fn parse<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}

fn parse_flag(value: Option<String>, name: &'static str) -> Result<bool, ConfigError> {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(flag) => match flag.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                name,
                expected: "a boolean",
                value: flag,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.admin_email, "admin@clevio.id");
        assert_eq!(config.content_path, PathBuf::from("data/content.json"));
        assert_eq!(config.uploads_dir, PathBuf::from("public/uploads"));
        assert_eq!(config.preview_settle, Duration::from_millis(200));
        assert!(config.sync_webhook_url.is_none());
        assert!(!config.secure_cookies);
    }

    #[test]
    fn uploads_follow_public_dir() {
        let config = load(&[("PUBLIC_DIR", "/srv/site")]).unwrap();
        assert_eq!(config.uploads_dir, PathBuf::from("/srv/site/uploads"));
    }

    #[test]
    fn webhook_accepts_legacy_name() {
        let config = load(&[("N8N_SYNC_WEBHOOK", "http://hooks.local/sync")]).unwrap();
        assert_eq!(config.sync_webhook_url.as_deref(), Some("http://hooks.local/sync"));

        let config = load(&[
            ("SYNC_WEBHOOK_URL", "http://primary"),
            ("N8N_SYNC_WEBHOOK", "http://legacy"),
        ])
        .unwrap();
        assert_eq!(config.sync_webhook_url.as_deref(), Some("http://primary"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = load(&[("ADMIN_PASSWORD", "  "), ("SYNC_WEBHOOK_URL", "")]).unwrap();
        assert_eq!(config.admin_password, "clevio123");
        assert!(config.sync_webhook_url.is_none());
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(load(&[("SECURE_COOKIES", "maybe")]).is_err());
        assert!(load(&[("EVENT_BUS_CAPACITY", "0")]).is_err());
        assert!(load(&[("SECURE_COOKIES", "TRUE")]).unwrap().secure_cookies);
    }
}
