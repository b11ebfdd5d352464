use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_PUBLIC_URL: &str = "https://your-bot-url.com";
pub const DEFAULT_SUPPORT_CONTACT: &str = "@ZeRunart_1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Process configuration, built once in `main` and handed to every component.
#[derive(Clone, Deserialize)]
pub struct BotConfig {
    pub bot_token: String,
    pub liqpay_public_key: String,
    pub liqpay_private_key: String,
    #[serde(default = "default_port")]
    pub listen_port: u16,
    #[serde(default = "default_public_url")]
    pub public_url: String,
    #[serde(default = "default_support_contact")]
    pub support_contact: String,
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_public_url() -> String {
    DEFAULT_PUBLIC_URL.to_string()
}

fn default_support_contact() -> String {
    DEFAULT_SUPPORT_CONTACT.to_string()
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("liqpay_public_key", &self.liqpay_public_key)
            .field("liqpay_private_key", &"<redacted>")
            .field("listen_port", &self.listen_port)
            .field("public_url", &self.public_url)
            .field("support_contact", &self.support_contact)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl BotConfig {
    /// Load from a TOML file when given, otherwise from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_lookup(|key| std::env::var(key).ok()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(contents)?;
        config.public_url = normalize_url(&config.public_url);
        Ok(config)
    }

    /// Build from `KEY -> value` lookups (`std::env::var` in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let listen_port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bot_token: required("TOKEN")?,
            liqpay_public_key: required("LIQPAY_PUBLIC_KEY")?,
            liqpay_private_key: required("LIQPAY_PRIVATE_KEY")?,
            listen_port,
            public_url: normalize_url(
                &lookup("PUBLIC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string()),
            ),
            support_contact: lookup("SUPPORT_CONTACT")
                .unwrap_or_else(|| DEFAULT_SUPPORT_CONTACT.to_string()),
            log_dir: lookup("LOG_DIR").filter(|v| !v.trim().is_empty()),
        })
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
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

    const REQUIRED: [(&str, &str); 3] = [
        ("TOKEN", "123:abc"),
        ("LIQPAY_PUBLIC_KEY", "public"),
        ("LIQPAY_PRIVATE_KEY", "private"),
    ];

    #[test]
    fn defaults_apply_when_optional_vars_absent() {
        let config = BotConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(config.listen_port, 8000);
        assert_eq!(config.public_url, "https://your-bot-url.com");
        assert_eq!(config.support_contact, "@ZeRunart_1");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = BotConfig::from_lookup(lookup_from(&REQUIRED[1..])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TOKEN")));
    }

    #[test]
    fn blank_private_key_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs[2] = ("LIQPAY_PRIVATE_KEY", "  ");
        let err = BotConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("LIQPAY_PRIVATE_KEY")));
    }

    #[test]
    fn port_and_public_url_are_parsed() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "9090"));
        pairs.push(("PUBLIC_URL", "https://boost.example.com/"));
        let config = BotConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.listen_port, 9090);
        assert_eq!(config.public_url, "https://boost.example.com");
    }

    #[test]
    fn invalid_port_is_rejected() {
        for bad in ["abc", "0", "70000"] {
            let mut pairs = REQUIRED.to_vec();
            pairs.push(("PORT", bad));
            let err = BotConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPort(_)), "{bad}");
        }
    }

    #[test]
    fn toml_file_uses_same_defaults() {
        let config = BotConfig::from_toml(
            r#"
            bot_token = "123:abc"
            liqpay_public_key = "public"
            liqpay_private_key = "private"
            public_url = "https://boost.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.listen_port, 8000);
        assert_eq!(config.public_url, "https://boost.example.com");
        assert_eq!(config.support_contact, "@ZeRunart_1");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = BotConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("123:abc"));
        assert!(!rendered.contains("private\""));
    }
}
