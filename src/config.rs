//! Environment configuration. The store connection URL and database name are
//! required; the process refuses to start without them.

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    /// Origins permitted by the CORS layer. `*` means all origins.
    pub cors_origins: Vec<String>,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            mongo_url: required("MONGO_URL")?,
            db_name: required("DB_NAME")?,
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name.to_string()))
}

/// Comma-separated origin list; entries are trimmed, empties dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origin() {
        assert_eq!(parse_origins("*"), vec!["*"]);
    }

    #[test]
    fn origin_list_is_trimmed() {
        assert_eq!(
            parse_origins("https://autosouk.ma, https://www.autosouk.ma"),
            vec!["https://autosouk.ma", "https://www.autosouk.ma"]
        );
    }

    #[test]
    fn empty_entries_are_dropped() {
        assert_eq!(parse_origins("https://autosouk.ma,,"), vec!["https://autosouk.ma"]);
    }
}
