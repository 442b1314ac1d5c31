//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `API_TOKEN` - Shared secret expected in the `Authorization: Bearer`
//!   header (or the `X-API-TOKEN` fallback header). When unset, a built-in
//!   development token is used and a warning is logged at startup.
//! - `DOCS_PATH_PREFIX` - Path prefix exempt from authentication
//!   (default: `/swagger`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Token used when `API_TOKEN` is not configured. A development-only
/// affordance so the service runs out of the box; never rely on it in a
/// deployed environment.
pub const DEV_DEFAULT_TOKEN: &str = "techhive-dev-token";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Expected API token, compared byte-for-byte against presented tokens.
    pub api_token: String,
    /// Requests whose path starts with this prefix bypass authentication.
    pub docs_path_prefix: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let api_token = match env::var("API_TOKEN") {
            Ok(token) => token,
            Err(_) => {
                tracing::warn!(
                    "API_TOKEN not set; falling back to the built-in development token"
                );
                DEV_DEFAULT_TOKEN.to_string()
            }
        };

        let docs_path_prefix =
            env::var("DOCS_PATH_PREFIX").unwrap_or_else(|_| "/swagger".to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            api_token,
            docs_path_prefix,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `api_token` is empty
    /// - `docs_path_prefix` does not start with `/`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.api_token.is_empty() {
            anyhow::bail!("API_TOKEN must not be empty");
        }

        if !self.docs_path_prefix.starts_with('/') {
            anyhow::bail!(
                "DOCS_PATH_PREFIX must start with '/', got '{}'",
                self.docs_path_prefix
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  API token: {}", mask_token(&self.api_token));
        tracing::info!("  Docs path prefix: {}", self.docs_path_prefix);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a token for logging, keeping only a short prefix.
///
/// - `techhive-dev-token` → `tech***`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    if token.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", token.chars().take(4).collect::<String>())
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("techhive-dev-token"), "tech***");
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            api_token: "test-token".to_string(),
            docs_path_prefix: "/swagger".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Empty token
        config.api_token = String::new();
        assert!(config.validate().is_err());

        config.api_token = "test-token".to_string();

        // Docs prefix must be absolute
        config.docs_path_prefix = "swagger".to_string();
        assert!(config.validate().is_err());

        config.docs_path_prefix = "/swagger".to_string();

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_default_token_fallback() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("API_TOKEN");
        }

        let config = Config::from_env();
        assert_eq!(config.api_token, DEV_DEFAULT_TOKEN);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("API_TOKEN", "secret-from-env");
            env::set_var("DOCS_PATH_PREFIX", "/docs");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.api_token, "secret-from-env");
        assert_eq!(config.docs_path_prefix, "/docs");

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("API_TOKEN");
            env::remove_var("DOCS_PATH_PREFIX");
        }
    }
}
