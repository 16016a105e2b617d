//! Server configuration from environment variables and an optional TOML file.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Static bearer tokens mapped to roles.
///
/// Token issuance belongs to the platform's auth service; this backend
/// only needs to recognize tokens and their role. An empty list means no
/// caller holds that role.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthTokens {
    #[serde(default)]
    pub admin_tokens: Vec<String>,
    #[serde(default)]
    pub teacher_tokens: Vec<String>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bearer tokens recognized by the auth extractor
    #[serde(default)]
    pub auth: AuthTokens,
    /// Optional reference-data seed file loaded at startup
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            auth: AuthTokens::default(),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Create a server configuration from environment variables, starting
    /// from an optional TOML file.
    ///
    /// # Environment Variables
    /// - `CONFIG_FILE` (optional): TOML file with the same fields
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `ADMIN_TOKENS` (optional): comma-separated admin bearer tokens
    /// - `TEACHER_TOKENS` (optional): comma-separated teacher bearer tokens
    /// - `SEED_FILE` (optional): reference-data seed TOML
    ///
    /// Environment variables override file values.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed, or a
    /// variable has an invalid value.
    pub fn from_env() -> Result<Self, String> {
        let mut config = match env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(&PathBuf::from(path))?,
            Err(_) => Self::default(),
        };

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| "PORT must be a valid port number".to_string())?;
        }
        if let Ok(tokens) = env::var("ADMIN_TOKENS") {
            config.auth.admin_tokens = parse_token_list(&tokens);
        }
        if let Ok(tokens) = env::var("TEACHER_TOKENS") {
            config.auth.teacher_tokens = parse_token_list(&tokens);
        }
        if let Ok(path) = env::var("SEED_FILE") {
            config.seed_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config file {}: {}", path.display(), e))?;
        toml::from_str(&raw)
            .map_err(|e| format!("Invalid config file {}: {}", path.display(), e))
    }
}

fn parse_token_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
