//! Configuration loading from environment variables and TOML files.

mod support;

use std::io::Write;

use lectio::config::ServerConfig;

use support::with_scoped_env;

#[test]
fn test_defaults_without_env() {
    let config = with_scoped_env(
        &[
            ("HOST", None),
            ("PORT", None),
            ("CONFIG_FILE", None),
            ("ADMIN_TOKENS", None),
            ("TEACHER_TOKENS", None),
            ("SEED_FILE", None),
        ],
        || ServerConfig::from_env().unwrap(),
    );

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert!(config.auth.admin_tokens.is_empty());
    assert!(config.seed_file.is_none());
}

#[test]
fn test_env_overrides() {
    let config = with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("3000")),
            ("CONFIG_FILE", None),
            ("ADMIN_TOKENS", Some("root-token, other-admin")),
            ("TEACHER_TOKENS", Some("t-1")),
            ("SEED_FILE", Some("/tmp/seed.toml")),
        ],
        || ServerConfig::from_env().unwrap(),
    );

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert_eq!(config.auth.admin_tokens, vec!["root-token", "other-admin"]);
    assert_eq!(config.auth.teacher_tokens, vec!["t-1"]);
    assert_eq!(
        config.seed_file.as_deref(),
        Some(std::path::Path::new("/tmp/seed.toml"))
    );
}

#[test]
fn test_invalid_port_rejected() {
    let result = with_scoped_env(
        &[("PORT", Some("not-a-port")), ("CONFIG_FILE", None)],
        ServerConfig::from_env,
    );
    assert!(result.is_err());
}

#[test]
fn test_config_file_with_env_override() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(
        br#"
        host = "10.0.0.1"
        port = 9000

        [auth]
        admin_tokens = ["file-admin"]
        "#,
    )
    .expect("write config");
    let path = file.path().to_str().expect("utf8 path").to_string();

    let config = with_scoped_env(
        &[
            ("CONFIG_FILE", Some(path.as_str())),
            ("HOST", None),
            ("PORT", Some("9001")),
            ("ADMIN_TOKENS", None),
            ("TEACHER_TOKENS", None),
            ("SEED_FILE", None),
        ],
        || ServerConfig::from_env().unwrap(),
    );

    // File values hold unless an env var overrides them.
    assert_eq!(config.host, "10.0.0.1");
    assert_eq!(config.port, 9001);
    assert_eq!(config.auth.admin_tokens, vec!["file-admin"]);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = with_scoped_env(
        &[("CONFIG_FILE", Some("/nonexistent/lectio.toml"))],
        ServerConfig::from_env,
    );
    assert!(result.is_err());
}
