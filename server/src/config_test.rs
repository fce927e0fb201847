use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False", "OFF"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_everything_else() {
    for val in ["", "maybe", "2", "enabled"] {
        assert_eq!(parse_bool(val), None, "expected None for {val:?}");
    }
}

// =============================================================================
// ServerConfig::from_lookup
// =============================================================================

#[test]
fn missing_database_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingDatabaseUrl);
}

#[test]
fn blank_database_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingDatabaseUrl);
}

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let config = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/falco")])).unwrap();
    assert_eq!(
        config,
        ServerConfig {
            database_url: "postgres://localhost/falco".to_owned(),
            port: DEFAULT_PORT,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            cookie_secure: false,
        }
    );
}

#[test]
fn explicit_values_override_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/falco"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("COOKIE_SECURE", "yes"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert!(config.cookie_secure);
}

#[test]
fn invalid_port_is_reported_with_raw_value() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "http")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn unparseable_or_zero_pool_size_falls_back_to_default() {
    for raw in ["lots", "0", "-3"] {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("DB_MAX_CONNECTIONS", raw)]))
                .unwrap();
        assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS, "raw {raw:?}");
    }
}

#[test]
fn unrecognized_cookie_secure_means_insecure() {
    let config =
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("COOKIE_SECURE", "maybe")]))
            .unwrap();
    assert!(!config.cookie_secure);
}
