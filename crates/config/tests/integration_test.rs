//! Integration tests for layering environment and explicit settings.

use std::time::Duration;

use secrecy::ExposeSecret;
use serial_test::serial;
use splunk_search_config::{ConfigError, ConnectionSettings, settings_from_env};

const CLEAN_ENV: [(&str, Option<&str>); 6] = [
    ("SPLUNK_HOST", None),
    ("SPLUNK_PORT", None),
    ("SPLUNK_TOKEN", None),
    ("SPLUNK_SCHEME", None),
    ("SPLUNK_SKIP_VERIFY", None),
    ("SPLUNK_TIMEOUT", None),
];

#[test]
#[serial]
fn test_env_then_overrides_resolve() {
    temp_env::with_vars(CLEAN_ENV, || {
        temp_env::with_vars(
            [
                ("SPLUNK_HOST", Some(" splunk.example.com ")),
                ("SPLUNK_TOKEN", Some("env-token")),
                ("SPLUNK_TIMEOUT", Some("10")),
            ],
            || {
                let mut settings = settings_from_env().unwrap();
                let updated = settings.merge(ConnectionSettings::default().with_port(9089));
                assert_eq!(updated, vec!["port"]);

                let config = settings.resolve().unwrap();
                assert_eq!(config.base_url, "https://splunk.example.com:9089");
                assert_eq!(config.token.expose_secret(), "env-token");
                assert_eq!(config.timeout, Some(Duration::from_secs(10)));
                assert!(!config.skip_verify);
            },
        );
    });
}

#[test]
#[serial]
fn test_empty_environment_reports_both_required_keys() {
    temp_env::with_vars(CLEAN_ENV, || {
        let settings = settings_from_env().unwrap();
        assert!(settings.is_empty());

        match settings.resolve() {
            Err(ConfigError::MissingSettings(keys)) => assert_eq!(keys, vec!["host", "token"]),
            other => panic!("expected MissingSettings, got {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_blank_environment_values_are_unset() {
    temp_env::with_vars(
        [
            ("SPLUNK_HOST", Some("   ")),
            ("SPLUNK_PORT", Some("")),
            ("SPLUNK_TOKEN", Some("\t")),
            ("SPLUNK_SCHEME", None),
            ("SPLUNK_SKIP_VERIFY", None),
            ("SPLUNK_TIMEOUT", None),
        ],
        || {
            assert!(settings_from_env().unwrap().is_empty());
        },
    );
}
