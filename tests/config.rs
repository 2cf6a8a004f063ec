// ABOUTME: Integration tests for configuration parsing and validation.
// ABOUTME: Tests YAML parsing, discovery, TNTBOX_CONFIG and env-backed credentials.

use std::fs;
use std::time::Duration;
use tntbox::config::*;
use tntbox::error::Error;

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
timeout: 1m 30s
default_user: admin
credentials:
  admin: "letmein"
  replicator:
    env: REPL_PASSWORD
    default: "repl"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.default_user.unwrap().as_str(), "admin");
        assert_eq!(config.credentials.len(), 2);
        assert_eq!(
            config.credentials.get("admin"),
            Some(&EnvValue::Literal("letmein".to_string()))
        );
    }

    #[test]
    fn everything_is_optional() {
        let config = Config::from_yaml("{}").unwrap();
        assert!(config.timeout.is_none());
        assert!(config.default_user.is_none());
        assert!(config.credentials.is_empty());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::from_yaml("timeout: 0s").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn invalid_default_user_is_rejected() {
        assert!(Config::from_yaml("default_user: \"\"").is_err());
    }

    #[test]
    fn invalid_credential_key_is_rejected() {
        let yaml = r#"
credentials:
  "": "pw"
"#;
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("credentials"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::from_yaml("timeuot: 5s").is_err());
    }

    #[test]
    fn bad_duration_is_rejected() {
        assert!(matches!(
            Config::from_yaml("timeout: soon"),
            Err(Error::Yaml(_))
        ));
    }
}

mod credentials {
    use super::*;

    #[test]
    fn literal_credential() {
        let config = Config::from_yaml("credentials:\n  admin: pw\n").unwrap();
        assert_eq!(config.credential("admin").unwrap().expose(), "pw");
    }

    #[test]
    fn env_credential() {
        let yaml = r#"
credentials:
  admin:
    env: TNTBOX_TEST_ADMIN_PASSWORD
"#;
        let config = Config::from_yaml(yaml).unwrap();

        temp_env::with_var("TNTBOX_TEST_ADMIN_PASSWORD", Some("from_env"), || {
            assert_eq!(config.credential("admin").unwrap().expose(), "from_env");
        });

        temp_env::with_var_unset("TNTBOX_TEST_ADMIN_PASSWORD", || {
            assert!(matches!(
                config.credential("admin"),
                Err(Error::MissingEnvVar { user, var })
                    if user == "admin" && var == "TNTBOX_TEST_ADMIN_PASSWORD"
            ));
        });
    }

    #[test]
    fn env_credential_with_default() {
        let yaml = r#"
credentials:
  admin:
    env: TNTBOX_TEST_UNSET_PASSWORD
    default: fallback
"#;
        let config = Config::from_yaml(yaml).unwrap();
        temp_env::with_var_unset("TNTBOX_TEST_UNSET_PASSWORD", || {
            assert_eq!(config.credential("admin").unwrap().expose(), "fallback");
        });
    }

    #[test]
    fn unknown_credential() {
        let config = Config::default();
        assert!(matches!(
            config.credential("nobody"),
            Err(Error::UnknownCredential(_))
        ));
    }

    #[test]
    fn describe_never_shows_secrets() {
        let literal = EnvValue::Literal("secret".to_string());
        assert_eq!(literal.describe(), "literal");

        let from_env = EnvValue::FromEnv {
            var: "PW".to_string(),
            default: Some("secret".to_string()),
        };
        assert!(!from_env.describe().contains("secret"));
    }

    #[test]
    fn username_falls_back_to_default() {
        let config = Config::from_yaml("default_user: ops").unwrap();
        assert_eq!(config.username_or_default(None).unwrap().as_str(), "ops");
        assert_eq!(
            config.username_or_default(Some("admin")).unwrap().as_str(),
            "admin"
        );
        assert!(matches!(
            Config::default().username_or_default(None),
            Err(Error::MissingUsername)
        ));
    }
}

mod discovery {
    use super::*;

    #[test]
    fn finds_primary_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "timeout: 2s\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn finds_dot_directory_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".tntbox")).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_DIR), "default_user: ops\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.default_user.unwrap().as_str(), "ops");
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::discover(dir.path()),
            Err(Error::ConfigNotFound(_))
        ));
    }

    #[test]
    fn resolve_defaults_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        temp_env::with_var_unset(CONFIG_ENV_VAR, || {
            let config = Config::resolve(dir.path()).unwrap();
            assert!(config.timeout.is_none());
        });
    }

    #[test]
    fn env_var_overrides_discovery() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "timeout: 2s\n").unwrap();
        let other = dir.path().join("elsewhere.yml");
        fs::write(&other, "timeout: 7s\n").unwrap();

        temp_env::with_var(CONFIG_ENV_VAR, Some(other.as_os_str()), || {
            let config = Config::resolve(dir.path()).unwrap();
            assert_eq!(config.timeout, Some(Duration::from_secs(7)));
        });
    }
}

mod scaffolding {
    use super::*;

    #[test]
    fn init_writes_loadable_template() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), Some("ops"), false).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.default_user.unwrap().as_str(), "ops");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn init_keeps_names_with_yaml_syntax() {
        for name in ["ops #1", "a: b", "true", "[team]"] {
            let dir = tempfile::tempdir().unwrap();
            init_config(dir.path(), Some(name), false).unwrap();

            let config = Config::discover(dir.path()).unwrap();
            assert_eq!(config.default_user.unwrap().as_str(), name);
            assert!(config.credentials.contains_key(name), "credential key for {name}");
        }
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), None, false).unwrap();
        assert!(matches!(
            init_config(dir.path(), None, false),
            Err(Error::AlreadyExists(_))
        ));
        init_config(dir.path(), None, true).unwrap();
    }

    #[test]
    fn init_validates_default_user() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init_config(dir.path(), Some(""), false).is_err());
        assert!(!dir.path().join(CONFIG_FILENAME).exists());
    }
}
