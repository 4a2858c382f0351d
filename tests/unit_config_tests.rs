//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for `EngineConfig`: defaults, TOML parsing,
//! validation of the run bounds and loading from a file.
//!
//! 此模块包含 `EngineConfig` 的单元测试：默认值、TOML 解析、
//! 运行上限的校验以及从文件加载。

mod common;

use common::expect_engine_error;
use std::io::Write;
use tempfile::NamedTempFile;
use unitcheck::core::config::{
    DEFAULT_MAX_ATTEMPTS_PER_PROPERTY, DEFAULT_MAX_DOMAIN_SIZE, DEFAULT_MAX_PROPERTIES,
};
use unitcheck::core::error::engine_error;
use unitcheck::{EngineConfig, EngineError};

#[cfg(test)]
mod default_tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = EngineConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.max_attempts_per_property, 100);
        assert_eq!(config.max_properties, 100);
        assert_eq!(config.max_attempts_per_property, DEFAULT_MAX_ATTEMPTS_PER_PROPERTY);
        assert_eq!(config.max_properties, DEFAULT_MAX_PROPERTIES);
        assert_eq!(config.max_domain_size, DEFAULT_MAX_DOMAIN_SIZE);
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_the_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_quiet_only_switches_off_verbose() {
        let quiet = EngineConfig::default().quiet();
        assert!(!quiet.verbose);
        assert_eq!(quiet.max_properties, DEFAULT_MAX_PROPERTIES);
    }
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let toml_str = r#"
            language = "zh-CN"
            max_attempts_per_property = 7
        "#;

        let config = EngineConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.max_attempts_per_property, 7);
        assert_eq!(config.max_properties, DEFAULT_MAX_PROPERTIES);
        assert!(config.verbose);
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
            language = "en"
            max_attempts_per_property = 10
            max_properties = 3
            max_domain_size = 500
            verbose = false
        "#;

        let config = EngineConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(
            config,
            EngineConfig {
                language: "en".to_string(),
                max_attempts_per_property: 10,
                max_properties: 3,
                max_domain_size: 500,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = EngineConfig::from_toml_str("max_attempts = 5").unwrap_err();
        assert!(engine_error(&err).is_none());
        assert!(err.to_string().contains("Failed to parse engine configuration"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(EngineConfig::from_toml_str("max_properties = \"many\"").is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = EngineConfig {
            max_properties: 9,
            ..EngineConfig::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("max_properties = 9"));
        assert_eq!(EngineConfig::from_toml_str(&toml_str).unwrap(), config);
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_zero_attempt_cap_is_invalid() {
        let err = EngineConfig::from_toml_str("max_attempts_per_property = 0").unwrap_err();
        let engine_err = expect_engine_error(&err);
        assert!(matches!(engine_err, EngineError::InvalidConfig(_)));
        assert!(engine_err.is_configuration_error());
    }

    #[test]
    fn test_zero_property_budget_is_invalid() {
        let config = EngineConfig {
            max_properties: 0,
            ..EngineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(expect_engine_error(&err), EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_domain_size_is_invalid() {
        let config = EngineConfig {
            max_domain_size: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_engine_refuses_invalid_config() {
        let config = EngineConfig {
            max_attempts_per_property: 0,
            ..EngineConfig::default()
        };
        let err = unitcheck::Engine::new(config).unwrap_err();
        assert!(matches!(expect_engine_error(&err), EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_engine_keeps_its_config() {
        let config = EngineConfig {
            max_properties: 3,
            language: "zh-CN".to_string(),
            ..EngineConfig::default()
        };
        let engine = unitcheck::Engine::new(config.clone()).unwrap();
        assert_eq!(engine.config(), &config);

        let quiet = unitcheck::Engine::new(EngineConfig::default().quiet()).unwrap();
        assert!(!quiet.config().verbose);
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_properties = 4").unwrap();
        writeln!(file, "verbose = false").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_properties, 4);
        assert!(!config.verbose);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = EngineConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn test_invalid_file_keeps_the_engine_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_domain_size = 0").unwrap();

        let err = EngineConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration file"));
        assert!(matches!(expect_engine_error(&err), EngineError::InvalidConfig(_)));
    }
}
