//! Layered configuration loading for bytekit tools

use crate::{Error, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Load configuration from multiple sources
///
/// Priority (highest to lowest):
/// 1. Environment variables prefixed with `<APP>_`
/// 2. The explicit file, when given
/// 3. `config/<app>.toml`, `config/<app>.yaml`, `config/<app>.json`
/// 4. `T::default()`
pub fn load_config<T>(app_name: &str, explicit_path: Option<&Path>) -> Result<T>
where
    T: for<'de> Deserialize<'de> + Serialize + Default,
{
    let mut figment = Figment::from(Serialized::defaults(T::default()))
        .merge(Toml::file(format!("config/{}.toml", app_name)))
        .merge(Yaml::file(format!("config/{}.yaml", app_name)))
        .merge(Json::file(format!("config/{}.json", app_name)));

    if let Some(path) = explicit_path {
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        debug!("Loading config file {}", path.display());
        figment = merge_file(figment, path)?;
    }

    figment
        .merge(Env::prefixed(&format!("{}_", app_name.to_uppercase())))
        .extract()
        .map_err(|e| Error::Config(format!("Failed to load configuration: {}", e)))
}

/// Load configuration from a specific file
pub fn load_config_from_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    merge_file(Figment::new(), path.as_ref())?
        .extract()
        .map_err(|e| Error::Config(format!("Failed to load configuration from file: {}", e)))
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::config("Config file must have an extension"))?;

    match extension {
        "toml" => Ok(figment.merge(Toml::file(path))),
        "yaml" | "yml" => Ok(figment.merge(Yaml::file(path))),
        "json" => Ok(figment.merge(Json::file(path))),
        _ => Err(Error::Config(format!(
            "Unsupported config file format: {}",
            extension
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct TestConfig {
        name: String,
        width: usize,
        upper: bool,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                width: 16,
                upper: false,
            }
        }
    }

    #[test]
    fn test_defaults_when_nothing_present() {
        Jail::expect_with(|_jail| {
            let config: TestConfig = load_config("scope", None).map_err(|e| e.to_string())?;
            assert_eq!(config, TestConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_layering_priority() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("config/scope.toml", "name = \"from-toml\"\nwidth = 8")?;
            jail.create_file("custom.yaml", "width: 32")?;
            jail.set_env("SCOPE_UPPER", "true");

            let config: TestConfig = load_config("scope", Some(Path::new("custom.yaml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.name, "from-toml");
            assert_eq!(config.width, 32);
            assert!(config.upper);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.json", r#"{"width": 4}"#)?;
            jail.set_env("SCOPE_WIDTH", "24");

            let config: TestConfig = load_config("scope", Some(Path::new("custom.json")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.width, 24);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_errors() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.ini", "width = 4")?;

            let unsupported = load_config::<TestConfig>("scope", Some(Path::new("custom.ini")));
            assert!(matches!(unsupported, Err(Error::Config(_))));

            let missing = load_config::<TestConfig>("scope", Some(Path::new("absent.toml")));
            assert!(matches!(missing, Err(Error::Config(_))));
            Ok(())
        });
    }

    #[test]
    fn test_load_config_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file("full.toml", "name = \"x\"\nwidth = 2\nupper = true")?;

            let config: TestConfig =
                load_config_from_file("full.toml").map_err(|e| e.to_string())?;
            assert_eq!(
                config,
                TestConfig {
                    name: "x".to_string(),
                    width: 2,
                    upper: true,
                }
            );

            let invalid = load_config_from_file::<TestConfig, _>("no_extension");
            assert!(matches!(invalid, Err(Error::Config(_))));
            Ok(())
        });
    }
}
