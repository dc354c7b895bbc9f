#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use thiserror::Error;
use tokio::fs;

use crate::domain::services::AppStateProps;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

const MIN_FRAME_RATE_MS: u64 = 10;
const MAX_FRAME_RATE_MS: u64 = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.toml has an invalid value for key '{key}': {value}\nPossible values are: {possible}")]
    NotPossible {
        key: String,
        value: String,
        possible: String,
    },
    #[error("invalid value for '{key}': {value} (expected milliseconds between {min} and {max})")]
    OutOfRange {
        key: String,
        value: String,
        min: u64,
        max: u64,
    },
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BannerName,
    ConfigFile,
    Effects,
    FrameRate,
    Hostname,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| path::PathBuf::from("."))
            .join("folio/config.toml");

        let res = match key {
            ConfigKey::BannerName => "AMAN",
            ConfigKey::Effects => "true",
            ConfigKey::FrameRate => "50",
            ConfigKey::Hostname => "aman",
            ConfigKey::Username => "visitor",

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
        };

        return res.to_string();
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                let Some(val) = doc.get(&key.to_string()) else {
                    continue;
                };

                // Use clap value parsers to do validation.
                let possible_values = Config::possible_values(&cmd, key);

                if let Some(val_int) = val.as_integer() {
                    Config::set(key, &val_int.to_string());
                } else if let Some(val_bool) = val.as_bool() {
                    Config::set(key, &val_bool.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty()
                        && !possible_values.contains(&val_str.to_string())
                    {
                        bail!(ConfigError::NotPossible {
                            key: key.to_string(),
                            value: val_str.to_string(),
                            possible: possible_values.join(", "),
                        });
                    }
                    Config::set(key, val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        Config::frame_rate()?;

        tracing::debug!(
            config_file = config_path.to_string_lossy().to_string(),
            effects = Config::get(ConfigKey::Effects),
            frame_rate = Config::get(ConfigKey::FrameRate),
            username = Config::get(ConfigKey::Username),
            hostname = Config::get(ConfigKey::Hostname),
            "config"
        );

        return Ok(());
    }

    pub fn frame_rate() -> Result<Duration> {
        let key = ConfigKey::FrameRate;
        let value = Config::get(key);
        match value.parse::<u64>() {
            Ok(ms) if (MIN_FRAME_RATE_MS..=MAX_FRAME_RATE_MS).contains(&ms) => {
                return Ok(Duration::from_millis(ms));
            }
            _ => bail!(ConfigError::OutOfRange {
                key: key.to_string(),
                value,
                min: MIN_FRAME_RATE_MS,
                max: MAX_FRAME_RATE_MS,
            }),
        }
    }

    pub fn app_state_props() -> AppStateProps {
        return AppStateProps {
            username: Config::get(ConfigKey::Username),
            hostname: Config::get(ConfigKey::Hostname),
            banner_name: Config::get(ConfigKey::BannerName),
            effects_enabled: Config::get(ConfigKey::Effects) == "true",
        };
    }

    fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
        let long = key.to_string();
        let Some(arg) = cmd
            .get_arguments()
            .find(|e| e.get_long() == Some(long.as_str()))
        else {
            return vec![];
        };

        return arg
            .get_possible_values()
            .iter()
            .map(|e| e.get_name().to_string())
            .collect::<Vec<String>>();
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let long = key.to_string();
                let arg = cmd
                    .get_arguments()
                    .find(|e| e.get_long() == Some(long.as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let possible_values = Config::possible_values(&cmd, key);
                if !possible_values.is_empty() {
                    description = format!(
                        "{description} [possible values: {}]",
                        possible_values.join(", ")
                    );
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() || val.parse::<bool>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
