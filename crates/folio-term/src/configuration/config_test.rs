use std::io::Write;

use anyhow::Result;
use once_cell::sync::Lazy;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use super::*;
use crate::application::cli;

// Config is process global.
static LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn config_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    return Ok(file);
}

async fn load(args: &[&str]) -> Result<()> {
    let cmd = cli::build();
    let matches = cmd.clone().try_get_matches_from(args)?;
    return Config::load(cmd, vec![&matches]).await;
}

#[tokio::test]
async fn it_loads_defaults() -> Result<()> {
    let _guard = LOCK.lock().await;
    load(&["folio", "--config-file", "/nonexistent/folio.toml"]).await?;

    assert_eq!(Config::get(ConfigKey::Username), "visitor");
    assert_eq!(Config::get(ConfigKey::Hostname), "aman");
    assert_eq!(Config::get(ConfigKey::BannerName), "AMAN");
    assert_eq!(Config::get(ConfigKey::Effects), "true");
    assert_eq!(Config::frame_rate()?, Duration::from_millis(50));
    return Ok(());
}

#[tokio::test]
async fn it_prefers_file_over_defaults() -> Result<()> {
    let _guard = LOCK.lock().await;
    let file = config_file("username = \"guest\"\neffects = false\nframe-rate = 100\n")?;
    let path = file.path().to_string_lossy().to_string();
    load(&["folio", "--config-file", &path]).await?;

    assert_eq!(Config::get(ConfigKey::Username), "guest");
    assert_eq!(Config::get(ConfigKey::Effects), "false");
    assert_eq!(Config::frame_rate()?, Duration::from_millis(100));
    assert_eq!(Config::get(ConfigKey::Hostname), "aman");
    return Ok(());
}

#[tokio::test]
async fn it_prefers_flags_over_file() -> Result<()> {
    let _guard = LOCK.lock().await;
    let file = config_file("username = \"guest\"\nhostname = \"box\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    load(&["folio", "--config-file", &path, "--username", "root"]).await?;

    assert_eq!(Config::get(ConfigKey::Username), "root");
    assert_eq!(Config::get(ConfigKey::Hostname), "box");

    let props = Config::app_state_props();
    assert_eq!(props.username, "root");
    assert!(props.effects_enabled);
    return Ok(());
}

#[tokio::test]
async fn it_rejects_impossible_values() -> Result<()> {
    let _guard = LOCK.lock().await;
    let file = config_file("effects = \"maybe\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    let err = load(&["folio", "--config-file", &path])
        .await
        .expect_err("effects should be validated");

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotPossible { .. })
    ));
    return Ok(());
}

#[tokio::test]
async fn it_rejects_out_of_range_frame_rate() -> Result<()> {
    let _guard = LOCK.lock().await;
    let err = load(&[
        "folio",
        "--config-file",
        "/nonexistent/folio.toml",
        "--frame-rate",
        "5",
    ])
    .await
    .expect_err("frame rate should be validated");

    assert_eq!(
        err.to_string(),
        "invalid value for 'frame-rate': 5 (expected milliseconds between 10 and 1000)"
    );
    return Ok(());
}

#[test]
fn it_serializes_default_config() {
    let toml_str = Config::serialize_default(cli::build());

    assert!(toml_str.contains("username = \"visitor\""));
    assert!(toml_str.contains("effects = true"));
    assert!(toml_str.contains("frame-rate = 50"));
    assert!(toml_str.contains("[possible values: true, false]"));
    assert!(!toml_str.contains("config-file"));
    assert!(toml_str.parse::<toml_edit::Document>().is_ok());
}
