//! File settings repository tests
//! 设置文件仓库测试

use pp_core::ports::SettingsPort;
use pp_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};
use pp_infra::FileSettingsRepository;
use tempfile::TempDir;

fn repo_in(dir: &TempDir) -> FileSettingsRepository {
    FileSettingsRepository::new(dir.path().join("nested").join("settings.json"))
}

#[tokio::test]
async fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let settings = repo.load().await.unwrap();

    assert_eq!(settings, Settings::default());
    assert!(!repo.path().exists(), "load must not create the file");
}

#[tokio::test]
async fn test_save_then_load_round_trips_toggle() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut settings = Settings::default();
    settings.general.enabled = false;
    settings.monitor.poll_interval_ms = 500;
    repo.save(&settings).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert!(!loaded.general.enabled);
    assert_eq!(loaded.monitor.poll_interval_ms, 500);
    assert!(!repo.path().with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_unversioned_file_is_migrated_and_rewritten() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);
    tokio::fs::create_dir_all(repo.path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(repo.path(), r#"{ "general": { "enabled": false } }"#)
        .await
        .unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.schema_version, CURRENT_SCHEMA_VERSION);
    assert!(!loaded.general.enabled);

    let on_disk: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(repo.path()).await.unwrap()).unwrap();
    assert_eq!(on_disk["schema_version"], CURRENT_SCHEMA_VERSION);
    assert_eq!(on_disk["monitor"]["poll_interval_ms"], 250);
}

#[tokio::test]
async fn test_newer_schema_is_read_without_rewrite() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);
    tokio::fs::create_dir_all(repo.path().parent().unwrap())
        .await
        .unwrap();
    let raw = r#"{"schema_version":99,"general":{"enabled":true},"future":{"x":1}}"#;
    tokio::fs::write(repo.path(), raw).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.schema_version, 99);
    assert_eq!(tokio::fs::read_to_string(repo.path()).await.unwrap(), raw);
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);
    tokio::fs::create_dir_all(repo.path().parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(repo.path(), "{ not json").await.unwrap();

    assert!(repo.load().await.is_err());
}

#[tokio::test]
async fn test_save_error_names_blocked_settings_dir() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);
    // a regular file where the settings directory should be
    tokio::fs::write(dir.path().join("nested"), "").await.unwrap();

    let err = repo.save(&Settings::default()).await.unwrap_err();

    assert!(format!("{err:#}").contains("create settings dir failed"));
    assert!(!repo.path().exists());
}
