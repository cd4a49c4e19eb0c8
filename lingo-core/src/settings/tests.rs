use tempfile::TempDir;

use crate::settings::config::{Credentials, Settings};
use crate::settings::manager::SettingsManager;
use crate::translate::types::Language;

fn temp_settings_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("settings.toml")
}

#[test]
fn creates_default_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_settings_path(&dir);

    let manager = SettingsManager::from_path(path.clone()).unwrap();

    assert!(path.exists());
    let settings = manager.settings();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.target_language, Language::Spanish);
    assert_eq!(settings.voice, "en-US_LisaVoice");
    assert!(!settings.translation.credentials.is_configured());
}

#[test]
fn creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.toml");

    let manager = SettingsManager::from_path(path.clone()).unwrap();
    manager.save().unwrap();

    assert!(path.exists());
}

#[test]
fn update_and_save_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = temp_settings_path(&dir);

    let manager = SettingsManager::from_path(path.clone()).unwrap();
    manager.update_setting(|s| {
        s.target_language = Language::Italian;
        s.translation.credentials = Credentials {
            username: "user".to_string(),
            password: "secret".to_string(),
        };
    });
    manager.save().unwrap();

    let reloaded = SettingsManager::from_path(path).unwrap();
    let settings = reloaded.settings();
    assert_eq!(settings.target_language, Language::Italian);
    assert!(settings.translation.credentials.is_configured());
}

#[test]
fn update_without_save_does_not_persist() {
    let dir = TempDir::new().unwrap();
    let path = temp_settings_path(&dir);

    let manager = SettingsManager::from_path(path.clone()).unwrap();
    manager.update_setting(|s| s.target_language = Language::French);

    let reloaded = SettingsManager::from_path(path).unwrap();
    assert_eq!(reloaded.settings().target_language, Language::Spanish);
}

#[test]
fn corrupted_file_is_backed_up_and_replaced() {
    let dir = TempDir::new().unwrap();
    let path = temp_settings_path(&dir);
    std::fs::write(&path, "this is { not toml").unwrap();

    let manager = SettingsManager::from_path(path.clone()).unwrap();

    assert_eq!(manager.settings(), Settings::default());
    assert!(path.with_extension("toml.backup").exists());
}

#[test]
fn partial_settings_fill_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = temp_settings_path(&dir);
    std::fs::write(
        &path,
        r#"
target_language = "french"

[translation.credentials]
username = "user"
password = "secret"
"#,
    )
    .unwrap();

    let settings = SettingsManager::from_path(path).unwrap().settings();
    assert_eq!(settings.target_language, Language::French);
    assert_eq!(settings.voice, "en-US_LisaVoice");
    assert!(settings.translation.credentials.is_configured());
    assert!(!settings.text_to_speech.credentials.is_configured());
}
