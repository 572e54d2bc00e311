use ringconfig::Config;
use std::fs;
use tempfile::TempDir;

fn config_in(yaml: Option<&str>) -> (TempDir, Config) {
    let temp_dir = tempfile::tempdir().unwrap();
    if let Some(yaml) = yaml {
        fs::write(temp_dir.path().join("config.yaml"), yaml).unwrap();
    }
    let config = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
    (temp_dir, config)
}

#[test]
fn test_defaults_without_file() {
    let (temp_dir, config) = config_in(None);

    assert_eq!(config.get_playlist_title(), "My Playlist");
    assert_eq!(config.get_video_suffixes(), [".mp4"]);
    assert!(config.get_auto_advance());
    assert!(config.get_log_enable_console());
    assert_eq!(config.get_log_min_level(), "INFO");
    assert_eq!(config.directory(), temp_dir.path().to_str().unwrap());

    // Le chargement n'écrit rien sur le disque
    assert!(!temp_dir.path().join("config.yaml").exists());
}

#[test]
fn test_file_overrides_are_merged() {
    let (_temp_dir, config) = config_in(Some(
        "Playlist:\n  Title: Road trip\n  video_suffixes: [mkv, .WEBM]\nhost:\n  logger:\n    min_level: DEBUG\n",
    ));

    assert_eq!(config.get_playlist_title(), "Road trip");
    assert_eq!(config.get_video_suffixes(), [".mkv", ".webm"]);
    assert_eq!(config.get_log_min_level(), "DEBUG");
    // Les clés absentes du fichier gardent leur valeur par défaut
    assert!(config.get_auto_advance());
    assert!(config.get_log_enable_console());
}

#[test]
fn test_invalid_values_fall_back_to_defaults() {
    let (_temp_dir, config) = config_in(Some(
        "playlist:\n  title: '   '\n  auto_advance: maybe\n  video_suffixes: []\n",
    ));

    assert_eq!(config.get_playlist_title(), "My Playlist");
    assert!(config.get_auto_advance());
    assert_eq!(config.get_video_suffixes(), [".mp4"]);
}

#[test]
fn test_comma_separated_suffixes() {
    let (_temp_dir, config) = config_in(Some("playlist:\n  video_suffixes: 'mp4, mkv'\n"));
    assert_eq!(config.get_video_suffixes(), [".mp4", ".mkv"]);
}

#[test]
fn test_setters_persist_and_reload() {
    let (temp_dir, config) = config_in(None);

    config.set_playlist_title("Evening".to_string()).unwrap();
    config.set_auto_advance(false).unwrap();
    config.set_video_suffixes(&["mp4", ".mov"]).unwrap();
    config.set_log_min_level("WARN".to_string()).unwrap();
    assert!(temp_dir.path().join("config.yaml").exists());

    let reloaded = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
    assert_eq!(reloaded.get_playlist_title(), "Evening");
    assert!(!reloaded.get_auto_advance());
    assert_eq!(reloaded.get_video_suffixes(), [".mp4", ".mov"]);
    assert_eq!(reloaded.get_log_min_level(), "WARN");
}

#[test]
fn test_env_override() {
    // Seul ce test utilise cette clé : les tests tournent en parallèle
    std::env::set_var("RINGPLAY_CONFIG__DISPLAY__UP_NEXT_SIZE", "9");
    let (_temp_dir, config) = config_in(None);
    std::env::remove_var("RINGPLAY_CONFIG__DISPLAY__UP_NEXT_SIZE");

    assert_eq!(config.get_up_next_size(), 9);
}

#[test]
fn test_get_value_missing_path() {
    let (_temp_dir, config) = config_in(None);
    assert!(config.get_value(&["nope", "missing"]).is_err());
    assert!(config.get_value(&["playlist", "title", "deeper"]).is_err());
}

#[test]
fn test_config_dir_is_created() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let dir = Config::config_dir(nested.to_str().unwrap()).unwrap();
    assert!(nested.is_dir());
    assert_eq!(dir, nested.to_str().unwrap());
}

#[test]
fn test_clone_is_independent() {
    let (_temp_dir, config) = config_in(None);
    let copy = config.clone();
    config.set_up_next_size(3).unwrap();
    assert_eq!(config.get_up_next_size(), 3);
    assert_eq!(copy.config_file(), config.config_file());
}
