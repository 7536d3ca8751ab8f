use std::path::Path;
use std::time::Duration;

use bird_survivor::config::Settings;
use bird_survivor::error::GameError;

fn parse(text: &str) -> Result<Settings, GameError> {
    Settings::from_json(Path::new("test.json"), text)
}

#[test]
fn defaults_match_the_classic_game() {
    let s = Settings::default();
    assert_eq!((s.width, s.height), (1600, 900));
    assert_eq!(s.tick_rate, 50);
    assert_eq!(s.enemy_interval, 200);
    assert_eq!(s.boss_interval, 300);
    assert_eq!(s.flame_interval, 50);
    assert_eq!(s.spread_count, 5);
    assert!(!s.allow_multiple_bosses);
    assert_eq!(s.player_start, (900.0, 400.0));
    assert!(s.validate().is_ok());
}

#[test]
fn tick_duration_follows_tick_rate() {
    assert_eq!(Settings::default().tick_duration(), Duration::from_millis(20));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let s = parse(r#"{ "tick_rate": 25, "allow_multiple_bosses": true }"#).unwrap();
    assert_eq!(s.tick_rate, 25);
    assert!(s.allow_multiple_bosses);
    assert_eq!(s.boss_interval, 300);
}

#[test]
fn player_start_is_a_pair() {
    let s = parse(r#"{ "player_start": [200, 300] }"#).unwrap();
    assert_eq!(s.player_start, (200.0, 300.0));
}

#[test]
fn empty_object_is_default() {
    assert_eq!(parse("{}").unwrap(), Settings::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    match parse("{ tick_rate: 50 ") {
        Err(GameError::ConfigParse { path, .. }) => assert_eq!(path, Path::new("test.json")),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn zero_interval_is_rejected() {
    for field in ["enemy_interval", "boss_interval", "flame_interval", "tick_rate"] {
        let text = format!(r#"{{ "{field}": 0 }}"#);
        match parse(&text) {
            Err(GameError::InvalidSetting(msg)) => assert!(msg.contains(field), "{msg}"),
            other => panic!("{field}: expected InvalidSetting, got {other:?}"),
        }
    }
}

#[test]
fn spread_needs_two_beams() {
    assert!(matches!(
        parse(r#"{ "spread_count": 1 }"#),
        Err(GameError::InvalidSetting(_))
    ));
}

#[test]
fn world_must_fit_the_player() {
    assert!(matches!(
        parse(r#"{ "width": 50 }"#),
        Err(GameError::InvalidSetting(_))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("bird_survivor_no_such_settings.json");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(
        Settings::load_from(&path),
        Err(GameError::ConfigRead { .. })
    ));
}

#[test]
fn load_from_reads_file() {
    let path = std::env::temp_dir().join(format!(
        "bird_survivor_settings_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{ "flame_interval": 25 }"#).unwrap();
    let s = Settings::load_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(s.flame_interval, 25);
}

#[test]
fn load_resolves_env_file_then_defaults() {
    use bird_survivor::config::CONFIG_ENV;

    // Only this test touches the variable.
    let path = std::env::temp_dir().join(format!(
        "bird_survivor_env_settings_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{ "boss_interval": 120 }"#).unwrap();
    std::env::set_var(CONFIG_ENV, &path);
    let s = Settings::load().unwrap();
    assert_eq!(s.boss_interval, 120);

    std::fs::remove_file(&path).unwrap();
    match Settings::load() {
        Err(GameError::ConfigRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected ConfigRead, got {other:?}"),
    }

    // Tests run from the package root, which ships no settings file.
    std::env::remove_var(CONFIG_ENV);
    assert!(!Path::new(bird_survivor::config::DEFAULT_CONFIG_FILE).exists());
    assert_eq!(Settings::load().unwrap(), Settings::default());
}
