use model_ids::config::{ConfigError, ModelParams};
use serde_json::json;
use std::{env, fs, path::PathBuf, process};

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("model-ids-{}-{}.json", process::id(), name))
}

#[test_log::test]
fn parses_seed_and_other_parameters() {
    let params = ModelParams::from_json_str(
        r#"{ "model.RandomState": 42, "model.timesteps": 20, "model.name": "chitwan" }"#,
    )
    .unwrap();

    assert_eq!(params.random_state, Some(42));
    assert_eq!(params.get("model.timesteps"), Some(&json!(20)));
    assert_eq!(params.get("model.name"), Some(&json!("chitwan")));
    assert_eq!(params.get("model.missing"), None);
}

#[test_log::test]
fn null_or_missing_seed_is_none() {
    let params = ModelParams::from_json_str(r#"{ "model.RandomState": null }"#).unwrap();
    assert_eq!(params.random_state, None);

    let params = ModelParams::from_json_str("{}").unwrap();
    assert_eq!(params.random_state, None);
}

#[test_log::test]
fn ensure_seed_keeps_existing() {
    let mut params = ModelParams::from_json_str(r#"{ "model.RandomState": 9 }"#).unwrap();
    let seed = params.ensure_seed(|| panic!("não deveria sortear um seed novo"));
    assert_eq!(seed, 9);
}

#[test_log::test]
fn ensure_seed_records_fresh() {
    let mut params = ModelParams::default();
    assert_eq!(params.ensure_seed(|| 31337), 31337);
    assert_eq!(params.random_state, Some(31337));
    assert_eq!(params.ensure_seed(|| 1), 31337);
}

#[test_log::test]
fn invalid_json_is_parse_error() {
    let result = ModelParams::from_json_str(r#"{ "model.RandomState": "abc" }"#);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));

    let result = ModelParams::from_json_str("not json");
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test_log::test]
fn missing_file_is_io_error() {
    let result = ModelParams::from_file(temp_path("does-not-exist"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test_log::test]
fn file_round_trip_keeps_extra_parameters() {
    let path = temp_path("round-trip");
    fs::write(&path, r#"{ "model.RandomState": null, "model.timesteps": 20 }"#).unwrap();

    let mut params = ModelParams::from_file(&path).unwrap();
    params.ensure_seed(|| 777);
    params.write_to_file(&path).unwrap();

    let reloaded = ModelParams::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(reloaded, params);
    assert_eq!(reloaded.random_state, Some(777));
    assert_eq!(reloaded.get("model.timesteps"), Some(&json!(20)));
}
