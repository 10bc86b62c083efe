//! Configuration precedence tests: defaults, then config file, then
//! environment variables, then command-line flags.
//!
//! These tests mutate process environment variables, so they run
//! serialized and restore a clean environment before and after each one.

use hilo_cli::run;
use serde_json::Value;
use serial_test::serial;

fn clear_hilo_env() {
    for key in [
        "HILO_CONFIG",
        "HILO_MIN_NUMBER",
        "HILO_MAX_NUMBER",
        "HILO_STARTING_SCORE",
        "HILO_SEED",
        "HILO_STORE",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn run_cfg() -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["hilo", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn test_cfg_reports_defaults_when_env_is_clean() {
    clear_hilo_env();

    let (code, stdout, _) = run_cfg();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["min_number"]["value"].as_i64(), Some(1));
    assert_eq!(json["min_number"]["source"].as_str(), Some("default"));
    assert_eq!(json["max_number"]["value"].as_i64(), Some(20));
    assert_eq!(json["max_number"]["source"].as_str(), Some("default"));
    assert_eq!(json["starting_score"]["value"].as_u64(), Some(15));
    assert_eq!(json["starting_score"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));
    assert!(json["store"]["value"].is_null());
    assert_eq!(json["store"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn test_config_file_values_report_file_source() {
    clear_hilo_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hilo.toml");
    std::fs::write(
        &path,
        "min_number = 5\nmax_number = 50\nstarting_score = 20\n",
    )
    .unwrap();
    unsafe {
        std::env::set_var("HILO_CONFIG", &path);
    }

    let (code, stdout, _) = run_cfg();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["min_number"]["value"].as_i64(), Some(5));
    assert_eq!(json["min_number"]["source"].as_str(), Some("file"));
    assert_eq!(json["max_number"]["value"].as_i64(), Some(50));
    assert_eq!(json["max_number"]["source"].as_str(), Some("file"));
    assert_eq!(json["starting_score"]["value"].as_u64(), Some(20));
    assert_eq!(json["starting_score"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));

    clear_hilo_env();
}

#[test]
#[serial]
fn test_env_overrides_config_file() {
    clear_hilo_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hilo.toml");
    std::fs::write(&path, "min_number = 5\nmax_number = 50\n").unwrap();
    unsafe {
        std::env::set_var("HILO_CONFIG", &path);
    }
    unsafe {
        std::env::set_var("HILO_MIN_NUMBER", "3");
    }

    let (code, stdout, _) = run_cfg();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["min_number"]["value"].as_i64(), Some(3));
    assert_eq!(json["min_number"]["source"].as_str(), Some("env"));
    assert_eq!(json["max_number"]["value"].as_i64(), Some(50));
    assert_eq!(json["max_number"]["source"].as_str(), Some("file"));

    clear_hilo_env();
}

#[test]
#[serial]
fn test_empty_env_var_is_treated_as_unset() {
    clear_hilo_env();
    unsafe {
        std::env::set_var("HILO_MIN_NUMBER", "");
    }

    let (code, stdout, _) = run_cfg();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["min_number"]["value"].as_i64(), Some(1));
    assert_eq!(json["min_number"]["source"].as_str(), Some("default"));

    clear_hilo_env();
}

#[test]
#[serial]
fn test_non_numeric_env_value_fails_with_exit_two() {
    clear_hilo_env();
    unsafe {
        std::env::set_var("HILO_MIN_NUMBER", "abc");
    }

    let (code, _, stderr) = run_cfg();
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid configuration"));

    clear_hilo_env();
}

#[test]
#[serial]
fn test_zero_starting_score_from_env_rejected() {
    clear_hilo_env();
    unsafe {
        std::env::set_var("HILO_STARTING_SCORE", "0");
    }

    let (code, _, stderr) = run_cfg();
    assert_eq!(code, 2);
    assert!(stderr.contains("starting_score must be >=1"));

    clear_hilo_env();
}

#[test]
#[serial]
fn test_missing_config_file_fails_with_exit_two() {
    clear_hilo_env();
    unsafe {
        std::env::set_var("HILO_CONFIG", "no/such/hilo.toml");
    }

    let (code, _, stderr) = run_cfg();
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid configuration"));

    clear_hilo_env();
}

#[test]
#[serial]
fn test_flags_override_env_for_game_range() {
    clear_hilo_env();
    unsafe {
        std::env::set_var("HILO_MIN_NUMBER", "5");
    }
    unsafe {
        std::env::set_var("HILO_MAX_NUMBER", "50");
    }

    // Without range flags the env bounds apply.
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["hilo", "rng", "--seed", "1", "--samples", "10"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("range=[5, 50]"));

    // Explicit flags win over the environment.
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "hilo", "rng", "--seed", "1", "--samples", "10", "--min", "2", "--max", "8",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("range=[2, 8]"));

    clear_hilo_env();
}

#[test]
#[serial]
fn test_env_seed_reaches_the_simulator() {
    clear_hilo_env();
    unsafe {
        std::env::set_var("HILO_SEED", "77");
    }

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["hilo", "sim", "--sessions", "2"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("seed=77"));

    clear_hilo_env();
}
