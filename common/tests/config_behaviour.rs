//! Behaviour-driven tests for `chipper.toml` loading.

use camino::Utf8PathBuf;
use chipper_common::{CONFIG_FILE_NAME, ChipperConfig, ConfigError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

#[derive(Default)]
struct ConfigWorld {
    temp_dir: Option<TempDir>,
    outcome: Option<Result<ChipperConfig, ConfigError>>,
}

#[fixture]
fn world() -> ConfigWorld {
    ConfigWorld {
        temp_dir: Some(TempDir::new().expect("temp dir")),
        ..ConfigWorld::default()
    }
}

fn repo_dir(world: &ConfigWorld) -> Utf8PathBuf {
    let temp = world.temp_dir.as_ref().expect("temp_dir set");
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("non-UTF8 temp path")
}

fn write_config(world: &ConfigWorld, contents: &str) {
    std::fs::write(repo_dir(world).join(CONFIG_FILE_NAME), contents).expect("write config");
}

fn loaded(world: &ConfigWorld) -> &ChipperConfig {
    match world.outcome.as_ref() {
        Some(Ok(config)) => config,
        Some(Err(error)) => panic!("expected configuration loading to succeed: {error}"),
        None => panic!("configuration should be loaded"),
    }
}

#[given("a simulation repository without chipper.toml")]
fn given_no_config(world: &mut ConfigWorld) {
    assert!(!repo_dir(world).join(CONFIG_FILE_NAME).exists());
}

#[given("a simulation repository whose chipper.toml sets the fallback locale to \"{locale}\"")]
fn given_fallback_override(world: &mut ConfigWorld, locale: String) {
    write_config(world, &format!("fallback_locale = \"{locale}\"\n"));
}

#[given("a simulation repository whose chipper.toml contains an unknown key")]
fn given_unknown_key(world: &mut ConfigWorld) {
    write_config(world, "locales = \"*\"\n");
}

#[when("the configuration is loaded")]
fn when_loaded(world: &mut ConfigWorld) {
    let dir = repo_dir(world);
    world.outcome = Some(ChipperConfig::load(&dir));
}

#[then("the fallback locale is \"{expected}\"")]
fn then_fallback_locale(world: &mut ConfigWorld, expected: String) {
    assert_eq!(loaded(world).fallback_locale().as_str(), expected);
}

#[then("the strings root is \"{expected}\"")]
fn then_strings_root(world: &mut ConfigWorld, expected: String) {
    assert_eq!(loaded(world).strings_root, Utf8PathBuf::from(expected));
}

#[then("a configuration error mentioning \"{snippet}\" is reported")]
fn then_error(world: &mut ConfigWorld, snippet: String) {
    match world.outcome.as_ref() {
        Some(Err(error)) => assert!(
            error.to_string().contains(&snippet),
            "expected `{error}` to mention `{snippet}`"
        ),
        Some(Ok(config)) => panic!("expected an error, got {config:?}"),
        None => panic!("configuration should be loaded"),
    }
}

#[scenario(
    path = "tests/features/config.feature",
    name = "Missing configuration falls back to defaults"
)]
fn scenario_missing_config(world: ConfigWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config.feature",
    name = "Configuration overrides the fallback locale"
)]
fn scenario_fallback_override(world: ConfigWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config.feature",
    name = "Unknown keys are rejected"
)]
fn scenario_unknown_keys(world: ConfigWorld) {
    let _ = world;
}
