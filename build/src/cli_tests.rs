//! Tests for CLI parsing and default behaviours.

use super::*;
use chipper_common::CacheBuster;
use rstest::rstest;

#[test]
fn cli_parses_defaults() {
    let cli = Cli::parse_from(["chipper"]);
    assert!(cli.command.is_none());
    assert!(cli.prepare.repo_dir.is_none());
    assert!(cli.prepare.locales.is_none());
    assert!(cli.prepare.locales_repo.is_none());
    assert!(cli.prepare.locale.is_none());
    assert!(!cli.prepare.json);
    assert!(!cli.prepare.strict);
    assert_eq!(cli.prepare.verbosity, 0);
    assert!(!cli.prepare.quiet);
}

#[test]
fn bare_invocation_runs_prepare() {
    let cli = Cli::parse_from(["chipper", "--locales", "*"]);
    match cli.into_command() {
        Command::Prepare(args) => assert_eq!(args.locales.as_deref(), Some("*")),
        Command::Inspect(_) => panic!("expected Prepare command"),
    }
}

#[rstest]
#[case::kebab("--locales-repo")]
#[case::camel("--localesRepo")]
fn cli_parses_locales_repo(#[case] flag: &str) {
    let cli = Cli::parse_from(["chipper", "prepare", flag, "beers-law-lab"]);
    match cli.command {
        Some(Command::Prepare(args)) => {
            assert_eq!(args.locales_repo.as_deref(), Some("beers-law-lab"));
        }
        _ => panic!("expected Prepare command"),
    }
}

#[test]
fn cli_parses_inspect_subcommand() {
    let cli = Cli::parse_from(["chipper", "inspect", "?ea", "--production", "--json"]);
    match cli.command {
        Some(Command::Inspect(args)) => {
            assert_eq!(args.url, "?ea");
            assert!(args.production);
            assert!(args.json);
        }
        _ => panic!("expected Inspect command"),
    }
}

#[rstest]
#[case::before_inspect(&["chipper", "--locales", "fr", "inspect", "?ea"])]
#[case::before_prepare(&["chipper", "--json", "prepare"])]
fn cli_rejects_prepare_flags_before_subcommand(#[case] argv: &[&str]) {
    let result = Cli::try_parse_from(argv);
    assert!(result.is_err(), "expected {argv:?} to be rejected");
}

#[test]
fn cli_rejects_verbose_with_quiet() {
    let result = Cli::try_parse_from(["chipper", "-v", "-q"]);
    assert!(result.is_err());
}

#[test]
fn to_request_prefers_flags_over_config() {
    let args = PrepareArgs {
        fallback_locale: Some("es".to_owned()),
        strings_root: Some(Utf8PathBuf::from("/srv/babel")),
        locale: Some("fr".to_owned()),
        ..PrepareArgs::default()
    };
    let config = ChipperConfig {
        fallback_locale: Some("de".to_owned()),
        strings_root: Utf8PathBuf::from("../strings"),
        cache_buster: Some(CacheBuster::Timestamp),
    };

    let request = args.to_request(Utf8Path::new("/sims/molarity"), &config);

    assert_eq!(request.fallback_locale.as_str(), "es");
    assert_eq!(request.strings_root, Utf8PathBuf::from("/srv/babel"));
    assert_eq!(request.target_locale.as_deref(), Some("fr"));
    assert_eq!(request.cache_buster, Some(CacheBuster::Timestamp));
}

#[test]
fn to_request_falls_back_to_config() {
    let config = ChipperConfig {
        fallback_locale: Some("de".to_owned()),
        ..ChipperConfig::default()
    };

    let request = PrepareArgs::default().to_request(Utf8Path::new("."), &config);

    assert_eq!(request.fallback_locale.as_str(), "de");
    assert_eq!(request.strings_root, Utf8PathBuf::from("../babel"));
    assert!(request.cache_buster.is_none());
}
