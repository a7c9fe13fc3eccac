//! Tests for CLI argument parsing

use rstest::rstest;

use arbor::cli::args::{Cli, Commands, ConfigCommands};
use arbor::config::OutputStyle;
use clap::Parser;

#[test]
fn given_read_with_path_when_parsing_then_path_is_parsed() {
    let cli = Cli::try_parse_from(["arbor", "read", "branch.tree.bark"]).unwrap();

    match cli.command {
        Some(Commands::Read { path, double }) => {
            assert_eq!(path.segments(), ["branch", "tree", "bark"]);
            assert!(double.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_check_with_double_when_parsing_then_captures_reference() {
    let cli = Cli::try_parse_from(["arbor", "-vv", "check", "color", "--double", "leaf"]).unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(matches!(
        cli.command,
        Some(Commands::Check { ref double, .. }) if double == "leaf"
    ));
}

#[test]
fn given_show_with_style_when_parsing_then_style_selected() {
    let cli = Cli::try_parse_from(["arbor", "show", "--style", "plain"]).unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Show {
            style: Some(OutputStyle::Plain),
            double: None
        })
    ));
}

#[test]
fn given_config_template_when_parsing_then_config_command() {
    let cli = Cli::try_parse_from(["arbor", "config", "template"]).unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Template
        })
    ));
}

#[rstest]
#[case("")]
#[case("branch..tree")]
#[case("1branch")]
#[case("branch.tree-bark")]
#[case(" color ")]
#[case("branch. tree")]
fn given_invalid_path_when_parsing_then_rejected(#[case] path: &str) {
    let result = Cli::try_parse_from(["arbor", "read", path]);

    assert!(result.is_err());
}

#[test]
fn given_check_without_double_when_parsing_then_rejected() {
    assert!(Cli::try_parse_from(["arbor", "check", "color"]).is_err());
}
