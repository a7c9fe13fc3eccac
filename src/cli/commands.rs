//! Command dispatch

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, OutputStyle, Settings};
use crate::domain::{AttributePath, Kind, Substitution};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { double, style }) => {
            let container = container()?;
            show(&container, double.as_deref(), *style)
        }
        Some(Commands::Read { path, double }) => {
            let container = container()?;
            read(&container, path, double.as_deref())
        }
        Some(Commands::Check { path, double }) => {
            let container = container()?;
            check(&container, path, double)
        }
        Some(Commands::Config { command }) => config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "arbor", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        )),
    }
}

fn container() -> CliResult<ServiceContainer> {
    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

#[instrument(skip(container))]
fn show(
    container: &ServiceContainer,
    double: Option<&str>,
    style: Option<OutputStyle>,
) -> CliResult<()> {
    let subject = container.inspect.subject(double)?;
    let rendered = container.inspect.render(&subject, style);
    output::info(rendered.trim_end());
    Ok(())
}

#[instrument(skip(container))]
fn read(container: &ServiceContainer, path: &AttributePath, double: Option<&str>) -> CliResult<()> {
    let subject = container.inspect.subject(double)?;
    let text = container.inspect.read(&subject, path)?;
    output::info(&text);
    Ok(())
}

#[instrument(skip(container))]
fn check(container: &ServiceContainer, path: &AttributePath, double: &str) -> CliResult<()> {
    let stand_in = container.inspect.load_double(double)?;
    let result = container.inspect.check(&stand_in, path)?;

    output::header(&format!("Substitution at {}", result.path));
    output::field("real", &format!("{:?} ({})", result.real_value, kinds(&result.real_kinds)));
    output::field(
        "double",
        &format!("{:?} ({})", result.stand_in_value, kinds(&result.stand_in_kinds)),
    );

    report(&result);
    if result.holds() {
        Ok(())
    } else {
        Err(CliError::SubstitutionFailed {
            path: result.path.to_string(),
        })
    }
}

fn report(result: &Substitution) {
    if result.holds() {
        output::success("double substitutes for the real chain");
        return;
    }
    if !result.values_match() {
        output::failure("values differ");
    }
    for level in result.indistinct_levels() {
        let prefix = result.path.segments()[..level].join(".");
        let at = if prefix.is_empty() { "<root>" } else { prefix.as_str() };
        output::failure(&format!(
            "{at} is an instance of {}",
            result.real_kinds[level]
        ));
    }
}

fn kinds(kinds: &[Kind]) -> String {
    kinds
        .iter()
        .map(Kind::to_string)
        .collect::<Vec<_>>()
        .join(" > ")
}

fn config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => {
            let settings = Settings::load()?;
            match global_config_path() {
                Some(path) => output::field("global", &path.display()),
                None => output::field("global", "<no config directory>"),
            }
            output::field("doubles", &settings.doubles_dir.display());
        }
        ConfigCommands::Template => output::info(Settings::template().trim_end()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::infrastructure::traits::RealFileSystem;

    const NESTED_LEAF: &str = r#"
label = "Leaf"

[attributes.branch]
label = "Branch"

[attributes.branch.attributes.tree]
label = "Tree"
attributes = { bark = "thick and brown" }
"#;

    const RED_LEAF: &str = r#"
label = "Leaf"
attributes = { color = "red" }
"#;

    fn container_for(dir: &Path) -> ServiceContainer {
        let settings = Settings {
            doubles_dir: dir.to_path_buf(),
            style: OutputStyle::Tree,
        };
        ServiceContainer::with_deps(settings, Arc::new(RealFileSystem))
    }

    fn path(input: &str) -> AttributePath {
        AttributePath::parse(input).unwrap()
    }

    #[test]
    fn given_nested_double_when_checking_bark_then_ok() {
        // Arrange
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("leaf.toml"), NESTED_LEAF).unwrap();
        let container = container_for(temp.path());

        // Act
        let result = check(&container, &path("branch.tree.bark"), "leaf");

        // Assert
        assert!(result.is_ok(), "unexpected error: {result:?}");
    }

    #[test]
    fn given_red_leaf_double_when_checking_color_then_substitution_failed() {
        // Arrange
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("red.toml"), RED_LEAF).unwrap();
        let container = container_for(temp.path());

        // Act
        let err = check(&container, &path("color"), "red").unwrap_err();

        // Assert
        assert!(matches!(err, CliError::SubstitutionFailed { ref path } if path == "color"));
        assert_eq!(err.exit_code(), crate::exitcode::FAILURE);
    }

    #[test]
    fn given_missing_double_when_checking_then_noinput() {
        let temp = TempDir::new().unwrap();
        let container = container_for(temp.path());

        let err = check(&container, &path("color"), "ghost").unwrap_err();

        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_no_command_when_executing_then_usage_error() {
        let cli = Cli {
            verbose: 0,
            command: None,
        };

        let err = execute_command(&cli).unwrap_err();

        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
