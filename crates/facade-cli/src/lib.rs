use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use facade_config::{Config, LoadOptions};
use facade_core::{Flags, Scenario, Transcript, User, WriterSink};
use serde_json::json;
use tracing::debug;

mod telemetry;

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose)?;

    let mut options = LoadOptions::default();
    if let Some(path) = &cli.config {
        options = options.with_override_path(path);
    }
    let config = Config::load(options).context("Unable to load configuration")?;
    let scenario = build_scenario(config, cli.country, cli.role);
    debug!(?scenario, "running scenario");

    match cli.format.unwrap_or(FormatValue::Text) {
        FormatValue::Text => run_text(scenario),
        FormatValue::Json => run_json(scenario),
    }
}

/// Maps resolved configuration onto scenario inputs; flags win over config.
pub fn build_scenario(config: Config, country: Option<String>, role: Option<String>) -> Scenario {
    Scenario {
        user: User::new(config.user.name),
        flags: Flags {
            is_loading: config.state.is_loading,
            is_saving: config.state.is_saving,
        },
        country: country.unwrap_or(config.updates.country),
        role: role.unwrap_or(config.updates.role),
    }
}

fn run_text(scenario: Scenario) -> Result<i32> {
    let stdout = io::stdout();
    let orchestrator = scenario.run(WriterSink::new(stdout.lock()));

    match orchestrator.into_sink().finish() {
        Ok(()) => Ok(0),
        Err(err) if should_ignore_pipe_error(err.io()) => Ok(0),
        Err(err) => Err(err).context("Failed to print transcript"),
    }
}

fn run_json(scenario: Scenario) -> Result<i32> {
    let orchestrator = scenario.run(Transcript::new());
    let snapshot = orchestrator.snapshot();
    let lines = orchestrator.into_sink().into_lines();

    let document = json!({
        "lines": lines,
        "final": snapshot,
    });
    let rendered = serde_json::to_string_pretty(&document)?;
    emit(&rendered)?;
    Ok(0)
}

fn emit(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match writeln!(handle, "{content}").and_then(|()| handle.flush()) {
        Ok(()) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("Failed to write to stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Walk a facade orchestrator through its delegated updates"
)]
struct Cli {
    /// Scenario config file (defaults to .facade.toml in the working directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Country passed to the delegated country update
    #[arg(long, value_name = "VALUE")]
    country: Option<String>,

    /// Role passed to the delegated role update
    #[arg(long, value_name = "VALUE")]
    role: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatValue>,

    /// Log construction and delegation steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatValue {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_take_precedence_over_config() {
        let config = Config::default();

        let scenario = build_scenario(config, Some("Peru".into()), None);

        assert_eq!(scenario.country, "Peru");
        assert_eq!(scenario.role, "Editor");
        assert_eq!(scenario.user, User::new("john doe"));
        assert_eq!(scenario.flags, Flags::default());
    }

    #[test]
    fn default_config_matches_default_scenario() {
        assert_eq!(
            build_scenario(Config::default(), None, None),
            Scenario::default()
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
