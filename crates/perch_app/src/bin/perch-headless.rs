use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use perch_app::{run_loaded_scenario, HeadlessScenario};
use perch_theme::{ThemeBundle, ThemeFile, ThemeState};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "perch-headless",
    about = "Run a scripted scroll session against the sliver FAB layout",
    version
)]
struct Opts {
    /// Scenario JSON file
    #[arg(long)]
    scenario: PathBuf,

    /// Write the JSON report to this relative path instead of stdout
    #[arg(long)]
    report: Option<PathBuf>,

    /// Theme TOML file installed as the global theme
    #[arg(long)]
    theme: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let opts = Opts::parse();
    init_tracing();

    let scenario = HeadlessScenario::from_path(&opts.scenario)
        .with_context(|| format!("failed to load scenario {}", opts.scenario.display()))?;

    init_theme(opts.theme.as_deref())?;

    let outcome = run_loaded_scenario(&scenario)?;
    let report = outcome.report();
    match &opts.report {
        Some(path) => {
            report.write_to_path(path)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => report.write_to_writer(&mut std::io::stdout().lock())?,
    }

    if outcome.is_failed() {
        tracing::error!(
            step = report.failed_step_index,
            assertion = report.assertion.as_deref(),
            message = report.message.as_deref(),
            "scenario failed"
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Install the global theme the edge overlay reads its surface color from
fn init_theme(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        ThemeState::init_default();
        return Ok(());
    };
    let file = ThemeFile::from_path(path)
        .with_context(|| format!("failed to load theme {}", path.display()))?;
    ThemeState::init(ThemeBundle::default(), file.scheme);
    let theme = ThemeState::try_get().context("theme state was not installed")?;
    file.apply(theme);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    if let Err(err) = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        eprintln!("tracing subscriber already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_tracing_init_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::debug!("still logging after second init");
    }

    #[test]
    fn test_missing_theme_file_is_error() {
        let err = init_theme(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load theme"), "{err}");
    }
}
