mod app;
mod error;
mod form;
mod logging;
mod record;
mod roster;
mod settings;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use settings::{Settings, SubjectSetting, parse_subject};
use tracing::info;

/// Terminal dashboard for student grades.
#[derive(Parser, Debug)]
#[command(name = "smartclass360", version, about)]
struct Args {
    /// Named settings profile (defaults to the standard one)
    #[arg(short, long)]
    config: Option<String>,
    /// Subject to grade, NAME or NAME=DEFAULT; repeat to replace the configured list
    #[arg(short, long = "subject", value_parser = parse_subject)]
    subjects: Vec<SubjectSetting>,
    /// Where log output goes while the dashboard owns the terminal
    #[arg(short, long, default_value = "smartclass360.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_file)
        .with_context(|| format!("initialising logging to {}", args.log_file.display()))?;

    let settings = Settings::load(args.config.as_deref())?.with_subjects(args.subjects);
    settings.validate().context("invalid settings")?;
    info!(subjects = ?settings.subject_names().collect::<Vec<_>>(), "starting dashboard");

    let mut app = App::new(settings);
    app.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_flags_replace_the_configured_list() {
        let args = Args::parse_from(["smartclass360", "-s", "Rust=90", "--subject", "Go"]);
        let settings = Settings::default().with_subjects(args.subjects);
        let names: Vec<&str> = settings.subject_names().collect();
        assert_eq!(names, ["Rust", "Go"]);
        assert!(settings.validate().is_ok());
        assert_eq!(args.log_file, PathBuf::from("smartclass360.log"));
    }

    #[test]
    fn malformed_subject_flag_is_rejected() {
        assert!(Args::try_parse_from(["smartclass360", "-s", "Rust=lots"]).is_err());
    }
}
