mod cli;

use cli::Args;
use owo_colors::{OwoColorize, Stream};
use snakecage_report::analysis_report::domain::RiskLevel;
use snakecage_report::analysis_report::samples::sample_code;
use snakecage_report::analysis_report::services::SeriesSampler;
use snakecage_report::application::dto::{HistoryRequest, OutputFormat, RenderRequest};
use snakecage_report::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use snakecage_report::application::read_models::{
    DashboardView, DisplayTimeZone, HistoryView, ViewModelOptions,
};
use snakecage_report::application::use_cases::{BuildHistoryUseCase, RenderReportUseCase};
use snakecage_report::config::{self, ConfigFile};
use snakecage_report::prelude::{FileSystemReader, StderrProgressReporter};
use snakecage_report::shared::error::ExitCode;
use snakecage_report::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!(
                "\n{}\n",
                "❌ An error occurred:".if_supports_color(Stream::Stderr, |t| t.red())
            );
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Settings after merging the config file under the command line
struct Settings {
    format: OutputFormat,
    fail_on: Option<RiskLevel>,
    options: ViewModelOptions,
}

impl Settings {
    fn resolve(args: &Args, file: ConfigFile) -> Self {
        let max_points = args
            .max_points
            .map(|n| n as usize)
            .or(file.max_series_points);
        let time_zone = if args.utc {
            Some(DisplayTimeZone::Utc)
        } else {
            file.time_zone()
        };

        Self {
            format: args.format.or(file.output_format()).unwrap_or_default(),
            fail_on: args.fail_on.or(file.fail_on_level()),
            options: ViewModelOptions {
                time_zone: time_zone.unwrap_or_default(),
                sampler: max_points.map(SeriesSampler::new).unwrap_or_default(),
            },
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    // --sample needs neither config nor reports
    if let Some(kind) = args.sample.as_deref() {
        let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
        presenter.present(sample_code(kind))?;
        return Ok(ExitCode::Success);
    }

    let config_file = load_config(args.config.as_deref())?.unwrap_or_default();
    let settings = Settings::resolve(&args, config_file);

    let formatter = FormatterFactory::create(settings.format);
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    let gated_level = if let Some(reports_dir) = args.history {
        let history = build_history(reports_dir)?;
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
        presenter.present(&formatter.format_history(&history)?)?;
        gating_history_level(&history, settings.fail_on)
    } else if let Some(report_path) = args.report {
        let view = render_report(report_path, settings.options)?;
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
        presenter.present(&formatter.format(&view)?)?;
        view.view_model().map(|model| model.risk_summary.level)
    } else {
        None
    };

    Ok(risk_gate(gated_level, settings.fail_on))
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn render_report(report_path: PathBuf, options: ViewModelOptions) -> Result<DashboardView> {
    let use_case = RenderReportUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    use_case.execute(RenderRequest::new(report_path, options))
}

fn build_history(reports_dir: PathBuf) -> Result<HistoryView> {
    let use_case = BuildHistoryUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    use_case.execute(HistoryRequest::new(reports_dir))
}

/// First history entry that reaches the threshold, if any
fn gating_history_level(history: &HistoryView, fail_on: Option<RiskLevel>) -> Option<RiskLevel> {
    let threshold = fail_on?;
    history
        .entries
        .iter()
        .map(|entry| entry.risk_level)
        .find(|level| level.meets(threshold))
}

fn risk_gate(level: Option<RiskLevel>, fail_on: Option<RiskLevel>) -> ExitCode {
    match (level, fail_on) {
        (Some(level), Some(threshold)) if level.meets(threshold) => {
            eprintln!(
                "{}",
                format!(
                    "🚨 Risk level {} meets the --fail-on threshold ({})",
                    level, threshold
                )
                .if_supports_color(Stream::Stderr, |t| t.red())
            );
            ExitCode::RiskThresholdExceeded
        }
        _ => ExitCode::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use snakecage_report::application::read_models::HistoryEntryView;

    fn entry(level: RiskLevel) -> HistoryEntryView {
        HistoryEntryView {
            source: "r.json".to_string(),
            execution_id: None,
            timestamp: None,
            risk_score: 0,
            risk_level: level,
            level_class: level.css_class().to_string(),
            summary: None,
        }
    }

    #[test]
    fn test_risk_gate() {
        assert_eq!(
            risk_gate(Some(RiskLevel::High), Some(RiskLevel::Medium)),
            ExitCode::RiskThresholdExceeded
        );
        assert_eq!(
            risk_gate(Some(RiskLevel::Low), Some(RiskLevel::Medium)),
            ExitCode::Success
        );
        assert_eq!(
            risk_gate(Some(RiskLevel::Unknown), Some(RiskLevel::Low)),
            ExitCode::Success
        );
        assert_eq!(risk_gate(Some(RiskLevel::High), None), ExitCode::Success);
        assert_eq!(risk_gate(None, Some(RiskLevel::Low)), ExitCode::Success);
    }

    #[test]
    fn test_gating_history_level() {
        let history = HistoryView {
            entries: vec![entry(RiskLevel::Low), entry(RiskLevel::High)],
            skipped: 0,
        };

        assert_eq!(
            gating_history_level(&history, Some(RiskLevel::Medium)),
            Some(RiskLevel::High)
        );
        assert_eq!(gating_history_level(&history, None), None);
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let args = Args::try_parse_from([
            "snakecage-report",
            "r.json",
            "-f",
            "json",
            "--max-points",
            "5",
            "--utc",
        ])
        .unwrap();
        let file = ConfigFile {
            format: Some("markdown".to_string()),
            fail_on: Some("high".to_string()),
            max_series_points: Some(20),
            timezone: Some("local".to_string()),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(&args, file);

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.fail_on, Some(RiskLevel::High));
        assert_eq!(settings.options.sampler.max_points(), 5);
        assert_eq!(settings.options.time_zone, DisplayTimeZone::Utc);
    }

    #[test]
    fn test_settings_defaults() {
        let args = Args::try_parse_from(["snakecage-report", "r.json"]).unwrap();

        let settings = Settings::resolve(&args, ConfigFile::default());

        assert_eq!(settings.format, OutputFormat::Html);
        assert_eq!(settings.fail_on, None);
        assert_eq!(settings.options, ViewModelOptions::default());
    }
}
