use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use exam_core::model::ExamSettings;
use services::{Clock, ExamService, ProgressTracker, QuestionBank};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPapers { raw: String },
    InvalidDuration { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPapers { raw } => write!(f, "invalid --papers value: {raw}"),
            ArgsError::InvalidDuration { raw } => write!(f, "invalid --duration-mins value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--papers <n>] [--duration-mins <m>] [--seed <s>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --papers 30");
    eprintln!("  --duration-mins 90");
    eprintln!("  (unseeded: each launch generates a fresh series)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ABHYAAS_PAPERS, ABHYAAS_DURATION_MINS, ABHYAAS_SEED");
}

#[derive(Debug)]
struct Args {
    papers: u32,
    duration_secs: u32,
    seed: Option<u64>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let defaults = ExamSettings::default_series();
        let mut papers = std::env::var("ABHYAAS_PAPERS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or_else(|| defaults.paper_count());
        let mut duration_secs = std::env::var("ABHYAAS_DURATION_MINS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .and_then(|mins| mins.checked_mul(60))
            .unwrap_or_else(|| defaults.duration_secs());
        let mut seed = std::env::var("ABHYAAS_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--papers" => {
                    let value = require_value(args, "--papers")?;
                    papers = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidPapers { raw: value.clone() })?;
                }
                "--duration-mins" => {
                    let value = require_value(args, "--duration-mins")?;
                    duration_secs = value
                        .parse::<u32>()
                        .ok()
                        .and_then(|mins| mins.checked_mul(60))
                        .ok_or_else(|| ArgsError::InvalidDuration { raw: value.clone() })?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(
                        value
                            .parse()
                            .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            papers,
            duration_secs,
            seed,
        })
    }
}

struct DesktopApp {
    exam: Arc<ExamService>,
    question_bank: Arc<QuestionBank>,
    progress: ProgressTracker,
}

impl UiApp for DesktopApp {
    fn exam(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam)
    }

    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    fn progress(&self) -> ProgressTracker {
        self.progress.clone()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let defaults = ExamSettings::default_series();
    let settings = ExamSettings::new(
        parsed.papers,
        defaults.questions_per_category(),
        parsed.duration_secs,
    )?;

    let clock = Clock::default_clock();
    let bank = Arc::new(QuestionBank::builtin());
    let exam = Arc::new(ExamService::new(&bank, settings, clock, parsed.seed)?);
    let progress = ProgressTracker::with_sample_data(clock);

    let app = DesktopApp {
        exam,
        question_bank: bank,
        progress,
    };

    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Abhyaas")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter)
    }

    #[test]
    fn duration_flag_is_minutes_converted_to_seconds() {
        let parsed = parse(&["--duration-mins", "90"]).unwrap();
        assert_eq!(parsed.duration_secs, 5400);
    }

    #[test]
    fn oversized_duration_is_an_argument_error_not_an_overflow() {
        // 100_000_000 minutes does not fit u32 seconds.
        let err = parse(&["--duration-mins", "100000000"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidDuration { .. }));

        let err = parse(&["--duration-mins", "-5"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidDuration { .. }));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--rounds", "3"]).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(_)));
    }
}
