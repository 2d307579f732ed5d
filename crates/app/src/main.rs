mod headless;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use phage_core::model::{BacteriumId, ScoreField};
use phage_core::{AnalysisConfig, AnalysisDelays};
use services::{AnalysisService, AppServices, ResultsService, TokioPacer};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DATA_FILE: &str = "data/Modelresults_with_names_v4.csv";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidScore { raw: String },
    InvalidBacterium { raw: String },
    JsonOutsideHeadless,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidScore { raw } => {
                write!(f, "invalid --score value: {raw} (expected wgs or key-gene)")
            }
            ArgsError::InvalidBacterium { raw } => write!(f, "invalid --bacterium value: {raw:?}"),
            ArgsError::JsonOutsideHeadless => write!(f, "--json is only valid with headless"),
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

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn config(&self) -> Arc<AnalysisConfig> {
        self.services.config()
    }

    fn analysis(&self) -> Arc<AnalysisService> {
        self.services.analysis()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [options]");
    eprintln!("  cargo run -p app -- headless [options] [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data <path>          prediction CSV (default {DEFAULT_DATA_FILE})");
    eprintln!("  --bacterium <id>       bacterium the analysis identifies");
    eprintln!("  --score <wgs|key-gene> model output used for ranking");
    eprintln!("  --manual-advance       wait for \"View Results\" after completion");
    eprintln!("  --fast                 skip the simulated delays");
    eprintln!("  --log-level <level>    tracing filter when RUST_LOG is unset (default info)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PHAGE_DATA_FILE, PHAGE_BACTERIUM, PHAGE_AUTO_ADVANCE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Headless,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "headless" => Some(Self::Headless),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    data: PathBuf,
    bacterium: BacteriumId,
    score_field: ScoreField,
    auto_advance: bool,
    fast: bool,
    log_level: String,
    json: bool,
}

impl Args {
    fn from_env() -> Self {
        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            data: env("PHAGE_DATA_FILE").map_or_else(|| DEFAULT_DATA_FILE.into(), PathBuf::from),
            bacterium: env("PHAGE_BACTERIUM").map_or_else(
                || AnalysisConfig::default().selected_bacterium,
                BacteriumId::new,
            ),
            score_field: ScoreField::default(),
            auto_advance: env("PHAGE_AUTO_ADVANCE").is_none_or(|v| parse_flag(&v)),
            fast: false,
            log_level: "info".into(),
            json: false,
        }
    }

    fn parse(
        mut self,
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => self.data = require_value(args, "--data")?.into(),
                "--bacterium" => {
                    let value = require_value(args, "--bacterium")?;
                    let id = BacteriumId::new(value.as_str());
                    if id.is_blank() {
                        return Err(ArgsError::InvalidBacterium { raw: value });
                    }
                    self.bacterium = id;
                }
                "--score" => {
                    let value = require_value(args, "--score")?;
                    self.score_field = parse_score(&value)
                        .ok_or(ArgsError::InvalidScore { raw: value })?;
                }
                "--manual-advance" => self.auto_advance = false,
                "--fast" => self.fast = true,
                "--log-level" => self.log_level = require_value(args, "--log-level")?,
                "--json" if cmd == Command::Headless => self.json = true,
                "--json" => return Err(ArgsError::JsonOutsideHeadless),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }

    fn config(&self) -> AnalysisConfig {
        let delays = if self.fast {
            AnalysisDelays::instant()
        } else {
            AnalysisDelays::default()
        };
        AnalysisConfig::default()
            .with_selected_bacterium(self.bacterium.clone())
            .with_score_field(self.score_field)
            .with_auto_advance(self.auto_advance)
            .with_delays(delays)
    }
}

fn parse_score(raw: &str) -> Option<ScoreField> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "wgs" | "wgs_output" => Some(ScoreField::WgsOutput),
        "key-gene" | "key_gene" | "key_gene_output" => Some(ScoreField::KeyGeneOutput),
        _ => None,
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

fn initialize_tracing(log_level: &str) {
    // RUST_LOG wins over the flag.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::from_env().parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    initialize_tracing(&parsed.log_level);
    tracing::info!(data = %parsed.data.display(), bacterium = %parsed.bacterium, ?cmd, "starting");

    // A missing or malformed dataset is fatal before any page is shown.
    let storage = Storage::csv(&parsed.data)?;
    let services = AppServices::new(parsed.config(), &storage, Arc::new(TokioPacer)).await?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Phage Therapy Analyzer")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Headless => headless::run(&services, parsed.json).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
