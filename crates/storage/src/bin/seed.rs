use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use phage_core::config::DEFAULT_BACTERIUM;
use phage_core::model::{BacteriumId, PhageId, ResultRecord};
use storage::csv_file::write_records;

/// Scratch location; the curated dataset under `data/` is never the default target.
const DEFAULT_OUT: &str = "data/seeded_results.csv";

#[derive(Debug, Clone)]
struct Args {
    out: PathBuf,
    bacterium: BacteriumId,
    bacterium_name: String,
    phages: u32,
    force: bool,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPhages { raw: String },
    InvalidOut { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPhages { raw } => write!(f, "invalid --phages value: {raw}"),
            ArgsError::InvalidOut { raw } => write!(f, "invalid --out value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
struct OutputExists(PathBuf);

impl fmt::Display for OutputExists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} already exists (pass --force to overwrite)", self.0.display())
    }
}

impl std::error::Error for OutputExists {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut out = PathBuf::from(DEFAULT_OUT);
        let mut bacterium = std::env::var("PHAGE_BACTERIUM")
            .map_or_else(|_| BacteriumId::new(DEFAULT_BACTERIUM), BacteriumId::new);
        let mut bacterium_name = "Klebsiella pneumoniae".to_string();
        let mut phages = 8;
        let mut force = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => {
                    let value = require_value(&mut args, "--out")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidOut { raw: value });
                    }
                    out = PathBuf::from(value);
                }
                "--bacterium" => {
                    bacterium = BacteriumId::new(require_value(&mut args, "--bacterium")?);
                }
                "--bacterium-name" => {
                    bacterium_name = require_value(&mut args, "--bacterium-name")?;
                }
                "--phages" => {
                    let value = require_value(&mut args, "--phages")?;
                    phages = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidPhages { raw: value.clone() })?;
                }
                "--force" => force = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            out,
            bacterium,
            bacterium_name,
            phages,
            force,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out <path>              CSV file to write (default: {DEFAULT_OUT})");
    eprintln!("  --bacterium <id>          Bacterium the demo identifies (default: {DEFAULT_BACTERIUM})");
    eprintln!("  --bacterium-name <name>   Display name for that bacterium");
    eprintln!("  --phages <n>              Phage rows for the selected bacterium (default: 8)");
    eprintln!("  --force                   Overwrite --out if it already exists");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  PHAGE_BACTERIUM");
}

/// Deterministic pseudo-scores in `[0.05, 0.95]`, spread so a few land above 75%.
fn demo_score(seed: u32) -> f64 {
    let mixed = seed.wrapping_mul(2_654_435_761) >> 16;
    0.05 + f64::from(mixed % 901) / 1000.0
}

fn build_records(args: &Args) -> Result<Vec<ResultRecord>, Box<dyn std::error::Error>> {
    let names = [
        "Kayvirus K1", "Tequatrovirus T4", "Przondovirus KP32", "Slopekvirus KpV",
        "Drulisvirus KP34", "Webervirus F19", "Jiaodavirus JD18", "Sugarlandvirus",
    ];
    let others = [
        ("GL538315", "Escherichia coli"),
        ("NC_002516", "Pseudomonas aeruginosa"),
    ];

    let mut records = Vec::new();
    for i in 0..args.phages {
        let idx = (i as usize) % names.len();
        let record = ResultRecord::new(
            args.bacterium.clone(),
            PhageId::new(format!("PH{:03}", i + 1)),
            demo_score(i + 1),
        )?
        .with_wgs_output(Some(demo_score(i + 101)))?
        .with_names(Some(args.bacterium_name.clone()), Some(names[idx].to_string()));
        records.push(record);
    }
    for (offset, (id, name)) in (0_u32..).zip(others) {
        let record = ResultRecord::new(
            BacteriumId::new(id),
            PhageId::new(format!("PH{:03}", 900 + offset)),
            demo_score(500 + offset),
        )?
        .with_names(Some(name.to_string()), None);
        records.push(record);
    }
    Ok(records)
}

/// Existing files are only replaced with `force`.
fn open_output(path: &Path, force: bool) -> Result<File, Box<dyn std::error::Error>> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(path).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => OutputExists(path.to_path_buf()).into(),
        _ => err.into(),
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let records = build_records(&args)?;
    write_records(open_output(&args.out, args.force)?, &records)?;

    println!(
        "Seeded {} rows ({} for {}) into {}",
        records.len(),
        args.phages,
        args.bacterium,
        args.out.display()
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
