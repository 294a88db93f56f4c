use ujs_intercept::config::ClassifierConfig;
use ujs_intercept::logging;
use ujs_intercept::replay::{self, Fixture};

use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use std::io::{self, Write};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "usage: ujs-replay <fixture.json> [--config <config.json>]";

/// Parsed command line.
struct Args {
    fixture: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut fixture = None;
    let mut config = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config needs a path\n{}", USAGE),
            },
            flag if flag.starts_with("--") => bail!("unknown flag {}\n{}", flag, USAGE),
            _ if fixture.is_some() => bail!("more than one fixture given\n{}", USAGE),
            _ => fixture = Some(PathBuf::from(arg)),
        }
    }

    match fixture {
        Some(fixture) => Ok(Args { fixture, config }),
        None => bail!("{}", USAGE),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ClassifierConfig> {
    let config = match path {
        Some(path) => ClassifierConfig::load(path)
            .wrap_err_with(|| format!("loading config {}", path.display()))?,
        None => ClassifierConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("ujs-replay {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    logging::init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config.as_ref())?;
    let fixture = Fixture::load(&args.fixture)?;

    tracing::info!(
        fixture = %args.fixture.display(),
        events = fixture.events.len(),
        "replaying fixture"
    );

    let records = replay::replay(&fixture, config)?;

    // stdout carries one JSON record per line
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
