// XCompose CLI
// Generates an aligned XCompose file with transliteration and collision checks

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use xcompose_core::{
    find_collisions, find_duplicates, flatten, load_system_compose, load_translit_map,
    parse_compose, render_document, resolve_locale, write_collision_report,
    write_duplicate_report, Entry, Settings, DEFAULT_LOCALE_DIR,
};

const DEFAULT_INPUT: &str = "XCompose-draft";
const DEFAULT_TRANSLIT: &str = "parallel-symbols.json";

/// XCompose generator with transliteration and collision detection
#[derive(Parser, Debug)]
#[command(name = "xcompose")]
#[command(version)]
#[command(
    about = "Generate XCompose configuration with transliteration and collision detection",
    long_about = None
)]
struct Args {
    /// Source XCompose draft file [default: XCompose-draft]
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output XCompose file [default: stdout]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Transliteration map JSON file [default: parallel-symbols.json]
    #[arg(short, long, value_name = "FILE")]
    translit: Option<PathBuf>,

    /// System locale for collision checking [default: auto-detect]
    #[arg(short, long)]
    locale: Option<String>,

    /// Only check for collisions, don't generate output
    #[arg(long)]
    check_only: bool,

    /// Exit with code 2 if collisions are detected
    #[arg(long)]
    strict: bool,

    /// Show verbose parsing details
    #[arg(short, long)]
    verbose: bool,

    /// Skip cross-system collision detection
    #[arg(long)]
    no_system_check: bool,

    /// Settings file [default: ~/.config/xcompose/settings.toml]
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

/// Effective options after merging flags, settings and defaults
#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    translit: PathBuf,
    locale: Option<String>,
    system_dir: PathBuf,
    check_only: bool,
    strict: bool,
    system_check: bool,
}

impl RunConfig {
    /// Flags win over settings, settings win over built-in defaults
    fn resolve(args: &Args, settings: &Settings) -> Self {
        Self {
            input: args
                .input
                .clone()
                .or_else(|| settings.input().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: args.output.clone(),
            translit: args
                .translit
                .clone()
                .or_else(|| settings.translit().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSLIT)),
            locale: args
                .locale
                .clone()
                .or_else(|| settings.locale().map(str::to_string)),
            system_dir: settings
                .system_compose_dir()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALE_DIR)),
            check_only: args.check_only,
            strict: args.strict || settings.strict(),
            system_check: !args.no_system_check && settings.system_check(),
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Clean,
    /// Collisions were found and strict mode asked to fail on them
    StrictCollisions,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::StrictCollisions => ExitCode::from(2),
        }
    }
}

/// Main application state
struct Application {
    config: RunConfig,
}

impl Application {
    /// Create a new application from CLI arguments
    fn new(args: &Args) -> anyhow::Result<Self> {
        let settings = match &args.settings {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::load_default().context("failed to load default settings")?,
        };

        Ok(Self {
            config: RunConfig::resolve(args, &settings),
        })
    }

    /// Load the system entries unless the check is disabled or impossible
    fn system_entries(&self) -> Option<Vec<Entry>> {
        if !self.config.system_check {
            return None;
        }

        let resolved = match &self.config.locale {
            Some(locale) => Ok(locale.clone()),
            None => resolve_locale(),
        };
        let locale = match resolved {
            Ok(locale) => locale,
            Err(e) => {
                log::warn!("{}; skipping system collision check", e);
                return None;
            }
        };

        log::info!("Loading system Compose for locale: {}", locale);
        let entries = load_system_compose(&self.config.system_dir, &locale);
        match &entries {
            Some(entries) => log::info!("Loaded {} system entries", entries.len()),
            None => log::info!("No system Compose entries found for locale {}", locale),
        }
        entries
    }

    /// Run the whole pipeline, writing diagnostics to `diag`
    fn run<W: Write>(&self, diag: &mut W) -> anyhow::Result<Outcome> {
        let config = &self.config;

        log::info!("Reading {}...", config.input.display());
        let content = std::fs::read_to_string(&config.input)
            .with_context(|| format!("failed to read {}", config.input.display()))?;
        let blocks = parse_compose(&content)
            .with_context(|| format!("failed to parse {}", config.input.display()))?;

        let entries = flatten(&blocks);
        log::info!(
            "Parsed {} entries from {} blocks",
            entries.len(),
            blocks.len()
        );

        let system_entries = self.system_entries();

        log::info!("Checking for collisions...");
        let collisions = find_collisions(&entries, system_entries.as_deref());
        let duplicates = find_duplicates(&entries);

        write_collision_report(diag, &collisions)?;
        write_duplicate_report(diag, &duplicates)?;

        let blocking = config.strict && !collisions.is_empty();
        if config.check_only || blocking {
            return Ok(if blocking {
                Outcome::StrictCollisions
            } else {
                Outcome::Clean
            });
        }

        let translit = load_translit_map(&config.translit).with_context(|| {
            format!(
                "failed to load transliteration map {}",
                config.translit.display()
            )
        })?;
        match &translit {
            Some(map) => log::info!("Loaded transliteration map with {} entries", map.len()),
            None => log::info!(
                "Transliteration file not found: {}",
                config.translit.display()
            ),
        }

        let document = render_document(&blocks, translit.as_ref());
        match &config.output {
            Some(path) => {
                std::fs::write(path, document)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                log::info!("Output written to {}", path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(document.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(Outcome::Clean)
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = Application::new(&args).and_then(|app| app.run(&mut io::stderr().lock()));
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
