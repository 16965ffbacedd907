//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use tocify_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// tocify — turn marker-annotated text into a navigable HTML document.
#[derive(Parser)]
#[command(
    name = "tocify",
    version,
    about = "Convert plain text with #-style section markers into an HTML document with a linked table of contents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Parse a text file into an HTML document.
    Parse {
        /// Input text file.
        file: PathBuf,

        /// Output path; `-` writes to stdout (defaults to the input path
        /// with an .html extension).
        #[arg(short, long)]
        out: Option<String>,

        /// Section marker character (overrides the config file).
        #[arg(short, long)]
        marker: Option<char>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "info,tocify_cli=debug,tocify_core=debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse { file, out, marker } => cmd_parse(&file, out.as_deref(), marker),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_parse(file: &Path, out: Option<&str>, marker: Option<char>) -> Result<()> {
    let config = load_config()?;
    let marker = marker.unwrap_or(config.parser.section_marker);

    let bytes = std::fs::read(file)
        .map_err(|e| eyre!("cannot read '{}': {e}", file.display()))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| eyre!("'{}' is not valid UTF-8 text", file.display()))?;

    let lines = tocify_core::split_lines(&text);
    info!(lines = lines.len(), %marker, "parsing input");

    let html = tocify_core::parse_to_html(Some(&lines), marker)?;

    match out {
        Some("-") => {
            print!("{html}");
        }
        Some(path) => {
            std::fs::write(path, &html)
                .map_err(|e| eyre!("cannot write '{path}': {e}"))?;
            println!("Wrote {path}");
        }
        None => {
            let path = default_output_path(file);
            std::fs::write(&path, &html)
                .map_err(|e| eyre!("cannot write '{}': {e}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Derive the default output path: the input path with an `.html` extension.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
