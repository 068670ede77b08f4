//! Bookgen - a programmatic HTML book generator.
//!
//! This binary generates the showcase document through the bookgen
//! library crates, or dumps the default configuration/stylesheet.

mod cli;
mod showcase;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, warn, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bookgen_config::Config;
use bookgen_core::{HeadingPolicy, Result};
use bookgen_html::{default_css, HtmlEmitter};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --print-config before touching logging or config files
    if cli.print_config {
        print!("{}", Config::default_toml());
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Bookgen v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    // --css writes the standalone stylesheet and exits
    if let Some(ref css_path) = cli.css {
        let css = default_css(&config.style.palette(), &config.style.indent_unit());
        std::fs::write(css_path, css)?;
        info!("Wrote stylesheet to {}", css_path.display());
        return Ok(());
    }

    match cli.output {
        Some(ref path) => {
            info!("Writing document to {}", path.display());
            let file = File::create(path)?;
            write_document(BufWriter::new(file), &config)
        }
        None => {
            let stdout = io::stdout();
            write_document(stdout.lock(), &config)
        }
    }
}

/// Load configuration and apply CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_default();

    // Apply config override if provided
    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            match Config::load_from(Path::new(config_arg)) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged config from file: {}", config_arg);
                }
                Err(e) => {
                    error!("Failed to load config file {}: {}", config_arg, e);
                }
            }
        } else {
            // Try parsing as inline TOML
            match toml::from_str::<Config>(config_arg) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged inline config");
                }
                Err(e) => {
                    error!("Failed to parse config: {}", e);
                }
            }
        }
    }

    apply_cli_overrides(&mut config, cli);
    Ok(config)
}

/// Flags take precedence over anything loaded from files.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(theme) = cli.parse_theme() {
        config.style.theme = theme;
    }
    if let Some(depth) = cli.toc_depth {
        config.document.toc_depth = depth;
    }
    if cli.strict {
        config.document.heading_policy = HeadingPolicy::Strict;
    }
}

/// Generate the showcase document into a sink and flush it.
fn write_document<W: Write>(writer: W, config: &Config) -> Result<()> {
    let mut doc = HtmlEmitter::with_config(writer, config);
    showcase::write(&mut doc, config.document.toc_depth)?;

    let leftover = doc.finish()?;
    if leftover != 0 {
        warn!("document ended with {} unclosed element(s)", leftover);
    }
    Ok(())
}
