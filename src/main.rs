//! Inference scheduler configuration entry point.
//!
//! Loads the configuration snapshot from the environment, logs it, and
//! reports anything the scheduler would reject.
//!
//! ```text
//! environment ─▶ Config::load ─▶ log summary ─▶ advisory validation ─▶ print
//! ```
//!
//! Flags only shape the output. Every configuration value still comes from
//! the environment.

use clap::{Parser, ValueEnum};

use infersched::config::{validate_config, Config, ValidationError};
use infersched::observability::logging;

#[derive(Parser)]
#[command(name = "infersched")]
#[command(about = "Load and inspect the inference scheduler configuration", long_about = None)]
struct Cli {
    /// Also print the redacted configuration in this format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fail if the configuration has advisory issues.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Toml,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging();

    tracing::info!("infersched v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    logging::log_config_summary(&config);

    let issues = match validate_config(&config) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };
    for issue in &issues {
        tracing::warn!(%issue, "Configuration issue");
    }

    if let Some(rendered) = render(&config, cli.format)? {
        print!("{rendered}");
    }

    enforce(cli.strict, &issues)
}

/// Redacted snapshot in the requested format, `None` for plain text.
fn render(config: &Config, format: Format) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let redacted = config.redacted();
    let rendered = match format {
        Format::Text => return Ok(None),
        Format::Json => serde_json::to_string_pretty(&redacted)? + "\n",
        Format::Toml => toml::to_string_pretty(&redacted)?,
    };
    Ok(Some(rendered))
}

fn enforce(strict: bool, issues: &[ValidationError]) -> Result<(), Box<dyn std::error::Error>> {
    if strict && !issues.is_empty() {
        return Err(format!("{} configuration issue(s) found", issues.len()).into());
    }
    Ok(())
}
