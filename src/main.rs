//! Route Conventions
//!
//! Inspector CLI for the convention-based route synthesis engine: reads a
//! discovery document, runs the synthesis pass, and prints the resulting
//! route table.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use route_conventions::{
    config::Settings,
    logging,
    schemas::{RouteReport, RouteRow},
    ConventionEngine, DiscoveryDocument,
};
use std::path::PathBuf;

/// Route Conventions
///
/// Derives HTTP exposure metadata for application services from naming
/// conventions and prints the synthesized route table.
#[derive(Parser, Debug)]
#[command(name = "route-conventions")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Discovery document (JSON) describing the service candidates
    #[arg(short, long)]
    input: PathBuf,

    /// Controller settings file (JSON array, one entry per assembly)
    #[arg(long)]
    controller_settings: Option<PathBuf>,

    /// Default module name for assemblies without a setting (overrides
    /// DEFAULT_MODULE_NAME env var)
    #[arg(long)]
    default_module: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first (before logging, so we can use log_level)
    let mut settings = Settings::load()?;

    // Override settings with CLI arguments
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if args.log_json {
        settings.log_json = true;
    }
    if let Some(default_module) = args.default_module {
        settings.default_module_name = default_module;
    }
    if let Some(path) = args.controller_settings {
        settings.controller_settings_file = Some(path);
    }

    logging::init_tracing(&settings.log_level, settings.log_json);

    tracing::info!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        input = %args.input.display(),
        "Starting route synthesis"
    );

    let config = settings
        .convention_config()
        .context("Failed to load controller settings")?;

    let doc = DiscoveryDocument::from_json_file(&args.input)
        .with_context(|| format!("Failed to load discovery document from {}", args.input.display()))?;

    let engine = ConventionEngine::new(config);
    let plan = engine.run(&doc);
    let resolved = plan.resolve(&doc);
    let report = RouteReport::from_resolved(doc.source.clone(), &resolved);

    tracing::info!(
        services = resolved.len(),
        routes = report.routes.len(),
        "Route synthesis complete"
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }

    Ok(())
}

/// Print the route table as aligned columns
fn print_table(report: &RouteReport) {
    if report.routes.is_empty() {
        println!("No routes synthesized.");
        return;
    }

    let rows: Vec<(String, String, String, String)> = report
        .routes
        .iter()
        .map(|row| {
            (
                format_verbs(row),
                row.template.clone().unwrap_or_else(|| "-".to_string()),
                format!("{}.{}", row.controller, row.action),
                if row.visible { "visible" } else { "hidden" }.to_string(),
            )
        })
        .collect();

    let verb_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(4);
    let template_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max(8);
    let action_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(0).max(6);

    println!(
        "{:<verb_width$}  {:<template_width$}  {:<action_width$}  {}",
        "VERB", "TEMPLATE", "ACTION", "EXPLORER"
    );
    for (verbs, template, action, visibility) in rows {
        println!(
            "{:<verb_width$}  {:<template_width$}  {:<action_width$}  {}",
            verbs, template, action, visibility
        );
    }
}

fn format_verbs(row: &RouteRow) -> String {
    if row.verbs.is_empty() {
        "*".to_string()
    } else {
        row.verbs
            .iter()
            .map(|verb| verb.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
