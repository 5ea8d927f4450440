//! Clientgen Code Generator
//!
//! Generates transport-bound Rust client bindings from schema definitions.

use std::path::PathBuf;

use clap::Parser;
use clientgen_gen::cargo_gen::DEFAULT_RUNTIME_PATH;
use clientgen_gen::config::{builtin_schema, load_schema_file, resolve_profiles};
use clientgen_gen::errors::GeneratorError;
use clientgen_gen::output::{GenerateOptions, generate_and_write};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Clientgen code generator - turns service schemas into typed client bindings
#[derive(Parser, Debug)]
#[command(name = "clientgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Built-in schema to generate bindings for (e.g., "test")
    #[arg(short, long, required_unless_present = "schema", conflicts_with = "schema")]
    api: Option<String>,

    /// JSON schema file to generate bindings for
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Transport profile to generate (repeatable; defaults to every built-in profile)
    #[arg(short, long = "profile")]
    profiles: Vec<String>,

    /// Directory of the generated crate
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// Package name of the generated crate (defaults to "<package>-client")
    #[arg(long)]
    crate_name: Option<String>,

    /// Path to the clientgen runtime crate used by the generated manifest
    #[arg(long, default_value = DEFAULT_RUNTIME_PATH)]
    runtime_path: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,clientgen_gen=info,clientgen=info".to_string(),
            2 => "info,clientgen_gen=debug,clientgen=debug".to_string(),
            _ => "debug,clientgen_gen=trace,clientgen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let schema = match (&cli.api, &cli.schema) {
        (Some(api), _) => builtin_schema(api)?,
        (None, Some(path)) => load_schema_file(path)?,
        (None, None) => {
            return Err(GeneratorError::ConfigError(
                "Either --api or --schema is required".to_string(),
            ));
        }
    };

    let options = GenerateOptions {
        profiles: resolve_profiles(&cli.profiles)?,
        crate_name: cli.crate_name,
        runtime_path: cli.runtime_path,
        dry_run: cli.dry_run,
        ..Default::default()
    };

    info!(
        package = schema.package(),
        output = %cli.output.display(),
        dry_run = options.dry_run,
        "generating bindings"
    );

    let files = generate_and_write(&schema, &cli.output, &options)?;

    if !options.dry_run {
        let profiles = options
            .profiles
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!(
            "{} {} files for '{}' ({}) in {}",
            "Generated".green().bold(),
            files.len(),
            schema.package(),
            profiles,
            cli.output.display().to_string().cyan()
        );
    }

    Ok(())
}
