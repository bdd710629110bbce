mod report;

use anyhow::{Context, Result, bail};
use argscope_args::application::{ApplicationArguments, DefaultApplicationArguments};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

use crate::report::ArgsReport;

#[derive(Parser)]
#[command(name = "argscope")]
#[command(version, about = "Command-line argument inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse tokens and report options and positionals
    Inspect(InspectArgs),

    /// Print the values recorded for a single option
    Get(GetArgs),
}

#[derive(Parser)]
struct InspectArgs {
    /// Output JSON report path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only output JSON (no human-readable output)
    #[arg(long)]
    json: bool,

    /// Raw tokens to parse (put `--` before option-like tokens)
    #[arg(value_name = "TOKEN", trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Parser)]
struct GetArgs {
    /// Option name to look up, without the leading `--`
    #[arg(value_name = "NAME")]
    name: String,

    /// Raw tokens to parse (put `--` before option-like tokens)
    #[arg(value_name = "TOKEN", trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => inspect(args),
        Commands::Get(args) => get(args),
    }
}

fn inspect(args: InspectArgs) -> Result<()> {
    tracing::debug!("executing inspect command");

    let arguments = DefaultApplicationArguments::new(Some(args.tokens))?;
    let report = ArgsReport::from_arguments(&arguments);

    // Write JSON report if requested
    if let Some(output_path) = &args.output {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(output_path, &json)
            .with_context(|| format!("failed to write report: {}", output_path.display()))?;
        if !args.json {
            eprintln!("Report: {}", output_path.display());
        }
    }

    if args.json {
        // JSON-only output
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        // Human-readable output
        eprintln!();
        eprintln!("=== Argument Inspection ===");
        eprintln!("Source tokens: {}", report.source_args.len());

        if report.options.is_empty() {
            eprintln!("Options: none");
        } else {
            eprintln!("Options: {}", report.options.len());
            for (name, values) in &report.options {
                if values.is_empty() {
                    eprintln!("  --{name} (flag)");
                } else {
                    eprintln!("  --{name} = {}", values.join(", "));
                }
            }
        }

        if report.non_option_args.is_empty() {
            eprintln!("Non-option arguments: none");
        } else {
            eprintln!("Non-option arguments: {}", report.non_option_args.len());
            for arg in &report.non_option_args {
                eprintln!("  {arg}");
            }
        }
    }

    Ok(())
}

fn get(args: GetArgs) -> Result<()> {
    tracing::debug!("executing get command");

    let arguments = DefaultApplicationArguments::new(Some(args.tokens))?;
    let Some(values) = arguments.option_values(&args.name) else {
        bail!("option not present: --{}", args.name);
    };

    for value in values {
        println!("{value}");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
