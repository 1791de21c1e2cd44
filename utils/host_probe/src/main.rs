use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use host_probe::{build_host, run_ops, Backend, Script};

/// Runs a scripted sequence of host callbacks against a host backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON probe script
    #[arg(short, long)]
    script: PathBuf,

    /// Host backend; overrides the script's `backend` field
    #[arg(short, long, value_enum)]
    backend: Option<Backend>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("host_probe=info,host=info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let script = Script::load(&args.script)?;
    let backend = args.backend.or(script.backend).unwrap_or_default();
    tracing::info!(?backend, ops = script.ops.len(), "running probe script");

    let mut host = build_host(&script, backend)?;
    let results = run_ops(host.as_mut(), &script.ops)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        "text" => {
            println!("{} {:?}", "Host probe".bold().blue(), backend);
            println!("{}", "=====================================".blue());
            for result in &results {
                println!(
                    "  [{}] {} -> {}",
                    result.index,
                    result.op.yellow(),
                    result.output.to_string().green()
                );
            }
        }
        other => anyhow::bail!("Unknown output format: {}", other),
    }

    Ok(())
}
