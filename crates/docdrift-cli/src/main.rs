use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docdrift_cli::cli::{Cli, OutputFormat};
use docdrift_cli::scanner::{ScanOptions, Scanner};
use docdrift_cli::{config, fixes, report, runner};

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        // Findings flip the exit code, vet style, unless they were fixed.
        Ok(found) if found && !cli.fix => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("docdrift: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    if cli.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.jobs)
            .build_global()
            .ok();
    }

    let config = config::resolve(cli)?;
    let scanner = Scanner::new(ScanOptions::default())?;
    let files = scanner.scan(&cli.paths)?;
    tracing::debug!(files = files.len(), "collected Go files");

    let diagnostics = runner::run(&files, &config);
    match cli.format {
        OutputFormat::Text => print!("{}", report::render_text(&diagnostics)),
        OutputFormat::Json => println!("{}", report::render_json(&diagnostics)?),
    }

    if cli.fix {
        let applied = fixes::apply_fixes(&diagnostics)?;
        tracing::info!(applied, "applied suggested fixes");
    }
    Ok(!diagnostics.is_empty())
}
