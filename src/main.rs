use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hashdiff::{build_options, comparison_report, exit_code, run_compare, run_hash, Args, Command};

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Hash { file, digest, all } => {
            let opts = build_options(&digest)?;
            let digests = run_hash(&file, &opts, all).await?;

            if all {
                for d in &digests {
                    println!("{:<8} {}  {}", d.algorithm().name(), d, file.display());
                }
            } else {
                for d in &digests {
                    println!("{}  {}", d, file.display());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Compare {
            file_a,
            file_b,
            digest,
            sequential,
        } => {
            let opts = build_options(&digest)?;
            let comparison = run_compare(&file_a, &file_b, &opts, sequential).await?;

            for line in comparison_report(&comparison, opts.algorithm) {
                println!("{line}");
            }
            Ok(ExitCode::from(exit_code(&comparison.outcome)))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
