use anyhow::Context;
use clap::{Parser, Subcommand};
use config::SiteConfig;
use site::Site;
use std::{path::PathBuf, time::Instant};

mod config;
mod output;
mod site;
mod util;

#[derive(Parser, Debug)]
#[command(name = "coursepage")]
#[command(about = "Generates the course landing page")]
#[command(version)]
struct Args {
    /// Site configuration (defaults apply if the file is missing)
    #[arg(short, long, default_value = "coursepage.toml", global = true)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the site into the configured output directory
    Build,
    /// Serve the site from memory
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,
    },
}

fn main() -> anyhow::Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    let config = SiteConfig::load(&args.config)?;
    let site = Site::new(config);

    let output = site.output().context("couldn't render site")?;
    tracing::info!(
        "({:.1}s) Rendered {} files",
        start.elapsed().as_secs_f32(),
        output.len()
    );

    match args.command {
        Command::Build => {
            output::build(start, &site, &output)?;
        }
        Command::Serve { addr } => {
            output::serve(start, &addr, &output)?;
        }
    }

    Ok(())
}
