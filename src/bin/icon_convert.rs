//! Build-time helper that turns the app logo into `icon.ico`.

use anyhow::Context;
use clap::Parser;
use notes_calendar_lib::icon::{convert_to_ico, IconOptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "icon-convert", about = "Convert a PNG logo into a 256x256 ICO")]
struct Cli {
    /// Source image.
    #[arg(long, short, default_value = "icon.png")]
    input: PathBuf,

    /// Destination ICO file.
    #[arg(long, short, default_value = "icon.ico")]
    output: PathBuf,

    /// Make white and light grey checkerboard pixels transparent first.
    /// Logos with a baked-in checkerboard live in `logo_def.png`; pass it with `--input`.
    #[arg(long)]
    strip_background: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = IconOptions {
        input: cli.input,
        output: cli.output,
        strip_background: cli.strip_background,
    };

    let report = convert_to_ico(&options)
        .with_context(|| format!("converting {}", options.input.display()))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
