use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use svgtint::manifest::{self, ManifestEntry};
use svgtint::menu;
use svgtint::output::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "svgtint", about = "Generate color-variant SVG topic images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Image directory holding the topic SVGs.
    #[arg(long, default_value = "./public/topics", global = true)]
    dir: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every color variant of a single SVG.
    Recolor(RecolorArgs),

    /// Regenerate variants for every `-black` base SVG in the image directory.
    RecolorAll,

    /// Print the DEFAULT_TOPICS list for every generated SVG.
    Manifest(ManifestArgs),
}

#[derive(Args)]
struct RecolorArgs {
    /// Base SVG filename, `<base>-<style>.svg`. Prompted for when omitted.
    file: Option<String>,
}

#[derive(Args)]
struct ManifestArgs {
    /// Output format: pretty, text, or json.
    #[arg(long, default_value = "pretty")]
    format: String,
}

fn parse_format(s: &str) -> Result<OutputFormat> {
    match s {
        "pretty" => Ok(OutputFormat::Pretty),
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected pretty, text, or json)"),
    }
}

fn format_manifest(entries: &[ManifestEntry], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => output::format_json(entries),
        OutputFormat::Text => output::format_text(entries),
        OutputFormat::Pretty => output::format_pretty(entries),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Recolor(args)) => match args.file {
            Some(file) => menu::recolor_one(&cli.dir, &file),
            None => menu::dispatch(menu::Action::RecolorOne, &cli.dir),
        },

        Some(Command::RecolorAll) => menu::dispatch(menu::Action::RecolorAll, &cli.dir),

        Some(Command::Manifest(args)) => {
            let fmt = parse_format(&args.format)?;
            let entries = manifest::collect(&cli.dir)?;
            println!("{}", format_manifest(&entries, fmt));
            Ok(())
        }

        None => menu::run(&cli.dir),
    }
}
