use chrono::NaiveDate;
use clap::Parser;
use serde_json::Value;
use solardocs_documents::{DocumentComposer, DocumentKind, GenerationOptions, OutputMode};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Renders one document from a record JSON file, without the service.
#[derive(Parser, Debug)]
#[command(name = "solardocs-render", version)]
struct Args {
    /// Document kind, e.g. `dcr-declaration` or `wcr`.
    #[arg(short, long)]
    kind: DocumentKind,

    /// Record JSON file.
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the PDF. Defaults to the document's own filename.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory that image fields naming files are resolved against.
    /// Defaults to the directory of the record file.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Date printed as "today" (YYYY-MM-DD).
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading record from {}", args.input.display());
    let record: Value = serde_json::from_str(&fs::read_to_string(&args.input)?)?;

    let mut options = GenerationOptions { mode: OutputMode::Download, ..GenerationOptions::default() };
    if let Some(today) = args.today {
        options.today = today;
    }

    let assets = args
        .assets
        .or_else(|| args.input.parent().map(Path::to_path_buf))
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."));
    log::info!("Resolving image files against {}", assets.display());
    let composer = DocumentComposer::with_asset_dir(&assets);

    let document = composer.generate_json(args.kind, record, &options).await?;
    let output = args.output.unwrap_or_else(|| PathBuf::from(&document.filename));
    fs::write(&output, &document.bytes)?;

    println!("Wrote {} ({} bytes)", output.display(), document.bytes.len());
    Ok(())
}
