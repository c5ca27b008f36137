use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use uuid::Uuid;

use board::doc::{Entity, EntityKind, Surface};
use exports::{HttpUploader, Uploader, payload_from_snapshot};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid board document: {0}")]
    InvalidDocument(#[from] board::doc::SurfaceError),
    #[error("upload failed: {0}")]
    Upload(#[from] exports::UploadError),
}

#[derive(Parser, Debug)]
#[command(name = "board-cli", about = "Tactic board document CLI")]
struct Cli {
    /// Storage-service endpoint for `upload`.
    #[arg(long, env = "BOARD_UPLOAD_URL", default_value = "http://127.0.0.1:3000/api/exports")]
    upload_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a saved board document against the entity invariants.
    Validate { file: PathBuf },
    /// Print entity counts per kind.
    Summary { file: PathBuf },
    /// Build an export payload for a record and print or write it.
    Export {
        file: PathBuf,
        #[arg(long)]
        record: Uuid,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build an export payload and post it to the storage service.
    Upload {
        file: PathBuf,
        #[arg(long)]
        record: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file } => run_validate(&file),
        Command::Summary { file } => run_summary(&file),
        Command::Export { file, record, out } => run_export(&file, record, out.as_deref()),
        Command::Upload { file, record } => run_upload(&cli.upload_url, &file, record).await,
    }
}

fn load_surface(path: &Path) -> Result<Surface, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    let entities: Vec<Entity> = serde_json::from_str(&raw)?;
    Ok(Surface::from_entities(entities)?)
}

fn run_validate(file: &Path) -> Result<(), CliError> {
    let surface = load_surface(file)?;
    println!("ok: {} entities", surface.len());
    Ok(())
}

fn run_summary(file: &Path) -> Result<(), CliError> {
    let surface = load_surface(file)?;
    let count = |kind: EntityKind| surface.entities().filter(|e| e.kind == kind).count();
    println!("freehand strokes: {}", count(EntityKind::FreehandStroke));
    println!("player tokens:    {}", count(EntityKind::PlayerToken));
    println!("movement paths:   {}", count(EntityKind::MovementPath));
    println!("pass arrows:      {}", count(EntityKind::PassArrow));
    println!("shot arrows:      {}", count(EntityKind::ShotArrow));
    Ok(())
}

fn run_export(file: &Path, record: Uuid, out: Option<&Path>) -> Result<(), CliError> {
    let surface = load_surface(file)?;
    let payload = payload_from_snapshot(record, &surface.snapshot());
    let json = serde_json::to_string_pretty(&payload)?;
    match out {
        Some(path) => {
            fs::write(path, json).map_err(|source| CliError::Write { path: path.to_path_buf(), source })?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

async fn run_upload(upload_url: &str, file: &Path, record: Uuid) -> Result<(), CliError> {
    let surface = load_surface(file)?;
    let payload = payload_from_snapshot(record, &surface.snapshot());
    let uploader = HttpUploader::new(upload_url);
    let receipt = uploader.upload(&payload).await?;
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}
