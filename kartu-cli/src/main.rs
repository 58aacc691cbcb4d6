//! Kartu CLI — renders news cards from the command line.
//!
//! `kartu render` drives the full pipeline: load (or default) a
//! `CardConfig`, decode the configured images, render the 1080×1080
//! card, and write PNG or JPEG bytes. `kartu projects` manages the
//! saved-snapshot store.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use uuid::Uuid;

use kartu_core::config::CardConfig;
use kartu_render::{encode, CardAssets, CardRenderer, ExportFormat};
use kartu_store::ProjectStore;
use kartu_text::FontShaper;

#[derive(Parser)]
#[command(name = "kartu", about = "Social-media news card generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a card to a raster image
    Render(RenderArgs),
    /// Manage saved project snapshots
    Projects(ProjectsArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Card config JSON; the built-in demo card when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Background photo, overriding the config's reference
    #[arg(long)]
    background: Option<PathBuf>,
    /// Logo image, overriding the config's reference
    #[arg(long)]
    logo: Option<PathBuf>,
    /// Output path
    #[arg(long, default_value = "card.png")]
    out: PathBuf,
    #[arg(long, value_enum, default_value = "png")]
    format: FormatArg,
    /// Also save the rendered config as a named snapshot
    #[arg(long)]
    save_as: Option<String>,
    /// Project store path
    #[arg(long, default_value = "kartu-projects.json")]
    store: PathBuf,
}

#[derive(Args)]
struct ProjectsArgs {
    /// Project store path
    #[arg(long, default_value = "kartu-projects.json")]
    store: PathBuf,
    #[command(subcommand)]
    action: ProjectsAction,
}

#[derive(Subcommand)]
enum ProjectsAction {
    /// List saved snapshots, newest first
    List,
    /// Delete a snapshot by id
    Delete { id: Uuid },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Png,
    Jpg,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Jpg => ExportFormat::Jpeg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Render(args) => render(args),
        Command::Projects(args) => projects(args),
    }
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CardConfig::default(),
    };

    let background = read_image_bytes(args.background.as_deref(), config.background_image.as_deref());
    let logo = read_image_bytes(args.logo.as_deref(), config.logo_url.as_deref());
    let assets = CardAssets::decode(background.as_deref(), logo.as_deref());

    let mut renderer = CardRenderer::new(FontShaper::new());
    let frame = renderer.render(&config, &assets)?;
    info!("rendered card generation {}", frame.generation());

    let format = ExportFormat::from(args.format);
    let bytes = encode(frame, format)?;
    fs::write(&args.out, &bytes)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!("wrote {} ({} bytes)", args.out.display(), bytes.len());

    if let Some(name) = args.save_as {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let saved = ProjectStore::open(&args.store).save(name, &config, timestamp)?;
        info!("saved project {:?} as {}", saved.name, saved.id);
    }

    Ok(())
}

/// Resolve an image to bytes: an explicit CLI path wins, then the
/// config's reference. Unreadable files follow the card's recovery
/// policy — warn and continue without the image.
fn read_image_bytes(
    cli_path: Option<&std::path::Path>,
    config_ref: Option<&str>,
) -> Option<Vec<u8>> {
    let path: PathBuf = match (cli_path, config_ref) {
        (Some(p), _) => p.to_path_buf(),
        (None, Some(r)) => PathBuf::from(r),
        (None, None) => return None,
    };
    match fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("could not read image {} ({e}); continuing without it", path.display());
            None
        }
    }
}

fn projects(args: ProjectsArgs) -> anyhow::Result<()> {
    let store = ProjectStore::open(&args.store);
    match args.action {
        ProjectsAction::List => {
            let projects = store.list()?;
            if projects.is_empty() {
                println!("no saved projects");
            }
            for p in projects {
                println!("{}  {}  {:?} ({})", p.id, p.timestamp, p.name, p.config.template.display_name());
            }
        }
        ProjectsAction::Delete { id } => {
            store.delete(id)?;
            println!("deleted {id}");
        }
    }
    Ok(())
}
