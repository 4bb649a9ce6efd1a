use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "poster-scene", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse scene files into renderable elements.
    Parse(ParseArgs),
    /// Parse a scene and rescale element positions for a target frame.
    Place(PlaceArgs),
    /// Build the font size table and report entries that failed to load.
    Fonts(FontsArgs),
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Input scene JSON (repeatable; files are parsed in parallel).
    #[arg(long = "in", required = true, num_args = 1..)]
    in_paths: Vec<PathBuf>,

    /// Parse configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target frame width in pixels.
    #[arg(long)]
    width: f64,

    /// Target frame height in pixels.
    #[arg(long)]
    height: f64,

    /// Ratio of target width to authoring width.
    #[arg(long, default_value_t = 1.0)]
    ratio: f64,

    /// Parse configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FontsArgs {
    /// Directory font sources are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Font family as `<language>:<weight>:<path>` (repeatable).
    #[arg(long = "family", required = true)]
    families: Vec<poster_scene::FontFamilySource>,

    /// Smallest point size.
    #[arg(long, default_value_t = poster_scene::DEFAULT_MIN_SIZE_PT)]
    min: u32,

    /// Largest point size.
    #[arg(long, default_value_t = poster_scene::DEFAULT_MAX_SIZE_PT)]
    max: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Parse(args) => cmd_parse(args),
        Command::Place(args) => cmd_place(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_parser(config: Option<&Path>) -> anyhow::Result<poster_scene::SceneParser> {
    let cfg = match config {
        Some(path) => poster_scene::ParseConfig::from_path(path)?,
        None => poster_scene::ParseConfig::default(),
    };
    Ok(poster_scene::SceneParser::new(cfg))
}

fn read_scene_json(path: &Path) -> anyhow::Result<poster_scene::SceneSource> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    Ok(poster_scene::SceneSource::Text(text))
}

fn write_json(out: Option<&Path>, value: &serde_json::Value) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text + "\n")
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
    }
    Ok(())
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let parser = load_parser(args.config.as_deref())?;

    let parsed = args
        .in_paths
        .par_iter()
        .map(|path| -> anyhow::Result<_> {
            let source = read_scene_json(path)?;
            Ok((path, parser.parse(&source)))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let value = if let [(_, elements)] = parsed.as_slice() {
        serde_json::to_value(elements)?
    } else {
        let mut map = serde_json::Map::new();
        for (path, elements) in &parsed {
            map.insert(path.display().to_string(), serde_json::to_value(elements)?);
        }
        serde_json::Value::Object(map)
    };
    write_json(args.out.as_deref(), &value)
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let parser = load_parser(args.config.as_deref())?;
    let source = read_scene_json(&args.in_path)?;
    let elements = parser.parse(&source);

    let frame = poster_scene::FrameSize::new(args.width, args.height);
    let placement = poster_scene::Placement::for_frame(frame, args.ratio);
    if !frame.is_measured() {
        tracing::warn!(
            width = args.width,
            height = args.height,
            "frame is not measured; positions are left unscaled"
        );
    }

    let value = serde_json::json!({
        "placement": placement,
        "elements": placement.place(&elements),
    });
    write_json(args.out.as_deref(), &value)
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let range = poster_scene::SizeRange::new(args.min, args.max)?;
    let mut loader = poster_scene::ParleyFontLoader::new(&args.root);
    let table = poster_scene::FontSizeTable::build(args.families, range, &mut loader);

    let failed = table.failed_entries();
    eprintln!(
        "font table: {} families x {} sizes ({}..={}pt), {} failed entries",
        table.families().len(),
        range.len(),
        range.min(),
        range.max(),
        failed.len()
    );
    for (idx, family) in table.families().iter().enumerate() {
        let loaded = table
            .row(idx)
            .map(|row| row.iter().filter(|e| e.is_some()).count())
            .unwrap_or(0);
        let name = range
            .sizes()
            .find_map(|size| table.get(idx, size))
            .map(|h| h.family_name.as_str())
            .unwrap_or("-");
        eprintln!(
            "  [{idx}] {}:{}:{} family={name} loaded={loaded}/{}",
            family.language.as_str(),
            family.weight.as_str(),
            family.source,
            range.len()
        );
    }

    if failed.len() == table.families().len() * range.len() {
        anyhow::bail!("no font could be loaded");
    }
    Ok(())
}
