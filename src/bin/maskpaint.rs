use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "maskpaint", version)]
struct Cli {
    /// Increase log verbosity (default info, -v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a JSON mask batch into a `[1, H, W, 3]` float image (JSON).
    Composite(CompositeArgs),
    /// Validate one color token and print it as hex or decimal channels.
    Pick(PickArgs),
    /// Print the node registration records as JSON.
    Nodes,
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// Input batch: `{ "width": W, "height": H, "masks": [[...], ...] }`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// `palette`, or a comma-separated list of `#RRGGBB` / named colors.
    #[arg(long, default_value = "palette")]
    colors: String,

    /// Background color; overrides the config file.
    #[arg(long)]
    background: Option<String>,

    /// JSON file with `background` and `fallback` colors.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PickArgs {
    /// Color token, e.g. `#A1B2C3` or `white`.
    #[arg(allow_hyphen_values = true, default_value = "")]
    color: String,

    #[arg(long, value_enum, default_value_t = ModeChoice::Hex)]
    mode: ModeChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Hex,
    Dec,
}

impl From<ModeChoice> for maskpaint::ColorMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Hex => Self::Hex,
            ModeChoice::Dec => Self::Dec,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchFile {
    width: u32,
    height: u32,
    masks: Vec<Vec<f32>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Composite(args) => cmd_composite(args),
        Command::Pick(args) => cmd_pick(args),
        Command::Nodes => cmd_nodes(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<()> {
    let mut opts = match &args.config {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            maskpaint::CompositeOpts::from_json_str(&s)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => maskpaint::CompositeOpts::default(),
    };
    if let Some(bg) = &args.background {
        opts.background = maskpaint::parse_color(bg).context("parse --background")?;
    }
    let colors: maskpaint::ColorSource = args.colors.parse().context("parse --colors")?;

    let f = File::open(&args.in_path)
        .with_context(|| format!("open mask batch '{}'", args.in_path.display()))?;
    let batch: BatchFile = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse mask batch '{}'", args.in_path.display()))?;
    let masks = maskpaint::MaskBatch::from_planes(
        maskpaint::MaskDims::new(batch.width, batch.height),
        batch.masks,
    )?;

    let (image, stats) = maskpaint::masks_to_image_with_stats(&masks, &colors, &opts)?;
    tracing::info!(layers = stats.layers, "composited");

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer(&mut w, &image)?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer(&mut w, &image)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_pick(args: PickArgs) -> anyhow::Result<()> {
    let picked = maskpaint::pick_color(&args.color, args.mode.into())?;
    println!("{picked}");
    Ok(())
}

fn cmd_nodes() -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(maskpaint::node::registry())?
    );
    Ok(())
}
