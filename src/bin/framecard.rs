//! Scene-dump CLI: evaluate builtin templates to scene JSON.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use framecard::{FrameIndex, FrameRange, RenderThreading};

#[derive(Parser, Debug)]
#[command(name = "framecard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List builtin templates and their invocation contracts.
    Templates,
    /// Render a single frame as scene JSON.
    Frame(FrameArgs),
    /// Render every frame as one scene JSON file per frame.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Template identifier (see `templates`).
    #[arg(long)]
    template: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Optional props JSON file; defaults to the template's default payload.
    #[arg(long)]
    props: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Template identifier (see `templates`).
    #[arg(long)]
    template: String,

    /// Optional props JSON file; defaults to the template's default payload.
    #[arg(long)]
    props: Option<PathBuf>,

    /// Output directory for `frame_<n>.json` files.
    #[arg(long)]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Templates => cmd_templates(),
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn cmd_templates() -> anyhow::Result<()> {
    for template in framecard::builtin_templates() {
        let spec = template.spec();
        println!(
            "{}  {} frames @ {}fps  {}x{}",
            spec.id,
            spec.duration.0,
            spec.fps.as_f64(),
            spec.canvas.width,
            spec.canvas.height
        );
    }
    Ok(())
}

fn load_props(path: Option<&PathBuf>) -> anyhow::Result<Option<serde_json::Value>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read props '{}'", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("parse props '{}'", path.display()))?;
    Ok(Some(value))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let template = framecard::find_template(&args.template)?;
    let props = load_props(args.props.as_ref())?;
    let scene = framecard::render_frame(template.as_ref(), FrameIndex(args.frame), props.as_ref())?;
    let json = serde_json::to_string_pretty(&scene)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let template = framecard::find_template(&args.template)?;
    let props = load_props(args.props.as_ref())?;
    let spec = template.spec();

    let range = FrameRange::new(FrameIndex(0), spec.duration)?;
    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let scenes = framecard::render_frames(template.as_ref(), range, props.as_ref(), &threading)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    for scene in &scenes {
        let path = args.out.join(format!("frame_{:05}.json", scene.frame.0));
        let json = serde_json::to_string(scene)?;
        std::fs::write(&path, json).with_context(|| format!("write '{}'", path.display()))?;
    }

    eprintln!("wrote {} frames to {}", scenes.len(), args.out.display());
    Ok(())
}
