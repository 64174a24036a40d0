use std::{
    fmt::Write as _,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "electric-border", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence on a fixed-rate synthetic display.
    Frames(FramesArgs),
    /// Print the draw calls of one frame as JSON.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct OptionsArgs {
    /// Options JSON (camelCase keys). Missing keys keep the preset; zero values take the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base preset the config overrides.
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    options: OptionsArgs,

    /// Host timestamp of the frame callback, in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    time_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print the SHA-256 of the premultiplied frame pixels.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    options: OptionsArgs,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    count: usize,

    /// Display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Milliseconds elapsed before the first refresh.
    #[arg(long, default_value_t = 0.0)]
    origin_ms: f64,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    options: OptionsArgs,

    /// Host timestamp of the frame callback, in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    time_ms: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Default,
    Showcase,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn load_options(args: &OptionsArgs) -> anyhow::Result<electric_border::BorderOptions> {
    let base = match args.preset {
        Preset::Default => electric_border::BorderOptions::default(),
        Preset::Showcase => electric_border::BorderOptions::showcase(),
    };
    let Some(path) = &args.config else {
        return Ok(base);
    };

    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let overrides: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config JSON '{}'", path.display()))?;
    let serde_json::Value::Object(overrides) = overrides else {
        anyhow::bail!("config '{}' must be a JSON object", path.display());
    };

    let mut merged = serde_json::to_value(&base)?;
    if let serde_json::Value::Object(fields) = &mut merged {
        fields.extend(overrides);
    }
    let options: electric_border::BorderOptions =
        serde_json::from_value(merged).with_context(|| "validate config options")?;
    Ok(options)
}

fn write_png(path: &Path, frame: electric_border::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let straight = frame.into_straight();
    let img = image::RgbaImage::from_raw(straight.width, straight.height, straight.data)
        .ok_or_else(|| anyhow::anyhow!("invalid rgba buffer size"))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let options = load_options(&args.options)?;
    let frame = electric_border::render_frame(&options, args.time_ms)?;

    if args.digest {
        println!("{}", sha256_hex(&frame.data));
    }
    write_png(&args.out, frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let options = load_options(&args.options)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0usize;
    electric_border::render_at_fps(&options, args.fps, args.origin_ms, args.count, |i, _, f| {
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&path, f.clone()).map_err(electric_border::BorderError::Other)?;
        written += 1;
        Ok(())
    })?;

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let options = load_options(&args.options)?;
    let commands = electric_border::trace_frame(&options, args.time_ms)?;
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &commands).with_context(|| "write trace JSON")?;
    println!();
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        let _ = write!(out, "{b:02x}");
    }
    out
}
