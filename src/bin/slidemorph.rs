use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use slidemorph::Presenter as _;

#[derive(Parser, Debug)]
#[command(name = "slidemorph", version)]
struct Cli {
    /// Engine config JSON (canvas, frame, instance cap, interpolation, fps).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every parameter with its label and default.
    Params,
    /// Render the static instances of one slide as SVG or PNG.
    Frame(FrameArgs),
    /// Play the morph through all slides, writing one file per frame.
    Morph(MorphArgs),
}

#[derive(Parser, Debug)]
struct SlideArgs {
    /// Content file per slide, in order (.svg, .path/.d/.txt or a raster image).
    #[arg(long = "slide", required = true)]
    slides: Vec<PathBuf>,

    /// Parameter edit as `<slide>.<id>=<text>`, e.g. `0.count=5`.
    #[arg(long = "set")]
    sets: Vec<String>,

    /// Fill color for vector content.
    #[arg(long, default_value = "black")]
    fill: String,

    /// Background color; transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    slides: SlideArgs,

    /// Slide to render (0-based).
    #[arg(long, default_value_t = 0)]
    select: usize,

    /// Output path; `.png` rasterizes, anything else writes SVG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct MorphArgs {
    #[command(flatten)]
    slides: SlideArgs,

    /// Output directory for frame files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Rasterize frames to PNG instead of writing SVG.
    #[arg(long, default_value_t = false)]
    png: bool,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 100_000)]
    max_frames: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = match &cli.config {
        Some(path) => slidemorph::EngineConfig::from_path(path)?,
        None => slidemorph::EngineConfig::default(),
    };
    config.validate()?;

    match cli.cmd {
        Command::Params => cmd_params(),
        Command::Frame(args) => cmd_frame(&config, args),
        Command::Morph(args) => cmd_morph(&config, args),
    }
}

fn cmd_params() -> anyhow::Result<()> {
    for d in slidemorph::descriptors() {
        println!("{:<8} {:<26} {}", d.id.as_str(), d.label, d.default);
    }
    Ok(())
}

fn cmd_frame(config: &slidemorph::EngineConfig, args: FrameArgs) -> anyhow::Result<()> {
    let mut store = build_store(config, &args.slides)?;
    store.select(args.select)?;

    let renderer = slidemorph::InstanceRenderer::new(config.max_instances);
    let mut scene = scene(config, &args.slides);
    let drawn = renderer.render_slide(store.current_slide()?, &mut scene);
    tracing::info!(drawn, slide = args.select, "frame rendered");

    let svg = scene
        .take_frames()
        .pop()
        .context("renderer produced no frame")?;
    ensure_parent_dir(&args.out)?;
    write_frame(&svg, &args.out, is_png(&args.out))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_morph(config: &slidemorph::EngineConfig, args: MorphArgs) -> anyhow::Result<()> {
    let store = build_store(config, &args.slides)?;
    let mut driver = slidemorph::MorphDriver::new(
        slidemorph::ResamplingInterpolator,
        config.interpolate,
        slidemorph::InstanceRenderer::new(config.max_instances),
    );
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let mut writer = FrameWriter {
        scene: scene(config, &args.slides),
        out_dir: &args.out_dir,
        png: args.png,
        written: 0,
        error: None,
    };
    let summary =
        slidemorph::play_offline(&mut driver, &store, config.fps, &mut writer, args.max_frames)?;
    if let Some(e) = writer.error {
        return Err(e);
    }

    if !summary.finished {
        eprintln!("stopped after {} frames", summary.frames);
    }
    eprintln!(
        "wrote {} frames ({} steps) to {}",
        summary.frames,
        summary.steps,
        args.out_dir.display()
    );
    Ok(())
}

/// Presenter that writes every completed frame to `out_dir` instead of keeping it.
struct FrameWriter<'a> {
    scene: slidemorph::SvgScene,
    out_dir: &'a Path,
    png: bool,
    written: usize,
    error: Option<anyhow::Error>,
}

impl slidemorph::Presenter for FrameWriter<'_> {
    fn begin_frame(&mut self) {
        self.scene.begin_frame();
    }

    fn place(&mut self, placement: &slidemorph::Placement<'_>) {
        self.scene.place(placement);
    }

    fn write_geometry(&mut self, write: &slidemorph::GeometryWrite<'_>) {
        self.scene.write_geometry(write);
    }

    fn end_frame(&mut self) {
        self.scene.end_frame();
        let ext = if self.png { "png" } else { "svg" };
        for svg in self.scene.take_frames() {
            if self.error.is_some() {
                continue;
            }
            let out = self.out_dir.join(format!("frame_{:05}.{ext}", self.written));
            match write_frame(&svg, &out, self.png) {
                Ok(()) => self.written += 1,
                Err(e) => self.error = Some(e),
            }
        }
    }
}

fn build_store(
    config: &slidemorph::EngineConfig,
    args: &SlideArgs,
) -> anyhow::Result<slidemorph::SlideStore> {
    let mut store = slidemorph::SlideStore::new();
    for _ in 1..args.slides.len() {
        store.duplicate_current()?;
    }

    let mut loads = slidemorph::LoadQueue::new(Arc::new(slidemorph::FsContentLoader::new(
        config.frame,
    )));
    for (i, path) in args.slides.iter().enumerate() {
        loads.request(i, path.clone());
    }
    for report in loads.wait_all(&mut store) {
        report
            .result
            .with_context(|| format!("load slide {} from '{}'", report.slide, report.path.display()))?;
    }

    for set in &args.sets {
        let (slide, id, text) = parse_set(set)?;
        if let slidemorph::EditOutcome::Held(e) = store.update_param(slide, id, text)? {
            tracing::warn!(set = %set, error = %e, "value not committed");
        }
    }
    Ok(store)
}

fn parse_set(s: &str) -> anyhow::Result<(usize, slidemorph::ParamId, &str)> {
    let (target, text) = s
        .split_once('=')
        .with_context(|| format!("expected <slide>.<id>=<text>, got '{s}'"))?;
    let (slide, id) = target
        .split_once('.')
        .with_context(|| format!("expected <slide>.<id>=<text>, got '{s}'"))?;
    let slide = slide
        .trim()
        .parse::<usize>()
        .with_context(|| format!("invalid slide index in '{s}'"))?;
    Ok((slide, id.trim().parse()?, text))
}

fn scene(config: &slidemorph::EngineConfig, args: &SlideArgs) -> slidemorph::SvgScene {
    let scene = slidemorph::SvgScene::new(config.canvas, args.fill.as_str());
    match &args.background {
        Some(color) => scene.with_background(color.as_str()),
        None => scene,
    }
}

fn write_frame(svg: &str, out: &Path, png: bool) -> anyhow::Result<()> {
    if png {
        slidemorph::write_png(svg, None, out)?;
    } else {
        std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
    }
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
