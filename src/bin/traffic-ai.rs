use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "traffic-ai", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the site for a number of refreshes and write one PNG per widget.
    Frames(FramesArgs),
    /// Print the monitor readout for a traffic level as JSON.
    Status(StatusArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Site config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of display refreshes to run.
    #[arg(long, default_value_t = 120)]
    ticks: u64,

    /// Traffic level to select before the first refresh (`low`, `medium`, `high`).
    #[arg(long)]
    level: Option<traffic_ai::TrafficLevel>,

    /// Output directory for the PNGs.
    #[arg(long)]
    out: PathBuf,

    /// Font for text (vehicle labels, initials, flowchart). Overrides the config.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,
}

#[derive(Parser, Debug)]
struct StatusArgs {
    #[arg(long)]
    level: traffic_ai::TrafficLevel,

    /// RNG seed for the vehicle count. Falls back to TRAFFIC_AI_SEED, then 42.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Status(args) => cmd_status(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<traffic_ai::SiteConfig> {
    match path {
        Some(p) => traffic_ai::SiteConfig::from_json_path(p)
            .with_context(|| format!("load site config '{}'", p.display())),
        None => Ok(traffic_ai::SiteConfig::default()),
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(font) = args.font {
        config.font_path = Some(font);
    }

    let font_bytes = config.read_font()?;
    let settings = traffic_ai::RenderSettings {
        clear_rgba: None,
        font_bytes: font_bytes.map(std::sync::Arc::new),
    };
    let kind = match args.backend {
        BackendChoice::Cpu => traffic_ai::BackendKind::Cpu,
    };
    let mut backend = traffic_ai::create_backend(kind, &settings)?;

    let mut site = traffic_ai::Site::new(config)?;
    if let Some(level) = args.level {
        site.select_level(level);
    }

    let mut last = Vec::new();
    for _ in 0..args.ticks {
        site.tick();
        last = site.render(backend.as_mut())?;
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    for widget in &last {
        let path = args.out.join(format!("{}.png", widget.label));
        let frame = &widget.frame;
        image::save_buffer_with_format(
            &path,
            &frame.to_straight_rgba8(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(display) = site.display() {
        eprintln!(
            "{}: {} vehicles, {} fps, precision {}",
            display.status_text, display.vehicle_count, display.fps, display.precision
        );
    }
    Ok(())
}

fn cmd_status(args: StatusArgs) -> anyhow::Result<()> {
    let seed = args
        .seed
        .unwrap_or_else(|| traffic_ai::SiteRng::seed_from_env(traffic_ai::DEFAULT_SEED));
    let mut rng = traffic_ai::SiteRng::from_seed_u64(seed);
    let monitor = traffic_ai::Canvas::new(800, 450)?;
    let mut traffic = traffic_ai::TrafficSynchronizer::new(monitor, &mut rng.0);
    let display = traffic.set_level(args.level, &mut rng.0);

    let json = serde_json::to_string_pretty(&display).context("serialize traffic display")?;
    println!("{json}");
    Ok(())
}
