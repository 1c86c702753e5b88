use anyhow::{bail, Context, Result};
use clap::Parser;
use lcd_scenes::{LcdVideo, VideoConfig};
use logging::{LogFormat, LogLevel};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory that receives one JSON file per frame
    #[arg(value_name = "OUTPUT_DIR")]
    output: PathBuf,

    /// JSON video config; defaults to the built-in video
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// First frame to export
    #[arg(long, default_value_t = 0)]
    from: i64,

    /// One past the last frame to export (defaults to the video length)
    #[arg(long)]
    to: Option<i64>,

    /// Export a single frame
    #[arg(long, conflicts_with_all = ["from", "to"])]
    frame: Option<i64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbosity of the workspace crates; `RUST_LOG` overrides it
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn frame_path(dir: &Path, frame: i64) -> PathBuf {
    dir.join(format!("frame_{:05}.json", frame))
}

fn run(cli: Cli) -> Result<usize> {
    let config = match &cli.config {
        Some(path) => VideoConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => VideoConfig::default(),
    };
    let video = LcdVideo::new(config).context("invalid video config")?;

    let range = match cli.frame {
        Some(frame) => match frame.checked_add(1) {
            Some(end) => frame..end,
            None => bail!("frame {} is out of range", frame),
        },
        None => cli.from..cli.to.unwrap_or(i64::from(video.total_frames())),
    };
    if range.is_empty() {
        bail!("empty frame range {}..{}", range.start, range.end);
    }
    let count = match range.end.checked_sub(range.start) {
        Some(count) => count,
        None => bail!("frame range {}..{} is too large", range.start, range.end),
    };

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    info!(
        from = range.start,
        to = range.end,
        output = %cli.output.display(),
        "exporting frames"
    );
    let started = Instant::now();

    range.into_par_iter().try_for_each(|frame| -> Result<()> {
        let tree = video
            .render_frame(frame)
            .with_context(|| format!("failed to render frame {}", frame))?;
        let json = if cli.pretty {
            tree.to_json_pretty()?
        } else {
            tree.to_json()?
        };
        let path = frame_path(&cli.output, frame);
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(frame, "frame written");
        Ok(())
    })?;

    info!(
        frames = count,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "export complete"
    );
    Ok(count as usize)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level, cli.log_format) {
        eprintln!("failed to initialize logging: {:#}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
