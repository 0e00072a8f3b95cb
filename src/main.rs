//! `swipe-replay` - run recorded pose frames through the swipe detector.
//!
//! Input is JSON lines: `null` for a frame without an active subject,
//! otherwise an active pose. Output is one JSON line per input frame.
//!
//! ```bash
//! swipe-replay --input frames.jsonl
//! cat frames.jsonl | swipe-replay --events-only --window-size 6
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use touchless_lib::{ActivePose, Config, SwipeConfigUpdate, SwipeStream};

#[derive(Parser, Debug)]
#[command(
    name = "swipe-replay",
    version,
    about = "Replay JSON-lines pose frames through the swipe detector",
    long_about = None,
)]
struct Args {
    /// Pose frames file; reads stdin when omitted
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Settings file; created with defaults if missing
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Accumulator capacity per hand and direction
    #[arg(long)]
    window_size: Option<usize>,

    /// Share of body size that counts as decisive movement
    #[arg(long)]
    min_movement_fraction: Option<f32>,

    /// Center drift that marks the subject as lost
    #[arg(long)]
    center_tolerance: Option<f32>,

    /// Print only SlideLeft/SlideRight events
    #[arg(long, default_value_t = false)]
    events_only: bool,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(
            args.log_level
                .parse::<tracing_subscriber::filter::LevelFilter>()
                .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.swipe = SwipeConfigUpdate {
        center_tolerance: args.center_tolerance.or(config.swipe.center_tolerance),
        window_size: args.window_size.or(config.swipe.window_size),
        min_movement_fraction: args.min_movement_fraction.or(config.swipe.min_movement_fraction),
    };
    let emit_events = config.emit_events || args.events_only;

    let (stream, mut outputs) =
        SwipeStream::start(config.swipe_config(), emit_events, config.stream_buffer).await;

    let events_only = args.events_only;
    let printer = tokio::spawn(async move {
        while let Some(output) = outputs.recv().await {
            if events_only {
                for event in &output.events {
                    println!("{}", serde_json::to_string(event)?);
                }
            } else {
                println!("{}", serde_json::to_string(&output)?);
            }
        }
        Ok::<(), anyhow::Error>(())
    });

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &args.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let mut lines = reader.lines();
    let mut line_number = 0u64;
    let mut frames = 0u64;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let frame = match serde_json::from_str::<Option<ActivePose>>(&line) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(line = line_number, error = %e, "Malformed pose frame, treating as no subject");
                None
            }
        };
        stream.send(frame).await?;
        frames += 1;
    }

    stream.stop().await;
    printer.await??;

    info!(frames, "Replay finished");
    Ok(())
}
