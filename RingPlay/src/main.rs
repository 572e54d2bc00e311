mod app;
mod command;
mod ingest;
mod logging;
mod render;
mod transport;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ringqueue::{QueueController, QueueSettings};
use tracing::{info, warn};

use crate::app::{App, Flow};
use crate::command::Command;
use crate::render::ConsoleRenderer;
use crate::transport::ConsoleTransport;

#[derive(Parser, Debug)]
#[command(name = "ringplay")]
#[command(about = "Circular audio/video playlist for the terminal", long_about = None)]
struct Args {
    /// Configuration directory (defaults to $RINGPLAY_CONFIG, ./.ringplay or ~/.ringplay)
    #[arg(short = 'c', long)]
    config_dir: Option<String>,

    /// Log filter, e.g. `debug` or `ringqueue=trace` (overrides RUST_LOG)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Media files or directories to queue at startup
    media: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ringconfig::init_config(args.config_dir.as_deref().unwrap_or(""))?;
    logging::init_logging(args.log_level.as_deref(), &config);
    info!(config_file = config.config_file(), "🎵 RingPlay starting");

    let settings = QueueSettings {
        title: config.get_playlist_title(),
        video_suffixes: config.get_video_suffixes(),
        auto_advance: config.get_auto_advance(),
    };
    let controller = QueueController::with_settings(ConsoleTransport::new(), settings);
    let mut app = App::new(controller, ConsoleRenderer::new(config.get_up_next_size()));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.media.is_empty() {
        match app.add_paths(&args.media) {
            Ok(added) => info!(added, "Startup media queued"),
            Err(err) => {
                warn!(error = %err, "Failed to queue startup media");
                writeln!(out, "error: {err:#}")?;
            }
        }
    }
    if !app.redraw(&mut out)? {
        app.handle(Command::List, &mut out)?;
    }
    writeln!(out, "type 'help' for the list of commands")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        write!(out, "{} > ", app.controller().transport().status_line())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        if app.handle_line(&line, &mut out)? == Flow::Quit {
            break;
        }
    }

    info!("RingPlay stopped");
    Ok(())
}
