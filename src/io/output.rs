//! Logging setup

use std::fmt;
use std::fs::File;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, fmt::format::Writer, fmt::layer, fmt::time::FormatTime,
    layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// Timestamps log lines with the wall time elapsed since logging was set up
struct RunClock {
    start: Instant,
}

impl RunClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl FormatTime for RunClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", format_elapsed(self.start.elapsed().as_secs()))
    }
}

/// `[+MM:SS]`, widening to `[+H:MM:SS]` for runs past the hour
fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    if hours == 0 {
        format!("[+{:02}:{:02}]", minutes, seconds)
    } else {
        format!("[+{}:{:02}:{:02}]", hours, minutes, seconds)
    }
}

/// Map the number of `-v` flags to a level: INFO, DEBUG, then TRACE.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Setup output logging to file or stdout
pub fn setup_output(output_path: Option<&String>, verbosity: u8) {
    let level = level_for(verbosity);
    match output_path {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(RunClock::new())
                    .with_ansi(false)
                    .with_filter(level);
                Registry::default().with(file_layer).init();
                info!("Output will be written to: {}", path);
            }
            Err(err) => eprintln!("Could not create output file {}: {}", path, err),
        },
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(RunClock::new())
                .with_ansi(true)
                .with_filter(level);
            Registry::default().with(stdout_layer).init();
            info!("Output will be printed to stdout");
        }
    }
}
