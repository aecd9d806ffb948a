//! Rotor tracker: replays body landmarks and issues rotor commands.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rotor_tracker::{
    app::TrackerApp,
    cli::Args,
    config::EXAMPLE_CONFIG,
    sink::ConsoleSink,
    source::ReplaySource,
};
use std::{
    io::{self, BufRead},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    // Load configuration; an unreadable file given with -C is fatal
    let config = args.load_config().context("Invalid configuration")?;

    let trace = args.trace.as_ref().context("No landmark trace given")?;
    let source = ReplaySource::from_file(trace, config.camera.geometry()?)
        .with_context(|| format!("Failed to load trace {}", trace.display()))?;

    let mut app = TrackerApp::new(config, source, ConsoleSink::stdout())?;
    watch_for_quit(app.stop_handle());

    info!("Type 'q' and press Enter to stop");
    app.run()?;

    Ok(())
}

/// Clear `running` once the operator enters `q` on stdin
fn watch_for_quit(running: Arc<AtomicBool>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => {
                    running.store(false, Ordering::SeqCst);
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}
