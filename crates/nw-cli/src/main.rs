//! Terminal entry point for Nightwood.
//!
//! Runs one interactive session on stdin/stdout. Story text is paced like a
//! typewriter when stdout is a terminal and printed at once otherwise.
//! Ctrl+C or a closed stdin ends the session with a farewell and exit code 0.

use std::io::{self, IsTerminal};
use std::process;
use std::thread;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use nw_story::{LinePrompter, NarratorConfig, Session, StoryConfig, StoryError, Typewriter};

#[derive(Parser)]
#[command(
    name = "nightwood",
    about = "Nightwood: find your way out of the forest before dawn",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    if let Err(e) = watch_for_interrupt() {
        tracing::warn!(error = %e, "interrupt handler unavailable");
    }

    match run() {
        Ok(()) => {}
        Err(StoryError::InputClosed) => farewell(),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn run() -> Result<(), StoryError> {
    let narrator = if io::stdout().is_terminal() {
        NarratorConfig::default()
    } else {
        NarratorConfig::instant()
    };

    println!("{}", "NIGHTWOOD".bold());
    println!("{}\n", "Answer each prompt by typing one of the offered words.".dimmed());

    let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    let typewriter = Typewriter::new(io::stdout(), narrator);
    let mut session = Session::new(StoryConfig::new(), prompter, typewriter);

    let summaries = session.run()?;
    tracing::info!(playthroughs = summaries.len(), "session finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the story.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Exit cleanly on Ctrl+C, whatever prompt is blocking.
///
/// The listener is registered before this returns, so an interrupt at any
/// later point reaches it.
fn watch_for_interrupt() -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    #[cfg(unix)]
    let mut interrupt = {
        let _guard = runtime.enter();
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?
    };

    thread::Builder::new()
        .name("interrupt".into())
        .spawn(move || {
            #[cfg(unix)]
            let received = runtime.block_on(interrupt.recv()).is_some();
            #[cfg(not(unix))]
            let received = runtime.block_on(tokio::signal::ctrl_c()).is_ok();

            if received {
                tracing::debug!("interrupted");
                farewell();
                process::exit(0);
            }
        })?;
    Ok(())
}

fn farewell() {
    println!("\n{}", "The forest fades behind you. Farewell.".dimmed());
}
