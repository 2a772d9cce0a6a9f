use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use crossterm::tty::IsTty;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

mod app;
mod constants;
mod effects;
mod event;
mod format;
mod handler;
mod theme;
mod tokens;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    app::App,
    constants::{EVENT_CHANNEL_CAPACITY, TICK_RATE},
    effects::EffectScheduler,
    event::{Action, EffectEvent},
    handler::handle_event,
    tui::Tui,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
███████╗ ██████╗ ██╗     ████████╗██████╗  █████╗  ██████╗██╗  ██╗
██╔════╝██╔═══██╗██║     ╚══██╔══╝██╔══██╗██╔══██╗██╔════╝██║ ██╔╝
███████╗██║   ██║██║        ██║   ██████╔╝███████║██║     █████╔╝
╚════██║██║   ██║██║        ██║   ██╔══██╗██╔══██║██║     ██╔═██╗
███████║╚██████╔╝███████╗   ██║   ██║  ██║██║  ██║╚██████╗██║  ██╗
╚══════╝ ╚═════╝ ╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝
"#;

/// soltrack - terminal dashboard for the top Solana ecosystem tokens
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Disable the scanline and row-reveal animations
    #[arg(long)]
    no_effects: bool,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(Commands::Version) = cli.command {
        println!("{LOGO}");
        println!("soltrack v{VERSION}");
        println!("A terminal dashboard for the top Solana ecosystem tokens");
        return Ok(());
    }

    color_eyre::install()?;

    // The cosmetic timers only make sense on an interactive terminal.
    let effects_enabled = !cli.no_effects && std::io::stdout().is_tty();

    let mut terminal = tui::init()?;
    let mut app = App::new(effects_enabled);

    // Channel for effect timer events -> main loop
    let (effect_sender, mut effect_receiver) = mpsc::channel::<EffectEvent>(EVENT_CHANNEL_CAPACITY);

    let mut scheduler = EffectScheduler::new(tokio::runtime::Handle::current(), effect_sender);
    scheduler.start(effects_enabled, app.tokens.len());

    let result = run_app(&mut terminal, &mut app, &mut effect_receiver).await;

    // Cancel outstanding timers before the terminal is restored so no
    // callback fires against a torn-down view.
    scheduler.shutdown();
    tui::restore()?;
    result
}

/// Main application loop.
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    effect_receiver: &mut mpsc::Receiver<EffectEvent>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.exit {
            break;
        }

        // --- Drawing ---
        terminal.draw(|frame| ui::render(app, frame))?;

        // --- Event Handling ---
        // Poll for terminal events with a very small timeout, then drain
        // effect events and sleep out the rest of the tick.
        let mut terminal_event_ready = false;
        if crossterm::event::poll(Duration::from_millis(1))? {
            terminal_event_ready = true;
        }

        if terminal_event_ready {
            match crossterm::event::read() {
                Ok(crossterm::event::Event::Resize(_, _)) => {
                    // Redraw happens implicitly at the start of the next
                    // loop iteration.
                    continue;
                }
                Ok(event) => {
                    if let Some(action) = handle_event(event) {
                        app.update(action);
                    }
                }
                Err(_) => {
                    // crossterm read error
                    app.exit = true;
                }
            }
        }

        // Drain all effect events that fired since the last frame.
        loop {
            match effect_receiver.try_recv() {
                Ok(effect) => {
                    let action = match effect {
                        EffectEvent::ClockTick => Action::UpdateClock,
                        EffectEvent::ScanTick => Action::AdvanceScanline,
                        EffectEvent::RowRevealed(index) => Action::RevealRow(index),
                    };
                    app.update(action);
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    app.exit = true;
                    break;
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }

        // Small sleep to prevent high CPU usage if no events are pending
        if !terminal_event_ready {
            let remaining_timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_millis(5));
            tokio::time::sleep(remaining_timeout.min(Duration::from_millis(50))).await;
        }
    }
    Ok(())
}
