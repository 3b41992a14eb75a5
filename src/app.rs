use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::{self, Handler as TerminalEventHandler};
use crate::remote::TaskService;
use crate::state::State;
use crate::store::TaskStore;
use crate::ui::Theme;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tui_logger::{init_logger, set_default_level};

pub type NetworkEventSender = mpsc::UnboundedSender<NetworkEvent>;
type NetworkEventReceiver = mpsc::UnboundedReceiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        init_logger(LevelFilter::Debug).map_err(|e| AppError::Logger(format!("{:?}", e)))?;
        set_default_level(LevelFilter::Debug);

        info!("Starting application against {}...", config.base_url);
        let (tx, rx) = mpsc::unbounded_channel::<NetworkEvent>();
        let state = State::new(
            tx.clone(),
            Theme::from_name(&config.theme_name),
            Duration::from_secs(config.notification_secs),
        );
        let app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        app.start_network(rx);
        tx.send(NetworkEvent::Load)
            .context("Failed to request initial task load")?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Spawn the network dispatcher. Each event runs as its own task so a
    /// slow request never holds up the ones behind it.
    ///
    fn start_network(&self, mut net_receiver: NetworkEventReceiver) {
        debug!("Spawning network event dispatcher...");
        let store = TaskStore::new(
            TaskService::new(&self.config.base_url),
            Arc::clone(&self.state),
        );
        let handler = NetworkEventHandler::new(store, self.config.seed_on_empty);
        tokio::spawn(async move {
            while let Some(network_event) = net_receiver.recv().await {
                let handler = handler.clone();
                tokio::spawn(async move {
                    if let Err(e) = handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                });
            }
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop. Return the result following an exit request or
    /// unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface...");
        execute!(stdout(), EnterAlternateScreen).map_err(AppError::Io)?;

        let result = self.run().await;
        let restored = restore_terminal(&mut stdout());
        result?;
        restored?;
        Ok(())
    }

    /// Switch to raw mode and drive the render loop. The caller restores the
    /// terminal whether or not this succeeds.
    ///
    async fn run(&self) -> Result<()> {
        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.hide_cursor()?;
        let mut terminal_event_handler = TerminalEventHandler::new();
        loop {
            {
                let mut state = self.state.lock().await;
                terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            }
            let Some(event) = terminal_event_handler.next().await else {
                warn!("Terminal input stopped.");
                break;
            };
            let mut state = self.state.lock().await;
            if !terminal::handle(event, &mut state) {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

/// Leave raw mode and the alternate screen and show the cursor again. The
/// screen is left even when raw mode cannot be disabled.
///
fn restore_terminal<W: Write>(out: &mut W) -> AppResult<()> {
    let raw_mode = disable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()));
    execute!(out, LeaveAlternateScreen, Show)?;
    raw_mode
}
