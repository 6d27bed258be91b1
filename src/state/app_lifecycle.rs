//! Application lifecycle: construction and the main event loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::cart::CartStore;
use crate::constants::TICK_RATE;
use crate::platform::ClipboardProvider;
use crate::tui::Tui;
use crate::ui;

use super::{App, UiState};

impl App {
    /// Creates the application around an initialized cart.
    #[must_use]
    pub fn new(cart: CartStore, clipboard: Arc<dyn ClipboardProvider>, toast_ticks: u8) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut ui = UiState::new(toast_ticks);
        ui.clamp_selection(cart.count());

        Self {
            cart,
            ui,
            exit: false,
            clipboard,
            message_tx,
            message_rx,
        }
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Advances timers by one tick.
    pub(crate) fn tick(&mut self) {
        self.ui.tick_toast();
    }
}
