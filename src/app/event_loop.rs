use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::app::input::message_for_event;
use crate::app::{App, Message, Model, update};

impl App {
    /// Run the main event loop until the user quits.
    ///
    /// Returns the markdown queued by the paste action, if any. The
    /// caller hands it to a [`PasteTarget`](crate::host::PasteTarget)
    /// once the terminal has been restored.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<Option<String>> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - mdpad requires an interactive terminal")?;
        crate::logging::set_terminal_active(true);
        let result = execute!(stdout(), EnableBracketedPaste)
            .context("Failed to enable bracketed paste")
            .and_then(|()| {
                let size = terminal.size()?;
                let mut model = Model::new((size.width, size.height))
                    .with_preview_style(self.preview_style)
                    .with_stats_visible(self.stats_visible);
                self.event_loop(&mut terminal, &mut model)?;
                Ok(model.pending_paste.take())
            });

        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        crate::logging::set_terminal_active(false);

        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }

            // Coalesce key repeat and paste bursts into a single render.
            loop {
                if let Some(msg) = message_for_event(&event::read()?, model) {
                    self.dispatch(model, msg);
                    needs_render = true;
                }
                if model.should_quit || !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, model: &mut Model, msg: Message) {
        debug!(?msg, view = ?model.view(), "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        self.handle_message_side_effects(model, &side_msg);
    }
}
