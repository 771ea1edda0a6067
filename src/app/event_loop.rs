use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, ToastLevel, update};
use crate::editor::{Document, Session};

use super::effects::load_session;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure. A transcript that cannot be read is
    /// reported before the terminal is taken over.
    pub fn run(&mut self) -> Result<()> {
        let (session, existed) = match &self.file_path {
            Some(path) => load_session(path, self.join_speakers, self.undo_limit)
                .with_context(|| format!("Failed to open {}", path.display()))?,
            None => (Session::with_document(Document::new(), self.undo_limit), false),
        };
        tracing::info!(
            file = ?self.file_path,
            records = session.document().len(),
            existed,
            "starting editor"
        );

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; parley requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = self.startup_model(session, existed, (size.width, size.height));

        let _ = execute!(stdout(), EnableMouseCapture);
        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    /// Build the initial model, announcing a file that does not exist yet.
    pub(super) fn startup_model(
        &self,
        session: Session,
        existed: bool,
        size: (u16, u16),
    ) -> Model {
        let mut model = Model::new(self.file_path.clone(), session, size);
        model.join_speakers = self.join_speakers;
        model.autosave_interval = self.autosave_interval;
        if !existed && let Some(path) = &self.file_path {
            model.show_toast(
                ToastLevel::Info,
                format!("New file {}; it is created on first save", path.display()),
            );
        }
        model
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                Self::dispatch(&event::read()?, model);
                needs_render = true;

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    Self::dispatch(&event::read()?, model);
                    if model.should_quit {
                        break;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(event: &event::Event, model: &mut Model) {
        if let Some(msg) = Self::handle_event(event, model) {
            tracing::trace!(?msg, "message");
            *model = update(std::mem::take(model), msg);
            Self::handle_message_side_effects(model);
        }
    }
}
