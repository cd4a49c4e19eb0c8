use anyhow::Result;
use crossterm::{
    event::{Event as CrosstermEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use lingo_core::{ScreenActor, ScreenClients, ScreenEvent, SettingsManager};

use super::event_handler::handle_screen_event;
use super::input_handler::{configure_textarea, current_input, handle_key_event, TuiAction};
use super::state::{BannerData, TuiState};
use super::ui::draw_ui;

pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    screen: ScreenActor,
    event_rx: mpsc::UnboundedReceiver<ScreenEvent>,
    state: TuiState,
}

impl TuiApp {
    pub fn new(settings_manager: SettingsManager) -> Result<Self> {
        let settings = settings_manager.settings();

        let banner_data = BannerData {
            version: env!("CARGO_PKG_VERSION").to_string(),
            voice: settings.voice.clone(),
            settings_path: settings_manager.path().display().to_string(),
        };

        let clients = ScreenClients::from_settings(&settings_manager)?;
        let (screen, event_rx) = ScreenActor::launch(clients, settings_manager);

        let state = TuiState::new(settings.target_language, Some(banner_data));

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            screen,
            event_rx,
            state,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        // Create textarea for input
        let mut textarea = TextArea::default();
        configure_textarea(&mut textarea);

        let tick_rate = Duration::from_millis(50);
        let mut crossterm_reader = EventStream::new();

        loop {
            let state = &mut self.state;
            let ta = &textarea;
            self.terminal.draw(|frame| {
                draw_ui(frame, state, ta);
            })?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Poll ScreenEvents from the actor
                Some(screen_event) = self.event_rx.recv() => {
                    handle_screen_event(&mut self.state, screen_event);
                }

                // Poll crossterm events (async)
                Some(Ok(crossterm_event)) = crossterm_reader.next() => {
                    if let CrosstermEvent::Key(key) = crossterm_event {
                        match handle_key_event(key, &mut textarea, &mut self.state) {
                            TuiAction::Translate => {
                                self.screen.translate()?;
                            }
                            TuiAction::Speak => {
                                self.screen.speak()?;
                            }
                            TuiAction::CycleLanguage => {
                                self.screen.set_target_language(self.state.target.next_target())?;
                            }
                            TuiAction::Edited => {
                                self.screen.input_changed(current_input(&textarea))?;
                            }
                            TuiAction::Quit => {
                                self.state.should_quit = true;
                            }
                            TuiAction::None => {}
                        }
                    } else if let CrosstermEvent::Resize(_, _) = crossterm_event {
                        // Terminal will re-render on next loop iteration
                    }
                }

                // Tick for spinner animation
                _ = tokio::time::sleep(tick_rate) => {
                    if self.state.busy {
                        self.state.spinner_frame += 1;
                    }
                }
            }
        }

        self.restore_terminal()?;

        Ok(())
    }

    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
