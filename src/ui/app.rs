//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::colors::paint;
use crate::config::Config;
use crate::input::Input;
use crate::session::{Session, SessionError, StepOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Title of the main pane for the current frame
fn pane_title(algorithm: Algorithm, steps: usize, current: &crate::snapshot::Frame) -> String {
    let mut title = format!("{}: Step {} - {}", algorithm, steps, current.label());
    if current.found() {
        title.push_str(" - FOUND!");
    }
    title
}

/// The main application state
pub struct App {
    /// The session being played back
    pub session: Session,

    /// Settings used to (re)build inputs
    pub config: Config,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        App {
            session,
            config,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_play_time: long_ago,
            last_space_press: long_ago,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let cadence = Duration::from_millis(self.config.speed_ms);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.session.is_playing() && self.last_play_time.elapsed() >= cadence {
                self.tick();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout so playback keeps its cadence
            if event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// One timer-driven step while playing
    pub fn tick(&mut self) {
        if self.session.step().is_finished() {
            self.status_message = self.finished_message();
        } else {
            self.status_message = "Playing...".to_string();
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_hud(frame, chunks[0], &self.session);

        let algorithm = self.session.algorithm();
        let stats = self.session.stats();
        let is_playing = self.session.is_playing();

        if let Some(current) = self.session.current_frame() {
            let colors = paint(current, algorithm);
            let title = pane_title(algorithm, stats.steps, current);

            match (self.session.input(), current.snapshot.values()) {
                (Input::Graph { graph, .. }, _) => {
                    super::panes::render_graph_pane(frame, chunks[1], &title, graph, &colors, is_playing);
                }
                (Input::Sequence(_), Some(values)) => {
                    super::panes::render_bars_pane(frame, chunks[1], &title, values, &colors, is_playing);
                }
                (Input::Sequence(values), None) => {
                    super::panes::render_bars_pane(frame, chunks[1], &title, values, &[], is_playing);
                }
            }
        }

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            stats.steps,
            self.session.state(),
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.session.pause();
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    match self.session.step() {
                        StepOutcome::Advanced(_) => stepped += 1,
                        StepOutcome::Finished(_) => break,
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Right => {
                self.session.pause();
                let label = match self.session.step() {
                    StepOutcome::Advanced(frame) => Some(frame.label()),
                    StepOutcome::Finished(_) => None,
                };
                self.status_message = match label {
                    Some(label) => format!("Stepped: {}", label),
                    None => self.finished_message(),
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.session.toggle_play();
                    self.status_message = if self.session.is_playing() {
                        "Playing...".to_string()
                    } else if self.session.is_finished() {
                        self.finished_message()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Char('s') => {
                self.session.stop();
                self.status_message = "Stopped".to_string();
            }
            KeyCode::Char('r') => {
                self.status_message = match self.session.reset() {
                    Ok(()) => "Reset to start.".to_string(),
                    Err(e) => format!("Cannot reset: {}", e),
                };
            }
            KeyCode::Char('n') => {
                self.config.seed = self.config.seed.wrapping_add(1);
                let algorithm = self.session.algorithm();
                self.restart(algorithm, "New data generated. Ready to play.");
            }
            KeyCode::Tab => {
                let algorithm = self.session.algorithm().next_in_family();
                self.restart(algorithm, "Algorithm switched. Ready to play.");
            }
            KeyCode::Enter => {
                // Run to the end
                self.session.pause();
                while !self.session.step().is_finished() {}
                self.status_message = self.finished_message();
            }
            _ => {}
        }
    }

    /// Replace the session; a new algorithm or new data always gets a fresh emitter
    fn restart(&mut self, algorithm: Algorithm, message: &str) {
        match self.start(algorithm) {
            Ok(session) => {
                self.session = session;
                self.status_message = message.to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot start: {}", e);
            }
        }
    }

    fn start(&self, algorithm: Algorithm) -> Result<Session, SessionError> {
        self.config.start_session(algorithm)
    }

    fn finished_message(&self) -> String {
        let stats = self.session.stats();
        match self.session.input() {
            Input::Sequence(values) => format!(
                "Done! Sorted {} values in {} visual steps.",
                values.len(),
                stats.steps
            ),
            Input::Graph { .. } => {
                if self.session.current_frame().is_some_and(|f| f.found()) {
                    "Target reached! Path highlighted.".to_string()
                } else {
                    "Traversal complete.".to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PlaybackState;
    use clap::Parser;
    use crossterm::event::KeyModifiers;

    fn app(args: &[&str]) -> App {
        let config = Config::try_parse_from(args).unwrap();
        let session = config.start_session(config.algorithm).unwrap();
        App::new(session, config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_pane_title_is_plain_ascii() {
        let mut app = app(&["algoviz", "-a", "bfs", "--rows", "2", "--cols", "2"]);
        press(&mut app, KeyCode::Enter);
        let current = app.session.current_frame().unwrap();
        let title = pane_title(app.session.algorithm(), app.session.stats().steps, current);
        assert!(title.is_ascii());
        assert!(title.ends_with(" - FOUND!"));
    }

    #[test]
    fn test_right_arrow_steps_and_pauses() {
        let mut app = app(&["algoviz"]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.is_playing());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.state(), PlaybackState::Paused);
        assert_eq!(app.session.stats().steps, 1);
    }

    #[test]
    fn test_enter_runs_to_end() {
        let mut app = app(&["algoviz", "-a", "bfs", "--rows", "3", "--cols", "3"]);
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_finished());
        assert_eq!(app.status_message, "Target reached! Path highlighted.");
    }

    #[test]
    fn test_tab_switches_within_family() {
        let mut app = app(&["algoviz", "-a", "merge"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.algorithm(), Algorithm::Quick);
        assert_eq!(app.session.state(), PlaybackState::Ready);
    }

    #[test]
    fn test_new_data_changes_input() {
        let mut app = app(&["algoviz"]);
        let before = app.session.input().clone();
        press(&mut app, KeyCode::Char('n'));
        assert_ne!(app.session.input(), &before);
    }

    #[test]
    fn test_reset_restores_frame_zero() {
        let mut app = app(&["algoviz", "-a", "quick"]);
        let first = app.session.current_frame().cloned();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.current_frame().cloned(), first);
        assert_eq!(app.session.stats().steps, 0);
    }
}
