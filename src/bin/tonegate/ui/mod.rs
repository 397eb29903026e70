//! TUI module for tonegate
//!
//! Shows the rendered duet as amplitude-vs-time charts.

mod chart;
mod status;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::Duration;

use super::duet::Scene;

use chart::{render_chart, ChartView};
use status::render_status;

/// Which chart is on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Raw tones, first few milliseconds
    Zoom,
    /// Gated tones and mix, whole scene
    Timeline,
}

impl View {
    fn toggled(self) -> Self {
        match self {
            View::Zoom => View::Timeline,
            View::Timeline => View::Zoom,
        }
    }
}

/// UI application state
pub struct UiApp {
    scene: Scene,
    zoom: ChartView,
    timeline: ChartView,
    view: View,
    should_quit: bool,
}

impl UiApp {
    /// Create a new UI application, starting on the zoomed view
    pub fn new(scene: Scene) -> Self {
        let zoom = ChartView::zoom(&scene);
        let timeline = ChartView::timeline(&scene);
        Self {
            scene,
            zoom,
            timeline,
            view: View::Zoom,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Nothing animates, so poll slowly rather than at frame rate
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Char(' ') => {
                self.view = self.view.toggled();
            }
            KeyCode::Char('z') | KeyCode::Char('Z') => self.view = View::Zoom,
            KeyCode::Char('t') | KeyCode::Char('T') => self.view = View::Timeline,
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Chart
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_status(frame, chunks[0], &self.scene, self.view);

        let chart = match self.view {
            View::Zoom => &self.zoom,
            View::Timeline => &self.timeline,
        };
        render_chart(frame, chunks[1], chart);

        let help = Paragraph::new(" [Tab] Switch view  [Z] Zoom  [T] Timeline  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
