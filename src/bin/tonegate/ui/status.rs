//! Status bar widget - shows grid parameters, current view and mix levels

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::View;
use crate::duet::Scene;

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, scene: &Scene, view: View) {
    let block = Block::default()
        .title(" tonegate ")
        .borders(Borders::ALL);

    let view_str = match view {
        View::Zoom => "Zoom",
        View::Timeline => "Timeline",
    };

    // Format sample rate nicely (e.g., 8000 -> "8.0kHz")
    let sample_rate_khz = f64::from(scene.sample_rate) / 1000.0;

    let line = Line::from(vec![
        Span::styled(
            format!(" {view_str}  "),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("{:.2} s  ", scene.duration),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate_khz),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} samples  ", scene.time.len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("step {}  ", scene.plot_step),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Mix peak: {:.2}  RMS: {:.2}", scene.mix.peak(), scene.mix.rms()),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
