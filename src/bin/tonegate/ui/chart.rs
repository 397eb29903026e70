//! Amplitude-vs-time chart widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::duet::{Scene, Series};

/// Line colors, assigned to series in order
const PALETTE: [Color; 4] = [Color::Cyan, Color::Yellow, Color::Magenta, Color::Green];

/// A titled set of series with fixed axis bounds
pub struct ChartView {
    title: String,
    series: Vec<Series>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl ChartView {
    /// Raw tones over the zoom window
    pub fn zoom(scene: &Scene) -> Self {
        Self {
            title: format!(
                " Tones (first {:.0} ms) ",
                scene.zoom_seconds() * 1000.0
            ),
            series: scene.zoom_series(),
            x_bounds: [0.0, scene.zoom_seconds()],
            y_bounds: [-1.0, 1.0],
        }
    }

    /// Gated tones and their mix over the whole scene
    pub fn timeline(scene: &Scene) -> Self {
        // The mix can exceed unit range where tones overlap
        let peak = scene.mix.peak().max(1.0);
        Self {
            title: " Gated tones and mix ".to_owned(),
            series: scene.timeline_series(),
            x_bounds: [0.0, scene.duration],
            y_bounds: [-peak, peak],
        }
    }
}

/// Render a chart view
pub fn render_chart(frame: &mut Frame, area: Rect, view: &ChartView) {
    let block = Block::default()
        .title(view.title.as_str())
        .borders(Borders::ALL);

    let datasets: Vec<Dataset> = view
        .series
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(series, &color)| {
            Dataset::default()
                .name(series.label.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&series.points)
        })
        .collect();

    let [x_min, x_max] = view.x_bounds;
    let [y_min, y_max] = view.y_bounds;

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .title("Time [s]")
                .bounds(view.x_bounds)
                .labels([
                    Span::raw(format!("{x_min:.3}")),
                    Span::raw(format!("{x_max:.3}")),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude")
                .bounds(view.y_bounds)
                .labels([
                    Span::raw(format!("{y_min:.1}")),
                    Span::raw("0"),
                    Span::raw(format!("{y_max:.1}")),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
