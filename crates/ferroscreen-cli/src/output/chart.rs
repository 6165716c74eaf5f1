//! Line charts rendered to plain text through ratatui's `Chart` widget.
//!
//! The widget draws into an off-screen [`Buffer`], which is then written out
//! row by row. Output therefore works the same on a TTY and in a pipe.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Widget};

use ferroscreen_core::ChartSeries;

pub const CHART_HEIGHT: u16 = 16;
const MIN_WIDTH: u16 = 40;
const MAX_WIDTH: u16 = 120;
const FALLBACK_WIDTH: u16 = 100;

/// Usable chart width for the current terminal.
pub fn terminal_width() -> u16 {
    crossterm::terminal::size()
        .map(|(columns, _)| columns)
        .unwrap_or(FALLBACK_WIDTH)
        .clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Render `series` as text lines, `width` columns wide.
pub fn render_lines(series: &ChartSeries, width: u16) -> Vec<String> {
    let (Some(first), Some(last), Some((low, high))) = (
        series.points.first(),
        series.points.last(),
        series.price_range(),
    ) else {
        return vec![series.title.clone(), String::from("  no price data")];
    };

    let data: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|point| {
            let day = (point.date - first.date).whole_days() as f64;
            (day, point.adjusted_close)
        })
        .collect();

    let x_max = ((last.date - first.date).whole_days() as f64).max(1.0);
    let padding = ((high - low).abs() * 0.05).max(0.5);
    let y_min = low - padding;
    let y_max = high + padding;

    let dataset = Dataset::default()
        .name(series.stock.as_str())
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(Color::Cyan))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(Block::bordered().title(series.title.as_str()))
        .legend_position(None)
        .x_axis(
            Axis::default()
                .title("Date")
                .bounds([0.0, x_max])
                .labels(vec![first.date.to_string(), last.date.to_string()]),
        )
        .y_axis(
            Axis::default()
                .title("Adj Close")
                .bounds([y_min, y_max])
                .labels(vec![format!("{y_min:.2}"), format!("{y_max:.2}")]),
        );

    let area = Rect::new(0, 0, width.max(MIN_WIDTH), CHART_HEIGHT);
    let mut buffer = Buffer::empty(area);
    chart.render(area, &mut buffer);

    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_owned()
        })
        .collect()
}
