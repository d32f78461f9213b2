//! Bar chart pane for sorting runs

use crate::colors::ColorToken;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Render one bar per value, colored by `colors` (same length as `values`)
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    values: &[i64],
    colors: &[ColorToken],
    is_playing: bool,
) {
    let border_style = if is_playing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if values.is_empty() {
        let paragraph = Paragraph::new("(no values)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // fit all bars inside the borders, keeping a 1-column gap when there is room
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let slot = (inner_width / values.len()).max(1);
    let (bar_width, bar_gap) = if slot >= 3 { (slot - 1, 1) } else { (slot, 0) };

    let bars: Vec<Bar> = values
        .iter()
        .zip(colors.iter().copied().chain(std::iter::repeat(ColorToken::Base)))
        .map(|(&value, token)| {
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(String::new())
                .style(Style::default().fg(DEFAULT_THEME.token(token)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width as u16)
        .bar_gap(bar_gap as u16);

    frame.render_widget(chart, area);
}
