//! Graph pane: edges as lines, nodes as colored dots with their ids

use crate::algorithms::graph::Graph;
use crate::colors::ColorToken;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line},
        Block, Borders,
    },
    Frame,
};

/// Render `graph` with one color per node (`colors` indexed by node id)
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    graph: &Graph,
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

    let (x_bounds, y_bounds) = bounds(graph.positions());
    let positions = graph.positions();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for &(u, v) in graph.edges() {
                let (x1, y1) = positions[u];
                let (x2, y2) = positions[v];
                ctx.draw(&Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: DEFAULT_THEME.edge,
                });
            }
            for (node, &(x, y)) in positions.iter().enumerate() {
                let token = colors.get(node).copied().unwrap_or(ColorToken::Base);
                let style = Style::default()
                    .fg(DEFAULT_THEME.token(token))
                    .add_modifier(Modifier::BOLD);
                ctx.print(x, y, Span::styled(format!("●{}", node), style));
            }
        });

    frame.render_widget(canvas, area);
}

/// Padded bounds around all node positions
fn bounds(positions: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let mut x = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y = [f64::INFINITY, f64::NEG_INFINITY];
    for &(px, py) in positions {
        x = [x[0].min(px), x[1].max(px)];
        y = [y[0].min(py), y[1].max(py)];
    }
    if positions.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    // leave room for the id labels printed to the right of each dot
    ([x[0] - 0.5, x[1] + 1.0], [y[0] - 0.5, y[1] + 0.5])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_all_nodes() {
        let ([x0, x1], [y0, y1]) = bounds(&[(0.0, 0.0), (3.0, -2.0)]);
        assert!(x0 < 0.0 && x1 > 3.0);
        assert!(y0 < -2.0 && y1 > 0.0);
    }

    #[test]
    fn test_bounds_of_empty_graph() {
        assert_eq!(bounds(&[]), ([0.0, 1.0], [0.0, 1.0]));
    }
}
