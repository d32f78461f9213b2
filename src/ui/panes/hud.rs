//! Stats line above the main pane

use crate::algorithms::Algorithm;
use crate::session::Session;
use crate::snapshot::{FOUND, FRONTIER, QUEUE, STACK, VISITED};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// `(label, value)` pairs shown for the session's current frame
pub fn hud_fields(session: &Session) -> Vec<(&'static str, String)> {
    let algorithm = session.algorithm();
    let stats = session.stats();
    let mut fields = vec![
        ("Algorithm", algorithm.display_name().to_string()),
        ("Step", stats.steps.to_string()),
    ];

    if algorithm.is_sorting() {
        fields.push(("Comparisons", stats.comparisons.to_string()));
        fields.push(("Writes/Swaps", stats.mutations.to_string()));
        return fields;
    }

    let Some(frame) = session.current_frame() else {
        fields.push(("Status", "Idle".to_string()));
        return fields;
    };
    let meta = &frame.metadata;
    let (label, key) = match algorithm {
        Algorithm::Dfs => ("Visited / Stack", STACK),
        Algorithm::Dijkstra => ("Visited / Queue", QUEUE),
        _ => ("Visited / Frontier", FRONTIER),
    };
    fields.push((
        label,
        format!(
            "{} / {}",
            meta.count(VISITED).unwrap_or(0),
            meta.count(key).unwrap_or(0)
        ),
    ));
    if meta.flag(FOUND).unwrap_or(false) {
        fields.push(("Goal", "FOUND".to_string()));
    }
    fields
}

pub fn render_hud(frame: &mut Frame, area: Rect, session: &Session) {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (label, value) in hud_fields(session) {
        spans.push(Span::styled(format!(" {}: ", label), label_style));
        spans.push(Span::styled(value, value_style));
        spans.push(Span::styled("  ", label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::Graph;
    use crate::input::Input;

    #[test]
    fn test_sorting_fields_show_counters() {
        let mut session = Session::start(Algorithm::Bubble, Input::sequence(vec![2, 1])).unwrap();
        session.step();
        let fields = hud_fields(&session);
        assert!(fields.contains(&("Writes/Swaps", "1".to_string())));
        assert!(fields.contains(&("Comparisons", "0".to_string())));
    }

    #[test]
    fn test_graph_fields_show_frontier() {
        let session = Session::start(Algorithm::Dfs, Input::graph(Graph::grid(2, 2), 0, None)).unwrap();
        let fields = hud_fields(&session);
        assert!(fields.contains(&("Visited / Stack", "0 / 1".to_string())));
    }
}
