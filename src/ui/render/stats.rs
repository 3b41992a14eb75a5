use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render aggregate stats as reported by the service.
///
pub fn stats(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(format!("Tasks {}", spinner::frame(state)))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let line = match state.stats() {
        Some(stats) => Line::from(vec![
            Span::styled(format!("Total {}", stats.total), styling::normal_text_style(theme)),
            Span::raw("   "),
            Span::styled(
                format!("Completed {}", stats.completed),
                Style::default().fg(theme.success.to_color()),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Pending {}", stats.pending),
                Style::default().fg(theme.warning.to_color()),
            ),
            Span::raw("   "),
            Span::styled(
                format!("High priority {}", stats.high_priority),
                Style::default().fg(theme.priority_high.to_color()),
            ),
        ]),
        None => Line::from(Span::styled("Stats unavailable", styling::muted_text_style(theme))),
    };

    frame.render_widget(Paragraph::new(line).block(block), size);
}
