use super::{truncate, Frame};
use crate::state::State;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the delete confirmation dialog.
///
pub fn confirm(frame: &mut Frame, size: Rect, state: &State) {
    let Some(pending) = state.get_delete_confirmation() else {
        return;
    };
    let theme = state.get_theme();

    frame.render_widget(Clear, size);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete task: \"{}\"?", truncate(pending.title(), 45)),
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            Style::default()
                .fg(theme.warning.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/y: confirm, Esc/n: cancel",
            Style::default().fg(theme.text_muted.to_color()),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Confirm Delete",
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(theme.error.to_color())),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, size);
}
