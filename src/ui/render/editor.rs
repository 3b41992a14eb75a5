use super::Frame;
use crate::remote::Priority;
use crate::state::{FormField, Session, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the task editor modal.
///
pub fn editor(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let editor = state.editor();
    let title = match editor.session() {
        Session::Editing(id) => format!("Edit Task #{}", id),
        _ => "New Task".to_string(),
    };

    frame.render_widget(Clear, size);
    let block = Block::default()
        .title(Span::styled(title, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Description
            Constraint::Length(3), // Priority
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let form = editor.form();
    let focused = editor.field();
    field(frame, chunks[0], state, "Title", &form.title, focused == FormField::Title);
    field(
        frame,
        chunks[1],
        state,
        "Description",
        &form.description,
        focused == FormField::Description,
    );

    let priority_spans: Vec<Span> = Priority::ALL
        .iter()
        .flat_map(|p| {
            let label = if *p == form.priority {
                format!("[{}]", p)
            } else {
                format!(" {} ", p)
            };
            let style = if *p == form.priority {
                styling::priority_style(theme, *p)
            } else {
                styling::muted_text_style(theme)
            };
            vec![Span::styled(label, style), Span::raw(" ")]
        })
        .collect();
    let priority_block = field_block(state, "Priority", focused == FormField::Priority);
    frame.render_widget(
        Paragraph::new(Line::from(priority_spans)).block(priority_block),
        chunks[2],
    );

    let hints = Paragraph::new(Span::styled(
        "Tab: next field, Left/Right: priority, Enter: save, Esc: cancel",
        styling::muted_text_style(theme),
    ));
    frame.render_widget(hints, chunks[3]);
}

fn field_block<'a>(state: &State, label: &'a str, focused: bool) -> Block<'a> {
    let theme = state.get_theme();
    let block = Block::default().title(label).borders(Borders::ALL);
    if focused {
        block.border_style(styling::active_block_border_style(theme))
    } else {
        block.border_style(styling::normal_block_border_style(theme))
    }
}

fn field(frame: &mut Frame, size: Rect, state: &State, label: &str, value: &str, focused: bool) {
    let cursor = if focused { "_" } else { "" };
    let paragraph = Paragraph::new(format!("{}{}", value, cursor))
        .style(styling::normal_text_style(state.get_theme()))
        .wrap(Wrap { trim: false })
        .block(field_block(state, label, focused));
    frame.render_widget(paragraph, size);
}
