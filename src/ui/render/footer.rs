use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Return key hints for whatever currently receives input.
///
fn hints(state: &State) -> &'static str {
    if state.has_delete_confirmation() {
        " Enter/y: confirm delete, Esc/n: cancel"
    } else if state.editor().is_open() {
        " Tab: next field, Enter: save, Esc: cancel"
    } else if state.is_search_mode() {
        " Type to search, Enter/Esc: done"
    } else {
        " j/k: move, a: add, e: edit, space: toggle, d: delete, s: status, p: priority, /: search, c: clear, r: refresh, l: log, q: quit"
    }
}

/// Render footer with key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let paragraph = Paragraph::new(Span::styled(
        hints(state),
        styling::muted_text_style(state.get_theme()),
    ));
    frame.render_widget(paragraph, size);
}
