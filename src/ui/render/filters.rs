use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Filters";
const ACTIVE_BLOCK_TITLE: &str = "Filters (c to clear)";

/// Render the current filter predicates.
///
pub fn filters(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let filter = state.filter();

    let title = if filter.is_empty() {
        BLOCK_TITLE
    } else {
        ACTIVE_BLOCK_TITLE
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if state.is_search_mode() {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(title, styling::active_block_title_style()));
    } else {
        block = block.title(title);
    }

    let status = filter
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "all".to_string());
    let priority = filter
        .priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "all".to_string());
    let cursor = if state.is_search_mode() { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled("Status: ", styling::muted_text_style(theme)),
        Span::styled(status, styling::normal_text_style(theme)),
        Span::raw("   "),
        Span::styled("Priority: ", styling::muted_text_style(theme)),
        Span::styled(priority, styling::normal_text_style(theme)),
        Span::raw("   "),
        Span::styled("Search: ", styling::muted_text_style(theme)),
        Span::styled(
            format!("{}{}", filter.search, cursor),
            styling::normal_text_style(theme),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}/{} shown", state.visible_tasks().len(), state.tasks().len()),
            styling::muted_text_style(theme),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), size);
}
