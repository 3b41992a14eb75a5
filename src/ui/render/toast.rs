use super::{truncate, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
};

const MAX_WIDTH: u16 = 50;

/// Render the newest live notification in the top-right corner.
///
pub fn toast(frame: &mut Frame, size: Rect, state: &State) {
    let Some(notification) = state.current_notification() else {
        return;
    };
    let theme = state.get_theme();

    let width = MAX_WIDTH.min(size.width);
    let area = Rect {
        x: size.x + size.width - width,
        y: size.y,
        width,
        height: 3.min(size.height),
    };
    let style = styling::severity_style(theme, notification.severity);
    let message = truncate(&notification.message, width.saturating_sub(2) as usize);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        area,
    );
}
