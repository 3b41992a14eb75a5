use super::{truncate, Frame};
use crate::remote::{format_timestamp, Task};
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BLOCK_TITLE: &str = "Task List";

/// Render one row per visible task.
///
pub fn tasks(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = !state.is_search_mode() && !state.editor().is_open();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    } else {
        block = block.title(BLOCK_TITLE);
    }

    if state.visible_tasks().is_empty() {
        let message = if state.tasks().is_empty() {
            "No tasks yet. Press 'a' to add one."
        } else {
            "No tasks match the current filters. Press 'c' to clear them."
        };
        let paragraph = Paragraph::new(message)
            .style(styling::muted_text_style(&theme))
            .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let width = size.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = state
        .visible_tasks()
        .iter()
        .map(|task| task_item(task, &theme, width))
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::active_list_item_style(&theme))
        .block(block);

    frame.render_stateful_widget(list, size, state.get_tasks_list_state());
}

fn task_item<'a>(task: &Task, theme: &Theme, width: usize) -> ListItem<'a> {
    let (mark, title_style) = if task.completed {
        ("[x] ", styling::completed_text_style(theme))
    } else {
        ("[ ] ", styling::normal_text_style(theme))
    };

    let header = Line::from(vec![
        Span::styled(mark, styling::normal_text_style(theme)),
        Span::styled(
            format!("{:<7}", task.priority.as_str()),
            styling::priority_style(theme, task.priority),
        ),
        Span::styled(truncate(&task.title, width.saturating_sub(12)), title_style),
    ]);

    let mut details = vec![Span::styled(
        format!("    created {}", format_timestamp(&task.created_at)),
        styling::muted_text_style(theme),
    )];
    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        details.push(Span::styled(
            format!("  {}", truncate(description, width.saturating_sub(30))),
            styling::muted_text_style(theme),
        ));
    }

    ListItem::new(vec![header, Line::from(details)])
}
