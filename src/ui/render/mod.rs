mod confirm;
mod editor;
mod filters;
mod footer;
mod log;
mod stats;
mod tasks;
mod toast;

use self::log::log;
use super::*;
use crate::state::State;
use confirm::confirm;
use editor::editor;
use filters::filters;
use footer::footer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use stats::stats;
use tasks::tasks;
use toast::toast;

/// Specify the height of the log panel when visible.
///
const LOG_HEIGHT: u16 = 10;

/// Render every widget according to state, with modals drawn last so they
/// sit on top.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    stats(frame, chunks[0], state);
    filters(frame, chunks[1], state);
    tasks(frame, chunks[2], state);
    if state.is_log_visible() {
        log(frame, chunks[3], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);

    if state.editor().is_open() {
        editor(frame, centered_rect(60, 50, frame.size()), state);
    }
    if state.has_delete_confirmation() {
        confirm(frame, centered_rect(50, 25, frame.size()), state);
    }
    toast(frame, frame.size(), state);
}

/// Return a rectangle centered in `r` using the given percentages.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Shorten text to at most `max` characters, marking the cut.
///
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{Priority, Task, TaskId, TaskStats};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state_with_tasks() -> State {
        let mut state = State::default();
        state.set_tasks(vec![Task {
            id: TaskId(1),
            title: "Deploy staging".to_string(),
            description: Some("after review".to_string()),
            priority: Priority::High,
            completed: false,
            created_at: "2024-03-01T10:00:00".to_string(),
            updated_at: None,
        }]);
        state.set_stats(TaskStats {
            total: 1,
            completed: 0,
            pending: 1,
            high_priority: 1,
        });
        state
    }

    #[test]
    fn renders_tasks_and_stats() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = state_with_tasks();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Deploy staging"));
        assert!(text.contains("Total 1"));
    }

    #[test]
    fn renders_editor_and_confirmation_modals() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = state_with_tasks();
        state.open_edit_form();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert!(buffer_text(&terminal).contains("Edit Task"));

        state.close_editor().delete_selected_task();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert!(buffer_text(&terminal).contains("Confirm Delete"));
    }

    #[test]
    fn filter_bar_shows_clear_hint_only_when_filtering() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = state_with_tasks();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert!(!buffer_text(&terminal).contains("c to clear"));

        state.cycle_priority_filter();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert!(buffer_text(&terminal).contains("c to clear"));
    }

    #[test]
    fn renders_with_log_panel() {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let mut state = state_with_tasks();
        state.toggle_log();
        terminal.draw(|frame| render(frame, &mut state)).unwrap();
        assert!(buffer_text(&terminal).contains("Log"));
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long task title", 10), "a long ...");
    }
}
