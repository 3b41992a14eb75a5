use crate::state::{FormField, State};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{thread, time::Duration};
use tokio::sync::mpsc;

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::UnboundedReceiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Wait for the next terminal event. Returns `None` once the polling
    /// thread has stopped.
    ///
    pub async fn next(&mut self) -> Option<Event<KeyEvent>> {
        self.rx.recv().await
    }
}

/// Handle a terminal event. Returns false if exit was requested.
///
pub fn handle(event: Event<KeyEvent>, state: &mut State) -> bool {
    match event {
        Event::Input(key) => handle_key(key, state),
        Event::Tick => {
            state.prune_notifications();
            if state.is_loading() {
                state.advance_spinner_index();
            }
            true
        }
    }
}

/// Route a key press to the layer currently on top: the delete
/// confirmation, then the editor, then the search input, then the list.
///
fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.has_delete_confirmation() {
        handle_delete_confirmation(key, state);
    } else if state.editor().is_open() {
        handle_editor(key, state);
    } else if state.is_search_mode() {
        handle_search(key, state);
    } else {
        return handle_task_list(key, state);
    }
    true
}

fn handle_delete_confirmation(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            state.confirm_delete_task();
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.cancel_delete_confirmation();
        }
        _ => {}
    }
}

fn handle_editor(key: KeyEvent, state: &mut State) {
    let on_priority = state.editor().field() == FormField::Priority;
    match key.code {
        KeyCode::Esc => {
            state.close_editor();
        }
        KeyCode::Enter => {
            state.submit_editor();
        }
        KeyCode::Tab | KeyCode::Down => {
            state.editor_mut().next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.editor_mut().previous_field();
        }
        KeyCode::Left if on_priority => {
            state.editor_mut().previous_priority();
        }
        KeyCode::Right | KeyCode::Char(' ') if on_priority => {
            state.editor_mut().next_priority();
        }
        KeyCode::Backspace => {
            state.editor_mut().pop_char();
        }
        KeyCode::Char(c) => {
            state.editor_mut().push_char(c);
        }
        _ => {}
    }
}

fn handle_search(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Esc => {
            state.exit_search_mode();
        }
        KeyCode::Enter => {
            state.exit_search_mode();
        }
        KeyCode::Backspace => {
            state.backspace_search();
        }
        KeyCode::Char(c) => {
            state.add_search_char(c);
        }
        _ => {}
    }
}

fn handle_task_list(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_task_index();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_task_index();
        }
        KeyCode::Char('a') => {
            state.open_create_form();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            state.open_edit_form();
        }
        KeyCode::Char(' ') => {
            state.toggle_selected_task();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            state.delete_selected_task();
        }
        KeyCode::Char('s') => {
            state.cycle_status_filter();
        }
        KeyCode::Char('p') => {
            state.cycle_priority_filter();
        }
        KeyCode::Char('/') => {
            state.enter_search_mode();
        }
        KeyCode::Char('c') => {
            state.clear_filters();
        }
        KeyCode::Char('r') => {
            state.request_refresh();
        }
        KeyCode::Char('l') => {
            state.toggle_log();
        }
        _ => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::filter::StatusFilter;
    use crate::remote::{Priority, Task, TaskId};
    use crate::state::Session;
    use crate::ui::Theme;
    use tokio::sync::mpsc::unbounded_channel;

    fn press(code: KeyCode) -> Event<KeyEvent> {
        Event::Input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn sample_task() -> Task {
        Task {
            id: TaskId(7),
            title: "X".to_string(),
            description: None,
            priority: Priority::High,
            completed: false,
            created_at: "2024-03-01T10:00:00".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn ctrl_c_and_q_exit() {
        let mut state = State::default();
        assert!(!handle(
            Event::Input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &mut state
        ));
        assert!(!handle(press(KeyCode::Char('q')), &mut state));
    }

    #[test]
    fn typing_in_editor_does_not_trigger_list_shortcuts() {
        let mut state = State::default();
        handle(press(KeyCode::Char('a')), &mut state);
        assert_eq!(state.editor().session(), Session::CreatingNew);
        for c in "quads".chars() {
            assert!(handle(press(KeyCode::Char(c)), &mut state));
        }
        assert_eq!(state.editor().form().title, "quads");
        assert!(state.filter().status.is_none());

        handle(press(KeyCode::Esc), &mut state);
        assert!(!state.editor().is_open());
    }

    #[test]
    fn editor_priority_field_cycles() {
        let mut state = State::default();
        state.set_tasks(vec![sample_task()]);
        handle(press(KeyCode::Char('e')), &mut state);
        handle(press(KeyCode::BackTab), &mut state);
        handle(press(KeyCode::Right), &mut state);
        assert_eq!(state.editor().form().priority, Priority::Low);
        handle(press(KeyCode::Left), &mut state);
        assert_eq!(state.editor().form().priority, Priority::High);
    }

    #[test]
    fn search_input_captures_keys() {
        let mut state = State::default();
        handle(press(KeyCode::Char('/')), &mut state);
        for c in "sp".chars() {
            handle(press(KeyCode::Char(c)), &mut state);
        }
        assert_eq!(state.filter().search, "sp");
        assert!(state.filter().status.is_none());
        assert!(state.filter().priority.is_none());
        handle(press(KeyCode::Backspace), &mut state);
        handle(press(KeyCode::Enter), &mut state);
        assert_eq!(state.filter().search, "s");
        handle(press(KeyCode::Char('s')), &mut state);
        assert_eq!(state.filter().status, Some(StatusFilter::Pending));
    }

    #[test]
    fn delete_needs_confirmation_key() {
        let (tx, mut rx) = unbounded_channel();
        let mut state = State::new(tx, Theme::default(), std::time::Duration::from_secs(3));
        state.set_tasks(vec![sample_task()]);

        handle(press(KeyCode::Char('d')), &mut state);
        assert!(state.has_delete_confirmation());
        handle(press(KeyCode::Char('x')), &mut state);
        assert!(rx.try_recv().is_err());

        handle(press(KeyCode::Char('y')), &mut state);
        assert!(matches!(rx.try_recv().unwrap(), NetworkEvent::Delete(_)));
    }

    #[test]
    fn tick_expires_nothing_fresh() {
        let mut state = State::default();
        state.notify("hello", crate::state::Severity::Success);
        assert!(handle(Event::Tick, &mut state));
        assert!(state.current_notification().is_some());
    }
}
