use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::filter::{self, FilterState};
use crate::remote::{Task, TaskId, TaskStats};
use crate::store::PendingDelete;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use super::editor::EditorSession;
use super::navigation::Focus;
use super::notification::{Notification, Notifications, Severity};

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    tasks: Vec<Task>,
    visible_tasks: Vec<Task>,
    stats: Option<TaskStats>,
    filter: FilterState,
    editor: EditorSession,
    delete_confirmation: Option<PendingDelete>,
    notifications: Notifications,
    tasks_list_state: ListState,
    current_focus: Focus,
    requests_in_flight: usize,
    spinner_index: usize,
    show_log: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            tasks: vec![],
            visible_tasks: vec![],
            stats: None,
            filter: FilterState::default(),
            editor: EditorSession::default(),
            delete_confirmation: None,
            notifications: Notifications::default(),
            tasks_list_state: ListState::default(),
            current_focus: Focus::Tasks,
            requests_in_flight: 0,
            spinner_index: 0,
            show_log: false,
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, theme: Theme, notification_ttl: Duration) -> Self {
        State {
            net_sender: Some(net_sender),
            notifications: Notifications::new(notification_ttl),
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Send a network event if a sender is attached.
    ///
    fn dispatch(&self, event: NetworkEvent) {
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to dispatch network event: {}", e);
                }
            }
            None => debug!("No network sender attached, dropping '{:?}'", event),
        }
    }

    /// Returns the authoritative task list.
    ///
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the authoritative task list wholesale and re-derive the
    /// visible subset.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.tasks = tasks;
        self.update_visible_tasks();
        self
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the tasks that pass the current filters.
    ///
    pub fn visible_tasks(&self) -> &[Task] {
        &self.visible_tasks
    }

    pub fn stats(&self) -> Option<&TaskStats> {
        self.stats.as_ref()
    }

    pub fn set_stats(&mut self, stats: TaskStats) -> &mut Self {
        self.stats = Some(stats);
        self
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn cycle_status_filter(&mut self) -> &mut Self {
        self.filter.cycle_status();
        self.update_visible_tasks();
        self
    }

    pub fn cycle_priority_filter(&mut self) -> &mut Self {
        self.filter.cycle_priority();
        self.update_visible_tasks();
        self
    }

    pub fn set_filter(&mut self, filter: FilterState) -> &mut Self {
        self.filter = filter;
        self.update_visible_tasks();
        self
    }

    pub fn clear_filters(&mut self) -> &mut Self {
        self.set_filter(FilterState::default())
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.filter.search.push(c);
        self.update_visible_tasks();
        self
    }

    pub fn backspace_search(&mut self) -> &mut Self {
        self.filter.search.pop();
        self.update_visible_tasks();
        self
    }

    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.current_focus = Focus::Search;
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.current_focus = Focus::Tasks;
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.current_focus == Focus::Search
    }

    pub fn get_tasks_list_state(&mut self) -> &mut ListState {
        &mut self.tasks_list_state
    }

    /// Returns the highlighted visible task.
    ///
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks_list_state
            .selected()
            .and_then(|i| self.visible_tasks.get(i))
    }

    pub fn next_task_index(&mut self) -> &mut Self {
        if self.visible_tasks.is_empty() {
            return self;
        }
        let next = match self.tasks_list_state.selected() {
            Some(i) if i + 1 < self.visible_tasks.len() => i + 1,
            _ => 0,
        };
        self.tasks_list_state.select(Some(next));
        self
    }

    pub fn previous_task_index(&mut self) -> &mut Self {
        if self.visible_tasks.is_empty() {
            return self;
        }
        let previous = match self.tasks_list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.visible_tasks.len() - 1,
        };
        self.tasks_list_state.select(Some(previous));
        self
    }

    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorSession {
        &mut self.editor
    }

    pub fn open_create_form(&mut self) -> &mut Self {
        self.editor.open_new();
        self
    }

    /// Open the editor for the highlighted task.
    ///
    pub fn open_edit_form(&mut self) -> &mut Self {
        if let Some(task) = self.selected_task().cloned() {
            self.editor.open_edit(&task);
        }
        self
    }

    pub fn close_editor(&mut self) -> &mut Self {
        self.editor.close();
        self
    }

    /// Route the form to a create or update. The editor stays open until the
    /// store reports success.
    ///
    pub fn submit_editor(&mut self) -> &mut Self {
        if let Some((token, submission)) = self.editor.submission() {
            self.dispatch(NetworkEvent::Submit { token, submission });
        }
        self
    }

    pub fn toggle_selected_task(&mut self) -> &mut Self {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.dispatch(NetworkEvent::Toggle { id });
        }
        self
    }

    pub fn request_refresh(&mut self) -> &mut Self {
        self.dispatch(NetworkEvent::Refresh);
        self
    }

    /// Ask for confirmation before deleting the highlighted task.
    ///
    pub fn delete_selected_task(&mut self) -> &mut Self {
        let pending = self.selected_task().map(PendingDelete::new);
        if pending.is_some() {
            self.delete_confirmation = pending;
        }
        self
    }

    pub fn get_delete_confirmation(&self) -> Option<&PendingDelete> {
        self.delete_confirmation.as_ref()
    }

    pub fn has_delete_confirmation(&self) -> bool {
        self.delete_confirmation.is_some()
    }

    pub fn cancel_delete_confirmation(&mut self) -> &mut Self {
        self.delete_confirmation = None;
        self
    }

    pub fn confirm_delete_task(&mut self) -> &mut Self {
        if let Some(pending) = self.delete_confirmation.take() {
            self.dispatch(NetworkEvent::Delete(pending.confirm()));
        }
        self
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> &mut Self {
        self.notifications.push(message, severity);
        self
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current(Instant::now())
    }

    pub fn prune_notifications(&mut self) -> &mut Self {
        self.notifications.prune(Instant::now());
        self
    }

    pub fn begin_request(&mut self) -> &mut Self {
        self.requests_in_flight += 1;
        self
    }

    pub fn end_request(&mut self) -> &mut Self {
        self.requests_in_flight = self.requests_in_flight.saturating_sub(1);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.requests_in_flight > 0
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Re-derive the visible subset and keep the highlight on the same task
    /// where possible.
    ///
    fn update_visible_tasks(&mut self) {
        let selected_id = self.selected_task().map(|t| t.id);
        self.visible_tasks = filter::apply(&self.tasks, &self.filter)
            .into_iter()
            .cloned()
            .collect();

        let selection = if self.visible_tasks.is_empty() {
            None
        } else {
            let kept = selected_id.and_then(|id| self.visible_tasks.iter().position(|t| t.id == id));
            let clamped = self
                .tasks_list_state
                .selected()
                .map(|i| i.min(self.visible_tasks.len() - 1));
            Some(kept.or(clamped).unwrap_or(0))
        };
        self.tasks_list_state.select(selection);
    }
}
