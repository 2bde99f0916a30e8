use crate::domain::{Category, Task, TaskId, UiMode};
use crate::persistence::KeyValueStore;
use crate::store::{StoreError, Tracker};
use log::warn;

/// Main application state for the terminal front end.
///
/// Every change to tasks or mode goes through the tracker; this struct only
/// holds what the screen needs on top of it.
pub struct AppState<G: KeyValueStore> {
    pub tracker: Tracker<G>,
    pub ui_mode: UiMode,
    pub input: String,
    pub selected_index: usize,
    pub pending_delete: Option<TaskId>,
    pub status: Option<String>,
}

impl<G: KeyValueStore> AppState<G> {
    pub fn new(tracker: Tracker<G>) -> Self {
        Self {
            tracker,
            ui_mode: UiMode::Normal,
            input: String::new(),
            selected_index: 0,
            pending_delete: None,
            status: None,
        }
    }

    pub fn mode(&self) -> Category {
        self.tracker.mode()
    }

    /// Tasks of the active list, in creation order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tracker.list_tasks().collect()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tracker.list_tasks().nth(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let count = self.tracker.list_tasks().count();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    /// Switch the active list
    pub fn switch_mode(&mut self, category: Category) {
        if category == self.mode() {
            return;
        }
        match self.tracker.set_mode(category) {
            Ok(()) => {
                self.selected_index = 0;
                self.status = None;
            }
            Err(err) => self.report(err),
        }
    }

    pub fn toggle_mode(&mut self) {
        match self.tracker.toggle_mode() {
            Ok(_) => {
                self.selected_index = 0;
                self.status = None;
            }
            Err(err) => self.report(err),
        }
    }

    /// Focus the input box
    pub fn start_editing(&mut self) {
        self.ui_mode = UiMode::Editing;
        self.status = None;
    }

    pub fn cancel_editing(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Add the typed text to the active list.
    ///
    /// On failure the text stays in the box so the user can retry.
    pub fn submit_input(&mut self) {
        match self.tracker.add_task(&self.input) {
            Ok(_) => {
                self.input.clear();
                self.status = None;
                self.ui_mode = UiMode::Normal;
                let count = self.tracker.list_tasks().count();
                self.selected_index = count.saturating_sub(1);
            }
            Err(StoreError::EmptyText) => {
                self.status = Some("Type something first".to_string());
            }
            Err(err) => self.report(err),
        }
    }

    /// Re-read mode and tasks from disk, e.g. after the CLI changed them
    pub fn reload(&mut self) {
        self.tracker.load_mode();
        match self.tracker.load_tasks() {
            Ok(_) => self.status = None,
            Err(err) => self.report(err),
        }
        self.clamp_selection();
    }

    /// Ask for confirmation before deleting the selected task
    pub fn request_delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.pending_delete = Some(task.id.clone());
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    /// Ask for confirmation before clearing both lists
    pub fn request_clear_all(&mut self) {
        self.ui_mode = UiMode::ConfirmClear;
    }

    /// The user answered yes in a confirmation modal
    pub fn confirm(&mut self) {
        match self.ui_mode {
            UiMode::ConfirmDelete => {
                if let Some(id) = self.pending_delete.take() {
                    match self.tracker.delete_task(&id) {
                        Ok(_) => self.status = None,
                        // Already gone, nothing to tell the user
                        Err(err) if err.is_benign() => self.status = None,
                        Err(err) => self.report(err),
                    }
                }
            }
            UiMode::ConfirmClear => match self.tracker.clear_all() {
                Ok(()) => self.status = Some("All tasks cleared".to_string()),
                Err(err) => self.report(err),
            },
            _ => {}
        }
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// The user answered no (or pressed Esc) in a confirmation modal
    pub fn cancel_confirm(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Text of the task awaiting delete confirmation
    pub fn pending_delete_text(&self) -> Option<&str> {
        self.pending_delete
            .as_ref()
            .and_then(|id| self.tracker.get_task(id))
            .map(|task| task.text.as_str())
    }

    fn clamp_selection(&mut self) {
        let count = self.tracker.list_tasks().count();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    fn report(&mut self, err: StoreError) {
        warn!("event=ui_action status=error reason=\"{}\"", err);
        self.status = Some(err.to_string());
    }
}
