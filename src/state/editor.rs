//! Task editor session.
//!
//! A single shared form decides whether a submit creates a new task or
//! updates an existing one. Opening a session always replaces whatever
//! session was active before.

use crate::remote::{NewTask, Priority, Task, TaskId, TaskPatch};

/// Editor session state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Session {
    #[default]
    Closed,
    CreatingNew,
    Editing(TaskId),
}

/// Specifying editor form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    pub fn previous(self) -> FormField {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
        }
    }
}

/// User-editable task fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Description as cached when the form was opened.
    loaded_description: Option<String>,
}

impl TaskForm {
    /// Pre-fill from cached task values. Completion and timestamps are not
    /// editable through the form.
    ///
    pub fn from_task(task: &Task) -> Self {
        TaskForm {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            loaded_description: task.description.clone(),
        }
    }

    /// An untouched description is sent back exactly as loaded, so an empty
    /// string stays distinct from null. A blank edit clears it.
    ///
    fn description(&self) -> Option<String> {
        if self.loaded_description.as_deref().unwrap_or_default() == self.description {
            return self.loaded_description.clone();
        }
        if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        }
    }

    pub fn to_new_task(&self) -> NewTask {
        NewTask {
            title: self.title.clone(),
            description: self.description(),
            priority: self.priority,
        }
    }

    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            title: Some(self.title.clone()),
            description: Some(self.description()),
            priority: Some(self.priority),
            completed: None,
        }
    }
}

/// Identifies one opening of the editor. Each open yields a fresh token,
/// including reopening the same task.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct SessionToken(u64);

/// What a submit should do with the form contents.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Submission {
    Create(NewTask),
    Update(TaskId, TaskPatch),
}

/// Single-slot editor state machine plus the form it drives.
///
#[derive(Debug, Default)]
pub struct EditorSession {
    session: Session,
    token: SessionToken,
    form: TaskForm,
    field: FormField,
}

impl EditorSession {
    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.session != Session::Closed
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn token(&self) -> SessionToken {
        self.token
    }

    fn begin(&mut self, session: Session, form: TaskForm) -> &mut Self {
        self.session = session;
        self.token = SessionToken(self.token.0.wrapping_add(1));
        self.form = form;
        self.field = FormField::Title;
        self
    }

    /// Open an empty form that will create a new task.
    ///
    pub fn open_new(&mut self) -> &mut Self {
        self.begin(Session::CreatingNew, TaskForm::default())
    }

    /// Open a form pre-filled with the task's cached values.
    ///
    pub fn open_edit(&mut self, task: &Task) -> &mut Self {
        self.begin(Session::Editing(task.id), TaskForm::from_task(task))
    }

    pub fn close(&mut self) -> &mut Self {
        self.session = Session::Closed;
        self.form = TaskForm::default();
        self.field = FormField::Title;
        self
    }

    /// Close only if the session identified by the token is still the
    /// active one. A submit that settles after the user reopened the editor
    /// must not close the newer session.
    ///
    pub fn close_if(&mut self, token: SessionToken) -> bool {
        if self.token == token && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Route the current form to a create or an update. Nothing can be
    /// submitted while closed.
    ///
    pub fn submission(&self) -> Option<(SessionToken, Submission)> {
        let submission = match self.session {
            Session::Closed => return None,
            Session::CreatingNew => Submission::Create(self.form.to_new_task()),
            Session::Editing(id) => Submission::Update(id, self.form.to_patch()),
        };
        Some((self.token, submission))
    }

    pub fn next_field(&mut self) -> &mut Self {
        self.field = self.field.next();
        self
    }

    pub fn previous_field(&mut self) -> &mut Self {
        self.field = self.field.previous();
        self
    }

    /// Type a character into the focused text field.
    ///
    pub fn push_char(&mut self, c: char) -> &mut Self {
        match self.field {
            FormField::Title => self.form.title.push(c),
            FormField::Description => self.form.description.push(c),
            FormField::Priority => {}
        }
        self
    }

    /// Erase the last character of the focused text field.
    ///
    pub fn pop_char(&mut self) -> &mut Self {
        match self.field {
            FormField::Title => {
                self.form.title.pop();
            }
            FormField::Description => {
                self.form.description.pop();
            }
            FormField::Priority => {}
        }
        self
    }

    pub fn next_priority(&mut self) -> &mut Self {
        self.form.priority = self.form.priority.next();
        self
    }

    pub fn previous_priority(&mut self) -> &mut Self {
        self.form.priority = self.form.priority.previous();
        self
    }
}
