use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::{config_io, store};
use crate::model::{Category, Priority, Task};
use crate::ops::query::{Filter, Stats, visible_indices};
use crate::ops::task_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// New-task form popup
    Add,
    /// Inline edit of the selected row (viewing → editing → viewing)
    Edit,
    Search,
}

/// Fields of the add-task form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Category,
    Priority,
    Due,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Text => FormField::Category,
            FormField::Category => FormField::Priority,
            FormField::Priority => FormField::Due,
            FormField::Due => FormField::Text,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Text => FormField::Due,
            FormField::Category => FormField::Text,
            FormField::Priority => FormField::Category,
            FormField::Due => FormField::Priority,
        }
    }
}

/// State of the add-task form
#[derive(Debug, Clone)]
pub struct AddForm {
    pub text: String,
    pub category: Category,
    pub priority: Priority,
    /// Raw due-date input; validated as YYYY-MM-DD on submit
    pub due: String,
    pub field: FormField,
}

impl Default for AddForm {
    fn default() -> Self {
        AddForm {
            text: String::new(),
            category: Category::None,
            priority: Priority::Medium,
            due: String::new(),
            field: FormField::Text,
        }
    }
}

/// Main application state. All handlers and render functions take this
/// explicitly; there are no module-level globals.
pub struct App {
    /// The single in-memory task collection, newest first
    pub tasks: Vec<Task>,
    /// Where the collection is persisted
    pub data_path: PathBuf,
    pub theme: Theme,
    pub mode: Mode,
    pub filter: Filter,
    /// Live search text; applied on every keystroke, no debounce
    pub search_input: String,
    /// Cursor index into the visible list
    pub cursor: usize,
    /// First visible row (list scrolling)
    pub scroll_offset: usize,
    pub form: AddForm,
    /// Inline edit state: target id and buffer
    pub editing_id: Option<String>,
    pub edit_buffer: String,
    /// Byte offset into edit_buffer
    pub edit_cursor: usize,
    /// Rows revealed so far after a rebuild (entrance stagger, cosmetic)
    pub reveal: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(tasks: Vec<Task>, data_path: PathBuf, theme: Theme) -> Self {
        App {
            tasks,
            data_path,
            theme,
            mode: Mode::Navigate,
            filter: Filter::All,
            search_input: String::new(),
            cursor: 0,
            scroll_offset: 0,
            form: AddForm::default(),
            editing_id: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            reveal: 0,
            should_quit: false,
        }
    }

    /// Indices of the visible tasks, recomputed fresh on every call
    pub fn visible(&self) -> Vec<usize> {
        visible_indices(&self.tasks, self.filter, &self.search_input)
    }

    /// Progress over the entire collection
    pub fn stats(&self) -> Stats {
        Stats::compute(&self.tasks)
    }

    /// Id of the task under the cursor, if any
    pub fn selected_id(&self) -> Option<String> {
        let visible = self.visible();
        visible.get(self.cursor).map(|&i| self.tasks[i].id.clone())
    }

    /// Case-insensitive regex for highlighting search matches in rows
    pub fn search_regex(&self) -> Option<Regex> {
        if self.search_input.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(&self.search_input))).ok()
    }

    /// Every mutation and view change ends here: restart the entrance
    /// stagger, clamp the cursor, and persist the full collection. Write
    /// failures are swallowed — there is no error surface in the UI.
    pub fn refresh(&mut self) {
        self.reveal = 0;
        let len = self.visible().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        let _ = store::save(&self.data_path, &self.tasks);
    }

    /// Advance the entrance stagger by one row (poll tick)
    pub fn tick(&mut self) {
        self.reveal = self.reveal.saturating_add(1);
    }

    // --- Mutation handlers -------------------------------------------------

    /// Submit the add form. Empty trimmed text is a no-op and the form
    /// stays open; otherwise the new task is prepended and the form resets
    /// to defaults.
    pub fn submit_add(&mut self) {
        let due = NaiveDate::parse_from_str(self.form.due.trim(), "%Y-%m-%d")
            .ok()
            .map(|_| self.form.due.trim().to_string());
        let added = task_ops::add_task(
            &mut self.tasks,
            &self.form.text,
            self.form.category,
            self.form.priority,
            due,
        );
        if added.is_none() {
            return;
        }
        self.form = AddForm::default();
        self.mode = Mode::Navigate;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.refresh();
    }

    /// Flip the selected task's completed state
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let done = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| !t.completed)
            .unwrap_or(true);
        if task_ops::set_completed(&mut self.tasks, &id, done) {
            self.refresh();
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if task_ops::delete_task(&mut self.tasks, &id) {
            self.refresh();
        }
    }

    /// Enter inline edit mode on the selected row
    pub fn begin_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        self.edit_buffer = task.text.clone();
        self.edit_cursor = self.edit_buffer.len();
        self.editing_id = Some(id);
        self.mode = Mode::Edit;
    }

    /// Commit the edit buffer. Trimmed-empty keeps the prior text; a stale
    /// id is a no-op. Either way the row returns to viewing state.
    pub fn commit_edit(&mut self) {
        if let Some(id) = self.editing_id.take() {
            task_ops::edit_text(&mut self.tasks, &id, &self.edit_buffer);
        }
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
        self.refresh();
    }

    /// Abandon the edit without changing the task
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
    }

    /// Switch the visible-list filter
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.refresh();
    }

    /// Remove every completed task
    pub fn clear_completed_tasks(&mut self) {
        if task_ops::clear_completed(&mut self.tasks) > 0 {
            self.refresh();
        }
    }

    // --- Cursor movement ---------------------------------------------------

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    pub fn move_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_bottom(&mut self) {
        self.cursor = self.visible().len().saturating_sub(1);
    }
}

/// Run the TUI application
pub fn run(file_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config();
    let data_path = file_override
        .map(Path::to_path_buf)
        .or_else(|| config.data_file.clone())
        .or_else(store::default_data_path)
        .ok_or("could not determine a data directory; pass --file")?;

    let tasks = store::load(&data_path);
    let theme = Theme::from_config(&config.ui);
    let mut app = App::new(tasks, data_path, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Persist on the way out
    let _ = store::save(&app.data_path, &app.tasks);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // 50ms tick drives the row entrance stagger
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                input::handle_key(app, key);
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
