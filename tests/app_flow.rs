//! Scenario tests driving the application state directly (no terminal).
//!
//! Each test builds an `App` backed by a temp data file and exercises the
//! handler methods the key bindings map to.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use stackz::io::store;
use stackz::model::{Category, Priority};
use stackz::ops::query::Filter;
use stackz::tui::app::{App, Mode};
use stackz::tui::theme::Theme;

fn app_in(dir: &TempDir) -> App {
    App::new(
        Vec::new(),
        dir.path().join(store::DATA_FILE),
        Theme::default(),
    )
}

fn add(app: &mut App, text: &str) -> String {
    app.form.text = text.to_string();
    app.submit_add();
    app.tasks[0].id.clone()
}

#[test]
fn add_task_lands_at_position_zero_with_defaults() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    add(&mut app, "Buy milk");

    assert_eq!(app.tasks.len(), 1);
    let task = &app.tasks[0];
    assert_eq!(task.text, "Buy milk");
    assert!(!task.completed);
    assert_eq!(task.category, Category::None);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.due.is_none());

    // A second add prepends
    add(&mut app, "Walk dog");
    assert_eq!(app.tasks[0].text, "Walk dog");
    assert_eq!(app.tasks[1].text, "Buy milk");
}

#[test]
fn displayed_counts_track_the_collection() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    for text in ["a", "b", "c", "d"] {
        add(&mut app, text);
    }
    app.cursor = 1;
    app.toggle_selected();
    app.cursor = 2;
    app.toggle_selected();

    let stats = app.stats();
    assert_eq!(stats.total, app.tasks.len());
    assert_eq!(
        stats.completed,
        app.tasks.iter().filter(|t| t.completed).count()
    );
    assert_eq!(stats.percent, 50);

    app.cursor = 0;
    app.delete_selected();
    let stats = app.stats();
    assert_eq!(stats.total, 3);
    assert!(stats.percent <= 100);
}

#[test]
fn delete_makes_id_unresolvable() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let id = add(&mut app, "Buy milk");
    let before = app.tasks.len();

    app.cursor = 0;
    app.delete_selected();

    assert_eq!(app.tasks.len(), before - 1);
    assert!(app.tasks.iter().all(|t| t.id != id));
}

#[test]
fn toggle_then_clear_completed_removes_task() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let id = add(&mut app, "Buy milk");
    add(&mut app, "Keep me");

    app.cursor = 1; // "Buy milk" after the prepend
    app.toggle_selected();
    assert!(app.tasks.iter().any(|t| t.id == id && t.completed));

    app.clear_completed_tasks();
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks[0].text, "Keep me");
}

#[test]
fn filters_partition_the_visible_list() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    for text in ["a", "b", "c"] {
        add(&mut app, text);
    }
    app.cursor = 0;
    app.toggle_selected();

    app.set_filter(Filter::Active);
    assert!(app.visible().iter().all(|&i| !app.tasks[i].completed));
    assert_eq!(app.visible().len(), 2);

    app.set_filter(Filter::Completed);
    assert!(app.visible().iter().all(|&i| app.tasks[i].completed));
    assert_eq!(app.visible().len(), 1);

    app.set_filter(Filter::All);
    assert_eq!(app.visible().len(), app.tasks.len());
}

#[test]
fn search_narrows_without_mutating() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    add(&mut app, "Buy milk");
    add(&mut app, "Call bank");
    add(&mut app, "Spill MILK");

    app.search_input = "milk".to_string();
    let visible = app.visible();
    assert_eq!(visible.len(), 2);
    for &i in &visible {
        assert!(app.tasks[i].text.to_lowercase().contains("milk"));
    }
    // Search never changes the collection
    assert_eq!(app.tasks.len(), 3);
    // Stats stay collection-wide while searching
    assert_eq!(app.stats().total, 3);
}

#[test]
fn view_projection_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    for text in ["a", "b", "c"] {
        add(&mut app, text);
    }
    app.cursor = 1;
    app.toggle_selected();
    app.search_input = "a".to_string();
    app.filter = Filter::Active;

    let first = (app.visible(), app.stats());
    let second = (app.visible(), app.stats());
    assert_eq!(first, second);
}

#[test]
fn stale_selection_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    // Empty list: the cursor resolves to nothing
    app.toggle_selected();
    app.delete_selected();
    app.begin_edit();
    assert_eq!(app.mode, Mode::Navigate);
    assert!(app.tasks.is_empty());

    // Commit an edit whose target id was deleted out from under it
    add(&mut app, "x");
    app.cursor = 0;
    app.begin_edit();
    app.tasks.clear();
    app.edit_buffer = "stale".to_string();
    app.commit_edit();
    assert!(app.tasks.is_empty());
    assert_eq!(app.mode, Mode::Navigate);
}

#[test]
fn edit_trimmed_to_empty_keeps_prior_text() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    add(&mut app, "original");

    app.cursor = 0;
    app.begin_edit();
    app.edit_buffer = "   ".to_string();
    app.commit_edit();

    assert_eq!(app.tasks[0].text, "original");
}
