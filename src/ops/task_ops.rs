use crate::model::{Category, Priority, Task};

/// Linear scan by id — the collection is small and has no secondary index
fn find_index(tasks: &[Task], id: &str) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}

/// Build a task via the factory and prepend it (newest first).
/// Returns the new id, or `None` when the trimmed text is empty.
pub fn add_task(
    tasks: &mut Vec<Task>,
    text: &str,
    category: Category,
    priority: Priority,
    due: Option<String>,
) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let task = Task::new(text, category, priority, due);
    let id = task.id.clone();
    tasks.insert(0, task);
    Some(id)
}

/// Set a task's completed flag to the control's new state.
/// A stale id is a no-op, not an error.
pub fn set_completed(tasks: &mut [Task], id: &str, done: bool) -> bool {
    match find_index(tasks, id) {
        Some(idx) => {
            tasks[idx].completed = done;
            true
        }
        None => false,
    }
}

/// Replace a task's text. Trimmed-empty replacement keeps the prior text.
/// Returns whether the id resolved.
pub fn edit_text(tasks: &mut [Task], id: &str, new_text: &str) -> bool {
    match find_index(tasks, id) {
        Some(idx) => {
            let trimmed = new_text.trim();
            if !trimmed.is_empty() {
                tasks[idx].text = trimmed.to_string();
            }
            true
        }
        None => false,
    }
}

/// Remove a task by id. A stale id is a no-op.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    match find_index(tasks, id) {
        Some(idx) => {
            tasks.remove(idx);
            true
        }
        None => false,
    }
}

/// Remove every completed task, returning the number removed
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|t| !t.completed);
    before - tasks.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(tasks: &mut Vec<Task>, text: &str) -> String {
        add_task(tasks, text, Category::None, Priority::Medium, None).unwrap()
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut tasks = Vec::new();
        add(&mut tasks, "first");
        add(&mut tasks, "second");
        assert_eq!(tasks[0].text, "second");
        assert_eq!(tasks[1].text, "first");
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut tasks = Vec::new();
        assert!(add_task(&mut tasks, "   ", Category::None, Priority::Medium, None).is_none());
        assert!(tasks.is_empty());
    }

    #[test]
    fn toggle_sets_given_state() {
        let mut tasks = Vec::new();
        let id = add(&mut tasks, "x");
        assert!(set_completed(&mut tasks, &id, true));
        assert!(tasks[0].completed);
        assert!(set_completed(&mut tasks, &id, false));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn edit_replaces_text() {
        let mut tasks = Vec::new();
        let id = add(&mut tasks, "old");
        assert!(edit_text(&mut tasks, &id, "  new text  "));
        assert_eq!(tasks[0].text, "new text");
    }

    #[test]
    fn edit_to_empty_keeps_prior_text() {
        let mut tasks = Vec::new();
        let id = add(&mut tasks, "keep me");
        assert!(edit_text(&mut tasks, &id, "   "));
        assert_eq!(tasks[0].text, "keep me");
    }

    #[test]
    fn delete_removes_by_id() {
        let mut tasks = Vec::new();
        let id_a = add(&mut tasks, "a");
        let id_b = add(&mut tasks, "b");
        assert!(delete_task(&mut tasks, &id_a));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id_b);
    }

    #[test]
    fn stale_ids_are_no_ops() {
        let mut tasks = Vec::new();
        add(&mut tasks, "x");
        assert!(!set_completed(&mut tasks, "gone", true));
        assert!(!edit_text(&mut tasks, "gone", "y"));
        assert!(!delete_task(&mut tasks, "gone"));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "x");
    }

    #[test]
    fn clear_completed_removes_only_done() {
        let mut tasks = Vec::new();
        let id_a = add(&mut tasks, "a");
        add(&mut tasks, "b");
        let id_c = add(&mut tasks, "c");
        set_completed(&mut tasks, &id_a, true);
        set_completed(&mut tasks, &id_c, true);

        assert_eq!(clear_completed(&mut tasks), 2);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "b");
        assert_eq!(clear_completed(&mut tasks), 0);
    }
}
