use crate::model::Task;

/// Which tasks are shown in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Cycle to the next filter (Tab key)
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Whether this filter admits the task, ignoring search
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Indices of the visible tasks, in collection order. Pure: evaluated fresh
/// on every render. A non-empty `query` excludes tasks whose text does not
/// contain it case-insensitively.
pub fn visible_indices(tasks: &[Task], filter: Filter, query: &str) -> Vec<usize> {
    let q = query.to_lowercase();
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| filter.admits(t))
        .filter(|(_, t)| q.is_empty() || t.text.to_lowercase().contains(&q))
        .map(|(i, _)| i)
        .collect()
}

/// Aggregate progress over the entire collection, never the filtered subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    /// round(100 * completed / total), 0 when total is 0
    pub percent: u8,
}

impl Stats {
    pub fn compute(tasks: &[Task]) -> Stats {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Stats {
            total,
            completed,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority};

    fn task(text: &str, completed: bool) -> Task {
        let mut t = Task::new(text, Category::None, Priority::Medium, None);
        t.completed = completed;
        t
    }

    fn sample() -> Vec<Task> {
        vec![
            task("Buy milk", false),
            task("Call the bank", true),
            task("Milk the cows", true),
            task("Water plants", false),
        ]
    }

    #[test]
    fn filter_all_shows_everything() {
        let tasks = sample();
        assert_eq!(visible_indices(&tasks, Filter::All, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_active_excludes_completed() {
        let tasks = sample();
        let visible = visible_indices(&tasks, Filter::Active, "");
        assert_eq!(visible, vec![0, 3]);
        assert!(visible.iter().all(|&i| !tasks[i].completed));
    }

    #[test]
    fn filter_completed_excludes_active() {
        let tasks = sample();
        let visible = visible_indices(&tasks, Filter::Completed, "");
        assert_eq!(visible, vec![1, 2]);
        assert!(visible.iter().all(|&i| tasks[i].completed));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let tasks = sample();
        assert_eq!(visible_indices(&tasks, Filter::All, "MILK"), vec![0, 2]);
        assert_eq!(visible_indices(&tasks, Filter::All, "the"), vec![1, 2]);
        assert!(visible_indices(&tasks, Filter::All, "xyz").is_empty());
    }

    #[test]
    fn search_composes_with_filter() {
        let tasks = sample();
        assert_eq!(visible_indices(&tasks, Filter::Completed, "milk"), vec![2]);
        assert_eq!(visible_indices(&tasks, Filter::Active, "milk"), vec![0]);
    }

    #[test]
    fn stats_over_whole_collection() {
        let tasks = sample();
        let stats = Stats::compute(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.percent, 50);
    }

    #[test]
    fn stats_empty_is_zero_percent() {
        let stats = Stats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.percent, 0);
    }

    #[test]
    fn stats_percent_rounds() {
        let tasks = vec![task("a", true), task("b", false), task("c", false)];
        // 1/3 → 33
        assert_eq!(Stats::compute(&tasks).percent, 33);
        let tasks = vec![task("a", true), task("b", true), task("c", false)];
        // 2/3 → 67
        assert_eq!(Stats::compute(&tasks).percent, 67);
    }

    #[test]
    fn stats_percent_in_bounds() {
        let mut tasks = sample();
        for t in &mut tasks {
            t.completed = true;
        }
        assert_eq!(Stats::compute(&tasks).percent, 100);
    }
}
