use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task category label, with an explicit "none" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    None,
    Work,
    Personal,
    Shopping,
    Health,
}

impl Category {
    /// Badge label ("Work", "Personal", ...). `None` has no badge.
    pub fn label(self) -> &'static str {
        match self {
            Category::None => "none",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
        }
    }

    /// Cycle forward through the categories (form field arrows)
    pub fn next(self) -> Category {
        match self {
            Category::None => Category::Work,
            Category::Work => Category::Personal,
            Category::Personal => Category::Shopping,
            Category::Shopping => Category::Health,
            Category::Health => Category::None,
        }
    }

    /// Cycle backward through the categories
    pub fn prev(self) -> Category {
        match self {
            Category::None => Category::Health,
            Category::Work => Category::None,
            Category::Personal => Category::Work,
            Category::Shopping => Category::Personal,
            Category::Health => Category::Shopping,
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Badge label, always uppercased
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn prev(self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// A single task. Field names on the wire are camelCase so the persisted
/// blob keeps the original `{id, text, completed, createdAt, category,
/// priority, due}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique string, set at creation, never mutated
    pub id: String,
    /// Trimmed, non-empty task text
    pub text: String,
    pub completed: bool,
    /// Creation time in epoch millis, set once
    pub created_at: i64,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date as a `YYYY-MM-DD` string
    pub due: Option<String>,
}

impl Task {
    /// Create a new task with a generated id and defaults applied.
    ///
    /// Trims `text` but does not reject empty input — the submit handler
    /// enforces the non-empty precondition before calling this. A blank
    /// `due` string becomes absent.
    pub fn new(text: &str, category: Category, priority: Priority, due: Option<String>) -> Self {
        Task {
            id: generate_id(),
            text: text.trim().to_string(),
            completed: false,
            created_at: Utc::now().timestamp_millis(),
            category,
            priority,
            due: due.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Generate a task id: creation millis in base 36 plus a short random
/// suffix. Not cryptographic — practically unique for a single-user app.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let random = Uuid::new_v4().simple().to_string();
    format!("{}{}", to_base36(millis), &random[..5])
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}
