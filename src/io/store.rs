use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;

use crate::model::Task;

/// File name of the persisted task blob
pub const DATA_FILE: &str = "tasks.json";

/// Default tasks file in the platform data directory
/// (e.g. `~/.local/share/stackz/tasks.json` on Linux)
pub fn default_data_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "stackz")?;
    Some(dirs.data_dir().join(DATA_FILE))
}

/// Load the full task collection. A missing file or a blob that fails to
/// parse as a task sequence yields an empty collection — corruption is
/// treated as "no prior state" and never surfaces to the user.
pub fn load(path: &Path) -> Vec<Task> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// Serialize the full collection and overwrite the blob atomically
/// (write to a temp file in the same directory, then rename over).
/// Called on every mutation; callers ignore the result.
pub fn save(path: &Path, tasks: &[Task]) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, content.as_bytes())
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
