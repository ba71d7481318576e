use std::path::{Path, PathBuf};

pub const TASKS_FILE: &str = "tasks.json";
pub const TRASH_FILE: &str = "trash.json";

/// Locations of the two data files. Built once from the CLI flags and
/// passed into the store at construction, so tests can point a store at a
/// temporary directory.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub tasks: PathBuf,
    pub trash: PathBuf,
}

impl StorePaths {
    /// Both files under `dir` with their conventional names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            tasks: dir.join(TASKS_FILE),
            trash: dir.join(TRASH_FILE),
        }
    }
}
