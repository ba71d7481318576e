use std::fs;
use std::path::Path;

use crate::error::TidytaskError;
use crate::models::Task;

/// Load a task list from `path`.
///
/// A missing file is an empty list. A file that exists but does not parse
/// as an array of tasks resets to empty with a one-line warning on stderr;
/// the session continues and the next save overwrites the file.
pub fn load(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => tasks,
            Err(_) => {
                eprintln!(
                    "Warning: could not parse {}. Starting with an empty list.",
                    path.display()
                );
                Vec::new()
            }
        },
        Err(e) => {
            eprintln!(
                "Warning: could not read {} ({e}). Starting with an empty list.",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Write the full list to `path`, replacing prior content. Pretty-printed
/// so the file stays hand-editable.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), TidytaskError> {
    let json = serde_json::to_string_pretty(tasks).map_err(|e| TidytaskError::io(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("tasks.json")).is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let tasks = vec![
            Task {
                description: "buy milk".into(),
                completed: true,
            },
            Task::new("walk dog"),
        ];
        save(&path, &tasks).unwrap();
        assert_eq!(load(&path), tasks);
    }

    #[test]
    fn test_malformed_file_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_non_array_content_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"{"description": "lone object", "completed": false}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_object_missing_field_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"[{"description": "no flag"}]"#).unwrap();
        assert!(load(&path).is_empty());
    }
}
