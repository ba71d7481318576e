pub mod codec;
pub mod paths;

pub use paths::StorePaths;

use crate::error::TidytaskError;
use crate::models::Task;

/// Owner of the active list and the trash, and of their persistence.
///
/// Every mutating operation validates first, applies the change in memory,
/// then rewrites the affected file(s) in full. Validation failures leave
/// both lists untouched; no operation applies partially.
pub struct Store {
    paths: StorePaths,
    tasks: Vec<Task>,
    trash: Vec<Task>,
}

impl Store {
    /// Load both lists from disk. Missing or malformed files come back as
    /// empty lists (see [`codec::load`]), never as errors.
    pub fn open(paths: StorePaths) -> Self {
        let tasks = codec::load(&paths.tasks);
        let trash = codec::load(&paths.trash);
        Self {
            paths,
            tasks,
            trash,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn trash(&self) -> &[Task] {
        &self.trash
    }

    /// Append a new incomplete task. The description is trimmed; blank
    /// input is rejected before anything changes.
    pub fn add(&mut self, description: &str) -> Result<&Task, TidytaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TidytaskError::empty_input());
        }
        self.tasks.push(Task::new(description));
        self.persist_tasks()?;
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Mark the task at the 1-based `index` complete.
    pub fn complete(&mut self, index: usize) -> Result<&Task, TidytaskError> {
        let pos = self.position(index)?;
        self.tasks[pos].completed = true;
        self.persist_tasks()?;
        Ok(&self.tasks[pos])
    }

    /// Clear the completed flag at the 1-based `index`. Reached through the
    /// undo menu only.
    pub fn uncomplete(&mut self, index: usize) -> Result<&Task, TidytaskError> {
        let pos = self.position(index)?;
        self.tasks[pos].completed = false;
        self.persist_tasks()?;
        Ok(&self.tasks[pos])
    }

    /// Move the task at `index` to the end of the trash. The task object
    /// moves verbatim, completed flag included.
    pub fn delete(&mut self, index: usize) -> Result<&Task, TidytaskError> {
        let pos = self.position(index)?;
        let task = self.tasks.remove(pos);
        self.trash.push(task);
        self.persist_tasks()?;
        self.persist_trash()?;
        Ok(&self.trash[self.trash.len() - 1])
    }

    /// Move the oldest trash entry back to the end of the active list.
    /// Trash is FIFO by deletion time: first deleted, first restored.
    pub fn restore(&mut self) -> Result<&Task, TidytaskError> {
        if self.trash.is_empty() {
            return Err(TidytaskError::trash_empty());
        }
        let task = self.trash.remove(0);
        self.tasks.push(task);
        self.persist_trash()?;
        self.persist_tasks()?;
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Move the task at `index` to the top of the list.
    pub fn prioritize(&mut self, index: usize) -> Result<&Task, TidytaskError> {
        let pos = self.position(index)?;
        let task = self.tasks.remove(pos);
        self.tasks.insert(0, task);
        self.persist_tasks()?;
        Ok(&self.tasks[0])
    }

    /// Replace the description at `index` and reset the task to incomplete.
    /// Blank input is rejected before the index is checked.
    pub fn edit(&mut self, index: usize, new_description: &str) -> Result<&Task, TidytaskError> {
        let new_description = new_description.trim();
        if new_description.is_empty() {
            return Err(TidytaskError::empty_input());
        }
        let pos = self.position(index)?;
        let task = &mut self.tasks[pos];
        task.description = new_description.to_string();
        task.completed = false;
        self.persist_tasks()?;
        Ok(&self.tasks[pos])
    }

    /// Incomplete tasks in original order, keeping their original 1-based
    /// positions (no renumbering).
    pub fn filter_incomplete(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.completed)
            .map(|(i, t)| (i + 1, t))
    }

    /// Tasks whose description contains `needle` as a literal,
    /// case-sensitive substring, in original order with original positions.
    /// An empty needle matches every task.
    pub fn search<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = (usize, &'a Task)> + 'a {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.description.contains(needle))
            .map(|(i, t)| (i + 1, t))
    }

    fn position(&self, index: usize) -> Result<usize, TidytaskError> {
        if (1..=self.tasks.len()).contains(&index) {
            Ok(index - 1)
        } else {
            Err(TidytaskError::out_of_range())
        }
    }

    fn persist_tasks(&self) -> Result<(), TidytaskError> {
        codec::save(&self.paths.tasks, &self.tasks)
    }

    fn persist_trash(&self) -> Result<(), TidytaskError> {
        codec::save(&self.paths.trash, &self.trash)
    }
}
