//! Core data model for the interactive list.
//!
//! This module contains:
//! - `Task` - A single to-do entry
//! - `TaskList` - Ordered store with the completed/uncompleted partition
//! - `Command` - The fixed table of command tokens
//! - `Settings` - Optional YAML settings
//! - `ListContext` - State owned by the command loop

mod command;
mod list;
mod settings;
mod task;

pub use command::Command;
pub use list::{ListError, Partition, TaskList};
pub use settings::{Settings, SettingsError, DEFAULT_SETTINGS_FILE};
pub use task::Task;

/// Application state shared by the command loop and every handler.
///
/// Created empty at startup and dropped at exit. Handlers receive it by
/// mutable reference; there is no other copy of the task list.
#[derive(Debug, Default)]
pub struct ListContext {
    tasks: TaskList,
    settings: Settings,
}

impl ListContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            tasks: TaskList::new(),
            settings,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskList {
        &mut self.tasks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
