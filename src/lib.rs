pub mod commands;
pub mod console;
pub mod context;
pub mod error_fmt;
pub mod logging;
pub mod render;
pub mod repl;

// Re-export commonly used types from context module for convenience
pub use context::{
    Command, ListContext, ListError, Partition, Settings, SettingsError, Task, TaskList,
    DEFAULT_SETTINGS_FILE,
};
