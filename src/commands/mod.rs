//! Command handlers.
//!
//! Each command is implemented in its own submodule and operates on the
//! `ListContext` owned by the loop.

mod add;
mod list;
mod mark;
mod preview;
mod remove;
pub mod shared;

use std::io::{BufRead, Write};

pub use add::add;
pub use list::list;
pub use mark::{mark_complete, mark_not_complete};
pub use preview::preview;
pub use remove::remove;

use crate::console::Console;
use crate::error_fmt::AppError;
use crate::{render, Command, ListContext};

/// Run the handler for `command`.
pub fn dispatch<R: BufRead, W: Write>(
    command: Command,
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    match command {
        Command::AddTask => add(ctx, console),
        Command::ShowCommands => console.print(&render::help()),
        Command::ShowTasks => list(ctx, console),
        Command::Exit => console.print(&render::farewell()),
        Command::Preview => preview(ctx, console),
        Command::MarkComplete => mark_complete(ctx, console),
        Command::MarkNotComplete => mark_not_complete(ctx, console),
        Command::Remove => remove(ctx, console),
    }
}
