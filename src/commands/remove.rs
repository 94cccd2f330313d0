//! Remove command - delete a task from the list.

use std::io::{BufRead, Write};

use tracing::debug;

use super::shared::{select_index, Selection};
use crate::console::Console;
use crate::error_fmt::AppError;
use crate::{render, ListContext};

const PROMPT: &str = "Please Enter the task number you want to remove (Enter [x] to cancel): ";

/// Remove the selected task.
pub fn remove<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let Selection::Index(index) = select_index(ctx, console, PROMPT)? else {
        return Ok(());
    };

    let removed = ctx.tasks_mut().remove(index)?;
    debug!(index, label = %removed.label, "task removed");

    console.print(&render::removed(index))
}
