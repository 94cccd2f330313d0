//! Mark commands - set or clear the completion flag of a task.

use std::io::{BufRead, Write};

use tracing::debug;

use super::shared::{select_index, Selection};
use crate::console::Console;
use crate::error_fmt::AppError;
use crate::{render, ListContext};

const COMPLETE_PROMPT: &str =
    "Please Enter the task number you want to mark as complete (Enter [x] to cancel): ";
const NOT_COMPLETE_PROMPT: &str =
    "Please Enter the task number you want to mark as not complete (Enter [x] to cancel): ";

/// Mark the selected task as complete.
pub fn mark_complete<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    set_completion(ctx, console, true)
}

/// Mark the selected task as not complete.
pub fn mark_not_complete<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    set_completion(ctx, console, false)
}

fn set_completion<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
    complete: bool,
) -> Result<(), AppError> {
    let message = if complete {
        COMPLETE_PROMPT
    } else {
        NOT_COMPLETE_PROMPT
    };

    let Selection::Index(index) = select_index(ctx, console, message)? else {
        return Ok(());
    };

    ctx.tasks_mut().set_complete(index, complete)?;
    debug!(index, complete, "completion updated");

    // Confirm with the index the user typed, not the task's new position
    if complete {
        console.print(&render::marked_complete(index))
    } else {
        console.print(&render::marked_not_complete(index))
    }
}
