//! Helpers shared by the task commands: the empty-list guard and index selection.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::error_fmt::AppError;
use crate::render;
use crate::ListContext;

/// Typed at any prompt to abandon the command in progress.
pub const CANCEL_TOKEN: &str = "x";

/// Outcome of asking the user for a task index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Index(usize),
    Cancelled,
}

/// Print the "no tasks" notice when the list is empty.
///
/// Returns true if the notice was printed and the caller should stop.
pub fn report_empty<R: BufRead, W: Write>(
    ctx: &ListContext,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    if !ctx.tasks().is_empty() {
        return Ok(false);
    }
    console.print(&render::empty_notice(ctx.settings().show_tips))?;
    Ok(true)
}

/// Re-partition the list and print the preview. The list must not be empty.
pub fn show_preview<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let limit = ctx.settings().preview_limit;
    let show_tips = ctx.settings().show_tips;
    let output = render::preview(ctx.tasks_mut().partition(), limit, show_tips);
    console.print(&output)
}

/// Ask for a task index until a valid one is entered or the user cancels.
///
/// Every attempt shows the preview followed by `message`. Non-numeric input,
/// negative numbers and numbers past the end of the list are rejected with a
/// hint listing the accepted indices. End of input counts as cancellation.
///
/// The returned index is a listing index (uncompleted first, as `a` prints
/// them). The preview shown above the prompt numbers tasks in stored order
/// (completed first), so once any task is complete the two numberings differ.
pub fn select_index<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
    message: &str,
) -> Result<Selection, AppError> {
    if report_empty(ctx, console)? {
        return Ok(Selection::Cancelled);
    }

    loop {
        show_preview(ctx, console)?;

        let Some(input) = console.prompt(message)? else {
            return Ok(Selection::Cancelled);
        };
        if input == CANCEL_TOKEN {
            return Ok(Selection::Cancelled);
        }

        let valid = ctx.tasks().valid_indices();
        match input.parse::<usize>() {
            Ok(index) if valid.contains(&index) => return Ok(Selection::Index(index)),
            _ => {
                debug!(input = %input, "rejected task index");
                console.print(&render::invalid_index(&input, valid))?;
            }
        }
    }
}
