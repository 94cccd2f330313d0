//! List command - displays all tasks, uncompleted first.

use std::io::{BufRead, Write};

use super::shared::report_empty;
use crate::console::Console;
use crate::error_fmt::AppError;
use crate::{render, ListContext};

/// List all tasks with the numbering the index prompts use.
pub fn list<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if report_empty(ctx, console)? {
        return Ok(());
    }

    let output = render::full_listing(ctx.tasks_mut().partition());
    console.print(&output)
}
