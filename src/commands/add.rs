//! Add command - append a new task to the list.

use std::io::{BufRead, Write};

use tracing::debug;

use super::shared::{show_preview, CANCEL_TOKEN};
use crate::console::Console;
use crate::error_fmt::AppError;
use crate::{render, ListContext, Task};

const PROMPT: &str = "What do you need to do (Enter [x] to cancel)? ";

/// Read a label and append it as a new, uncompleted task.
///
/// The task goes to the end of the stored order; the list is only
/// re-partitioned by the preview that follows.
pub fn add<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let Some(label) = console.prompt(PROMPT)? else {
        return Ok(());
    };
    if label == CANCEL_TOKEN {
        debug!("task creation cancelled");
        return Ok(());
    }

    let index = ctx.tasks_mut().push(Task::new(label));
    debug!(index, "task added");

    console.print(&render::task_added())?;
    show_preview(ctx, console)
}
