//! Preview command - a quick glance at the first few tasks.

use std::io::{BufRead, Write};

use super::shared::{report_empty, show_preview};
use crate::console::Console;
use crate::error_fmt::AppError;
use crate::ListContext;

pub fn preview<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if report_empty(ctx, console)? {
        return Ok(());
    }
    show_preview(ctx, console)
}
