//! The interactive read/dispatch loop.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::commands;
use crate::console::Console;
use crate::error_fmt::AppError;
use crate::{render, Command, ListContext};

const COMMAND_PROMPT: &str = "ENTER YOUR COMMAND: ";

/// Greet the user and process commands until `e` or end of input.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut ListContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let greeting = render::greeting(!ctx.tasks().is_empty(), ctx.settings().show_tips);
    console.print(&greeting)?;

    loop {
        let Some(token) = console.prompt(COMMAND_PROMPT)? else {
            debug!("input closed");
            console.print("\n")?;
            return commands::dispatch(Command::Exit, ctx, console);
        };

        let Some(command) = Command::from_token(&token) else {
            debug!(token = %token, "unknown command");
            console.print(&render::invalid_command(&token))?;
            continue;
        };

        debug!(?command, "dispatching");
        commands::dispatch(command, ctx, console)?;

        if command == Command::Exit {
            return Ok(());
        }
    }
}
