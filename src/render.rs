//! Text rendering for every view the loop prints.
//!
//! All functions return the finished text, newlines included; the caller
//! decides where it goes.

use std::ops::Range;

use owo_colors::OwoColorize;

use crate::context::{Command, Partition, Task};

pub const TITLE_RULE: &str = "====================";
pub const SECTION_RULE: &str = "--------------------";
pub const APP_TITLE: &str = "Welcome to GO List";
pub const TODO_TITLE: &str = "To Do";
pub const COMPLETED_TITLE: &str = "Completed Tasks";

pub fn greeting(has_tasks: bool, show_tips: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", TITLE_RULE));
    out.push_str(&format!("{}\n", APP_TITLE.bold()));
    out.push_str(&format!("{}\n", TITLE_RULE));
    out.push('\n');
    if show_tips {
        out.push_str(&tip(has_tasks));
    }
    out
}

/// Short reminder of the most useful commands.
pub fn tip(has_tasks: bool) -> String {
    let mut out = String::new();
    if has_tasks {
        out.push_str(&help_line(Command::ShowTasks));
    }
    out.push_str(&help_line(Command::ShowCommands));
    out.push_str(&help_line(Command::AddTask));
    out
}

pub fn help() -> String {
    let mut out: String = Command::ALL.into_iter().map(help_line).collect();
    out.push('\n');
    out
}

fn help_line(command: Command) -> String {
    format!(
        "Enter [{}] to {}.\n",
        command.token().cyan(),
        command.description()
    )
}

pub fn empty_notice(show_tips: bool) -> String {
    let mut out = String::from("You don't have any tasks!\n");
    if show_tips {
        out.push_str(&tip(false));
    }
    out.push('\n');
    out
}

fn section_header(title: &str) -> String {
    format!("{}\n{}\n{}\n", SECTION_RULE, title.bold(), SECTION_RULE)
}

fn task_line(index: usize, task: &Task) -> String {
    format!("[{}] {}\n", index.cyan(), task.label)
}

/// Quick glance at the first `limit` tasks in stored order, plus counts.
pub fn preview(partition: Partition<'_>, limit: usize, show_tips: bool) -> String {
    let mut out = section_header(TODO_TITLE);

    for (index, task) in partition
        .completed
        .iter()
        .chain(partition.uncompleted)
        .enumerate()
        .take(limit)
    {
        out.push_str(&task_line(index, task));
    }

    if !partition.uncompleted.is_empty() {
        out.push_str(&format!(
            "You have {} more tasks to complete. ",
            partition.uncompleted.len().yellow()
        ));
    }
    if !partition.completed.is_empty() {
        out.push_str(&format!(
            "You have {} complete tasks. ",
            partition.completed.len().green()
        ));
    }
    out.push('\n');
    out.push_str(&format!("{}\n", SECTION_RULE));
    out.push('\n');

    if show_tips {
        out.push_str(&tip(true));
    }
    out
}

/// Every task, uncompleted first, numbered the way index prompts expect.
pub fn full_listing(partition: Partition<'_>) -> String {
    let mut out = String::new();
    let todo = partition.uncompleted.len();

    if todo > 0 {
        out.push_str(&section_header(TODO_TITLE));
    }
    for (index, task) in partition.listing().take(todo) {
        out.push_str(&task_line(index, task));
    }
    out.push('\n');

    if !partition.completed.is_empty() {
        out.push_str(&section_header(COMPLETED_TITLE));
    }
    for (index, task) in partition.listing().skip(todo) {
        out.push_str(&task_line(index, task));
    }
    out.push('\n');

    out
}

pub fn invalid_command(token: &str) -> String {
    format!("[{}] is not a valid command!\n\n", token.red())
}

/// Rejection of an index entry, with the indices that would have been accepted.
pub fn invalid_index(raw: &str, valid: Range<usize>) -> String {
    let choices: Vec<String> = valid.map(|i| i.to_string()).collect();
    format!(
        "Selected task [{}] is not valid\nPlease select {}.\n",
        raw.red(),
        choices.join(" or ")
    )
}

pub fn task_added() -> String {
    format!("{}\n\n", "New task added.".green())
}

pub fn marked_complete(index: usize) -> String {
    format!("{}\n", format!("Task [{}] marked as completed!", index).green())
}

pub fn marked_not_complete(index: usize) -> String {
    format!("{}\n", format!("Task [{}] marked as not completed!", index).green())
}

pub fn removed(index: usize) -> String {
    format!("{}\n", format!("Task [{}] removed!", index).green())
}

pub fn farewell() -> String {
    "GoList will shut down.\nGoodbye...\n".to_string()
}
