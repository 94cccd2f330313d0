/// Commands understood by the interactive loop.
///
/// Tokens are matched exactly and case-sensitively against the trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddTask,
    ShowCommands,
    ShowTasks,
    Exit,
    Preview,
    MarkComplete,
    MarkNotComplete,
    Remove,
}

impl Command {
    /// Every command, in the order the help text lists them.
    pub const ALL: [Command; 8] = [
        Command::ShowTasks,
        Command::Preview,
        Command::AddTask,
        Command::MarkComplete,
        Command::MarkNotComplete,
        Command::Remove,
        Command::ShowCommands,
        Command::Exit,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "t" => Some(Command::AddTask),
            "c" => Some(Command::ShowCommands),
            "a" => Some(Command::ShowTasks),
            "e" => Some(Command::Exit),
            "p" => Some(Command::Preview),
            "m" => Some(Command::MarkComplete),
            "n" => Some(Command::MarkNotComplete),
            "r" => Some(Command::Remove),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Command::AddTask => "t",
            Command::ShowCommands => "c",
            Command::ShowTasks => "a",
            Command::Exit => "e",
            Command::Preview => "p",
            Command::MarkComplete => "m",
            Command::MarkNotComplete => "n",
            Command::Remove => "r",
        }
    }

    /// Short description used in the help text.
    pub fn description(self) -> &'static str {
        match self {
            Command::AddTask => "add new task",
            Command::ShowCommands => "show commands",
            Command::ShowTasks => "show all tasks",
            Command::Exit => "exit program",
            Command::Preview => "preview tasks",
            Command::MarkComplete => "mark task as complete",
            Command::MarkNotComplete => "mark task as not complete",
            Command::Remove => "remove a task",
        }
    }
}
