//! Menu commands.

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateRepository,
    DeleteRepository,
    SetVisibility,
    Push,
    ClonePublic,
    Exit,
    Pull,
    Branches,
    Status,
    Log,
}

impl Command {
    /// Menu key used to select the command.
    pub fn key(self) -> char {
        match self {
            Self::CreateRepository => '1',
            Self::DeleteRepository => '2',
            Self::SetVisibility => '3',
            Self::Push => '4',
            Self::ClonePublic => '5',
            Self::Exit => '6',
            Self::Pull => '7',
            Self::Branches => '8',
            Self::Status => '9',
            Self::Log => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateRepository => "Create Repository",
            Self::DeleteRepository => "Delete Repository",
            Self::SetVisibility => "Make Repository Private/Public",
            Self::Push => "Push to Repository",
            Self::ClonePublic => "Clone Public Repository",
            Self::Exit => "Exit",
            Self::Pull => "Pull Latest Changes",
            Self::Branches => "Branch Management",
            Self::Status => "Show Status",
            Self::Log => "Show Commit History",
        }
    }

    /// Whether the command is offered given where the session currently is.
    pub fn is_available(self, inside_repo: bool) -> bool {
        match self {
            Self::CreateRepository | Self::ClonePublic => !inside_repo,
            Self::Push | Self::Pull | Self::Branches | Self::Status | Self::Log => inside_repo,
            Self::DeleteRepository | Self::SetVisibility | Self::Exit => true,
        }
    }

    /// Commands in menu order.
    pub fn menu(inside_repo: bool) -> Vec<Command> {
        [
            Self::CreateRepository,
            Self::ClonePublic,
            Self::Push,
            Self::Pull,
            Self::Branches,
            Self::Status,
            Self::Log,
            Self::DeleteRepository,
            Self::SetVisibility,
            Self::Exit,
        ]
        .into_iter()
        .filter(|c| c.is_available(inside_repo))
        .collect()
    }

    /// Parse a menu choice. Unknown keys and hidden commands yield `None`.
    pub fn parse(choice: &str, inside_repo: bool) -> Option<Command> {
        let command = match choice.trim() {
            "1" => Self::CreateRepository,
            "2" => Self::DeleteRepository,
            "3" => Self::SetVisibility,
            "4" => Self::Push,
            "5" => Self::ClonePublic,
            "6" => Self::Exit,
            "7" => Self::Pull,
            "8" => Self::Branches,
            "9" => Self::Status,
            "0" => Self::Log,
            _ => return None,
        };
        command.is_available(inside_repo).then_some(command)
    }
}

/// A branch management submenu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCommand {
    Create,
    List,
    Switch,
}

impl BranchCommand {
    pub const ALL: [BranchCommand; 3] = [Self::Create, Self::List, Self::Switch];

    pub fn key(self) -> char {
        match self {
            Self::Create => 'a',
            Self::List => 'b',
            Self::Switch => 'c',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create new branch",
            Self::List => "List branches",
            Self::Switch => "Switch branch",
        }
    }

    pub fn parse(choice: &str) -> Option<BranchCommand> {
        match choice.trim().to_lowercase().as_str() {
            "a" => Some(Self::Create),
            "b" => Some(Self::List),
            "c" => Some(Self::Switch),
            _ => None,
        }
    }
}
