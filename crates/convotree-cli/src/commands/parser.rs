//! Command line parsing for the interactive loop

use convotree_core::CheckpointId;
use thiserror::Error;

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a message; `None` asks for it on the next line
    Chat(Option<String>),
    /// Create a branch from a checkpoint, or from the current head
    Branch {
        name: String,
        from: Option<CheckpointId>,
    },
    /// Change the active branch
    Switch(String),
    /// Show branches and checkpoints
    List,
    /// Replay the current or named branch
    History(Option<String>),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Invalid command: {0}")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse a line; the keyword is case-insensitive, arguments are kept verbatim
    pub fn parse(input: &str) -> Result<Self, CommandParseError> {
        let input = input.trim();
        let (keyword, rest) = match input.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (input, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match keyword.to_lowercase().as_str() {
            "chat" => Ok(Self::Chat((!rest.is_empty()).then(|| rest.to_string()))),
            "branch" => match args.as_slice() {
                [name] => Ok(Self::Branch {
                    name: name.to_string(),
                    from: None,
                }),
                [name, from] => Ok(Self::Branch {
                    name: name.to_string(),
                    from: Some(CheckpointId::from(*from)),
                }),
                _ => Err(CommandParseError::Usage("branch <name> [checkpoint-id]")),
            },
            "switch" => match args.as_slice() {
                [name] => Ok(Self::Switch(name.to_string())),
                _ => Err(CommandParseError::Usage("switch <name>")),
            },
            "list" => Ok(Self::List),
            "history" => match args.as_slice() {
                [] => Ok(Self::History(None)),
                [name] => Ok(Self::History(Some(name.to_string()))),
                _ => Err(CommandParseError::Usage("history [branch]")),
            },
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandParseError::Unknown(input.to_string())),
        }
    }
}
