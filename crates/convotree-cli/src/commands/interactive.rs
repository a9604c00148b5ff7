//! Interactive mode implementation

use super::parser::Command;
use crate::console::CliConsole;
use convotree_core::{Conversation, ConvoError, TreeError};
use std::io::{self, BufRead, Write};

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

const HELP: &[(&str, &str)] = &[
    ("chat [message]", "send a message on the current branch"),
    ("branch <name> [checkpoint-id]", "create a branch (current head when no id)"),
    ("switch <name>", "make another branch active"),
    ("list", "show branches and checkpoints"),
    ("history [branch]", "replay the current or named branch"),
    ("help", "show this help"),
    ("quit", "leave"),
];

/// Read commands from `input` until `quit` or end of input
///
/// Tree and generator errors are reported and the loop continues; only
/// I/O failures end it early.
pub async fn run<R: BufRead, W: Write>(
    conversation: &Conversation,
    input: R,
    out: W,
) -> io::Result<()> {
    let mut repl = Repl {
        conversation,
        console: CliConsole::new(out),
        lines: input.lines(),
    };
    repl.console.info(&format!(
        "Replies from the {} generator. Type 'help' for commands, 'quit' to exit.",
        conversation.generator_name()
    ))?;

    loop {
        let branch = conversation.tree().current_branch_name().await;
        repl.console.prompt(&format!("[{branch}] >"))?;

        let Some(line) = repl.next_line()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                repl.console.error(&e.to_string())?;
                continue;
            }
        };

        match repl.execute(command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(CommandError::Convo(e)) => repl.console.error(&format!("Error: {e}"))?,
            Err(CommandError::Io(e)) => return Err(e),
        }
    }

    Ok(())
}

#[derive(Debug)]
enum CommandError {
    Convo(ConvoError),
    Io(io::Error),
}

impl From<ConvoError> for CommandError {
    fn from(e: ConvoError) -> Self {
        Self::Convo(e)
    }
}

impl From<TreeError> for CommandError {
    fn from(e: TreeError) -> Self {
        Self::Convo(e.into())
    }
}

fn io_err(e: io::Error) -> CommandError {
    CommandError::Io(e)
}

struct Repl<'a, R, W: Write> {
    conversation: &'a Conversation,
    console: CliConsole<W>,
    lines: io::Lines<R>,
}

impl<R: BufRead, W: Write> Repl<'_, R, W> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next().transpose()
    }

    async fn execute(&mut self, command: Command) -> Result<Flow, CommandError> {
        let conversation = self.conversation;
        let tree = conversation.tree();

        match command {
            Command::Chat(message) => {
                let message = match message {
                    Some(message) => message,
                    None => {
                        self.console.prompt("You:").map_err(io_err)?;
                        match self.next_line().map_err(io_err)? {
                            Some(line) => line,
                            None => return Ok(Flow::Quit),
                        }
                    }
                };

                let turn = conversation.send(message).await?;
                self.console
                    .exchange(&turn.exchange.user_input, &turn.exchange.ai_response)
                    .map_err(io_err)?;
                self.console
                    .success(&format!("New checkpoint created: {}", turn.checkpoint_id))
                    .map_err(io_err)?;
            }
            Command::Branch { name, from } => {
                let message = match from {
                    Some(id) => {
                        tree.create_branch(&name, &id).await?;
                        format!("Created branch '{name}' from checkpoint '{id}'")
                    }
                    None => match tree.fork_current(&name).await? {
                        Some(head) => format!("Created branch '{name}' from checkpoint '{head}'"),
                        None => format!("Created empty branch '{name}'"),
                    },
                };
                self.console.success(&message).map_err(io_err)?;
            }
            Command::Switch(name) => {
                tree.switch_branch(&name).await?;
                self.console
                    .success(&format!("Switched to branch: {name}"))
                    .map_err(io_err)?;
            }
            Command::List => {
                let current = tree.current_branch_name().await;
                self.console.header("Available branches:").map_err(io_err)?;
                for branch in tree.list_branches().await {
                    let marker = if branch.name == current { "*" } else { " " };
                    let head = branch
                        .head
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "(empty)".to_string());
                    self.console
                        .line(format!("{marker} {} -> {head}", branch.name))
                        .map_err(io_err)?;
                }

                self.console.header("Available checkpoints:").map_err(io_err)?;
                for id in tree.list_checkpoint_ids().await {
                    self.console.line(format!("  {id}")).map_err(io_err)?;
                }
            }
            Command::History(branch) => {
                let (name, history) = match branch {
                    Some(name) => {
                        let history = tree.history_of(&name).await?;
                        (name, history)
                    }
                    None => (tree.current_branch_name().await, tree.get_history().await?),
                };

                self.console
                    .header(&format!("Conversation history ({name}):"))
                    .map_err(io_err)?;
                if history.is_empty() {
                    self.console.line("  (no exchanges yet)").map_err(io_err)?;
                }
                for exchange in &history {
                    self.console
                        .exchange(&exchange.user_input, &exchange.ai_response)
                        .map_err(io_err)?;
                }
            }
            Command::Help => {
                self.console.header("Commands:").map_err(io_err)?;
                for (usage, description) in HELP {
                    self.console
                        .line(format!("  {usage:<32} {description}"))
                        .map_err(io_err)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}
