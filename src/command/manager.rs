// CommandManager - Manages undo/redo stacks

use crate::command::trait_def::{CommandResult, Reversal, UndoableCommand};
use crate::messaging::{Narrator, NotificationCategory};
use std::collections::VecDeque;

/// Default maximum number of commands to keep in history
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Result of `CommandManager::undo_last`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A command was popped and its undo ran
    Undone {
        description: String,
        reversal: Reversal,
    },
    /// History was empty; the receiver was not touched
    NothingToUndo,
}

/// Result of `CommandManager::redo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedoOutcome {
    Redone(String),
    NothingToRedo,
}

/// Manages command execution and undo/redo functionality
///
/// The CommandManager maintains two stacks:
/// - Undo stack: Commands that have been executed and can be undone
/// - Redo stack: Commands that have been undone and can be redone
///
/// When a new command is executed:
/// 1. Execute the command
/// 2. Push it onto the undo stack
/// 3. Clear the redo stack (since we're on a new timeline)
///
/// The top of the undo stack is always the most recently executed command
/// that has not been undone.
///
/// # Memory Management
/// The manager limits the number of commands in the undo stack to prevent
/// unbounded memory growth. When the limit is reached, the oldest command
/// is removed.
pub struct CommandManager<R> {
    /// Stack of commands that can be undone (most recent at the back)
    undo_stack: VecDeque<Box<dyn UndoableCommand<R>>>,

    /// Stack of commands that can be redone (most recent at the back)
    redo_stack: VecDeque<Box<dyn UndoableCommand<R>>>,

    /// Maximum number of commands to keep in history
    max_history: usize,

    narrator: Narrator,
}

impl<R> CommandManager<R> {
    /// Create a new CommandManager with default settings
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a new CommandManager with a custom history limit
    pub fn with_capacity(max_history: usize) -> Self {
        Self::with_narrator(max_history, Narrator::new(NotificationCategory::Command))
    }

    pub fn with_narrator(max_history: usize, narrator: Narrator) -> Self {
        let max_history = max_history.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(max_history),
            redo_stack: VecDeque::with_capacity(max_history),
            max_history,
            narrator,
        }
    }

    /// Execute a command and add it to the undo stack
    ///
    /// # Errors
    /// Returns an error if the command execution fails. A failed command is
    /// not recorded.
    pub fn execute_command(
        &mut self,
        mut command: Box<dyn UndoableCommand<R>>,
        receiver: &mut R,
    ) -> CommandResult<()> {
        command.execute(receiver)?;

        tracing::debug!(command = %command.description(), "command recorded");
        self.undo_stack.push_back(command);

        // New timeline
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_history {
            if let Some(dropped) = self.undo_stack.pop_front() {
                tracing::debug!(command = %dropped.description(), "history limit reached, dropping oldest");
            }
        }

        Ok(())
    }

    /// Undo the last command
    ///
    /// An empty history is a no-op, not an error.
    ///
    /// # Errors
    /// Returns an error if the command's undo violates its contract. The
    /// command stays on top of the undo stack.
    pub fn undo_last(&mut self, receiver: &mut R) -> CommandResult<UndoOutcome> {
        let Some(mut command) = self.undo_stack.pop_back() else {
            self.narrator.warning("No commands to undo");
            return Ok(UndoOutcome::NothingToUndo);
        };

        let description = command.description();
        self.narrator.info("Undoing last command...");

        let reversal = match command.undo(receiver) {
            Ok(reversal) => reversal,
            Err(e) => {
                tracing::warn!(command = %description, error = %e, "undo failed, command kept");
                self.undo_stack.push_back(command);
                return Err(e);
            }
        };
        if let Reversal::NotReversible(reason) = &reversal {
            tracing::debug!(command = %description, %reason, "undo had nothing to reverse");
        }

        self.redo_stack.push_back(command);

        Ok(UndoOutcome::Undone {
            description,
            reversal,
        })
    }

    /// Redo the last undone command
    ///
    /// # Errors
    /// Returns an error if re-execution fails. The command stays on top of
    /// the redo stack.
    pub fn redo(&mut self, receiver: &mut R) -> CommandResult<RedoOutcome> {
        let Some(mut command) = self.redo_stack.pop_back() else {
            self.narrator.warning("No commands to redo");
            return Ok(RedoOutcome::NothingToRedo);
        };

        let description = command.description();
        self.narrator.info(format!("Redoing: {}", description));

        if let Err(e) = command.execute(receiver) {
            tracing::warn!(command = %description, error = %e, "redo failed, command kept");
            self.redo_stack.push_back(command);
            return Err(e);
        }
        self.undo_stack.push_back(command);

        Ok(RedoOutcome::Redone(description))
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|cmd| cmd.description())
    }

    /// Get a description of the command that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.back().map(|cmd| cmd.description())
    }

    /// Descriptions of the undo history, oldest first
    pub fn history(&self) -> Vec<String> {
        self.undo_stack.iter().map(|cmd| cmd.description()).collect()
    }

    /// Clear all command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of commands in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut Narrator {
        &mut self.narrator
    }
}

impl<R> Default for CommandManager<R> {
    fn default() -> Self {
        Self::new()
    }
}
