// UndoableCommand trait definition

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution
///
/// These are contract violations. A receiver refusing an action (e.g. shipping
/// an order that was never placed) is not an error; see [`Reversal`] and the
/// receiver's own outcome types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Command execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
    /// Undo operation failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),
    /// Invalid state for this operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// What an undo actually did to the receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reversal {
    /// The receiver is back to its pre-execute state
    Reverted,
    /// The forward action never took effect, so there was nothing to reverse.
    /// Carries the user-visible explanation.
    NotReversible(String),
}

impl Reversal {
    pub fn is_reverted(&self) -> bool {
        matches!(self, Reversal::Reverted)
    }
}

/// Trait for commands that support undo/redo against a receiver `R`
///
/// Commands capture whatever they need to reverse themselves during
/// `execute()`, before attempting the action.
///
/// # Example
/// ```
/// use pattern_lab::command::trait_def::{CommandError, CommandResult, Reversal, UndoableCommand};
///
/// struct Counter(i32);
///
/// struct AddCommand {
///     amount: i32,
///     old_value: Option<i32>,
/// }
///
/// impl UndoableCommand<Counter> for AddCommand {
///     fn execute(&mut self, counter: &mut Counter) -> CommandResult<()> {
///         self.old_value = Some(counter.0);
///         counter.0 += self.amount;
///         Ok(())
///     }
///
///     fn undo(&mut self, counter: &mut Counter) -> CommandResult<Reversal> {
///         let old = self
///             .old_value
///             .take()
///             .ok_or_else(|| CommandError::InvalidState("Add was never executed".into()))?;
///         counter.0 = old;
///         Ok(Reversal::Reverted)
///     }
///
///     fn description(&self) -> String {
///         format!("Add {}", self.amount)
///     }
/// }
///
/// let mut counter = Counter(1);
/// let mut add = AddCommand { amount: 4, old_value: None };
/// add.execute(&mut counter).unwrap();
/// assert_eq!(counter.0, 5);
/// assert_eq!(add.undo(&mut counter).unwrap(), Reversal::Reverted);
/// assert_eq!(counter.0, 1);
/// ```
pub trait UndoableCommand<R>: Send {
    /// Execute the command
    ///
    /// Should store the previous receiver state internally for undo capability.
    fn execute(&mut self, receiver: &mut R) -> CommandResult<()>;

    /// Undo the command
    ///
    /// Returns `CommandError::InvalidState` when called before `execute()`.
    fn undo(&mut self, receiver: &mut R) -> CommandResult<Reversal>;

    /// Get a human-readable description of the command
    fn description(&self) -> String;
}
