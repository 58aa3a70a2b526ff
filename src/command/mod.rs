// Command Pattern with undo/redo
//
// Architecture:
// - UndoableCommand<R> trait: execute(), undo(), description() against a receiver R
// - CommandManager<R>: the invoker, owns the undo/redo history
// - OrderService + order commands: snapshot-before-attempt receiver/commands
// - remote: slot-based remote control over home devices with single-step undo

pub mod commands;
pub mod manager;
pub mod orders;
pub mod remote;
pub mod trait_def;

pub use commands::{CancelOrderCommand, PlaceOrderCommand, ShipOrderCommand};
pub use manager::{CommandManager, RedoOutcome, UndoOutcome};
pub use orders::{OrderOutcome, OrderService, OrderStatus};
pub use remote::{Home, RemoteControl};
pub use trait_def::{CommandError, CommandResult, Reversal, UndoableCommand};
