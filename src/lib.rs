// Pattern Lab - Library exports for tests and the demo binary

pub mod command;
pub mod config;
pub mod decorator;
pub mod facade;
pub mod iterator;
pub mod messaging;
pub mod observer;
pub mod proxy;
pub mod scenarios;
pub mod state;
pub mod strategy;
pub mod template;

// Re-export commonly used types for convenience
pub use command::{
    CommandError, CommandManager, CommandResult, OrderService, OrderStatus, RemoteControl,
    Reversal, UndoOutcome, UndoableCommand,
};
pub use config::{ConfigError, LabConfig};
pub use facade::HomeTheaterFacade;
pub use messaging::{Narrator, Notification, NotificationCategory, NotificationLevel};
pub use observer::{Observer, Product, SubscriberId, User};
pub use proxy::{BalanceView, BankAccount, BankAccountProxy, RealBankAccount, Withdrawal};
pub use state::{
    ConnectionEvent, ConnectionState, MusicPlayer, PlayerState, StateContext, TcpConnection,
    TransitionTable,
};
pub use strategy::{PaymentProcessor, PaymentStrategy};
pub use template::{CaffeineBeverage, DataExporter, ExportError};
