// State Pattern - contexts that delegate every event to their current state
//
// A machine is described by a `TransitionTable`: a pure, total function from
// (state, event) to the next state plus the message describing what happened.
// `StateContext` owns the current state and narrates every step.

pub mod connection;
pub mod context;
pub mod player;

pub use connection::{ConnectionEvent, ConnectionMachine, ConnectionState, TcpConnection};
pub use context::{StateContext, Step, Transition, TransitionTable};
pub use player::{MusicPlayer, PlayerEvent, PlayerMachine, PlayerState};
