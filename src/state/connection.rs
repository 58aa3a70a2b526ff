// Connection-style state machine: Closed -> Listening -> Established

use super::context::{StateContext, Step, Transition, TransitionTable};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Closed,
    Listening,
    Established,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Closed => "Closed",
            ConnectionState::Listening => "Listen",
            ConnectionState::Established => "Established",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    Open,
    Close,
    Acknowledge,
}

impl ConnectionEvent {
    pub const ALL: [ConnectionEvent; 3] = [
        ConnectionEvent::Open,
        ConnectionEvent::Close,
        ConnectionEvent::Acknowledge,
    ];
}

/// Transition table for a TCP-like connection
pub struct ConnectionMachine;

impl TransitionTable for ConnectionMachine {
    type State = ConnectionState;
    type Event = ConnectionEvent;
    const INITIAL: ConnectionState = ConnectionState::Closed;

    fn step(state: ConnectionState, event: ConnectionEvent) -> Step<ConnectionState> {
        use ConnectionEvent::*;
        use ConnectionState::*;

        match (state, event) {
            (Closed, Open) => Step::to(Listening, "Opening connection: moving to Listen state"),
            (Closed, Close) => Step::to(Closed, "Already closed"),
            (Closed, Acknowledge) => Step::to(Closed, "No connection to acknowledge"),

            (Listening, Open) => Step::to(Listening, "Already listening"),
            (Listening, Close) => Step::to(Closed, "Closing connection: moving to Closed state"),
            (Listening, Acknowledge) => Step::to(
                Established,
                "Connection established: moving to Established state",
            ),

            (Established, Open) => Step::to(Established, "Connection already established"),
            (Established, Close) => {
                Step::to(Closed, "Closing connection: moving to Closed state")
            }
            (Established, Acknowledge) => Step::to(Established, "Already acknowledged"),
        }
    }
}

/// TCP-like connection context
pub type TcpConnection = StateContext<ConnectionMachine>;

impl StateContext<ConnectionMachine> {
    pub fn open(&mut self) -> Transition<ConnectionState, ConnectionEvent> {
        self.handle(ConnectionEvent::Open)
    }

    pub fn close(&mut self) -> Transition<ConnectionState, ConnectionEvent> {
        self.handle(ConnectionEvent::Close)
    }

    pub fn acknowledge(&mut self) -> Transition<ConnectionState, ConnectionEvent> {
        self.handle(ConnectionEvent::Acknowledge)
    }

    pub fn is_established(&self) -> bool {
        self.state() == ConnectionState::Established
    }
}
