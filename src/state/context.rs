use crate::messaging::{Narrator, NotificationCategory};
use std::fmt::Debug;

/// Outcome of one (state, event) lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<S> {
    pub next: S,
    pub message: &'static str,
}

impl<S> Step<S> {
    pub const fn to(next: S, message: &'static str) -> Self {
        Self { next, message }
    }
}

/// Complete mapping of (state, event) pairs to the resulting step
///
/// `step` must be total: every pair has an answer, even if the answer is to
/// stay put.
pub trait TransitionTable {
    type State: Copy + Eq + Debug;
    type Event: Copy + Eq + Debug;

    /// State a fresh context starts in
    const INITIAL: Self::State;

    fn step(state: Self::State, event: Self::Event) -> Step<Self::State>;
}

/// Record of one handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from: S,
    pub to: S,
    pub event: E,
    pub message: &'static str,
}

impl<S: PartialEq, E> Transition<S, E> {
    /// Whether the event moved the context to a different state
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Context whose behaviour depends on its current state
///
/// The current state is the only mutable field.
pub struct StateContext<T: TransitionTable> {
    current: T::State,
    transitions: usize,
    narrator: Narrator,
}

impl<T: TransitionTable> StateContext<T> {
    pub fn new() -> Self {
        Self::with_narrator(Narrator::new(NotificationCategory::State))
    }

    pub fn with_narrator(narrator: Narrator) -> Self {
        Self {
            current: T::INITIAL,
            transitions: 0,
            narrator,
        }
    }

    pub fn state(&self) -> T::State {
        self.current
    }

    /// Route an event to the current state
    pub fn handle(&mut self, event: T::Event) -> Transition<T::State, T::Event> {
        let from = self.current;
        let step = T::step(from, event);
        let transition = Transition {
            from,
            to: step.next,
            event,
            message: step.message,
        };

        if transition.changed() {
            self.current = step.next;
            self.transitions += 1;
            tracing::debug!(?from, to = ?step.next, ?event, "state transition");
            self.narrator.info(step.message);
        } else {
            self.narrator.warning(step.message);
        }

        transition
    }

    /// Number of events that changed the state
    pub fn transition_count(&self) -> usize {
        self.transitions
    }

    /// Force the context back to its initial state
    pub fn reset(&mut self) {
        self.current = T::INITIAL;
        self.narrator.info(format!("Reset to {:?}", T::INITIAL));
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut Narrator {
        &mut self.narrator
    }
}

impl<T: TransitionTable> Default for StateContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Lamp {
        Dark,
        Lit,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Toggle;

    struct LampMachine;

    impl TransitionTable for LampMachine {
        type State = Lamp;
        type Event = Toggle;
        const INITIAL: Lamp = Lamp::Dark;

        fn step(state: Lamp, _event: Toggle) -> Step<Lamp> {
            match state {
                Lamp::Dark => Step::to(Lamp::Lit, "on"),
                Lamp::Lit => Step::to(Lamp::Dark, "off"),
            }
        }
    }

    #[test]
    fn test_context_starts_in_initial_state() {
        let ctx: StateContext<LampMachine> =
            StateContext::with_narrator(Narrator::silent(NotificationCategory::State));
        assert_eq!(ctx.state(), Lamp::Dark);
        assert_eq!(ctx.transition_count(), 0);
    }

    #[test]
    fn test_handle_records_transition() {
        let mut ctx: StateContext<LampMachine> =
            StateContext::with_narrator(Narrator::silent(NotificationCategory::State));

        let t = ctx.handle(Toggle);
        assert_eq!(t.from, Lamp::Dark);
        assert_eq!(t.to, Lamp::Lit);
        assert!(t.changed());
        assert_eq!(ctx.state(), Lamp::Lit);
        assert_eq!(ctx.narrator().messages(), vec!["on"]);

        ctx.reset();
        assert_eq!(ctx.state(), Lamp::Dark);
        assert_eq!(ctx.narrator().last_message(), Some("Reset to Dark"));
    }
}
