// Music player - play/pause/stop state management

use super::context::{StateContext, Step, Transition, TransitionTable};

/// Player state (play/pause/stop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlayerState {
    /// Check if the player is producing sound
    pub fn is_playing(&self) -> bool {
        matches!(self, PlayerState::Playing)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, PlayerState::Stopped)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlayerState::Paused)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Play,
    Pause,
    Stop,
}

impl PlayerEvent {
    pub const ALL: [PlayerEvent; 3] = [PlayerEvent::Play, PlayerEvent::Pause, PlayerEvent::Stop];
}

pub struct PlayerMachine;

impl TransitionTable for PlayerMachine {
    type State = PlayerState;
    type Event = PlayerEvent;
    const INITIAL: PlayerState = PlayerState::Stopped;

    fn step(state: PlayerState, event: PlayerEvent) -> Step<PlayerState> {
        use PlayerEvent::*;
        use PlayerState::*;

        match (state, event) {
            (Stopped, Play) => Step::to(Playing, "Starting playback."),
            (Stopped, Pause) => Step::to(Stopped, "Can't pause. Player is stopped."),
            (Stopped, Stop) => Step::to(Stopped, "Already stopped."),

            (Playing, Play) => Step::to(Playing, "Already playing."),
            (Playing, Pause) => Step::to(Paused, "Pausing playback."),
            (Playing, Stop) => Step::to(Stopped, "Stopping playback."),

            (Paused, Play) => Step::to(Playing, "Resuming playback."),
            (Paused, Pause) => Step::to(Paused, "Already paused."),
            (Paused, Stop) => Step::to(Stopped, "Stopping playback from paused state."),
        }
    }
}

pub type MusicPlayer = StateContext<PlayerMachine>;

impl StateContext<PlayerMachine> {
    pub fn press_play(&mut self) -> Transition<PlayerState, PlayerEvent> {
        self.handle(PlayerEvent::Play)
    }

    pub fn press_pause(&mut self) -> Transition<PlayerState, PlayerEvent> {
        self.handle(PlayerEvent::Pause)
    }

    pub fn press_stop(&mut self) -> Transition<PlayerState, PlayerEvent> {
        self.handle(PlayerEvent::Stop)
    }

    /// Toggle play/pause
    pub fn toggle_play(&mut self) -> Transition<PlayerState, PlayerEvent> {
        if self.state().is_playing() {
            self.press_pause()
        } else {
            self.press_play()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::{Narrator, NotificationCategory};

    fn player() -> MusicPlayer {
        MusicPlayer::with_narrator(Narrator::silent(NotificationCategory::State))
    }

    #[test]
    fn test_player_state() {
        assert!(PlayerState::Playing.is_playing());
        assert!(!PlayerState::Playing.is_stopped());
        assert!(!PlayerState::Paused.is_stopped());
        assert!(PlayerState::Paused.is_paused());
        assert!(PlayerState::Stopped.is_stopped());
        assert_eq!(PlayerState::default(), PlayerState::Stopped);
    }

    #[test]
    fn test_player_control() {
        let mut player = player();

        player.press_play();
        assert_eq!(player.state(), PlayerState::Playing);

        player.press_pause();
        assert_eq!(player.state(), PlayerState::Paused);

        player.press_play();
        assert_eq!(player.state(), PlayerState::Playing);

        player.press_stop();
        assert_eq!(player.state(), PlayerState::Stopped);

        let t = player.press_pause();
        assert!(!t.changed());

        assert_eq!(
            player.narrator().messages(),
            vec![
                "Starting playback.",
                "Pausing playback.",
                "Resuming playback.",
                "Stopping playback.",
                "Can't pause. Player is stopped.",
            ]
        );
    }

    #[test]
    fn test_toggle_play() {
        let mut player = player();

        player.toggle_play();
        assert_eq!(player.state(), PlayerState::Playing);

        player.toggle_play();
        assert_eq!(player.state(), PlayerState::Paused);

        player.toggle_play();
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_stop_from_paused() {
        let mut player = player();
        player.press_play();
        player.press_pause();

        let t = player.press_stop();
        assert_eq!(t.message, "Stopping playback from paused state.");
        assert_eq!(t.to, PlayerState::Stopped);
    }
}
