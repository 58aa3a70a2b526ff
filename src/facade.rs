// Facade Pattern - one-call control of a home theater
//
// The subsystems keep their own state and can still be driven directly; the
// facade only sequences them for the two common tasks.

use crate::messaging::{Narrator, NotificationCategory};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Amplifier {
    pub on: bool,
    pub source: Option<String>,
    pub surround: bool,
    pub volume: u8,
}

impl Amplifier {
    pub fn on(&mut self, narrator: &mut Narrator) {
        self.on = true;
        narrator.info("Amplifier on");
    }

    pub fn set_dvd(&mut self, source: &str, narrator: &mut Narrator) {
        self.source = Some(source.to_string());
        narrator.info(format!("Amplifier setting DVD to {}", source));
    }

    pub fn set_surround_sound(&mut self, narrator: &mut Narrator) {
        self.surround = true;
        narrator.info("Amplifier surround sound on");
    }

    pub fn set_volume(&mut self, volume: u8, narrator: &mut Narrator) {
        self.volume = volume;
        narrator.info(format!("Amplifier volume set to {}", volume));
    }

    pub fn off(&mut self, narrator: &mut Narrator) {
        *self = Self::default();
        narrator.info("Amplifier off");
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tuner {
    pub on: bool,
}

impl Tuner {
    pub fn on(&mut self, narrator: &mut Narrator) {
        self.on = true;
        narrator.info("Tuner on");
    }

    pub fn off(&mut self, narrator: &mut Narrator) {
        self.on = false;
        narrator.info("Tuner off");
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DvdPlayer {
    pub on: bool,
    pub playing: Option<String>,
}

impl DvdPlayer {
    pub fn on(&mut self, narrator: &mut Narrator) {
        self.on = true;
        narrator.info("DVD Player on");
    }

    pub fn play(&mut self, movie: &str, narrator: &mut Narrator) {
        self.playing = Some(movie.to_string());
        narrator.info(format!("DVD Player playing \"{}\"", movie));
    }

    pub fn stop(&mut self, narrator: &mut Narrator) {
        narrator.info("DVD Player stopped");
    }

    pub fn eject(&mut self, narrator: &mut Narrator) {
        self.playing = None;
        narrator.info("DVD Player eject");
    }

    pub fn off(&mut self, narrator: &mut Narrator) {
        self.on = false;
        narrator.info("DVD Player off");
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Projector {
    pub on: bool,
    pub widescreen: bool,
}

impl Projector {
    pub fn on(&mut self, narrator: &mut Narrator) {
        self.on = true;
        narrator.info("Projector on");
    }

    pub fn wide_screen_mode(&mut self, narrator: &mut Narrator) {
        self.widescreen = true;
        narrator.info("Projector in widescreen mode");
    }

    pub fn off(&mut self, narrator: &mut Narrator) {
        *self = Self::default();
        narrator.info("Projector off");
    }
}

/// Lights at a brightness percentage, 100 when fully on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterLights {
    pub level: u8,
}

impl Default for TheaterLights {
    fn default() -> Self {
        Self { level: 100 }
    }
}

impl TheaterLights {
    pub fn dim(&mut self, level: u8, narrator: &mut Narrator) {
        self.level = level.min(100);
        narrator.info(format!("Theater lights dimming to {}%", self.level));
    }

    pub fn on(&mut self, narrator: &mut Narrator) {
        self.level = 100;
        narrator.info("Theater lights on");
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Screen {
    pub down: bool,
}

impl Screen {
    pub fn down(&mut self, narrator: &mut Narrator) {
        self.down = true;
        narrator.info("Screen going down");
    }

    pub fn up(&mut self, narrator: &mut Narrator) {
        self.down = false;
        narrator.info("Screen going up");
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PopcornPopper {
    pub on: bool,
    pub batches: u32,
}

impl PopcornPopper {
    pub fn on(&mut self, narrator: &mut Narrator) {
        self.on = true;
        narrator.info("Popcorn Popper on");
    }

    pub fn pop(&mut self, narrator: &mut Narrator) {
        self.batches += 1;
        narrator.info("Popcorn Popper popping popcorn!");
    }

    pub fn off(&mut self, narrator: &mut Narrator) {
        self.on = false;
        narrator.info("Popcorn Popper off");
    }
}

/// Home theater behind two calls: `watch_movie` and `end_movie`
#[derive(Debug)]
pub struct HomeTheaterFacade {
    pub amp: Amplifier,
    pub tuner: Tuner,
    pub dvd: DvdPlayer,
    pub projector: Projector,
    pub screen: Screen,
    pub lights: TheaterLights,
    pub popper: PopcornPopper,
    narrator: Narrator,
}

impl HomeTheaterFacade {
    pub fn new() -> Self {
        Self::with_narrator(Narrator::new(NotificationCategory::Facade))
    }

    pub fn with_narrator(narrator: Narrator) -> Self {
        Self {
            amp: Amplifier::default(),
            tuner: Tuner::default(),
            dvd: DvdPlayer::default(),
            projector: Projector::default(),
            screen: Screen::default(),
            lights: TheaterLights::default(),
            popper: PopcornPopper::default(),
            narrator,
        }
    }

    pub fn watch_movie(&mut self, movie: &str) {
        let n = &mut self.narrator;
        n.info("Get ready to watch a movie...");
        self.popper.on(n);
        self.popper.pop(n);
        self.lights.dim(10, n);
        self.screen.down(n);
        self.projector.on(n);
        self.projector.wide_screen_mode(n);
        self.amp.on(n);
        self.amp.set_dvd("DVD Player", n);
        self.amp.set_surround_sound(n);
        self.amp.set_volume(5, n);
        self.dvd.on(n);
        self.dvd.play(movie, n);
    }

    pub fn end_movie(&mut self) {
        let n = &mut self.narrator;
        n.info("Shutting movie theater down...");
        self.popper.off(n);
        self.lights.on(n);
        self.screen.up(n);
        self.projector.off(n);
        self.amp.off(n);
        self.dvd.stop(n);
        self.dvd.eject(n);
        self.dvd.off(n);
    }

    /// Whether a movie is currently showing
    pub fn is_showing(&self) -> bool {
        self.dvd.playing.is_some() && self.projector.on && self.screen.down
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut Narrator {
        &mut self.narrator
    }
}

impl Default for HomeTheaterFacade {
    fn default() -> Self {
        Self::new()
    }
}
