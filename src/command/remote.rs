// Remote control - slot-based invoker over household devices
//
// Devices live in a `Home` and are addressed by `DeviceId`. Commands hold the
// id, never the device, so the home stays the only owner.

use crate::command::trait_def::{CommandError, CommandResult, Reversal, UndoableCommand};
use crate::messaging::{Narrator, NotificationCategory};
use std::fmt;

/// Default number of on/off slot pairs on the remote
pub const DEFAULT_SLOTS: usize = 7;

/// Index of a device inside its `Home`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FanSpeed {
    Off,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceKind {
    Light { on: bool },
    CeilingFan { speed: FanSpeed },
    GarageDoor { up: bool },
    Stereo { on: bool, cd_loaded: bool, volume: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub location: String,
    pub kind: DeviceKind,
}

impl Device {
    fn label(&self) -> String {
        let noun = match self.kind {
            DeviceKind::Light { .. } => "Light",
            DeviceKind::CeilingFan { .. } => "Ceiling Fan",
            DeviceKind::GarageDoor { .. } => "Garage Door",
            DeviceKind::Stereo { .. } => "Stereo",
        };
        if self.location.is_empty() {
            noun.to_string()
        } else {
            format!("{} {}", self.location, noun)
        }
    }

    /// One-line description of the current device state
    pub fn status_line(&self) -> String {
        let label = self.label();
        match &self.kind {
            DeviceKind::Light { on } => format!("{} is {}", label, on_off(*on)),
            DeviceKind::CeilingFan { speed } => match speed {
                FanSpeed::Off => format!("{} is OFF", label),
                speed => format!("{} is on {:?}", label, speed),
            },
            DeviceKind::GarageDoor { up } => {
                format!("{} is {}", label, if *up { "UP" } else { "DOWN" })
            }
            DeviceKind::Stereo {
                on,
                cd_loaded,
                volume,
            } => {
                if *on {
                    let source = if *cd_loaded { "CD" } else { "no source" };
                    format!("{} is ON ({}, volume {})", label, source, volume)
                } else {
                    format!("{} is OFF", label)
                }
            }
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

/// Receiver for remote-control commands
pub struct Home {
    devices: Vec<Device>,
    narrator: Narrator,
}

impl Home {
    pub fn new() -> Self {
        Self::with_narrator(Narrator::new(NotificationCategory::Remote))
    }

    pub fn with_narrator(narrator: Narrator) -> Self {
        Self {
            devices: Vec::new(),
            narrator,
        }
    }

    fn add(&mut self, location: &str, kind: DeviceKind) -> DeviceId {
        self.devices.push(Device {
            location: location.to_string(),
            kind,
        });
        DeviceId(self.devices.len() - 1)
    }

    pub fn add_light(&mut self, location: &str) -> DeviceId {
        self.add(location, DeviceKind::Light { on: false })
    }

    pub fn add_ceiling_fan(&mut self, location: &str) -> DeviceId {
        self.add(
            location,
            DeviceKind::CeilingFan {
                speed: FanSpeed::Off,
            },
        )
    }

    pub fn add_garage_door(&mut self, location: &str) -> DeviceId {
        self.add(location, DeviceKind::GarageDoor { up: false })
    }

    pub fn add_stereo(&mut self, location: &str) -> DeviceId {
        self.add(
            location,
            DeviceKind::Stereo {
                on: false,
                cd_loaded: false,
                volume: 0,
            },
        )
    }

    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.get(id.0)
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut Narrator {
        &mut self.narrator
    }

    /// Apply `change` to a device, narrate its new state, return its prior kind
    fn update(
        &mut self,
        id: DeviceId,
        change: impl FnOnce(&mut DeviceKind) -> CommandResult<()>,
    ) -> CommandResult<DeviceKind> {
        let device = self
            .devices
            .get_mut(id.0)
            .ok_or_else(|| CommandError::ExecutionFailed(format!("Unknown device {}", id.0)))?;
        let previous = device.kind.clone();
        change(&mut device.kind)?;
        let line = device.status_line();
        self.narrator.info(line);
        Ok(previous)
    }

    fn restore(&mut self, id: DeviceId, kind: DeviceKind) -> CommandResult<()> {
        self.update(id, |current| {
            *current = kind;
            Ok(())
        })
        .map(|_| ())
        .map_err(|e| CommandError::UndoFailed(e.to_string()))
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

fn wrong_kind(id: DeviceId, expected: &str) -> CommandError {
    CommandError::ExecutionFailed(format!("Device {} is not a {}", id.0, expected))
}

/// Shared plumbing for device commands: snapshot, apply, restore
struct DeviceAction {
    device: DeviceId,
    previous: Option<DeviceKind>,
}

impl DeviceAction {
    fn new(device: DeviceId) -> Self {
        Self {
            device,
            previous: None,
        }
    }

    fn run(
        &mut self,
        home: &mut Home,
        change: impl FnOnce(&mut DeviceKind) -> CommandResult<()>,
    ) -> CommandResult<()> {
        self.previous = Some(home.update(self.device, change)?);
        Ok(())
    }

    fn revert(&mut self, home: &mut Home, what: &str) -> CommandResult<Reversal> {
        let previous = self.previous.take().ok_or_else(|| {
            CommandError::InvalidState(format!("Cannot undo {} before it was executed", what))
        })?;
        home.restore(self.device, previous)?;
        Ok(Reversal::Reverted)
    }
}

fn set_light(on: bool, device: DeviceId) -> impl FnOnce(&mut DeviceKind) -> CommandResult<()> {
    move |kind| match kind {
        DeviceKind::Light { on: current } => {
            *current = on;
            Ok(())
        }
        _ => Err(wrong_kind(device, "light")),
    }
}

fn set_door(up: bool, device: DeviceId) -> impl FnOnce(&mut DeviceKind) -> CommandResult<()> {
    move |kind| match kind {
        DeviceKind::GarageDoor { up: current } => {
            *current = up;
            Ok(())
        }
        _ => Err(wrong_kind(device, "garage door")),
    }
}

macro_rules! device_command {
    ($(#[$doc:meta])* $name:ident, $label:literal, $change:expr) => {
        $(#[$doc])*
        pub struct $name {
            action: DeviceAction,
        }

        impl $name {
            pub fn new(device: DeviceId) -> Self {
                Self {
                    action: DeviceAction::new(device),
                }
            }
        }

        impl UndoableCommand<Home> for $name {
            fn execute(&mut self, home: &mut Home) -> CommandResult<()> {
                let device = self.action.device;
                self.action.run(home, $change(device))
            }

            fn undo(&mut self, home: &mut Home) -> CommandResult<Reversal> {
                self.action.revert(home, $label)
            }

            fn description(&self) -> String {
                $label.to_string()
            }
        }
    };
}

device_command!(
    /// Turns a light on
    LightOnCommand,
    "LightOn",
    |device| set_light(true, device)
);
device_command!(
    /// Turns a light off
    LightOffCommand,
    "LightOff",
    |device| set_light(false, device)
);
device_command!(GarageDoorUpCommand, "GarageDoorUp", |device| set_door(true, device));
device_command!(GarageDoorDownCommand, "GarageDoorDown", |device| set_door(false, device));
device_command!(
    /// Powers the stereo on, loads a CD and sets the volume to 11
    StereoOnWithCdCommand,
    "StereoOnWithCd",
    |device| move |kind: &mut DeviceKind| match kind {
        DeviceKind::Stereo {
            on,
            cd_loaded,
            volume,
        } => {
            *on = true;
            *cd_loaded = true;
            *volume = 11;
            Ok(())
        }
        _ => Err(wrong_kind(device, "stereo")),
    }
);
device_command!(
    StereoOffCommand,
    "StereoOff",
    |device| move |kind: &mut DeviceKind| match kind {
        DeviceKind::Stereo { on, .. } => {
            *on = false;
            Ok(())
        }
        _ => Err(wrong_kind(device, "stereo")),
    }
);

/// Sets a ceiling fan to a given speed
pub struct CeilingFanCommand {
    speed: FanSpeed,
    action: DeviceAction,
}

impl CeilingFanCommand {
    pub fn new(device: DeviceId, speed: FanSpeed) -> Self {
        Self {
            speed,
            action: DeviceAction::new(device),
        }
    }

    pub fn off(device: DeviceId) -> Self {
        Self::new(device, FanSpeed::Off)
    }
}

impl UndoableCommand<Home> for CeilingFanCommand {
    fn execute(&mut self, home: &mut Home) -> CommandResult<()> {
        let device = self.action.device;
        let target = self.speed;
        self.action.run(home, move |kind| match kind {
            DeviceKind::CeilingFan { speed } => {
                *speed = target;
                Ok(())
            }
            _ => Err(wrong_kind(device, "ceiling fan")),
        })
    }

    fn undo(&mut self, home: &mut Home) -> CommandResult<Reversal> {
        self.action.revert(home, "ceiling fan change")
    }

    fn description(&self) -> String {
        format!("CeilingFan{:?}", self.speed)
    }
}

/// Placeholder for an empty slot
pub struct NoCommand;

impl UndoableCommand<Home> for NoCommand {
    fn execute(&mut self, home: &mut Home) -> CommandResult<()> {
        home.narrator_mut().info("No command assigned");
        Ok(())
    }

    fn undo(&mut self, _home: &mut Home) -> CommandResult<Reversal> {
        Ok(Reversal::NotReversible("No command assigned".into()))
    }

    fn description(&self) -> String {
        "NoCommand".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Button {
    On,
    Off,
}

struct Slot {
    on: Box<dyn UndoableCommand<Home>>,
    off: Box<dyn UndoableCommand<Home>>,
}

/// Remote with paired on/off slots and a single-step undo button
///
/// The undo button reverses whichever button was pressed last. The remote
/// remembers only that one press.
pub struct RemoteControl {
    slots: Vec<Slot>,
    last_pressed: Option<(usize, Button)>,
}

impl RemoteControl {
    pub fn new(slot_count: usize) -> Self {
        let slots = (0..slot_count)
            .map(|_| Slot {
                on: Box::new(NoCommand),
                off: Box::new(NoCommand),
            })
            .collect();
        Self {
            slots,
            last_pressed: None,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_mut(&mut self, slot: usize) -> CommandResult<&mut Slot> {
        let count = self.slots.len();
        self.slots.get_mut(slot).ok_or_else(|| {
            CommandError::InvalidState(format!("Slot {} out of range (remote has {})", slot, count))
        })
    }

    pub fn set_command(
        &mut self,
        slot: usize,
        on: Box<dyn UndoableCommand<Home>>,
        off: Box<dyn UndoableCommand<Home>>,
    ) -> CommandResult<()> {
        let target = self.slot_mut(slot)?;
        target.on = on;
        target.off = off;
        if matches!(self.last_pressed, Some((pressed, _)) if pressed == slot) {
            self.last_pressed = None;
        }
        Ok(())
    }

    pub fn on_button_was_pushed(&mut self, slot: usize, home: &mut Home) -> CommandResult<()> {
        self.press(slot, Button::On, home)
    }

    pub fn off_button_was_pushed(&mut self, slot: usize, home: &mut Home) -> CommandResult<()> {
        self.press(slot, Button::Off, home)
    }

    fn press(&mut self, slot: usize, button: Button, home: &mut Home) -> CommandResult<()> {
        let target = self.slot_mut(slot)?;
        match button {
            Button::On => target.on.execute(home)?,
            Button::Off => target.off.execute(home)?,
        }
        self.last_pressed = Some((slot, button));
        Ok(())
    }

    /// Undo the last pressed button
    ///
    /// Returns `None` when nothing has been pressed since the last undo. A
    /// failed undo leaves the press in place so it can be retried.
    pub fn undo_button_was_pushed(&mut self, home: &mut Home) -> CommandResult<Option<Reversal>> {
        let Some((slot, button)) = self.last_pressed else {
            home.narrator_mut().warning("No command to undo");
            return Ok(None);
        };
        let target = self.slot_mut(slot)?;
        let reversal = match button {
            Button::On => target.on.undo(home)?,
            Button::Off => target.off.undo(home)?,
        };
        self.last_pressed = None;
        Ok(Some(reversal))
    }

    /// Description of what the undo button would reverse
    pub fn undo_description(&self) -> String {
        self.last_pressed
            .and_then(|(slot, button)| {
                self.slots.get(slot).map(|s| match button {
                    Button::On => s.on.description(),
                    Button::Off => s.off.description(),
                })
            })
            .unwrap_or_else(|| "NoCommand".to_string())
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS)
    }
}

impl fmt::Display for RemoteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------ Remote Control -------")?;
        for (i, slot) in self.slots.iter().enumerate() {
            writeln!(
                f,
                "[slot {}] {} | {}",
                i,
                slot.on.description(),
                slot.off.description()
            )?;
        }
        write!(f, "[undo] {}", self.undo_description())
    }
}
