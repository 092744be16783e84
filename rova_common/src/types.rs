//! Identity and value types shared across the HAL.
//!
//! This module defines:
//! - `BoardKind` / `BoardIdentity` - board typing and discovery identity
//! - `ComponentKind` / `Interface` - the capability vocabulary used in
//!   error messages and board manifests
//! - `PinMode` / `MotorState` - value types used in interface signatures

use serde::Serialize;
use std::fmt;

/// Identifies a board type within an environment registry.
///
/// Every concrete board type declares its kind exactly once; every
/// backend declares the kind it drives. The registry keys on this value,
/// and discovery validates it on each reported unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoardKind(pub &'static str);

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Identity of one discovered (or directly addressed) hardware unit.
///
/// This is what a backend reports from discovery and what components pass
/// back to the backend to address the right unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardIdentity {
    /// Board kind this unit belongs to.
    pub kind: BoardKind,
    /// Serial number, unique per unit of this kind.
    pub serial: String,
}

impl BoardIdentity {
    /// Create an identity from a kind and serial.
    pub fn new(kind: BoardKind, serial: impl Into<String>) -> Self {
        Self {
            kind,
            serial: serial.into(),
        }
    }
}

impl fmt::Display for BoardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.serial)
    }
}

/// The kinds of component a board may expose.
///
/// Used in board manifests and in capability error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentKind {
    /// A light which may be switched on and off.
    Led,
    /// A positional servomotor.
    Servo,
    /// A drive motor.
    Motor,
    /// A switchable power output.
    PowerOutput,
    /// A momentary push button.
    Button,
    /// A battery voltage/current sensor.
    BatterySensor,
    /// A piezoelectric buzzer.
    Piezo,
    /// A general purpose I/O pin.
    GpioPin,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Led => "LED",
            Self::Servo => "servo",
            Self::Motor => "motor",
            Self::PowerOutput => "power output",
            Self::Button => "button",
            Self::BatterySensor => "battery sensor",
            Self::Piezo => "piezo",
            Self::GpioPin => "GPIO pin",
        };
        f.write_str(name)
    }
}

/// Interface identifiers - one per capability contract a backend may
/// implement.
///
/// A capability error names the interface the backend was missing using
/// this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    /// LED control (state set/get).
    Led,
    /// Servo position control.
    Servo,
    /// Motor power control.
    Motor,
    /// Power output switching and current measurement.
    PowerOutput,
    /// Button state reads.
    Button,
    /// Battery voltage/current reads.
    BatterySensor,
    /// Piezo buzzing.
    Piezo,
    /// GPIO pin mode and value control.
    GpioPin,
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Led => "LED",
            Self::Servo => "servo",
            Self::Motor => "motor",
            Self::PowerOutput => "power output",
            Self::Button => "button",
            Self::BatterySensor => "battery sensor",
            Self::Piezo => "piezo",
            Self::GpioPin => "GPIO pin",
        };
        f.write_str(name)
    }
}

/// Hardware modes a GPIO pin may be placed in.
///
/// Not every pin supports every mode; each pin carries its supported set
/// and rejects requests outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinMode {
    /// Digital input, floating.
    DigitalInput,
    /// Digital input with internal pull-up.
    DigitalInputPullup,
    /// Digital input with internal pull-down.
    DigitalInputPulldown,
    /// Digital output.
    DigitalOutput,
    /// Analogue (ADC) input.
    AnalogueInput,
    /// Analogue (DAC) output.
    AnalogueOutput,
    /// PWM output.
    PwmOutput,
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DigitalInput => "digital input",
            Self::DigitalInputPullup => "digital input (pull-up)",
            Self::DigitalInputPulldown => "digital input (pull-down)",
            Self::DigitalOutput => "digital output",
            Self::AnalogueInput => "analogue input",
            Self::AnalogueOutput => "analogue output",
            Self::PwmOutput => "PWM output",
        };
        f.write_str(name)
    }
}

/// Commanded state of a motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorState {
    /// Drive at the given power, `-1.0..=1.0` (negative is reverse).
    Power(f64),
    /// Output disconnected; the motor spins freely.
    Coast,
    /// Output shorted; the motor actively resists rotation.
    Brake,
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(p) => write!(f, "power {p:.2}"),
            Self::Coast => f.write_str("coast"),
            Self::Brake => f.write_str("brake"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_kind_display() {
        assert_eq!(BoardKind("demo_board").to_string(), "demo_board");
    }

    #[test]
    fn board_identity_display() {
        let id = BoardIdentity::new(BoardKind("demo_board"), "00000");
        assert_eq!(id.to_string(), "demo_board/00000");
    }

    #[test]
    fn board_identity_equality() {
        let a = BoardIdentity::new(BoardKind("demo_board"), "0001");
        let b = BoardIdentity::new(BoardKind("demo_board"), "0001");
        let c = BoardIdentity::new(BoardKind("demo_board"), "0002");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn component_and_interface_names_agree() {
        // Capability errors print both; keep the vocabulary aligned.
        assert_eq!(ComponentKind::Motor.to_string(), Interface::Motor.to_string());
        assert_eq!(ComponentKind::Led.to_string(), Interface::Led.to_string());
        assert_eq!(
            ComponentKind::GpioPin.to_string(),
            Interface::GpioPin.to_string()
        );
    }

    #[test]
    fn motor_state_display() {
        assert_eq!(MotorState::Brake.to_string(), "brake");
        assert_eq!(MotorState::Power(0.5).to_string(), "power 0.50");
    }
}
