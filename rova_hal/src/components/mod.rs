//! Components - the smallest logical element of hardware.
//!
//! Each component kind pairs an interface trait (the capability contract
//! a backend must implement) with a forwarding handle (the object a
//! board hands to control code). Handles hold no hardware state: every
//! read and write passes through to the backend, addressed by
//! `(board, identifier)`.
//!
//! The capability check happens once, at bind time. A handle constructor
//! resolves its interface through the backend's capability accessor and
//! fails with [`HalError::MissingInterface`] if the backend does not
//! provide it; operations afterwards dispatch straight to the resolved
//! interface.
//!
//! - [`led`] - lights which may be switched on and off
//! - [`servo`] - positional servomotors
//! - [`motor`] - drive motors with coast/brake states
//! - [`power_output`] - switchable power outputs and output groups
//! - [`button`] - momentary push buttons
//! - [`battery_sensor`] - battery voltage/current sensors
//! - [`piezo`] - piezoelectric buzzers
//! - [`gpio_pin`] - general purpose I/O pins
//!
//! [`HalError::MissingInterface`]: rova_common::error::HalError::MissingInterface

pub mod battery_sensor;
pub mod button;
pub mod gpio_pin;
pub mod led;
pub mod motor;
pub mod piezo;
pub mod power_output;
pub mod servo;

pub use battery_sensor::{BatterySensor, BatterySensorInterface};
pub use button::{Button, ButtonInterface};
pub use gpio_pin::{GpioPin, GpioPinInterface};
pub use led::{Led, LedInterface};
pub use motor::{Motor, MotorInterface};
pub use piezo::{Piezo, PiezoInterface};
pub use power_output::{GroupState, PowerOutput, PowerOutputGroup, PowerOutputInterface};
pub use servo::{Servo, ServoInterface};

use rova_common::error::HalError;
use rova_common::types::ComponentKind;

/// Common surface of every component handle.
pub trait Component {
    /// The kind of this component.
    fn kind(&self) -> ComponentKind;

    /// Identifier of this component, unique within its owning board and
    /// kind.
    fn identifier(&self) -> u8;
}

/// Reject a commanded value outside `min..=max` (or non-finite) before
/// it reaches the backend.
pub(crate) fn ensure_in_range(
    component: ComponentKind,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), HalError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HalError::OutOfRange {
            component,
            value,
            min,
            max,
        })
    }
}
