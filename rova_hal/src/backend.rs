//! The `Backend` trait - the binding point between boards and hardware.
//!
//! A backend drives exactly one board kind within one environment. It
//! implements the component interfaces its hardware (or simulation) can
//! support, and exposes one capability accessor per interface. Accessors
//! default to `None`, so a backend only overrides the ones it genuinely
//! implements - this is the runtime capability table that components
//! consult exactly once, at bind time.

use crate::components::{
    BatterySensorInterface, ButtonInterface, GpioPinInterface, LedInterface, MotorInterface,
    PiezoInterface, PowerOutputInterface, ServoInterface,
};
use rova_common::error::BackendError;
use rova_common::types::{BoardIdentity, BoardKind};
use std::sync::Arc;

/// A concrete implementation (real or mock) of one or more component
/// interfaces for one board kind within one environment.
///
/// # Contract
///
/// - `board_kind()` is constant for the lifetime of the backend, and
///   every identity reported by `discover()` carries it. A mismatch is
///   rejected by board construction as a fatal validation error.
/// - `discover()` is idempotent for unchanged hardware state:
///   consecutive calls report the same set of identities, though
///   ordering may differ.
/// - Capability accessors return `Some` for every interface the backend
///   implements. They are consulted once per component bind, never per
///   operation.
/// - A backend instance is never shared across board kinds.
pub trait Backend: Send + Sync {
    /// The board kind this backend drives.
    fn board_kind(&self) -> BoardKind;

    /// Name of the environment this backend belongs to.
    fn environment(&self) -> &str;

    /// Enumerate live (or simulated) hardware units of this backend's
    /// board kind.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if enumeration fails, e.g. on a bus scan
    /// error. Mock backends report a fixed deterministic set.
    fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError>;

    /// Firmware version of the given unit, if the backend can report one.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be queried.
    fn firmware_version(&self, board: &BoardIdentity) -> Result<Option<String>, BackendError> {
        let _ = board;
        Ok(None)
    }

    /// Access the LED interface, if implemented.
    fn led(self: Arc<Self>) -> Option<Arc<dyn LedInterface>> {
        None
    }

    /// Access the servo interface, if implemented.
    fn servo(self: Arc<Self>) -> Option<Arc<dyn ServoInterface>> {
        None
    }

    /// Access the motor interface, if implemented.
    fn motor(self: Arc<Self>) -> Option<Arc<dyn MotorInterface>> {
        None
    }

    /// Access the power output interface, if implemented.
    fn power_output(self: Arc<Self>) -> Option<Arc<dyn PowerOutputInterface>> {
        None
    }

    /// Access the button interface, if implemented.
    fn button(self: Arc<Self>) -> Option<Arc<dyn ButtonInterface>> {
        None
    }

    /// Access the battery sensor interface, if implemented.
    fn battery_sensor(self: Arc<Self>) -> Option<Arc<dyn BatterySensorInterface>> {
        None
    }

    /// Access the piezo interface, if implemented.
    fn piezo(self: Arc<Self>) -> Option<Arc<dyn PiezoInterface>> {
        None
    }

    /// Access the GPIO pin interface, if implemented.
    fn gpio_pin(self: Arc<Self>) -> Option<Arc<dyn GpioPinInterface>> {
        None
    }
}
