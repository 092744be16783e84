//! GPIO pin component - mode-switched general purpose I/O.
//!
//! A pin carries a static set of supported modes; requesting a mode
//! outside it is a capability error. Value operations are only legal in
//! a compatible mode, checked against the last successfully commanded
//! mode before anything reaches the backend.

use crate::backend::Backend;
use crate::components::{Component, ensure_in_range};
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface, PinMode};
use std::sync::Arc;

/// Capability contract for GPIO pin control.
pub trait GpioPinInterface: Send + Sync {
    /// Place a pin into the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or the
    /// hardware rejects the mode.
    fn set_gpio_pin_mode(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        mode: PinMode,
    ) -> Result<(), BackendError>;

    /// Drive a digital output pin high or low.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached.
    fn write_gpio_pin_digital_state(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        state: bool,
    ) -> Result<(), BackendError>;

    /// Read a digital input pin.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached.
    fn read_gpio_pin_digital_state(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<bool, BackendError>;

    /// Read an analogue input pin, normalized to `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached.
    fn read_gpio_pin_analogue_value(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<f64, BackendError>;

    /// Drive an analogue (DAC) output pin, normalized to `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached.
    fn write_gpio_pin_dac_value(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        value: f64,
    ) -> Result<(), BackendError>;

    /// Drive a PWM output pin with the given duty cycle, `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached.
    fn write_gpio_pin_pwm_value(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        duty_cycle: f64,
    ) -> Result<(), BackendError>;
}

/// A general purpose I/O pin on a board.
///
/// Mode changes take `&mut self`; the stored mode is only updated after
/// the backend accepts the change, so the handle and hardware cannot
/// drift apart.
pub struct GpioPin {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn GpioPinInterface>,
    supported_modes: &'static [PinMode],
    mode: PinMode,
}

impl GpioPin {
    /// Bind a pin to a backend and place it into `initial_mode`.
    ///
    /// # Errors
    ///
    /// - [`HalError::MissingInterface`] if the backend does not implement
    ///   [`GpioPinInterface`]
    /// - [`HalError::UnsupportedPinMode`] if `initial_mode` is outside
    ///   `supported_modes`
    /// - backend failures from the initial mode set, unmodified
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
        supported_modes: &'static [PinMode],
        initial_mode: PinMode,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .gpio_pin()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::GpioPin,
                interface: Interface::GpioPin,
            })?;
        if !supported_modes.contains(&initial_mode) {
            return Err(HalError::UnsupportedPinMode {
                identifier,
                mode: initial_mode,
            });
        }
        iface.set_gpio_pin_mode(&board, identifier, initial_mode)?;
        Ok(Self {
            board,
            identifier,
            iface,
            supported_modes,
            mode: initial_mode,
        })
    }

    /// The modes this pin supports.
    pub fn supported_modes(&self) -> &'static [PinMode] {
        self.supported_modes
    }

    /// The mode the pin is currently in.
    pub fn mode(&self) -> PinMode {
        self.mode
    }

    /// Place the pin into a new mode.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::UnsupportedPinMode`] without touching the
    /// backend if `mode` is outside the supported set; backend failures
    /// pass through unmodified and leave the stored mode unchanged.
    pub fn set_mode(&mut self, mode: PinMode) -> Result<(), HalError> {
        if !self.supported_modes.contains(&mode) {
            return Err(HalError::UnsupportedPinMode {
                identifier: self.identifier,
                mode,
            });
        }
        self.iface
            .set_gpio_pin_mode(&self.board, self.identifier, mode)?;
        self.mode = mode;
        Ok(())
    }

    /// Drive the pin high or low.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::PinModeViolation`] unless the pin is in
    /// digital output mode; backend failures pass through unmodified.
    pub fn digital_write(&self, state: bool) -> Result<(), HalError> {
        self.require_mode(&[PinMode::DigitalOutput], "write digital state")?;
        Ok(self
            .iface
            .write_gpio_pin_digital_state(&self.board, self.identifier, state)?)
    }

    /// Read the pin's digital state.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::PinModeViolation`] unless the pin is in one of
    /// the digital input modes; backend failures pass through unmodified.
    pub fn digital_read(&self) -> Result<bool, HalError> {
        self.require_mode(
            &[
                PinMode::DigitalInput,
                PinMode::DigitalInputPullup,
                PinMode::DigitalInputPulldown,
            ],
            "read digital state",
        )?;
        Ok(self
            .iface
            .read_gpio_pin_digital_state(&self.board, self.identifier)?)
    }

    /// Read the pin's analogue value, normalized to `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::PinModeViolation`] unless the pin is in
    /// analogue input mode; backend failures pass through unmodified.
    pub fn analogue_read(&self) -> Result<f64, HalError> {
        self.require_mode(&[PinMode::AnalogueInput], "read analogue value")?;
        Ok(self
            .iface
            .read_gpio_pin_analogue_value(&self.board, self.identifier)?)
    }

    /// Drive the pin's DAC with a value in `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::PinModeViolation`] unless the pin is in
    /// analogue output mode, [`HalError::OutOfRange`] for values outside
    /// `0.0..=1.0`; backend failures pass through unmodified.
    pub fn analogue_write(&self, value: f64) -> Result<(), HalError> {
        self.require_mode(&[PinMode::AnalogueOutput], "write analogue value")?;
        ensure_in_range(ComponentKind::GpioPin, value, 0.0, 1.0)?;
        Ok(self
            .iface
            .write_gpio_pin_dac_value(&self.board, self.identifier, value)?)
    }

    /// Drive the pin with a PWM duty cycle in `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::PinModeViolation`] unless the pin is in PWM
    /// output mode, [`HalError::OutOfRange`] for duty cycles outside
    /// `0.0..=1.0`; backend failures pass through unmodified.
    pub fn pwm_write(&self, duty_cycle: f64) -> Result<(), HalError> {
        self.require_mode(&[PinMode::PwmOutput], "write PWM value")?;
        ensure_in_range(ComponentKind::GpioPin, duty_cycle, 0.0, 1.0)?;
        Ok(self
            .iface
            .write_gpio_pin_pwm_value(&self.board, self.identifier, duty_cycle)?)
    }

    fn require_mode(&self, allowed: &[PinMode], operation: &'static str) -> Result<(), HalError> {
        if allowed.contains(&self.mode) {
            Ok(())
        } else {
            Err(HalError::PinModeViolation {
                identifier: self.identifier,
                actual: self.mode,
                operation,
            })
        }
    }
}

impl Component for GpioPin {
    fn kind(&self) -> ComponentKind {
        ComponentKind::GpioPin
    }

    fn identifier(&self) -> u8 {
        self.identifier
    }
}
