//! LED component - a light which may be switched on and off.

use crate::backend::Backend;
use crate::components::Component;
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface};
use std::sync::Arc;

/// Capability contract for LED control.
///
/// Any backend claiming this interface must reproduce these exact
/// semantics: state is read from and written to the hardware unit
/// addressed by `(board, identifier)`.
pub trait LedInterface: Send + Sync {
    /// Set the state of an LED.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn set_led_state(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        state: bool,
    ) -> Result<(), BackendError>;

    /// Get the current state of an LED.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_led_state(&self, board: &BoardIdentity, identifier: u8) -> Result<bool, BackendError>;
}

/// A light on a board which may be switched on and off.
///
/// Holds no cached state; both operations pass through to the backend.
#[derive(Clone)]
pub struct Led {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn LedInterface>,
}

impl Led {
    /// Bind an LED to a backend.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingInterface`] if the backend does not
    /// implement [`LedInterface`].
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .led()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::Led,
                interface: Interface::Led,
            })?;
        Ok(Self {
            board,
            identifier,
            iface,
        })
    }

    /// Current state of the LED.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn state(&self) -> Result<bool, HalError> {
        Ok(self.iface.get_led_state(&self.board, self.identifier)?)
    }

    /// Switch the LED on or off.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn set_state(&self, state: bool) -> Result<(), HalError> {
        Ok(self
            .iface
            .set_led_state(&self.board, self.identifier, state)?)
    }
}

impl Component for Led {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Led
    }

    fn identifier(&self) -> u8 {
        self.identifier
    }
}
