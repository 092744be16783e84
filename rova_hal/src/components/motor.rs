//! Motor component - a drive motor with coast and brake states.

use crate::backend::Backend;
use crate::components::{Component, ensure_in_range};
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface, MotorState};
use std::sync::Arc;

/// Capability contract for motor power control.
pub trait MotorInterface: Send + Sync {
    /// Set the state of a motor.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn set_motor_state(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        state: MotorState,
    ) -> Result<(), BackendError>;

    /// Get the commanded state of a motor.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_motor_state(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<MotorState, BackendError>;
}

/// A drive motor on a board.
#[derive(Clone)]
pub struct Motor {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn MotorInterface>,
}

impl Motor {
    /// Bind a motor to a backend.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingInterface`] if the backend does not
    /// implement [`MotorInterface`].
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .motor()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::Motor,
                interface: Interface::Motor,
            })?;
        Ok(Self {
            board,
            identifier,
            iface,
        })
    }

    /// Commanded state of the motor.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn state(&self) -> Result<MotorState, HalError> {
        Ok(self.iface.get_motor_state(&self.board, self.identifier)?)
    }

    /// Command a motor state.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::OutOfRange`] without touching the backend if
    /// a `Power` value lies outside `-1.0..=1.0`; backend failures pass
    /// through unmodified.
    pub fn set_state(&self, state: MotorState) -> Result<(), HalError> {
        if let MotorState::Power(value) = state {
            ensure_in_range(ComponentKind::Motor, value, -1.0, 1.0)?;
        }
        Ok(self
            .iface
            .set_motor_state(&self.board, self.identifier, state)?)
    }
}

impl Component for Motor {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Motor
    }

    fn identifier(&self) -> u8 {
        self.identifier
    }
}
