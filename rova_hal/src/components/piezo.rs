//! Piezo component - a piezoelectric buzzer.

use crate::backend::Backend;
use crate::components::{Component, ensure_in_range};
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface};
use std::sync::Arc;
use std::time::Duration;

/// Lowest frequency a buzz may request, in hertz.
pub const MIN_BUZZ_FREQUENCY: u32 = 1;
/// Highest frequency a buzz may request, in hertz.
pub const MAX_BUZZ_FREQUENCY: u32 = 20_000;

/// Capability contract for piezo buzzing.
pub trait PiezoInterface: Send + Sync {
    /// Sound the buzzer at `frequency` hertz for `duration`.
    ///
    /// Whether the call blocks for the duration is backend-specific.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn buzz(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        duration: Duration,
        frequency: u32,
    ) -> Result<(), BackendError>;
}

/// A buzzer on a board.
#[derive(Clone)]
pub struct Piezo {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn PiezoInterface>,
}

impl Piezo {
    /// Bind a piezo to a backend.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingInterface`] if the backend does not
    /// implement [`PiezoInterface`].
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .piezo()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::Piezo,
                interface: Interface::Piezo,
            })?;
        Ok(Self {
            board,
            identifier,
            iface,
        })
    }

    /// Sound the buzzer at `frequency` hertz for `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::OutOfRange`] without touching the backend if
    /// the frequency lies outside
    /// [`MIN_BUZZ_FREQUENCY`]..=[`MAX_BUZZ_FREQUENCY`]; backend failures
    /// pass through unmodified.
    pub fn buzz(&self, duration: Duration, frequency: u32) -> Result<(), HalError> {
        ensure_in_range(
            ComponentKind::Piezo,
            f64::from(frequency),
            f64::from(MIN_BUZZ_FREQUENCY),
            f64::from(MAX_BUZZ_FREQUENCY),
        )?;
        Ok(self
            .iface
            .buzz(&self.board, self.identifier, duration, frequency)?)
    }
}

impl Component for Piezo {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Piezo
    }

    fn identifier(&self) -> u8 {
        self.identifier
    }
}
