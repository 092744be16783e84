//! Demo board - three LEDs, used for demonstration and testing.

use crate::backend::Backend;
use crate::boards::board::{Board, BoardType};
use crate::components::Led;
use rova_common::error::HalError;
use rova_common::types::{BoardIdentity, BoardKind, ComponentKind};
use std::fmt;
use std::sync::Arc;

/// A board for demonstration purposes, containing 3 LEDs.
pub struct DemoBoard {
    identity: BoardIdentity,
    backend: Arc<dyn Backend>,
    leds: Vec<Led>,
}

impl DemoBoard {
    /// Number of LEDs on every demo board.
    pub const LED_COUNT: usize = 3;

    /// The LEDs on this board, in identifier order.
    pub fn leds(&self) -> &[Led] {
        &self.leds
    }

    /// One LED by identifier.
    pub fn led(&self, identifier: u8) -> Option<&Led> {
        self.leds.get(usize::from(identifier))
    }
}

impl Board for DemoBoard {
    fn kind(&self) -> BoardKind {
        Self::KIND
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn serial(&self) -> &str {
        &self.identity.serial
    }

    fn firmware_version(&self) -> Result<Option<String>, HalError> {
        Ok(self.backend.firmware_version(&self.identity)?)
    }

    fn component_kinds(&self) -> &'static [ComponentKind] {
        &[ComponentKind::Led]
    }

    fn make_safe(&self) -> Result<(), HalError> {
        // Safe state for a demo board: every LED off.
        for led in &self.leds {
            led.set_state(false)?;
        }
        Ok(())
    }
}

impl BoardType for DemoBoard {
    const KIND: BoardKind = BoardKind("demo_board");
    const NAME: &'static str = "Demo Board";

    fn attach(identity: BoardIdentity, backend: Arc<dyn Backend>) -> Result<Self, HalError> {
        let declared = backend.board_kind();
        if declared != Self::KIND {
            return Err(HalError::WrongBackend {
                expected: Self::KIND,
                actual: declared,
            });
        }
        if identity.kind != Self::KIND {
            return Err(HalError::BoardKindMismatch {
                serial: identity.serial,
                expected: Self::KIND,
                actual: identity.kind,
            });
        }

        let leds = (0..Self::LED_COUNT)
            .map(|n| Led::new(identity.clone(), &backend, n as u8))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            identity,
            backend,
            leds,
        })
    }
}

impl fmt::Display for DemoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name(), self.serial())
    }
}
