//! Battery sensor component - battery voltage and current reads.

use crate::backend::Backend;
use crate::components::Component;
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface};
use std::sync::Arc;

/// Capability contract for battery measurements.
pub trait BatterySensorInterface: Send + Sync {
    /// Battery voltage in volts.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_battery_voltage(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<f64, BackendError>;

    /// Battery current draw in amps.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_battery_current(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<f64, BackendError>;
}

/// A battery sensor on a board.
#[derive(Clone)]
pub struct BatterySensor {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn BatterySensorInterface>,
}

impl BatterySensor {
    /// Bind a battery sensor to a backend.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingInterface`] if the backend does not
    /// implement [`BatterySensorInterface`].
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .battery_sensor()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::BatterySensor,
                interface: Interface::BatterySensor,
            })?;
        Ok(Self {
            board,
            identifier,
            iface,
        })
    }

    /// Battery voltage in volts.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn voltage(&self) -> Result<f64, HalError> {
        Ok(self
            .iface
            .get_battery_voltage(&self.board, self.identifier)?)
    }

    /// Battery current draw in amps.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn current(&self) -> Result<f64, HalError> {
        Ok(self
            .iface
            .get_battery_current(&self.board, self.identifier)?)
    }
}

impl Component for BatterySensor {
    fn kind(&self) -> ComponentKind {
        ComponentKind::BatterySensor
    }

    fn identifier(&self) -> u8 {
        self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rova_common::types::BoardKind;

    const TEST_KIND: BoardKind = BoardKind("test_board");

    struct BatteryBackend;

    impl BatterySensorInterface for BatteryBackend {
        fn get_battery_voltage(
            &self,
            _board: &BoardIdentity,
            _identifier: u8,
        ) -> Result<f64, BackendError> {
            Ok(11.1)
        }

        fn get_battery_current(
            &self,
            _board: &BoardIdentity,
            _identifier: u8,
        ) -> Result<f64, BackendError> {
            Ok(1.2)
        }
    }

    impl Backend for BatteryBackend {
        fn board_kind(&self) -> BoardKind {
            TEST_KIND
        }

        fn environment(&self) -> &str {
            "test"
        }

        fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError> {
            Ok(vec![])
        }

        fn battery_sensor(self: Arc<Self>) -> Option<Arc<dyn BatterySensorInterface>> {
            Some(self)
        }
    }

    #[test]
    fn battery_sensor_forwards_reads() {
        let backend: Arc<dyn Backend> = Arc::new(BatteryBackend);
        let sensor =
            BatterySensor::new(BoardIdentity::new(TEST_KIND, "0001"), &backend, 0).unwrap();
        assert!((sensor.voltage().unwrap() - 11.1).abs() < f64::EPSILON);
        assert!((sensor.current().unwrap() - 1.2).abs() < f64::EPSILON);
    }
}
