//! Servo component - a positional servomotor.

use crate::backend::Backend;
use crate::components::{Component, ensure_in_range};
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface};
use std::sync::Arc;

/// Capability contract for servo position control.
///
/// Positions are normalized to `-1.0..=1.0` across the servo's travel;
/// `None` means the output is unpowered and the horn swings freely.
pub trait ServoInterface: Send + Sync {
    /// Set the position of a servo.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn set_servo_position(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        position: Option<f64>,
    ) -> Result<(), BackendError>;

    /// Get the commanded position of a servo.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_servo_position(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<Option<f64>, BackendError>;
}

/// A servomotor on a board.
#[derive(Clone)]
pub struct Servo {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn ServoInterface>,
}

impl std::fmt::Debug for Servo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Servo")
            .field("board", &self.board)
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl Servo {
    /// Bind a servo to a backend.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingInterface`] if the backend does not
    /// implement [`ServoInterface`].
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .servo()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::Servo,
                interface: Interface::Servo,
            })?;
        Ok(Self {
            board,
            identifier,
            iface,
        })
    }

    /// Commanded position, or `None` if the output is unpowered.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn position(&self) -> Result<Option<f64>, HalError> {
        Ok(self.iface.get_servo_position(&self.board, self.identifier)?)
    }

    /// Command a position in `-1.0..=1.0`, or `None` to unpower the
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::OutOfRange`] without touching the backend if
    /// the position lies outside `-1.0..=1.0`; backend failures pass
    /// through unmodified.
    pub fn set_position(&self, position: Option<f64>) -> Result<(), HalError> {
        if let Some(value) = position {
            ensure_in_range(ComponentKind::Servo, value, -1.0, 1.0)?;
        }
        Ok(self
            .iface
            .set_servo_position(&self.board, self.identifier, position)?)
    }
}

impl Component for Servo {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Servo
    }

    fn identifier(&self) -> u8 {
        self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rova_common::types::BoardKind;
    use std::sync::RwLock;

    const TEST_KIND: BoardKind = BoardKind("test_board");

    struct ServoBackend {
        position: RwLock<Option<f64>>,
        calls: RwLock<usize>,
    }

    impl ServoBackend {
        fn new() -> Self {
            Self {
                position: RwLock::new(None),
                calls: RwLock::new(0),
            }
        }
    }

    impl ServoInterface for ServoBackend {
        fn set_servo_position(
            &self,
            _board: &BoardIdentity,
            _identifier: u8,
            position: Option<f64>,
        ) -> Result<(), BackendError> {
            *self.calls.write().expect("lock poisoned") += 1;
            *self.position.write().expect("lock poisoned") = position;
            Ok(())
        }

        fn get_servo_position(
            &self,
            _board: &BoardIdentity,
            _identifier: u8,
        ) -> Result<Option<f64>, BackendError> {
            Ok(*self.position.read().expect("lock poisoned"))
        }
    }

    impl Backend for ServoBackend {
        fn board_kind(&self) -> BoardKind {
            TEST_KIND
        }

        fn environment(&self) -> &str {
            "test"
        }

        fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError> {
            Ok(vec![])
        }

        fn servo(self: Arc<Self>) -> Option<Arc<dyn ServoInterface>> {
            Some(self)
        }
    }

    fn servo_fixture() -> (Arc<ServoBackend>, Servo) {
        let backend = Arc::new(ServoBackend::new());
        let as_backend: Arc<dyn Backend> = backend.clone();
        let servo = Servo::new(BoardIdentity::new(TEST_KIND, "0001"), &as_backend, 0).unwrap();
        (backend, servo)
    }

    #[test]
    fn servo_position_roundtrip() {
        let (_backend, servo) = servo_fixture();
        servo.set_position(Some(0.5)).unwrap();
        assert_eq!(servo.position().unwrap(), Some(0.5));
        servo.set_position(None).unwrap();
        assert_eq!(servo.position().unwrap(), None);
    }

    #[test]
    fn out_of_range_never_reaches_backend() {
        let (backend, servo) = servo_fixture();
        let result = servo.set_position(Some(1.5));
        assert!(matches!(
            result,
            Err(HalError::OutOfRange {
                component: ComponentKind::Servo,
                ..
            })
        ));
        assert_eq!(*backend.calls.read().expect("lock poisoned"), 0);
    }
}
