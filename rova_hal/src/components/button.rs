//! Button component - a momentary push button.

use crate::backend::Backend;
use crate::components::Component;
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface};
use std::sync::Arc;

/// Capability contract for button reads.
pub trait ButtonInterface: Send + Sync {
    /// Whether the button is currently pressed.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_button_state(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<bool, BackendError>;

    /// Block until the button is pressed.
    ///
    /// Any suspension happens entirely inside the backend; timeouts, if
    /// needed, are the backend's responsibility and surface as errors.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or the wait
    /// is abandoned.
    fn wait_until_button_pressed(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<(), BackendError>;
}

/// A push button on a board.
#[derive(Clone)]
pub struct Button {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn ButtonInterface>,
}

impl Button {
    /// Bind a button to a backend.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingInterface`] if the backend does not
    /// implement [`ButtonInterface`].
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .button()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::Button,
                interface: Interface::Button,
            })?;
        Ok(Self {
            board,
            identifier,
            iface,
        })
    }

    /// Whether the button is currently pressed.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn is_pressed(&self) -> Result<bool, HalError> {
        Ok(self.iface.get_button_state(&self.board, self.identifier)?)
    }

    /// Block until the button is pressed.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn wait_until_pressed(&self) -> Result<(), HalError> {
        Ok(self
            .iface
            .wait_until_button_pressed(&self.board, self.identifier)?)
    }
}

impl Component for Button {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
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

    struct ButtonBackend {
        pressed: bool,
    }

    impl ButtonInterface for ButtonBackend {
        fn get_button_state(
            &self,
            _board: &BoardIdentity,
            _identifier: u8,
        ) -> Result<bool, BackendError> {
            Ok(self.pressed)
        }

        fn wait_until_button_pressed(
            &self,
            _board: &BoardIdentity,
            _identifier: u8,
        ) -> Result<(), BackendError> {
            // The mock button is always pressed immediately.
            Ok(())
        }
    }

    impl Backend for ButtonBackend {
        fn board_kind(&self) -> BoardKind {
            TEST_KIND
        }

        fn environment(&self) -> &str {
            "test"
        }

        fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError> {
            Ok(vec![])
        }

        fn button(self: Arc<Self>) -> Option<Arc<dyn ButtonInterface>> {
            Some(self)
        }
    }

    #[test]
    fn button_forwards_state_and_wait() {
        let backend: Arc<dyn Backend> = Arc::new(ButtonBackend { pressed: true });
        let button = Button::new(BoardIdentity::new(TEST_KIND, "0001"), &backend, 0).unwrap();
        assert!(button.is_pressed().unwrap());
        button.wait_until_pressed().unwrap();
    }
}
