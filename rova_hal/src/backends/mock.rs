//! Deterministic mock backends for development and testing.
//!
//! `MockDemoBackend` drives [`DemoBoard`]s entirely in memory: discovery
//! reports a fixed set of serials and LED state lives in a table keyed
//! by `(serial, identifier)`. Behavior is configured through
//! [`MockConfig`].

use crate::backend::Backend;
use crate::boards::{BoardType, DemoBoard};
use crate::components::LedInterface;
use rova_common::config::MockConfig;
use rova_common::error::BackendError;
use rova_common::types::{BoardIdentity, BoardKind, ComponentKind};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Environment name declared by every shipped mock backend.
pub const MOCK_ENVIRONMENT_NAME: &str = "mock";

/// In-memory backend for [`DemoBoard`].
///
/// Discovery reports `config.boards` units with zero-padded serials
/// (`"000000"`, `"000001"`, ...). LEDs read back whatever was last
/// written, defaulting to `config.default_led_state`.
pub struct MockDemoBackend {
    config: MockConfig,
    led_states: RwLock<HashMap<(String, u8), bool>>,
}

impl MockDemoBackend {
    /// Create a mock backend with the given settings.
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            led_states: RwLock::new(HashMap::new()),
        }
    }

    /// Serial reported for the `n`-th discovered unit.
    fn serial(n: usize) -> String {
        format!("{n:06}")
    }

    fn check_led(&self, board: &BoardIdentity, identifier: u8) -> Result<(), BackendError> {
        if usize::from(identifier) < DemoBoard::LED_COUNT {
            Ok(())
        } else {
            Err(BackendError::UnknownUnit {
                serial: board.serial.clone(),
                component: ComponentKind::Led,
                identifier,
            })
        }
    }
}

impl Default for MockDemoBackend {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl Backend for MockDemoBackend {
    fn board_kind(&self) -> BoardKind {
        DemoBoard::KIND
    }

    fn environment(&self) -> &str {
        MOCK_ENVIRONMENT_NAME
    }

    fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError> {
        debug!(count = self.config.boards, "mock demo discovery");
        Ok((0..self.config.boards)
            .map(|n| BoardIdentity::new(DemoBoard::KIND, Self::serial(n)))
            .collect())
    }

    fn firmware_version(&self, _board: &BoardIdentity) -> Result<Option<String>, BackendError> {
        Ok(Some(format!("mock-{}", env!("CARGO_PKG_VERSION"))))
    }

    fn led(self: Arc<Self>) -> Option<Arc<dyn LedInterface>> {
        Some(self)
    }
}

impl LedInterface for MockDemoBackend {
    fn set_led_state(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        state: bool,
    ) -> Result<(), BackendError> {
        self.check_led(board, identifier)?;
        self.led_states
            .write()
            .expect("LED state lock poisoned")
            .insert((board.serial.clone(), identifier), state);
        Ok(())
    }

    fn get_led_state(&self, board: &BoardIdentity, identifier: u8) -> Result<bool, BackendError> {
        self.check_led(board, identifier)?;
        Ok(self
            .led_states
            .read()
            .expect("LED state lock poisoned")
            .get(&(board.serial.clone(), identifier))
            .copied()
            .unwrap_or(self.config.default_led_state))
    }
}
