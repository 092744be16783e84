//! Power output component - switchable power outputs and output groups.

use crate::backend::Backend;
use crate::components::Component;
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, ComponentKind, Interface};
use std::sync::Arc;

/// Capability contract for power output switching and current
/// measurement.
pub trait PowerOutputInterface: Send + Sync {
    /// Enable or disable a power output.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn set_power_output_enabled(
        &self,
        board: &BoardIdentity,
        identifier: u8,
        enabled: bool,
    ) -> Result<(), BackendError>;

    /// Whether a power output is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_power_output_enabled(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<bool, BackendError>;

    /// Current drawn through a power output, in amps.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the unit cannot be reached or does not
    /// exist.
    fn get_power_output_current(
        &self,
        board: &BoardIdentity,
        identifier: u8,
    ) -> Result<f64, BackendError>;
}

/// A switchable power output on a board.
#[derive(Clone)]
pub struct PowerOutput {
    board: BoardIdentity,
    identifier: u8,
    iface: Arc<dyn PowerOutputInterface>,
}

impl PowerOutput {
    /// Bind a power output to a backend.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::MissingInterface`] if the backend does not
    /// implement [`PowerOutputInterface`].
    pub fn new(
        board: BoardIdentity,
        backend: &Arc<dyn Backend>,
        identifier: u8,
    ) -> Result<Self, HalError> {
        let iface = Arc::clone(backend)
            .power_output()
            .ok_or(HalError::MissingInterface {
                component: ComponentKind::PowerOutput,
                interface: Interface::PowerOutput,
            })?;
        Ok(Self {
            board,
            identifier,
            iface,
        })
    }

    /// Whether the output is enabled.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn enabled(&self) -> Result<bool, HalError> {
        Ok(self
            .iface
            .get_power_output_enabled(&self.board, self.identifier)?)
    }

    /// Enable or disable the output.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn set_enabled(&self, enabled: bool) -> Result<(), HalError> {
        Ok(self
            .iface
            .set_power_output_enabled(&self.board, self.identifier, enabled)?)
    }

    /// Current drawn through the output, in amps.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn current(&self) -> Result<f64, HalError> {
        Ok(self
            .iface
            .get_power_output_current(&self.board, self.identifier)?)
    }
}

impl Component for PowerOutput {
    fn kind(&self) -> ComponentKind {
        ComponentKind::PowerOutput
    }

    fn identifier(&self) -> u8 {
        self.identifier
    }
}

/// Aggregate on/off state of a power output group.
///
/// Disagreement between members is reported explicitly, never collapsed
/// into a guessed boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    /// Every output in the group is enabled.
    AllOn,
    /// Every output in the group is disabled.
    AllOff,
    /// Members disagree.
    Mixed {
        /// Number of enabled members.
        on: usize,
        /// Number of disabled members.
        off: usize,
    },
}

/// A group of power outputs addressed as one unit.
///
/// A set operation fans out to every member; a get aggregates member
/// states into a [`GroupState`].
pub struct PowerOutputGroup {
    outputs: Vec<PowerOutput>,
}

impl PowerOutputGroup {
    /// Build a group over the given outputs.
    pub fn new(outputs: Vec<PowerOutput>) -> Self {
        Self { outputs }
    }

    /// Number of outputs in the group.
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// The member with the given identifier.
    pub fn get(&self, identifier: u8) -> Option<&PowerOutput> {
        self.outputs.iter().find(|o| o.identifier() == identifier)
    }

    /// Iterate over the members.
    pub fn iter(&self) -> impl Iterator<Item = &PowerOutput> {
        self.outputs.iter()
    }

    /// Enable or disable every output in the group.
    ///
    /// Fails fast: the first backend failure aborts the fan-out and
    /// passes through unmodified.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn set_all_enabled(&self, enabled: bool) -> Result<(), HalError> {
        for output in &self.outputs {
            output.set_enabled(enabled)?;
        }
        Ok(())
    }

    /// Aggregate on/off state of the group.
    ///
    /// An empty group reports [`GroupState::AllOff`].
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn state(&self) -> Result<GroupState, HalError> {
        let mut on = 0;
        let mut off = 0;
        for output in &self.outputs {
            if output.enabled()? {
                on += 1;
            } else {
                off += 1;
            }
        }
        Ok(match (on, off) {
            (_, 0) if on > 0 => GroupState::AllOn,
            (0, _) => GroupState::AllOff,
            (on, off) => GroupState::Mixed { on, off },
        })
    }

    /// Sum of member currents, in amps.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn total_current(&self) -> Result<f64, HalError> {
        let mut total = 0.0;
        for output in &self.outputs {
            total += output.current()?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rova_common::types::BoardKind;
    use std::collections::HashMap;
    use std::sync::RwLock;

    const TEST_KIND: BoardKind = BoardKind("test_board");

    struct PowerBackend {
        enabled: RwLock<HashMap<u8, bool>>,
    }

    impl PowerBackend {
        fn new() -> Self {
            Self {
                enabled: RwLock::new(HashMap::new()),
            }
        }
    }

    impl PowerOutputInterface for PowerBackend {
        fn set_power_output_enabled(
            &self,
            _board: &BoardIdentity,
            identifier: u8,
            enabled: bool,
        ) -> Result<(), BackendError> {
            self.enabled
                .write()
                .expect("lock poisoned")
                .insert(identifier, enabled);
            Ok(())
        }

        fn get_power_output_enabled(
            &self,
            _board: &BoardIdentity,
            identifier: u8,
        ) -> Result<bool, BackendError> {
            Ok(self
                .enabled
                .read()
                .expect("lock poisoned")
                .get(&identifier)
                .copied()
                .unwrap_or(false))
        }

        fn get_power_output_current(
            &self,
            _board: &BoardIdentity,
            identifier: u8,
        ) -> Result<f64, BackendError> {
            // Fixed per-output draw keeps sums predictable.
            Ok(0.5 + f64::from(identifier))
        }
    }

    impl Backend for PowerBackend {
        fn board_kind(&self) -> BoardKind {
            TEST_KIND
        }

        fn environment(&self) -> &str {
            "test"
        }

        fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError> {
            Ok(vec![])
        }

        fn power_output(self: Arc<Self>) -> Option<Arc<dyn PowerOutputInterface>> {
            Some(self)
        }
    }

    fn group_fixture(count: u8) -> PowerOutputGroup {
        let backend: Arc<dyn Backend> = Arc::new(PowerBackend::new());
        let board = BoardIdentity::new(TEST_KIND, "0001");
        let outputs = (0..count)
            .map(|n| PowerOutput::new(board.clone(), &backend, n).unwrap())
            .collect();
        PowerOutputGroup::new(outputs)
    }

    #[test]
    fn group_set_fans_out() {
        let group = group_fixture(3);
        group.set_all_enabled(true).unwrap();
        assert_eq!(group.state().unwrap(), GroupState::AllOn);
        group.set_all_enabled(false).unwrap();
        assert_eq!(group.state().unwrap(), GroupState::AllOff);
    }

    #[test]
    fn group_disagreement_is_explicit() {
        let group = group_fixture(3);
        group.set_all_enabled(false).unwrap();
        group.get(1).unwrap().set_enabled(true).unwrap();

        assert_eq!(group.state().unwrap(), GroupState::Mixed { on: 1, off: 2 });
    }

    #[test]
    fn group_total_current_sums_members() {
        let group = group_fixture(3);
        // 0.5 + 1.5 + 2.5
        let total = group.total_current().unwrap();
        assert!((total - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_group_is_all_off() {
        let group = PowerOutputGroup::new(Vec::new());
        assert!(group.is_empty());
        assert_eq!(group.state().unwrap(), GroupState::AllOff);
    }
}
