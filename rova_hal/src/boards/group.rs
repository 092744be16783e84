//! Board groups - deterministic collections of boards of one type.

use crate::backend::Backend;
use crate::boards::board::BoardType;
use crate::environment::Environment;
use rova_common::error::HalError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// A collection of boards of one type, keyed and ordered by serial.
///
/// Iteration order is the lexicographic serial order, which makes group
/// contents reproducible for a fixed hardware or mock state even when a
/// backend reports units in a different order between calls.
pub struct BoardGroup<B: BoardType> {
    boards: BTreeMap<String, B>,
}

impl<B: BoardType> BoardGroup<B> {
    /// Discover all boards of type `B` reachable through `backend`.
    ///
    /// # Errors
    ///
    /// Everything [`BoardType::discover`] can return.
    pub fn discover(backend: Arc<dyn Backend>) -> Result<Self, HalError> {
        let mut boards = BTreeMap::new();
        for board in B::discover(backend)? {
            let serial = board.serial().to_string();
            if boards.insert(serial.clone(), board).is_some() {
                warn!(kind = %B::KIND, serial = %serial, "duplicate serial in discovery");
            }
        }
        Ok(Self { boards })
    }

    /// Resolve the backend for `B` from `environment`, then discover.
    ///
    /// # Errors
    ///
    /// [`HalError::UnknownBoardKind`] if the environment has no backend
    /// for `B`, plus everything [`BoardGroup::discover`] can return.
    pub fn from_environment(environment: &Environment) -> Result<Self, HalError> {
        let backend = environment.backend_for(B::KIND)?;
        Self::discover(backend)
    }

    /// Number of boards in the group.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The board with the given serial.
    pub fn get(&self, serial: &str) -> Option<&B> {
        self.boards.get(serial)
    }

    /// Iterate over the boards in serial order.
    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.boards.values()
    }

    /// Iterate over the serials in order.
    pub fn serials(&self) -> impl Iterator<Item = &str> {
        self.boards.keys().map(String::as_str)
    }

    /// The only board in the group.
    ///
    /// # Errors
    ///
    /// - [`HalError::NoBoards`] if the group is empty
    /// - [`HalError::MultipleBoards`] if there is more than one member
    pub fn singular(&self) -> Result<&B, HalError> {
        let mut boards = self.boards.values();
        match (boards.next(), boards.next()) {
            (Some(board), None) => Ok(board),
            (None, _) => Err(HalError::NoBoards { kind: B::KIND }),
            (Some(_), Some(_)) => Err(HalError::MultipleBoards {
                kind: B::KIND,
                count: self.boards.len(),
            }),
        }
    }

    /// Make every board in the group safe.
    ///
    /// Fails fast: the first backend failure aborts the sweep and passes
    /// through unmodified.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    pub fn make_safe(&self) -> Result<(), HalError> {
        for board in self.boards.values() {
            board.make_safe()?;
        }
        Ok(())
    }
}
