//! Environment registry - binds board kinds to backend implementations.
//!
//! An `Environment` is constructed at startup, populated via
//! `register()`, and passed by reference to board constructors. This uses
//! constructor-injection rather than global state.

use crate::backend::Backend;
use rova_common::error::HalError;
use rova_common::types::BoardKind;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// A named registry mapping each board kind to the single backend chosen
/// to drive it.
///
/// Registration must complete before any board is constructed or
/// discovered; the registry provides no internal locking. Populate it
/// from a single thread during startup, then share it immutably.
pub struct Environment {
    name: String,
    backends: HashMap<BoardKind, Arc<dyn Backend>>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backends: HashMap::new(),
        }
    }

    /// Environment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `backend` under its declared board kind.
    ///
    /// # Errors
    ///
    /// - [`HalError::EnvironmentMismatch`] if the backend declares a
    ///   different environment than this one
    /// - [`HalError::BackendConflict`] if a backend is already registered
    ///   for that board kind
    pub fn register(&mut self, backend: Arc<dyn Backend>) -> Result<(), HalError> {
        if backend.environment() != self.name {
            return Err(HalError::EnvironmentMismatch {
                declared: backend.environment().to_string(),
                environment: self.name.clone(),
            });
        }
        let kind = backend.board_kind();
        if self.backends.contains_key(&kind) {
            return Err(HalError::BackendConflict {
                kind,
                environment: self.name.clone(),
            });
        }
        info!(environment = %self.name, kind = %kind, "registered backend");
        self.backends.insert(kind, backend);
        Ok(())
    }

    /// The backend registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::UnknownBoardKind`] if nothing is registered
    /// for `kind`.
    pub fn backend_for(&self, kind: BoardKind) -> Result<Arc<dyn Backend>, HalError> {
        self.backends
            .get(&kind)
            .cloned()
            .ok_or(HalError::UnknownBoardKind { kind })
    }

    /// Board kinds with a registered backend, sorted by kind string.
    pub fn board_kinds(&self) -> Vec<BoardKind> {
        let mut kinds: Vec<BoardKind> = self.backends.keys().copied().collect();
        kinds.sort_by_key(|k| k.0);
        kinds
    }
}
