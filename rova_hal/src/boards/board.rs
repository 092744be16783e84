//! Board traits - metadata, construction and discovery.
//!
//! `Board` is the object-safe metadata surface shared by every board;
//! `BoardType` carries the per-type constants and constructors. The
//! provided `discover` implementation enforces the board/backend
//! type-consistency invariant: a backend may only ever produce boards of
//! its own declared kind.

use crate::backend::Backend;
use crate::environment::Environment;
use rova_common::error::HalError;
use rova_common::types::{BoardIdentity, BoardKind, ComponentKind};
use std::sync::Arc;
use tracing::debug;

/// A logical hardware unit exposing a fixed set of components.
pub trait Board {
    /// Board kind (always equal to the concrete type's
    /// [`BoardType::KIND`]).
    fn kind(&self) -> BoardKind;

    /// A human friendly name for this board.
    fn name(&self) -> &str;

    /// The serial number of this unit.
    fn serial(&self) -> &str;

    /// Firmware version reported by the backend, if any.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    fn firmware_version(&self) -> Result<Option<String>, HalError>;

    /// The fixed manifest of component kinds this board type exposes.
    ///
    /// Identical for every board of a given type, regardless of backend.
    fn component_kinds(&self) -> &'static [ComponentKind];

    /// Put every component on this board into a safe state.
    ///
    /// # Errors
    ///
    /// Backend failures pass through unmodified.
    fn make_safe(&self) -> Result<(), HalError>;
}

/// Constructors and discovery for a concrete board type.
pub trait BoardType: Board + Sized {
    /// The board kind backends must declare to drive this type.
    const KIND: BoardKind;

    /// Human friendly board name.
    const NAME: &'static str;

    /// Bind a board to an already-resolved backend.
    ///
    /// Implementations must reject a backend or identity whose kind
    /// disagrees with [`Self::KIND`], then construct every component in
    /// the board's manifest.
    ///
    /// # Errors
    ///
    /// - [`HalError::WrongBackend`] / [`HalError::BoardKindMismatch`] on
    ///   kind disagreement
    /// - [`HalError::MissingInterface`] if the backend lacks a capability
    ///   the manifest requires
    fn attach(identity: BoardIdentity, backend: Arc<dyn Backend>) -> Result<Self, HalError>;

    /// Construct a board with an explicit serial, resolving the backend
    /// from `environment`.
    ///
    /// # Errors
    ///
    /// - [`HalError::UnknownBoardKind`] if the environment has no backend
    ///   for this board type
    /// - everything [`BoardType::attach`] can return
    fn new(serial: &str, environment: &Environment) -> Result<Self, HalError> {
        let backend = environment.backend_for(Self::KIND)?;
        Self::attach(BoardIdentity::new(Self::KIND, serial), backend)
    }

    /// Enumerate live hardware units via `backend` and return fully
    /// constructed boards.
    ///
    /// # Errors
    ///
    /// - [`HalError::WrongBackend`] if the backend drives a different
    ///   board kind
    /// - [`HalError::BoardKindMismatch`] if the backend reports a unit of
    ///   the wrong kind
    /// - backend enumeration failures, unmodified
    fn discover(backend: Arc<dyn Backend>) -> Result<Vec<Self>, HalError> {
        let declared = backend.board_kind();
        if declared != Self::KIND {
            return Err(HalError::WrongBackend {
                expected: Self::KIND,
                actual: declared,
            });
        }

        let identities = backend.discover()?;
        debug!(kind = %Self::KIND, count = identities.len(), "discovery reported units");

        identities
            .into_iter()
            .map(|identity| {
                if identity.kind != Self::KIND {
                    return Err(HalError::BoardKindMismatch {
                        serial: identity.serial,
                        expected: Self::KIND,
                        actual: identity.kind,
                    });
                }
                Self::attach(identity, Arc::clone(&backend))
            })
            .collect()
    }
}
