//! Error types for binding, registry and backend operations.
//!
//! Two layers, split by when the failure can occur:
//! - [`HalError`] - bind-time failures: capability checks at component
//!   construction, registry registration and lookup, discovery
//!   validation. Always fatal to the construction or call in progress,
//!   never retried internally.
//! - [`BackendError`] - operation-time failures raised by a backend
//!   implementation. The core passes these through to the caller
//!   unmodified; [`HalError::Backend`] is a transparent carrier so a
//!   single error type can flow out of component operations.

use crate::types::{BoardKind, ComponentKind, Interface, PinMode};
use thiserror::Error;

/// Operation-time failure raised by a backend implementation.
///
/// The core never retries, wraps or suppresses these. Whether an error is
/// transient is the backend's business; the caller decides what to do.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    /// Communication with the hardware unit failed.
    #[error("communication failed: {0}")]
    Communication(String),

    /// The backend has no unit matching the addressed board/component.
    #[error("board '{serial}' has no {component} with identifier {identifier}")]
    UnknownUnit {
        /// Serial of the addressed board.
        serial: String,
        /// Component kind that was addressed.
        component: ComponentKind,
        /// Component identifier that was addressed.
        identifier: u8,
    },

    /// The backend cannot express the requested value on its hardware.
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

/// Bind-time, registry and validation errors.
///
/// Everything here signals a configuration bug (wrong backend wired to a
/// board or component) or a broken backend contract, and is surfaced
/// synchronously to the immediate caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HalError {
    /// A component was bound to a backend that does not implement one of
    /// its required interfaces.
    #[error("{component} component requires the {interface} interface, which the backend does not implement")]
    MissingInterface {
        /// Kind of the component being constructed.
        component: ComponentKind,
        /// The interface the backend was missing.
        interface: Interface,
    },

    /// No backend is registered for the requested board kind.
    #[error("no backend registered for board kind '{kind}'")]
    UnknownBoardKind {
        /// The board kind that was looked up.
        kind: BoardKind,
    },

    /// A backend is already registered for this board kind.
    #[error("a backend for board kind '{kind}' is already registered in environment '{environment}'")]
    BackendConflict {
        /// The contested board kind.
        kind: BoardKind,
        /// Name of the environment the registration targeted.
        environment: String,
    },

    /// The backend declares a different environment than the registry it
    /// was registered into.
    #[error("backend belongs to environment '{declared}', cannot register in '{environment}'")]
    EnvironmentMismatch {
        /// Environment name declared by the backend.
        declared: String,
        /// Name of the environment the registration targeted.
        environment: String,
    },

    /// A board was bound to a backend that drives a different board kind.
    #[error("backend drives board kind '{actual}', expected '{expected}'")]
    WrongBackend {
        /// Kind of the board being constructed.
        expected: BoardKind,
        /// Kind the backend declares.
        actual: BoardKind,
    },

    /// Discovery reported a unit whose kind disagrees with the backend's
    /// declared board kind.
    #[error("discovered board '{serial}' reports kind '{actual}', expected '{expected}'")]
    BoardKindMismatch {
        /// Serial of the offending unit.
        serial: String,
        /// The backend's declared board kind.
        expected: BoardKind,
        /// The kind the unit reported.
        actual: BoardKind,
    },

    /// A GPIO pin was asked for a mode outside its supported set.
    #[error("pin {identifier} does not support {mode} mode")]
    UnsupportedPinMode {
        /// Pin identifier.
        identifier: u8,
        /// The rejected mode.
        mode: PinMode,
    },

    /// A GPIO pin operation was attempted in an incompatible mode.
    #[error("cannot {operation} while pin {identifier} is in {actual} mode")]
    PinModeViolation {
        /// Pin identifier.
        identifier: u8,
        /// Mode the pin is currently in.
        actual: PinMode,
        /// The attempted operation.
        operation: &'static str,
    },

    /// A commanded value lies outside the component's accepted range.
    #[error("{component} value {value} out of range {min}..={max}")]
    OutOfRange {
        /// Kind of the component that rejected the value.
        component: ComponentKind,
        /// The rejected value.
        value: f64,
        /// Lower bound of the accepted range.
        min: f64,
        /// Upper bound of the accepted range.
        max: f64,
    },

    /// A singular accessor was used on an empty board group.
    #[error("no '{kind}' boards were discovered")]
    NoBoards {
        /// Board kind of the group.
        kind: BoardKind,
    },

    /// A singular accessor was used on a board group with several members.
    #[error("expected exactly one '{kind}' board, found {count}")]
    MultipleBoards {
        /// Board kind of the group.
        kind: BoardKind,
        /// Number of boards actually present.
        count: usize,
    },

    /// A backend operation failed; carried through unmodified.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
