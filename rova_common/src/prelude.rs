//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types so
//! that consumers can do `use rova_common::prelude::*;` and get the most
//! important types without listing individual paths.

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, HalConfig, LogLevel, MockConfig, SharedConfig};

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::error::{BackendError, HalError};

// ─── Identity & value types ─────────────────────────────────────────
pub use crate::types::{BoardIdentity, BoardKind, ComponentKind, Interface, MotorState, PinMode};
