//! ROVA Common Library
//!
//! This crate provides the shared vocabulary of the ROVA workspace: board
//! and component identity types, the error taxonomy, and configuration
//! loading utilities.
//!
//! # Module Structure
//!
//! - [`config`] - Configuration loading traits and types
//! - [`error`] - Bind-time and backend error types
//! - [`types`] - Board, component and interface identity types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use rova_common::prelude::*;
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
