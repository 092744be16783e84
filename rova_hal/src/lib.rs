//! # ROVA HAL Library
//!
//! Capability-based hardware abstraction layer with pluggable backends.
//!
//! Generic control code operates on logical components (LEDs, motors,
//! servos, sensors) without knowing which concrete backend - real
//! hardware driver or mock - implements them. A backend implements the
//! component interfaces it can support; an [`Environment`] binds each
//! board kind to exactly one backend; boards materialize their
//! components only after every required capability check has passed.
//!
//! # Module Structure
//!
//! - [`backend`] - The `Backend` trait and its capability accessors
//! - [`environment`] - Board-kind to backend registry
//! - [`components`] - Interface traits and forwarding component handles
//! - [`boards`] - Board traits, board groups, demo board
//! - [`backends`] - Shipped backend implementations (mock)
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        rova_hal                                │
//! │  ┌──────────────┐      ┌────────────┐      ┌────────────────┐  │
//! │  │ Environment  │─────►│  Backend   │◄─────│  Board         │  │
//! │  │ (registry)   │      │ (trait     │      │  + Components  │  │
//! │  └──────────────┘      │  object)   │      └───────┬────────┘  │
//! │                        └─────▲──────┘              │           │
//! │                              │   forwarding calls  │           │
//! │                              └─────────────────────┘           │
//! └────────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]

pub mod backend;
pub mod backends;
pub mod boards;
pub mod components;
pub mod environment;

// Re-export key types for convenience
pub use crate::backend::Backend;
pub use crate::boards::{Board, BoardGroup, BoardType, DemoBoard};
pub use crate::environment::Environment;
