//! Boards - aggregates of components bound to one backend.
//!
//! - [`board`] - the `Board` / `BoardType` traits, construction and
//!   discovery
//! - [`group`] - deterministic collections of boards of one type
//! - [`demo`] - a three-LED demonstration board

pub mod board;
pub mod demo;
pub mod group;

pub use board::{Board, BoardType};
pub use demo::DemoBoard;
pub use group::BoardGroup;
