//! Shipped backend implementations.
//!
//! This module contains the backend implementations distributed with the
//! HAL:
//!
//! - [`mock`] - deterministic in-memory backends for development and
//!   testing
//!
//! # Adding New Backends
//!
//! 1. Create a new submodule under `backends/`
//! 2. Implement the [`Backend`](crate::backend::Backend) trait plus the
//!    component interfaces the hardware supports
//! 3. Register an instance in the target `Environment`

pub mod mock;

pub use mock::{MOCK_ENVIRONMENT_NAME, MockDemoBackend};

use crate::environment::Environment;
use rova_common::config::MockConfig;
use rova_common::error::HalError;
use std::sync::Arc;

/// Build the standard mock environment with every shipped mock backend
/// registered.
///
/// # Errors
///
/// Registration errors are impossible for a freshly built environment
/// but are surfaced rather than unwrapped.
pub fn mock_environment(config: &MockConfig) -> Result<Environment, HalError> {
    let mut environment = Environment::new(MOCK_ENVIRONMENT_NAME);
    environment.register(Arc::new(MockDemoBackend::new(config.clone())))?;
    Ok(environment)
}
