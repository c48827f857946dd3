//! Test utilities for HTTP-level testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - A fake token verifier standing in for `/v1/auth/verify`
//! - An in-process Authon API for routes that proxy user management calls
//! - `TestAppStateBuilder` for wiring it all into an `AppState`

mod app_state_builder;
mod auth_mocks;
mod factories;
mod upstream;

pub use app_state_builder::*;
pub use auth_mocks::*;
pub use factories::*;
pub use upstream::*;
