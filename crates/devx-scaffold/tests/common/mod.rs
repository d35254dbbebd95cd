//! Common test infrastructure for devx-scaffold tests
//!
//! - `archive`: in-memory template tarballs
//! - `mock_server`: wiremock endpoints serving those tarballs
//! - `fixtures`: temporary project locations and a fake package manager

#![allow(dead_code)]

pub mod archive;
pub mod fixtures;
pub mod mock_server;

pub use archive::*;
pub use fixtures::*;
pub use mock_server::*;
