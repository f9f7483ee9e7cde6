//! Core types and configuration for prbuild.
//!
//! This crate defines the `prbuild.toml` schema ([`PrbuildConfig`]), the
//! pull request descriptor ([`PrDescriptor`]), the CMake build-variable
//! reader, the version-template resolver, and shared error types.

pub mod cmake;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod version;

pub use config::{GitConfig, ObsConfig, PrbuildConfig, WorkspaceConfig};
pub use descriptor::PrDescriptor;
pub use error::{Error, Result};
