//! stowage-platform: host identity and OS integration for stowage
//!
//! This crate provides cross-platform abstractions for:
//! - OS and architecture detection, gathered once into a value
//! - App-data and home path resolution
//! - Launching external resources (default browser, file manager)

pub mod arch;
pub mod error;
pub mod host;
pub mod launch;
pub mod os;
pub mod paths;

pub use arch::Arch;
pub use error::PlatformError;
pub use host::HostInfo;
pub use launch::{open_url, reveal_in_file_manager};
pub use os::Os;
pub use paths::{app_data_dir, home_dir};
