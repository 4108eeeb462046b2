//! Basedirs - XDG Base Directory Specification path resolution.
//!
//! This crate computes the standard cache, config, data, and runtime file
//! locations defined by the freedesktop.org XDG Base Directory Specification.
//! It only reads environment variables and applies the documented fallbacks;
//! it performs no filesystem I/O and creates no directories.
//!
//! ```rust,no_run
//! # use basedirs::dirs;
//! # fn foo() -> Option<()> {
//! let config_home = dirs::get_config_home().ok()?;
//! let config_dirs = dirs::get_config_dirs().ok()?;
//! # None
//! # }
//! ```

pub mod dirs;
pub mod env;
