//! XDG Base Directory Specification resolution.
//!
//! Each directory category comes as a pair of functions: a `_from_env`
//! variant taking an explicit [`Env`] snapshot, and a convenience wrapper
//! reading the real process environment.
//!
//! ```rust,no_run
//! # use basedirs::dirs;
//! # fn foo() -> Option<()> {
//! let config = dirs::get_config_home().ok()?;
//! # None
//! # }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::env::Env;

/// `$HOME` was needed for a fallback path but is unset, empty, or relative.
///
/// There is no universally correct substitute for a missing home directory,
/// so the resolvers surface this to the caller instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the $HOME environment variable is not set to an absolute path")]
pub struct MissingHomeError;

/// Accept `value` only if it names an absolute path.
///
/// Relative or empty values are indistinguishable from unset ones as far as
/// the resolution rules are concerned.
fn absolute(value: &str) -> Option<PathBuf> {
    let path = Path::new(value);
    path.is_absolute().then(|| path.to_path_buf())
}

fn home(env: &Env) -> Result<PathBuf, MissingHomeError> {
    env.get("HOME")
        .ok()
        .and_then(absolute)
        .ok_or(MissingHomeError)
}

fn user_dir(env: &Env, var: &str, fallback: &str) -> Result<PathBuf, MissingHomeError> {
    match env.get(var).ok().and_then(absolute) {
        Some(path) => Ok(path),
        None => home(env).map(|mut home| {
            home.push(fallback);
            home
        }),
    }
}

/// Split a `*_DIRS` value on `:`, dropping empty and relative segments.
/// An unset or empty variable falls back to `default`.
fn system_dirs(env: &Env, var: &str, default: &str) -> Vec<PathBuf> {
    let value = match env.get(var).ok().filter(|value| !value.is_empty()) {
        Some(value) => value,
        None => default,
    };
    value.split(':').filter_map(absolute).collect()
}

/// Get the cache home directory from `env`.
///
/// Resolves `$XDG_CACHE_HOME`, falling back to `$HOME/.cache` when the
/// variable is unset or not an absolute path.
///
/// # Returns
///
/// Most of the time it should be [`Ok`]. [`Err`] is returned if and only if
/// the fallback was needed and `env` has no absolute `HOME`.
pub fn get_cache_home_from_env(env: &Env) -> Result<PathBuf, MissingHomeError> {
    user_dir(env, "XDG_CACHE_HOME", ".cache")
}

/// Get the cache home directory from the process environment.
///
/// See [`get_cache_home_from_env`].
pub fn get_cache_home() -> Result<PathBuf, MissingHomeError> {
    get_cache_home_from_env(&Env::new())
}

/// Get the config home directory from `env`.
///
/// Resolves `$XDG_CONFIG_HOME`, falling back to `$HOME/.config` when the
/// variable is unset or not an absolute path.
///
/// # Returns
///
/// Most of the time it should be [`Ok`]. [`Err`] is returned if and only if
/// the fallback was needed and `env` has no absolute `HOME`.
pub fn get_config_home_from_env(env: &Env) -> Result<PathBuf, MissingHomeError> {
    user_dir(env, "XDG_CONFIG_HOME", ".config")
}

/// Get the config home directory from the process environment.
///
/// See [`get_config_home_from_env`].
pub fn get_config_home() -> Result<PathBuf, MissingHomeError> {
    get_config_home_from_env(&Env::new())
}

/// Get the data home directory from `env`.
///
/// Resolves `$XDG_DATA_HOME`, falling back to `$HOME/.local/share` when the
/// variable is unset or not an absolute path.
///
/// # Returns
///
/// Most of the time it should be [`Ok`]. [`Err`] is returned if and only if
/// the fallback was needed and `env` has no absolute `HOME`.
pub fn get_data_home_from_env(env: &Env) -> Result<PathBuf, MissingHomeError> {
    user_dir(env, "XDG_DATA_HOME", ".local/share")
}

/// Get the data home directory from the process environment.
///
/// See [`get_data_home_from_env`].
pub fn get_data_home() -> Result<PathBuf, MissingHomeError> {
    get_data_home_from_env(&Env::new())
}

/// Get the config directories from `env`, highest priority first.
///
/// The first entry is always the config home as resolved by
/// [`get_config_home_from_env`]. The rest comes from `$XDG_CONFIG_DIRS`
/// (`:`-separated, empty and relative entries dropped), or `/etc/xdg` when
/// that variable is unset or empty.
///
/// # Returns
///
/// [`Err`] if and only if the embedded config home entry fails to resolve.
pub fn get_config_dirs_from_env(env: &Env) -> Result<Vec<PathBuf>, MissingHomeError> {
    let mut dirs = vec![get_config_home_from_env(env)?];
    dirs.extend(system_dirs(env, "XDG_CONFIG_DIRS", "/etc/xdg"));
    Ok(dirs)
}

/// Get the config directories from the process environment.
///
/// See [`get_config_dirs_from_env`].
pub fn get_config_dirs() -> Result<Vec<PathBuf>, MissingHomeError> {
    get_config_dirs_from_env(&Env::new())
}

/// Get the data directories from `env`, highest priority first.
///
/// The first entry is always the data home as resolved by
/// [`get_data_home_from_env`]. The rest comes from `$XDG_DATA_DIRS`
/// (`:`-separated, empty and relative entries dropped), or
/// `/usr/local/share:/usr/share` when that variable is unset or empty.
///
/// # Returns
///
/// [`Err`] if and only if the embedded data home entry fails to resolve.
pub fn get_data_dirs_from_env(env: &Env) -> Result<Vec<PathBuf>, MissingHomeError> {
    let mut dirs = vec![get_data_home_from_env(env)?];
    dirs.extend(system_dirs(env, "XDG_DATA_DIRS", "/usr/local/share:/usr/share"));
    Ok(dirs)
}

/// Get the data directories from the process environment.
///
/// See [`get_data_dirs_from_env`].
pub fn get_data_dirs() -> Result<Vec<PathBuf>, MissingHomeError> {
    get_data_dirs_from_env(&Env::new())
}

/// Get `$XDG_RUNTIME_DIR` from `env`, if present.
///
/// The value is returned as-is, with no absoluteness check and no default.
/// The specification leaves the fallback for a missing runtime directory to
/// the application, so [`None`] means the caller has to pick one.
pub fn get_runtime_dir_from_env(env: &Env) -> Option<PathBuf> {
    env.get("XDG_RUNTIME_DIR").ok().map(PathBuf::from)
}

/// Get `$XDG_RUNTIME_DIR` from the process environment, if present.
///
/// See [`get_runtime_dir_from_env`].
pub fn get_runtime_dir() -> Option<PathBuf> {
    get_runtime_dir_from_env(&Env::new())
}
