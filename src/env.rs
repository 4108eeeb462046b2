//! Environment snapshots used as lookup capabilities by the resolvers.
//!
//! Every resolver in [`dirs`](crate::dirs) takes an [`Env`] instead of
//! touching [`std::env`] directly, so tests can supply a synthetic
//! environment without mutating process state.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// An owned snapshot of environment variables.
///
/// On Windows environment variable names are case-insensitive, so lookups
/// fall back to an ASCII-uppercased key map there.
#[derive(Debug, Clone)]
pub struct Env {
    vars: HashMap<OsString, OsString>,

    folded_vars: HashMap<OsString, OsString>,
}

/// Errors encountered when reading a variable from an [`Env`].
#[derive(Debug, Clone, Error)]
pub enum VarError {
    /// The variable `Missing.0` is not present in the snapshot.
    #[error("there is no environment variable `${0:?}`")]
    Missing(OsString),

    /// The variable `NotUnicode.0` exists but is not valid UTF-8.
    #[error("environment variable `${0:?}` is not an UTF-8 string")]
    NotUnicode(OsString),
}

impl Env {
    /// Snapshot the current process environment.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Build a snapshot from `vars` instead of the process environment.
    pub fn new_from(vars: HashMap<OsString, OsString>) -> Self {
        Self {
            folded_vars: Env::fold_map(&vars),
            vars,
        }
    }

    fn fold_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn fold_map(vars: &HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        vars.iter()
            .map(|(key, value)| (Env::fold_key(key), value.clone()))
            .collect()
    }

    /// Replace the snapshot contents with `vars`.
    pub fn reload_from(&mut self, vars: HashMap<OsString, OsString>) {
        self.folded_vars = Env::fold_map(&vars);
        self.vars = vars;
    }

    /// Replace the snapshot contents from [`std::env::vars_os`].
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get the raw value of the variable named `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` indicates a missing variable.
    ///
    /// # Examples
    /// ```rust
    /// use basedirs::env::Env;
    ///
    /// let env = Env::new();
    /// println!("$XDG_CONFIG_HOME = {:?}", env.get_os("XDG_CONFIG_HOME"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.vars.get(key) {
            Some(value) => Some(value),
            None => {
                if cfg!(target_os = "windows") {
                    self.folded_vars
                        .get(&Env::fold_key(key))
                        .map(|value| value.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Get the value of the variable named `key` as UTF-8.
    ///
    /// # Returns
    /// `Result<&str, VarError>`. `Err` distinguishes a missing variable from
    /// one that is present but not valid UTF-8, see [`VarError`].
    ///
    /// # Examples
    /// ```rust
    /// use basedirs::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _path = env.get("PATH")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, VarError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| VarError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| VarError::NotUnicode(key.to_os_string()))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok_eq, assert_some_eq};

    fn snapshot(vars: &[(&str, &str)]) -> Env {
        Env::new_from(
            vars.iter()
                .map(|(key, value)| (OsString::from(key), OsString::from(value)))
                .collect(),
        )
    }

    #[test]
    fn synthetic_lookup() {
        let env = snapshot(&[("HOME", "/home/u")]);
        assert_some_eq!(env.get_os("HOME"), OsStr::new("/home/u"));
        assert_ok_eq!(env.get("HOME"), "/home/u");
    }

    #[test]
    fn missing_variable() {
        let env = snapshot(&[]);
        assert!(env.get_os("XDG_DATA_HOME").is_none());
        assert_err!(env.get("XDG_DATA_HOME"));
    }

    #[test]
    fn reload_replaces_contents() {
        let mut env = snapshot(&[("HOME", "/home/u")]);
        env.reload_from(
            [(OsString::from("HOME"), OsString::from("/home/v"))]
                .into_iter()
                .collect(),
        );
        assert_ok_eq!(env.get("HOME"), "/home/v");
    }
}
