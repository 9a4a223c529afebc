//! The `AppConfig` trait implemented by `#[derive(AppConfig)]`

use crate::env::{process_env, EnvSource};
use crate::error::ConfigError;
use crate::report::{exit_with_error, DEFAULT_EXIT_CODE};
use std::fmt;

/// Static description of one environment-backed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, which is also the environment variable name
    pub name: &'static str,
    /// Declared type as written in the struct
    pub type_name: &'static str,
    /// Whether a default is used when the variable is not set
    pub has_default: bool,
    /// Whether a custom parser replaces generic coercion
    pub has_parser: bool,
}

/// A configuration loaded from an environment mapping.
///
/// Do not implement this by hand; use `#[derive(AppConfig)]`.
pub trait AppConfig: Sized {
    /// Environment-backed fields in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Load configuration from `env`.
    ///
    /// Fields are resolved in declaration order and the first failure is
    /// returned.
    ///
    /// # Errors
    ///
    /// - A field without default has no entry in `env`
    /// - A value cannot be converted into its field's type
    fn from_env<E>(env: &E) -> Result<Self, ConfigError>
    where
        E: EnvSource + ?Sized;

    /// Loaded fields with their current values, in declaration order.
    fn entries(&self) -> Vec<(&'static str, &dyn fmt::Debug)>;

    /// Load configuration from a snapshot of the process environment.
    fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_env(&process_env())
    }

    /// Load configuration from `env`, or report the error on stderr and
    /// exit with [`DEFAULT_EXIT_CODE`].
    fn load_or_exit<E>(env: &E) -> Self
    where
        E: EnvSource + ?Sized,
    {
        match Self::from_env(env) {
            Ok(config) => config,
            Err(e) => exit_with_error(e, DEFAULT_EXIT_CODE),
        }
    }
}
