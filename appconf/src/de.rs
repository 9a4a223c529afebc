//! Field resolution against an environment mapping

use crate::env::EnvSource;
use crate::error::ConfigError;
use crate::value::{FromRaw, RawValue};

/// Resolve one field.
///
/// Looks `name` up in `env` and converts the raw value with `convert`.
/// When the mapping has no entry, `default` is returned as-is, or
/// [`ConfigError::Missing`] if there is none.
///
/// Used by macro-generated code, directly for fields with a custom parser.
#[doc(hidden)]
pub fn resolve<T, E, P>(
    env: &E,
    name: &str,
    default: Option<T>,
    convert: P,
) -> Result<T, ConfigError>
where
    E: EnvSource + ?Sized,
    P: FnOnce(RawValue<'_>) -> Result<T, String>,
{
    let Some(raw) = env.lookup(name) else {
        return match default {
            Some(value) => {
                tracing::debug!(field = name, source = "default", "resolved configuration field");
                Ok(value)
            }
            None => {
                tracing::warn!(field = name, "required configuration field is not set");
                Err(ConfigError::missing(name))
            }
        };
    };

    match convert(raw) {
        Ok(value) => {
            tracing::debug!(field = name, source = "environment", "resolved configuration field");
            Ok(value)
        }
        Err(message) => {
            tracing::warn!(
                field = name,
                type_name = std::any::type_name::<T>(),
                "configuration field could not be converted"
            );
            Err(ConfigError::parse_error::<T>(name, raw, message))
        }
    }
}

/// Load a required value using [`FromRaw`]
///
/// Used by the derive macro for fields without default values.
#[doc(hidden)]
pub fn resolve_required<T, E>(env: &E, name: &str) -> Result<T, ConfigError>
where
    T: FromRaw,
    E: EnvSource + ?Sized,
{
    resolve(env, name, None, T::from_raw)
}

/// Load a value with a default using [`FromRaw`]
///
/// Used by the derive macro for fields with default values.
#[doc(hidden)]
pub fn resolve_with_default<T, E>(env: &E, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromRaw,
    E: EnvSource + ?Sized,
{
    resolve(env, name, Some(default), T::from_raw)
}
