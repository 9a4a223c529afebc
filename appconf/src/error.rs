//! Error types for configuration loading

use crate::value::RawValue;

/// Errors that can occur when loading configuration from an environment mapping.
///
/// Both variants are fatal for the configuration being loaded. The loader
/// returns them to the caller, which usually hands them to
/// [`exit_with_error`](crate::exit_with_error) before any other application
/// logic runs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Occurs when a field has no default value and the environment mapping
    /// has no entry for it.
    #[error("The {name} environment variable is required")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Failed to convert the raw value into the field's type.
    ///
    /// Occurs when generic coercion ([`FromRaw`](crate::FromRaw)) or a custom
    /// parser rejects the value.
    #[error("Unable to cast value of \"{value}\" to type \"{type_name}\" for \"{name}\" field")]
    Parse {
        /// Name of the field (and environment variable) being converted
        name: String,
        /// Raw value as found in the environment mapping
        value: String,
        /// Fully qualified type name that conversion was attempted for
        type_name: String,
        /// Error message from the parser
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error (used by macro-generated code)
    #[doc(hidden)]
    pub fn parse_error<T>(
        name: impl Into<String>,
        value: RawValue<'_>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            name: name.into(),
            value: value.to_string(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing environment variable error (used by macro-generated code)
    #[doc(hidden)]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Name of the field the error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name } | Self::Parse { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = ConfigError::missing("DATABASE_URL");
        assert_eq!(
            err.to_string(),
            "The DATABASE_URL environment variable is required"
        );
        assert_eq!(err.name(), "DATABASE_URL");
    }

    #[test]
    fn test_parse_message_mentions_value_type_and_field() {
        let err = ConfigError::parse_error::<u16>(
            "PORT",
            RawValue::Text("abc"),
            "invalid digit found in string",
        );
        assert_eq!(
            err.to_string(),
            "Unable to cast value of \"abc\" to type \"u16\" for \"PORT\" field"
        );

        match err {
            ConfigError::Parse { message, .. } => {
                assert_eq!(message, "invalid digit found in string");
            }
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_parse_error_from_bool_value() {
        let err = ConfigError::parse_error::<u8>("LEVEL", RawValue::Bool(true), "nope");
        assert!(matches!(err, ConfigError::Parse { ref value, .. } if value == "true"));
    }
}
