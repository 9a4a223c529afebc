//! Raw values and their conversion into field types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

/// A value as found in the environment mapping.
///
/// Environment mappings usually hold text, but a mapping may also carry a
/// pre-typed boolean (e.g. one built in tests or decoded from JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// Plain text, the common case for process environments
    Text(&'a str),
    /// A boolean that was never serialized to text
    Bool(bool),
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Owned counterpart of [`RawValue`], for building environment mappings.
///
/// Deserializes untagged, so a JSON fixture like
/// `{"PORT": "8080", "DEBUG": true}` maps `DEBUG` to [`EnvValue::Bool`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Bool(bool),
    Text(String),
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Borrow a mapping value as a [`RawValue`].
pub trait AsRawValue {
    fn as_raw(&self) -> RawValue<'_>;
}

impl AsRawValue for String {
    fn as_raw(&self) -> RawValue<'_> {
        RawValue::Text(self)
    }
}

impl AsRawValue for &str {
    fn as_raw(&self) -> RawValue<'_> {
        RawValue::Text(self)
    }
}

impl AsRawValue for bool {
    fn as_raw(&self) -> RawValue<'_> {
        RawValue::Bool(*self)
    }
}

impl AsRawValue for EnvValue {
    fn as_raw(&self) -> RawValue<'_> {
        match self {
            Self::Bool(b) => RawValue::Bool(*b),
            Self::Text(s) => RawValue::Text(s),
        }
    }
}

/// Parse a raw value with boolean semantics.
///
/// A raw boolean is returned unchanged. Text is `true` only when it is
/// `"true"`, `"yes"` or `"1"`, ignoring case; anything else is `false`.
///
/// ```
/// use appconf::{parse_bool, RawValue};
///
/// assert!(parse_bool(RawValue::Text("Yes")));
/// assert!(!parse_bool(RawValue::Text("off")));
/// assert!(parse_bool(RawValue::Bool(true)));
/// ```
pub fn parse_bool(raw: RawValue<'_>) -> bool {
    match raw {
        RawValue::Bool(b) => b,
        RawValue::Text(s) => {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "yes" | "1")
        }
    }
}

/// Generic coercion from a raw value into a field type.
///
/// Fields without a custom parser are converted through this trait.
/// Implement it for your own types, usually by delegating to [`from_str`].
pub trait FromRaw: Sized {
    fn from_raw(raw: RawValue<'_>) -> Result<Self, String>;
}

/// Convert a raw value using the target type's `FromStr` implementation.
///
/// A raw boolean is converted from its text form (`"true"` / `"false"`).
pub fn from_str<T>(raw: RawValue<'_>) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let parsed = match raw {
        RawValue::Text(s) => s.parse::<T>(),
        RawValue::Bool(b) => b.to_string().parse::<T>(),
    };
    parsed.map_err(|e| e.to_string())
}

impl FromRaw for bool {
    fn from_raw(raw: RawValue<'_>) -> Result<Self, String> {
        Ok(parse_bool(raw))
    }
}

impl FromRaw for String {
    fn from_raw(raw: RawValue<'_>) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

macro_rules! impl_from_raw_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromRaw for $ty {
                fn from_raw(raw: RawValue<'_>) -> Result<Self, String> {
                    from_str(raw)
                }
            }
        )*
    };
}

impl_from_raw_via_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, PathBuf,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_truthy() {
        for s in ["true", "True", "TRUE", "yes", "YES", "1"] {
            assert!(parse_bool(RawValue::Text(s)), "{s} should be true");
        }
        assert!(parse_bool(RawValue::Bool(true)));
    }

    #[test]
    fn test_parse_bool_everything_else_is_false() {
        for s in ["false", "no", "0", "random", "", "ture", " true"] {
            assert!(!parse_bool(RawValue::Text(s)), "{s:?} should be false");
        }
        assert!(!parse_bool(RawValue::Bool(false)));
    }

    #[test]
    fn test_from_raw_integer() {
        assert_eq!(i32::from_raw(RawValue::Text("42")), Ok(42));
        assert_eq!(i32::from_raw(RawValue::Text("-7")), Ok(-7));
        assert!(u16::from_raw(RawValue::Text("abc")).is_err());
        assert!(u8::from_raw(RawValue::Text("256")).is_err());
    }

    #[test]
    fn test_from_raw_float_and_char() {
        assert_eq!(f64::from_raw(RawValue::Text("0.5")), Ok(0.5));
        assert_eq!(char::from_raw(RawValue::Text("x")), Ok('x'));
        assert!(char::from_raw(RawValue::Text("xy")).is_err());
    }

    #[test]
    fn test_from_raw_string_keeps_text() {
        assert_eq!(
            String::from_raw(RawValue::Text("hello world")),
            Ok("hello world".to_string())
        );
        assert_eq!(String::from_raw(RawValue::Bool(false)), Ok("false".to_string()));
    }

    #[test]
    fn test_from_raw_socket_addr() {
        let addr = SocketAddr::from_raw(RawValue::Text("127.0.0.1:8080")).unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_from_raw_bool_never_fails() {
        assert_eq!(bool::from_raw(RawValue::Text("maybe")), Ok(false));
        assert_eq!(bool::from_raw(RawValue::Text("1")), Ok(true));
    }

    #[test]
    fn test_env_value_deserializes_untagged() {
        let values: Vec<EnvValue> = serde_json::from_str(r#"[true, "8080"]"#).unwrap();
        assert_eq!(values, vec![EnvValue::Bool(true), EnvValue::from("8080")]);
        assert_eq!(values[0].as_raw(), RawValue::Bool(true));
        assert_eq!(values[1].as_raw(), RawValue::Text("8080"));
    }
}
