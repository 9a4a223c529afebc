//! Ready-made custom parsers for `#[conf(parser = "...")]`

use crate::value::{FromRaw, RawValue};
use serde::de::DeserializeOwned;

/// Decode the raw value as JSON.
///
/// ```
/// # use appconf::AppConfig;
/// # use std::collections::HashMap;
/// #[allow(non_snake_case)]
/// #[derive(AppConfig)]
/// struct Config {
///     #[conf(parser = "appconf::parsers::json")]
///     TAGS: Vec<String>,
/// }
///
/// # fn main() -> Result<(), appconf::ConfigError> {
/// let env = HashMap::from([("TAGS", r#"["api","v2"]"#)]);
/// let config = Config::from_env(&env)?;
/// assert_eq!(config.TAGS, vec!["api", "v2"]);
/// # Ok(())
/// # }
/// ```
pub fn json<T>(raw: RawValue<'_>) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    match raw {
        RawValue::Text(s) => serde_json::from_str(s),
        RawValue::Bool(b) => serde_json::from_value(serde_json::Value::Bool(b)),
    }
}

/// Split the raw value on commas and convert each trimmed item with
/// [`FromRaw`]. Empty items are skipped.
pub fn list<T>(raw: RawValue<'_>) -> Result<Vec<T>, String>
where
    T: FromRaw,
{
    match raw {
        RawValue::Text(s) => s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                T::from_raw(RawValue::Text(item)).map_err(|e| format!("item \"{item}\": {e}"))
            })
            .collect(),
        RawValue::Bool(b) => T::from_raw(RawValue::Bool(b)).map(|value| vec![value]),
    }
}
