//! Environment mappings consulted by the loader

use crate::value::{AsRawValue, RawValue};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A read-only mapping from variable names to raw values.
///
/// The loader only ever reads through this trait, so tests can hand it a
/// plain `HashMap` instead of touching the process environment.
pub trait EnvSource {
    /// Look up `key`, returning `None` when the mapping has no entry.
    fn lookup(&self, key: &str) -> Option<RawValue<'_>>;
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRawValue,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<RawValue<'_>> {
        self.get(key).map(AsRawValue::as_raw)
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRawValue,
{
    fn lookup(&self, key: &str) -> Option<RawValue<'_>> {
        self.get(key).map(AsRawValue::as_raw)
    }
}

impl<T> EnvSource for &T
where
    T: EnvSource + ?Sized,
{
    fn lookup(&self, key: &str) -> Option<RawValue<'_>> {
        (**self).lookup(key)
    }
}

/// Snapshot the process environment into a mapping.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn process_env() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::EnvValue;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_hash_map_of_str() {
        let env = HashMap::from([("PORT", "8080")]);
        assert_eq!(env.lookup("PORT"), Some(RawValue::Text("8080")));
        assert_eq!(env.lookup("port"), None);
    }

    #[test]
    fn test_btree_map_of_string() {
        let env = BTreeMap::from([("HOST".to_string(), "localhost".to_string())]);
        assert_eq!(env.lookup("HOST"), Some(RawValue::Text("localhost")));
        assert_eq!(env.lookup("MISSING"), None);
    }

    #[test]
    fn test_mixed_env_values() {
        let env: HashMap<&str, EnvValue> =
            HashMap::from([("DEBUG", EnvValue::from(true)), ("NAME", EnvValue::from("svc"))]);
        assert_eq!(env.lookup("DEBUG"), Some(RawValue::Bool(true)));
        assert_eq!(env.lookup("NAME"), Some(RawValue::Text("svc")));
    }

    #[test]
    fn test_reference_forwards() {
        let env = HashMap::from([("A", true)]);
        let by_ref: &dyn EnvSource = &env;
        assert_eq!((&by_ref).lookup("A"), Some(RawValue::Bool(true)));
    }

    #[test]
    #[serial]
    fn test_process_env_snapshot() {
        env::set_var("APPCONF_SNAPSHOT_VAR", "snapshot");
        let snapshot = process_env();
        env::remove_var("APPCONF_SNAPSHOT_VAR");

        assert_eq!(
            snapshot.get("APPCONF_SNAPSHOT_VAR").map(String::as_str),
            Some("snapshot")
        );
        assert!(process_env().get("APPCONF_SNAPSHOT_VAR").is_none());
    }
}
