//! Typed application configuration from an environment mapping
//!
//! `appconf` loads a flat struct from a mapping of variable names to string
//! values, using each field's declared type as the parsing contract. The
//! mapping is passed in explicitly, so the loader never reads the process
//! environment behind your back and tests can inject any `HashMap`.
//!
//! # Features
//!
//! - **Declarative**: Automatic implementation with `#[derive(AppConfig)]`
//! - **Upper-case fields only**: `PORT` is loaded from `PORT`; lower-case fields stay internal
//! - **Type-safe**: Custom parsers are checked against the field type at compile time
//! - **Default values**: Support for `Default` trait and explicit values
//! - **Fail-fast**: [`AppConfig::load_or_exit`] reports `[error]: ...` and exits with status 1
//!
//! # Value Parsing
//!
//! **Default (using [`FromRaw`], which delegates to `FromStr`)**:
//! - Strings: `DATABASE_URL=postgres://localhost/db`
//! - Numbers: `MAX_CONNECTIONS=42`
//! - Booleans: `true`, `yes` and `1` (any case) are true; everything else is false
//!
//! **Custom parsers** - specify with `#[conf(parser = "function")]`:
//! - JSON: `#[conf(parser = "appconf::parsers::json")]`
//! - Comma-separated: `#[conf(parser = "appconf::parsers::list")]`
//! - Custom: any `fn(RawValue<'_>) -> Result<T, E>` where `E: Display`
//!
//! # Example
//!
//! ```rust
//! use appconf::AppConfig;
//! use std::collections::HashMap;
//!
//! #[allow(non_snake_case)]
//! #[derive(Debug, AppConfig)]
//! struct Config {
//!     DATABASE_URL: String,
//!
//!     #[conf(default = 8080)]
//!     PORT: u16,
//!
//!     #[conf(default)]
//!     DEBUG: bool,
//!
//!     // Internal: never read from the environment
//!     request_count: u64,
//! }
//!
//! # fn main() -> Result<(), appconf::ConfigError> {
//! let env = HashMap::from([
//!     ("DATABASE_URL", "postgres://localhost/db"),
//!     ("DEBUG", "yes"),
//!     ("request_count", "10"),
//! ]);
//! let config = Config::from_env(&env)?;
//!
//! assert_eq!(config.PORT, 8080);
//! assert!(config.DEBUG);
//! assert_eq!(config.request_count, 0);
//! assert_eq!(
//!     config.to_string(),
//!     r#"{"DATABASE_URL": "postgres://localhost/db", "PORT": 8080, "DEBUG": true}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! In `main`, hand the process environment to [`AppConfig::load_or_exit`]:
//!
//! ```rust,no_run
//! # use appconf::AppConfig;
//! # #[allow(non_snake_case)]
//! # #[derive(AppConfig)]
//! # struct Config { PORT: u16 }
//! fn main() {
//!     let config = Config::load_or_exit(&appconf::process_env());
//!     println!("{config}");
//! }
//! ```
//!
//! # Attributes
//!
//! ## `#[conf(default = value)]` / `#[conf(default)]`
//!
//! Use a typed value, or `Default::default()`, when the variable is not set.
//! A variable that is set always wins over the default.
//!
//! ## `#[conf(parser = "path")]` / `#[conf(parser)]`
//!
//! Replace generic coercion with a function. Without a path, the parser is
//! the associated function `parse_<field name in lower case>`:
//!
//! ```rust
//! # use appconf::{AppConfig, RawValue};
//! # use std::collections::HashMap;
//! #[allow(non_snake_case)]
//! #[derive(AppConfig)]
//! struct Config {
//!     #[conf(parser)]
//!     LOG_LEVEL: u8,
//! }
//!
//! impl Config {
//!     fn parse_log_level(raw: RawValue<'_>) -> Result<u8, String> {
//!         match raw.to_string().as_str() {
//!             "debug" => Ok(0),
//!             "info" => Ok(1),
//!             other => Err(format!("unknown level {other}")),
//!         }
//!     }
//! }
//!
//! let config = Config::from_env(&HashMap::from([("LOG_LEVEL", "info")])).unwrap();
//! assert_eq!(config.LOG_LEVEL, 1);
//! ```
//!
//! A parser must return exactly the field's type. Anything else is rejected
//! at compile time:
//!
//! ```rust,compile_fail
//! # use appconf::{AppConfig, RawValue};
//! fn parse_port(raw: RawValue<'_>) -> Result<u32, String> {
//!     raw.to_string().parse().map_err(|_| "bad port".to_string())
//! }
//!
//! #[allow(non_snake_case)]
//! #[derive(AppConfig)]
//! struct Config {
//!     #[conf(parser = "parse_port")]
//!     PORT: u16,
//! }
//! ```

// Macro-generated code refers to `::appconf`, including inside this crate.
extern crate self as appconf;

mod config;
#[doc(hidden)]
pub mod de;
mod env;
mod error;
pub mod parsers;
mod report;
mod value;

pub use appconf_derive::AppConfig;
pub use config::{AppConfig, FieldDescriptor};
pub use env::{process_env, EnvSource};
pub use error::ConfigError;
pub use report::{exit_with_error, format_error, DEFAULT_EXIT_CODE};
pub use value::{from_str, parse_bool, AsRawValue, EnvValue, FromRaw, RawValue};
