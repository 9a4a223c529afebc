//! Example demonstrating fail-fast loading from the process environment
//!
//! Run without `SERVICE_PORT` to see the error report:
//!
//! ```text
//! $ cargo run --example fail_fast
//!
//! [error]: The SERVICE_PORT environment variable is required
//!
//! ```

#![allow(non_snake_case)]

use appconf::AppConfig;

#[derive(Debug, AppConfig)]
struct Config {
    SERVICE_PORT: u16,

    #[conf(default = "info".to_string())]
    SERVICE_LOG: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Exits with status 1 and an "[error]: ..." line when the
    // configuration is invalid
    let config = Config::load_or_exit(&appconf::process_env());

    println!("Starting service with {config}");
}
