//! Basic usage example

#![allow(non_snake_case)]

use appconf::AppConfig;
use std::collections::HashMap;

#[derive(Debug, AppConfig)]
struct Config {
    // Required field: loaded from DATABASE_URL
    DATABASE_URL: String,

    // With default value
    #[conf(default = "127.0.0.1:8080".to_string())]
    SERVER_ADDR: String,

    // Numeric type
    #[conf(default = 10)]
    MAX_CONNECTIONS: u32,

    // Boolean type: "true", "yes" and "1" are true
    #[conf(default = false)]
    DEBUG_MODE: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Any mapping works; use appconf::process_env() for the real environment
    let env = HashMap::from([
        ("DATABASE_URL", "postgres://localhost/mydb"),
        ("SERVER_ADDR", "0.0.0.0:3000"),
        ("DEBUG_MODE", "yes"),
    ]);

    // Load configuration
    let config = Config::from_env(&env)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.DATABASE_URL);
    println!("  Server Address: {}", config.SERVER_ADDR);
    println!("  Max Connections: {}", config.MAX_CONNECTIONS);
    println!("  Debug Mode: {}", config.DEBUG_MODE);
    println!("  As a whole: {config}");

    Ok(())
}
