//! Example demonstrating Default trait usage and internal fields

#![allow(non_snake_case)]

use appconf::AppConfig;
use std::collections::HashMap;

#[derive(Debug, AppConfig)]
struct Config {
    // Required field
    APP_NAME: String,

    // Use Default::default() if not set
    #[conf(default)]
    OPTIONAL_STRING: String, // ""

    #[conf(default)]
    OPTIONAL_NUMBER: u32, // 0

    #[conf(default)]
    OPTIONAL_BOOL: bool, // false

    // Not upper-case: never loaded, starts as Default::default()
    started_at: Option<std::time::Instant>,
}

fn main() -> anyhow::Result<()> {
    let env = HashMap::from([("APP_NAME", "demo-app"), ("OPTIONAL_NUMBER", "42")]);

    let mut config = Config::from_env(&env)?;
    config.started_at = Some(std::time::Instant::now());

    println!("Configuration loaded:");
    println!("  App Name: {}", config.APP_NAME);
    println!("  Optional String: {:?}", config.OPTIONAL_STRING);
    println!("  Optional Number: {}", config.OPTIONAL_NUMBER);
    println!("  Optional Bool: {}", config.OPTIONAL_BOOL);
    println!("  Started: {}", config.started_at.is_some());

    for field in Config::FIELDS {
        println!(
            "  {} ({}) default={} parser={}",
            field.name, field.type_name, field.has_default, field.has_parser
        );
    }

    Ok(())
}
