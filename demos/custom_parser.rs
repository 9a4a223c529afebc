//! Example demonstrating custom parser functions

#![allow(non_snake_case)]

use appconf::{AppConfig, RawValue};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    host: String,
    port: u16,
}

fn seconds(raw: RawValue<'_>) -> Result<Duration, std::num::ParseIntError> {
    raw.to_string().parse().map(Duration::from_secs)
}

#[derive(Debug, AppConfig)]
struct Config {
    // Default: uses FromRaw
    APP_NAME: String,

    // Custom function
    #[conf(parser = "seconds", default = Duration::from_secs(30))]
    TIMEOUT: Duration,

    // Comma-separated list
    #[conf(parser = "appconf::parsers::list")]
    ALLOWED_PORTS: Vec<u16>,

    // JSON format (serde_json)
    #[conf(parser = "appconf::parsers::json")]
    DATABASE: DatabaseConfig,

    // Resolved to Config::parse_region
    #[conf(parser)]
    REGION: String,
}

impl Config {
    fn parse_region(raw: RawValue<'_>) -> Result<String, String> {
        let region = raw.to_string().to_lowercase();
        if matches!(region.as_str(), "eu" | "us" | "ap") {
            Ok(region)
        } else {
            Err(format!("unsupported region {region}"))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env = HashMap::from([
        ("APP_NAME", "my-app"),
        ("ALLOWED_PORTS", "80, 443"),
        ("DATABASE", r#"{"host":"localhost","port":5432}"#),
        ("REGION", "EU"),
    ]);

    let config = Config::from_env(&env)?;

    println!("Configuration loaded:");
    println!("  App Name: {}", config.APP_NAME);
    println!("  Timeout: {:?}", config.TIMEOUT);
    println!("  Allowed Ports: {:?}", config.ALLOWED_PORTS);
    println!(
        "  Database: {}:{}",
        config.DATABASE.host, config.DATABASE.port
    );
    println!("  Region: {}", config.REGION);

    Ok(())
}
