// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub simulate_latency: bool,
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl AppConfig {
    /// Load configuration based on environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            anyhow::bail!("config.yaml not found in current directory. Server cannot start without configuration.");
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        Ok(match environment.as_str() {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn get_environment() -> String {
        std::env::var("JOBHUB_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn latency(&self) -> Latency {
        if self.simulate_latency {
            Latency::realistic()
        } else {
            Latency::none()
        }
    }
}

/// Simulated I/O pauses standing in for network and chain round trips.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    pub connect: Duration,
    pub payment: Duration,
    pub read: Duration,
    pub write: Duration,
}

impl Latency {
    /// Timer profile of the mocked upstream calls.
    pub fn realistic() -> Self {
        Self {
            connect: Duration::from_millis(2000),
            payment: Duration::from_millis(3000),
            read: Duration::from_millis(400),
            write: Duration::from_millis(800),
        }
    }

    /// No pauses. Keeps the test suite free of wall-clock waits.
    pub fn none() -> Self {
        Self {
            connect: Duration::ZERO,
            payment: Duration::ZERO,
            read: Duration::ZERO,
            write: Duration::ZERO,
        }
    }
}

pub async fn simulate_delay(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
