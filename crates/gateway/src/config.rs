use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let upstream_base_url = std::env::var("UPSTREAM_BASE_URL")
            .context("Missing environment variable: UPSTREAM_BASE_URL")?;

        let request_timeout_secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECS must be a valid u64 integer")?;

        Ok(Self {
            port,
            upstream_base_url,
            request_timeout_secs,
        })
    }
}
