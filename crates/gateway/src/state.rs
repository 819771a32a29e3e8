use crate::{config::Config, di::DependenciesInject, service::UpstreamClient};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));

        info!(base_url = %config.upstream_base_url, "initializing upstream client");
        let upstream = Arc::new(
            UpstreamClient::new(
                config.upstream_base_url.clone(),
                Duration::from_secs(config.request_timeout_secs),
            )
            .context("Failed to create upstream client")?,
        );

        let di_container = DependenciesInject::new(upstream, registry.clone()).await;

        Ok(Self {
            di_container,
            registry,
        })
    }
}
