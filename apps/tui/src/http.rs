use crate::config::AppConfig;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use taxi_dashboard_core::api::{endpoint_url, DashboardApi, FetchError, Query};

/// reqwest-backed analytics client. The zone document is read from disk.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base: String,
    zones_path: PathBuf,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base: config.api_base.clone(),
            zones_path: config.zones_path.clone(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds the GET for `path`, letting reqwest form-encode the query.
    fn request(&self, path: &str, query: &Query) -> Result<reqwest::Request, FetchError> {
        self.client
            .get(endpoint_url(&self.base, path))
            .query(query)
            .build()
            .map_err(network)
    }
}

impl DashboardApi for HttpApi {
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, FetchError> {
        let request = self.request(path, query)?;
        log::debug!("GET {}", request.url());

        let response = self.client.execute(request).await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn zone_document(&self) -> Result<String, FetchError> {
        tokio::fs::read_to_string(&self.zones_path)
            .await
            .map_err(|error| {
                FetchError::Network(format!("{}: {error}", self.zones_path.display()))
            })
    }
}

fn network(error: reqwest::Error) -> FetchError {
    FetchError::Network(error.to_string())
}
