use serde::de::DeserializeOwned;
use taxi_dashboard_core::api::{endpoint_url, DashboardApi, FetchError, Query, DEFAULT_API_BASE};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, UrlSearchParams};

/// Zone boundaries are served next to the page.
const ZONES_DOCUMENT: &str = "taxi_zones.geojson";

/// Browser `fetch` client for the analytics API.
pub struct FetchApi {
    base: String,
}

impl FetchApi {
    /// Uses `TAXI_API_BASE` from the build environment when set.
    pub fn from_build_env() -> Self {
        Self {
            base: option_env!("TAXI_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl DashboardApi for FetchApi {
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, FetchError> {
        let url = with_query(endpoint_url(&self.base, path), &encode_query(query)?);
        let body = fetch_text(&url, RequestMode::Cors).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn zone_document(&self) -> Result<String, FetchError> {
        fetch_text(ZONES_DOCUMENT, RequestMode::SameOrigin).await
    }
}

/// Form-encodes the query with the browser's `URLSearchParams`.
fn encode_query(query: &Query) -> Result<String, FetchError> {
    let params = UrlSearchParams::new().map_err(network)?;
    for (key, value) in query {
        params.append(key, value);
    }
    Ok(params.to_string().into())
}

fn with_query(mut url: String, encoded: &str) -> String {
    if !encoded.is_empty() {
        url.push('?');
        url.push_str(encoded);
    }
    url
}

async fn fetch_text(url: &str, mode: RequestMode) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(mode);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network)?;
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let response: Response = response_value.dyn_into().map_err(network)?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    text.as_string()
        .ok_or_else(|| FetchError::Decode(format!("{url}: body is not text")))
}

fn network(error: JsValue) -> FetchError {
    FetchError::Network(
        error
            .as_string()
            .unwrap_or_else(|| format!("{error:?}")),
    )
}
