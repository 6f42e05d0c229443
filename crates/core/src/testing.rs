use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::api::{DashboardApi, FetchError, Query};

/// Canned-response API. Responses are keyed by `path?key=value&..` (values
/// unencoded) first, then by bare path.
#[derive(Debug, Default)]
pub struct StubApi {
    responses: HashMap<String, Result<String, FetchError>>,
    zones: Option<Result<String, FetchError>>,
    calls: RefCell<Vec<String>>,
}

impl StubApi {
    pub fn respond(mut self, key: &str, body: &str) -> Self {
        self.responses.insert(key.to_string(), Ok(body.to_string()));
        self
    }

    pub fn fail(mut self, key: &str, error: FetchError) -> Self {
        self.responses.insert(key.to_string(), Err(error));
        self
    }

    pub fn zones(mut self, document: Result<String, FetchError>) -> Self {
        self.zones = Some(document);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl DashboardApi for StubApi {
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, FetchError> {
        let url = stub_key(path, query);
        self.calls.borrow_mut().push(url.clone());

        let body = self
            .responses
            .get(&url)
            .or_else(|| self.responses.get(path))
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Network(format!("no stub for {url}"))))?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn zone_document(&self) -> Result<String, FetchError> {
        self.calls.borrow_mut().push("zones".to_string());
        self.zones
            .clone()
            .unwrap_or_else(|| Err(FetchError::Network("no zone document".to_string())))
    }
}

fn stub_key(path: &str, query: &Query) -> String {
    let pairs: Vec<_> = query
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}
