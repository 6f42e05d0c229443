use crate::http::HttpApi;
use std::sync::Arc;
use taxi_dashboard_core::{execute, DashboardRequest, DashboardUpdate};
use tokio::sync::mpsc;

/// Runs dashboard requests on the tokio runtime and collects their updates.
///
/// Every request gets its own task, so a slow or failing endpoint never holds
/// up another. Completed batches are picked up by [`AppActions::drain`] on the
/// UI thread.
#[derive(Debug)]
pub struct AppActions {
    api: Arc<HttpApi>,
    tx: mpsc::UnboundedSender<Vec<DashboardUpdate>>,
    rx: mpsc::UnboundedReceiver<Vec<DashboardUpdate>>,
    in_flight: usize,
}

impl AppActions {
    pub fn new(api: HttpApi) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api: Arc::new(api),
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn api(&self) -> &HttpApi {
        &self.api
    }

    pub fn dispatch(&mut self, request: DashboardRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let updates = execute(api.as_ref(), request).await;
            if tx.send(updates).is_err() {
                log::debug!("Dashboard closed before a request finished");
            }
        });
    }

    /// Everything that finished since the last call, in completion order.
    pub fn drain(&mut self) -> Vec<DashboardUpdate> {
        let mut updates = Vec::new();
        while let Ok(batch) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            updates.extend(batch);
        }
        updates
    }

    /// Waits for the next finished request. `None` once nothing is pending.
    pub async fn next(&mut self) -> Option<Vec<DashboardUpdate>> {
        if self.in_flight == 0 {
            return None;
        }
        let batch = self.rx.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(batch)
    }

    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }
}
