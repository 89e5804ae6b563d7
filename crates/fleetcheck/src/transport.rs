//! Delivers serialized snapshots to the remote log endpoint and reads
//! rows back for the audit view.
//!
//! Submission is fire-and-forget: the remote mirror is a best-effort
//! audit trail, the locally produced artifact is authoritative. Failures
//! come back as a [`SyncOutcome`] value for the caller to log, never as
//! an error that would block the finalize workflow.

use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

use crate::error::TransportError;
use crate::rowmap::RawRow;
use crate::snapshot::LogPayload;

/// Result of a snapshot submission. Deliberately a value, not an error:
/// tests and callers assert on it instead of on log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The write was handed to the remote endpoint. No acknowledgment
    /// contract exists, so this only means the request settled.
    Delivered,
    Failed { reason: String },
}

impl SyncOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SyncOutcome::Delivered)
    }
}

pub struct SyncClient {
    http: Client,
}

impl Default for SyncClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// POSTs the payload to the endpoint. The response body is never
    /// read; the reference transport provides nothing readable. No
    /// retries, no durability across a restart.
    pub async fn submit(&self, endpoint: &str, payload: &LogPayload) -> SyncOutcome {
        debug!("Submitting inspection {} to {}", payload.id, endpoint);
        match self.http.post(endpoint).json(payload).send().await {
            Ok(_) => {
                info!("Inspection {} submitted to remote log", payload.id);
                SyncOutcome::Delivered
            }
            Err(e) => {
                debug!("Remote submission failed: {}", e);
                SyncOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Fetches the log rows (`action=getLogs`), newest first. Row values
    /// of any JSON type coerce to strings; nulls become empty strings.
    pub async fn fetch_logs(&self, endpoint: &str) -> Result<Vec<RawRow>, TransportError> {
        debug!("Fetching audit log rows from {}", endpoint);
        let response = self
            .http
            .get(endpoint)
            .query(&[("action", "getLogs")])
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed {
                url: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| TransportError::DecodeResponse(e.to_string()))?;

        Ok(rows
            .iter()
            .filter_map(Value::as_object)
            .map(row_from_json)
            .collect())
    }
}

/// Coerces one untyped JSON row object into a [`RawRow`]. Keys pass
/// through verbatim (the remote already emits canonical or slugified
/// keys); values become strings so downstream string handling never sees
/// a null.
pub fn row_from_json(object: &serde_json::Map<String, Value>) -> RawRow {
    object
        .iter()
        .map(|(key, value)| (key.clone(), json_value_to_string(value)))
        .collect()
}

fn json_value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
