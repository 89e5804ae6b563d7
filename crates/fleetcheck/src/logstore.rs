//! Boundary trait for the remote append-only row store, plus the
//! in-memory implementation used by tests and local runs.
//!
//! The real store is a spreadsheet behind a script endpoint: one
//! denormalized row per finalized inspection, headers human-editable,
//! no locking and no multi-row atomicity. The trait models exactly the
//! two operations the system relies on.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::rowmap::{map_row, RawRow};
use crate::snapshot::LogPayload;
use crate::transport::SyncClient;

/// Read-back is capped; older rows fall off the audit listing.
pub const MAX_LOG_ROWS: usize = 1000;

/// The header row the store writes when it creates its sheet.
pub const SHEET_HEADERS: [&str; 12] = [
    "ID",
    "Data",
    "Viatura",
    "Placa",
    "Periodicidade",
    "KM",
    "Conferente",
    "Resumo Status",
    "Detalhes Itens JSON",
    "Espelho Fiel JSON",
    "Observações",
    "Foto da Conferência",
];

#[async_trait]
pub trait LogStore: Send + Sync {
    /// Appends one denormalized row. Rows are never updated or deleted.
    async fn append(&self, payload: &LogPayload) -> Result<(), TransportError>;

    /// All rows, most recent first, capped at [`MAX_LOG_ROWS`].
    async fn read_all(&self) -> Result<Vec<RawRow>, TransportError>;
}

struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Append-only store backed by process memory. Auto-creates its sheet on
/// first append, like the remote does when the tab is missing.
#[derive(Default)]
pub struct InMemoryLogStore {
    sheet: Mutex<Option<Sheet>>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of data rows currently stored.
    pub fn len(&self) -> usize {
        self.sheet
            .lock()
            .expect("log store lock poisoned")
            .as_ref()
            .map_or(0, |s| s.rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn append(&self, payload: &LogPayload) -> Result<(), TransportError> {
        let mut guard = self.sheet.lock().expect("log store lock poisoned");
        let sheet = guard.get_or_insert_with(|| Sheet {
            headers: SHEET_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        });

        let id = if payload.id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            payload.id.clone()
        };

        sheet.rows.push(vec![
            id,
            payload.date.clone(),
            payload.prefix.clone(),
            payload.plate.clone(),
            payload.checklist_type.clone(),
            payload.km.clone(),
            payload.inspector.clone(),
            payload.items_status.clone(),
            payload.items_detail.clone(),
            payload.full_data.clone(),
            payload.general_observation.clone(),
            payload.screenshot.clone(),
        ]);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<RawRow>, TransportError> {
        let guard = self.sheet.lock().expect("log store lock poisoned");
        let Some(sheet) = guard.as_ref() else {
            return Ok(Vec::new());
        };

        Ok(sheet
            .rows
            .iter()
            .rev()
            .take(MAX_LOG_ROWS)
            .map(|values| map_row(&sheet.headers, values))
            .collect())
    }
}

/// Adapts the HTTP transport onto the store trait for read-mostly
/// audit-view use.
pub struct HttpLogStore {
    client: SyncClient,
    endpoint: String,
}

impl HttpLogStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: SyncClient::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LogStore for HttpLogStore {
    async fn append(&self, payload: &LogPayload) -> Result<(), TransportError> {
        match self.client.submit(&self.endpoint, payload).await {
            crate::transport::SyncOutcome::Delivered => Ok(()),
            crate::transport::SyncOutcome::Failed { reason } => {
                Err(TransportError::RequestFailed {
                    url: self.endpoint.clone(),
                    reason,
                })
            }
        }
    }

    async fn read_all(&self) -> Result<Vec<RawRow>, TransportError> {
        self.client.fetch_logs(&self.endpoint).await
    }
}
