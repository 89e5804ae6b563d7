//! Typed view over remote log rows for the audit listing.
//!
//! Every field goes through [`field_with_fallback`] because the same
//! logical column has appeared under several key spellings across schema
//! versions. Detail and reconstruction degrade to empty/None on
//! malformed payloads; the summary fields always render.

use log::debug;

use crate::rowmap::{field_with_fallback, reconstruct_record, RawRow};
use crate::snapshot::{ItemDetail, Snapshot};

/// One row of the audit listing, summary fields resolved.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: String,
    pub date: String,
    pub prefix: String,
    pub plate: String,
    pub cycle: String,
    pub km: String,
    pub inspector: String,
    pub items_status: String,
    pub general_observation: String,
    row: RawRow,
}

impl AuditEntry {
    pub fn from_row(row: RawRow) -> Self {
        let field = |candidates: &[&str]| field_with_fallback(&row, candidates).to_string();
        let id = field(&["id"]);
        let date = field(&["date", "data"]);
        let prefix = field(&["prefix", "viatura", "prefixo"]);
        let plate = field(&["plate", "placa"]);
        let cycle = field(&["checklistType", "periodicidade", "ciclo", "tipo"]);
        let km = field(&["km", "quilometragem"]);
        let inspector = field(&["inspector", "conferente", "inspetor"]);
        let items_status = field(&["itemsStatus", "resumo_status", "status"]);
        let general_observation = field(&["generalObservation", "observações", "obs"]);
        Self {
            id,
            date,
            prefix,
            plate,
            cycle,
            km,
            inspector,
            items_status,
            general_observation,
            row,
        }
    }

    /// The lightweight items projection embedded in the row; empty when
    /// the column is missing or its JSON is malformed.
    pub fn detail_items(&self) -> Vec<ItemDetail> {
        let raw = field_with_fallback(&self.row, &["itemsDetail", "detalhes_itens_json", "itens"]);
        match serde_json::from_str(raw) {
            Ok(items) => items,
            Err(e) => {
                debug!("Items detail unparsable for row {}: {}", self.id, e);
                Vec::new()
            }
        }
    }

    /// The faithful full-snapshot reconstruction, when the mirror column
    /// is present and parses. None means summary-only display.
    pub fn reconstruct(&self) -> Option<Snapshot> {
        reconstruct_record(&self.row)
    }
}
