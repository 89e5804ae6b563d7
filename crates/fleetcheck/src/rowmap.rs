//! Boundary between the schema-fragile remote row store and the typed
//! model. Header text is human-edited and not a stable contract, so every
//! lookup here is tolerant: unknown headers pass through slugified,
//! missing cells become empty strings, and parse failures degrade to
//! partial data. Nothing in this module panics or errors on bad input.

use std::collections::BTreeMap;

use log::debug;

use crate::snapshot::Snapshot;

/// One untyped row from the remote store: canonical (or slugified) field
/// name to cell value.
pub type RawRow = BTreeMap<String, String>;

/// Sentinel returned when none of a field's candidate keys holds a value.
pub const MISSING_FIELD: &str = "N/A";

/// Maps a header to its canonical field name: trim, case-fold, match
/// against the accepted spellings seen across schema versions. Anything
/// unrecognized falls back to a slug of itself so schema drift stays
/// visible instead of being dropped.
pub fn canonical_key(header: &str) -> String {
    let folded = header.trim().to_uppercase();
    let key = match folded.as_str() {
        "ID" => "id",
        "DATA" => "date",
        "VIATURA" | "PREFIXO" | "PREFIX" => "prefix",
        "PLACA" | "PLATE" => "plate",
        "PERIODICIDADE" | "CICLO" | "TIPO" => "checklistType",
        "KM" | "QUILOMETRAGEM" => "km",
        "CONFERENTE" | "INSPETOR" => "inspector",
        "RESUMO STATUS" | "STATUS" => "itemsStatus",
        "DETALHES ITENS JSON" | "ITENS" => "itemsDetail",
        "ESPELHO FIEL JSON" | "DATA_COMPLETA" => "fullData",
        "OBSERVAÇÕES" | "OBS" => "generalObservation",
        "FOTO DA CONFERÊNCIA" | "SCREENSHOT" | "IMAGEM" => "screenshot",
        _ => return slugify(&folded),
    };
    key.to_string()
}

fn slugify(folded: &str) -> String {
    folded.to_lowercase().replace(' ', "_")
}

/// Pairs headers with cell values into a [`RawRow`]. Rows shorter than
/// the header set pad with empty strings; extra cells are ignored.
pub fn map_row(headers: &[String], values: &[String]) -> RawRow {
    let mut row = RawRow::new();
    for (i, header) in headers.iter().enumerate() {
        let value = values.get(i).cloned().unwrap_or_default();
        row.insert(canonical_key(header), value);
    }
    row
}

/// First candidate key present with a non-empty value, else the
/// [`MISSING_FIELD`] sentinel. The same logical field can appear under
/// several historical key spellings, so lookups go through here.
pub fn field_with_fallback<'a>(row: &'a RawRow, candidates: &[&str]) -> &'a str {
    candidates
        .iter()
        .filter_map(|key| row.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .unwrap_or(MISSING_FIELD)
}

/// Re-parses the JSON-encoded full-snapshot mirror from a row. `None`
/// means no faithful reconstruction is available and callers fall back to
/// the summary fields.
pub fn reconstruct_record(row: &RawRow) -> Option<Snapshot> {
    let raw = field_with_fallback(row, &["fullData", "data_completa", "espelho_fiel_json"]);
    if raw == MISSING_FIELD {
        return None;
    }

    match serde_json::from_str::<Snapshot>(raw) {
        Ok(mut snapshot) => {
            snapshot.record.normalize_views();
            Some(snapshot)
        }
        Err(e) => {
            debug!("Full-snapshot mirror unparsable: {}", e);
            None
        }
    }
}
