//! Produces the self-contained representation of "what this inspection
//! looked like": the full snapshot mirror for faithful re-display, the
//! lightweight items projection, and the flat remote log payload.

use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ChecklistItem, InspectionRecord, ItemStatus};
use crate::settings::AppSettings;

/// Audit timestamps are rendered at a fixed UTC-3 offset so rows compare
/// across viewer locales.
const AUDIT_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Sentinel for an unidentified inspector; the inspector field is never
/// emitted empty.
pub const UNIDENTIFIED_INSPECTOR: &str = "NÃO IDENTIFICADO";

/// A complete snapshot of one inspection plus the display settings needed
/// to render it identically later, even if settings change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub record: InspectionRecord,
    #[serde(rename = "signatureFull", default)]
    pub signature_full: String,
    #[serde(rename = "headerTitle", default, skip_serializing_if = "Option::is_none")]
    pub header_title: Option<String>,
    #[serde(rename = "headerBgColor", default, skip_serializing_if = "Option::is_none")]
    pub header_bg_color: Option<String>,
    #[serde(rename = "headerLogoUrl1", default, skip_serializing_if = "Option::is_none")]
    pub header_logo_url1: Option<String>,
    #[serde(rename = "headerLogoUrl2", default, skip_serializing_if = "Option::is_none")]
    pub header_logo_url2: Option<String>,
}

impl Snapshot {
    /// Builds the snapshot, denormalizing branding settings into it.
    pub fn build(record: &InspectionRecord, settings: &AppSettings) -> Self {
        Self {
            record: record.clone(),
            signature_full: inspector_full_name(&record.inspector_rank, &record.inspector_name),
            header_title: Some(settings.header_title.clone()),
            header_bg_color: settings.header_bg_color.clone(),
            header_logo_url1: settings.header_logo_url1.clone(),
            header_logo_url2: settings.header_logo_url2.clone(),
        }
    }
}

/// Reduced per-item projection for lightweight inline display. Never
/// carries photo payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub label: String,
    pub status: String,
    #[serde(default)]
    pub observation: String,
}

/// Rank and name trimmed and joined with a single space; falls back to
/// the sentinel when both are blank.
pub fn inspector_full_name(rank: &str, name: &str) -> String {
    let full = format!("{} {}", rank.trim(), name.trim());
    let full = full.trim();
    if full.is_empty() {
        UNIDENTIFIED_INSPECTOR.to_string()
    } else {
        full.to_string()
    }
}

/// (ok, non-conforming, pending) counts over an item list.
pub fn status_counts(items: &[ChecklistItem]) -> (usize, usize, usize) {
    let ok = items.iter().filter(|i| i.status == ItemStatus::Ok).count();
    let cn = items
        .iter()
        .filter(|i| i.status == ItemStatus::NonConforming)
        .count();
    let pending = items
        .iter()
        .filter(|i| i.status == ItemStatus::Pending)
        .count();
    (ok, cn, pending)
}

/// Human-readable status summary kept alongside the full item list so
/// auditors can scan rows without re-parsing JSON.
pub fn items_status_summary(items: &[ChecklistItem]) -> String {
    let (ok, cn, _) = status_counts(items);
    format!("{} SN / {} CN", ok, cn)
}

/// The lightweight projection of all items, photos stripped.
pub fn items_detail(items: &[ChecklistItem]) -> Vec<ItemDetail> {
    items
        .iter()
        .map(|item| ItemDetail {
            label: item.label.clone(),
            status: match item.status {
                ItemStatus::Ok => "SN".to_string(),
                ItemStatus::NonConforming => "CN".to_string(),
                ItemStatus::Pending => "Pendente".to_string(),
            },
            observation: item.observation.clone().unwrap_or_default(),
        })
        .collect()
}

/// Submission timestamp at the fixed audit offset, `dd/mm/yyyy HH:MM:SS`.
pub fn audit_timestamp() -> String {
    let offset = FixedOffset::west_opt(AUDIT_UTC_OFFSET_SECS)
        .expect("audit offset is a valid fixed offset");
    Utc::now()
        .with_timezone(&offset)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

/// The flat remote log write body. Every value is a primitive string;
/// nested structures are JSON-encoded, not passed as native structures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogPayload {
    pub action: String,
    pub id: String,
    pub date: String,
    pub prefix: String,
    pub plate: String,
    #[serde(rename = "checklistType")]
    pub checklist_type: String,
    pub km: String,
    pub inspector: String,
    #[serde(rename = "itemsStatus")]
    pub items_status: String,
    #[serde(rename = "itemsDetail")]
    pub items_detail: String,
    #[serde(rename = "fullData")]
    pub full_data: String,
    #[serde(rename = "generalObservation")]
    pub general_observation: String,
    pub screenshot: String,
}

impl LogPayload {
    /// Serializes a consistent snapshot of the record for the remote
    /// append log.
    pub fn build(
        record: &InspectionRecord,
        settings: &AppSettings,
        screenshot: Option<String>,
    ) -> Self {
        let snapshot = Snapshot::build(record, settings);
        let detail = items_detail(&record.items);

        Self {
            action: "saveLog".to_string(),
            id: record.id.clone(),
            date: audit_timestamp(),
            prefix: non_blank_or(&record.prefix, "N/A"),
            plate: non_blank_or(&record.plate, "N/A"),
            checklist_type: record.cycle_type.as_str().to_string(),
            km: non_blank_or(&record.odometer, "0"),
            inspector: snapshot.signature_full.clone(),
            items_status: items_status_summary(&record.items),
            items_detail: serde_json::to_string(&detail).unwrap_or_else(|_| "[]".to_string()),
            full_data: serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string()),
            general_observation: record.general_observation.clone(),
            screenshot: screenshot.unwrap_or_default(),
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::model::CycleType;

    fn sample_record() -> InspectionRecord {
        let mut record = InspectionRecord::new(
            &default_catalog(),
            CycleType::Daily,
            Vec::new(),
            Vec::new(),
        );
        record.prefix = "ABT-01".to_string();
        record.plate = "QRA1234".to_string();
        record.odometer = "45210".to_string();
        record.items[0].status = ItemStatus::Ok;
        record.items[1].status = ItemStatus::NonConforming;
        record.items[1].observation = Some("worn belt".to_string());
        record
    }

    #[test]
    fn test_inspector_full_name_joins_and_trims() {
        assert_eq!(inspector_full_name(" Sgt ", " Silva "), "Sgt Silva");
        assert_eq!(inspector_full_name("", "Silva"), "Silva");
        assert_eq!(inspector_full_name("Sgt", ""), "Sgt");
        assert_eq!(inspector_full_name("  ", "  "), UNIDENTIFIED_INSPECTOR);
    }

    #[test]
    fn test_summary_counts_cover_all_items() {
        let record = sample_record();
        let (ok, cn, pending) = status_counts(&record.items);
        assert_eq!(ok + cn + pending, record.items.len());
        assert_eq!(items_status_summary(&record.items), "1 SN / 1 CN");
    }

    #[test]
    fn test_items_detail_strips_photos() {
        let mut record = sample_record();
        record.items[0]
            .photos
            .push("data:image/jpeg;base64,zzzz".to_string());
        let detail = items_detail(&record.items);
        assert_eq!(detail.len(), record.items.len());
        assert_eq!(detail[0].status, "SN");
        assert_eq!(detail[1].status, "CN");
        assert_eq!(detail[1].observation, "worn belt");
        assert_eq!(detail[2].status, "Pendente");
        let json = serde_json::to_string(&detail).unwrap();
        assert!(!json.contains("base64"));
    }

    #[test]
    fn test_payload_values_are_flat_strings() {
        let record = sample_record();
        let settings = AppSettings::default();
        let payload = LogPayload::build(&record, &settings, None);

        assert_eq!(payload.action, "saveLog");
        assert_eq!(payload.prefix, "ABT-01");
        assert_eq!(payload.checklist_type, "Diário");
        assert_eq!(payload.screenshot, "");

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value
            .as_object()
            .unwrap()
            .values()
            .all(|v| v.is_string()));

        // nested data round-trips from the JSON-encoded strings
        let detail: Vec<ItemDetail> = serde_json::from_str(&payload.items_detail).unwrap();
        assert_eq!(detail.len(), record.items.len());
        let snapshot: Snapshot = serde_json::from_str(&payload.full_data).unwrap();
        assert_eq!(snapshot.record.id, record.id);
    }

    #[test]
    fn test_payload_fallbacks() {
        let mut record = sample_record();
        record.prefix = "   ".to_string();
        record.plate = String::new();
        record.odometer = String::new();
        let payload = LogPayload::build(&record, &AppSettings::default(), None);
        assert_eq!(payload.prefix, "N/A");
        assert_eq!(payload.plate, "N/A");
        assert_eq!(payload.km, "0");
        assert_eq!(payload.inspector, UNIDENTIFIED_INSPECTOR);
    }

    #[test]
    fn test_snapshot_denormalizes_branding() {
        let record = sample_record();
        let mut settings = AppSettings::default();
        settings.header_title = "Checklist 1º GBM".to_string();
        settings.header_bg_color = Some("#00376d".to_string());
        let snapshot = Snapshot::build(&record, &settings);
        assert_eq!(snapshot.header_title.as_deref(), Some("Checklist 1º GBM"));
        assert_eq!(snapshot.header_bg_color.as_deref(), Some("#00376d"));

        // branding survives independently of later settings edits
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.header_title.as_deref(), Some("Checklist 1º GBM"));
    }

    #[test]
    fn test_audit_timestamp_format() {
        let ts = audit_timestamp();
        // dd/mm/yyyy HH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[2..3], "/");
        assert_eq!(&ts[5..6], "/");
        assert_eq!(&ts[10..11], " ");
    }
}
