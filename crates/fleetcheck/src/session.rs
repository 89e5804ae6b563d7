//! The application context: owns the settings and the in-progress
//! record, and is the only writer of either.
//!
//! Every mutation goes through `&mut self`, so a snapshot can never be
//! serialized while a photo upload is still pending — the exclusive
//! borrow is the ordering guarantee the finalize workflow relies on.

use log::{info, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ExportError, FleetcheckError, ImportError, Result, ValidationError};
use crate::model::{
    today_iso, AspectRatio, CycleType, DamagePoint, InspectionRecord, ItemStatus,
    VIEW_IMAGE_COUNT,
};
use crate::normalize::normalize_image;
use crate::reconciler::reconcile_items;
use crate::settings::AppSettings;
use crate::snapshot::LogPayload;
use crate::transport::{SyncClient, SyncOutcome};

/// A file artifact produced locally (export / finalize).
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

impl ExportFile {
    /// Writes the artifact into a directory, returning the full path.
    pub fn write_to(&self, dir: &std::path::Path) -> std::result::Result<std::path::PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.contents).map_err(|e| ExportError::WriteFile {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}

/// What the finalize workflow produced. The export artifact is always
/// present; the sync outcome says whether the best-effort remote mirror
/// write settled.
#[derive(Debug)]
pub struct FinalizeReport {
    pub outcome: SyncOutcome,
    pub payload: LogPayload,
    pub export: ExportFile,
}

pub struct InspectionSession {
    settings: AppSettings,
    record: InspectionRecord,
}

impl InspectionSession {
    /// Starts a session with a fresh daily record built from the
    /// settings catalog and default view images.
    pub fn new(settings: AppSettings) -> Self {
        let record = InspectionRecord::new(
            &settings.default_items,
            CycleType::Daily,
            settings.vehicle_images.clone(),
            settings.vehicle_image_ratios.clone(),
        );
        Self { settings, record }
    }

    pub fn record(&self) -> &InspectionRecord {
        &self.record
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    // --- identification fields -------------------------------------------

    pub fn set_prefix(&mut self, prefix: &str) {
        self.record.prefix = prefix.to_string();
    }

    pub fn set_plate(&mut self, plate: &str) {
        self.record.plate = plate.to_uppercase();
    }

    pub fn set_odometer(&mut self, odometer: &str) {
        self.record.odometer = odometer.to_string();
    }

    pub fn set_date(&mut self, date: &str) {
        self.record.date = date.to_string();
    }

    pub fn set_inspector(&mut self, rank: &str, name: &str) {
        self.record.inspector_rank = rank.to_string();
        self.record.inspector_name = name.to_string();
    }

    pub fn set_general_observation(&mut self, text: &str) {
        self.record.general_observation = text.to_string();
    }

    // --- checklist items -------------------------------------------------

    /// Returns false when no item with that id is active.
    pub fn set_status(&mut self, item_id: &str, status: ItemStatus) -> bool {
        match self.record.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.status = status;
                true
            }
            None => false,
        }
    }

    pub fn set_observation(&mut self, item_id: &str, observation: &str) -> bool {
        match self.record.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.observation = if observation.is_empty() {
                    None
                } else {
                    Some(observation.to_string())
                };
                true
            }
            None => false,
        }
    }

    /// Copies an item's observation into the general observation as
    /// "LABEL: observation", newline-separated.
    pub fn append_observation_to_general(&mut self, item_id: &str) -> bool {
        let Some(item) = self.record.items.iter().find(|i| i.id == item_id) else {
            return false;
        };
        let Some(observation) = item.observation.as_deref().filter(|o| !o.is_empty()) else {
            return false;
        };

        let line = format!("{}: {}", item.label, observation);
        if self.record.general_observation.is_empty() {
            self.record.general_observation = line;
        } else {
            self.record.general_observation.push('\n');
            self.record.general_observation.push_str(&line);
        }
        true
    }

    /// Switches the active cycle and reconciles the item list against
    /// the catalog. Items no longer applicable are dropped along with
    /// their user state.
    pub fn set_cycle_type(&mut self, cycle: CycleType) {
        if self.record.cycle_type == cycle {
            return;
        }
        self.record.cycle_type = cycle;
        self.record.items =
            reconcile_items(&self.settings.default_items, cycle, &self.record.items);
    }

    /// Replaces the settings (explicit save action) and re-reconciles
    /// the active record against the possibly edited catalog.
    pub fn apply_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
        self.record.items = reconcile_items(
            &self.settings.default_items,
            self.record.cycle_type,
            &self.record.items,
        );
    }

    // --- damages ---------------------------------------------------------

    /// Marks a damage point on one of the five views; coordinates are
    /// clamped into the 0..100 percentage range. Returns the new id, or
    /// None for an out-of-range view index.
    pub fn add_damage(
        &mut self,
        x: f32,
        y: f32,
        view_index: usize,
        description: &str,
    ) -> Option<String> {
        if view_index >= VIEW_IMAGE_COUNT {
            return None;
        }
        let id = Uuid::new_v4().to_string();
        self.record.damages.push(DamagePoint {
            id: id.clone(),
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
            view_index,
            description: description.to_string(),
        });
        Some(id)
    }

    pub fn remove_damage(&mut self, damage_id: &str) -> bool {
        let before = self.record.damages.len();
        self.record.damages.retain(|d| d.id != damage_id);
        self.record.damages.len() != before
    }

    // --- photos ----------------------------------------------------------

    /// Normalizes and attaches a photo to an item. The append happens
    /// only after normalization completes, so a concurrent serialization
    /// can never observe a half-attached photo.
    pub async fn attach_item_photo(&mut self, item_id: &str, encoded: String) -> bool {
        if !self.record.items.iter().any(|i| i.id == item_id) {
            return false;
        }
        let normalized = normalize_image(encoded).await;
        if let Some(item) = self.record.items.iter_mut().find(|i| i.id == item_id) {
            item.photos.push(normalized);
            true
        } else {
            false
        }
    }

    pub async fn attach_general_photo(&mut self, encoded: String) {
        let normalized = normalize_image(encoded).await;
        self.record.general_photos.push(normalized);
    }

    pub async fn set_view_image(&mut self, view_index: usize, encoded: String) -> bool {
        if view_index >= VIEW_IMAGE_COUNT {
            return false;
        }
        let normalized = normalize_image(encoded).await;
        self.record.view_images[view_index] = normalized;
        true
    }

    pub fn set_view_ratio(&mut self, view_index: usize, ratio: AspectRatio) -> bool {
        if view_index >= VIEW_IMAGE_COUNT {
            return false;
        }
        self.record.view_image_ratios[view_index] = ratio;
        true
    }

    // --- finalize workflow -----------------------------------------------

    /// Completeness check that gates the finalize workflow. No network
    /// call happens when this fails and the record is untouched.
    pub fn validate_for_finalize(&self) -> std::result::Result<(), ValidationError> {
        let pending = self
            .record
            .items
            .iter()
            .filter(|i| i.status == ItemStatus::Pending)
            .count();
        if pending > 0 {
            return Err(ValidationError::PendingItems { count: pending });
        }

        let mut missing = Vec::new();
        if self.record.prefix.trim().is_empty() {
            missing.push("prefixo".to_string());
        }
        if self.record.plate.trim().is_empty() {
            missing.push("placa".to_string());
        }
        if self.record.odometer.trim().is_empty() {
            missing.push("km".to_string());
        }
        if self.record.inspector_name.trim().is_empty() {
            missing.push("conferente".to_string());
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        Ok(())
    }

    /// Validates, pushes the snapshot to the remote log and produces the
    /// local export artifact. A failed submission is logged and reported
    /// in the outcome — it never blocks the local artifact.
    pub async fn finalize(
        &mut self,
        client: &SyncClient,
        screenshot: Option<String>,
    ) -> Result<FinalizeReport> {
        self.validate_for_finalize()
            .map_err(FleetcheckError::Validation)?;

        let payload = LogPayload::build(&self.record, &self.settings, screenshot);

        let outcome = match self.settings.sheet_url.as_deref() {
            Some(endpoint) => client.submit(endpoint, &payload).await,
            None => SyncOutcome::Failed {
                reason: "no sync endpoint configured".to_string(),
            },
        };
        if let SyncOutcome::Failed { reason } = &outcome {
            warn!("Remote mirror not updated for {}: {}", payload.id, reason);
        }

        let export = self.export_json();
        info!("Inspection {} finalized ({})", payload.id, payload.items_status);

        Ok(FinalizeReport {
            outcome,
            payload,
            export,
        })
    }

    // --- file export / import --------------------------------------------

    /// Full-record JSON export; the filename carries the vehicle prefix
    /// and date for traceability.
    pub fn export_json(&self) -> ExportFile {
        let prefix = self.record.prefix.trim();
        let stem = if prefix.is_empty() { "viatura" } else { prefix };
        ExportFile {
            filename: format!("modelo_{}_{}.json", stem, self.record.date),
            contents: serde_json::to_string_pretty(&self.record)
                .unwrap_or_else(|_| "{}".to_string()),
        }
    }

    /// Replaces the record wholesale from an exported JSON file. The id
    /// is re-minted and the date reset to today so the import can never
    /// collide with or masquerade as the original submission. On any
    /// failure the current record is left untouched.
    pub fn import_json(&mut self, contents: &str) -> std::result::Result<(), ImportError> {
        let value: Value = serde_json::from_str(contents)?;

        if !value.get("items").map_or(false, Value::is_array) {
            return Err(ImportError::MissingField { field: "items" });
        }
        if value.get("checklistType").is_none() {
            return Err(ImportError::MissingField { field: "checklistType" });
        }

        let mut imported: InspectionRecord = serde_json::from_value(value)?;
        imported.id = Uuid::new_v4().to_string();
        imported.date = today_iso();
        imported.normalize_views();
        // imported items reconcile against the current catalog so the
        // items-match-catalog invariant holds for this session too
        imported.items = reconcile_items(
            &self.settings.default_items,
            imported.cycle_type,
            &imported.items,
        );

        info!("Imported inspection model for prefix '{}'", imported.prefix);
        self.record = imported;
        Ok(())
    }
}
