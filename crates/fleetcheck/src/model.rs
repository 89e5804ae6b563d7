//! Core data model for a single vehicle inspection.
//!
//! Serde field names mirror the historical JSON snapshot format so old
//! exports and remote mirror payloads keep loading unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::CatalogItem;
use crate::reconciler::reconcile_items;

/// Number of fixed vehicle-view images on the damage map.
pub const VIEW_IMAGE_COUNT: usize = 5;

/// The applicability class of an inspection, determining which catalog
/// items are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleType {
    #[serde(rename = "Diário")]
    Daily,
    #[serde(rename = "Semanal")]
    Weekly,
}

impl CycleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleType::Daily => "Diário",
            CycleType::Weekly => "Semanal",
        }
    }
}

/// How often a catalog item applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemFrequency {
    #[serde(rename = "Diário")]
    Daily,
    #[serde(rename = "Semanal")]
    Weekly,
    #[serde(rename = "Ambos")]
    Both,
}

impl ItemFrequency {
    /// Whether an item with this frequency belongs to a record of the
    /// given cycle type.
    pub fn applies_to(&self, cycle: CycleType) -> bool {
        match self {
            ItemFrequency::Both => true,
            ItemFrequency::Daily => cycle == CycleType::Daily,
            ItemFrequency::Weekly => cycle == CycleType::Weekly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "CN")]
    NonConforming,
    #[serde(rename = "PENDING")]
    Pending,
}

/// A checklist item carrying user state inside a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub frequency: ItemFrequency,
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    /// Encoded (data-URL) photos attached to this item.
    #[serde(default)]
    pub photos: Vec<String>,
}

impl ChecklistItem {
    /// A fresh pending item from its catalog definition.
    pub fn pending(catalog_item: &CatalogItem) -> Self {
        Self {
            id: catalog_item.id.clone(),
            label: catalog_item.label.clone(),
            frequency: catalog_item.frequency,
            status: ItemStatus::Pending,
            observation: None,
            photos: Vec::new(),
        }
    }
}

/// A marked damage location on one of the five fixed vehicle views.
///
/// Coordinates are percentages of the view image, so markers stay valid
/// regardless of the rendered pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamagePoint {
    pub id: String,
    pub x: f32,
    pub y: f32,
    #[serde(rename = "imageIndex")]
    pub view_index: usize,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Landscape,
    Portrait,
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Landscape
    }
}

/// The aggregate root: one in-progress or finalized vehicle inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    #[serde(default)]
    pub id: String,
    /// ISO date (yyyy-mm-dd) of the inspection.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub plate: String,
    #[serde(rename = "checklistType")]
    pub cycle_type: CycleType,
    /// Odometer reading, kept as entered.
    #[serde(rename = "km", default)]
    pub odometer: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    #[serde(default)]
    pub damages: Vec<DamagePoint>,
    /// General evidence photos not tied to a single item.
    #[serde(rename = "photos", default)]
    pub general_photos: Vec<String>,
    /// Always exactly [`VIEW_IMAGE_COUNT`] entries; empty string means
    /// no image for that view.
    #[serde(rename = "vehicleImages", default)]
    pub view_images: Vec<String>,
    #[serde(rename = "vehicleImageRatios", default)]
    pub view_image_ratios: Vec<AspectRatio>,
    #[serde(rename = "generalObservation", default)]
    pub general_observation: String,
    #[serde(rename = "signatureName", default)]
    pub inspector_name: String,
    #[serde(rename = "signatureRank", default)]
    pub inspector_rank: String,
}

impl InspectionRecord {
    /// Creates a fresh record for the given cycle with a newly minted id,
    /// today's date and all applicable catalog items pending.
    pub fn new(
        catalog: &[CatalogItem],
        cycle_type: CycleType,
        view_images: Vec<String>,
        view_image_ratios: Vec<AspectRatio>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: today_iso(),
            prefix: String::new(),
            plate: String::new(),
            cycle_type,
            odometer: String::new(),
            items: reconcile_items(catalog, cycle_type, &[]),
            damages: Vec::new(),
            general_photos: Vec::new(),
            view_images: pad_view_images(view_images),
            view_image_ratios: pad_view_ratios(view_image_ratios),
            general_observation: String::new(),
            inspector_name: String::new(),
            inspector_rank: String::new(),
        }
    }

    /// Restores the length-5 invariant on the view image vectors after
    /// deserializing external data.
    pub fn normalize_views(&mut self) {
        let images = std::mem::take(&mut self.view_images);
        self.view_images = pad_view_images(images);
        let ratios = std::mem::take(&mut self.view_image_ratios);
        self.view_image_ratios = pad_view_ratios(ratios);
    }
}

/// Pads or truncates to exactly [`VIEW_IMAGE_COUNT`] entries.
pub fn pad_view_images(mut images: Vec<String>) -> Vec<String> {
    images.resize(VIEW_IMAGE_COUNT, String::new());
    images
}

/// Pads or truncates to exactly [`VIEW_IMAGE_COUNT`] entries.
pub fn pad_view_ratios(mut ratios: Vec<AspectRatio>) -> Vec<AspectRatio> {
    ratios.resize(VIEW_IMAGE_COUNT, AspectRatio::default());
    ratios
}

/// Today's date as yyyy-mm-dd in local time.
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
