//! Application settings: item catalog, branding and the sync endpoint.
//!
//! Persisted as a single JSON slot under the platform config directory,
//! read once at startup and written only on explicit save. Field names
//! match the historical settings format so existing slots keep loading.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::catalog::{default_catalog, CatalogItem};
use crate::error::SettingsError;
use crate::model::{pad_view_images, pad_view_ratios, AspectRatio};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// The canonical item catalog.
    #[serde(rename = "defaultItems", default = "default_catalog")]
    pub default_items: Vec<CatalogItem>,
    #[serde(rename = "vehicleImages", default = "default_view_images")]
    pub vehicle_images: Vec<String>,
    #[serde(rename = "vehicleImageRatios", default = "default_view_ratios")]
    pub vehicle_image_ratios: Vec<AspectRatio>,
    #[serde(rename = "headerTitle", default = "default_header_title")]
    pub header_title: String,
    #[serde(rename = "headerBgColor", default)]
    pub header_bg_color: Option<String>,
    #[serde(rename = "headerLogoUrl1", default)]
    pub header_logo_url1: Option<String>,
    #[serde(rename = "headerLogoUrl2", default)]
    pub header_logo_url2: Option<String>,
    #[serde(rename = "printScale", default = "default_print_scale")]
    pub print_scale: f32,
    /// Remote log endpoint; sync is skipped when unset.
    #[serde(rename = "googleSheetUrl", default)]
    pub sheet_url: Option<String>,
}

fn default_view_images() -> Vec<String> {
    pad_view_images(Vec::new())
}

fn default_view_ratios() -> Vec<AspectRatio> {
    pad_view_ratios(Vec::new())
}

fn default_header_title() -> String {
    "Checklist de viatura".to_string()
}

fn default_print_scale() -> f32 {
    1.0
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_items: default_catalog(),
            vehicle_images: default_view_images(),
            vehicle_image_ratios: default_view_ratios(),
            header_title: default_header_title(),
            header_bg_color: None,
            header_logo_url1: None,
            header_logo_url2: None,
            print_scale: default_print_scale(),
            sheet_url: None,
        }
    }
}

impl AppSettings {
    /// Loads from the default slot. A missing file yields defaults; a
    /// corrupt file is logged and also yields defaults so a bad save can
    /// never lock the user out.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Self::settings_path()?)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        match serde_json::from_str::<Self>(&content) {
            Ok(mut settings) => {
                settings.normalize_views();
                Ok(settings)
            }
            Err(e) => {
                warn!("Settings file '{}' is corrupt ({}), using defaults", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    /// Writes the slot. Only called on an explicit save action.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(Self::settings_path()?)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| SettingsError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn settings_path() -> Result<PathBuf, SettingsError> {
        let base = dirs::config_dir().ok_or(SettingsError::NoConfigDirectory)?;
        Ok(base.join("fleetcheck").join("settings.json"))
    }

    fn normalize_views(&mut self) {
        let images = std::mem::take(&mut self.vehicle_images);
        self.vehicle_images = pad_view_images(images);
        let ratios = std::mem::take(&mut self.vehicle_image_ratios);
        self.vehicle_image_ratios = pad_view_ratios(ratios);
    }
}
