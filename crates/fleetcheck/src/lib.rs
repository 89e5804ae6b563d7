pub mod audit;
pub mod catalog;
pub mod error;
pub mod logstore;
pub mod model;
pub mod normalize;
pub mod reconciler;
pub mod rowmap;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod transport;

pub use audit::AuditEntry;
pub use catalog::{default_catalog, filter_catalog, CatalogItem};
pub use error::{
    ExportError, FleetcheckError, ImportError, Result, SettingsError, TransportError,
    ValidationError,
};
pub use logstore::{HttpLogStore, InMemoryLogStore, LogStore, MAX_LOG_ROWS};
pub use model::{
    AspectRatio, ChecklistItem, CycleType, DamagePoint, InspectionRecord, ItemFrequency,
    ItemStatus, VIEW_IMAGE_COUNT,
};
pub use normalize::normalize_image;
pub use reconciler::reconcile_items;
pub use rowmap::{canonical_key, field_with_fallback, map_row, reconstruct_record, RawRow};
pub use session::{ExportFile, FinalizeReport, InspectionSession};
pub use settings::AppSettings;
pub use snapshot::{items_detail, items_status_summary, ItemDetail, LogPayload, Snapshot};
pub use transport::{SyncClient, SyncOutcome};
