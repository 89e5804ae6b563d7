//! Keeps a record's item list consistent with the catalog when the
//! catalog or the active cycle type changes, without losing user input.

use log::debug;

use crate::catalog::{filter_catalog, CatalogItem};
use crate::model::{ChecklistItem, CycleType, ItemStatus};

/// Merges the catalog (filtered by cycle) against the previous item list.
///
/// The catalog is authoritative for `label` and `frequency`; user state
/// (`status`, `observation`, `photos`) carries forward for items matched
/// by id. Catalog items without a previous match start pending. Previous
/// items no longer applicable to the cycle are dropped — no off-cycle
/// buffer is kept, so their observations and photos are lost.
///
/// Pure and idempotent; callers replace `record.items` wholesale since
/// both membership and order can change.
pub fn reconcile_items(
    catalog: &[CatalogItem],
    cycle: CycleType,
    previous: &[ChecklistItem],
) -> Vec<ChecklistItem> {
    let filtered = filter_catalog(catalog, cycle);

    let items: Vec<ChecklistItem> = filtered
        .into_iter()
        .map(|catalog_item| {
            match previous.iter().find(|p| p.id == catalog_item.id) {
                Some(existing) => ChecklistItem {
                    id: catalog_item.id.clone(),
                    label: catalog_item.label.clone(),
                    frequency: catalog_item.frequency,
                    status: existing.status,
                    observation: existing.observation.clone(),
                    photos: existing.photos.clone(),
                },
                None => ChecklistItem::pending(catalog_item),
            }
        })
        .collect();

    let dropped = previous
        .iter()
        .filter(|p| !items.iter().any(|i| i.id == p.id))
        .count();
    if dropped > 0 {
        debug!(
            "Reconcile to {}: {} item(s) dropped, {} active",
            cycle.as_str(),
            dropped,
            items.len()
        );
    }

    items
}
