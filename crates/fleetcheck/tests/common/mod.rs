//! Shared builders for integration scenarios.

#![allow(dead_code)]

use fleetcheck::{
    AppSettings, CatalogItem, InspectionSession, ItemFrequency, ItemStatus,
};

/// The three-item catalog used by the cycle-switch scenarios:
/// A applies daily, B weekly, C to both.
pub fn abc_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("A", "ITEM A", ItemFrequency::Daily),
        CatalogItem::new("B", "ITEM B", ItemFrequency::Weekly),
        CatalogItem::new("C", "ITEM C", ItemFrequency::Both),
    ]
}

/// Settings with the abc catalog and no endpoint.
pub fn abc_settings() -> AppSettings {
    AppSettings {
        default_items: abc_catalog(),
        ..AppSettings::default()
    }
}

/// A session with every identification field filled in and every item
/// resolved OK, ready to finalize.
pub fn completed_session(settings: AppSettings) -> InspectionSession {
    let mut session = InspectionSession::new(settings);
    session.set_prefix("ABT-01");
    session.set_plate("QRA1234");
    session.set_odometer("42000");
    session.set_inspector("Sgt", "Silva");
    let ids: Vec<String> = session
        .record()
        .items
        .iter()
        .map(|i| i.id.clone())
        .collect();
    for id in ids {
        session.set_status(&id, ItemStatus::Ok);
    }
    session
}
