//! Inputs embedded at build time by `build.rs`.
//!
//! Each constant is `None` when its file was missing from `fixtures/`.

use cbd_core::assets::{
    ImageAsset, MapDocument, DUAL_AXIS_FILE, INTRO_IMAGE_FILE, MAP_FILE,
    RECOMMENDATIONS_IMAGE_FILE, TOP20_FILE, TRIPS_FILE,
};
use cbd_core::Result;
use cbd_db::schema::Table;
use cbd_db::{Dataset, DatasetBuilder};
use dioxus_logger::tracing::info;

include!(concat!(env!("OUT_DIR"), "/assets.rs"));

/// Load every embedded table. Only a database failure is fatal; a bad or
/// missing table is recorded and surfaces on the pages that query it.
pub fn load_dataset() -> Result<Dataset> {
    let mut builder = DatasetBuilder::new()?;
    let sources = [
        (Table::Trips, TRIPS_CSV, TRIPS_FILE),
        (Table::Top20, TOP20_CSV, TOP20_FILE),
        (Table::DualAxis, DUAL_AXIS_CSV, DUAL_AXIS_FILE),
    ];
    for (table, csv_data, file) in sources {
        if let Ok(rows) = builder.load_embedded(table, csv_data, file) {
            info!("{}: {} rows from {}", table.name(), rows, file);
        }
    }
    Ok(builder.finish())
}

pub fn map_document() -> Result<MapDocument> {
    MapDocument::from_embedded(MAP_HTML, MAP_FILE)
}

pub fn intro_image() -> Result<ImageAsset> {
    ImageAsset::from_embedded(INTRO_IMAGE, INTRO_IMAGE_FILE)
}

pub fn recommendations_image() -> Result<ImageAsset> {
    ImageAsset::from_embedded(RECOMMENDATIONS_IMAGE, RECOMMENDATIONS_IMAGE_FILE)
}
