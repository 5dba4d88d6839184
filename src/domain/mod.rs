//! Domain models for FarmTech
//!
//! Contains the crop catalog and planting arithmetic without any I/O concerns.

mod catalog;
mod dimensions;
mod calculator;
mod record;

pub use catalog::{input_names, total_unit, Crop, CropDefinition, GeometryKind, InputRequirement, IrrigationRate};
pub use dimensions::{DimensionError, DimensionField, Dimensions};
pub use calculator::{compute_area, compute_inputs, compute_irrigation, to_hectares, InputQuantity, SQUARE_METERS_PER_HECTARE};
pub use record::{PlantingRecord, RecordId};
