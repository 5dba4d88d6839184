//! FarmTech - record plantings and what they need
//!
//! A terminal menu for recording crop plantings. Each planting is measured
//! as a rectangle, triangle or square depending on the crop; from the area
//! FarmTech derives the fertilizer and soil inputs and the daily irrigation
//! the planting needs, and can export everything to a CSV file.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Crop, Dimensions, GeometryKind, PlantingRecord, RecordId};
pub use storage::{Config, RecordStore};
