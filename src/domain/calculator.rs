//! Area and input calculations
//!
//! Pure closed-form arithmetic. Nothing here rounds; formatting to a fixed
//! number of decimals happens only when values are shown.

use super::catalog::{total_unit, CropDefinition};
use super::dimensions::Dimensions;

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Absolute amount of one input for a whole planting area
#[derive(Debug, Clone, PartialEq)]
pub struct InputQuantity {
    pub name: &'static str,
    pub quantity: f64,
    /// Per-hectare unit from the catalog
    pub unit: &'static str,
}

impl InputQuantity {
    /// Unit rewritten for a whole-area amount (`kg/ha` -> `kg/total`)
    pub fn display_unit(&self) -> String {
        total_unit(self.unit)
    }
}

/// Area in square meters
pub fn compute_area(dimensions: &Dimensions) -> f64 {
    match *dimensions {
        Dimensions::Rectangle { base, height } => base * height,
        Dimensions::Triangle { base, height } => (base * height) / 2.0,
        Dimensions::Square { side } => side * side,
    }
}

pub fn to_hectares(area_m2: f64) -> f64 {
    area_m2 / SQUARE_METERS_PER_HECTARE
}

/// Quantity of every input the crop defines, scaled to the area
pub fn compute_inputs(crop: &CropDefinition, area_ha: f64) -> Vec<InputQuantity> {
    crop.inputs
        .iter()
        .map(|input| InputQuantity {
            name: input.name,
            quantity: input.per_hectare * area_ha,
            unit: input.unit,
        })
        .collect()
}

/// Daily irrigation volume for the area
pub fn compute_irrigation(crop: &CropDefinition, area_ha: f64) -> f64 {
    crop.irrigation.per_hectare * area_ha
}
