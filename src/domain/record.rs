//! Planting records
//!
//! A record keeps the raw dimensions it was created from alongside the values
//! derived from them. Derived values are computed once, when the record is
//! built, and never drift from the dimensions: the only way to change the
//! dimensions is to build a new record.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::calculator::{self, InputQuantity};
use super::catalog::Crop;
use super::dimensions::{DimensionError, Dimensions};

/// Sequential record identifier, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u32);

impl RecordId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One stored planting
#[derive(Debug, Clone, PartialEq)]
pub struct PlantingRecord {
    id: RecordId,
    crop: Crop,
    dimensions: Dimensions,
    area_m2: f64,
    area_ha: f64,
    inputs: Vec<InputQuantity>,
    irrigation: f64,
}

impl PlantingRecord {
    /// Builds a record and computes its area, inputs and irrigation
    pub fn new(id: RecordId, crop: Crop, dimensions: Dimensions) -> Result<Self, DimensionError> {
        if dimensions.kind() != crop.geometry() {
            return Err(DimensionError::KindMismatch {
                expected: crop.geometry(),
                got: dimensions.kind(),
            });
        }

        let definition = crop.definition();
        let area_m2 = calculator::compute_area(&dimensions);
        let area_ha = calculator::to_hectares(area_m2);

        Ok(Self {
            id,
            crop,
            dimensions,
            area_m2,
            area_ha,
            inputs: calculator::compute_inputs(definition, area_ha),
            irrigation: calculator::compute_irrigation(definition, area_ha),
        })
    }

    /// Rebuilds this record from new dimensions, keeping its identifier and crop
    pub fn with_dimensions(&self, dimensions: Dimensions) -> Result<Self, DimensionError> {
        Self::new(self.id, self.crop, dimensions)
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn crop(&self) -> Crop {
        self.crop
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn area_ha(&self) -> f64 {
        self.area_ha
    }

    pub fn inputs(&self) -> &[InputQuantity] {
        &self.inputs
    }

    /// Daily irrigation volume, in the crop's irrigation unit
    pub fn irrigation(&self) -> f64 {
        self.irrigation
    }

    pub fn irrigation_unit(&self) -> &'static str {
        self.crop.definition().irrigation.unit
    }

    /// Amount of a named input, or `None` if the crop doesn't use it
    pub fn input_quantity(&self, name: &str) -> Option<f64> {
        self.inputs
            .iter()
            .find(|input| input.name == name)
            .map(|input| input.quantity)
    }
}
