//! Crop catalog
//!
//! Fixed reference data for every crop the farm plants: the shape its
//! planting area is measured in, the inputs it needs per hectare, its daily
//! irrigation rate and the equipment recommended for it.

use std::collections::BTreeSet;
use std::fmt;

use super::dimensions::DimensionField;

/// Planar shape used to measure a planting area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Rectangle,
    Triangle,
    Square,
}

impl GeometryKind {
    /// Returns the display label for the shape
    pub fn label(&self) -> &'static str {
        match self {
            GeometryKind::Rectangle => "Retângulo",
            GeometryKind::Triangle => "Triângulo",
            GeometryKind::Square => "Quadrado",
        }
    }

    /// Returns the area formula shown to the user
    pub fn formula(&self) -> &'static str {
        match self {
            GeometryKind::Rectangle => "Base × Altura",
            GeometryKind::Triangle => "(Base × Altura) / 2",
            GeometryKind::Square => "Lado²",
        }
    }

    /// Returns the dimensions this shape is measured by, in prompt order
    pub fn fields(&self) -> &'static [DimensionField] {
        match self {
            GeometryKind::Rectangle | GeometryKind::Triangle => {
                &[DimensionField::Base, DimensionField::Height]
            }
            GeometryKind::Square => &[DimensionField::Side],
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quantity of one input a crop needs per hectare
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRequirement {
    pub name: &'static str,
    pub per_hectare: f64,
    /// Per-hectare unit, e.g. `kg/ha`
    pub unit: &'static str,
}

/// Daily irrigation a crop needs per hectare
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrigationRate {
    pub per_hectare: f64,
    pub unit: &'static str,
}

/// Reference data for a single crop
#[derive(Debug, PartialEq)]
pub struct CropDefinition {
    pub name: &'static str,
    pub geometry: GeometryKind,
    pub inputs: &'static [InputRequirement],
    pub irrigation: IrrigationRate,
    pub equipment: &'static [&'static str],
}

impl CropDefinition {
    /// Looks up the requirement for a named input
    pub fn input(&self, name: &str) -> Option<&InputRequirement> {
        self.inputs.iter().find(|input| input.name == name)
    }
}

static MILHO: CropDefinition = CropDefinition {
    name: "Milho",
    geometry: GeometryKind::Rectangle,
    inputs: &[
        InputRequirement { name: "NPK", per_hectare: 400.0, unit: "kg/ha" },
        InputRequirement { name: "Ureia", per_hectare: 200.0, unit: "kg/ha" },
    ],
    irrigation: IrrigationRate { per_hectare: 5.0, unit: "mm/dia" },
    equipment: &[
        "Trator com semeadora/adubadora",
        "Pulverizador",
        "Colheitadeira",
    ],
};

static FEIJAO: CropDefinition = CropDefinition {
    name: "Feijão",
    geometry: GeometryKind::Triangle,
    inputs: &[
        InputRequirement { name: "NPK", per_hectare: 300.0, unit: "kg/ha" },
        InputRequirement { name: "Sulfato de Amônio", per_hectare: 150.0, unit: "kg/ha" },
    ],
    irrigation: IrrigationRate { per_hectare: 4.0, unit: "mm/dia" },
    equipment: &[
        "Trator com semeadora",
        "Pulverizador costal",
        "Colheita manual/mecânica",
    ],
};

static MANDIOCA: CropDefinition = CropDefinition {
    name: "Mandioca",
    geometry: GeometryKind::Square,
    inputs: &[
        InputRequirement { name: "NPK", per_hectare: 250.0, unit: "kg/ha" },
        InputRequirement { name: "Calcário", per_hectare: 100.0, unit: "kg/ha" },
    ],
    irrigation: IrrigationRate { per_hectare: 2.0, unit: "mm/dia" },
    equipment: &[
        "Enxada rotativa",
        "Trator com plantadora",
        "Facões para colheita",
    ],
};

/// A crop from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Milho,
    Feijao,
    Mandioca,
}

impl Crop {
    /// Every crop, in menu order
    pub const ALL: [Crop; 3] = [Crop::Milho, Crop::Feijao, Crop::Mandioca];

    /// Returns the reference data for this crop
    pub fn definition(self) -> &'static CropDefinition {
        match self {
            Crop::Milho => &MILHO,
            Crop::Feijao => &FEIJAO,
            Crop::Mandioca => &MANDIOCA,
        }
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn geometry(self) -> GeometryKind {
        self.definition().geometry
    }

    /// Resolves a 1-based menu position
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Union of every input name defined anywhere in the catalog, sorted
pub fn input_names() -> BTreeSet<&'static str> {
    Crop::ALL
        .iter()
        .flat_map(|crop| crop.definition().inputs.iter().map(|input| input.name))
        .collect()
}

/// Rewrites a per-hectare unit into its whole-area form (`kg/ha` -> `kg/total`)
pub fn total_unit(per_hectare_unit: &str) -> String {
    match per_hectare_unit.strip_suffix("ha") {
        Some(prefix) => format!("{}total", prefix),
        None => per_hectare_unit.to_string(),
    }
}
