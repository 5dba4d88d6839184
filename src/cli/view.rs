//! Text rendering of records and banners
//!
//! Decimal places are fixed here and only here: two for areas in m² and for
//! quantities, four for hectares.

use crate::domain::{to_hectares, Dimensions, PlantingRecord};
use crate::storage::FarmConfig;

/// `Registro #1 - Milho`
pub fn title(record: &PlantingRecord) -> String {
    format!("Registro #{} - {}", record.id(), record.crop())
}

pub fn area(record: &PlantingRecord) -> String {
    format!("Área: {:.2} m² ({:.4} ha)", record.area_m2(), record.area_ha())
}

/// Dimensions as `Base: 100m, Altura: 50m`
pub fn dimension_values(dimensions: &Dimensions) -> String {
    dimensions
        .fields()
        .map(|(field, value)| format!("{}: {}m", field, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `- name: qty unit/total` line per input
pub fn inputs(record: &PlantingRecord) -> Vec<String> {
    record
        .inputs()
        .iter()
        .map(|input| format!("- {}: {:.2} {}", input.name, input.quantity, input.display_unit()))
        .collect()
}

pub fn irrigation(record: &PlantingRecord) -> String {
    format!("Irrigação: {:.2} {}", record.irrigation(), record.irrigation_unit())
}

/// Short form used when picking a record: `1. Milho - 5000.00 m²`
pub fn choice(record: &PlantingRecord) -> String {
    format!("{}. {} - {:.2} m²", record.id(), record.crop(), record.area_m2())
}

fn quantities(record: &PlantingRecord, lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push("Insumos necessários:".to_string());
    lines.extend(inputs(record));
    lines.push(String::new());
    lines.push(irrigation(record));
}

/// Block shown right after a record is created
pub fn summary(record: &PlantingRecord) -> Vec<String> {
    let mut lines = vec![title(record), area(record)];
    quantities(record, &mut lines);

    let equipment = record.crop().definition().equipment;
    if !equipment.is_empty() {
        lines.push(String::new());
        lines.push("Equipamentos recomendados:".to_string());
        lines.extend(equipment.iter().map(|item| format!("- {}", item)));
    }
    lines
}

/// Block shown for each record in the listing
pub fn details(record: &PlantingRecord) -> Vec<String> {
    let mut lines = vec![title(record), record.dimensions().to_string(), area(record)];
    quantities(record, &mut lines);
    lines
}

/// Farm name and size lines of the menu banner
pub fn farm(farm: &FarmConfig) -> Vec<String> {
    vec![
        farm.name.clone(),
        format!(
            "Tamanho da Fazenda: {} mil metros quadrados ({} ha)",
            farm.size_m2 / 1000.0,
            to_hectares(farm.size_m2)
        ),
    ]
}
