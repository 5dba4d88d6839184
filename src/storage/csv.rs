//! CSV export of planting records
//!
//! Writes `dados_agricultura.csv` with one header line and one line per
//! record. Input columns are the union of every input in the crop catalog,
//! so the column set doesn't depend on which crops have been recorded.
//! Values are written unquoted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{input_names, PlantingRecord};

/// Default export file, relative to the working directory
pub const DEFAULT_EXPORT_FILE: &str = "dados_agricultura.csv";

/// Returns the header columns, in output order
pub fn header() -> Vec<&'static str> {
    let mut columns = vec!["id", "cultura", "area_m2", "area_ha"];
    columns.extend(input_names());
    columns.push("irrigacao");
    columns
}

/// Formats one record as a CSV line (without the line terminator)
pub fn row(record: &PlantingRecord) -> String {
    let mut fields = vec![
        record.id().to_string(),
        record.crop().name().to_string(),
        record.area_m2().to_string(),
        record.area_ha().to_string(),
    ];
    fields.extend(input_names().into_iter().map(|name| {
        record
            .input_quantity(name)
            .map(|quantity| quantity.to_string())
            .unwrap_or_else(|| "0".to_string())
    }));
    fields.push(record.irrigation().to_string());
    fields.join(",")
}

/// Writes the header and every record to `writer`, returning the number of rows
pub fn write_records<'a, W: Write>(
    mut writer: W,
    records: impl IntoIterator<Item = &'a PlantingRecord>,
) -> io::Result<usize> {
    writeln!(writer, "{}", header().join(","))?;

    let mut count = 0;
    for record in records {
        writeln!(writer, "{}", row(record))?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

/// Exports records to a CSV file on disk
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Creates an exporter writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the export file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes (or overwrites) the export file, returning the number of rows
    pub fn export<'a>(&self, records: impl IntoIterator<Item = &'a PlantingRecord>) -> Result<usize> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("csv.tmp");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        let written = self.write_and_replace(file, &temp_path, records);
        if written.is_err() {
            // Leave no partial export behind
            let _ = fs::remove_file(&temp_path);
        }
        written
    }

    fn write_and_replace<'a>(
        &self,
        file: File,
        temp_path: &Path,
        records: impl IntoIterator<Item = &'a PlantingRecord>,
    ) -> Result<usize> {
        file.lock_exclusive()
            .context("Failed to acquire write lock on export file")?;

        let count = write_records(BufWriter::new(&file), records)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        drop(file);

        // Atomic rename
        fs::rename(temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Crop, Dimensions, RecordId};
    use tempfile::TempDir;

    fn record(id: u32, crop: Crop, dims: Dimensions) -> PlantingRecord {
        PlantingRecord::new(RecordId::new(id), crop, dims).unwrap()
    }

    #[test]
    fn header_has_all_catalog_inputs() {
        assert_eq!(
            header().join(","),
            "id,cultura,area_m2,area_ha,Calcário,NPK,Sulfato de Amônio,Ureia,irrigacao"
        );
    }

    #[test]
    fn row_fills_missing_inputs_with_zero() {
        let milho = record(1, Crop::Milho, Dimensions::Rectangle { base: 100.0, height: 50.0 });
        assert_eq!(row(&milho), "1,Milho,5000,0.5,0,200,0,100,2.5");

        let mandioca = record(2, Crop::Mandioca, Dimensions::Square { side: 50.0 });
        assert_eq!(row(&mandioca), "2,Mandioca,2500,0.25,25,62.5,0,0,0.5");
    }

    #[test]
    fn writes_one_line_per_record() {
        let records = vec![
            record(1, Crop::Milho, Dimensions::Rectangle { base: 10.0, height: 10.0 }),
            record(3, Crop::Feijao, Dimensions::Triangle { base: 10.0, height: 10.0 }),
        ];

        let mut buf = Vec::new();
        let count = write_records(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(count, 2);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,cultura"));
        assert!(lines[1].starts_with("1,Milho,"));
        assert!(lines[2].starts_with("3,Feijão,"));
    }

    #[test]
    fn export_overwrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        fs::write(&path, "stale contents\nmore\nand more\n").unwrap();

        let records = vec![record(1, Crop::Mandioca, Dimensions::Square { side: 50.0 })];
        let exporter = CsvExporter::new(&path);
        assert_eq!(exporter.export(&records).unwrap(), 1);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("stale"));
        assert!(!dir.path().join("dados_agricultura.csv.tmp").exists());
    }

    #[test]
    fn export_to_directory_fails() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();

        let exporter = CsvExporter::new(&target);
        let records = vec![record(1, Crop::Mandioca, Dimensions::Square { side: 1.0 })];
        assert!(exporter.export(&records).is_err());
        assert!(!dir.path().join("taken.csv.tmp").exists());
    }
}
