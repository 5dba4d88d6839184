//! In-memory record store
//!
//! Records live only for the lifetime of the process. Order is insertion
//! order; identifiers come from a counter that only moves forward, so a
//! deleted record's identifier is never handed out again.

use thiserror::Error;

use crate::domain::{Crop, DimensionError, Dimensions, PlantingRecord, RecordId};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Record {0} not found")]
    NotFound(RecordId),

    #[error(transparent)]
    Dimensions(#[from] DimensionError),
}

/// Ordered collection of planting records
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<PlantingRecord>,
    next_id: RecordId,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store; the first record gets identifier 1
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: RecordId::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in storage order
    pub fn iter(&self) -> impl Iterator<Item = &PlantingRecord> {
        self.records.iter()
    }

    /// Finds a record by identifier
    pub fn get(&self, id: RecordId) -> Option<&PlantingRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn position(&self, id: RecordId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Computes and appends a new record. Nothing is stored if the
    /// dimensions don't fit the crop's shape.
    pub fn create(&mut self, crop: Crop, dimensions: Dimensions) -> Result<&PlantingRecord, StoreError> {
        let record = PlantingRecord::new(self.next_id, crop, dimensions)?;
        self.next_id = self.next_id.next();
        self.records.push(record);

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Replaces a record's dimensions in place and recomputes its derived values
    pub fn update(&mut self, id: RecordId, dimensions: Dimensions) -> Result<&PlantingRecord, StoreError> {
        let index = self.position(id)?;
        let updated = self.records[index].with_dimensions(dimensions)?;
        self.records[index] = updated;
        Ok(&self.records[index])
    }

    /// Removes a record; other records keep their identifiers
    pub fn remove(&mut self, id: RecordId) -> Result<PlantingRecord, StoreError> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milho(base: f64, height: f64) -> Dimensions {
        Dimensions::Rectangle { base, height }
    }

    #[test]
    fn empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(RecordId::new(1)).is_none());
    }

    #[test]
    fn ids_are_sequential() {
        let mut store = RecordStore::new();
        let first = store.create(Crop::Milho, milho(10.0, 10.0)).unwrap().id();
        let second = store
            .create(Crop::Mandioca, Dimensions::Square { side: 5.0 })
            .unwrap()
            .id();

        assert_eq!(first, RecordId::new(1));
        assert_eq!(second, RecordId::new(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn mismatched_dimensions_store_nothing() {
        let mut store = RecordStore::new();
        let result = store.create(Crop::Mandioca, milho(1.0, 2.0));
        assert!(matches!(result, Err(StoreError::Dimensions(_))));
        assert!(store.is_empty());

        // The failed attempt doesn't consume an identifier
        let id = store.create(Crop::Milho, milho(1.0, 2.0)).unwrap().id();
        assert_eq!(id, RecordId::new(1));
    }

    #[test]
    fn remove_keeps_other_ids() {
        let mut store = RecordStore::new();
        for side in [1.0, 2.0, 3.0] {
            store.create(Crop::Mandioca, Dimensions::Square { side }).unwrap();
        }

        let removed = store.remove(RecordId::new(2)).unwrap();
        assert_eq!(removed.id(), RecordId::new(2));

        let ids: Vec<_> = store.iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn ids_not_reused_after_delete() {
        let mut store = RecordStore::new();
        for side in [1.0, 2.0, 3.0] {
            store.create(Crop::Mandioca, Dimensions::Square { side }).unwrap();
        }
        store.remove(RecordId::new(1)).unwrap();

        let id = store.create(Crop::Mandioca, Dimensions::Square { side: 4.0 }).unwrap().id();
        assert_eq!(id, RecordId::new(4));
    }

    #[test]
    fn remove_missing() {
        let mut store = RecordStore::new();
        store.create(Crop::Milho, milho(1.0, 1.0)).unwrap();
        assert_eq!(
            store.remove(RecordId::new(9)).unwrap_err(),
            StoreError::NotFound(RecordId::new(9))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_recomputes_in_place() {
        let mut store = RecordStore::new();
        store.create(Crop::Milho, milho(10.0, 10.0)).unwrap();
        store.create(Crop::Milho, milho(100.0, 50.0)).unwrap();

        let updated = store.update(RecordId::new(1), milho(100.0, 100.0)).unwrap();
        assert_eq!(updated.id(), RecordId::new(1));
        assert_eq!(updated.area_ha(), 1.0);
        assert_eq!(updated.input_quantity("NPK"), Some(400.0));

        // Position unchanged
        let first = store.iter().next().unwrap();
        assert_eq!(first.id(), RecordId::new(1));
        assert_eq!(first.area_m2(), 10_000.0);
    }

    #[test]
    fn update_with_same_dimensions_is_noop() {
        let mut store = RecordStore::new();
        let before = store.create(Crop::Milho, milho(100.0, 50.0)).unwrap().clone();
        let after = store.update(before.id(), *before.dimensions()).unwrap();
        assert_eq!(&before, after);
    }

    #[test]
    fn update_missing() {
        let mut store = RecordStore::new();
        let err = store.update(RecordId::new(1), milho(1.0, 1.0)).unwrap_err();
        assert_eq!(err, StoreError::NotFound(RecordId::new(1)));
    }
}
