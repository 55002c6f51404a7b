use ndarray::{array, Array1};
use percept::synthetic::{MAX_HOURS, MAX_PERCENTAGE};
use percept::{BinaryLabel, DataPoint};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by the record store when a value is out of its declared range.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    InvalidHours(f64),
    InvalidPercentage(f64),
    InvalidIndex { index: usize, len: usize },
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::InvalidHours(h) => {
                write!(f, "Hours must be between 0 and {}, got {}", MAX_HOURS, h)
            }
            RecordError::InvalidPercentage(p) => {
                write!(f, "Percentage must be between 0 and {}, got {}", MAX_PERCENTAGE, p)
            }
            RecordError::InvalidIndex { index, len } => {
                write!(f, "Invalid index {} (there are {} records)", index, len)
            }
        }
    }
}

impl Error for RecordError {}

/// One row of the store: a duration, a percentage and the known outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub hours: f64,
    pub percentage: f64,
    pub label: BinaryLabel,
}

impl Record {
    pub fn features(&self) -> Array1<f64> {
        array![self.hours, self.percentage]
    }
}

/// Checks that a (hours, percentage) pair lies in the domain ranges.
pub fn validate_sample(hours: f64, percentage: f64) -> Result<(), RecordError> {
    if !(0.0..=MAX_HOURS).contains(&hours) {
        return Err(RecordError::InvalidHours(hours));
    }
    if !(0.0..=MAX_PERCENTAGE).contains(&percentage) {
        return Err(RecordError::InvalidPercentage(percentage));
    }
    Ok(())
}

/// An ordered, validated list of records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and returns its index.
    pub fn insert(
        &mut self,
        hours: f64,
        percentage: f64,
        label: BinaryLabel,
    ) -> Result<usize, RecordError> {
        validate_sample(hours, percentage)?;
        self.records.push(Record { hours, percentage, label });
        Ok(self.records.len() - 1)
    }

    /// Changes the given fields of the record at `index`; `None` keeps the current value.
    ///
    /// All supplied values are checked before anything is written.
    pub fn update(
        &mut self,
        index: usize,
        hours: Option<f64>,
        percentage: Option<f64>,
        label: Option<BinaryLabel>,
    ) -> Result<Record, RecordError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(RecordError::InvalidIndex { index, len })?;

        let new_hours = hours.unwrap_or(record.hours);
        let new_percentage = percentage.unwrap_or(record.percentage);
        validate_sample(new_hours, new_percentage)?;

        record.hours = new_hours;
        record.percentage = new_percentage;
        if let Some(label) = label {
            record.label = label;
        }
        Ok(*record)
    }

    pub fn delete(&mut self, index: usize) -> Result<Record, RecordError> {
        if index >= self.records.len() {
            return Err(RecordError::InvalidIndex {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replaces the content with `data`, skipping points outside the domain ranges.
    pub fn load(&mut self, data: &[DataPoint<BinaryLabel, f64>]) -> usize {
        self.records.clear();
        for dp in data {
            if dp.dim() != 2 {
                log::warn!("Skipping point with {} features", dp.dim());
                continue;
            }
            if let Err(e) = self.insert(dp.features[0], dp.features[1], dp.label) {
                log::warn!("Skipping point: {}", e);
            }
        }
        self.records.len()
    }

    /// The two index-aligned sequences the classifier trains on.
    pub fn training_set(&self) -> (Vec<Array1<f64>>, Vec<BinaryLabel>) {
        self.records
            .iter()
            .map(|r| (r.features(), r.label))
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percept::synthetic::linearly_separable;
    use percept::BinaryLabel::{Negative, Positive};

    fn store() -> RecordStore {
        let mut s = RecordStore::new();
        s.insert(10.0, 20.0, Negative).unwrap();
        s.insert(40.0, 90.0, Positive).unwrap();
        s
    }

    #[test]
    fn test_insert_and_list() {
        let s = store();
        assert_eq!(s.len(), 2);
        assert_eq!(
            s.records()[1],
            Record { hours: 40.0, percentage: 90.0, label: Positive }
        );
    }

    #[test]
    fn test_insert_bounds_are_inclusive() {
        let mut s = RecordStore::new();
        assert_eq!(s.insert(0.0, 0.0, Negative), Ok(0));
        assert_eq!(s.insert(168.0, 100.0, Positive), Ok(1));
    }

    #[test]
    fn test_insert_rejects_out_of_range() {
        let mut s = RecordStore::new();
        assert_eq!(s.insert(169.0, 50.0, Positive), Err(RecordError::InvalidHours(169.0)));
        assert_eq!(s.insert(-1.0, 50.0, Positive), Err(RecordError::InvalidHours(-1.0)));
        assert_eq!(
            s.insert(10.0, 100.5, Positive),
            Err(RecordError::InvalidPercentage(100.5))
        );
        assert!(s.insert(f64::NAN, 50.0, Positive).is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn test_update_partial() {
        let mut s = store();
        let updated = s.update(0, None, Some(35.0), None).unwrap();
        assert_eq!(updated, Record { hours: 10.0, percentage: 35.0, label: Negative });

        let updated = s.update(0, Some(12.5), None, Some(Positive)).unwrap();
        assert_eq!(updated, Record { hours: 12.5, percentage: 35.0, label: Positive });
    }

    #[test]
    fn test_update_is_atomic() {
        let mut s = store();
        let before = s.records()[0];
        let err = s.update(0, Some(20.0), Some(150.0), Some(Positive)).unwrap_err();
        assert_eq!(err, RecordError::InvalidPercentage(150.0));
        assert_eq!(s.records()[0], before);
    }

    #[test]
    fn test_update_and_delete_bad_index() {
        let mut s = store();
        assert_eq!(
            s.update(5, Some(1.0), None, None).unwrap_err(),
            RecordError::InvalidIndex { index: 5, len: 2 }
        );
        assert_eq!(s.delete(2).unwrap_err(), RecordError::InvalidIndex { index: 2, len: 2 });
    }

    #[test]
    fn test_delete_shifts_indices() {
        let mut s = store();
        let removed = s.delete(0).unwrap();
        assert_eq!(removed.hours, 10.0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.records()[0].hours, 40.0);
    }

    #[test]
    fn test_training_set_is_aligned() {
        let s = store();
        let (samples, labels) = s.training_set();
        assert_eq!(samples, vec![array![10.0, 20.0], array![40.0, 90.0]]);
        assert_eq!(labels, vec![Negative, Positive]);
    }

    #[test]
    fn test_load_synthetic() {
        let mut s = store();
        let data = linearly_separable(15, 4);
        assert_eq!(s.load(&data), 30);
        assert_eq!(s.records()[0].features(), data[0].features);
    }

    #[test]
    fn test_validate_sample() {
        assert!(validate_sample(84.0, 50.0).is_ok());
        assert_eq!(validate_sample(84.0, -3.0), Err(RecordError::InvalidPercentage(-3.0)));
    }
}
