//! In-memory calculation history for the current session.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use super::record::{HistoryRecord, RecordId};
use crate::calculator::{CalculationInput, CalculationResult};

/// Ordered, session-lifetime history of calculations (oldest first).
///
/// Owned by whoever drives the session and handed to the parts that need it.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
    next_id: u64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `input` and `result`, stamped with the current time.
    ///
    /// Returns the new record's id, or `None` when the result has no tier.
    pub fn record(
        &mut self,
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Option<RecordId> {
        self.record_at(input, result, Local::now())
    }

    /// Same as [`record`](Self::record) with an explicit timestamp.
    pub fn record_at(
        &mut self,
        input: &CalculationInput,
        result: &CalculationResult,
        timestamp: DateTime<Local>,
    ) -> Option<RecordId> {
        let id = RecordId(self.next_id);
        let Some(record) = HistoryRecord::from_calculation(id, input, result, timestamp) else {
            debug!("no tier selected, calculation not recorded");
            return None;
        };

        self.next_id += 1;
        info!(
            id = %id,
            service_level = %record.service_level_label,
            total = %record.total_bill,
            "recorded calculation"
        );
        self.records.push(record);
        Some(id)
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: RecordId) -> Option<HistoryRecord> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            debug!(id = %id, "delete ignored, no such record");
            return None;
        };

        info!(id = %id, "deleted history record");
        Some(self.records.remove(index))
    }

    /// Remove the first record whose contents equal `record`'s, ignoring ids.
    ///
    /// Field-identical records are indistinguishable here; prefer
    /// [`delete`](Self::delete) when the id is known.
    pub fn delete_matching(&mut self, record: &HistoryRecord) -> bool {
        match self.records.iter().position(|r| r.same_contents(record)) {
            Some(index) => {
                let removed = self.records.remove(index);
                info!(id = %removed.id, "deleted matching history record");
                true
            }
            None => {
                debug!("delete ignored, no matching record");
                false
            }
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record. Ids keep counting up.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ServiceTierKind;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 19, 12, 0, 0)
            .earliest()
            .unwrap()
    }

    fn great_fifty() -> CalculationInput {
        CalculationInput::new("50.00", Some(ServiceTierKind::Great)).with_restaurant("Cafe", "Oslo")
    }

    #[test]
    fn test_record_appends_snapshot() {
        let mut store = HistoryStore::new();
        let input = great_fifty();
        let result = input.calculate();

        let id = store.record(&input, &result).unwrap();

        assert_eq!(store.len(), 1);
        let record = store.get(id).unwrap();
        assert_eq!(record.restaurant_name, "Cafe");
        assert_eq!(record.total_bill, "60.00");
    }

    #[test]
    fn test_record_is_a_copy() {
        let mut store = HistoryStore::new();
        let mut input = great_fifty();
        let result = input.calculate();
        store.record(&input, &result);

        input.restaurant_name.push_str(" Royale");
        input.bill_amount = "999".to_string();

        assert_eq!(store.list()[0].restaurant_name, "Cafe");
        assert_eq!(store.list()[0].bill_amount, "50.00");
    }

    #[test]
    fn test_no_tier_is_not_recorded() {
        let mut store = HistoryStore::new();
        let input = CalculationInput::new("50", None);
        let result = input.calculate();

        assert_eq!(store.record(&input, &result), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut store = HistoryStore::new();
        let first = great_fifty();
        let second = CalculationInput::new("10", Some(ServiceTierKind::Good));

        let a = store.record_at(&first, &first.calculate(), noon()).unwrap();
        let b = store.record_at(&second, &second.calculate(), noon()).unwrap();
        let c = store.record_at(&first, &first.calculate(), noon()).unwrap();

        let ids: Vec<RecordId> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert!(store.list()[0].same_contents(&store.list()[2]));
    }

    #[test]
    fn test_delete_by_id_targets_exact_record() {
        let mut store = HistoryStore::new();
        let input = great_fifty();
        let result = input.calculate();
        let first = store.record_at(&input, &result, noon()).unwrap();
        let second = store.record_at(&input, &result, noon()).unwrap();

        let removed = store.delete(second).unwrap();

        assert_eq!(removed.id, second);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, first);
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut store = HistoryStore::new();
        let input = great_fifty();
        store.record(&input, &input.calculate());

        assert!(store.delete(RecordId(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_matching_removes_first_match() {
        let mut store = HistoryStore::new();
        let input = great_fifty();
        let result = input.calculate();
        let first = store.record_at(&input, &result, noon()).unwrap();
        let second = store.record_at(&input, &result, noon()).unwrap();
        let copy = store.get(second).unwrap().clone();

        assert!(store.delete_matching(&copy));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, second);
        assert!(store.get(first).is_none());
    }

    #[test]
    fn test_delete_matching_absent_is_noop() {
        let mut store = HistoryStore::new();
        let input = great_fifty();
        let id = store.record_at(&input, &input.calculate(), noon()).unwrap();
        let mut other = store.get(id).unwrap().clone();
        other.total_bill = "1.00".to_string();

        assert!(!store.delete_matching(&other));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut store = HistoryStore::new();
        let input = great_fifty();
        let first = store.record(&input, &input.calculate()).unwrap();
        store.delete(first);
        store.clear();

        let next = store.record(&input, &input.calculate()).unwrap();
        assert_ne!(first, next);
    }
}
