//! History screen: lists past calculations and deletes them on request.

use crate::config::Config;
use crate::history::{HistoryRecord, HistoryStore, RecordId};

/// View state for the history screen.
///
/// Borrows the store per call rather than holding it, so the session keeps
/// ownership of the history.
#[derive(Clone, Debug, Default)]
pub struct HistoryView {
    selected_index: Option<usize>,
}

impl HistoryView {
    pub fn new(store: &HistoryStore) -> Self {
        Self {
            selected_index: if store.is_empty() { None } else { Some(0) },
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Get currently selected record.
    pub fn selected_record<'a>(&self, store: &'a HistoryStore) -> Option<&'a HistoryRecord> {
        self.selected_index.and_then(|idx| store.list().get(idx))
    }

    /// Select the row holding record `id`. Returns `false` if it is not listed.
    pub fn select_record(&mut self, store: &HistoryStore, id: RecordId) -> bool {
        match store.list().iter().position(|r| r.id == id) {
            Some(row) => {
                self.selected_index = Some(row);
                true
            }
            None => false,
        }
    }

    /// Move selection up (previous record).
    pub fn select_up(&mut self, store: &HistoryStore) {
        self.sync(store);
        if let Some(idx) = self.selected_index
            && idx > 0
        {
            self.selected_index = Some(idx - 1);
        }
    }

    /// Move selection down (next record).
    pub fn select_down(&mut self, store: &HistoryStore) {
        self.sync(store);
        if let Some(idx) = self.selected_index {
            let max = store.len().saturating_sub(1);
            if idx < max {
                self.selected_index = Some(idx + 1);
            }
        }
    }

    /// Delete the selected record and keep the selection in range.
    pub fn delete_selected(&mut self, store: &mut HistoryStore) -> Option<HistoryRecord> {
        self.sync(store);
        let id = self.selected_record(store)?.id;
        self.delete(store, id)
    }

    /// Delete a record by id (the trash button on a row).
    pub fn delete(&mut self, store: &mut HistoryStore, id: RecordId) -> Option<HistoryRecord> {
        let removed = store.delete(id)?;
        self.sync(store);
        Some(removed)
    }

    /// Keep the selection on an existing row after the store changed.
    ///
    /// Selects the first row once records appear and clears it when none remain.
    pub fn sync(&mut self, store: &HistoryStore) {
        self.selected_index = match (self.selected_index, store.len()) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    /// Render the whole screen as text, marking the selected row with `>`.
    pub fn render(&mut self, store: &HistoryStore, config: &Config) -> String {
        self.sync(store);
        if store.is_empty() {
            return "No history yet".to_string();
        }

        let mut out = String::from("History\n");
        for (row, record) in store.list().iter().enumerate() {
            let marker = if self.selected_index == Some(row) { '>' } else { ' ' };
            out.push('\n');
            out.push_str(&format!("{} [{}]\n", marker, record.id));
            for line in record.display_lines(&config.currency_symbol, &config.date_format) {
                out.push_str("    ");
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}
