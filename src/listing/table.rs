// src/listing/table.rs
use super::{FileRow, SortKey, SortState};

/// The listing table: rows in display order plus the active sort key.
///
/// Clicking the active column's header reverses the current order in
/// place rather than re-sorting; clicking a different column sorts
/// ascending and makes that column the active key. Direction is never
/// stored, it is implicit in the row order itself.
#[derive(Debug, Default)]
pub struct ListingTable {
    rows: Vec<FileRow>,
    state: SortState,
}

impl ListingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[FileRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&FileRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Install a freshly fetched listing. Sort state resets, same as a
    /// page reload would.
    pub fn replace_rows(&mut self, rows: Vec<FileRow>) {
        self.rows = rows;
        self.state = SortState::Unsorted;
    }

    pub fn sort_by(&mut self, key: SortKey) {
        if self.state.active_key() == Some(key) {
            self.rows.reverse();
            return;
        }
        match key {
            SortKey::Name => self
                .rows
                .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            SortKey::Modified => self.rows.sort_by_key(|r| r.modified),
            SortKey::Size => self.rows.sort_by_key(|r| r.size),
        }
        self.state = key.into();
    }
}
