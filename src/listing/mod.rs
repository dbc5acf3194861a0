// src/listing/mod.rs
pub mod table;

pub use table::ListingTable;

use serde::Deserialize;

/// One entry in the server's file listing. The listing payload is the
/// source of truth; the UI is re-rendered from these rows every frame.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRow {
    pub name: String,
    /// Resource path on the server, e.g. "/files/report.pdf". Doubles as
    /// the DELETE target.
    pub url: String,
    #[serde(default)]
    pub size: u64,
    /// Unix timestamp. None when the server omits it.
    #[serde(default)]
    pub modified: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Modified,
    Size,
}

/// Which column, if any, the table is currently sorted by. At most one
/// key can be active, which the enum enforces by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    ByName,
    ByModified,
    BySize,
}

impl SortState {
    pub fn active_key(self) -> Option<SortKey> {
        match self {
            SortState::Unsorted => None,
            SortState::ByName => Some(SortKey::Name),
            SortState::ByModified => Some(SortKey::Modified),
            SortState::BySize => Some(SortKey::Size),
        }
    }
}

impl From<SortKey> for SortState {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortState::ByName,
            SortKey::Modified => SortState::ByModified,
            SortKey::Size => SortState::BySize,
        }
    }
}
