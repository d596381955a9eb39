use common::view::{SortKey, ViewMode};

/// Local presentation state: the sort key and the grid/list layout toggle.
/// Both are cosmetic-or-derived concerns; the data itself lives upstream.
pub struct StudentListComponent {
    pub sort: SortKey,
    pub mode: ViewMode,
}

impl StudentListComponent {
    pub fn new() -> Self {
        Self {
            sort: SortKey::default(),
            mode: ViewMode::default(),
        }
    }
}
