//! Dashboard state.
//!
//! The dashboard owns the session's `Roster` and the catalog snapshot; both
//! are created here and handed to child components as props, never reached
//! through ambient context. The roster lives exactly as long as the
//! component, which is the session.

use common::catalog::{CatalogState, FetchGuard};
use common::roster::Roster;

pub struct DashboardComponent {
    /// The authoritative student store for this session.
    pub roster: Roster,

    /// The course snapshot: absent, loading, one complete set, or failed.
    pub catalog: CatalogState,

    /// Sequence numbers for course fetches; stale completions are dropped.
    pub fetch_guard: FetchGuard,

    /// Current search term, empty keeps everyone.
    pub search: String,

    /// Whether the student form is open.
    pub form_open: bool,

    /// Id of the student being edited; `None` while creating.
    pub editing: Option<u64>,

    /// Guard so the first-render fetch is only issued once.
    pub loaded: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            catalog: CatalogState::default(),
            fetch_guard: FetchGuard::new(),
            search: String::new(),
            form_open: false,
            editing: None,
            loaded: false,
        }
    }
}
