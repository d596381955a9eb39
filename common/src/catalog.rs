//! Course catalog snapshot state and fetch sequencing.
//!
//! The catalog as seen by the client is either fully absent (not yet loaded,
//! loading, or failed) or one complete, internally consistent set; there is
//! no partially populated state. `CatalogState` encodes exactly those shapes.
//!
//! Fetches are not cancelled, so a slow response can arrive after a newer
//! request was issued. `FetchGuard` stamps every fetch with a monotonically
//! increasing sequence number and accepts only the completion that matches
//! the latest one; a stale response is discarded instead of overwriting a
//! fresher snapshot.

use crate::model::course::Course;

/// Lifecycle of the client-side catalog snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// No fetch has been issued yet.
    #[default]
    Absent,
    /// A fetch is outstanding; dependent views render a loading state.
    Loading,
    /// The last fetch succeeded with this complete set.
    Ready(Vec<Course>),
    /// The last fetch failed; the operator can trigger a retry.
    Failed(String),
}

impl CatalogState {
    /// The snapshot to derive views from: the ready set, or nothing.
    pub fn courses(&self) -> &[Course] {
        match self {
            CatalogState::Ready(courses) => courses,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }
}

/// Issues fetch sequence numbers and filters out stale completions.
#[derive(Debug, Default)]
pub struct FetchGuard {
    latest: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        FetchGuard::default()
    }

    /// Registers a new fetch and returns its sequence number. Any completion
    /// still in flight for an earlier sequence is superseded from this point.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a completion stamped with `seq` is the one currently awaited.
    pub fn accepts(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_completion_is_rejected() {
        let mut guard = FetchGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        // The slow first response lands after the second fetch started.
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn retry_supersedes_a_failed_fetch() {
        let mut guard = FetchGuard::new();
        let initial = guard.begin();
        assert!(guard.accepts(initial));

        let retry = guard.begin();
        assert!(!guard.accepts(initial));
        assert!(guard.accepts(retry));
    }

    #[test]
    fn absent_and_failed_states_expose_no_courses() {
        assert!(CatalogState::Absent.courses().is_empty());
        assert!(CatalogState::Failed("down".to_string()).courses().is_empty());
        let ready = CatalogState::Ready(vec![Course {
            id: 1,
            name: "HTML Basics".to_string(),
        }]);
        assert_eq!(ready.courses().len(), 1);
    }
}
