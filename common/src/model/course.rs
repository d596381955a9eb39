use serde::{Deserialize, Serialize};

/// A course as served by `GET /api/courses`.
///
/// The catalog is owned by the backend and read-only to every consumer: the
/// whole set is replaced atomically on each successful fetch, individual
/// records are never mutated. The numeric `id` is server-assigned; student
/// records reference it through a string field, so lookups string-compare
/// the two representations (see `view::compose`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
}
