//! The process-wide course catalog.
//!
//! The catalog is the backend's single piece of state: a fixed list of
//! courses seeded at startup and shared read-only with every request handler
//! through `web::Data` (see `main.rs`). There is no create/update/delete
//! surface, so no lock is needed; handlers only ever read.

use common::model::course::Course;

/// Read-only container for the course set. Cloned once into the Actix app
/// data; the set never changes after `seed`.
#[derive(Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Builds the catalog with the fixed production course set.
    pub fn seed() -> Self {
        let names = [
            "HTML Basics",
            "CSS Mastery",
            "JavaScript Pro",
            "React In Depth",
            "Node.js Backend",
            "Full Stack Development",
        ];
        CourseCatalog {
            courses: names
                .iter()
                .enumerate()
                .map(|(i, name)| Course {
                    id: i as u32 + 1,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// The full, static set of courses.
    pub fn list(&self) -> &[Course] {
        &self.courses
    }
}
