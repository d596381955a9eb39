//! The in-memory roster store.
//!
//! `Roster` owns the authoritative sequence of student records for a session.
//! It is created once (by the dashboard component) and passed by reference to
//! whoever needs a snapshot; there is no ambient/global instance. All content
//! is volatile and lost when the session ends.
//!
//! Every operation runs to completion before the caller regains control, so
//! `list` can never observe a half-applied mutation. Identifiers come from a
//! monotonic counter and are unique for the lifetime of the store, including
//! across deletes.

use crate::model::student::{Student, StudentDraft, StudentPatch};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    /// `update` was asked for an identifier the store does not hold. Callers
    /// treat this as a no-op, not a crash.
    #[error("no student with id {0}")]
    NotFound(u64),
}

#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// Current snapshot, insertion order.
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Appends a new record under a fresh identifier and returns it.
    ///
    /// Never fails; the draft is expected to have passed validation already.
    pub fn create(&mut self, draft: StudentDraft) -> Student {
        let student = Student {
            id: self.next_id,
            name: draft.name,
            email: draft.email,
            course_id: draft.course_id,
            profile_image: draft.profile_image,
        };
        self.next_id += 1;
        self.students.push(student.clone());
        student
    }

    /// Merges the set fields of `patch` into the record with `id`, preserving
    /// everything the patch leaves unset. Insertion order is not disturbed.
    pub fn update(&mut self, id: u64, patch: StudentPatch) -> Result<Student, RosterError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RosterError::NotFound(id))?;
        if let Some(name) = patch.name {
            student.name = name;
        }
        if let Some(email) = patch.email {
            student.email = email;
        }
        if let Some(course_id) = patch.course_id {
            student.course_id = course_id;
        }
        if let Some(profile_image) = patch.profile_image {
            student.profile_image = profile_image;
        }
        Ok(student.clone())
    }

    /// Removes the record with `id`. Absent identifiers are ignored, so the
    /// operation is idempotent.
    pub fn delete(&mut self, id: u64) {
        self.students.retain(|s| s.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> StudentDraft {
        StudentDraft {
            name: name.to_string(),
            email: email.to_string(),
            course_id: "1".to_string(),
            profile_image: "data:image/png;base64,cGl4ZWw=".to_string(),
        }
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let mut roster = Roster::new();
        let a = roster.create(draft("Ann", "ann@example.com")).id;
        let b = roster.create(draft("Bob", "bob@example.com")).id;
        let c = roster.create(draft("Cleo", "cleo@example.com")).id;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn ids_stay_unique_after_delete() {
        let mut roster = Roster::new();
        let a = roster.create(draft("Ann", "ann@example.com")).id;
        roster.delete(a);
        let b = roster.create(draft("Bob", "bob@example.com")).id;
        assert_ne!(a, b);
    }

    #[test]
    fn list_reflects_net_effect_in_insertion_order() {
        let mut roster = Roster::new();
        let a = roster.create(draft("Ann", "ann@example.com")).id;
        let b = roster.create(draft("Bob", "bob@example.com")).id;
        let c = roster.create(draft("Cleo", "cleo@example.com")).id;

        roster.delete(b);
        roster
            .update(c, StudentPatch {
                email: Some("cleo@school.edu".to_string()),
                ..StudentPatch::default()
            })
            .unwrap();

        let names: Vec<_> = roster.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Cleo"]);
        assert_eq!(roster.list()[0].id, a);
        assert_eq!(roster.list()[1].email, "cleo@school.edu");
    }

    #[test]
    fn update_merges_and_preserves_unset_fields() {
        let mut roster = Roster::new();
        let id = roster.create(draft("Ann", "ann@example.com")).id;

        let updated = roster
            .update(id, StudentPatch {
                name: Some("Anna".to_string()),
                ..StudentPatch::default()
            })
            .unwrap();

        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.email, "ann@example.com");
        assert_eq!(updated.course_id, "1");
    }

    #[test]
    fn update_absent_id_is_not_found_and_leaves_store_intact() {
        let mut roster = Roster::new();
        roster.create(draft("Ann", "ann@example.com"));
        let before: Vec<_> = roster.list().to_vec();

        let err = roster.update(999, StudentPatch::default()).unwrap_err();
        assert_eq!(err, RosterError::NotFound(999));
        assert_eq!(roster.list(), before.as_slice());
    }

    #[test]
    fn delete_twice_equals_delete_once() {
        let mut roster = Roster::new();
        let a = roster.create(draft("Ann", "ann@example.com")).id;
        roster.create(draft("Bob", "bob@example.com"));

        roster.delete(a);
        let after_once: Vec<_> = roster.list().to_vec();
        roster.delete(a);
        assert_eq!(roster.list(), after_once.as_slice());
    }

    #[test]
    fn delete_absent_id_is_a_no_op() {
        let mut roster = Roster::new();
        roster.create(draft("Ann", "ann@example.com"));
        roster.delete(42);
        assert_eq!(roster.len(), 1);
    }
}
