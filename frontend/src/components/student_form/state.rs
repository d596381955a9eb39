//! Form state: the draft under edit, per-field errors, and touched tracking.
//!
//! Errors are only rendered for touched fields, so the operator is not
//! shouted at before they ever reach a field. Submitting touches everything.

use std::collections::{BTreeMap, BTreeSet};

use common::model::student::{Student, StudentDraft};
use common::validation::StudentField;
use yew::prelude::*;

pub struct StudentFormComponent {
    /// The fields as currently entered.
    pub draft: StudentDraft,

    /// Validation errors for the current draft, keyed by field.
    pub errors: BTreeMap<StudentField, String>,

    /// Fields the operator has interacted with; only these show errors.
    pub touched: BTreeSet<StudentField>,

    /// Reference to the hidden file input used for the photo.
    pub file_input_ref: NodeRef,
}

impl StudentFormComponent {
    /// Fresh state: empty draft for create, the student's current fields for
    /// edit. Nothing is touched yet either way.
    pub fn from_student(student: Option<&Student>) -> Self {
        let draft = match student {
            Some(s) => StudentDraft {
                name: s.name.clone(),
                email: s.email.clone(),
                course_id: s.course_id.clone(),
                profile_image: s.profile_image.clone(),
            },
            None => StudentDraft::default(),
        };
        Self {
            draft,
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            file_input_ref: Default::default(),
        }
    }

    /// The error to display for `field`, if it is touched and invalid.
    pub fn visible_error(&self, field: StudentField) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }
}
