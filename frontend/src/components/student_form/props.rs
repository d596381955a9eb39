//! Properties for the student form.
//!
//! The form is fully driven by its parent: the dashboard decides whether it
//! is open, which student (if any) is being edited, and supplies the course
//! snapshot its select is built from. The form never fetches anything itself.

use common::model::course::Course;
use common::model::student::{Student, StudentDraft};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentFormProps {
    /// The student being edited, or `None` when creating a new record.
    #[prop_or_default]
    pub student: Option<Student>,

    /// The ready course snapshot; the course select and the course-membership
    /// validation both run against this exact set.
    pub courses: Vec<Course>,

    /// Emitted with the validated draft when the operator submits.
    pub on_submit: Callback<StudentDraft>,

    /// Emitted when the operator closes the form without submitting.
    pub on_cancel: Callback<()>,
}
