use serde::{Deserialize, Serialize};

/// A student record held by the roster store.
///
/// The `id` is assigned once by `Roster::create` and never changes. All other
/// fields are only ever rewritten through `Roster::update`; nothing else
/// mutates a record in place. `course_id` keeps the string form the course
/// select produced, `profile_image` is an opaque data URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub course_id: String,
    pub profile_image: String,
}

/// The full set of operator-supplied fields for a new student.
///
/// Unknown fields are rejected at the serde boundary so an any-shaped payload
/// cannot smuggle extra attributes into the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub course_id: String,
    pub profile_image: String,
}

/// A partial update for an existing student. `None` fields are left as they
/// are; `Roster::update` merges the rest over the stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course_id: Option<String>,
    pub profile_image: Option<String>,
}

impl From<StudentDraft> for StudentPatch {
    fn from(draft: StudentDraft) -> Self {
        StudentPatch {
            name: Some(draft.name),
            email: Some(draft.email),
            course_id: Some(draft.course_id),
            profile_image: Some(draft.profile_image),
        }
    }
}
