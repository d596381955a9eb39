//! Field and form validation for student drafts.
//!
//! Every rule is a pure function over the candidate value plus the current
//! course catalog snapshot; errors come back as data and are rendered inline
//! next to the offending field, never thrown. The set of validated fields is
//! the closed `StudentField` enum, so a new field cannot be added without the
//! compiler pointing at every match that has to learn about it.

use crate::model::course::Course;
use crate::model::student::StudentDraft;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// The fields a student draft is validated on. Exhaustive on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StudentField {
    Name,
    Email,
    CourseId,
    ProfileImage,
}

impl StudentField {
    pub const ALL: [StudentField; 4] = [
        StudentField::Name,
        StudentField::Email,
        StudentField::CourseId,
        StudentField::ProfileImage,
    ];

    /// The draft value this field validates.
    pub fn value_of<'a>(&self, draft: &'a StudentDraft) -> &'a str {
        match self {
            StudentField::Name => &draft.name,
            StudentField::Email => &draft.email,
            StudentField::CourseId => &draft.course_id,
            StudentField::ProfileImage => &draft.profile_image,
        }
    }

    /// Writes `value` into the draft slot this field validates.
    pub fn set_value(&self, draft: &mut StudentDraft, value: String) {
        match self {
            StudentField::Name => draft.name = value,
            StudentField::Email => draft.email = value,
            StudentField::CourseId => draft.course_id = value,
            StudentField::ProfileImage => draft.profile_image = value,
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StudentField::Name => "name",
            StudentField::Email => "email",
            StudentField::CourseId => "course",
            StudentField::ProfileImage => "profile photo",
        };
        write!(f, "{}", label)
    }
}

/// Validates one field value against the rules for `field`.
///
/// Returns `Some(message)` with a human-readable error, or `None` when the
/// value is acceptable. `catalog` is the course snapshot the form's select is
/// built from; the course field must name one of its entries, so a reference
/// can never dangle at validation time.
pub fn validate_field(field: StudentField, value: &str, catalog: &[Course]) -> Option<String> {
    match field {
        StudentField::Name => {
            if value.trim().is_empty() {
                return Some("Full name is required".to_string());
            }
            if value.trim().len() < 2 {
                return Some("Name must be at least 2 characters".to_string());
            }
            // ASCII letters and whitespace only; hyphens, apostrophes and
            // diacritics are rejected.
            let letters = Regex::new(r"^[A-Za-z\s]+$").unwrap();
            if !letters.is_match(value) {
                return Some("Name can only contain letters and spaces".to_string());
            }
            None
        }
        StudentField::Email => {
            if value.trim().is_empty() {
                return Some("Email address is required".to_string());
            }
            let address = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
            if !address.is_match(value) {
                return Some("Please enter a valid email address".to_string());
            }
            None
        }
        StudentField::CourseId => {
            if value.is_empty() {
                return Some("Course selection is required".to_string());
            }
            if !catalog.iter().any(|c| c.id.to_string() == value) {
                return Some("Selected course is not in the catalog".to_string());
            }
            None
        }
        StudentField::ProfileImage => {
            if value.trim().is_empty() {
                return Some("Profile photo is required".to_string());
            }
            None
        }
    }
}

/// Runs `validate_field` over every recognized field of the draft.
///
/// An empty map means the draft is acceptable for submission.
pub fn validate_draft(
    draft: &StudentDraft,
    catalog: &[Course],
) -> BTreeMap<StudentField, String> {
    let mut errors = BTreeMap::new();
    for field in StudentField::ALL {
        if let Some(message) = validate_field(field, field.value_of(draft), catalog) {
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog() -> Vec<Course> {
        vec![
            Course {
                id: 1,
                name: "HTML Basics".to_string(),
            },
            Course {
                id: 2,
                name: "CSS Mastery".to_string(),
            },
        ]
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("A", false)]
    #[case("Ann", true)]
    #[case("Ann Lee", true)]
    #[case("Jean-Luc", false)] // hyphen rejected
    #[case("O'Brien", false)] // apostrophe rejected
    #[case("Zoë", false)] // diacritic rejected
    #[case("Ann3", false)]
    fn name_rules(#[case] value: &str, #[case] ok: bool) {
        let result = validate_field(StudentField::Name, value, &catalog());
        assert_eq!(result.is_none(), ok, "name {:?} -> {:?}", value, result);
    }

    #[rstest]
    #[case("", false)]
    #[case("not-an-email", false)]
    #[case("a@b", false)]
    #[case("a b@c.co", false)]
    #[case("a@b.co", true)]
    #[case("first.last@school.edu", true)]
    fn email_rules(#[case] value: &str, #[case] ok: bool) {
        let result = validate_field(StudentField::Email, value, &catalog());
        assert_eq!(result.is_none(), ok, "email {:?} -> {:?}", value, result);
    }

    #[rstest]
    #[case("", false)]
    #[case("1", true)]
    #[case("2", true)]
    #[case("99", false)] // not in the snapshot
    fn course_rules(#[case] value: &str, #[case] ok: bool) {
        let result = validate_field(StudentField::CourseId, value, &catalog());
        assert_eq!(result.is_none(), ok, "course {:?} -> {:?}", value, result);
    }

    #[test]
    fn profile_image_must_be_attached() {
        assert!(validate_field(StudentField::ProfileImage, "", &catalog()).is_some());
        assert!(validate_field(StudentField::ProfileImage, "  ", &catalog()).is_some());
        assert!(
            validate_field(StudentField::ProfileImage, "data:image/png;base64,xyz", &catalog())
                .is_none()
        );
    }

    #[test]
    fn valid_draft_yields_empty_map() {
        let draft = StudentDraft {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            course_id: "1".to_string(),
            profile_image: "data:image/png;base64,xyz".to_string(),
        };
        assert!(validate_draft(&draft, &catalog()).is_empty());
    }

    #[test]
    fn empty_draft_flags_every_field() {
        let errors = validate_draft(&StudentDraft::default(), &catalog());
        assert_eq!(errors.len(), StudentField::ALL.len());
        for field in StudentField::ALL {
            assert!(errors.contains_key(&field), "missing error for {}", field);
        }
    }
}
