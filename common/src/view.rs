//! Derivation of the displayed student sequence.
//!
//! `compose` takes the roster snapshot, the course snapshot, the search term
//! and the sort key, and produces the filtered, sorted, course-joined rows
//! the list renders. It is recomputed from scratch whenever an input changes
//! and never mutated directly; the returned iterator is finite and can be
//! restarted by calling `compose` again.

use crate::model::course::Course;
use crate::model::student::Student;

/// Sort key for the student list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Email,
}

/// How the list is laid out. Cosmetic only; carries no data semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Filter, sort and join the roster against the course snapshot.
///
/// A student survives the filter iff its name or email contains `search` as a
/// case-insensitive substring (an empty term keeps everyone). The sort is
/// stable and ascending on the chosen key, so equal keys keep insertion
/// order. The join string-compares course identifiers, since the student side
/// holds the select's string form; a student whose course is missing from the
/// snapshot is paired with `None` rather than dropped.
pub fn compose<'a>(
    students: &'a [Student],
    courses: &'a [Course],
    search: &str,
    sort: SortKey,
) -> impl Iterator<Item = (&'a Student, Option<&'a Course>)> {
    let needle = search.to_lowercase();
    let mut rows: Vec<&Student> = students
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.email.to_lowercase().contains(&needle)
        })
        .collect();
    // Vec::sort_by is stable; ties keep insertion order.
    match sort {
        SortKey::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Email => rows.sort_by(|a, b| a.email.cmp(&b.email)),
    }
    rows.into_iter()
        .map(|student| {
            let course = courses
                .iter()
                .find(|c| c.id.to_string() == student.course_id);
            (student, course)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u64, name: &str, email: &str, course_id: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            email: email.to_string(),
            course_id: course_id.to_string(),
            profile_image: "data:image/png;base64,xyz".to_string(),
        }
    }

    fn courses() -> Vec<Course> {
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

    #[test]
    fn filter_is_case_insensitive_over_name_and_email() {
        let students = vec![
            student(1, "Ann", "a@x.com", "1"),
            student(2, "Bob", "b@x.com", "1"),
        ];
        let all_courses = courses();
        let rows: Vec<_> = compose(&students, &all_courses, "ANN", SortKey::Name).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.name, "Ann");

        // Email side of the filter.
        let rows: Vec<_> = compose(&students, &all_courses, "B@X", SortKey::Name).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.name, "Bob");
    }

    #[test]
    fn empty_search_keeps_everyone() {
        let students = vec![
            student(1, "Ann", "a@x.com", "1"),
            student(2, "Bob", "b@x.com", "2"),
        ];
        let all_courses = courses();
        let rows: Vec<_> = compose(&students, &all_courses, "", SortKey::Name).collect();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn sorts_by_name_ascending() {
        let students = vec![
            student(1, "Bob", "b@x.com", "1"),
            student(2, "Ann", "a@x.com", "1"),
        ];
        let all_courses = courses();
        let names: Vec<_> = compose(&students, &all_courses, "", SortKey::Name)
            .map(|(s, _)| s.name.as_str())
            .collect();
        assert_eq!(names, ["Ann", "Bob"]);
    }

    #[test]
    fn sorts_by_email_when_selected() {
        let students = vec![
            student(1, "Ann", "z@x.com", "1"),
            student(2, "Bob", "a@x.com", "1"),
        ];
        let all_courses = courses();
        let names: Vec<_> = compose(&students, &all_courses, "", SortKey::Email)
            .map(|(s, _)| s.name.as_str())
            .collect();
        assert_eq!(names, ["Bob", "Ann"]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let students = vec![
            student(1, "Ann", "first@x.com", "1"),
            student(2, "Ann", "second@x.com", "1"),
            student(3, "Ann", "third@x.com", "1"),
        ];
        let ids: Vec<_> = compose(&students, &courses(), "", SortKey::Name)
            .map(|(s, _)| s.id)
            .collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn join_string_compares_identifiers() {
        let students = vec![student(1, "Ann", "a@x.com", "2")];
        let all_courses = courses();
        let rows: Vec<_> = compose(&students, &all_courses, "", SortKey::Name).collect();
        assert_eq!(rows[0].1.map(|c| c.name.as_str()), Some("CSS Mastery"));
    }

    #[test]
    fn missing_course_yields_none_not_an_error() {
        let students = vec![student(1, "Ann", "a@x.com", "99")];
        let all_courses = courses();
        let rows: Vec<_> = compose(&students, &all_courses, "", SortKey::Name).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].1.is_none());
    }
}
