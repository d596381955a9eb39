//! Wire contract for the course endpoint.
//!
//! The backend answers `GET /api/courses` with a JSON array of `Course`.
//! `decode_courses` is the client's half of that contract, kept here as a
//! pure function so the status/body mapping can be exercised without a
//! browser: any non-success status and any unparseable body collapse into a
//! single `RemoteFetchError`. Transient and permanent failures are not
//! distinguished; recovery is always a fresh fetch.

use crate::model::course::Course;
use thiserror::Error;

/// The one failure kind of the remote course client. Carries a message fit
/// for the retry panel.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct RemoteFetchError(pub String);

impl RemoteFetchError {
    /// Transport-level failure (request never produced a response).
    pub fn unreachable(detail: impl std::fmt::Display) -> Self {
        RemoteFetchError(format!("Could not load courses: {}", detail))
    }
}

/// Maps a course-endpoint response into the catalog set.
///
/// Only HTTP 200 with a well-formed JSON array succeeds; everything else is
/// a `RemoteFetchError`.
pub fn decode_courses(status: u16, body: &str) -> Result<Vec<Course>, RemoteFetchError> {
    if status != 200 {
        return Err(RemoteFetchError(format!(
            "Could not load courses: server answered HTTP {}",
            status
        )));
    }
    serde_json::from_str(body)
        .map_err(|e| RemoteFetchError(format!("Could not load courses: malformed response ({})", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ok_body_decodes_to_the_exact_set() {
        let body = r#"[{"id":1,"name":"HTML Basics"}]"#;
        let courses = decode_courses(200, body).unwrap();
        assert_eq!(
            courses,
            vec![Course {
                id: 1,
                name: "HTML Basics".to_string(),
            }]
        );
    }

    #[rstest]
    #[case(500, r#"[{"id":1,"name":"HTML Basics"}]"#)]
    #[case(404, "")]
    #[case(200, "not json")]
    #[case(200, r#"{"id":1}"#)]
    fn non_success_or_malformed_is_a_fetch_error(#[case] status: u16, #[case] body: &str) {
        assert!(decode_courses(status, body).is_err());
    }

    #[test]
    fn unknown_course_fields_are_ignored_on_the_wire() {
        // The server may grow fields; the client only needs id and name.
        let body = r#"[{"id":1,"name":"HTML Basics","code":"H-101"}]"#;
        let courses = decode_courses(200, body).unwrap();
        assert_eq!(courses[0].name, "HTML Basics");
    }
}
