//! # Course Service Module
//!
//! Aggregates the API endpoints for the course catalog. It acts as a router,
//! directing requests under the `/api/courses` path to the handler logic in
//! its sub-modules.
//!
//! ## Sub-modules:
//! - `list`: Serves the full course catalog as a JSON array.

mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all course-related API endpoints.
const API_PATH: &str = "/api/courses";

/// Configures and returns the Actix `Scope` for the course routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/courses`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns the complete, static course catalog as a
///       JSON array of `{ id, name }` objects. Takes no query parameters and
///       always answers `200 OK`; the set is fixed at process start.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseCatalog;
    use actix_web::{test as actix_test, web, App};
    use common::model::course::Course;

    macro_rules! test_app {
        () => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(CourseCatalog::seed()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn list_answers_200_with_the_seeded_catalog() {
        let app = test_app!();

        let request = actix_test::TestRequest::get().uri("/api/courses").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let body = actix_test::read_body(response).await;
        let courses: Vec<Course> = serde_json::from_slice(&body).expect("course array");
        assert_eq!(courses, CourseCatalog::seed().list());
    }

    #[actix_web::test]
    async fn wire_shape_is_id_and_name() {
        let app = test_app!();

        let request = actix_test::TestRequest::get().uri("/api/courses").to_request();
        let response = actix_test::call_service(&app, request).await;
        let body = actix_test::read_body(response).await;
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");

        let first = value.as_array().expect("array").first().expect("non-empty");
        assert_eq!(first.get("id").and_then(serde_json::Value::as_u64), Some(1));
        assert_eq!(
            first.get("name").and_then(serde_json::Value::as_str),
            Some("HTML Basics")
        );
    }
}
