use crate::catalog::CourseCatalog;
use actix_web::{web, HttpResponse, Responder};
use log::debug;

/// Actix web handler for `GET /api/courses`.
///
/// Reads the shared catalog injected in `main.rs` and answers with the full
/// set. The catalog never changes after startup, so this cannot fail.
pub(crate) async fn process(catalog: web::Data<CourseCatalog>) -> impl Responder {
    let courses = catalog.list();
    debug!("serving {} courses", courses.len());
    HttpResponse::Ok().json(courses)
}
