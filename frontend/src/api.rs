//! Remote course client.
//!
//! One round trip per call, no retry, no timeout, no caching. The status and
//! body mapping lives in `common::api::decode_courses`; this module only adds
//! the gloo-net transport and funnels transport failures into the same
//! `RemoteFetchError` kind.

use common::api::{decode_courses, RemoteFetchError};
use common::model::course::Course;
use gloo_net::http::Request;

/// Backend origin override baked in at build time. Empty means same-origin,
/// which is the normal case when the backend serves the embedded bundle.
fn api_base() -> &'static str {
    option_env!("ROSTER_API_BASE").unwrap_or("")
}

/// Fetches the full course catalog from `{base}/api/courses`.
pub async fn fetch_courses() -> Result<Vec<Course>, RemoteFetchError> {
    let url = format!("{}/api/courses", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(RemoteFetchError::unreachable)?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(RemoteFetchError::unreachable)?;
    decode_courses(status, &body)
}
