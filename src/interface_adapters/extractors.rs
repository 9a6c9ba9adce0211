use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use axum::response::IntoResponse;

use crate::domain::Failure;

// JSON body extractor whose rejections are raised as framework failures.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Failure))]
pub struct JsonBody<T>(pub T);

// Path parameter extractor whose rejections are raised as framework failures.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Failure))]
pub struct PathParam<T>(pub T);

// Guard for handlers that can only answer with JSON: requests whose `Accept`
// header rules JSON out are raised as not-acceptable failures.
#[derive(Debug, Clone, Copy)]
pub struct AcceptsJson;

impl<S> FromRequestParts<S> for AcceptsJson
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(accept) = parts.headers.get(ACCEPT) else {
            return Ok(AcceptsJson);
        };

        let accept = accept
            .to_str()
            .map_err(|_| Failure::bad_request("accept header is not valid ascii"))?;

        if accepts_json(accept) {
            Ok(AcceptsJson)
        } else {
            Err(Failure::not_acceptable(format!(
                "cannot produce application/json for accept: {accept}"
            )))
        }
    }
}

// True when any media range in the header matches application/json with a
// non-zero quality.
fn accepts_json(accept: &str) -> bool {
    accept.split(',').any(|range| {
        let mut params = range.split(';').map(str::trim);
        let media = params.next().unwrap_or_default().to_ascii_lowercase();
        let rejected = params.any(|param| {
            param
                .strip_prefix("q=")
                .and_then(|q| q.parse::<f32>().ok())
                .is_some_and(|q| q <= 0.0)
        });
        !rejected && matches!(media.as_str(), "application/json" | "application/*" | "*/*")
    })
}

// Decoder rejections keep their own response as the partial response, so any
// headers axum set on it survive translation.
impl From<JsonRejection> for Failure {
    fn from(rejection: JsonRejection) -> Self {
        let error_code = i32::from(rejection.status().as_u16());
        let detail = rejection.body_text();
        Failure::reader(error_code, detail).with_response(rejection.into_response())
    }
}

impl From<PathRejection> for Failure {
    fn from(rejection: PathRejection) -> Self {
        let error_code = i32::from(rejection.status().as_u16());
        let detail = rejection.body_text();
        Failure::reader(error_code, detail).with_response(rejection.into_response())
    }
}
