use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Wire shape for every error the API returns. `message` carries the
/// dotted domain error code, `name` the coarse error family.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
