//! Response normalization.
//!
//! Transport code hands over the status code and the body text; these helpers
//! turn that into the typed payload or an `ApiError`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::ApiError;

/// Error body in the FastAPI shape: `{ "detail": ... }`.
///
/// `detail` is a string for most errors and a list of objects for validation
/// errors, so it is kept as a raw JSON value.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a payload-bearing response.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Decode a payload-bearing response, treating an empty or `null` success
/// body as `T::default()`.
///
/// Backends that answer the list call with no body mean "no items".
pub fn decode_json_or_default<T: DeserializeOwned + Default>(
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Decode a response whose success carries no payload.
pub fn decode_empty(status: u16, body: &str) -> Result<(), ApiError> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    Ok(())
}

fn server_error(status: u16, body: &str) -> ApiError {
    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    };
    ApiError::Server { status, detail }
}
