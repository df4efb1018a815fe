use std::collections::HashMap;

use axum::http::HeaderMap;
use serde_json::{Map, Value};

use crate::catalog::UnknownService;
use crate::contact::{Draft, Field};

#[derive(Debug)]
pub enum IntakeError {
    Malformed(String),
    /// The service control carried a value outside the catalog. `draft`
    /// holds every other field, with no service selected.
    UnknownService {
        draft: Draft,
        source: UnknownService,
    },
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Malformed(msg) => write!(f, "{msg}"),
            IntakeError::UnknownService { source, .. } => write!(f, "{source}"),
        }
    }
}

/// Parse a request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Map<String, Value>, String> {
    let ct = content_type.unwrap_or("application/x-www-form-urlencoded");

    let value: Value = if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)?
    } else if ct.contains("multipart/form-data") {
        return Err("multipart".to_string());
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))?
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err("Expected an object of form fields".to_string()),
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    let pairs: HashMap<String, String> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k, Value::String(v));
    }
    Ok(Value::Object(map))
}

/// Parse multipart form data using multer.
pub async fn parse_multipart(
    headers: &HeaderMap,
    body: bytes::Bytes,
) -> Result<Map<String, Value>, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        map.insert(name, Value::String(value));
    }

    Ok(map)
}

/// Build a draft by applying one field update per known form control.
/// Keys that are not form controls are ignored; absent controls stay empty.
pub fn draft_from_fields(fields: &Map<String, Value>) -> Result<Draft, IntakeError> {
    let mut draft = Draft::default();
    let mut unknown = None;

    for (key, value) in fields {
        let Ok(field) = key.parse::<Field>() else {
            continue;
        };
        let text = match value {
            Value::String(s) => s.as_str(),
            Value::Null => "",
            _ => {
                return Err(IntakeError::Malformed(format!(
                    "Field '{key}' must be a string"
                )));
            }
        };
        if let Err(e) = draft.update(field, text) {
            unknown = Some(e);
        }
    }

    match unknown {
        Some(source) => Err(IntakeError::UnknownService { draft, source }),
        None => Ok(draft),
    }
}

/// Read the submitted fields from any supported body encoding.
pub async fn parse_request(
    headers: &HeaderMap,
    body: bytes::Bytes,
) -> Result<Map<String, Value>, String> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parse_multipart(headers, body).await
    } else {
        parse_body(content_type, &body)
    }
}
