//! HTTP DTOs for the decide endpoint.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::decision::{Question, Verdict};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/decide`.
///
/// Only a JSON object is accepted; `question` must be a JSON string and
/// unknown fields are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct DecideRequest {
    pub question: Question,
}

// The derived impl would also accept `["..."]` (sequence form).
impl<'de> Deserialize<'de> for DecideRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DecideRequestVisitor)
    }
}

struct DecideRequestVisitor;

impl<'de> Visitor<'de> for DecideRequestVisitor {
    type Value = DecideRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with a string 'question' field")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut question: Option<Question> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "question" {
                if question.is_some() {
                    return Err(de::Error::duplicate_field("question"));
                }
                question = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        question
            .map(|question| DecideRequest { question })
            .ok_or_else(|| de::Error::missing_field("question"))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful decision, serialized as `{"answer":"YES"}` or `{"answer":"NO"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecideResponse {
    pub answer: Verdict,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            code: "PAYLOAD_TOO_LARGE".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("No route for {}", path),
        }
    }
}
