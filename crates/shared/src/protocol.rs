use serde::{Deserialize, Serialize};

use crate::domain::Tone;

pub const GENERATE_REPLY_PATH: &str = "/api/email/generate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReplyRequest {
    pub email_content: String,
    #[serde(default)]
    pub tone: Tone,
}

impl GenerateReplyRequest {
    pub fn new(email_content: impl Into<String>, tone: Tone) -> Self {
        Self {
            email_content: email_content.into(),
            tone,
        }
    }
}

/// Turns a response body into display text.
///
/// A JSON string body is unwrapped, any other JSON value is re-serialized
/// compactly with its keys in the order the server sent them, and a body
/// that is not JSON is returned as-is. The upstream service publishes no
/// schema, so nothing beyond that is attempted.
pub fn reply_text_from_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_keys() {
        let request = GenerateReplyRequest::new("Hi team", Tone::Professional);
        let value = serde_json::to_value(&request).expect("json");
        assert_eq!(
            value,
            serde_json::json!({ "emailContent": "Hi team", "tone": "professional" })
        );
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        assert_eq!(
            reply_text_from_body("Thanks, see you Monday.\n"),
            "Thanks, see you Monday.\n"
        );
        assert_eq!(reply_text_from_body(""), "");
    }

    #[test]
    fn json_string_body_is_unwrapped() {
        assert_eq!(reply_text_from_body("\"Sounds good\""), "Sounds good");
    }

    #[test]
    fn structured_json_body_is_stringified() {
        let text = reply_text_from_body("{ \"reply\": \"ok\", \"tokens\": 3 }");
        assert_eq!(text, r#"{"reply":"ok","tokens":3}"#);
    }

    #[test]
    fn stringified_objects_keep_server_key_order() {
        let body = r#"{"subject":"Re: Q3","body":"Attached.","meta":{"zeta":1,"alpha":[2,1]}}"#;
        assert_eq!(reply_text_from_body(body), body);
    }
}
