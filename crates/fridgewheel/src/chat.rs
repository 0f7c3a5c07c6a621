//! Chat completion wire types.
//!
//! Requests are serialized exactly as the completion endpoint expects;
//! responses are reduced to the trimmed text of the first choice.

use fridgewheel_core::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default vision-capable model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Errors from a chat completion round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the body, or a generic one
        message: String,
    },

    /// No usable API key has been saved.
    #[error("no API key saved")]
    MissingKey,

    /// The body of a successful response had no usable answer.
    #[error("unexpected response: {0}")]
    MalformedResponse(String),

    /// The request could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
}

/// Where and with which model to send completions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Completion endpoint URL
    pub endpoint: String,
    /// Model name
    pub model: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ChatConfig {
    /// Check the endpoint is an http(s) URL and the model is named.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                field: "chat.endpoint",
                reason: format!("expected an http(s) URL, got {:?}", self.endpoint),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "chat.model",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Build the request body for `prompt` with the configured model.
    #[must_use]
    pub fn request(&self, prompt: Prompt) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            max_tokens: prompt.max_tokens,
            messages: prompt.messages,
        }
    }
}

/// Messages plus a token budget, independent of model and endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Conversation
    pub messages: Vec<ChatMessage>,
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Conversation
    pub messages: Vec<ChatMessage>,
}

/// Message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions
    System,
    /// The person asking
    User,
    /// The model
    Assistant,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author
    pub role: Role,
    /// Body
    pub content: MessageContent,
}

impl ChatMessage {
    /// A user message with plain text.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// A user message made of several parts, e.g. images then text.
    #[must_use]
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }
}

/// Message body: a plain string, or a list of typed parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text
    Text(String),
    /// Mixed content
    Parts(Vec<ContentPart>),
}

/// One piece of a multi-part message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text
    Text {
        /// The text
        text: String,
    },
    /// Image by URL (data URLs included)
    ImageUrl {
        /// Location and detail level
        image_url: ImageUrl,
    },
}

/// Image reference inside a [`ContentPart::ImageUrl`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// `https:` or `data:` URL
    pub url: String,
    /// Resolution the model should look at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

/// Image resolution hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    /// Downscaled, cheap
    Low,
    /// Full resolution
    High,
    /// Let the model decide
    Auto,
}

#[derive(Deserialize)]
struct CompletionBody {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AnswerMessage,
}

#[derive(Deserialize)]
struct AnswerMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Turn a raw HTTP status and body into the answer text.
///
/// Non-success statuses take their message from the body's
/// `error.message` when present, otherwise `API error {status}`.
pub fn parse_chat_response(status: u16, body: &str) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("API error {status}"));
        return Err(ApiError::Status { status, message });
    }

    let parsed: CompletionBody = serde_json::from_str(body)
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| ApiError::MalformedResponse("no choices in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_serializes_as_string() {
        let msg = ChatMessage::user_text("hello");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "user", "content": "hello"})
        );
    }

    #[test]
    fn test_parts_serialize_with_type_tags() {
        let msg = ChatMessage::user_parts(vec![
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: "data:image/png;base64,AAAA".to_string(),
                    detail: Some(ImageDetail::Low),
                },
            },
            ContentPart::Text {
                text: "what is this?".to_string(),
            },
        ]);
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "role": "user",
                "content": [
                    {"type": "image_url", "image_url": {"url": "data:image/png;base64,AAAA", "detail": "low"}},
                    {"type": "text", "text": "what is this?"}
                ]
            })
        );
    }

    #[test]
    fn test_request_uses_configured_model() {
        let config = ChatConfig::default();
        let request = config.request(Prompt {
            max_tokens: 42,
            messages: vec![ChatMessage::user_text("hi")],
        });
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["max_tokens"], 42);
        assert_eq!(value["messages"][0]["content"], "hi");
    }

    #[test]
    fn test_parse_success_trims_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  eggs, milk \n"}},{"message":{"content":"other"}}]}"#;
        assert_eq!(parse_chat_response(200, body).unwrap(), "eggs, milk");
    }

    #[test]
    fn test_parse_error_uses_body_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = parse_chat_response(401, body).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }

    #[test]
    fn test_parse_error_without_body_message() {
        let err = parse_chat_response(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "API error 502");
        let err = parse_chat_response(500, r#"{"error":{}}"#).unwrap_err();
        assert_eq!(err.to_string(), "API error 500");
    }

    #[test]
    fn test_parse_success_without_choices() {
        let err = parse_chat_response(200, r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
        let err = parse_chat_response(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn test_chat_config_validate() {
        assert!(ChatConfig::default().validate().is_ok());
        let bad = ChatConfig {
            endpoint: "ftp://example.com".to_string(),
            ..ChatConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::Invalid {
                field: "chat.endpoint",
                ..
            })
        ));
        let unnamed = ChatConfig {
            model: "  ".to_string(),
            ..ChatConfig::default()
        };
        assert!(unnamed.validate().is_err());
    }
}
