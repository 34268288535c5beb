//! OpenAI chat-completion wire types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format: String,
}

impl ResponseFormat {
    /// Constrain the reply to a single JSON object.
    pub fn json_object() -> Self {
        Self {
            format: "json_object".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReplyMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReplyMessage {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelList {
    pub data: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_extracts_content() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"ok\": true}"}, "finish_reason": "stop"}
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content, r#"{"ok": true}"#);
    }

    #[test]
    fn test_chat_request_serializes_response_format() {
        let request = ChatRequest {
            model: "gpt-5-mini".to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: "You are an assistant.".to_string(),
            }],
            response_format: Some(ResponseFormat::json_object()),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_model_list_count() {
        let json = r#"{"object": "list", "data": [{"id": "gpt-5-mini"}, {"id": "gpt-4o"}]}"#;
        let models: ModelList = serde_json::from_str(json).unwrap();
        assert_eq!(models.data.len(), 2);
        assert_eq!(models.data[0].id, "gpt-5-mini");
    }
}
