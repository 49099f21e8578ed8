use serde::{Deserialize, Serialize};

/// Body of `POST /api/ai/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Orders the conversation is scoped to
    pub order_ids: Vec<i64>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_keys() {
        let request = ChatRequest {
            order_ids: vec![1001, 1002],
            message: "¿Qué compra más?".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["orderIds"], serde_json::json!([1001, 1002]));
        assert_eq!(value["message"], "¿Qué compra más?");
    }
}
