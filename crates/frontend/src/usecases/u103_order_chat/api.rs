use contracts::usecases::u103_order_chat::{ChatRequest, ChatResponse};

use crate::shared::api_utils::{post_json, ApiError};
use crate::shared::config::use_mock_data;
use crate::shared::mock_data;

/// Ask the assistant about the client's orders
pub async fn send_message(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::chat_reply());
    }
    post_json("/api/ai/chat", request).await
}
