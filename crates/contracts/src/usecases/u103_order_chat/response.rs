use serde::{Deserialize, Serialize};

/// Result of `POST /api/ai/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
