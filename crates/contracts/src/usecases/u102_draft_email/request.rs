use serde::{Deserialize, Serialize};

/// Body of `POST /api/ai/draft-email`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraftRequest {
    pub user_id: i64,
    pub recommendation: String,
}
