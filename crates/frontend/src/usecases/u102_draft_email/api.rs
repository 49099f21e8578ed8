use contracts::usecases::u102_draft_email::{EmailDraftRequest, EmailDraftResponse};

use crate::shared::api_utils::{post_json, ApiError};
use crate::shared::config::use_mock_data;
use crate::shared::mock_data;

/// Follow-up email draft for a recommendation
pub async fn draft_email(request: &EmailDraftRequest) -> Result<EmailDraftResponse, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::email_draft());
    }
    post_json("/api/ai/draft-email", request).await
}
