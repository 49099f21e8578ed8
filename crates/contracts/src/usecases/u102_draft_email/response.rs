use serde::{Deserialize, Serialize};

/// Result of `POST /api/ai/draft-email`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailDraftResponse {
    pub subject: String,
    pub body: String,
}

impl EmailDraftResponse {
    /// Text placed on the clipboard: subject line, blank line, body
    pub fn clipboard_text(&self) -> String {
        format!("Asunto: {}\n\n{}", self.subject, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_text() {
        let draft = EmailDraftResponse {
            subject: "Propuesta".into(),
            body: "Estimado Juan,\nSaludos".into(),
        };
        assert_eq!(draft.clipboard_text(), "Asunto: Propuesta\n\nEstimado Juan,\nSaludos");
    }
}
