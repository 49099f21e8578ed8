use serde::{Deserialize, Serialize};

/// Result of the multipart `POST /api/data/import`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub orders_imported: u64,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_response_parses_backend_payload() {
        let parsed: ImportResponse =
            serde_json::from_str(r#"{"message":"Importación exitosa","ordersImported":42}"#).unwrap();
        assert_eq!(parsed.orders_imported, 42);
        assert_eq!(parsed.message.as_deref(), Some("Importación exitosa"));
    }
}
