use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Backend identifier of a client (database sequence value)
pub type ClientId = i64;

// ============================================================================
// Aggregate
// ============================================================================

/// Client of the sales portfolio, as returned by `/api/clients`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}

impl Client {
    /// Label for the selector: `name (email)` or just `name`
    pub fn display_label(&self) -> String {
        match self.contact_email.as_deref().filter(|e| !e.is_empty()) {
            Some(email) => format!("{} ({})", self.name, email),
            None => self.name.clone(),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of create / update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub name: String,
    pub contact_email: String,
}

impl ClientDto {
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            contact_email: client.contact_email.clone().unwrap_or_default(),
        }
    }

    /// Trimmed copy, ready to be sent
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
        }
    }

    /// Name is required, email is optional but must look like one
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre de la empresa es obligatorio".to_string());
        }
        let email = self.contact_email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err("El correo de contacto no es válido".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_deserializes_camel_case() {
        let json = r#"{"id":1,"name":"TechSolutions CR","industry":"Tecnología","contactEmail":"contacto@techsolutions.cr","tier":"Gold"}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, 1);
        assert_eq!(client.contact_email.as_deref(), Some("contacto@techsolutions.cr"));
        assert_eq!(client.tier.as_deref(), Some("Gold"));
    }

    #[test]
    fn test_client_optional_fields_may_be_missing() {
        let client: Client = serde_json::from_str(r#"{"id":9,"name":"Tech Corp"}"#).unwrap();
        assert_eq!(client.contact_email, None);
        assert_eq!(client.display_label(), "Tech Corp");
    }

    #[test]
    fn test_display_label_with_email() {
        let client = Client {
            id: 2,
            name: "Distribuidora El Sol".into(),
            industry: None,
            contact_email: Some("ventas@elsol.com".into()),
            tier: None,
        };
        assert_eq!(client.display_label(), "Distribuidora El Sol (ventas@elsol.com)");
    }

    #[test]
    fn test_dto_serializes_contact_email_key() {
        let dto = ClientDto {
            name: "Acme".into(),
            contact_email: "a@acme.com".into(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["contactEmail"], "a@acme.com");
        assert_eq!(value["name"], "Acme");
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = ClientDto::default();
        assert!(dto.validate().is_err());

        dto.name = "  Acme ".into();
        assert!(dto.validate().is_ok());

        dto.contact_email = "not-an-email".into();
        assert!(dto.validate().is_err());

        dto.contact_email = "ventas@acme.com".into();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.normalized().name, "Acme");
    }
}
