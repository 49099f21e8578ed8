use contracts::domain::a001_client::{Client, ClientDto, ClientId};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};
use crate::shared::config::use_mock_data;
use crate::shared::mock_data;

/// All clients
pub async fn get_clients() -> Result<Vec<Client>, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::with_client_store(|clients| clients.clone()));
    }
    get_json("/api/clients").await
}

pub async fn create_client(dto: &ClientDto) -> Result<Client, ApiError> {
    if use_mock_data() {
        return Ok(mock_data::with_client_store(|clients| {
            let id = clients.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            let client = mock_client(id, dto, None);
            clients.push(client.clone());
            client
        }));
    }
    post_json("/api/clients", dto).await
}

pub async fn update_client(id: ClientId, dto: &ClientDto) -> Result<Client, ApiError> {
    if use_mock_data() {
        return mock_data::with_client_store(|clients| {
            let entry = clients
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(ApiError::Status {
                    status: 404,
                    message: None,
                })?;
            *entry = mock_client(id, dto, Some(&*entry));
            Ok(entry.clone())
        });
    }
    put_json(&format!("/api/clients/{}", id), dto).await
}

/// Delete a client. The answer is 204, the body is never read
pub async fn delete_client(id: ClientId) -> Result<(), ApiError> {
    if use_mock_data() {
        mock_data::with_client_store(|clients| clients.retain(|c| c.id != id));
        return Ok(());
    }
    delete(&format!("/api/clients/{}", id)).await
}

fn mock_client(id: ClientId, dto: &ClientDto, previous: Option<&Client>) -> Client {
    let email = dto.contact_email.trim();
    Client {
        id,
        name: dto.name.trim().to_string(),
        industry: previous.and_then(|c| c.industry.clone()),
        contact_email: (!email.is_empty()).then(|| email.to_string()),
        tier: previous.and_then(|c| c.tier.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_client_keeps_previous_extras() {
        let previous = mock_data::clients().remove(0);
        let dto = ClientDto {
            name: " Renamed ".into(),
            contact_email: String::new(),
        };
        let client = mock_client(1, &dto, Some(&previous));
        assert_eq!(client.name, "Renamed");
        assert_eq!(client.contact_email, None);
        assert_eq!(client.tier.as_deref(), Some("Gold"));
    }
}
