use contracts::domain::a001_client::ClientId;

use crate::shared::api_utils::{get_bytes, ApiError};

pub const REPORT_FILE_NAME: &str = "reporte_ejecutivo.pdf";

pub fn report_path(client_id: ClientId) -> String {
    format!("/api/reports/export/{}", client_id)
}

/// PDF report of a client, as raw bytes
pub async fn download_report(client_id: ClientId) -> Result<Vec<u8>, ApiError> {
    get_bytes(&report_path(client_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path() {
        assert_eq!(report_path(7), "/api/reports/export/7");
    }
}
