use contracts::usecases::u104_import_sales::ImportResponse;

use crate::shared::api_utils::{post_form, ApiError};
use crate::shared::config::use_mock_data;

/// Upload a sales history CSV
pub async fn import_sales(file: &web_sys::File) -> Result<ImportResponse, ApiError> {
    if use_mock_data() {
        return Ok(ImportResponse {
            orders_imported: 3,
            message: Some(format!("{} (mock)", file.name())),
        });
    }
    let form = web_sys::FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    post_form("/api/data/import", form).await
}
