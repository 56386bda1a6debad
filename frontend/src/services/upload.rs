//! HTTP service uploading Excel sheets to the ticket update backend.

use gloo_net::http::Request;
use gloo_utils::errors::JsError;
use web_sys::{AbortSignal, File, FormData};

use crate::config::upload_url;
use crate::types::{AppResult, FileInfo, UploadError, UploadResponse};

/// Reads the metadata the form validates from a browser file.
pub fn describe_file(file: &File) -> FileInfo {
    FileInfo::new(file.name(), file.size().max(0.0) as u64, file.type_())
}

/// Uploads `file` for `username` as `multipart/form-data`.
///
/// Passing an abort signal lets the caller cancel the request; a cancelled
/// request resolves to [`UploadError::Network`].
pub async fn upload_excel(
    file: &File,
    username: &str,
    backend_url: &str,
    abort: Option<&AbortSignal>,
) -> AppResult<UploadResponse> {
    let form_data = FormData::new()
        .map_err(|e| UploadError::network(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| UploadError::network(format!("Failed to append file: {:?}", e)))?;
    form_data
        .append_with_str("username", username)
        .map_err(|e| UploadError::network(format!("Failed to append username: {:?}", e)))?;

    let url = upload_url(backend_url);
    log::debug!("POST {} ({} bytes, user {})", url, file.size(), username);

    let response = Request::post(&url)
        .abort_signal(abort)
        .body(form_data)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if let Some(err) = status_error(response.status(), &response.status_text()) {
        return Err(err);
    }

    response.json::<UploadResponse>().await.map_err(network_error)
}

/// Maps a non-2xx status to [`UploadError::Http`].
fn status_error(status: u16, status_text: &str) -> Option<UploadError> {
    if (200..300).contains(&status) {
        return None;
    }
    Some(UploadError::Http {
        status,
        status_text: status_text.to_string(),
    })
}

fn network_error(err: gloo_net::Error) -> UploadError {
    let description = match err {
        gloo_net::Error::JsError(JsError { message, .. }) => message,
        other => other.to_string(),
    };
    UploadError::network(description)
}
