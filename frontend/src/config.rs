//! Application configuration.
//!
//! Centralized configuration for the ticket updater frontend.
//! Everything is fixed at compile time; the backend URL can be
//! overridden with `TICKET_UPDATER_BACKEND_URL` when building.

use crate::types::User;

/// Backend API base URL.
///
/// The ticket update service receiving the Excel sheets.
pub const BACKEND_URL: &str = match option_env!("TICKET_UPDATER_BACKEND_URL") {
    Some(url) => url,
    None => "https://ticket-update-backend.vercel.app",
};

/// Path of the multipart upload endpoint, relative to [`BACKEND_URL`].
pub const UPLOAD_PATH: &str = "/upload-excel";

/// Path of the sample workbook download, relative to [`BACKEND_URL`].
pub const SAMPLE_FILE_PATH: &str = "/get-sample-file";

/// Title shown in the header and the browser tab.
pub const APP_TITLE: &str = "R1xchange Ticket Updater";

/// Maximum file size for upload (in bytes).
///
/// 10 MiB, inclusive.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// How long the "select a username" warning stays on screen.
pub const USER_WARNING_TIMEOUT_MS: u32 = 3_000;

/// MIME types accepted by the upload form (.xlsx, .xls, .xlsm).
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "application/vnd.ms-excel.sheet.macroEnabled.12",
];

/// Extensions offered by the native file picker. Only a hint; acceptance
/// is decided on the MIME type.
pub const FILE_INPUT_ACCEPT: &str = ".xlsx,.xls,.xlsm";

/// Users allowed to submit sheets, in dropdown order.
pub const USER_LIST: [User; 3] = [
    User { id: 1, name: "Sutapa Roy" },
    User { id: 2, name: "Subhasini T S" },
    User { id: 3, name: "Namrata Srivastava" },
];

/// Full URL of the upload endpoint.
pub fn upload_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), UPLOAD_PATH)
}

/// Full URL of the sample file download.
pub fn sample_file_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), SAMPLE_FILE_PATH)
}
