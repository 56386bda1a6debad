//! Upload form controller.
//!
//! All interaction state of the page lives in one [`UploadForm`] value.
//! Components feed it named events (file picked, user selected, submit,
//! drag gestures, reset) and render whatever it reports back. Nothing here
//! touches the DOM, so every transition is testable on the host.
//!
//! The two deferred effects, the warning auto-dismiss timer and the upload
//! request, are handed out as tickets. A ticket that no longer matches the
//! current generation is ignored when it comes back, so a stale timer or a
//! cancelled request can never overwrite newer state.

use crate::config::{ALLOWED_MIME_TYPES, MAX_FILE_SIZE};
use crate::types::{AppResult, FileInfo, FileRejection, UploadError, UploadResponse};

// =============================================================================
// Validation
// =============================================================================

/// Checks a candidate file against the Excel MIME types and the size limit.
///
/// The type is checked first, so an oversized non-Excel file reports
/// [`FileRejection::InvalidType`].
pub fn validate_file(file: &FileInfo) -> Result<(), FileRejection> {
    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(FileRejection::InvalidType);
    }
    if file.size > MAX_FILE_SIZE {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

// =============================================================================
// State Types
// =============================================================================

/// Lifecycle of the submission, guarding re-entrancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted since the last reset
    #[default]
    Idle,
    /// Request outstanding
    InFlight,
    /// Last request returned a response
    Succeeded,
    /// Last request failed
    Failed,
}

/// What the drop region should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Dragging,
    Uploading,
}

/// A file accepted by the form, with the handle needed to send it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<H> {
    pub info: FileInfo,
    pub handle: H,
}

/// Outcome of offering a file to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileSelection {
    Accepted,
    Rejected(FileRejection),
    /// A submission is in flight; the form does not take new files.
    Locked,
}

/// Identifies one showing of the "select a username" warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarningTicket(u64);

/// Identifies one upload request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Everything needed to perform the upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest<H> {
    pub ticket: SubmissionTicket,
    pub file: H,
    pub username: String,
}

/// Side effect the caller must carry out after [`UploadForm::submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction<H> {
    /// No file selected, or a request is already in flight.
    Ignored,
    /// Show the warning and call [`UploadForm::dismiss_warning`] with the
    /// ticket once `USER_WARNING_TIMEOUT_MS` has elapsed.
    ShowUserWarning(WarningTicket),
    /// Send the request and report back through [`UploadForm::finish_upload`].
    Upload(UploadRequest<H>),
}

// =============================================================================
// Controller
// =============================================================================

/// State of the upload form. `H` is the opaque file handle
/// (`web_sys::File` in the browser).
#[derive(Clone, Debug)]
pub struct UploadForm<H> {
    file: Option<SelectedFile<H>>,
    user: String,
    dragging: bool,
    submission: SubmissionStatus,
    error: Option<String>,
    result: Option<UploadResponse>,
    warning_visible: bool,
    warning_generation: u64,
    submission_generation: u64,
}

impl<H> Default for UploadForm<H> {
    fn default() -> Self {
        Self {
            file: None,
            user: String::new(),
            dragging: false,
            submission: SubmissionStatus::Idle,
            error: None,
            result: None,
            warning_visible: false,
            warning_generation: 0,
            submission_generation: 0,
        }
    }
}

impl<H: Clone> UploadForm<H> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Offers a file picked or dropped by the user.
    ///
    /// A rejected file leaves the previous selection in place.
    pub fn select_file(&mut self, info: FileInfo, handle: H) -> FileSelection {
        if self.is_uploading() {
            return FileSelection::Locked;
        }
        match validate_file(&info) {
            Ok(()) => {
                self.file = Some(SelectedFile { info, handle });
                self.error = None;
                self.result = None;
                FileSelection::Accepted
            }
            Err(rejection) => {
                self.error = Some(rejection.to_string());
                FileSelection::Rejected(rejection)
            }
        }
    }

    /// Sets the username. Always hides the warning.
    pub fn select_user(&mut self, name: impl Into<String>) {
        self.user = name.into();
        self.warning_visible = false;
    }

    pub fn drag_over(&mut self) {
        if self.accepts_drag_over() {
            self.dragging = true;
        }
    }

    /// Whether a `dragover` would change anything. False while already
    /// dragging or while a submission is in flight.
    pub fn accepts_drag_over(&self) -> bool {
        !self.dragging && !self.is_uploading()
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Ends a drag gesture. Only the first dropped file is considered;
    /// returns `None` when nothing was dropped.
    pub fn drop_files<I>(&mut self, files: I) -> Option<FileSelection>
    where
        I: IntoIterator<Item = (FileInfo, H)>,
    {
        self.dragging = false;
        let (info, handle) = files.into_iter().next()?;
        Some(self.select_file(info, handle))
    }

    /// Starts a submission, or explains why it cannot start.
    pub fn submit(&mut self) -> SubmitAction<H> {
        let Some(file) = &self.file else {
            return SubmitAction::Ignored;
        };
        if self.is_uploading() {
            return SubmitAction::Ignored;
        }

        if self.user.is_empty() {
            self.warning_generation += 1;
            self.warning_visible = true;
            return SubmitAction::ShowUserWarning(WarningTicket(self.warning_generation));
        }

        let request = UploadRequest {
            ticket: SubmissionTicket(self.submission_generation + 1),
            file: file.handle.clone(),
            username: self.user.clone(),
        };
        self.submission_generation += 1;
        self.submission = SubmissionStatus::InFlight;
        self.dragging = false;
        self.error = None;
        self.result = None;
        SubmitAction::Upload(request)
    }

    /// Timer callback for the warning. Returns whether it hid anything.
    pub fn dismiss_warning(&mut self, ticket: WarningTicket) -> bool {
        if ticket.0 != self.warning_generation || !self.warning_visible {
            return false;
        }
        self.warning_visible = false;
        true
    }

    /// Records the outcome of a request. Outcomes for abandoned requests
    /// are dropped; returns whether this one was applied.
    pub fn finish_upload(
        &mut self,
        ticket: SubmissionTicket,
        outcome: AppResult<UploadResponse>,
    ) -> bool {
        if ticket.0 != self.submission_generation
            || self.submission != SubmissionStatus::InFlight
        {
            return false;
        }
        match outcome {
            Ok(response) => {
                self.result = Some(response);
                self.error = None;
                self.submission = SubmissionStatus::Succeeded;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.result = None;
                self.submission = SubmissionStatus::Failed;
            }
        }
        true
    }

    /// Clears the form back to its initial state, abandoning any request
    /// in flight.
    pub fn reset(&mut self) {
        // Generations keep counting so outstanding tickets stay stale.
        *self = Self {
            warning_generation: self.warning_generation,
            submission_generation: self.submission_generation + 1,
            ..Self::default()
        };
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn selected_file(&self) -> Option<&SelectedFile<H>> {
        self.file.as_ref()
    }

    pub fn file_info(&self) -> Option<&FileInfo> {
        self.file.as_ref().map(|f| &f.info)
    }

    /// Selected username; empty when none.
    pub fn selected_user(&self) -> &str {
        &self.user
    }

    pub fn has_user(&self) -> bool {
        !self.user.is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_uploading(&self) -> bool {
        self.submission == SubmissionStatus::InFlight
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission
    }

    pub fn upload_state(&self) -> UploadState {
        if self.is_uploading() {
            UploadState::Uploading
        } else if self.dragging {
            UploadState::Dragging
        } else {
            UploadState::Idle
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&UploadResponse> {
        self.result.as_ref()
    }

    pub fn warning_visible(&self) -> bool {
        self.warning_visible
    }

    /// Whether pressing submit would actually send the file.
    pub fn ready_to_submit(&self) -> bool {
        self.file.is_some() && self.has_user() && !self.is_uploading()
    }

    /// True when nothing differs from a freshly created form.
    #[cfg(test)]
    pub fn is_pristine(&self) -> bool {
        self.file.is_none()
            && self.user.is_empty()
            && !self.dragging
            && self.submission == SubmissionStatus::Idle
            && self.error.is_none()
            && self.result.is_none()
            && !self.warning_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::USER_LIST;

    const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    fn xlsx(name: &str, size: u64) -> FileInfo {
        FileInfo::new(name, size, XLSX)
    }

    fn form_with_file() -> UploadForm<&'static str> {
        let mut form = UploadForm::new();
        assert_eq!(form.select_file(xlsx("tickets.xlsx", 2048), "blob"), FileSelection::Accepted);
        form
    }

    fn start_upload(form: &mut UploadForm<&'static str>) -> UploadRequest<&'static str> {
        match form.submit() {
            SubmitAction::Upload(request) => request,
            other => panic!("expected upload, got {:?}", other),
        }
    }

    #[test]
    fn test_disallowed_type_is_rejected_regardless_of_size() {
        for size in [0, 1024, MAX_FILE_SIZE, MAX_FILE_SIZE + 1, u64::MAX] {
            for mime in ["text/csv", "", "application/pdf", "application/vnd.ms-excel "] {
                let file = FileInfo::new("f", size, mime);
                assert_eq!(validate_file(&file), Err(FileRejection::InvalidType));
            }
        }
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        for mime in ALLOWED_MIME_TYPES {
            assert_eq!(validate_file(&FileInfo::new("f", 0, mime)), Ok(()));
            assert_eq!(validate_file(&FileInfo::new("f", MAX_FILE_SIZE, mime)), Ok(()));
            assert_eq!(
                validate_file(&FileInfo::new("f", MAX_FILE_SIZE + 1, mime)),
                Err(FileRejection::TooLarge)
            );
        }
    }

    #[test]
    fn test_accepting_file_clears_error_and_result() {
        let mut form = form_with_file();
        form.select_user(USER_LIST[0].name);
        let request = start_upload(&mut form);
        form.finish_upload(request.ticket, Ok(UploadResponse::default()));
        form.select_file(FileInfo::new("notes.txt", 10, "text/plain"), "txt");
        assert!(form.error().is_some());

        assert_eq!(form.select_file(xlsx("next.xlsx", 10), "next"), FileSelection::Accepted);
        assert_eq!(form.error(), None);
        assert_eq!(form.result(), None);
        assert_eq!(form.file_info().map(|f| f.name.as_str()), Some("next.xlsx"));
    }

    #[test]
    fn test_rejection_keeps_previous_file() {
        let mut form = form_with_file();
        let outcome = form.select_file(xlsx("huge.xlsx", MAX_FILE_SIZE + 1), "huge");

        assert_eq!(outcome, FileSelection::Rejected(FileRejection::TooLarge));
        assert_eq!(form.error(), Some("File size must be less than 10MB"));
        assert_eq!(form.selected_file().map(|f| f.handle), Some("blob"));
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut form: UploadForm<&'static str> = UploadForm::new();
        form.select_user(USER_LIST[1].name);
        let before = form.clone();

        assert_eq!(form.submit(), SubmitAction::Ignored);
        assert_eq!(form.selected_user(), before.selected_user());
        assert_eq!(form.submission_status(), SubmissionStatus::Idle);
        assert!(!form.warning_visible());
    }

    #[test]
    fn test_submit_without_user_shows_warning_until_timer_fires() {
        let mut form = form_with_file();

        let SubmitAction::ShowUserWarning(ticket) = form.submit() else {
            panic!("expected warning");
        };
        assert!(form.warning_visible());
        assert_eq!(form.submission_status(), SubmissionStatus::Idle);

        assert!(form.dismiss_warning(ticket));
        assert!(!form.warning_visible());
    }

    #[test]
    fn test_selecting_user_preempts_warning_timer() {
        let mut form = form_with_file();
        let SubmitAction::ShowUserWarning(ticket) = form.submit() else {
            panic!("expected warning");
        };

        form.select_user(USER_LIST[2].name);
        assert!(!form.warning_visible());
        assert!(!form.dismiss_warning(ticket));
        assert!(!form.warning_visible());
    }

    #[test]
    fn test_stale_warning_timer_does_not_hide_newer_warning() {
        let mut form = form_with_file();
        let SubmitAction::ShowUserWarning(first) = form.submit() else {
            panic!("expected warning");
        };
        let SubmitAction::ShowUserWarning(second) = form.submit() else {
            panic!("expected warning");
        };
        assert_ne!(first, second);

        assert!(!form.dismiss_warning(first));
        assert!(form.warning_visible());
        assert!(form.dismiss_warning(second));
    }

    #[test]
    fn test_warning_ticket_survives_reset_as_stale() {
        let mut form = form_with_file();
        let SubmitAction::ShowUserWarning(old) = form.submit() else {
            panic!("expected warning");
        };
        form.reset();
        form.select_file(xlsx("again.xlsx", 1), "again");
        let SubmitAction::ShowUserWarning(new) = form.submit() else {
            panic!("expected warning");
        };

        assert_ne!(old, new);
        assert!(!form.dismiss_warning(old));
        assert!(form.warning_visible());
    }

    #[test]
    fn test_successful_upload() {
        let mut form = form_with_file();
        form.select_user("Sutapa Roy");
        let request = start_upload(&mut form);

        assert_eq!(request.username, "Sutapa Roy");
        assert_eq!(request.file, "blob");
        assert!(form.is_uploading());
        assert_eq!(form.upload_state(), UploadState::Uploading);

        let response: UploadResponse =
            serde_json::from_str(r#"{"message":"ok","data":[1,2,3]}"#).unwrap();
        assert!(form.finish_upload(request.ticket, Ok(response)));

        assert!(!form.is_uploading());
        assert_eq!(form.submission_status(), SubmissionStatus::Succeeded);
        assert_eq!(form.result().and_then(|r| r.records_processed()), Some(3));
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_http_failure_keeps_file_and_user_for_retry() {
        let mut form = form_with_file();
        form.select_user("Subhasini T S");
        let request = start_upload(&mut form);

        let err = UploadError::Http {
            status: 500,
            status_text: "Server Error".to_string(),
        };
        assert!(form.finish_upload(request.ticket, Err(err)));

        assert_eq!(form.error(), Some("Upload failed: 500 Server Error"));
        assert_eq!(form.result(), None);
        assert!(!form.is_uploading());
        assert_eq!(form.submission_status(), SubmissionStatus::Failed);
        assert_eq!(form.selected_user(), "Subhasini T S");
        assert!(form.selected_file().is_some());

        let retry = start_upload(&mut form);
        assert_eq!(form.error(), None);
        assert_ne!(retry.ticket, request.ticket);
    }

    #[test]
    fn test_network_failure_uses_generic_message_when_empty() {
        let mut form = form_with_file();
        form.select_user("Sutapa Roy");
        let request = start_upload(&mut form);

        form.finish_upload(request.ticket, Err(UploadError::network("")));
        assert_eq!(form.error(), Some(UploadError::GENERIC_MESSAGE));
    }

    #[test]
    fn test_single_flight() {
        let mut form = form_with_file();
        form.select_user("Sutapa Roy");
        let request = start_upload(&mut form);

        assert_eq!(form.submit(), SubmitAction::Ignored);
        assert_eq!(
            form.select_file(xlsx("other.xlsx", 5), "other"),
            FileSelection::Locked
        );
        form.drag_over();
        assert!(!form.is_dragging());

        assert!(form.finish_upload(request.ticket, Ok(UploadResponse::default())));
        assert!(!form.finish_upload(request.ticket, Ok(UploadResponse::default())));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        // mid-fill
        let mut form = form_with_file();
        form.select_user("Sutapa Roy");
        form.reset();
        assert!(form.is_pristine());

        // after error
        let mut form = form_with_file();
        form.select_file(FileInfo::new("x.csv", 1, "text/csv"), "csv");
        form.submit();
        form.reset();
        assert!(form.is_pristine());

        // after success
        let mut form = form_with_file();
        form.select_user("Namrata Srivastava");
        let request = start_upload(&mut form);
        form.finish_upload(request.ticket, Ok(UploadResponse::default()));
        form.reset();
        assert!(form.is_pristine());
    }

    #[test]
    fn test_reset_abandons_in_flight_upload() {
        let mut form = form_with_file();
        form.select_user("Sutapa Roy");
        let request = start_upload(&mut form);

        form.reset();
        assert!(!form.is_uploading());
        assert!(!form.finish_upload(request.ticket, Err(UploadError::network("aborted"))));
        assert!(form.is_pristine());
    }

    #[test]
    fn test_drop_with_no_files_only_ends_drag() {
        let mut form = form_with_file();
        form.select_user("Sutapa Roy");
        form.drag_over();
        assert_eq!(form.upload_state(), UploadState::Dragging);

        let before = form.clone();
        assert_eq!(form.drop_files(std::iter::empty()), None);

        assert!(!form.is_dragging());
        assert_eq!(form.selected_file(), before.selected_file());
        assert_eq!(form.selected_user(), before.selected_user());
        assert_eq!(form.error(), before.error());
        assert_eq!(form.upload_state(), UploadState::Idle);
    }

    #[test]
    fn test_drop_takes_first_file_only() {
        let mut form: UploadForm<&'static str> = UploadForm::new();
        form.drag_over();
        let outcome = form.drop_files(vec![
            (xlsx("first.xlsx", 1), "first"),
            (xlsx("second.xlsx", 1), "second"),
        ]);

        assert_eq!(outcome, Some(FileSelection::Accepted));
        assert!(!form.is_dragging());
        assert_eq!(form.selected_file().map(|f| f.handle), Some("first"));
    }

    #[test]
    fn test_drag_leave() {
        let mut form: UploadForm<()> = UploadForm::new();
        form.drag_over();
        assert!(form.is_dragging());
        form.drag_leave();
        assert!(!form.is_dragging());
    }

    #[test]
    fn test_drag_over_only_accepted_when_it_changes_state() {
        let mut form = form_with_file();
        assert!(form.accepts_drag_over());
        form.drag_over();
        assert!(!form.accepts_drag_over());
        form.drag_leave();

        form.select_user("Sutapa Roy");
        start_upload(&mut form);
        assert!(!form.accepts_drag_over());
        form.drag_over();
        assert!(!form.is_dragging());
        assert!(!form.accepts_drag_over());
    }

    #[test]
    fn test_ready_to_submit() {
        let mut form = form_with_file();
        assert!(!form.ready_to_submit());
        form.select_user("Sutapa Roy");
        assert!(form.ready_to_submit());
        start_upload(&mut form);
        assert!(!form.ready_to_submit());
    }
}
