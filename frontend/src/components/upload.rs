//! Upload section: wires the form controller to the DOM.
//!
//! Owns the two deferred effects of the form, the warning timer and the
//! in-flight request, and hands every other decision to [`UploadForm`].

use gloo_timers::callback::Timeout;
use leptos::*;
use web_sys::{AbortController, File};

use crate::components::{
    DropZone, FormSignal, UploadDetails, UploadProgress, UploadResultPanel, UserSelect,
    UserWarning,
};
use crate::services::{describe_file, upload_excel};
use crate::{
    sample_file_url, FileSelection, SubmitAction, UploadForm, UploadRequest, BACKEND_URL,
    USER_WARNING_TIMEOUT_MS,
};

#[component]
pub fn UploadSection() -> impl IntoView {
    let form: FormSignal = create_rw_signal(UploadForm::new());
    let file_input = create_node_ref::<html::Input>();
    // Replacing the stored timeout drops, and so cancels, the previous one.
    let warning_timer = store_value(None::<Timeout>);
    let in_flight = store_value(None::<AbortController>);

    let on_file = Callback::new(move |file: File| {
        let info = describe_file(&file);
        let name = info.name.clone();
        log_selection(&name, form.try_update(|f| f.select_file(info, file)));
    });

    let on_drop = Callback::new(move |file: Option<File>| {
        let candidate = file.map(|file| (describe_file(&file), file));
        let name = candidate.as_ref().map(|(info, _)| info.name.clone());
        let outcome = form.try_update(|f| f.drop_files(candidate)).flatten();
        if let Some(name) = name {
            log_selection(&name, outcome);
        }
    });

    let on_submit = Callback::new(move |_: ()| {
        match form.try_update(|f| f.submit()) {
            Some(SubmitAction::ShowUserWarning(ticket)) => {
                log::warn!("⚠️  Upload blocked: no username selected");
                let timer = Timeout::new(USER_WARNING_TIMEOUT_MS, move || {
                    form.update(|f| {
                        f.dismiss_warning(ticket);
                    });
                });
                warning_timer.set_value(Some(timer));
            }
            Some(SubmitAction::Upload(request)) => start_upload(form, in_flight, request),
            Some(SubmitAction::Ignored) | None => {}
        }
    });

    let on_cancel = Callback::new(move |_: ()| {
        let mut pending = None;
        in_flight.update_value(|controller| pending = controller.take());
        if let Some(controller) = pending {
            log::info!("🛑 Upload cancelled");
            controller.abort();
        }
        warning_timer.set_value(None);
        form.update(|f| f.reset());
        // Lets the same file be picked again.
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    });

    view! {
        <div class="upload-container">
            <UserWarning form=form/>

            <UserSelect form=form/>

            <DropZone
                form=form
                file_input=file_input
                on_file=on_file
                on_drop=on_drop
            />

            <div class="sample-link">
                <a href=sample_file_url(BACKEND_URL)>"Download sample file"</a>
            </div>

            <Show
                when=move || form.with(|f| f.error().is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || form.with(|f| f.error().unwrap_or_default().to_string())}
                </div>
            </Show>

            <Show
                when=move || form.with(|f| f.selected_file().is_some())
                fallback=|| view! { }
            >
                <UploadDetails form=form on_submit=on_submit on_cancel=on_cancel/>
            </Show>

            <UploadResultPanel form=form/>

            <UploadProgress form=form/>
        </div>
    }
}

/// Sends the request described by `request` and reports the outcome back
/// to the form.
fn start_upload(
    form: FormSignal,
    in_flight: StoredValue<Option<AbortController>>,
    request: UploadRequest<File>,
) {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    in_flight.set_value(controller);

    log::info!(
        "📤 Uploading {} for {}...",
        request.file.name(),
        request.username
    );

    spawn_local(async move {
        let outcome = upload_excel(
            &request.file,
            &request.username,
            BACKEND_URL,
            signal.as_ref(),
        )
        .await;

        match &outcome {
            Ok(response) => log::info!(
                "✅ Upload successful! {} records processed",
                response.records_processed().unwrap_or(0)
            ),
            Err(e) => log::error!("❌ Upload failed: {}", e),
        }

        let applied = form
            .try_update(|f| f.finish_upload(request.ticket, outcome))
            .unwrap_or(false);
        if applied {
            in_flight.set_value(None);
        } else {
            log::debug!("Discarded outcome of an abandoned upload");
        }
    });
}

fn log_selection(name: &str, outcome: Option<FileSelection>) {
    match outcome {
        Some(FileSelection::Accepted) => log::info!("📄 File selected: {}", name),
        Some(FileSelection::Rejected(reason)) => {
            log::warn!("File {} rejected: {}", name, reason)
        }
        Some(FileSelection::Locked) => {
            log::debug!("Ignored {} while an upload is in flight", name)
        }
        None => {}
    }
}
