//! Excel drop zone with drag & drop and a file picker.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::FormSignal;
use crate::{UploadState, FILE_INPUT_ACCEPT};

/// Id of the hidden file input, targeted by the "Browse Files" label.
pub const FILE_INPUT_ID: &str = "uploadFile";

#[component]
pub fn DropZone(
    form: FormSignal,
    /// Hidden input, cleared by the parent on reset
    file_input: NodeRef<html::Input>,
    /// Called with the file chosen in the picker
    on_file: Callback<File>,
    /// Called when a drag ends with a drop; `None` if no file was dropped
    on_drop: Callback<Option<File>>,
) -> impl IntoView {
    let zone_class = move || {
        form.with(|f| {
            let tone = match f.upload_state() {
                UploadState::Dragging => "dragging",
                _ if f.selected_file().is_some() => "selected",
                _ => "idle",
            };
            format!("upload-section {}", tone)
        })
    };

    let caption = move || {
        form.with(|f| {
            f.file_info()
                .map(|info| info.name.clone())
                .unwrap_or_else(|| "Drag and drop files here".to_string())
        })
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        // dragover fires continuously; only notify on the transition
        if form.with_untracked(|f| f.accepts_drag_over()) {
            form.update(|f| f.drag_over());
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        form.update(|f| f.drag_leave());
    };

    let on_drop_files = move |ev: DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        on_drop.call(file);
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.call(file);
        }
    };

    view! {
        <div
            class=zone_class
            id="uploadZone"
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop_files
        >
            <div class="upload-top">
                <div class="upload-icon">"📤"</div>
                <h4 class="upload-text">{caption}</h4>
            </div>

            <hr class="upload-divider"/>

            <div class="upload-bottom">
                <input
                    type="file"
                    id=FILE_INPUT_ID
                    accept=FILE_INPUT_ACCEPT
                    style="display:none"
                    node_ref=file_input
                    prop:disabled=move || form.with(|f| f.is_uploading())
                    on:change=on_change
                />
                <label for=FILE_INPUT_ID class="upload-button">
                    "Browse Files"
                </label>
                <p class="upload-hint">"Excel Files Allowed."</p>
            </div>
        </div>
    }
}
