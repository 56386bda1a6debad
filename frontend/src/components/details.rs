use leptos::*;

use crate::components::FormSignal;

/// Summary of the pending upload with the submit and cancel buttons.
#[component]
pub fn UploadDetails(
    form: FormSignal,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let uploading = move || form.with(|f| f.is_uploading());

    let file_name = move || {
        form.with(|f| f.file_info().map(|info| info.name.clone()).unwrap_or_default())
    };
    let file_size = move || {
        form.with(|f| f.file_info().map(|info| info.size_kb()).unwrap_or_default())
    };

    let submit_class = move || {
        if form.with(|f| f.ready_to_submit()) {
            "submit-button"
        } else {
            "submit-button muted"
        }
    };

    view! {
        <div class="upload-details">
            <h5>"Upload Details:"</h5>

            <Show
                when=move || form.with(|f| f.has_user())
                fallback=|| view! { }
            >
                <p class="detail">
                    "User: " {move || form.with(|f| f.selected_user().to_string())}
                </p>
            </Show>
            <p class="detail">"File: " {file_name}</p>
            <p class="detail">"Size: " {file_size} " KB"</p>

            <div class="detail-actions">
                <button
                    class=submit_class
                    disabled=uploading
                    on:click=move |_| on_submit.call(())
                >
                    {move || if uploading() { "Uploading..." } else { "Upload File" }}
                </button>
                <button class="cancel-button" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
