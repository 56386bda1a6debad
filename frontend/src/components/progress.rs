use leptos::*;

use crate::components::FormSignal;

#[component]
pub fn UploadProgress(form: FormSignal) -> impl IntoView {
    view! {
        <Show
            when=move || form.with(|f| f.is_uploading())
            fallback=|| view! { }
        >
            <div class="progress-section show" id="progressSection">
                <div class="spinner"></div>
                <span class="progress-text">"Uploading file..."</span>
            </div>
        </Show>
    }
}
