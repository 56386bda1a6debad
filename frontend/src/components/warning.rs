use leptos::*;

use crate::components::FormSignal;
use crate::UploadError;

/// Floating toast shown while the "no username" warning is active.
#[component]
pub fn UserWarning(form: FormSignal) -> impl IntoView {
    view! {
        <Show
            when=move || form.with(|f| f.warning_visible())
            fallback=|| view! { }
        >
            <div class="floating-warning" role="alert">
                <span class="warning-icon">"⚠️"</span>
                {UploadError::NoUserSelected.to_string()}
            </div>
        </Show>
    }
}
